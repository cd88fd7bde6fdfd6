use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;

use getopts::Options;
use tokio::time::Duration;

use crate::loader::{Source, DEFAULT_SOURCE};

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub address: SocketAddr,
    pub source: Source,
    pub timeout: Duration,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "a",
        "address",
        "Socket address (IP and port) to listen on [Default: 127.0.0.1:8080]",
        "SOCKET_ADDRESS",
    );
    opts.optopt(
        "s",
        "source",
        "URL of the holiday dataset [Default: https://www.gov.uk/bank-holidays.json]",
        "URL",
    );
    opts.optopt(
        "f",
        "file",
        "Load the holiday dataset from a local JSON file instead",
        "PATH",
    );
    opts.optopt(
        "t",
        "timeout",
        "Timeout for fetching the dataset [Default: 30]",
        "SECONDS",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    match try_parse(&opts, args) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
            process::exit(0);
        }
        Err(message) => {
            eprintln!("{message}");
            process::exit(1);
        }
    }
}

/// Returns `Ok(None)` when help was requested.
fn try_parse(opts: &Options, args: Vec<String>) -> Result<Option<Args>, String> {
    let matches = opts.parse(args).map_err(|fail| fail.to_string())?;

    if matches.opt_present("help") {
        return Ok(None);
    }

    let address = matches
        .opt_get_default("address", SocketAddr::from(([127, 0, 0, 1], 8080)))
        .map_err(|err| format!("Provided value for option 'address' is invalid: {err}"))?;

    let source = match (matches.opt_str("source"), matches.opt_str("file")) {
        (Some(_), Some(_)) => {
            return Err("Options 'source' and 'file' cannot be used together".into());
        }
        (Some(url), None) => Source::Url(url),
        (None, Some(path)) => Source::File(PathBuf::from(path)),
        (None, None) => Source::Url(DEFAULT_SOURCE.into()),
    };

    let timeout = matches
        .opt_get_default("timeout", 30)
        .map(Duration::from_secs)
        .map_err(|err| format!("Provided value for option 'timeout' is invalid: {err}"))?;

    Ok(Some(Args {
        address,
        source,
        timeout,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_strs(args: &[&str]) -> Result<Option<Args>, String> {
        try_parse(&opts(), args.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn defaults() {
        let args = parse_strs(&[]).unwrap().unwrap();

        assert_eq!(args.address, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(args.source, Source::Url(DEFAULT_SOURCE.into()));
        assert_eq!(args.timeout, Duration::from_secs(30));
    }

    #[test]
    fn explicit_values() {
        let args = parse_strs(&["-a", "0.0.0.0:3000", "--file", "holidays.json", "-t", "5"])
            .unwrap()
            .unwrap();

        assert_eq!(args.address, SocketAddr::from(([0, 0, 0, 0], 3000)));
        assert_eq!(args.source, Source::File(PathBuf::from("holidays.json")));
        assert_eq!(args.timeout, Duration::from_secs(5));
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse_strs(&["--help", "-t", "nope"]), Ok(None));
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(parse_strs(&["--address", "localhost"]).is_err());
        assert!(parse_strs(&["--timeout", "soon"]).is_err());
        assert!(parse_strs(&["--source", "https://example.com", "--file", "x.json"]).is_err());
        assert!(parse_strs(&["--unknown"]).is_err());
    }
}
