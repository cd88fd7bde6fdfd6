use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use bank_holidays::{
    filter_by_region_bunting, filter_by_year, project_title_date, HolidayResponse, InvalidYear,
    Region, Year,
};
use log::debug;
use serde::Deserialize;

type Data = Arc<HolidayResponse>;

pub fn router(data: Data) -> Router {
    let mut router: Router<Data> = Router::new()
        .route("/holidays/:year", get(handle_holidays))
        .route("/holidays-title-date/:year", get(handle_title_dates));

    for region in Region::ALL {
        router = router
            .route(
                &format!("/{region}"),
                get(move |State(data): State<Data>, Query(query): Query<BuntingQuery>| {
                    handle_region(data, region, query)
                }),
            )
            .route(
                &format!("/{region}.ics"),
                get(move |State(data): State<Data>| handle_region_calendar(data, region)),
            );
    }

    router.with_state(data)
}

#[derive(Deserialize)]
struct BuntingQuery {
    #[serde(default)]
    bunting: bool,
}

fn invalid_year(err: InvalidYear) -> Response {
    debug!("Rejecting request: {err}");
    (StatusCode::BAD_REQUEST, err.to_string()).into_response()
}

async fn handle_holidays(State(data): State<Data>, Path(year): Path<String>) -> Response {
    match year.parse::<Year>() {
        Ok(year) => {
            debug!("Filtering holidays for {year}");
            Json(filter_by_year(&data, year)).into_response()
        }
        Err(err) => invalid_year(err),
    }
}

async fn handle_title_dates(State(data): State<Data>, Path(year): Path<String>) -> Response {
    match year.parse::<Year>() {
        Ok(year) => {
            debug!("Projecting holiday titles and dates for {year}");
            Json(project_title_date(&filter_by_year(&data, year))).into_response()
        }
        Err(err) => invalid_year(err),
    }
}

async fn handle_region(data: Data, region: Region, query: BuntingQuery) -> Response {
    debug!("Filtering {region} holidays with bunting={}", query.bunting);
    Json(filter_by_region_bunting(&data, region, query.bunting)).into_response()
}

async fn handle_region_calendar(data: Data, region: Region) -> Response {
    debug!("Rendering {region} calendar");
    (
        [("content-type", "text/calendar")],
        data.division(region).to_ics().to_string(),
    )
        .into_response()
}
