use super::service;
use crate::{
    modules::common::{
        extractors::DbConnection,
        responses::{internal_error_res, SimpleError},
    },
    server::controller::AppState,
};
use axum::{routing::get, Router};
use http::{header, HeaderName, StatusCode};

pub fn create_router() -> Router<AppState> {
    Router::new().route("/car-park", get(car_park_report))
}

/// Downloads the fleet state report as CSV
#[utoipa::path(
    get,
    path = "/report/car-park",
    tag = "report",
    responses(
        (
            status = OK,
            description = "the report, sent as a `car_park_report.csv` attachment",
            content_type = "text/csv",
            body = String,
        ),
    ),
)]
pub async fn car_park_report(
    DbConnection(db): DbConnection,
) -> Result<([(HeaderName, &'static str); 2], Vec<u8>), (StatusCode, SimpleError)> {
    let csv = service::car_park_report_csv(&db)
        .await
        .map_err(|_| internal_error_res())?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"car_park_report.csv\"",
        ),
    ];

    Ok((headers, csv))
}
