//! Report routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
};
use transco_core::reports::{CompanyReport, ReportWindow};
use transco_db::ReportRepository;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/report/companies/{id}", get(get_company_report))
}

/// Query parameters for the company report.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyReportQuery {
    /// First day included (defaults to 1970-01-01).
    pub from_date: Option<NaiveDate>,
    /// Last day included (defaults to today).
    pub to_date: Option<NaiveDate>,
}

/// GET `/report/companies/{id}` - Revenue and driver performance of a company.
async fn get_company_report(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Query(query): Query<CompanyReportQuery>,
) -> ApiResult<Json<CompanyReport>> {
    let today = chrono::Utc::now().date_naive();
    let window = ReportWindow::resolve(query.from_date, query.to_date, today)?;

    let report = ReportRepository::new(state.conn())
        .company_report(company_id.into(), window)
        .await?
        .ok_or_else(|| ApiError::not_found("company"))?;

    Ok(Json(report))
}
