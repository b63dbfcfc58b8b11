//! Company routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    params::ListParams,
    validation::validate,
};
use transco_core::query::CompanyField;
use transco_db::{CompanyRepository, entities::companies};

/// Creates the company routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/companies", get(list_companies).post(create_company))
        .route(
            "/companies/{id}",
            get(get_company).put(update_company).delete(delete_company),
        )
}

/// Request body for creating or renaming a company.
#[derive(Debug, Deserialize, Validate)]
pub struct CompanyRequest {
    /// Company name.
    #[validate(
        length(min = 1, max = 50),
        custom(function = "crate::validation::not_blank")
    )]
    pub name: String,
}

/// Response for a company.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    /// Company ID.
    pub id: Uuid,
    /// Company name.
    pub name: String,
}

impl From<companies::Model> for CompanyResponse {
    fn from(company: companies::Model) -> Self {
        Self {
            id: company.id,
            name: company.name,
        }
    }
}

/// GET `/companies` - List companies.
async fn list_companies(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<CompanyResponse>>> {
    let query = params.query::<CompanyField>()?;
    let companies = CompanyRepository::new(state.conn())
        .list(&query, params.page(state.page_size))
        .await?;

    Ok(Json(companies.into_iter().map(Into::into).collect()))
}

/// POST `/companies` - Create a company.
async fn create_company(
    State(state): State<AppState>,
    Json(payload): Json<CompanyRequest>,
) -> ApiResult<impl IntoResponse> {
    validate(&payload)?;

    let company = CompanyRepository::new(state.conn())
        .create(&payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(CompanyResponse::from(company))))
}

/// GET `/companies/{id}` - Get a company.
async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<CompanyResponse>> {
    let company = CompanyRepository::new(state.conn())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("company"))?;

    Ok(Json(company.into()))
}

/// PUT `/companies/{id}` - Rename a company.
async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CompanyRequest>,
) -> ApiResult<Json<CompanyResponse>> {
    validate(&payload)?;

    let company = CompanyRepository::new(state.conn())
        .update(id, &payload.name)
        .await?;

    info!(company_id = %id, "Company renamed");
    Ok(Json(company.into()))
}

/// DELETE `/companies/{id}` - Delete a company and everything it owns.
async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    CompanyRepository::new(state.conn()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
