//! Driver routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{companies::CompanyResponse, qualifications::QualificationResponse};
use crate::{
    AppState,
    error::{ApiError, ApiResult},
    params::ListParams,
    validation::validate,
};
use transco_core::query::DriverField;
use transco_db::{
    DriverRepository,
    entities::drivers,
    repositories::{DriverDetails, DriverInput, DriverWithQualifications},
};

/// Creates the driver routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/companies/{id}/drivers",
            get(list_company_drivers).post(hire_driver),
        )
        .route(
            "/drivers/{id}",
            get(get_driver).put(update_driver).delete(delete_driver),
        )
}

/// Query parameters for listing a company's drivers.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverListParams {
    /// Only drivers holding this qualification type.
    pub qualification: Option<String>,
    /// Filters on `firstName` / `lastName`.
    pub filter_by: Option<String>,
    /// Ordering on `firstName` / `lastName` / `salary`.
    pub sort_by: Option<String>,
    /// Page number (0-indexed).
    pub page: Option<u32>,
}

/// Request body for hiring or updating a driver.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DriverRequest {
    /// First name.
    #[validate(
        length(min = 1, max = 50),
        custom(function = "crate::validation::not_blank")
    )]
    pub first_name: String,
    /// Last name.
    #[validate(
        length(min = 1, max = 50),
        custom(function = "crate::validation::not_blank")
    )]
    pub last_name: String,
    /// Monthly salary.
    #[validate(custom(function = "crate::validation::positive_decimal"))]
    pub salary: Decimal,
}

impl From<DriverRequest> for DriverInput {
    fn from(request: DriverRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            salary: request.salary,
        }
    }
}

/// Response for a driver in a company listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponse {
    /// Driver ID.
    pub id: Uuid,
    /// Employing company ID.
    pub company_id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Monthly salary.
    pub salary: Decimal,
    /// Qualifications held.
    pub qualifications: Vec<QualificationResponse>,
}

impl DriverResponse {
    fn new(driver: drivers::Model, qualifications: Vec<QualificationResponse>) -> Self {
        Self {
            id: driver.id,
            company_id: driver.company_id,
            first_name: driver.first_name,
            last_name: driver.last_name,
            salary: driver.salary,
            qualifications,
        }
    }
}

impl From<DriverWithQualifications> for DriverResponse {
    fn from(value: DriverWithQualifications) -> Self {
        Self::new(
            value.driver,
            value.qualifications.into_iter().map(Into::into).collect(),
        )
    }
}

/// Response for a single driver with its employer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDetailsResponse {
    /// Driver ID.
    pub id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Monthly salary.
    pub salary: Decimal,
    /// Employing company.
    pub company: CompanyResponse,
    /// Qualifications held.
    pub qualifications: Vec<QualificationResponse>,
}

impl From<DriverDetails> for DriverDetailsResponse {
    fn from(value: DriverDetails) -> Self {
        Self {
            id: value.driver.id,
            first_name: value.driver.first_name,
            last_name: value.driver.last_name,
            salary: value.driver.salary,
            company: value.company.into(),
            qualifications: value.qualifications.into_iter().map(Into::into).collect(),
        }
    }
}

/// GET `/companies/{id}/drivers` - List a company's drivers.
async fn list_company_drivers(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Query(params): Query<DriverListParams>,
) -> ApiResult<Json<Vec<DriverResponse>>> {
    let list = ListParams {
        filter_by: params.filter_by,
        sort_by: params.sort_by,
        page: params.page,
    };
    let query = list.query::<DriverField>()?;

    let drivers = DriverRepository::new(state.conn())
        .list_for_company(
            company_id,
            params.qualification.as_deref(),
            &query,
            list.page(state.page_size),
        )
        .await?;

    Ok(Json(drivers.into_iter().map(Into::into).collect()))
}

/// POST `/companies/{id}/drivers` - Hire a driver.
async fn hire_driver(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(payload): Json<DriverRequest>,
) -> ApiResult<impl IntoResponse> {
    validate(&payload)?;

    let driver = DriverRepository::new(state.conn())
        .create(company_id, payload.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DriverResponse::new(driver, Vec::new())),
    ))
}

/// GET `/drivers/{id}` - Get a driver with its company and qualifications.
async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DriverDetailsResponse>> {
    let driver = DriverRepository::new(state.conn())
        .find_details(id)
        .await?
        .ok_or_else(|| ApiError::not_found("driver"))?;

    Ok(Json(driver.into()))
}

/// PUT `/drivers/{id}` - Update a driver.
async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DriverRequest>,
) -> ApiResult<Json<DriverDetailsResponse>> {
    validate(&payload)?;

    let repo = DriverRepository::new(state.conn());
    repo.update(id, payload.into()).await?;
    let driver = repo
        .find_details(id)
        .await?
        .ok_or_else(|| ApiError::not_found("driver"))?;

    Ok(Json(driver.into()))
}

/// DELETE `/drivers/{id}` - Delete a driver.
async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    DriverRepository::new(state.conn()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(salary: Decimal) -> DriverRequest {
        DriverRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            salary,
        }
    }

    #[test]
    fn test_driver_request_needs_positive_salary() {
        assert!(request(dec!(2500)).validate().is_ok());
        assert!(request(dec!(0)).validate().is_err());
        assert!(request(dec!(-1)).validate().is_err());
    }

    #[test]
    fn test_driver_request_reads_camel_case() {
        let request: DriverRequest = serde_json::from_str(
            r#"{"firstName": "Jane", "lastName": "Doe", "salary": "2500.00"}"#,
        )
        .unwrap();

        assert_eq!(request.first_name, "Jane");
        assert_eq!(request.salary, dec!(2500.00));
    }
}
