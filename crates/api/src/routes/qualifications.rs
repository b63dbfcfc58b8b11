//! Qualification routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    validation::validate,
};
use transco_db::{QualificationRepository, entities::qualifications};

/// Creates the qualification routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/qualifications", get(list_qualifications))
        .route("/qualifications/{id}", get(get_qualification))
        .route(
            "/drivers/{id}/qualifications",
            get(list_driver_qualifications).post(attach_qualification),
        )
        .route(
            "/drivers/{id}/qualifications/{qualification_id}",
            delete(detach_qualification),
        )
}

/// Request body for giving a driver a qualification.
#[derive(Debug, Deserialize, Validate)]
pub struct QualificationRequest {
    /// Qualification type, e.g. a licence category.
    #[serde(rename = "type")]
    #[validate(
        length(min = 1, max = 50),
        custom(function = "crate::validation::not_blank")
    )]
    pub kind: String,
}

/// Response for a qualification.
#[derive(Debug, Serialize)]
pub struct QualificationResponse {
    /// Qualification ID.
    pub id: Uuid,
    /// Qualification type.
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<qualifications::Model> for QualificationResponse {
    fn from(qualification: qualifications::Model) -> Self {
        Self {
            id: qualification.id,
            kind: qualification.kind,
        }
    }
}

/// GET `/qualifications` - List all qualifications.
async fn list_qualifications(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<QualificationResponse>>> {
    let qualifications = QualificationRepository::new(state.conn()).list().await?;
    Ok(Json(qualifications.into_iter().map(Into::into).collect()))
}

/// GET `/qualifications/{id}` - Get a qualification.
async fn get_qualification(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<QualificationResponse>> {
    let qualification = QualificationRepository::new(state.conn())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("qualification"))?;

    Ok(Json(qualification.into()))
}

/// GET `/drivers/{id}/qualifications` - List a driver's qualifications.
async fn list_driver_qualifications(
    State(state): State<AppState>,
    Path(driver_id): Path<Uuid>,
) -> ApiResult<Json<Vec<QualificationResponse>>> {
    let qualifications = QualificationRepository::new(state.conn())
        .list_for_driver(driver_id)
        .await?;

    Ok(Json(qualifications.into_iter().map(Into::into).collect()))
}

/// POST `/drivers/{id}/qualifications` - Give a driver a qualification.
async fn attach_qualification(
    State(state): State<AppState>,
    Path(driver_id): Path<Uuid>,
    Json(payload): Json<QualificationRequest>,
) -> ApiResult<impl IntoResponse> {
    validate(&payload)?;

    let qualification = QualificationRepository::new(state.conn())
        .attach(driver_id, payload.kind.trim())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(QualificationResponse::from(qualification)),
    ))
}

/// DELETE `/drivers/{id}/qualifications/{qualification_id}` - Take a
/// qualification away.
async fn detach_qualification(
    State(state): State<AppState>,
    Path((driver_id, qualification_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    QualificationRepository::new(state.conn())
        .detach(driver_id, qualification_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
