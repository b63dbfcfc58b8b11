//! Cargo transport routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::{TransportFields, TransportListParams, TransportResponse};
use crate::{AppState, error::ApiResult, validation::validate};
use transco_core::transport::{TransportDetails, TransportKind};
use transco_db::TransportRepository;

/// Creates the cargo transport routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/companies/{id}/cargotransport",
            get(list_cargo_transports).post(create_cargo_transport),
        )
        .route(
            "/cargotransport/{id}",
            get(get_cargo_transport)
                .put(update_cargo_transport)
                .delete(delete_cargo_transport),
        )
}

/// Request body for creating a cargo transport.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CargoTransportRequest {
    /// Common transport fields.
    #[serde(flatten)]
    #[validate(nested)]
    pub transport: TransportFields,
    /// Goods label.
    #[validate(
        length(min = 1, max = 50),
        custom(function = "crate::validation::not_blank")
    )]
    pub cargo_type: String,
    /// Goods weight.
    #[validate(range(min = 1))]
    pub cargo_weight: i32,
}

impl CargoTransportRequest {
    fn details(&self) -> TransportDetails {
        TransportDetails::Cargo {
            cargo_type: self.cargo_type.clone(),
            cargo_weight: self.cargo_weight,
        }
    }
}

/// Request body for updating a cargo transport.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCargoTransportRequest {
    /// New transport fields.
    #[serde(flatten)]
    #[validate(nested)]
    pub cargo: CargoTransportRequest,
    /// Whether the customer has paid.
    pub is_paid: bool,
}

/// GET `/companies/{id}/cargotransport` - List a company's cargo transports.
async fn list_cargo_transports(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Query(params): Query<TransportListParams>,
) -> ApiResult<Json<Vec<TransportResponse>>> {
    super::list(&state, company_id, TransportKind::Cargo, params).await
}

/// POST `/companies/{id}/cargotransport` - Record a cargo transport.
async fn create_cargo_transport(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(payload): Json<CargoTransportRequest>,
) -> ApiResult<impl IntoResponse> {
    validate(&payload)?;

    let details = payload.details();
    let record = TransportRepository::new(state.conn())
        .create(company_id, payload.transport.into_input(details))
        .await?;

    Ok((StatusCode::CREATED, Json(TransportResponse::from(record))))
}

/// GET `/cargotransport/{id}` - Get a cargo transport.
async fn get_cargo_transport(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<TransportResponse>> {
    super::get(&state, TransportKind::Cargo, id).await
}

/// PUT `/cargotransport/{id}` - Update a cargo transport.
async fn update_cargo_transport(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCargoTransportRequest>,
) -> ApiResult<Json<TransportResponse>> {
    validate(&payload)?;

    let details = payload.cargo.details();
    let record = TransportRepository::new(state.conn())
        .update(id, payload.cargo.transport.into_input(details), payload.is_paid)
        .await?;

    Ok(Json(record.into()))
}

/// DELETE `/cargotransport/{id}` - Delete a cargo transport.
async fn delete_cargo_transport(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    super::delete(&state, TransportKind::Cargo, id).await
}
