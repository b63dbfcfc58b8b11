//! Passenger transport routes.

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

/// Creates the passenger transport routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/companies/{id}/passengertransport",
            get(list_passenger_transports).post(create_passenger_transport),
        )
        .route(
            "/passengertransport/{id}",
            get(get_passenger_transport)
                .put(update_passenger_transport)
                .delete(delete_passenger_transport),
        )
}

/// Request body for creating a passenger transport.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PassengerTransportRequest {
    /// Common transport fields.
    #[serde(flatten)]
    #[validate(nested)]
    pub transport: TransportFields,
    /// Passengers carried.
    #[validate(range(min = 1))]
    pub number_of_passengers: i32,
}

impl PassengerTransportRequest {
    const fn details(&self) -> TransportDetails {
        TransportDetails::Passenger {
            number_of_passengers: self.number_of_passengers,
        }
    }
}

/// Request body for updating a passenger transport.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePassengerTransportRequest {
    /// New transport fields.
    #[serde(flatten)]
    #[validate(nested)]
    pub passenger: PassengerTransportRequest,
    /// Whether the customer has paid.
    pub is_paid: bool,
}

/// GET `/companies/{id}/passengertransport` - List a company's passenger transports.
async fn list_passenger_transports(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Query(params): Query<TransportListParams>,
) -> ApiResult<Json<Vec<TransportResponse>>> {
    super::list(&state, company_id, TransportKind::Passenger, params).await
}

/// POST `/companies/{id}/passengertransport` - Record a passenger transport.
async fn create_passenger_transport(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(payload): Json<PassengerTransportRequest>,
) -> ApiResult<impl IntoResponse> {
    validate(&payload)?;

    let details = payload.details();
    let record = TransportRepository::new(state.conn())
        .create(company_id, payload.transport.into_input(details))
        .await?;

    Ok((StatusCode::CREATED, Json(TransportResponse::from(record))))
}

/// GET `/passengertransport/{id}` - Get a passenger transport.
async fn get_passenger_transport(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<TransportResponse>> {
    super::get(&state, TransportKind::Passenger, id).await
}

/// PUT `/passengertransport/{id}` - Update a passenger transport.
async fn update_passenger_transport(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePassengerTransportRequest>,
) -> ApiResult<Json<TransportResponse>> {
    validate(&payload)?;

    let details = payload.passenger.details();
    let record = TransportRepository::new(state.conn())
        .update(
            id,
            payload.passenger.transport.into_input(details),
            payload.is_paid,
        )
        .await?;

    Ok(Json(record.into()))
}

/// DELETE `/passengertransport/{id}` - Delete a passenger transport.
async fn delete_passenger_transport(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    super::delete(&state, TransportKind::Passenger, id).await
}
