//! Vehicle routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    params::ListParams,
    validation::validate,
};
use transco_core::transport::VehicleKind;
use transco_db::{VehicleRepository, entities::vehicles, repositories::VehicleInput};

/// Creates the vehicle routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/companies/{id}/vehicles",
            get(list_company_vehicles).post(register_vehicle),
        )
        .route(
            "/vehicles/{id}",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
}

/// Request body for registering or updating a vehicle.
#[derive(Debug, Deserialize, Validate)]
pub struct VehicleRequest {
    /// Registration plate.
    #[validate(
        length(min = 1, max = 50),
        custom(function = "crate::validation::not_blank")
    )]
    pub registration: String,
    /// `BUS` or `TRUCK`.
    #[serde(rename = "type")]
    pub vehicle_type: String,
    /// Seats for a bus, kilograms for a truck.
    #[validate(range(min = 1))]
    pub capacity: i32,
}

impl VehicleRequest {
    fn into_input(self) -> Result<VehicleInput, ApiError> {
        let kind: VehicleKind = self.vehicle_type.parse().map_err(ApiError::validation)?;
        Ok(VehicleInput {
            registration: self.registration,
            vehicle_type: kind.into(),
            capacity: self.capacity,
        })
    }
}

/// Response for a vehicle.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    /// Vehicle ID.
    pub id: Uuid,
    /// Owning company ID.
    pub company_id: Uuid,
    /// Registration plate.
    pub registration: String,
    /// `BUS` or `TRUCK`.
    #[serde(rename = "type")]
    pub vehicle_type: VehicleKind,
    /// Seats for a bus, kilograms for a truck.
    pub capacity: i32,
}

impl From<vehicles::Model> for VehicleResponse {
    fn from(vehicle: vehicles::Model) -> Self {
        Self {
            id: vehicle.id,
            company_id: vehicle.company_id,
            registration: vehicle.registration,
            vehicle_type: vehicle.vehicle_type.into(),
            capacity: vehicle.capacity,
        }
    }
}

/// GET `/companies/{id}/vehicles` - List a company's fleet.
async fn list_company_vehicles(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<VehicleResponse>>> {
    let vehicles = VehicleRepository::new(state.conn())
        .list_for_company(company_id, params.page(state.page_size))
        .await?;

    Ok(Json(vehicles.into_iter().map(Into::into).collect()))
}

/// POST `/companies/{id}/vehicles` - Register a vehicle.
async fn register_vehicle(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(payload): Json<VehicleRequest>,
) -> ApiResult<impl IntoResponse> {
    validate(&payload)?;

    let vehicle = VehicleRepository::new(state.conn())
        .create(company_id, payload.into_input()?)
        .await?;

    Ok((StatusCode::CREATED, Json(VehicleResponse::from(vehicle))))
}

/// GET `/vehicles/{id}` - Get a vehicle.
async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<VehicleResponse>> {
    let vehicle = VehicleRepository::new(state.conn())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("vehicle"))?;

    Ok(Json(vehicle.into()))
}

/// PUT `/vehicles/{id}` - Update a vehicle.
async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VehicleRequest>,
) -> ApiResult<Json<VehicleResponse>> {
    validate(&payload)?;

    let vehicle = VehicleRepository::new(state.conn())
        .update(id, payload.into_input()?)
        .await?;

    Ok(Json(vehicle.into()))
}

/// DELETE `/vehicles/{id}` - Delete a vehicle.
async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    VehicleRepository::new(state.conn()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use transco_db::entities::sea_orm_active_enums::VehicleType;

    fn request(vehicle_type: &str, capacity: i32) -> VehicleRequest {
        VehicleRequest {
            registration: "CA1234AB".to_string(),
            vehicle_type: vehicle_type.to_string(),
            capacity,
        }
    }

    #[test]
    fn test_vehicle_type_must_be_bus_or_truck() {
        assert_eq!(
            request("TRUCK", 10).into_input().unwrap().vehicle_type,
            VehicleType::Truck
        );
        assert_eq!(
            request("BUS", 10).into_input().unwrap().vehicle_type,
            VehicleType::Bus
        );
        assert!(request("VAN", 10).into_input().is_err());
    }

    #[test]
    fn test_capacity_must_be_positive() {
        assert!(request("BUS", 0).validate().is_err());
        assert!(request("BUS", 1).validate().is_ok());
    }
}
