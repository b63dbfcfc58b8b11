//! Transport routes shared by cargo and passenger transports.

pub mod cargo;
pub mod passenger;

use axum::{Json, http::StatusCode};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    params::ListParams,
};
use transco_core::query::TransportField;
use transco_core::transport::{TransportDetails, TransportKind, TransportRecord};
use transco_db::{
    TransportRepository,
    repositories::{TransportFilter, TransportInput},
};
use transco_shared::types::{CompanyId, CustomerId, DriverId, TransportId, VehicleId};

/// Query parameters for listing a company's transports.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportListParams {
    /// Exact destination address.
    pub destination: Option<String>,
    /// Filters on `startAddress` / `endAddress`.
    pub filter_by: Option<String>,
    /// Ordering on dates, price or addresses.
    pub sort_by: Option<String>,
    /// Page number (0-indexed).
    pub page: Option<u32>,
}

/// Fields common to both transport kinds in request bodies.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransportFields {
    /// Driver performing the transport.
    pub driver_id: Uuid,
    /// Customer ordering the transport.
    pub customer_id: Uuid,
    /// Vehicle used.
    pub vehicle_id: Uuid,
    /// Pick-up address.
    #[validate(
        length(min = 1, max = 100),
        custom(function = "crate::validation::not_blank")
    )]
    pub start_address: String,
    /// Destination address.
    #[validate(
        length(min = 1, max = 100),
        custom(function = "crate::validation::not_blank")
    )]
    pub end_address: String,
    /// First day.
    pub start_date: NaiveDate,
    /// Last day.
    pub end_date: NaiveDate,
    /// Agreed price.
    #[validate(custom(function = "crate::validation::positive_decimal"))]
    pub price: Decimal,
}

impl TransportFields {
    /// Combines the common fields with a kind payload.
    pub fn into_input(self, details: TransportDetails) -> TransportInput {
        TransportInput {
            driver_id: self.driver_id,
            customer_id: self.customer_id,
            vehicle_id: self.vehicle_id,
            start_address: self.start_address,
            end_address: self.end_address,
            start_date: self.start_date,
            end_date: self.end_date,
            price: self.price,
            details,
        }
    }
}

/// Kind-specific part of a transport response.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TransportPayload {
    /// Cargo payload.
    #[serde(rename_all = "camelCase")]
    Cargo {
        /// Goods label.
        cargo_type: String,
        /// Goods weight.
        cargo_weight: i32,
    },
    /// Passenger payload.
    #[serde(rename_all = "camelCase")]
    Passenger {
        /// Passengers carried.
        number_of_passengers: i32,
    },
}

/// Response for a transport of either kind.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportResponse {
    /// Transport ID.
    pub id: TransportId,
    /// Owning company ID.
    pub company_id: CompanyId,
    /// Driver ID.
    pub driver_id: DriverId,
    /// Driver display name.
    pub driver_name: String,
    /// Customer ID.
    pub customer_id: CustomerId,
    /// Vehicle ID.
    pub vehicle_id: VehicleId,
    /// Pick-up address.
    pub start_address: String,
    /// Destination address.
    pub end_address: String,
    /// First day.
    pub start_date: NaiveDate,
    /// Last day.
    pub end_date: NaiveDate,
    /// Agreed price.
    pub price: Option<Decimal>,
    /// Whether the customer has paid.
    pub is_paid: bool,
    /// Kind-specific fields.
    #[serde(flatten)]
    pub payload: TransportPayload,
}

impl From<TransportRecord> for TransportResponse {
    fn from(record: TransportRecord) -> Self {
        let payload = match record.details {
            TransportDetails::Cargo {
                cargo_type,
                cargo_weight,
            } => TransportPayload::Cargo {
                cargo_type,
                cargo_weight,
            },
            TransportDetails::Passenger {
                number_of_passengers,
            } => TransportPayload::Passenger {
                number_of_passengers,
            },
        };

        Self {
            id: record.id,
            company_id: record.company_id,
            driver_id: record.driver.id,
            driver_name: record.driver.name,
            customer_id: record.customer_id,
            vehicle_id: record.vehicle_id,
            start_address: record.start_address,
            end_address: record.end_address,
            start_date: record.start_date,
            end_date: record.end_date,
            price: record.price,
            is_paid: record.is_paid,
            payload,
        }
    }
}

async fn list(
    state: &AppState,
    company_id: Uuid,
    kind: TransportKind,
    params: TransportListParams,
) -> ApiResult<Json<Vec<TransportResponse>>> {
    let list = ListParams {
        filter_by: params.filter_by,
        sort_by: params.sort_by,
        page: params.page,
    };
    let filter = TransportFilter {
        destination: params.destination,
        query: list.query::<TransportField>()?,
    };

    let records = TransportRepository::new(state.conn())
        .list_for_company(company_id, kind, &filter, list.page(state.page_size))
        .await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

async fn get(state: &AppState, kind: TransportKind, id: Uuid) -> ApiResult<Json<TransportResponse>> {
    let record = TransportRepository::new(state.conn())
        .find(kind, id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("{kind} transport")))?;

    Ok(Json(record.into()))
}

async fn delete(state: &AppState, kind: TransportKind, id: Uuid) -> ApiResult<StatusCode> {
    TransportRepository::new(state.conn())
        .delete(kind, id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use transco_core::transport::DriverRef;

    fn record(details: TransportDetails) -> TransportRecord {
        TransportRecord {
            id: TransportId::new(),
            company_id: CompanyId::new(),
            start_address: "Sofia".to_string(),
            end_address: "Varna".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
            price: Some(dec!(120.50)),
            is_paid: false,
            driver: DriverRef {
                id: DriverId::new(),
                name: "Jane Doe".to_string(),
            },
            customer_id: CustomerId::new(),
            vehicle_id: VehicleId::new(),
            details,
        }
    }

    #[test]
    fn test_cargo_response_flattens_payload_in_camel_case() {
        let response = TransportResponse::from(record(TransportDetails::Cargo {
            cargo_type: "timber".to_string(),
            cargo_weight: 900,
        }));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["cargoType"], "timber");
        assert_eq!(json["cargoWeight"], 900);
        assert_eq!(json["price"], "120.50");
        assert_eq!(json["isPaid"], false);
        assert_eq!(json["startDate"], "2024-06-01");
        assert_eq!(json["driverName"], "Jane Doe");
        assert!(json.get("numberOfPassengers").is_none());
    }

    #[test]
    fn test_passenger_response_has_passenger_count() {
        let response = TransportResponse::from(record(TransportDetails::Passenger {
            number_of_passengers: 42,
        }));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["numberOfPassengers"], 42);
        assert!(json.get("cargoType").is_none());
    }

    #[test]
    fn test_fields_reject_non_positive_price_and_blank_address() {
        let fields: TransportFields = serde_json::from_str(
            r#"{
                "driverId": "0190a6a0-0000-7000-8000-000000000001",
                "customerId": "0190a6a0-0000-7000-8000-000000000002",
                "vehicleId": "0190a6a0-0000-7000-8000-000000000003",
                "startAddress": " ",
                "endAddress": "Varna",
                "startDate": "2024-06-01",
                "endDate": "2024-06-02",
                "price": "0"
            }"#,
        )
        .unwrap();

        let errors = fields.validate().unwrap_err();
        let failed = errors.field_errors();
        assert!(failed.contains_key("start_address"));
        assert!(failed.contains_key("price"));
    }
}
