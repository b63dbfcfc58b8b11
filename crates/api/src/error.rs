//! Mapping of domain and repository errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde_json::json;
use transco_core::query::QueryError;
use transco_core::reports::ReportError;
use transco_db::repositories::{
    CompanyError, CustomerError, DriverError, QualificationError, TransportError, VehicleError,
};
use transco_shared::AppError;

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// An [`AppError`] on its way to becoming a response.
///
/// Not-found errors become an empty 404. Other client errors carry
/// `{"error": CODE, "message": ...}`; server errors are logged and answered
/// with a generic message.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// A 404 for a missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self(AppError::NotFound(what.into()))
    }

    /// A 400 for an invalid request payload.
    pub fn validation(message: impl Into<String>) -> Self {
        Self(AppError::Validation(message.into()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status == StatusCode::NOT_FOUND {
            return status.into_response();
        }

        let message = if self.0.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
            "An internal error occurred"
        } else {
            self.0.message()
        };

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": message,
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self(AppError::Database(err.to_string()))
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        Self(AppError::BadRequest(err.to_string()))
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        Self(AppError::BadRequest(err.to_string()))
    }
}

impl From<CompanyError> for ApiError {
    fn from(err: CompanyError) -> Self {
        match err {
            CompanyError::NotFound(_) => Self(AppError::NotFound(err.to_string())),
            CompanyError::Database(e) => e.into(),
        }
    }
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::NotFound(_) | CustomerError::CompanyNotFound(_) => {
                Self(AppError::NotFound(err.to_string()))
            }
            CustomerError::StillAssociated => Self(AppError::BadRequest(err.to_string())),
            CustomerError::InUse => Self(AppError::Conflict(err.to_string())),
            CustomerError::Database(e) => e.into(),
        }
    }
}

impl From<DriverError> for ApiError {
    fn from(err: DriverError) -> Self {
        match err {
            DriverError::NotFound(_) | DriverError::CompanyNotFound(_) => {
                Self(AppError::NotFound(err.to_string()))
            }
            DriverError::InUse => Self(AppError::Conflict(err.to_string())),
            DriverError::Database(e) => e.into(),
        }
    }
}

impl From<QualificationError> for ApiError {
    fn from(err: QualificationError) -> Self {
        match err {
            QualificationError::DriverNotFound(_) => Self(AppError::NotFound(err.to_string())),
            QualificationError::Database(e) => e.into(),
        }
    }
}

impl From<VehicleError> for ApiError {
    fn from(err: VehicleError) -> Self {
        match err {
            VehicleError::NotFound(_) | VehicleError::CompanyNotFound(_) => {
                Self(AppError::NotFound(err.to_string()))
            }
            VehicleError::InUse => Self(AppError::Conflict(err.to_string())),
            VehicleError::Database(e) => e.into(),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::NotFound(_) | TransportError::CompanyNotFound(_) => {
                Self(AppError::NotFound(err.to_string()))
            }
            TransportError::NoSuchDriver
            | TransportError::NoSuchCustomer
            | TransportError::NoSuchVehicle
            | TransportError::Rule(_) => Self(AppError::BadRequest(err.to_string())),
            TransportError::Database(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;
    use transco_core::transport::TransportRuleError;
    use uuid::Uuid;

    async fn body_of(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    #[tokio::test]
    async fn test_not_found_has_empty_body() {
        let response = ApiError::not_found("company").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_client_error_carries_code_and_message() {
        let response = ApiError::from(CustomerError::StillAssociated).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(body["error"], "BAD_REQUEST");
        assert_eq!(body["message"], "customer is still associated with companies");
    }

    #[tokio::test]
    async fn test_server_error_hides_details() {
        let response =
            ApiError::from(DbErr::Custom("connection reset".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(body["error"], "DATABASE_ERROR");
        assert_eq!(body["message"], "An internal error occurred");
    }

    #[rstest]
    #[case(TransportError::NoSuchDriver, 400)]
    #[case(TransportError::NoSuchCustomer, 400)]
    #[case(TransportError::NoSuchVehicle, 400)]
    #[case(TransportError::Rule(TransportRuleError::PassengersRequireBus), 400)]
    #[case(TransportError::NotFound(Uuid::nil()), 404)]
    #[case(TransportError::CompanyNotFound(Uuid::nil()), 404)]
    fn test_transport_error_status(#[case] err: TransportError, #[case] status: u16) {
        assert_eq!(ApiError::from(err).0.status_code(), status);
    }

    #[rstest]
    #[case(DriverError::InUse.into(), 409)]
    #[case(VehicleError::InUse.into(), 409)]
    #[case(CustomerError::InUse.into(), 409)]
    #[case(QualificationError::DriverNotFound(Uuid::nil()).into(), 404)]
    fn test_in_use_and_missing_parent_status(#[case] err: ApiError, #[case] status: u16) {
        assert_eq!(err.0.status_code(), status);
    }
}
