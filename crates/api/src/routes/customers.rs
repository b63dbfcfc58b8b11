//! Customer routes and the company-customer association.

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

use super::companies::CompanyResponse;
use crate::{
    AppState,
    error::{ApiError, ApiResult},
    validation::validate,
};
use transco_db::{
    CustomerRepository,
    entities::customers,
    repositories::{CustomerLink, CustomerWithCompanies},
};

/// Creates the customer routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/companies/{id}/customers",
            get(list_company_customers).post(add_company_customer),
        )
        .route(
            "/companies/{id}/customers/{customer_id}",
            delete(remove_company_customer),
        )
        .route(
            "/customers/{id}",
            get(get_customer).put(rename_customer).delete(delete_customer),
        )
}

/// Request body for adding a customer to a company.
///
/// With `id`, the existing customer is linked; otherwise a customer named
/// `name` is created and linked.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCustomerRequest {
    /// Existing customer ID.
    pub id: Option<Uuid>,
    /// Name of a new customer.
    #[validate(
        length(min = 1, max = 50),
        custom(function = "crate::validation::not_blank")
    )]
    pub name: Option<String>,
}

impl AddCustomerRequest {
    fn into_link(self) -> Result<CustomerLink, ApiError> {
        match (self.id, self.name) {
            (Some(id), _) => Ok(CustomerLink::Existing(id)),
            (None, Some(name)) => Ok(CustomerLink::New { name }),
            (None, None) => Err(ApiError::validation("name: must not be blank")),
        }
    }
}

/// Request body for renaming a customer.
#[derive(Debug, Deserialize, Validate)]
pub struct RenameCustomerRequest {
    /// New name.
    #[validate(
        length(min = 3, max = 50),
        custom(function = "crate::validation::not_blank")
    )]
    pub name: String,
}

/// Response for a customer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    /// Customer ID.
    pub id: Uuid,
    /// Customer name.
    pub name: String,
}

impl From<customers::Model> for CustomerResponse {
    fn from(customer: customers::Model) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
        }
    }
}

/// Response for a customer with its companies.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetailsResponse {
    /// Customer ID.
    pub id: Uuid,
    /// Customer name.
    pub name: String,
    /// Companies the customer orders from.
    pub companies: Vec<CompanyResponse>,
}

impl From<CustomerWithCompanies> for CustomerDetailsResponse {
    fn from(value: CustomerWithCompanies) -> Self {
        Self {
            id: value.customer.id,
            name: value.customer.name,
            companies: value.companies.into_iter().map(Into::into).collect(),
        }
    }
}

/// GET `/companies/{id}/customers` - List a company's customers.
async fn list_company_customers(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
) -> ApiResult<Json<Vec<CustomerResponse>>> {
    let customers = CustomerRepository::new(state.conn())
        .list_for_company(company_id)
        .await?;

    Ok(Json(customers.into_iter().map(Into::into).collect()))
}

/// POST `/companies/{id}/customers` - Link or create a customer.
async fn add_company_customer(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(payload): Json<AddCustomerRequest>,
) -> ApiResult<impl IntoResponse> {
    validate(&payload)?;

    let customer = CustomerRepository::new(state.conn())
        .add_to_company(company_id, payload.into_link()?)
        .await?;

    Ok((StatusCode::CREATED, Json(CustomerResponse::from(customer))))
}

/// DELETE `/companies/{id}/customers/{customer_id}` - Unlink a customer.
async fn remove_company_customer(
    State(state): State<AppState>,
    Path((company_id, customer_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    CustomerRepository::new(state.conn())
        .unlink(company_id, customer_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET `/customers/{id}` - Get a customer with its companies.
async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<CustomerDetailsResponse>> {
    let customer = CustomerRepository::new(state.conn())
        .find_with_companies(id)
        .await?
        .ok_or_else(|| ApiError::not_found("customer"))?;

    Ok(Json(customer.into()))
}

/// PUT `/customers/{id}` - Rename a customer.
async fn rename_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RenameCustomerRequest>,
) -> ApiResult<Json<CustomerResponse>> {
    validate(&payload)?;

    let customer = CustomerRepository::new(state.conn())
        .rename(id, &payload.name)
        .await?;

    Ok(Json(customer.into()))
}

/// DELETE `/customers/{id}` - Delete a customer no company uses.
async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    CustomerRepository::new(state.conn()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request_prefers_existing_id() {
        let id = Uuid::now_v7();
        let request = AddCustomerRequest {
            id: Some(id),
            name: Some("ignored".to_string()),
        };

        assert_eq!(request.into_link().unwrap(), CustomerLink::Existing(id));
    }

    #[test]
    fn test_add_request_without_id_creates() {
        let request = AddCustomerRequest {
            id: None,
            name: Some("Acme Foods".to_string()),
        };

        assert_eq!(
            request.into_link().unwrap(),
            CustomerLink::New {
                name: "Acme Foods".to_string()
            }
        );
    }

    #[test]
    fn test_add_request_needs_id_or_name() {
        let request = AddCustomerRequest {
            id: None,
            name: None,
        };

        assert!(request.into_link().is_err());
    }

    #[test]
    fn test_rename_needs_three_characters() {
        assert!(RenameCustomerRequest { name: "Al".to_string() }.validate().is_err());
        assert!(RenameCustomerRequest { name: "Ala".to_string() }.validate().is_ok());
    }
}
