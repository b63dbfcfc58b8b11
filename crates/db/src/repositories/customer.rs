//! Customer repository, including the company-customer association.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use transco_shared::types::CustomerId;
use uuid::Uuid;

use super::is_foreign_key_violation;
use crate::entities::{companies, company_customers, customers};

/// Error types for customer operations.
#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    /// Customer not found.
    #[error("Customer not found: {0}")]
    NotFound(Uuid),

    /// Company not found.
    #[error("Company not found: {0}")]
    CompanyNotFound(Uuid),

    /// The customer is still linked to at least one company.
    #[error("customer is still associated with companies")]
    StillAssociated,

    /// Transports still reference the customer.
    #[error("customer is referenced by transports")]
    InUse,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// How a customer is added to a company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerLink {
    /// Link a customer that already exists.
    Existing(Uuid),
    /// Create a customer with this name and link it.
    New {
        /// Customer name.
        name: String,
    },
}

/// A customer with the companies it is linked to.
#[derive(Debug, Clone)]
pub struct CustomerWithCompanies {
    /// The customer.
    pub customer: customers::Model,
    /// Linked companies.
    pub companies: Vec<companies::Model>,
}

/// Customer repository.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    db: DatabaseConnection,
}

impl CustomerRepository {
    /// Creates a new customer repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the customers of a company, by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the company does not exist or the query fails.
    pub async fn list_for_company(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<customers::Model>, CustomerError> {
        self.ensure_company(company_id).await?;

        Ok(customers::Entity::find()
            .inner_join(company_customers::Entity)
            .filter(company_customers::Column::CompanyId.eq(company_id))
            .order_by_asc(customers::Column::Name)
            .order_by_asc(customers::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Finds a customer together with its companies.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_with_companies(
        &self,
        id: Uuid,
    ) -> Result<Option<CustomerWithCompanies>, DbErr> {
        let Some(customer) = customers::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let companies = customer
            .find_related(companies::Entity)
            .order_by_asc(companies::Column::Name)
            .all(&self.db)
            .await?;

        Ok(Some(CustomerWithCompanies {
            customer,
            companies,
        }))
    }

    /// Adds a customer to a company, creating the customer if needed.
    ///
    /// Linking an already linked customer is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the company or the existing customer does not
    /// exist, or the database write fails.
    pub async fn add_to_company(
        &self,
        company_id: Uuid,
        link: CustomerLink,
    ) -> Result<customers::Model, CustomerError> {
        self.ensure_company(company_id).await?;

        let txn = self.db.begin().await?;
        let now = chrono::Utc::now().into();

        let customer = match link {
            CustomerLink::Existing(id) => customers::Entity::find_by_id(id)
                .one(&txn)
                .await?
                .ok_or(CustomerError::NotFound(id))?,
            CustomerLink::New { name } => {
                customers::ActiveModel {
                    id: Set(CustomerId::new().into_inner()),
                    name: Set(name),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(&txn)
                .await?
            }
        };

        let linked = company_customers::Entity::find_by_id((company_id, customer.id))
            .count(&txn)
            .await?
            > 0;
        if !linked {
            company_customers::ActiveModel {
                company_id: Set(company_id),
                customer_id: Set(customer.id),
                created_at: Set(now),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        tracing::info!(%company_id, customer_id = %customer.id, "Customer linked to company");
        Ok(customer)
    }

    /// Removes the link between a company and a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn unlink(&self, company_id: Uuid, customer_id: Uuid) -> Result<(), DbErr> {
        company_customers::Entity::delete_many()
            .filter(company_customers::Column::CompanyId.eq(company_id))
            .filter(company_customers::Column::CustomerId.eq(customer_id))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    /// Renames a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the customer does not exist or the update fails.
    pub async fn rename(&self, id: Uuid, name: &str) -> Result<customers::Model, CustomerError> {
        let customer = customers::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(CustomerError::NotFound(id))?;

        let mut active: customers::ActiveModel = customer.into();
        active.name = Set(name.to_string());
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Deletes a customer that no company is linked to.
    ///
    /// Deleting a missing customer is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the customer is still linked to a company, is
    /// referenced by a transport, or the delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<(), CustomerError> {
        let links = company_customers::Entity::find()
            .filter(company_customers::Column::CustomerId.eq(id))
            .count(&self.db)
            .await?;
        if links > 0 {
            return Err(CustomerError::StillAssociated);
        }

        customers::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    CustomerError::InUse
                } else {
                    CustomerError::Database(e)
                }
            })?;
        Ok(())
    }

    async fn ensure_company(&self, company_id: Uuid) -> Result<(), CustomerError> {
        let count = companies::Entity::find_by_id(company_id)
            .count(&self.db)
            .await?;
        if count == 0 {
            return Err(CustomerError::CompanyNotFound(company_id));
        }
        Ok(())
    }
}
