//! Report repository: loads a company's finished transports for a window.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use transco_core::reports::{CompanyReport, ReportService, ReportWindow};
use transco_core::transport::TransportRecord;
use transco_shared::types::CompanyId;

use super::transport::{cargo_record, passenger_record};
use crate::entities::{cargo_transports, companies, drivers, passenger_transports};

/// Report repository.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the report of a company over `window`.
    ///
    /// Returns `None` if the company does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn company_report(
        &self,
        company_id: CompanyId,
        window: ReportWindow,
    ) -> Result<Option<CompanyReport>, DbErr> {
        let company = companies::Entity::find_by_id(company_id.into_inner())
            .one(&self.db)
            .await?;
        if company.is_none() {
            return Ok(None);
        }

        let cargo = self.finished_cargo(company_id, window).await?;
        let passenger = self.finished_passenger(company_id, window).await?;

        tracing::debug!(
            %company_id,
            from = %window.from,
            to = %window.to,
            cargo = cargo.len(),
            passenger = passenger.len(),
            "Aggregating company report"
        );

        Ok(Some(ReportService::aggregate(company_id, &cargo, &passenger)))
    }

    /// Cargo transports of the company ending inside `window`, by end date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn finished_cargo(
        &self,
        company_id: CompanyId,
        window: ReportWindow,
    ) -> Result<Vec<TransportRecord>, DbErr> {
        let rows = cargo_transports::Entity::find()
            .filter(cargo_transports::Column::CompanyId.eq(company_id.into_inner()))
            .filter(cargo_transports::Column::EndDate.between(window.from, window.to))
            .order_by_asc(cargo_transports::Column::EndDate)
            .order_by_asc(cargo_transports::Column::Id)
            .find_also_related(drivers::Entity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(row, driver)| driver.map(|d| cargo_record(row, &d)))
            .collect())
    }

    /// Passenger transports of the company ending inside `window`, by end date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn finished_passenger(
        &self,
        company_id: CompanyId,
        window: ReportWindow,
    ) -> Result<Vec<TransportRecord>, DbErr> {
        let rows = passenger_transports::Entity::find()
            .filter(passenger_transports::Column::CompanyId.eq(company_id.into_inner()))
            .filter(passenger_transports::Column::EndDate.between(window.from, window.to))
            .order_by_asc(passenger_transports::Column::EndDate)
            .order_by_asc(passenger_transports::Column::Id)
            .find_also_related(drivers::Entity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(row, driver)| driver.map(|d| passenger_record(row, &d)))
            .collect())
    }
}
