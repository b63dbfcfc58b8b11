//! Queryable fields per entity.

use super::QueryField;

/// Company list fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyField {
    /// Company name.
    Name,
}

impl QueryField for CompanyField {
    const ENTITY: &'static str = "company";
    const ALL: &'static [Self] = &[Self::Name];

    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
        }
    }

    fn is_filterable(self) -> bool {
        true
    }
}

/// Driver list fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverField {
    /// First name.
    FirstName,
    /// Last name.
    LastName,
    /// Salary.
    Salary,
}

impl QueryField for DriverField {
    const ENTITY: &'static str = "driver";
    const ALL: &'static [Self] = &[Self::FirstName, Self::LastName, Self::Salary];

    fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Salary => "salary",
        }
    }

    fn is_filterable(self) -> bool {
        !matches!(self, Self::Salary)
    }
}

/// Transport list fields, shared by cargo and passenger transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportField {
    /// Pick-up address.
    StartAddress,
    /// Destination address.
    EndAddress,
    /// Start date.
    StartDate,
    /// End date.
    EndDate,
    /// Price.
    Price,
}

impl QueryField for TransportField {
    const ENTITY: &'static str = "transport";
    const ALL: &'static [Self] = &[
        Self::StartAddress,
        Self::EndAddress,
        Self::StartDate,
        Self::EndDate,
        Self::Price,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::StartAddress => "startAddress",
            Self::EndAddress => "endAddress",
            Self::StartDate => "startDate",
            Self::EndDate => "endDate",
            Self::Price => "price",
        }
    }

    fn is_filterable(self) -> bool {
        matches!(self, Self::StartAddress | Self::EndAddress)
    }
}
