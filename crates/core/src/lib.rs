//! Core business logic for Transco.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `transport` - Transport records and vehicle assignment rules
//! - `reports` - Company report aggregation and report windows
//! - `query` - Typed filter and sort keys for list endpoints

pub mod query;
pub mod reports;
pub mod transport;
