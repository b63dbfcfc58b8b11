//! Initial database migration.
//!
//! Creates the fleet, customer and transport tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: COMPANIES & CUSTOMERS
        // ============================================================
        db.execute_unprepared(COMPANIES_SQL).await?;
        db.execute_unprepared(CUSTOMERS_SQL).await?;
        db.execute_unprepared(COMPANY_CUSTOMERS_SQL).await?;

        // ============================================================
        // PART 3: DRIVERS & QUALIFICATIONS
        // ============================================================
        db.execute_unprepared(DRIVERS_SQL).await?;
        db.execute_unprepared(QUALIFICATIONS_SQL).await?;
        db.execute_unprepared(DRIVER_QUALIFICATIONS_SQL).await?;

        // ============================================================
        // PART 4: FLEET
        // ============================================================
        db.execute_unprepared(VEHICLES_SQL).await?;

        // ============================================================
        // PART 5: TRANSPORTS
        // ============================================================
        db.execute_unprepared(CARGO_TRANSPORTS_SQL).await?;
        db.execute_unprepared(PASSENGER_TRANSPORTS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
CREATE TYPE vehicle_type AS ENUM ('BUS', 'TRUCK');
";

const COMPANIES_SQL: &str = r"
CREATE TABLE companies (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(50) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const CUSTOMERS_SQL: &str = r"
CREATE TABLE customers (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(50) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const COMPANY_CUSTOMERS_SQL: &str = r"
CREATE TABLE company_customers (
    company_id UUID NOT NULL REFERENCES companies(id) ON DELETE CASCADE,
    customer_id UUID NOT NULL REFERENCES customers(id) ON DELETE CASCADE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    PRIMARY KEY (company_id, customer_id)
);

CREATE INDEX idx_company_customers_customer ON company_customers(customer_id);
";

const DRIVERS_SQL: &str = r"
CREATE TABLE drivers (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    company_id UUID NOT NULL REFERENCES companies(id) ON DELETE CASCADE,
    first_name VARCHAR(50) NOT NULL,
    last_name VARCHAR(50) NOT NULL,
    salary NUMERIC(12, 2) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    CONSTRAINT chk_salary_positive CHECK (salary > 0)
);

CREATE INDEX idx_drivers_company ON drivers(company_id);
";

const QUALIFICATIONS_SQL: &str = r"
CREATE TABLE qualifications (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    kind VARCHAR(50) NOT NULL UNIQUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const DRIVER_QUALIFICATIONS_SQL: &str = r"
CREATE TABLE driver_qualifications (
    driver_id UUID NOT NULL REFERENCES drivers(id) ON DELETE CASCADE,
    qualification_id UUID NOT NULL REFERENCES qualifications(id) ON DELETE CASCADE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    PRIMARY KEY (driver_id, qualification_id)
);

CREATE INDEX idx_driver_qualifications_qualification ON driver_qualifications(qualification_id);
";

const VEHICLES_SQL: &str = r"
CREATE TABLE vehicles (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    company_id UUID NOT NULL REFERENCES companies(id) ON DELETE CASCADE,
    registration VARCHAR(50) NOT NULL,
    vehicle_type vehicle_type NOT NULL,
    capacity INTEGER NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    CONSTRAINT chk_capacity_positive CHECK (capacity > 0)
);

CREATE INDEX idx_vehicles_company ON vehicles(company_id);
";

// Driver, customer and vehicle references use NO ACTION so that deleting
// them is refused while a transport points at them, while a company delete
// still cascades through its own transports first.
const CARGO_TRANSPORTS_SQL: &str = r"
CREATE TABLE cargo_transports (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    company_id UUID NOT NULL REFERENCES companies(id) ON DELETE CASCADE,
    driver_id UUID NOT NULL REFERENCES drivers(id),
    customer_id UUID NOT NULL REFERENCES customers(id),
    vehicle_id UUID NOT NULL REFERENCES vehicles(id),
    start_address VARCHAR(100) NOT NULL,
    end_address VARCHAR(100) NOT NULL,
    start_date DATE NOT NULL,
    end_date DATE NOT NULL,
    price NUMERIC(12, 2),
    is_paid BOOLEAN NOT NULL DEFAULT false,
    cargo_type VARCHAR(50) NOT NULL,
    cargo_weight INTEGER NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    CONSTRAINT chk_cargo_dates CHECK (start_date <= end_date),
    CONSTRAINT chk_cargo_weight_positive CHECK (cargo_weight > 0)
);

CREATE INDEX idx_cargo_transports_company_end ON cargo_transports(company_id, end_date);
CREATE INDEX idx_cargo_transports_driver ON cargo_transports(driver_id);
";

const PASSENGER_TRANSPORTS_SQL: &str = r"
CREATE TABLE passenger_transports (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    company_id UUID NOT NULL REFERENCES companies(id) ON DELETE CASCADE,
    driver_id UUID NOT NULL REFERENCES drivers(id),
    customer_id UUID NOT NULL REFERENCES customers(id),
    vehicle_id UUID NOT NULL REFERENCES vehicles(id),
    start_address VARCHAR(100) NOT NULL,
    end_address VARCHAR(100) NOT NULL,
    start_date DATE NOT NULL,
    end_date DATE NOT NULL,
    price NUMERIC(12, 2),
    is_paid BOOLEAN NOT NULL DEFAULT false,
    number_of_passengers INTEGER NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    CONSTRAINT chk_passenger_dates CHECK (start_date <= end_date),
    CONSTRAINT chk_passengers_positive CHECK (number_of_passengers > 0)
);

CREATE INDEX idx_passenger_transports_company_end ON passenger_transports(company_id, end_date);
CREATE INDEX idx_passenger_transports_driver ON passenger_transports(driver_id);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS passenger_transports CASCADE;
DROP TABLE IF EXISTS cargo_transports CASCADE;
DROP TABLE IF EXISTS vehicles CASCADE;
DROP TABLE IF EXISTS driver_qualifications CASCADE;
DROP TABLE IF EXISTS qualifications CASCADE;
DROP TABLE IF EXISTS drivers CASCADE;
DROP TABLE IF EXISTS company_customers CASCADE;
DROP TABLE IF EXISTS customers CASCADE;
DROP TABLE IF EXISTS companies CASCADE;
DROP TYPE IF EXISTS vehicle_type;
";
