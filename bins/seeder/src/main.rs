//! Database seeder for Transco development and testing.
//!
//! Seeds a demo company with drivers, customers, a small fleet and a month of
//! cargo and passenger transports, so the report endpoint has data to show.
//!
//! Usage: cargo run --bin seeder

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use transco_core::transport::TransportDetails;
use transco_db::{
    QualificationRepository, TransportRepository,
    entities::{
        companies, company_customers, customers, drivers, sea_orm_active_enums::VehicleType,
        vehicles,
    },
    repositories::TransportInput,
};
use uuid::Uuid;

/// Demo company ID (consistent for all seeds)
const DEMO_COMPANY_ID: &str = "00000000-0000-0000-0000-000000000001";

const DRIVERS: [(&str, &str, &str, &str); 3] = [
    ("00000000-0000-0000-0000-000000000011", "Ivan", "Petrov", "2800.00"),
    ("00000000-0000-0000-0000-000000000012", "Maria", "Georgieva", "3100.00"),
    ("00000000-0000-0000-0000-000000000013", "Georgi", "Dimitrov", "2650.00"),
];

const CUSTOMERS: [(&str, &str); 2] = [
    ("00000000-0000-0000-0000-000000000021", "Balkan Foods"),
    ("00000000-0000-0000-0000-000000000022", "Black Sea Tours"),
];

const VEHICLES: [(&str, &str, VehicleType, i32); 2] = [
    ("00000000-0000-0000-0000-000000000031", "CA1234AB", VehicleType::Truck, 12_000),
    ("00000000-0000-0000-0000-000000000032", "CA5678CD", VehicleType::Bus, 50),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = transco_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    if companies::Entity::find_by_id(id(DEMO_COMPANY_ID))
        .one(&db)
        .await
        .expect("Failed to query companies")
        .is_some()
    {
        println!("Demo company already exists, skipping...");
        return;
    }

    println!("Seeding demo company...");
    seed_company(&db).await;

    println!("Seeding drivers and qualifications...");
    seed_drivers(&db).await;

    println!("Seeding customers...");
    seed_customers(&db).await;

    println!("Seeding fleet...");
    seed_vehicles(&db).await;

    println!("Seeding transports...");
    seed_transports(&db).await;

    println!("Seeding complete!");
}

fn id(value: &str) -> Uuid {
    Uuid::parse_str(value).unwrap()
}

fn amount(value: &str) -> Decimal {
    value.parse().unwrap()
}

async fn seed_company(db: &DatabaseConnection) {
    let now = chrono::Utc::now().into();
    companies::ActiveModel {
        id: Set(id(DEMO_COMPANY_ID)),
        name: Set("Speedy Logistics".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("Failed to create demo company");
}

async fn seed_drivers(db: &DatabaseConnection) {
    let now = chrono::Utc::now().into();
    let qualifications = QualificationRepository::new(db.clone());

    for (driver_id, first_name, last_name, salary) in DRIVERS {
        drivers::ActiveModel {
            id: Set(id(driver_id)),
            company_id: Set(id(DEMO_COMPANY_ID)),
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            salary: Set(amount(salary)),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .expect("Failed to create driver");

        for kind in ["C", "D"] {
            qualifications
                .attach(id(driver_id), kind)
                .await
                .expect("Failed to attach qualification");
        }
        println!("  Hired {first_name} {last_name}");
    }
}

async fn seed_customers(db: &DatabaseConnection) {
    let now = chrono::Utc::now().into();

    for (customer_id, name) in CUSTOMERS {
        customers::ActiveModel {
            id: Set(id(customer_id)),
            name: Set(name.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .expect("Failed to create customer");

        company_customers::ActiveModel {
            company_id: Set(id(DEMO_COMPANY_ID)),
            customer_id: Set(id(customer_id)),
            created_at: Set(now),
        }
        .insert(db)
        .await
        .expect("Failed to link customer");
    }
}

async fn seed_vehicles(db: &DatabaseConnection) {
    let now = chrono::Utc::now().into();

    for (vehicle_id, registration, vehicle_type, capacity) in VEHICLES {
        vehicles::ActiveModel {
            id: Set(id(vehicle_id)),
            company_id: Set(id(DEMO_COMPANY_ID)),
            registration: Set(registration.to_string()),
            vehicle_type: Set(vehicle_type),
            capacity: Set(capacity),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .expect("Failed to register vehicle");
    }
}

/// One transport per day of January 2024, alternating kinds and drivers.
/// Every third transport stays unpaid.
async fn seed_transports(db: &DatabaseConnection) {
    let repo = TransportRepository::new(db.clone());
    let (truck_id, bus_id) = (id(VEHICLES[0].0), id(VEHICLES[1].0));

    for day in 1..=28_u32 {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let driver_id = id(DRIVERS[day as usize % DRIVERS.len()].0);
        let cargo = day % 2 == 0;

        let (customer, vehicle_id, end_address, price, details) = if cargo {
            (
                CUSTOMERS[0].0,
                truck_id,
                "Ruse",
                Decimal::from(400 + day * 10),
                TransportDetails::Cargo {
                    cargo_type: "groceries".to_string(),
                    cargo_weight: 8_000,
                },
            )
        } else {
            (
                CUSTOMERS[1].0,
                bus_id,
                "Varna",
                Decimal::from(250 + day * 5),
                TransportDetails::Passenger {
                    number_of_passengers: 40,
                },
            )
        };

        let input = TransportInput {
            driver_id,
            customer_id: id(customer),
            vehicle_id,
            start_address: "Sofia".to_string(),
            end_address: end_address.to_string(),
            start_date: date,
            end_date: date,
            price,
            details,
        };

        let record = repo
            .create(id(DEMO_COMPANY_ID), input.clone())
            .await
            .expect("Failed to create transport");

        if day % 3 != 0 {
            repo.update(record.id.into_inner(), input, true)
                .await
                .expect("Failed to mark transport paid");
        }
    }
}
