// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod validation;

use anyhow::{Context, Result, bail};
use fleetdesk_app::{
    BankAccount, ContactNumber, Employee, EmployeeRole, EmployeeStatus, FleetSnapshot,
    MaintenanceEntry, Party, PartyKind, RecordId, ScreenKind, Trip, TripStatus, Truck,
    TruckOwnership,
};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use time::macros::date;
use tracing::info;

pub use validation::{ValidationError, ValidationResult, validate_snapshot};

pub const APP_NAME: &str = "fleetdesk";
pub const DATA_PATH_ENV: &str = "FLEETDESK_DATA_PATH";

/// Where the fleet records come from. Both sources are read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    Demo,
    File(PathBuf),
}

impl SnapshotSource {
    pub fn load(&self) -> Result<FleetSnapshot> {
        match self {
            Self::Demo => Ok(demo_snapshot()),
            Self::File(path) => load_snapshot(path),
        }
    }
}

impl fmt::Display for SnapshotSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Demo => f.write_str("demo data"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The `FLEETDESK_DATA_PATH` override, checked the same way as a configured
/// path. Unset or empty means no override.
pub fn env_snapshot_path() -> Result<Option<PathBuf>> {
    let Some(value) = env::var_os(DATA_PATH_ENV).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    validate_snapshot_path(&value.to_string_lossy())
        .with_context(|| format!("invalid {DATA_PATH_ENV}"))?;
    Ok(Some(PathBuf::from(value)))
}

pub fn load_snapshot(path: &Path) -> Result<FleetSnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read fleet snapshot {}", path.display()))?;
    let snapshot: FleetSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("parse fleet snapshot {}", path.display()))?;
    validate_snapshot(&snapshot)
        .with_context(|| format!("invalid fleet snapshot {}", path.display()))?;

    info!(
        path = %path.display(),
        trucks = snapshot.record_count(ScreenKind::Trucks),
        trips = snapshot.record_count(ScreenKind::Trips),
        employees = snapshot.record_count(ScreenKind::Employees),
        parties = snapshot.record_count(ScreenKind::Parties),
        maintenance = snapshot.record_count(ScreenKind::Maintenance),
        "loaded fleet snapshot"
    );
    Ok(snapshot)
}

pub fn validate_snapshot_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        bail!("snapshot path must not be empty");
    }

    if let Some(index) = path.find("://")
        && index > 0
    {
        let scheme = &path[..index];
        if scheme.chars().all(char::is_alphabetic) {
            bail!(
                "snapshot path {path:?} looks like a URI ({scheme}://); records are only read from local files"
            );
        }
    }

    if path.starts_with("file:") {
        bail!("snapshot path {path:?} uses file: URI syntax; pass a plain filesystem path");
    }

    Ok(())
}

fn phone(label: &str, value: &str) -> ContactNumber {
    ContactNumber {
        label: label.to_owned(),
        value: value.to_owned(),
    }
}

fn test_account() -> BankAccount {
    BankAccount {
        name: "testing".to_owned(),
        account_no: "8765432109".to_owned(),
        ifsc: "TEST0001234".to_owned(),
        bank: "Test Bank".to_owned(),
        branch: "Test Branch".to_owned(),
        remark: None,
    }
}

/// The records the fleet screens ship with when no snapshot is configured.
pub fn demo_snapshot() -> FleetSnapshot {
    FleetSnapshot {
        maintenance: demo_maintenance(),
        trips: demo_trips(),
        trucks: demo_trucks(),
        employees: demo_employees(),
        parties: demo_parties(),
    }
}

fn demo_parties() -> Vec<Party> {
    vec![
        Party {
            id: RecordId::from("1"),
            name: "ABC Transport Co.".to_owned(),
            phones: vec![phone("Mobile", "9876543210"), phone("Office", "0123456789")],
            kind: PartyKind::Transporter,
            email: Some("abc@transport.com".to_owned()),
            address: Some("123 Main St, City".to_owned()),
            pan_no: Some("ABCDE1234F".to_owned()),
            gst_no: Some("27ABCDE1234F1Z5".to_owned()),
            credit_period_days: 30,
            opening_balance: 50_000,
            closing_balance: 45_000,
        },
        Party {
            id: RecordId::from("2"),
            name: "XYZ Logistics".to_owned(),
            phones: vec![phone("Mobile", "8765432109")],
            kind: PartyKind::Party,
            email: Some("xyz@logistics.com".to_owned()),
            address: Some("456 Business Park".to_owned()),
            pan_no: Some("XYZAB5678C".to_owned()),
            gst_no: Some("29XYZAB5678C1A2".to_owned()),
            credit_period_days: 45,
            opening_balance: 75_000,
            closing_balance: 80_000,
        },
    ]
}

fn demo_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: RecordId::from("1"),
            name: "ABC Transport Co.".to_owned(),
            phones: vec![phone("Mobile", "9876543210"), phone("Office", "0123456789")],
            accounts: vec![test_account()],
            role: EmployeeRole::Driver,
            status: EmployeeStatus::Active,
            truck: Some("MH12AB1234".to_owned()),
            license_no: Some("DL1234567890".to_owned()),
            license_expiry: Some(date!(2024 - 01 - 01)),
            referred_by: Some("John Doe".to_owned()),
            opening_balance: 50_000,
            closing_balance: 45_000,
            remark: None,
        },
        Employee {
            id: RecordId::from("2"),
            name: "XYZ Logistics".to_owned(),
            phones: vec![phone("Mobile", "8765432109")],
            accounts: vec![test_account()],
            role: EmployeeRole::Staff,
            status: EmployeeStatus::Active,
            truck: Some("MH12AB1234".to_owned()),
            license_no: Some("DL1234567890".to_owned()),
            license_expiry: Some(date!(2024 - 01 - 01)),
            referred_by: Some("John Doe".to_owned()),
            opening_balance: 50_000,
            closing_balance: 45_000,
            remark: None,
        },
    ]
}

fn demo_trucks() -> Vec<Truck> {
    vec![Truck {
        id: RecordId::from("t1"),
        vehicle_no: "MH12AB1234".to_owned(),
        ownership: TruckOwnership::Own,
        current_driver: Some("Dilip".to_owned()),
        owner: Some("Indian Transport".to_owned()),
        party: None,
        registration_date: Some(date!(2023 - 09 - 11)),
        vehicle_type: Some("32 FT Container".to_owned()),
        allowed_weight_kg: Some(16_000),
        empty_weight_kg: Some(7_000),
        total_weight_kg: Some(23_000),
        maker: Some("Tata".to_owned()),
        model: Some("LPT 3118".to_owned()),
        chassis_no: Some("CHS12345678".to_owned()),
        engine_no: Some("ENG9876543".to_owned()),
        insurance_date: Some(date!(2025 - 01 - 01)),
        fitness_date: Some(date!(2024 - 12 - 02)),
        permit_date: Some(date!(2025 - 01 - 31)),
        puc_date: Some(date!(2024 - 11 - 07)),
        tax_date: Some(date!(2024 - 12 - 02)),
        sold: false,
        avg_km: Some(450),
        fuel_avg: Some(3.5),
        last_km_reading: Some(458_200),
        last_km_reading_date: Some(date!(2023 - 10 - 11)),
        maintenance_remark: None,
        remark: Some("Vehicle in good condition".to_owned()),
    }]
}

fn demo_trips() -> Vec<Trip> {
    vec![
        Trip {
            id: RecordId::from("tr1"),
            lr_no: "LR-1001".to_owned(),
            vehicle_no: "MH12AB1234".to_owned(),
            driver: Some("Dilip".to_owned()),
            party: "ABC Transport Co.".to_owned(),
            origin: "Pune".to_owned(),
            destination: "Nagpur".to_owned(),
            start_date: date!(2023 - 10 - 02),
            end_date: Some(date!(2023 - 10 - 04)),
            freight: 42_000,
            advance: Some(10_000),
            status: TripStatus::Delivered,
            remark: None,
        },
        Trip {
            id: RecordId::from("tr2"),
            lr_no: "LR-1002".to_owned(),
            vehicle_no: "MH12AB1234".to_owned(),
            driver: Some("Dilip".to_owned()),
            party: "XYZ Logistics".to_owned(),
            origin: "Nagpur".to_owned(),
            destination: "Hyderabad".to_owned(),
            start_date: date!(2023 - 10 - 06),
            end_date: None,
            freight: 38_500,
            advance: None,
            status: TripStatus::InTransit,
            remark: Some("Return load".to_owned()),
        },
    ]
}

fn demo_maintenance() -> Vec<MaintenanceEntry> {
    vec![
        MaintenanceEntry {
            id: RecordId::from("m1"),
            vehicle_no: "MH12AB1234".to_owned(),
            service_date: date!(2023 - 09 - 20),
            work: "Engine oil and filter change".to_owned(),
            garage: Some("Shree Motors".to_owned()),
            odometer_km: Some(452_900),
            cost: 6_800,
            remark: None,
        },
        MaintenanceEntry {
            id: RecordId::from("m2"),
            vehicle_no: "MH12AB1234".to_owned(),
            service_date: date!(2023 - 10 - 09),
            work: "Front tyre replacement".to_owned(),
            garage: None,
            odometer_km: Some(458_000),
            cost: 21_000,
            remark: Some("Two tyres, Apollo".to_owned()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{SnapshotSource, demo_snapshot, validate_snapshot, validate_snapshot_path};
    use std::path::PathBuf;

    #[test]
    fn demo_snapshot_is_valid() {
        assert_eq!(validate_snapshot(&demo_snapshot()), Ok(()));
    }

    #[test]
    fn snapshot_path_rejects_uri_forms() {
        assert!(validate_snapshot_path("https://example.com/fleet.json").is_err());
        assert!(validate_snapshot_path("file:fleet.json").is_err());
        assert!(validate_snapshot_path("").is_err());
        assert!(validate_snapshot_path("/srv/fleet/fleet.json").is_ok());
    }

    #[test]
    fn source_display_names_the_origin() {
        assert_eq!(SnapshotSource::Demo.to_string(), "demo data");
        assert_eq!(
            SnapshotSource::File(PathBuf::from("/tmp/fleet.json")).to_string(),
            "/tmp/fleet.json"
        );
    }
}
