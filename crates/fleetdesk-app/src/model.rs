// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::Date;

use crate::ids::RecordId;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartyKind {
    Transporter,
    Party,
}

impl PartyKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transporter => "TRANSPORTER",
            Self::Party => "PARTY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeRole {
    Driver,
    Cleaner,
    Staff,
    Manager,
}

impl EmployeeRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driver => "Driver",
            Self::Cleaner => "Cleaner",
            Self::Staff => "Staff",
            Self::Manager => "Manager",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruckOwnership {
    Own,
    Market,
}

impl TruckOwnership {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Own => "own",
            Self::Market => "market",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Planned,
    InTransit,
    Delivered,
    Cancelled,
}

impl TripStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::InTransit => "In transit",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    Maintenance,
    Trips,
    Trucks,
    Employees,
    Parties,
}

impl ScreenKind {
    pub const ALL: [Self; 5] = [
        Self::Maintenance,
        Self::Trips,
        Self::Trucks,
        Self::Employees,
        Self::Parties,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance",
            Self::Trips => "trips",
            Self::Trucks => "trucks",
            Self::Employees => "employees",
            Self::Parties => "party",
        }
    }

    pub const fn search_hint(self) -> &'static str {
        match self {
            Self::Maintenance => "search truck number, work, garage...",
            Self::Trips => "search LR, truck, driver, party, route...",
            Self::Trucks => "search truck number, driver, party...",
            Self::Employees => "search employee...",
            Self::Parties => "search parties...",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "maintenance" => Some(Self::Maintenance),
            "trips" => Some(Self::Trips),
            "trucks" => Some(Self::Trucks),
            "employees" => Some(Self::Employees),
            "party" | "parties" => Some(Self::Parties),
            _ => None,
        }
    }

    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|screen| *screen == self)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Focus {
    List,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactNumber {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub name: String,
    pub account_no: String,
    pub ifsc: String,
    pub bank: String,
    pub branch: String,
    #[serde(default)]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub phones: Vec<ContactNumber>,
    pub kind: PartyKind,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub pan_no: Option<String>,
    #[serde(default)]
    pub gst_no: Option<String>,
    pub credit_period_days: u32,
    pub opening_balance: i64,
    pub closing_balance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub phones: Vec<ContactNumber>,
    #[serde(default)]
    pub accounts: Vec<BankAccount>,
    pub role: EmployeeRole,
    pub status: EmployeeStatus,
    #[serde(default)]
    pub truck: Option<String>,
    #[serde(default)]
    pub license_no: Option<String>,
    #[serde(default, with = "iso_date::option")]
    pub license_expiry: Option<Date>,
    #[serde(default)]
    pub referred_by: Option<String>,
    pub opening_balance: i64,
    pub closing_balance: i64,
    #[serde(default)]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    pub id: RecordId,
    pub vehicle_no: String,
    pub ownership: TruckOwnership,
    #[serde(default)]
    pub current_driver: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default, with = "iso_date::option")]
    pub registration_date: Option<Date>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub allowed_weight_kg: Option<u32>,
    #[serde(default)]
    pub empty_weight_kg: Option<u32>,
    #[serde(default)]
    pub total_weight_kg: Option<u32>,
    #[serde(default)]
    pub maker: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub chassis_no: Option<String>,
    #[serde(default)]
    pub engine_no: Option<String>,
    #[serde(default, with = "iso_date::option")]
    pub insurance_date: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub fitness_date: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub permit_date: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub puc_date: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub tax_date: Option<Date>,
    #[serde(default)]
    pub sold: bool,
    #[serde(default)]
    pub avg_km: Option<u32>,
    #[serde(default)]
    pub fuel_avg: Option<f64>,
    #[serde(default)]
    pub last_km_reading: Option<u64>,
    #[serde(default, with = "iso_date::option")]
    pub last_km_reading_date: Option<Date>,
    #[serde(default)]
    pub maintenance_remark: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: RecordId,
    pub lr_no: String,
    pub vehicle_no: String,
    #[serde(default)]
    pub driver: Option<String>,
    pub party: String,
    pub origin: String,
    pub destination: String,
    #[serde(with = "iso_date")]
    pub start_date: Date,
    #[serde(default, with = "iso_date::option")]
    pub end_date: Option<Date>,
    pub freight: i64,
    #[serde(default)]
    pub advance: Option<i64>,
    pub status: TripStatus,
    #[serde(default)]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceEntry {
    pub id: RecordId,
    pub vehicle_no: String,
    #[serde(with = "iso_date")]
    pub service_date: Date,
    pub work: String,
    #[serde(default)]
    pub garage: Option<String>,
    #[serde(default)]
    pub odometer_km: Option<u64>,
    pub cost: i64,
    #[serde(default)]
    pub remark: Option<String>,
}

/// Every record sequence the fleet screens browse, as supplied by a data source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FleetSnapshot {
    #[serde(default)]
    pub maintenance: Vec<MaintenanceEntry>,
    #[serde(default)]
    pub trips: Vec<Trip>,
    #[serde(default)]
    pub trucks: Vec<Truck>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub parties: Vec<Party>,
}

impl FleetSnapshot {
    pub fn record_count(&self, screen: ScreenKind) -> usize {
        match screen {
            ScreenKind::Maintenance => self.maintenance.len(),
            ScreenKind::Trips => self.trips.len(),
            ScreenKind::Trucks => self.trucks.len(),
            ScreenKind::Employees => self.employees.len(),
            ScreenKind::Parties => self.parties.len(),
        }
    }
}
