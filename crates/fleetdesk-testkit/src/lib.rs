// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use fleetdesk_app::{
    BankAccount, ContactNumber, Employee, EmployeeRole, EmployeeStatus, FleetSnapshot,
    MaintenanceEntry, Party, PartyKind, RecordId, Trip, TripStatus, Truck, TruckOwnership,
};
use time::{Date, Duration};

const FIRST_NAMES: [&str; 16] = [
    "Dilip", "Ramesh", "Suresh", "Anil", "Sunita", "Priya", "Vijay", "Manoj", "Kavita", "Arjun",
    "Imran", "Harpreet", "Lakshmi", "Ganesh", "Farhan", "Meena",
];
const LAST_NAMES: [&str; 14] = [
    "Pawar", "Patil", "Sharma", "Yadav", "Khan", "Singh", "Reddy", "Iyer", "Deshmukh", "Gill",
    "Naik", "Joshi", "Kulkarni", "Shaikh",
];

const COMPANY_PREFIXES: [&str; 12] = [
    "ABC", "XYZ", "Shree", "Om Sai", "Balaji", "Ganga", "Sahyadri", "Deccan", "Konkan", "Vidarbha",
    "Western", "Royal",
];
const COMPANY_SUFFIXES: [&str; 6] = [
    "Transport Co.",
    "Logistics",
    "Roadlines",
    "Carriers",
    "Freight Movers",
    "Cargo",
];

const STATE_CODES: [&str; 8] = ["MH", "GJ", "KA", "TS", "MP", "RJ", "DL", "TN"];
const CITIES: [&str; 14] = [
    "Pune",
    "Mumbai",
    "Nagpur",
    "Nashik",
    "Aurangabad",
    "Hyderabad",
    "Bengaluru",
    "Ahmedabad",
    "Surat",
    "Indore",
    "Jaipur",
    "Delhi",
    "Chennai",
    "Raipur",
];

const MAKERS: [(&str, &[&str]); 4] = [
    ("Tata", &["LPT 3118", "Signa 4825", "Prima 5530"]),
    ("Ashok Leyland", &["Ecomet 1615", "U-3718", "AVTR 4620"]),
    ("Eicher", &["Pro 3015", "Pro 6028"]),
    ("BharatBenz", &["2823R", "3528C"]),
];
const VEHICLE_TYPES: [&str; 6] = [
    "32 FT Container",
    "20 FT Container",
    "Open Body 10 Wheel",
    "Trailer 40 FT",
    "Tanker",
    "Tipper",
];

const MAINTENANCE_WORK: [&str; 10] = [
    "Engine oil and filter change",
    "Front tyre replacement",
    "Clutch plate replacement",
    "Brake liner replacement",
    "Battery replacement",
    "Wheel alignment and balancing",
    "Radiator flush",
    "Gearbox overhaul",
    "Fuel injector cleaning",
    "Electrical wiring repair",
];
const GARAGES: [&str; 6] = [
    "Shree Motors",
    "Sai Auto Works",
    "Highway Diesel Garage",
    "Balaji Service Station",
    "National Tyres",
    "City Truck Care",
];

const BANKS: [(&str, &str); 5] = [
    ("State Bank of India", "SBIN"),
    ("HDFC Bank", "HDFC"),
    ("ICICI Bank", "ICIC"),
    ("Bank of Maharashtra", "MAHB"),
    ("Punjab National Bank", "PUNB"),
];

const TRIP_STATUSES: [TripStatus; 4] = [
    TripStatus::Planned,
    TripStatus::InTransit,
    TripStatus::Delivered,
    TripStatus::Cancelled,
];
const EMPLOYEE_ROLES: [EmployeeRole; 4] = [
    EmployeeRole::Driver,
    EmployeeRole::Driver,
    EmployeeRole::Cleaner,
    EmployeeRole::Staff,
];

/// Query fragments that hit names, numbers, cities and plate prefixes, plus a
/// few that never match and a few that only differ in case or whitespace.
const QUERY_FRAGMENTS: [&str; 18] = [
    "", "a", "TRANS", "logistics", "mh", "98", "0", "pune", "NAGPUR", "tata", "oil", "shree", " ",
    "  ", "zzz", "dilip", "co.", "-",
];

const REFERENCE_YEAR: i32 = 2026;

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Seeded generator of plausible fleet records. Same seed, same records.
#[derive(Debug, Clone)]
pub struct FleetFaker {
    rng: DeterministicRng,
    next_id: u64,
}

impl FleetFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            next_id: 1,
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    /// A fleet with `size` records per screen.
    pub fn fleet_snapshot(&mut self, size: usize) -> FleetSnapshot {
        let trucks = (0..size).map(|_| self.truck()).collect::<Vec<_>>();
        let parties = (0..size).map(|_| self.party()).collect::<Vec<_>>();
        let employees = (0..size).map(|_| self.employee()).collect::<Vec<_>>();
        let trips = (0..size)
            .map(|index| {
                let vehicle_no = trucks
                    .get(index % trucks.len().max(1))
                    .map_or_else(|| self.vehicle_no(), |truck| truck.vehicle_no.clone());
                let party = parties
                    .get(self.rng.int_n(parties.len()))
                    .map_or_else(|| self.company_name(), |party| party.name.clone());
                self.trip(&vehicle_no, &party)
            })
            .collect();
        let maintenance = (0..size)
            .map(|index| {
                let vehicle_no = trucks
                    .get(index % trucks.len().max(1))
                    .map_or_else(|| self.vehicle_no(), |truck| truck.vehicle_no.clone());
                self.maintenance_entry(&vehicle_no)
            })
            .collect();

        FleetSnapshot {
            maintenance,
            trips,
            trucks,
            employees,
            parties,
        }
    }

    pub fn party(&mut self) -> Party {
        let name = self.company_name();
        let pan = self.pan_no();
        let gst = format!("27{pan}1Z{}", self.rng.int_n(10));
        let opening = self.int_range_i64(0, 500) * 1_000;
        Party {
            id: self.next_record_id("p"),
            email: self.rng.bool().then(|| {
                format!(
                    "accounts@{}.in",
                    name.to_ascii_lowercase()
                        .chars()
                        .filter(char::is_ascii_alphanumeric)
                        .collect::<String>()
                )
            }),
            address: self
                .rng
                .bool()
                .then(|| format!("{} MIDC, {}", self.int_range_i64(1, 400), self.city())),
            pan_no: self.rng.bool().then_some(pan),
            gst_no: self.rng.bool().then_some(gst),
            phones: self.phones(),
            kind: if self.rng.bool() {
                PartyKind::Transporter
            } else {
                PartyKind::Party
            },
            credit_period_days: [0, 15, 30, 45, 60][self.rng.int_n(5)],
            opening_balance: opening,
            closing_balance: opening + self.int_range_i64(-50, 50) * 1_000,
            name,
        }
    }

    pub fn employee(&mut self) -> Employee {
        let role = EMPLOYEE_ROLES[self.rng.int_n(EMPLOYEE_ROLES.len())];
        let is_driver = role == EmployeeRole::Driver;
        let name = self.person_name();
        let opening = self.int_range_i64(0, 60) * 1_000;
        Employee {
            id: self.next_record_id("e"),
            phones: self.phones(),
            accounts: (0..self.rng.int_n(3)).map(|_| self.bank_account(&name)).collect(),
            role,
            status: if self.rng.int_n(5) == 0 {
                EmployeeStatus::Inactive
            } else {
                EmployeeStatus::Active
            },
            truck: is_driver.then(|| self.vehicle_no()),
            license_no: is_driver.then(|| {
                format!(
                    "{}{:02}{:011}",
                    self.pick(&STATE_CODES),
                    self.int_range_i64(1, 50),
                    self.int_range_i64(0, 99_999_999_999)
                )
            }),
            license_expiry: is_driver.then(|| self.date_in_year(REFERENCE_YEAR + 1)),
            referred_by: self.rng.bool().then(|| self.person_name()),
            opening_balance: opening,
            closing_balance: opening - self.int_range_i64(0, 20) * 500,
            remark: None,
            name,
        }
    }

    pub fn truck(&mut self) -> Truck {
        let (maker, models) = MAKERS[self.rng.int_n(MAKERS.len())];
        let allowed = self.int_range_i64(9, 35) as u32 * 1_000;
        let empty = self.int_range_i64(5, 12) as u32 * 1_000;
        let registration_year = self.int_range_i64(2012, 2024) as i32;
        let ownership = if self.rng.int_n(4) == 0 {
            TruckOwnership::Market
        } else {
            TruckOwnership::Own
        };
        Truck {
            id: self.next_record_id("t"),
            vehicle_no: self.vehicle_no(),
            ownership,
            current_driver: self.rng.bool().then(|| self.person_name()),
            owner: Some(self.company_name()),
            party: (ownership == TruckOwnership::Market).then(|| self.company_name()),
            registration_date: Some(self.date_in_year(registration_year)),
            vehicle_type: self
                .rng
                .bool()
                .then(|| self.pick(&VEHICLE_TYPES).to_owned()),
            allowed_weight_kg: Some(allowed),
            empty_weight_kg: Some(empty),
            total_weight_kg: Some(allowed + empty),
            maker: Some(maker.to_owned()),
            model: Some(models[self.rng.int_n(models.len())].to_owned()),
            chassis_no: Some(format!("CHS{:08}", self.int_range_i64(0, 99_999_999))),
            engine_no: Some(format!("ENG{:07}", self.int_range_i64(0, 9_999_999))),
            insurance_date: Some(self.date_in_year(REFERENCE_YEAR)),
            fitness_date: Some(self.date_in_year(REFERENCE_YEAR)),
            permit_date: self
                .rng
                .bool()
                .then(|| self.date_in_year(REFERENCE_YEAR + 1)),
            puc_date: Some(self.date_in_year(REFERENCE_YEAR)),
            tax_date: Some(self.date_in_year(REFERENCE_YEAR)),
            sold: self.rng.int_n(10) == 0,
            avg_km: Some(self.int_range_i64(250, 600) as u32),
            fuel_avg: Some(self.int_range_i64(25, 55) as f64 / 10.0),
            last_km_reading: Some(self.int_range_i64(40_000, 900_000) as u64),
            last_km_reading_date: Some(self.date_in_year(REFERENCE_YEAR)),
            maintenance_remark: None,
            remark: None,
        }
    }

    pub fn trip(&mut self, vehicle_no: &str, party: &str) -> Trip {
        let origin = self.city();
        let destination = loop {
            let candidate = self.city();
            if candidate != origin {
                break candidate;
            }
        };
        let status = TRIP_STATUSES[self.rng.int_n(TRIP_STATUSES.len())];
        let start_date = self.date_in_year(REFERENCE_YEAR);
        let freight = self.int_range_i64(15, 95) * 1_000;
        Trip {
            id: self.next_record_id("tr"),
            lr_no: format!("LR-{}", self.int_range_i64(1_000, 9_999)),
            vehicle_no: vehicle_no.to_owned(),
            driver: self.rng.bool().then(|| self.person_name()),
            party: party.to_owned(),
            origin,
            destination,
            start_date,
            end_date: (status == TripStatus::Delivered)
                .then(|| start_date + Duration::days(self.int_range_i64(1, 6))),
            freight,
            advance: self
                .rng
                .bool()
                .then(|| freight / 4 - freight / 4 % 500),
            status,
            remark: None,
        }
    }

    pub fn maintenance_entry(&mut self, vehicle_no: &str) -> MaintenanceEntry {
        MaintenanceEntry {
            id: self.next_record_id("m"),
            vehicle_no: vehicle_no.to_owned(),
            service_date: self.date_in_year(REFERENCE_YEAR),
            work: self.pick(&MAINTENANCE_WORK).to_owned(),
            garage: self.rng.bool().then(|| self.pick(&GARAGES).to_owned()),
            odometer_km: Some(self.int_range_i64(40_000, 900_000) as u64),
            cost: self.int_range_i64(5, 400) * 100,
            remark: None,
        }
    }

    /// A search query drawn from fragments that exercise matches, misses,
    /// case folding and literal whitespace.
    pub fn query(&mut self) -> String {
        self.pick(&QUERY_FRAGMENTS).to_owned()
    }

    pub fn date_in_year(&mut self, year: i32) -> Date {
        let start = Date::from_ordinal_date(year, 1).unwrap_or(Date::MIN);
        let days = if time::util::is_leap_year(year) { 366 } else { 365 };
        start + Duration::days(self.int_range_i64(0, days - 1))
    }

    pub fn vehicle_no(&mut self) -> String {
        let letters = [b'A' + self.rng.int_n(26) as u8, b'A' + self.rng.int_n(26) as u8];
        format!(
            "{}{:02}{}{:04}",
            self.pick(&STATE_CODES),
            self.int_range_i64(1, 50),
            String::from_utf8_lossy(&letters),
            self.int_range_i64(1, 9_999)
        )
    }

    fn next_record_id(&mut self, prefix: &str) -> RecordId {
        let id = RecordId::new(format!("{prefix}{}", self.next_id));
        self.next_id += 1;
        id
    }

    fn person_name(&mut self) -> String {
        format!("{} {}", self.pick(&FIRST_NAMES), self.pick(&LAST_NAMES))
    }

    fn company_name(&mut self) -> String {
        format!(
            "{} {}",
            self.pick(&COMPANY_PREFIXES),
            self.pick(&COMPANY_SUFFIXES)
        )
    }

    fn city(&mut self) -> String {
        self.pick(&CITIES).to_owned()
    }

    fn phones(&mut self) -> Vec<ContactNumber> {
        let mut phones = Vec::new();
        if self.rng.int_n(8) != 0 {
            phones.push(ContactNumber {
                label: "Mobile".to_owned(),
                value: self.mobile_number(),
            });
        }
        if self.rng.int_n(3) == 0 {
            phones.push(ContactNumber {
                label: "Office".to_owned(),
                value: format!("0{:09}", self.int_range_i64(0, 999_999_999)),
            });
        }
        phones
    }

    fn mobile_number(&mut self) -> String {
        format!(
            "{}{:09}",
            self.int_range_i64(6, 9),
            self.int_range_i64(0, 999_999_999)
        )
    }

    fn pan_no(&mut self) -> String {
        let mut pan = String::with_capacity(10);
        for _ in 0..5 {
            pan.push(char::from(b'A' + self.rng.int_n(26) as u8));
        }
        pan.push_str(&format!("{:04}", self.int_range_i64(0, 9_999)));
        pan.push(char::from(b'A' + self.rng.int_n(26) as u8));
        pan
    }

    fn bank_account(&mut self, holder: &str) -> BankAccount {
        let (bank, ifsc_prefix) = BANKS[self.rng.int_n(BANKS.len())];
        BankAccount {
            name: holder.to_owned(),
            account_no: format!("{:012}", self.int_range_i64(0, 999_999_999_999)),
            ifsc: format!("{ifsc_prefix}0{:06}", self.int_range_i64(0, 999_999)),
            bank: bank.to_owned(),
            branch: self.city(),
            remark: None,
        }
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }

    fn int_range_i64(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = max - min + 1;
        min + (self.rng.next_u64() % (span as u64)) as i64
    }
}
