// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::browser::Record;
use crate::detail::{DetailBuilder, DetailLine, DetailView, RecordSummary};
use crate::format::{
    format_date, format_days, format_decimal, format_kg, format_km, format_rupees,
};
use crate::ids::RecordId;
use crate::model::{
    BankAccount, ContactNumber, Employee, MaintenanceEntry, Party, ScreenKind, Trip, Truck,
};

fn phone_values(phones: &[ContactNumber]) -> impl Iterator<Item = &str> {
    phones.iter().map(|phone| phone.value.as_str())
}

fn phone_card_line(phones: &[ContactNumber]) -> String {
    if phones.is_empty() {
        return "No phone".to_owned();
    }
    phone_values(phones).collect::<Vec<_>>().join(", ")
}

fn phone_lines(phones: &[ContactNumber]) -> Vec<DetailLine> {
    phones
        .iter()
        .map(|phone| DetailLine::new(phone.label.clone(), phone.value.clone()))
        .collect()
}

fn account_lines(accounts: &[BankAccount]) -> Vec<DetailLine> {
    accounts
        .iter()
        .map(|account| {
            let mut value = format!(
                "{} ({}, {}, IFSC {})",
                account.account_no, account.bank, account.branch, account.ifsc
            );
            if let Some(remark) = account.remark.as_deref().filter(|r| !r.trim().is_empty()) {
                value.push_str(", Remark: ");
                value.push_str(remark);
            }
            DetailLine::new(account.name.clone(), value)
        })
        .collect()
}

impl Record for Party {
    const SCREEN: ScreenKind = ScreenKind::Parties;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(phone_values(&self.phones));
        fields
    }

    fn summary(&self) -> RecordSummary {
        RecordSummary {
            id: self.id.clone(),
            headline: self.name.clone(),
            lines: vec![
                phone_card_line(&self.phones),
                self.kind.as_str().to_owned(),
            ],
        }
    }

    fn detail(&self) -> DetailView {
        DetailBuilder::new(self.name.clone())
            .required("Type", self.kind.as_str())
            .lines("Phone", phone_lines(&self.phones))
            .optional("Email", self.email.as_deref())
            .optional("Address", self.address.as_deref())
            .optional("PAN", self.pan_no.as_deref())
            .optional("GST", self.gst_no.as_deref())
            .required("Credit Period", format_days(self.credit_period_days))
            .required("Opening Balance", format_rupees(self.opening_balance))
            .required("Closing Balance", format_rupees(self.closing_balance))
            .build()
    }
}

impl Record for Employee {
    const SCREEN: ScreenKind = ScreenKind::Employees;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(phone_values(&self.phones));
        fields
    }

    fn summary(&self) -> RecordSummary {
        RecordSummary {
            id: self.id.clone(),
            headline: self.name.clone(),
            lines: vec![
                phone_card_line(&self.phones),
                self.role.as_str().to_owned(),
            ],
        }
    }

    fn detail(&self) -> DetailView {
        DetailBuilder::new(self.name.clone())
            .required("Role", self.role.as_str())
            .lines("Phone", phone_lines(&self.phones))
            .required("Status", self.status.as_str())
            .lines("Account", account_lines(&self.accounts))
            .optional("Truck", self.truck.as_deref())
            .optional("License No", self.license_no.as_deref())
            .optional("License Expiry Date", self.license_expiry.map(format_date))
            .optional("Referred By", self.referred_by.as_deref())
            .required("Opening Balance", format_rupees(self.opening_balance))
            .required("Closing Balance", format_rupees(self.closing_balance))
            .optional("Remark", self.remark.as_deref())
            .build()
    }
}

impl Record for Truck {
    const SCREEN: ScreenKind = ScreenKind::Trucks;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.vehicle_no.as_str()];
        fields.extend(self.current_driver.as_deref());
        fields.extend(self.party.as_deref());
        fields
    }

    fn summary(&self) -> RecordSummary {
        let mut lines = vec![
            self.vehicle_type
                .as_deref()
                .filter(|kind| !kind.trim().is_empty())
                .unwrap_or("Truck")
                .to_owned(),
            format!(
                "Driver: {}",
                self.current_driver
                    .as_deref()
                    .filter(|driver| !driver.trim().is_empty())
                    .unwrap_or("N/A")
            ),
        ];
        if self.sold {
            lines.push("Sold".to_owned());
        }
        RecordSummary {
            id: self.id.clone(),
            headline: self.vehicle_no.clone(),
            lines,
        }
    }

    fn detail(&self) -> DetailView {
        DetailBuilder::new(self.vehicle_no.clone())
            .required("Truck Type", self.ownership.as_str())
            .optional("Driver", self.current_driver.as_deref())
            .optional("Owner", self.owner.as_deref())
            .optional("Party", self.party.as_deref())
            .optional("Registration Date", self.registration_date.map(format_date))
            .optional("Vehicle Type", self.vehicle_type.as_deref())
            .required("Sold", if self.sold { "yes" } else { "no" })
            .section("Dimensions")
            .optional("Allowed Weight", self.allowed_weight_kg.map(format_kg))
            .optional("Empty Weight", self.empty_weight_kg.map(format_kg))
            .optional("Total Weight", self.total_weight_kg.map(format_kg))
            .section("Vehicle Info")
            .optional("Maker", self.maker.as_deref())
            .optional("Model", self.model.as_deref())
            .optional("Chassis No", self.chassis_no.as_deref())
            .optional("Engine No", self.engine_no.as_deref())
            .section("Important Dates")
            .optional("Insurance", self.insurance_date.map(format_date))
            .optional("Fitness", self.fitness_date.map(format_date))
            .optional("Permit", self.permit_date.map(format_date))
            .optional("PUC", self.puc_date.map(format_date))
            .optional("Tax", self.tax_date.map(format_date))
            .section("Performance")
            .optional("Avg KM", self.avg_km.map(|km| format_km(u64::from(km))))
            .optional("Fuel Avg", self.fuel_avg.map(format_decimal))
            .optional("Last KM Reading", self.last_km_reading.map(format_km))
            .optional("Reading Date", self.last_km_reading_date.map(format_date))
            .section("Notes")
            .optional("Maintenance", self.maintenance_remark.as_deref())
            .optional("Remark", self.remark.as_deref())
            .build()
    }
}

impl Record for Trip {
    const SCREEN: ScreenKind = ScreenKind::Trips;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.lr_no.as_str(), self.vehicle_no.as_str()];
        fields.extend(self.driver.as_deref());
        fields.extend([
            self.party.as_str(),
            self.origin.as_str(),
            self.destination.as_str(),
        ]);
        fields
    }

    fn summary(&self) -> RecordSummary {
        RecordSummary {
            id: self.id.clone(),
            headline: format!("{} · {}", self.lr_no, self.vehicle_no),
            lines: vec![
                format!("{} → {}", self.origin, self.destination),
                format!("{} · {}", self.party, self.status.label()),
            ],
        }
    }

    fn detail(&self) -> DetailView {
        let balance = match self.advance {
            Some(advance) => self.freight.checked_sub(advance),
            None => Some(self.freight),
        };
        DetailBuilder::new(self.lr_no.clone())
            .required("Status", self.status.label())
            .required("Truck", self.vehicle_no.clone())
            .optional("Driver", self.driver.as_deref())
            .required("Party", self.party.clone())
            .required("From", self.origin.clone())
            .required("To", self.destination.clone())
            .required("Start Date", format_date(self.start_date))
            .optional("End Date", self.end_date.map(format_date))
            .section("Billing")
            .required("Freight", format_rupees(self.freight))
            .optional("Advance", self.advance.map(format_rupees))
            .optional("Balance", balance.map(format_rupees))
            .optional("Remark", self.remark.as_deref())
            .build()
    }
}

impl Record for MaintenanceEntry {
    const SCREEN: ScreenKind = ScreenKind::Maintenance;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.vehicle_no.as_str(), self.work.as_str()];
        fields.extend(self.garage.as_deref());
        fields
    }

    fn summary(&self) -> RecordSummary {
        RecordSummary {
            id: self.id.clone(),
            headline: self.vehicle_no.clone(),
            lines: vec![
                self.work.clone(),
                format!(
                    "{} · {}",
                    format_date(self.service_date),
                    format_rupees(self.cost)
                ),
            ],
        }
    }

    fn detail(&self) -> DetailView {
        DetailBuilder::new(self.vehicle_no.clone())
            .required("Work", self.work.clone())
            .required("Service Date", format_date(self.service_date))
            .optional("Garage", self.garage.as_deref())
            .optional("Odometer", self.odometer_km.map(format_km))
            .required("Cost", format_rupees(self.cost))
            .optional("Remark", self.remark.as_deref())
            .build()
    }
}
