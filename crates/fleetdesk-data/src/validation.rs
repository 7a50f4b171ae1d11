// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use fleetdesk_app::{FleetSnapshot, Record, RecordId, ScreenKind};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyId {
        screen: ScreenKind,
        index: usize,
    },
    DuplicateId {
        screen: ScreenKind,
        id: RecordId,
    },
    MissingField {
        screen: ScreenKind,
        id: RecordId,
        field: &'static str,
    },
    NegativeAmount {
        screen: ScreenKind,
        id: RecordId,
        field: &'static str,
        amount: i64,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId { screen, index } => {
                write!(f, "{} record #{index} has an empty id", screen.label())
            }
            Self::DuplicateId { screen, id } => {
                write!(f, "{} id \"{id}\" appears more than once", screen.label())
            }
            Self::MissingField { screen, id, field } => {
                write!(f, "{} record \"{id}\" is missing {field}", screen.label())
            }
            Self::NegativeAmount {
                screen,
                id,
                field,
                amount,
            } => write!(
                f,
                "{} record \"{id}\" has negative {field} ({amount})",
                screen.label()
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Checks id uniqueness, mandatory fields and non-negative amounts across
/// every sequence.
pub fn validate_snapshot(snapshot: &FleetSnapshot) -> ValidationResult<()> {
    check_sequence(&snapshot.maintenance, |entry| {
        vec![("vehicle number", &entry.vehicle_no), ("work", &entry.work)]
    })?;
    check_amounts(&snapshot.maintenance, |entry| vec![("cost", Some(entry.cost))])?;
    check_sequence(&snapshot.trips, |trip| {
        vec![
            ("LR number", &trip.lr_no),
            ("vehicle number", &trip.vehicle_no),
            ("party", &trip.party),
            ("origin", &trip.origin),
            ("destination", &trip.destination),
        ]
    })?;
    check_amounts(&snapshot.trips, |trip| {
        vec![("freight", Some(trip.freight)), ("advance", trip.advance)]
    })?;
    check_sequence(&snapshot.trucks, |truck| {
        vec![("vehicle number", &truck.vehicle_no)]
    })?;
    check_sequence(&snapshot.employees, |employee| {
        let mut fields = vec![("name", &employee.name)];
        fields.extend(employee.phones.iter().map(|phone| ("phone number", &phone.value)));
        fields
    })?;
    check_sequence(&snapshot.parties, |party| {
        let mut fields = vec![("name", &party.name)];
        fields.extend(party.phones.iter().map(|phone| ("phone number", &phone.value)));
        fields
    })?;
    Ok(())
}

fn check_sequence<R, F>(records: &[R], mandatory: F) -> ValidationResult<()>
where
    R: Record,
    F: for<'a> Fn(&'a R) -> Vec<(&'static str, &'a String)>,
{
    let mut seen = BTreeSet::new();
    for (index, record) in records.iter().enumerate() {
        let id = record.id();
        if id.as_str().trim().is_empty() {
            return Err(ValidationError::EmptyId {
                screen: R::SCREEN,
                index,
            });
        }
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateId {
                screen: R::SCREEN,
                id: id.clone(),
            });
        }
        if let Some((field, _)) = mandatory(record)
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(ValidationError::MissingField {
                screen: R::SCREEN,
                id: id.clone(),
                field,
            });
        }
    }
    Ok(())
}

fn check_amounts<R, F>(records: &[R], amounts: F) -> ValidationResult<()>
where
    R: Record,
    F: Fn(&R) -> Vec<(&'static str, Option<i64>)>,
{
    for record in records {
        let negative = amounts(record)
            .into_iter()
            .find_map(|(field, amount)| amount.filter(|value| *value < 0).map(|v| (field, v)));
        if let Some((field, amount)) = negative {
            return Err(ValidationError::NegativeAmount {
                screen: R::SCREEN,
                id: record.id().clone(),
                field,
                amount,
            });
        }
    }
    Ok(())
}
