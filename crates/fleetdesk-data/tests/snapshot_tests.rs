// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use fleetdesk_app::{RecordId, ScreenKind};
use fleetdesk_data::{
    SnapshotSource, ValidationError, demo_snapshot, load_snapshot, validate_snapshot,
};
use fleetdesk_testkit::FleetFaker;
use std::fs;

#[test]
fn generated_snapshot_loads_from_disk() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("fleet.json");
    let snapshot = FleetFaker::new(11).fleet_snapshot(9);
    fs::write(&path, serde_json::to_string_pretty(&snapshot)?)?;

    let loaded = load_snapshot(&path)?;
    assert_eq!(loaded.parties, snapshot.parties);
    assert_eq!(loaded.employees, snapshot.employees);
    assert_eq!(loaded.trips, snapshot.trips);
    assert_eq!(loaded.maintenance, snapshot.maintenance);
    assert_eq!(
        loaded
            .trucks
            .iter()
            .map(|truck| (&truck.id, &truck.vehicle_no, truck.insurance_date))
            .collect::<Vec<_>>(),
        snapshot
            .trucks
            .iter()
            .map(|truck| (&truck.id, &truck.vehicle_no, truck.insurance_date))
            .collect::<Vec<_>>()
    );
    for screen in ScreenKind::ALL {
        assert_eq!(loaded.record_count(screen), 9);
    }
    Ok(())
}

#[test]
fn file_source_matches_direct_load() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("fleet.json");
    fs::write(&path, serde_json::to_string(&demo_snapshot())?)?;

    let source = SnapshotSource::File(path.clone());
    assert_eq!(source.load()?, load_snapshot(&path)?);
    assert_eq!(source.to_string(), path.display().to_string());
    Ok(())
}

#[test]
fn demo_source_loads_seeded_records() -> Result<()> {
    let snapshot = SnapshotSource::Demo.load()?;
    assert_eq!(snapshot.parties.len(), 2);
    assert_eq!(snapshot.employees.len(), 2);
    assert_eq!(snapshot.trucks.len(), 1);
    assert_eq!(snapshot.trucks[0].vehicle_no, "MH12AB1234");
    assert!(!snapshot.trips.is_empty());
    assert!(!snapshot.maintenance.is_empty());
    validate_snapshot(&snapshot)?;
    Ok(())
}

#[test]
fn partial_snapshot_defaults_missing_screens() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("parties.json");
    fs::write(
        &path,
        r#"{
            "parties": [
                {
                    "id": "p1",
                    "name": "Deccan Roadlines",
                    "kind": "PARTY",
                    "credit_period_days": 15,
                    "opening_balance": 0,
                    "closing_balance": -2500
                }
            ]
        }"#,
    )?;

    let snapshot = load_snapshot(&path)?;
    assert_eq!(snapshot.parties.len(), 1);
    assert!(snapshot.parties[0].phones.is_empty());
    assert!(snapshot.trucks.is_empty());
    assert!(snapshot.trips.is_empty());
    Ok(())
}

#[test]
fn missing_file_names_the_path() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("absent.json");
    let err = load_snapshot(&path).expect_err("missing file should fail");
    let message = format!("{err:#}");
    assert!(message.contains("read fleet snapshot"), "got {message}");
    assert!(message.contains("absent.json"), "got {message}");
}

#[test]
fn malformed_json_reports_parse_context() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("broken.json");
    fs::write(&path, "{ \"trucks\": [ { \"id\": \"t1\" ")?;

    let err = load_snapshot(&path).expect_err("malformed json should fail");
    assert!(format!("{err:#}").contains("parse fleet snapshot"));
    Ok(())
}

#[test]
fn duplicate_ids_are_rejected_on_load() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("dupes.json");
    let mut snapshot = demo_snapshot();
    let mut copy = snapshot.parties[0].clone();
    copy.name = "Another name".to_owned();
    snapshot.parties.push(copy);
    fs::write(&path, serde_json::to_string(&snapshot)?)?;

    let err = load_snapshot(&path).expect_err("duplicate ids should fail");
    assert!(format!("{err:#}").contains("invalid fleet snapshot"));
    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::DuplicateId {
            screen: ScreenKind::Parties,
            id: RecordId::from("1"),
        })
    );
    Ok(())
}

#[test]
fn negative_freight_is_rejected_on_load() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("negative.json");
    fs::write(
        &path,
        r#"{"trips": [{
            "id": "tr1",
            "lr_no": "LR-1001",
            "vehicle_no": "MH12AB1234",
            "party": "XYZ Logistics",
            "origin": "Pune",
            "destination": "Nagpur",
            "start_date": "2026-03-04",
            "freight": -9223372036854775808,
            "advance": 1,
            "status": "planned"
        }]}"#,
    )?;

    let err = load_snapshot(&path).expect_err("negative freight should fail");
    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::NegativeAmount {
            screen: ScreenKind::Trips,
            id: RecordId::from("tr1"),
            field: "freight",
            amount: i64::MIN,
        })
    );
    Ok(())
}
