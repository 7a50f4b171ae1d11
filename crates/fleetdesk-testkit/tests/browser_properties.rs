// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use fleetdesk_app::{
    BrowserCommand, Fleet, Record, RecordBrowser, RecordId, ScreenKind, matches_query,
};
use fleetdesk_testkit::FleetFaker;

const SEEDS: u64 = 40;

fn assert_filter_properties<R: Record>(browser: &mut RecordBrowser<R>, query: &str) {
    browser.set_query(query);
    let all = browser.records().iter().collect::<Vec<_>>();
    let visible = browser.filtered_records().collect::<Vec<_>>();

    // Order-preserving subsequence of the full sequence.
    let mut cursor = all.iter();
    for record in &visible {
        assert!(
            cursor.any(|candidate| std::ptr::eq(*candidate, *record)),
            "query {query:?} reordered or invented record {}",
            record.id()
        );
    }

    // Inclusion is exactly the per-field predicate.
    for record in &all {
        let expected = query.is_empty()
            || record
                .searchable_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&query.to_lowercase()));
        let included = visible.iter().any(|shown| std::ptr::eq(*shown, *record));
        assert_eq!(
            included,
            expected,
            "query {query:?} on {} record {}",
            R::SCREEN.label(),
            record.id()
        );
        assert_eq!(matches_query(*record, query), expected);
    }

    if query.is_empty() {
        assert_eq!(visible.len(), all.len());
    }
}

#[test]
fn filtering_is_an_ordered_predicate_subsequence() {
    for seed in 1..=SEEDS {
        let mut faker = FleetFaker::new(seed);
        let count = 1 + faker.int_n(12);
        let snapshot = faker.fleet_snapshot(count);
        let mut fleet = Fleet::from_snapshot(snapshot);

        for _ in 0..6 {
            let query = faker.query();
            assert_filter_properties(&mut fleet.maintenance, &query);
            assert_filter_properties(&mut fleet.trips, &query);
            assert_filter_properties(&mut fleet.trucks, &query);
            assert_filter_properties(&mut fleet.employees, &query);
            assert_filter_properties(&mut fleet.parties, &query);
        }
    }
}

#[test]
fn every_searchable_field_finds_its_record() {
    for seed in 1..=SEEDS {
        let mut faker = FleetFaker::new(seed);
        let mut fleet = Fleet::from_snapshot(faker.fleet_snapshot(5));

        let trucks = fleet.trucks.records().clone();
        for truck in trucks.iter() {
            for field in truck.searchable_fields() {
                if field.is_empty() {
                    continue;
                }
                fleet.trucks.set_query(field.to_uppercase());
                assert!(
                    fleet
                        .trucks
                        .filtered_records()
                        .any(|candidate| candidate.id() == truck.id()),
                    "field {field:?} did not find truck {}",
                    truck.id()
                );
            }
        }

        let parties = fleet.parties.records().clone();
        for party in parties.iter() {
            for phone in &party.phones {
                let tail = &phone.value[phone.value.len().saturating_sub(4)..];
                fleet.parties.set_query(tail);
                assert!(
                    fleet
                        .parties
                        .filtered_records()
                        .any(|candidate| candidate.id() == party.id())
                );
            }
        }
    }
}

#[test]
fn selection_survives_queries_and_dismiss_is_idempotent() {
    for seed in 1..=SEEDS {
        let mut faker = FleetFaker::new(seed);
        let mut fleet = Fleet::from_snapshot(faker.fleet_snapshot(4));

        for screen in ScreenKind::ALL {
            let view = fleet.view_mut(screen);
            let Some(target) = view.visible_summaries().first().map(|summary| summary.id.clone())
            else {
                continue;
            };

            view.dispatch(BrowserCommand::Select(target.clone()));
            assert!(view.is_disclosed());
            assert_eq!(view.selection(), Some(&target));
            assert!(view.disclosed_detail().is_some());

            let query = faker.query();
            view.dispatch(BrowserCommand::SetQuery(query));
            assert!(view.is_disclosed());
            assert_eq!(view.selection(), Some(&target));

            view.dispatch(BrowserCommand::Dismiss);
            let count = view.record_count();
            view.dispatch(BrowserCommand::Dismiss);
            assert!(!view.is_disclosed());
            assert_eq!(view.disclosed_detail(), None);
            assert_eq!(view.record_count(), count);
        }
    }
}

#[test]
fn unknown_selection_leaves_state_untouched() {
    let mut faker = FleetFaker::new(99);
    let mut fleet = Fleet::from_snapshot(faker.fleet_snapshot(3));

    for screen in ScreenKind::ALL {
        let view = fleet.view_mut(screen);
        let events = view.dispatch(BrowserCommand::Select(RecordId::from("missing-id")));
        assert!(events.is_empty());
        assert_eq!(view.selection(), None);
        assert!(!view.is_disclosed());
    }
}

#[test]
fn reload_resets_selection_on_every_screen() {
    let mut faker = FleetFaker::new(7);
    let mut fleet = Fleet::from_snapshot(faker.fleet_snapshot(3));
    for screen in ScreenKind::ALL {
        let view = fleet.view_mut(screen);
        if let Some(id) = view.visible_summaries().first().map(|summary| summary.id.clone()) {
            view.dispatch(BrowserCommand::Select(id));
        }
    }

    fleet.replace(faker.fleet_snapshot(3));
    for screen in ScreenKind::ALL {
        assert_eq!(fleet.view(screen).selection(), None);
        assert!(!fleet.view(screen).is_disclosed());
    }
}
