// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::browser::{BrowserView, RecordBrowser};
use crate::model::{Employee, FleetSnapshot, MaintenanceEntry, Party, ScreenKind, Trip, Truck};

/// One independent browser per screen.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    pub maintenance: RecordBrowser<MaintenanceEntry>,
    pub trips: RecordBrowser<Trip>,
    pub trucks: RecordBrowser<Truck>,
    pub employees: RecordBrowser<Employee>,
    pub parties: RecordBrowser<Party>,
}

impl Fleet {
    pub fn from_snapshot(snapshot: FleetSnapshot) -> Self {
        Self {
            maintenance: RecordBrowser::new(snapshot.maintenance),
            trips: RecordBrowser::new(snapshot.trips),
            trucks: RecordBrowser::new(snapshot.trucks),
            employees: RecordBrowser::new(snapshot.employees),
            parties: RecordBrowser::new(snapshot.parties),
        }
    }

    /// Swaps every record sequence; selections reset, queries stay.
    pub fn replace(&mut self, snapshot: FleetSnapshot) {
        self.maintenance.replace_records(snapshot.maintenance);
        self.trips.replace_records(snapshot.trips);
        self.trucks.replace_records(snapshot.trucks);
        self.employees.replace_records(snapshot.employees);
        self.parties.replace_records(snapshot.parties);
    }

    pub fn view(&self, screen: ScreenKind) -> &dyn BrowserView {
        match screen {
            ScreenKind::Maintenance => &self.maintenance,
            ScreenKind::Trips => &self.trips,
            ScreenKind::Trucks => &self.trucks,
            ScreenKind::Employees => &self.employees,
            ScreenKind::Parties => &self.parties,
        }
    }

    pub fn view_mut(&mut self, screen: ScreenKind) -> &mut dyn BrowserView {
        match screen {
            ScreenKind::Maintenance => &mut self.maintenance,
            ScreenKind::Trips => &mut self.trips,
            ScreenKind::Trucks => &mut self.trucks,
            ScreenKind::Employees => &mut self.employees,
            ScreenKind::Parties => &mut self.parties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Fleet;
    use crate::browser::BrowserCommand;
    use crate::ids::RecordId;
    use crate::model::{ContactNumber, FleetSnapshot, Party, PartyKind, ScreenKind};

    fn snapshot() -> FleetSnapshot {
        FleetSnapshot {
            parties: vec![Party {
                id: RecordId::from("1"),
                name: "ABC Transport Co.".to_owned(),
                phones: vec![ContactNumber {
                    label: "Mobile".to_owned(),
                    value: "9876543210".to_owned(),
                }],
                kind: PartyKind::Transporter,
                email: None,
                address: None,
                pan_no: None,
                gst_no: None,
                credit_period_days: 30,
                opening_balance: 0,
                closing_balance: 0,
            }],
            ..FleetSnapshot::default()
        }
    }

    #[test]
    fn screens_are_independent() {
        let mut fleet = Fleet::from_snapshot(snapshot());
        fleet
            .view_mut(ScreenKind::Parties)
            .dispatch(BrowserCommand::SetQuery("abc".to_owned()));

        assert_eq!(fleet.view(ScreenKind::Parties).query(), "abc");
        assert_eq!(fleet.view(ScreenKind::Trucks).query(), "");
        assert_eq!(fleet.view(ScreenKind::Parties).record_count(), 1);
        assert_eq!(fleet.view(ScreenKind::Trips).record_count(), 0);
        for screen in ScreenKind::ALL {
            assert_eq!(fleet.view(screen).screen(), screen);
        }
    }

    #[test]
    fn replace_resets_selection_and_keeps_query() {
        let mut fleet = Fleet::from_snapshot(snapshot());
        let parties = fleet.view_mut(ScreenKind::Parties);
        parties.dispatch(BrowserCommand::SetQuery("abc".to_owned()));
        parties.dispatch(BrowserCommand::Select(RecordId::from("1")));
        assert!(parties.is_disclosed());

        fleet.replace(snapshot());
        let parties = fleet.view(ScreenKind::Parties);
        assert!(!parties.is_disclosed());
        assert_eq!(parties.selection(), None);
        assert_eq!(parties.query(), "abc");
    }
}
