// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use fleetdesk_app::FleetSnapshot;
use fleetdesk_data::SnapshotSource;
use fleetdesk_tui::AppRuntime;
use tracing::info;

/// Feeds the TUI from a snapshot source. The snapshot loaded at startup is
/// handed over once; every later load (ctrl+r) re-reads the source.
pub struct DataRuntime {
    source: SnapshotSource,
    primed: Option<FleetSnapshot>,
}

impl DataRuntime {
    pub fn new(source: SnapshotSource) -> Self {
        Self {
            source,
            primed: None,
        }
    }

    pub fn with_initial_snapshot(source: SnapshotSource, snapshot: FleetSnapshot) -> Self {
        Self {
            primed: Some(snapshot),
            ..Self::new(source)
        }
    }
}

impl AppRuntime for DataRuntime {
    fn load_snapshot(&mut self) -> Result<FleetSnapshot> {
        if let Some(snapshot) = self.primed.take() {
            return Ok(snapshot);
        }
        info!(source = %self.source, "reloading fleet records");
        self.source.load()
    }

    fn source_label(&self) -> String {
        self.source.to_string()
    }
}
