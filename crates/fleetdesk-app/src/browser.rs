// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::sync::Arc;

use tracing::debug;

use crate::detail::{DetailView, RecordSummary};
use crate::ids::RecordId;
use crate::model::ScreenKind;

/// Per-entity configuration for a [`RecordBrowser`].
pub trait Record {
    const SCREEN: ScreenKind;

    fn id(&self) -> &RecordId;

    /// Fields the free-text query is matched against.
    fn searchable_fields(&self) -> Vec<&str>;

    fn summary(&self) -> RecordSummary;

    fn detail(&self) -> DetailView;
}

/// Case-insensitive substring match over the record's searchable fields.
/// An empty query matches everything; whitespace is matched literally.
pub fn matches_query<R: Record + ?Sized>(record: &R, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .searchable_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserCommand {
    SetQuery(String),
    Select(RecordId),
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    QueryChanged(String),
    Disclosed(RecordId),
    Dismissed,
}

/// Query, selection and disclosure state over one read-only record sequence.
#[derive(Debug)]
pub struct RecordBrowser<R> {
    records: Arc<[R]>,
    query: String,
    selection: Option<RecordId>,
    disclosure_open: bool,
}

impl<R> Clone for RecordBrowser<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            query: self.query.clone(),
            selection: self.selection.clone(),
            disclosure_open: self.disclosure_open,
        }
    }
}

impl<R: Record> Default for RecordBrowser<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: Record> RecordBrowser<R> {
    pub fn new(records: impl Into<Arc<[R]>>) -> Self {
        Self {
            records: records.into(),
            query: String::new(),
            selection: None,
            disclosure_open: false,
        }
    }

    pub fn records(&self) -> &Arc<[R]> {
        &self.records
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selection(&self) -> Option<&RecordId> {
        self.selection.as_ref()
    }

    pub fn is_disclosed(&self) -> bool {
        self.disclosure_open
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn filtered_records(&self) -> FilteredRecords<'_, R> {
        FilteredRecords {
            records: self.records.iter(),
            query: &self.query,
        }
    }

    pub fn select(&mut self, id: &RecordId) {
        if !self.records.iter().any(|record| record.id() == id) {
            debug!(screen = R::SCREEN.label(), id = %id, "ignoring selection of unknown record");
            return;
        }
        self.selection = Some(id.clone());
        self.disclosure_open = true;
        debug!(screen = R::SCREEN.label(), id = %id, "record disclosed");
    }

    /// Closes the detail overlay. The selection is kept so the host can keep
    /// highlighting the record that was last opened.
    pub fn dismiss(&mut self) {
        self.disclosure_open = false;
    }

    /// Swaps the record sequence. A different allocation resets the selection.
    pub fn replace_records(&mut self, records: impl Into<Arc<[R]>>) {
        let records = records.into();
        if !Arc::ptr_eq(&self.records, &records) {
            self.selection = None;
            self.disclosure_open = false;
        }
        self.records = records;
    }

    pub fn selected_record(&self) -> Option<&R> {
        let id = self.selection.as_ref()?;
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn disclosed_record(&self) -> Option<&R> {
        if !self.disclosure_open {
            return None;
        }
        self.selected_record()
    }

    pub fn dispatch(&mut self, command: BrowserCommand) -> Vec<BrowserEvent> {
        match command {
            BrowserCommand::SetQuery(text) => {
                if text == self.query {
                    return Vec::new();
                }
                self.set_query(text);
                vec![BrowserEvent::QueryChanged(self.query.clone())]
            }
            BrowserCommand::Select(id) => {
                self.select(&id);
                if self.disclosure_open && self.selection.as_ref() == Some(&id) {
                    vec![BrowserEvent::Disclosed(id)]
                } else {
                    Vec::new()
                }
            }
            BrowserCommand::Dismiss => {
                if !self.disclosure_open {
                    return Vec::new();
                }
                self.dismiss();
                vec![BrowserEvent::Dismissed]
            }
        }
    }
}

/// Lazy, order-preserving view over the records matching the current query.
/// Call [`RecordBrowser::filtered_records`] again to start over.
#[derive(Debug)]
pub struct FilteredRecords<'a, R> {
    records: std::slice::Iter<'a, R>,
    query: &'a str,
}

impl<R> Clone for FilteredRecords<'_, R> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            query: self.query,
        }
    }
}

impl<'a, R: Record> Iterator for FilteredRecords<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        let query = self.query;
        self.records
            .by_ref()
            .find(|record| matches_query(*record, query))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.records.size_hint().1)
    }
}

/// Object-safe face of a [`RecordBrowser`], so a host can drive whichever
/// screen is active without knowing its record type.
pub trait BrowserView {
    fn screen(&self) -> ScreenKind;
    fn query(&self) -> &str;
    fn record_count(&self) -> usize;
    fn visible_summaries(&self) -> Vec<RecordSummary>;
    fn selection(&self) -> Option<&RecordId>;
    fn is_disclosed(&self) -> bool;
    fn disclosed_detail(&self) -> Option<DetailView>;
    fn dispatch(&mut self, command: BrowserCommand) -> Vec<BrowserEvent>;
}

impl<R: Record> BrowserView for RecordBrowser<R> {
    fn screen(&self) -> ScreenKind {
        R::SCREEN
    }

    fn query(&self) -> &str {
        RecordBrowser::query(self)
    }

    fn record_count(&self) -> usize {
        self.records.len()
    }

    fn visible_summaries(&self) -> Vec<RecordSummary> {
        self.filtered_records().map(Record::summary).collect()
    }

    fn selection(&self) -> Option<&RecordId> {
        RecordBrowser::selection(self)
    }

    fn is_disclosed(&self) -> bool {
        RecordBrowser::is_disclosed(self)
    }

    fn disclosed_detail(&self) -> Option<DetailView> {
        self.disclosed_record().map(Record::detail)
    }

    fn dispatch(&mut self, command: BrowserCommand) -> Vec<BrowserEvent> {
        RecordBrowser::dispatch(self, command)
    }
}
