// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ids::RecordId;

/// One list card: the headline plus the secondary lines shown under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSummary {
    pub id: RecordId,
    pub headline: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub label: String,
    pub value: String,
}

impl DetailLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailValue {
    Text(String),
    Lines(Vec<DetailLine>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: DetailValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailSection {
    pub heading: Option<&'static str>,
    pub rows: Vec<DetailRow>,
}

/// Everything the detail overlay shows for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub sections: Vec<DetailSection>,
}

impl DetailView {
    pub fn rows(&self) -> impl Iterator<Item = &DetailRow> {
        self.sections.iter().flat_map(|section| section.rows.iter())
    }

    pub fn row(&self, label: &str) -> Option<&DetailRow> {
        self.rows().find(|row| row.label == label)
    }

    pub fn text(&self, label: &str) -> Option<&str> {
        match &self.row(label)?.value {
            DetailValue::Text(value) => Some(value),
            DetailValue::Lines(_) => None,
        }
    }
}

/// Builds a [`DetailView`] row by row.
///
/// Mandatory rows always render. Optional rows render only when the value is
/// present and non-blank; otherwise the whole label+value row is left out.
/// Collection rows always render, one line per element.
#[derive(Debug)]
pub struct DetailBuilder {
    title: String,
    sections: Vec<DetailSection>,
}

impl DetailBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: vec![DetailSection::default()],
        }
    }

    pub fn section(mut self, heading: &'static str) -> Self {
        self.sections.push(DetailSection {
            heading: Some(heading),
            rows: Vec::new(),
        });
        self
    }

    pub fn required(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.push(label, DetailValue::Text(value.into()));
        self
    }

    pub fn optional<T: Into<String>>(mut self, label: &'static str, value: Option<T>) -> Self {
        if let Some(value) = value.map(Into::into)
            && !value.trim().is_empty()
        {
            self.push(label, DetailValue::Text(value));
        }
        self
    }

    pub fn lines(mut self, label: &'static str, lines: Vec<DetailLine>) -> Self {
        self.push(label, DetailValue::Lines(lines));
        self
    }

    pub fn build(self) -> DetailView {
        let sections = self
            .sections
            .into_iter()
            .filter(|section| !section.rows.is_empty())
            .collect();
        DetailView {
            title: self.title,
            sections,
        }
    }

    fn push(&mut self, label: &'static str, value: DetailValue) {
        if let Some(section) = self.sections.last_mut() {
            section.rows.push(DetailRow { label, value });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DetailBuilder, DetailLine, DetailValue};

    #[test]
    fn optional_rows_are_omitted_when_absent_or_blank() {
        let view = DetailBuilder::new("ABC Transport Co.")
            .required("Type", "TRANSPORTER")
            .optional("Email", Some("abc@transport.com"))
            .optional::<String>("Address", None)
            .optional("PAN", Some("  "))
            .build();

        let labels = view.rows().map(|row| row.label).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Type", "Email"]);
        assert_eq!(view.text("Email"), Some("abc@transport.com"));
    }

    #[test]
    fn required_rows_render_even_when_empty() {
        let view = DetailBuilder::new("t").required("Remark", "").build();
        assert_eq!(view.text("Remark"), Some(""));
    }

    #[test]
    fn collection_rows_keep_one_line_per_element() {
        let view = DetailBuilder::new("t")
            .lines(
                "Phone",
                vec![
                    DetailLine::new("Mobile", "9876543210"),
                    DetailLine::new("Office", "0123456789"),
                ],
            )
            .lines("Account", Vec::new())
            .build();

        let Some(DetailValue::Lines(lines)) = view.row("Phone").map(|row| &row.value) else {
            panic!("phone row should be a line list");
        };
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].label, "Office");
        assert!(matches!(
            view.row("Account").map(|row| &row.value),
            Some(DetailValue::Lines(lines)) if lines.is_empty()
        ));
    }

    #[test]
    fn empty_sections_are_dropped() {
        let view = DetailBuilder::new("MH12AB1234")
            .required("Truck Type", "own")
            .section("Dimensions")
            .optional::<String>("Allowed Weight", None)
            .section("Performance")
            .required("Avg KM", "450")
            .build();

        let headings = view
            .sections
            .iter()
            .map(|section| section.heading)
            .collect::<Vec<_>>();
        assert_eq!(headings, vec![None, Some("Performance")]);
    }
}
