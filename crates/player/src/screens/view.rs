//! Renderer-neutral screen output.

use std::fmt;

/// What a screen shows: a title and labelled rows grouped into sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenView {
    pub title: String,
    pub sections: Vec<ViewSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSection {
    pub heading: String,
    pub rows: Vec<ViewRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    pub label: String,
    pub value: String,
}

impl ScreenView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn with_section(mut self, section: ViewSection) -> Self {
        self.sections.push(section);
        self
    }

    pub fn section(&self, heading: &str) -> Option<&ViewSection> {
        self.sections.iter().find(|s| s.heading == heading)
    }
}

impl ViewSection {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, label: impl Into<String>, value: impl ToString) -> Self {
        self.rows.push(ViewRow {
            label: label.into(),
            value: value.to_string(),
        });
        self
    }

    /// Value of the first row with `label`.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }
}

impl fmt::Display for ScreenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "[{}]", section.heading)?;
            let width = section
                .rows
                .iter()
                .map(|r| r.label.chars().count())
                .max()
                .unwrap_or(0);
            for row in &section.rows {
                writeln!(f, "  {:<width$}  {}", row.label, row.value)?;
            }
        }
        Ok(())
    }
}
