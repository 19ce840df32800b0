// src/types.rs
use crate::registry::InvisibleCharDef;
use serde::Serialize;
use std::collections::HashMap;

/// A single invisible character detected during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Position in the text, counted in Unicode scalar values.
    pub index: usize,
    pub code_point: char,
    pub name: &'static str,
}

impl Finding {
    #[must_use]
    pub fn new(index: usize, def: &InvisibleCharDef) -> Self {
        Self { index, code_point: def.code_point, name: def.name }
    }
}

/// Occurrences of one character type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupEntry {
    pub name: &'static str,
    pub code_point: char,
    pub count: usize,
    pub positions: Vec<usize>,
}

/// Findings aggregated by character name, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupedCount {
    entries: Vec<GroupEntry>,
    #[serde(skip)]
    slots: HashMap<&'static str, usize>,
}

impl GroupedCount {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `def` at `index`.
    pub fn record(&mut self, def: &InvisibleCharDef, index: usize) {
        let slot = *self.slots.entry(def.name).or_insert_with(|| {
            self.entries.push(GroupEntry {
                name: def.name,
                code_point: def.code_point,
                count: 0,
                positions: Vec::new(),
            });
            self.entries.len() - 1
        });
        let entry = &mut self.entries[slot];
        entry.count += 1;
        entry.positions.push(index);
    }

    #[must_use]
    pub fn entries(&self) -> &[GroupEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GroupEntry> {
        self.slots.get(name).map(|&i| &self.entries[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all occurrence counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }
}

/// Everything a single scan produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub findings: Vec<Finding>,
    pub grouped: GroupedCount,
    /// Length of the scanned text in scalar values.
    pub char_count: usize,
}

impl ScanResult {
    /// Returns true if no invisible characters were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.findings.len()
    }

    pub(crate) fn push(&mut self, index: usize, def: &InvisibleCharDef) {
        self.findings.push(Finding::new(index, def));
        self.grouped.record(def, index);
    }
}
