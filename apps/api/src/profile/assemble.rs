//! Record Assembler — rebuilds jobs and degrees from parallel serialized columns.
//!
//! The store keeps one array blob per sub-field (`..._title`, `..._company`,
//! `..._start_date`, ...). Nothing links `title[2]` to `company[2]` except
//! their position, so entry *i* is built from index *i* of every column.
//!
//! Alignment rules:
//! - The entry count N comes from the first sub-field row of the family.
//! - A column shorter than N (or missing entirely) reads as "" past its end.
//! - A malformed column decodes to its raw text as a single value; it never
//!   shifts the other columns.

use std::collections::HashMap;

use tracing::debug;

use crate::models::postmeta::PostmetaRow;
use crate::profile::dates::normalize_date;
use crate::profile::decode::decode;
use crate::profile::fields::{sub_field, FieldFamily, SubField};
use crate::profile::models::Entry;
use crate::profile::sanitize::sanitize;

/// Decoded columns of one family, keyed by sub-field.
struct Columns {
    values: HashMap<SubField, Vec<String>>,
}

impl Columns {
    /// Bounds-safe positional lookup.
    fn get(&self, sub: SubField, index: usize) -> &str {
        self.values
            .get(&sub)
            .and_then(|column| column.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Assembles the entries of one family from its rows, in index order.
///
/// Returns `None` when the family has no usable rows or the anchor column is
/// empty. Never returns `Some(vec![])`.
pub fn assemble(family: FieldFamily, rows: &[&PostmetaRow]) -> Option<Vec<Entry>> {
    let mut values: HashMap<SubField, Vec<String>> = HashMap::new();
    let mut count: Option<usize> = None;

    for row in rows {
        let Some((key, raw)) = row.field() else {
            continue;
        };
        let Some(sub) = sub_field(family, key) else {
            continue;
        };
        // First row wins for a repeated key.
        if values.contains_key(&sub) {
            continue;
        }
        let column = decode(raw).into_values();
        count.get_or_insert(column.len());
        values.insert(sub, column);
    }

    let count = count.filter(|&n| n > 0)?;
    let columns = Columns { values };

    for sub in SubField::ALL {
        if let Some(column) = columns.values.get(&sub) {
            if column.len() != count {
                debug!(
                    ?family,
                    ?sub,
                    len = column.len(),
                    expected = count,
                    "Sub-field length differs from entry count"
                );
            }
        }
    }

    let entries: Vec<Entry> = (0..count).map(|i| build_entry(&columns, i)).collect();
    debug!(?family, entries = entries.len(), "Assembled entries");
    Some(entries)
}

fn build_entry(columns: &Columns, index: usize) -> Entry {
    let start = normalize_date(columns.get(SubField::StartDate, index));
    let end = normalize_date(columns.get(SubField::EndDate, index));
    let ongoing = is_ongoing(columns.get(SubField::Present, index));

    Entry {
        title: columns.get(SubField::Title, index).to_string(),
        organization: columns.get(SubField::Organization, index).to_string(),
        duration: resolve_duration(&start, &end, ongoing),
        description: sanitize(columns.get(SubField::Description, index)),
    }
}

/// The checkbox stores "on" when ticked; any non-empty value counts.
fn is_ongoing(flag: &str) -> bool {
    !flag.is_empty()
}

/// Combines normalized dates. A full range beats "Present", which beats a
/// lone date. The ongoing flag only matters when the end date is missing.
pub fn resolve_duration(start: &str, end: &str, ongoing: bool) -> String {
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{start} - {end}"),
        (false, true) if ongoing => format!("{start} - Present"),
        (false, true) => start.to_string(),
        (true, false) => end.to_string(),
        (true, true) => String::new(),
    }
}
