//! Material LCA reference data.
//!
//! A [`MaterialTable`] is built once from 4-field rows
//! (`name, referenceQuantity, referenceUnit, lcaCoefficient`) and is
//! read-only afterwards.

pub mod csv;

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

/// The material list shipped with the crate.
const EMBEDDED_CSV: &str = include_str!("../../data/materials.csv");

/// LCA reference data for one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Unique material name.
    pub name: String,
    /// Quantity of material the coefficient refers to.
    pub reference_quantity: f64,
    /// Unit of `reference_quantity`, e.g. `m3`.
    pub reference_unit: String,
    /// Impact per `reference_quantity` of material.
    pub lca_coefficient: f64,
}

impl MaterialRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        reference_quantity: f64,
        reference_unit: impl Into<String>,
        lca_coefficient: f64,
    ) -> Self {
        Self {
            name: name.into(),
            reference_quantity,
            reference_unit: reference_unit.into(),
            lca_coefficient,
        }
    }

    /// Parses a 4-field row, returning `None` if it is malformed.
    fn from_fields<S: AsRef<str>>(fields: &[S]) -> Option<Self> {
        let [name, quantity, unit, coefficient] = fields else {
            return None;
        };
        let name = name.as_ref().trim();
        if name.is_empty() {
            return None;
        }
        Some(Self::new(
            name,
            parse_real(quantity.as_ref())?,
            unit.as_ref().trim(),
            parse_real(coefficient.as_ref())?,
        ))
    }
}

/// Parses a finite real number, ignoring surrounding whitespace.
fn parse_real(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Immutable mapping from material name to [`MaterialRecord`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialTable {
    records: BTreeMap<String, MaterialRecord>,
}

impl MaterialTable {
    /// Builds a table from rows whose first row is a header.
    ///
    /// The header is discarded without inspection. Any later row that does
    /// not have exactly four fields, has a blank name, or has a quantity or
    /// coefficient that is not a finite number is skipped. When a name
    /// repeats, the last row wins.
    pub fn load<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut records = BTreeMap::new();
        let mut skipped = 0usize;
        for (line, row) in rows.into_iter().enumerate().skip(1) {
            match MaterialRecord::from_fields(row.as_ref()) {
                Some(record) => {
                    records.insert(record.name.clone(), record);
                }
                None => {
                    skipped += 1;
                    tracing::debug!(line, fields = row.as_ref().len(), "skipping material row");
                }
            }
        }
        tracing::debug!(materials = records.len(), skipped, "loaded material table");
        Self { records }
    }

    /// Builds a table from CSV text whose first line is a header.
    #[must_use]
    pub fn from_csv(text: &str) -> Self {
        Self::load(csv::split_rows(text))
    }

    /// Builds the table compiled into the crate.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_csv(EMBEDDED_CSV)
    }

    /// Looks up a material by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MaterialRecord> {
        self.records.get(name)
    }

    /// Material names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Records in name order.
    pub fn iter(&self) -> btree_map::Values<'_, String, MaterialRecord> {
        self.records.values()
    }

    /// Number of materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table has no materials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<MaterialRecord> for MaterialTable {
    fn from_iter<T: IntoIterator<Item = MaterialRecord>>(iter: T) -> Self {
        let records = iter
            .into_iter()
            .map(|record| (record.name.clone(), record))
            .collect();
        Self { records }
    }
}

impl<'a> IntoIterator for &'a MaterialTable {
    type Item = &'a MaterialRecord;
    type IntoIter = btree_map::Values<'a, String, MaterialRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
