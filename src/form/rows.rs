//! Dynamic Row Lists
//!
//! Ordered rows with stable synthetic ids. Display numbering is derived
//! from position, so it stays contiguous whatever gets removed.

use serde::{Deserialize, Serialize};

/// Stable identifier of a row within its list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(u32);

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// A row and its id
#[derive(Debug, Clone, PartialEq, Eq)]
struct Row<T> {
    id: RowId,
    value: T,
}

/// Ordered list of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowList<T> {
    rows: Vec<Row<T>>,
    next_id: u32,
}

impl<T> Default for RowList<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> RowList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row at the end
    pub fn push(&mut self, value: T) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(Row { id, value });
        id
    }

    /// Detach a row. Later rows shift up one position.
    pub fn remove(&mut self, id: RowId) -> Option<T> {
        let index = self.rows.iter().position(|row| row.id == id)?;
        Some(self.rows.remove(index).value)
    }

    pub fn get(&self, id: RowId) -> Option<&T> {
        self.rows.iter().find(|row| row.id == id).map(|row| &row.value)
    }

    pub fn get_mut(&mut self, id: RowId) -> Option<&mut T> {
        self.rows
            .iter_mut()
            .find(|row| row.id == id)
            .map(|row| &mut row.value)
    }

    /// 1-based display number of a row
    pub fn number_of(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id).map(|i| i + 1)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|row| &row.value)
    }

    pub fn ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|row| row.id).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

impl<T: Default> RowList<T> {
    /// Append a row with empty inputs
    pub fn add_row(&mut self) -> RowId {
        self.push(T::default())
    }
}

/// A dissection row as typed: either side may still be empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DissectionRow {
    pub key: String,
    pub value: String,
}

/// Placeholder shown in an empty situation input
pub fn situation_placeholder(number: usize) -> String {
    format!("Situación {}...", number)
}
