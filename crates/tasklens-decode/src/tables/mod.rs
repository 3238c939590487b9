//! Static lookup tables: ordered value lists indexed by a decoded integer.

mod data;

use rustc_hash::FxHashMap;

/// Read-only lookup tables keyed by table id.
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    tables: FxHashMap<&'static str, &'static [&'static str]>,
}

impl LookupTables {
    /// Tables shipped with the engine.
    #[must_use]
    pub fn builtin() -> Self {
        let mut tables = Self::default();
        for &(id, values) in data::TABLES {
            tables.insert(id, values);
        }
        tables
    }

    /// Add or replace one table.
    pub fn insert(&mut self, id: &'static str, values: &'static [&'static str]) {
        self.tables.insert(id, values);
    }

    /// Whether a table with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.tables.contains_key(id)
    }

    /// Full value list of one table.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'static [&'static str]> {
        self.tables.get(id).copied()
    }

    /// Bounds-checked indexing. Negative indices never match.
    #[must_use]
    pub fn lookup(&self, id: &str, index: i64) -> Option<&'static str> {
        let values = self.get(id)?;
        let index = usize::try_from(index).ok()?;
        values.get(index).copied()
    }

    /// Number of tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no table is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
