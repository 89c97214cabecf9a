use super::form::Field;
use super::product::ProductRecord;

/// Tabular rendering of a search response: fixed headers, one row per record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsTable {
    rows: Vec<[String; Field::COUNT]>,
}

impl ResultsTable {
    /// Builds a table from records, keeping their order.
    pub fn from_records(records: &[ProductRecord]) -> Self {
        Self {
            rows: records.iter().map(ProductRecord::to_values).collect(),
        }
    }

    /// Column headers, in display order.
    pub fn headers() -> [&'static str; Field::COUNT] {
        Field::ALL.map(Field::label)
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[[String; Field::COUNT]] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the search matched nothing.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
