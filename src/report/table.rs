use crate::domain::Record;

/// The assembled report table: all records from a run, in display order.
///
/// Rows are sorted by requirement identifier ascending. Placeholder rows
/// carry no identifier and sort after all real requirements, keeping their
/// original relative order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    records: Vec<Record>,
}

impl ReportTable {
    /// Column headers, in display order.
    pub const COLUMNS: [&'static str; 4] = [
        "Requirement ID",
        "Requirement Description",
        "Test File",
        "Additional Information",
    ];

    /// Builds a table from scan records, sorting them into display order.
    #[must_use]
    pub fn new(mut records: Vec<Record>) -> Self {
        // Stable sort: placeholders tie on the key and keep scan order.
        records.sort_by_key(|record| match record.id() {
            Some(id) => (false, id),
            None => (true, 0),
        });
        Self { records }
    }

    /// The rows of the table, in display order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The number of real (non-placeholder) requirements.
    #[must_use]
    pub fn requirement_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| !record.is_placeholder())
            .count()
    }
}
