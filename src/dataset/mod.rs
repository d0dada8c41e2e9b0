use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// The five tracked columns, in header order.
pub const COLUMNS: [&str; 5] = ["Name", "Email", "Phone", "Address", "Company"];

/// Placeholder written into missing fields by the filler.
pub const SENTINEL: &str = "Unknown";

/// One contact row. Empty CSV cells deserialize as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "Company")]
    pub company: Option<String>,
}

impl Record {
    /// Fields in `COLUMNS` order.
    pub fn fields(&self) -> [&Option<String>; 5] {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.address,
            &self.company,
        ]
    }

    /// Count of absent fields in this record.
    pub fn missing_fields(&self) -> usize {
        self.fields().iter().filter(|f| f.is_none()).count()
    }

    fn filled(&self) -> Record {
        let fill = |f: &Option<String>| Some(f.clone().unwrap_or_else(|| SENTINEL.to_string()));
        Record {
            name: fill(&self.name),
            email: fill(&self.email),
            phone: fill(&self.phone),
            address: fill(&self.address),
            company: fill(&self.company),
        }
    }
}

/// The in-memory contact table. Loaded once at startup and shared read-only
/// across request handlers; every correcting operation returns a new table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn new(records: Vec<Record>) -> Self {
        Table { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total count of absent cells across all five columns.
    pub fn missing_cells(&self) -> usize {
        self.records.iter().map(Record::missing_fields).sum()
    }

    /// Absent-cell count per column, in `COLUMNS` order.
    pub fn missing_by_column(&self) -> [(&'static str, usize); 5] {
        let mut counts = [0usize; 5];
        for record in &self.records {
            for (slot, field) in counts.iter_mut().zip(record.fields()) {
                if field.is_none() {
                    *slot += 1;
                }
            }
        }
        [
            (COLUMNS[0], counts[0]),
            (COLUMNS[1], counts[1]),
            (COLUMNS[2], counts[2]),
            (COLUMNS[3], counts[3]),
            (COLUMNS[4], counts[4]),
        ]
    }

    /// Return a copy with every absent field replaced by [`SENTINEL`].
    /// The original table is never touched; filling twice is a no-op.
    pub fn fill_missing(&self) -> Table {
        Table {
            records: self.records.iter().map(Record::filled).collect(),
        }
    }
}

/// Load the contact table from `path`. A missing file is not an error: the
/// service starts with an empty table and the fixed column set. A present but
/// unparseable file aborts startup.
pub fn load_or_empty(path: &Path) -> Result<Table> {
    if !path.exists() {
        warn!(
            "dataset `{}` not found, starting with an empty table",
            path.display()
        );
        return Ok(Table::default());
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening dataset `{}`", path.display()))?;

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize().enumerate() {
        let record: Record =
            row.with_context(|| format!("parsing row {} of `{}`", idx + 1, path.display()))?;
        records.push(record);
    }

    info!(
        "loaded {} records from `{}`",
        records.len(),
        path.display()
    );
    Ok(Table::new(records))
}
