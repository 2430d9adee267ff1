use crate::domain::{EuvError, TableId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to read coefficient table '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse coefficient table {table}: {source}")]
    Parse {
        table: TableId,
        source: serde_json::Error,
    },
    #[error("coefficient table {table} column '{column}' has {actual} rows, expected {expected}")]
    ColumnLength {
        table: TableId,
        column: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("coefficient table {table} has no bins")]
    Empty { table: TableId },
    #[error("coefficient table {table} column '{column}' holds a non-finite value at row {row}")]
    NonFinite {
        table: TableId,
        column: &'static str,
        row: usize,
    },
    #[error("coefficient table {table} is not available from this provider")]
    UnknownTable { table: TableId },
    #[error("coefficient table cache is unavailable: {0}")]
    Cache(String),
}

impl From<TableError> for EuvError {
    fn from(error: TableError) -> Self {
        match &error {
            TableError::Read { .. } => {
                EuvError::io_system("IO.COEFFICIENT_TABLE", error.to_string())
            }
            TableError::Cache(_) => EuvError::internal("SYS.COEFFICIENT_CACHE", error.to_string()),
            _ => EuvError::input_validation("INPUT.COEFFICIENT_TABLE", error.to_string()),
        }
    }
}

/// On-disk columnar layout of a coefficient table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CoefficientColumns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bins: Option<Vec<String>>,
    pub a1: Vec<f64>,
    pub b1: Vec<f64>,
    pub wchr: Vec<f64>,
    pub a2: Vec<f64>,
    pub b2: Vec<f64>,
    pub w1: Vec<f64>,
    pub w2: Vec<f64>,
}

impl CoefficientColumns {
    fn named_columns(&self) -> [(&'static str, &[f64]); 7] {
        [
            ("a1", self.a1.as_slice()),
            ("b1", self.b1.as_slice()),
            ("wchr", self.wchr.as_slice()),
            ("a2", self.a2.as_slice()),
            ("b2", self.b2.as_slice()),
            ("w1", self.w1.as_slice()),
            ("w2", self.w2.as_slice()),
        ]
    }
}

/// Immutable per-bin regression coefficients for one variant and domain.
///
/// Row order is the canonical bin order: every matrix and spectrum derived
/// from this table keeps it.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    id: TableId,
    description: Option<String>,
    bins: Vec<String>,
    columns: CoefficientColumns,
}

impl CoefficientTable {
    pub fn from_columns(id: TableId, columns: CoefficientColumns) -> Result<Self, TableError> {
        let expected = columns.a1.len();
        if expected == 0 {
            return Err(TableError::Empty { table: id });
        }

        for (column, values) in columns.named_columns() {
            if values.len() != expected {
                return Err(TableError::ColumnLength {
                    table: id,
                    column,
                    expected,
                    actual: values.len(),
                });
            }
            if let Some(row) = values.iter().position(|value| !value.is_finite()) {
                return Err(TableError::NonFinite { table: id, column, row });
            }
        }

        let bins = match &columns.bins {
            Some(bins) if bins.len() != expected => {
                return Err(TableError::ColumnLength {
                    table: id,
                    column: "bins",
                    expected,
                    actual: bins.len(),
                });
            }
            Some(bins) => bins.clone(),
            None => (0..expected).map(|row| row.to_string()).collect(),
        };

        Ok(Self {
            id,
            description: columns.description.clone(),
            bins,
            columns,
        })
    }

    pub fn from_json_str(id: TableId, source: &str) -> Result<Self, TableError> {
        let columns = serde_json::from_str::<CoefficientColumns>(source)
            .map_err(|source| TableError::Parse { table: id, source })?;
        Self::from_columns(id, columns)
    }

    pub fn load(id: TableId, path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(id, &source)
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    pub fn bins(&self) -> &[String] {
        &self.bins
    }

    pub fn a1(&self) -> &[f64] {
        &self.columns.a1
    }

    pub fn b1(&self) -> &[f64] {
        &self.columns.b1
    }

    pub fn wchr(&self) -> &[f64] {
        &self.columns.wchr
    }

    pub fn a2(&self) -> &[f64] {
        &self.columns.a2
    }

    pub fn b2(&self) -> &[f64] {
        &self.columns.b2
    }

    pub fn w1(&self) -> &[f64] {
        &self.columns.w1
    }

    pub fn w2(&self) -> &[f64] {
        &self.columns.w2
    }
}
