use super::table::{CoefficientTable, TableError};
use crate::common::config::EngineConfig;
use crate::domain::TableId;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Source of reference coefficient tables for model construction.
pub trait CoefficientTableProvider {
    fn table(&self, id: TableId) -> Result<Arc<CoefficientTable>, TableError>;
}

impl<T> CoefficientTableProvider for Arc<T>
where
    T: CoefficientTableProvider + ?Sized,
{
    fn table(&self, id: TableId) -> Result<Arc<CoefficientTable>, TableError> {
        (**self).table(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TableSource {
    Directory(PathBuf),
    Memory,
}

/// Loader that reads each coefficient table at most once and shares it afterwards.
///
/// The cache lock is held for the duration of a disk load, so concurrent
/// requests for the same table wait for the first load instead of repeating it.
#[derive(Debug)]
pub struct CoefficientStore {
    source: TableSource,
    cache: Mutex<BTreeMap<TableId, Arc<CoefficientTable>>>,
}

impl CoefficientStore {
    pub fn open(directory: impl Into<PathBuf>) -> Self {
        Self {
            source: TableSource::Directory(directory.into()),
            cache: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::open(config.coefficient_dir.clone())
    }

    /// Builds a store over tables that are already in memory; ids not supplied
    /// here fail with [`TableError::UnknownTable`].
    pub fn from_tables(tables: impl IntoIterator<Item = CoefficientTable>) -> Self {
        let cache = tables
            .into_iter()
            .map(|table| (table.id(), Arc::new(table)))
            .collect();
        Self {
            source: TableSource::Memory,
            cache: Mutex::new(cache),
        }
    }

    pub fn directory(&self) -> Option<&Path> {
        match &self.source {
            TableSource::Directory(path) => Some(path),
            TableSource::Memory => None,
        }
    }

    pub fn table_path(&self, id: TableId) -> Option<PathBuf> {
        self.directory().map(|directory| directory.join(id.file_name()))
    }

    pub fn cached_table_count(&self) -> usize {
        self.cache.lock().map(|cache| cache.len()).unwrap_or(0)
    }
}

impl CoefficientTableProvider for CoefficientStore {
    fn table(&self, id: TableId) -> Result<Arc<CoefficientTable>, TableError> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|error| TableError::Cache(error.to_string()))?;

        if let Some(table) = cache.get(&id) {
            tracing::debug!(table = %id, "coefficient table cache hit");
            return Ok(Arc::clone(table));
        }

        let Some(path) = self.table_path(id) else {
            return Err(TableError::UnknownTable { table: id });
        };

        let table = Arc::new(CoefficientTable::load(id, &path)?);
        tracing::info!(
            table = %id,
            path = %path.display(),
            bins = table.bin_count(),
            "loaded coefficient table"
        );
        cache.insert(id, Arc::clone(&table));
        Ok(table)
    }
}
