use crate::core::exporter::export_csv;
use crate::core::file_validator::UploadSource;
use crate::core::pipeline::process;
use crate::core::sorter::sort_by_name;
use crate::core::statistics::aggregate;
use crate::domain::model::{Record, Statistics};
use crate::domain::ports::{Clock, RecordStore};
use crate::utils::error::{EtlError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    pub records: Vec<Record>,
    pub statistics: Statistics,
}

/// Sorted records plus the aggregates shown next to them.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub records: Vec<Record>,
    pub statistics: Statistics,
}

impl Report {
    pub fn male_average_display(&self) -> String {
        format!("{:.1}", self.statistics.male_average_age)
    }

    pub fn female_average_display(&self) -> String {
        format!("{:.1}", self.statistics.female_average_age)
    }
}

/// Ties the pipeline to a record store and a clock.
pub struct EtlEngine<R: RecordStore, C: Clock> {
    store: R,
    clock: C,
}

impl<R: RecordStore, C: Clock> EtlEngine<R, C> {
    pub fn new(store: R, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    /// Parses the upload, sorts it and replaces the stored set with it.
    ///
    /// Nothing is written when parsing fails.
    pub async fn import(&self, source: &UploadSource) -> Result<ImportSummary> {
        let today = self.clock.today();
        tracing::info!("Importing {:?} (today = {})", source.filename, today);

        let mut records = process(source, today)?;
        tracing::info!("Parsed {} records", records.len());

        sort_by_name(&mut records);

        self.store.replace_all(&records).await.map_err(|e| {
            tracing::error!("Failed to save records: {}", e);
            EtlError::PersistenceFailure {
                message: e.to_string(),
            }
        })?;
        tracing::debug!("Record store replaced");

        let statistics = aggregate(&records);
        Ok(ImportSummary {
            records,
            statistics,
        })
    }

    pub async fn report(&self) -> Result<Report> {
        let mut records = self.load_stored().await?;
        sort_by_name(&mut records);
        let statistics = aggregate(&records);
        tracing::debug!("Report over {} records: {:?}", records.len(), statistics);
        Ok(Report {
            records,
            statistics,
        })
    }

    /// Stored records as CSV text, in store order.
    pub async fn export(&self) -> Result<String> {
        let records = self.load_stored().await?;
        tracing::info!("Exporting {} records", records.len());
        export_csv(&records)
    }

    async fn load_stored(&self) -> Result<Vec<Record>> {
        self.store.find_all().await.map_err(|e| {
            tracing::error!("Failed to load records: {}", e);
            EtlError::PersistenceFailure {
                message: e.to_string(),
            }
        })
    }
}
