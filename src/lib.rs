pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{FixedClock, InMemoryRecordStore, JsonFileRecordStore, LocalStorage, SystemClock};
pub use config::Settings;
pub use crate::core::etl::{EtlEngine, ImportSummary, Report};
pub use crate::core::exporter::export_csv;
pub use crate::core::file_validator::UploadSource;
pub use crate::core::pipeline::process;
pub use crate::core::sorter::sort_by_name;
pub use crate::core::statistics::aggregate;
pub use domain::model::{Record, Sex, Statistics};
pub use utils::error::{EtlError, Result};
