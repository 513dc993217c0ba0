pub mod coercion;
pub mod date_corrector;
pub mod etl;
pub mod exporter;
pub mod file_validator;
pub mod pipeline;
pub mod record_parser;
pub mod sorter;
pub mod statistics;

pub use crate::domain::model::{Record, Sex, Statistics};
pub use crate::domain::ports::{Clock, ConfigProvider, RecordStore, Storage};
pub use crate::utils::error::Result;
