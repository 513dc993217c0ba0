use crate::domain::model::Record;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Durable home of the imported record set.
///
/// `replace_all` is destructive: the previous set is discarded before the new
/// one is written. Implementations decide whether the two steps are atomic;
/// callers racing on the same store may interleave.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn replace_all(&self, records: &[Record]) -> Result<()>;
    async fn find_all(&self) -> Result<Vec<Record>>;
}

/// Source of the reference date used for birth-year inference.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub trait ConfigProvider: Send + Sync {
    fn store_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn today_override(&self) -> Option<NaiveDate>;
}
