// Adapters layer: concrete clocks, file storage and record stores behind the domain ports.

pub mod clock;
pub mod storage;
pub mod store;

pub use clock::{FixedClock, SystemClock};
pub use storage::LocalStorage;
pub use store::{InMemoryRecordStore, JsonFileRecordStore};
