mod loader;

pub use loader::{FinancialRecordLoader, LoadSummary, RecordLoaderError, RecordRow};
