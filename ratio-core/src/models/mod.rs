mod financial_input;
mod financial_record;
mod label;
mod ratio_kind;
mod ratio_result;

pub use financial_input::FinancialInput;
pub use financial_record::{FinancialRecord, NewFinancialRecord};
pub use label::Label;
pub use ratio_kind::RatioKind;
pub use ratio_result::RatioResult;
