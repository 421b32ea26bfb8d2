pub mod constants;
pub mod format;
pub mod transaction;
pub mod validation;
