pub mod prelude;

pub mod patient_records;
pub mod users;
