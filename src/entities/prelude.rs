pub use super::patient_records::Entity as PatientRecords;
pub use super::users::Entity as Users;
