use sea_orm::entity::prelude::*;

/// Patient screening record row.
///
/// The schema lives here so the bootstrap migration creates it alongside the
/// `users` table, but row access belongs entirely to the records module; this
/// crate never reads or writes `patient_records`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "patient_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub patient_id: Option<String>,
    pub name: Option<String>,
    pub birthdate: Option<String>,
    pub age: Option<String>,
    pub sex: Option<String>,
    pub contact: Option<String>,
    pub eyes: Option<String>,
    pub diabetes_type: Option<String>,
    pub duration: Option<String>,
    pub hba1c: Option<String>,
    pub prev_treatment: Option<String>,
    pub notes: Option<String>,
    pub result: Option<String>,
    pub confidence: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
