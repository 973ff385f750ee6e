use serde::Serialize;

pub mod auth;
pub mod dashboard;
pub mod employee;
pub mod farmer;
pub mod milk;
pub mod quality;
pub mod records;
pub mod system;

/// Outcome of a save that overwrites by employee id.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertResult {
    pub id: String,
    pub replaced: bool,
}
