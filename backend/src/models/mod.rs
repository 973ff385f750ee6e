use serde::{Deserialize, Serialize};

pub mod communication;
pub mod customer;
pub mod finance;
pub mod logistics;
pub mod supply;
pub mod workforce;

pub use communication::*;
pub use customer::*;
pub use finance::*;
pub use logistics::*;
pub use supply::*;
pub use workforce::*;

/// A record kind held in a store collection.
pub trait Entity {
    /// Human readable name used in errors and logs.
    const NAME: &'static str;
}

/// A record together with the stable id the store assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    pub id: String,
    #[serde(flatten)]
    pub record: T,
}

/// Parses a numeric text field, treating anything unparsable as zero.
pub fn numeric(value: &str) -> f64 {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}
