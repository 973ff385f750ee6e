use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::validation::{self, FieldErrors, FormInput};

fn stars(value: u8) -> Option<String> {
    validation::validate_range(f64::from(value), 1.0, 5.0, "Rating")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub customer_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

impl Entity for Review {
    const NAME: &'static str = "Review";
}

impl FormInput for Review {
    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check(
                "customerName",
                validation::validate_name(&self.customer_name),
            )
            .check("rating", stars(self.rating));
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackStatus {
    Open,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Farmer id or customer name of whoever raised it.
    pub submitted_by: String,
    pub category: String,
    pub message: String,
    pub rating: u8,
    pub status: FeedbackStatus,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl Entity for Feedback {
    const NAME: &'static str = "Feedback";
}

impl FormInput for Feedback {
    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check(
                "submittedBy",
                validation::validate_required(&self.submitted_by, "Name or ID"),
            )
            .check(
                "category",
                validation::validate_required(&self.category, "Category"),
            )
            .check(
                "message",
                validation::validate_required(&self.message, "Message"),
            )
            .check("rating", stars(self.rating));
        errors
    }
}
