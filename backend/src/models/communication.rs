use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, Priority};
use crate::validation::{self, FieldErrors, FormInput};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    /// Stamped on submission when the form leaves it out.
    #[serde(default)]
    pub sent_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub read: bool,
}

impl Entity for Message {
    const NAME: &'static str = "Message";
}

impl FormInput for Message {
    fn normalize(&mut self) {
        if self.sent_at.is_none() {
            self.sent_at = Some(Utc::now().naive_utc());
        }
    }

    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check("sender", validation::validate_required(&self.sender, "Sender"))
            .check(
                "recipient",
                validation::validate_required(&self.recipient, "Recipient"),
            )
            .check(
                "subject",
                validation::validate_required(&self.subject, "Subject"),
            )
            .check("body", validation::validate_required(&self.body, "Message"));
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub date: NaiveDate,
}

impl Entity for Announcement {
    const NAME: &'static str = "Announcement";
}

impl FormInput for Announcement {
    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check("title", validation::validate_required(&self.title, "Title"))
            .check(
                "content",
                validation::validate_required(&self.content, "Content"),
            );
        errors
    }
}
