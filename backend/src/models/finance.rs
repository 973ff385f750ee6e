use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::validation::{self, FieldErrors, FormInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "UPI")]
    Upi,
    Cheque,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub farmer_id: String,
    pub amount: String,
    pub date: NaiveDate,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
}

impl Entity for Payment {
    const NAME: &'static str = "Payment";
}

impl FormInput for Payment {
    fn normalize(&mut self) {
        self.farmer_id = self.farmer_id.trim().to_string();
        self.amount = self.amount.trim().to_string();
    }

    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check("farmerId", validation::validate_person_id(&self.farmer_id))
            .check("amount", validation::validate_amount(&self.amount));
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillStatus {
    Unpaid,
    Paid,
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub bill_id: String,
    pub customer_name: String,
    pub amount: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: BillStatus,
}

impl Entity for Bill {
    const NAME: &'static str = "Bill";
}

impl FormInput for Bill {
    fn normalize(&mut self) {
        self.bill_id = self.bill_id.trim().to_string();
        self.amount = self.amount.trim().to_string();
    }

    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check("billId", validation::validate_bill_id(&self.bill_id))
            .check(
                "customerName",
                validation::validate_name(&self.customer_name),
            )
            .check("amount", validation::validate_amount(&self.amount));
        if self.due_date < self.issue_date {
            errors.check(
                "dueDate",
                Some("Due date cannot be before the issue date".to_string()),
            );
        }
        errors
    }
}
