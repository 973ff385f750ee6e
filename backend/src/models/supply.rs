use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Entity, Stored};
use crate::validation::{self, FieldErrors, FormInput};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    pub farmer_id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub cattle_count: Option<u32>,
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
}

impl Entity for Farmer {
    const NAME: &'static str = "Farmer";
}

impl FormInput for Farmer {
    fn normalize(&mut self) {
        self.farmer_id = self.farmer_id.trim().to_string();
        self.name = self.name.trim().to_string();
    }

    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check("farmerId", validation::validate_person_id(&self.farmer_id))
            .check("name", validation::validate_name(&self.name))
            .check("phone", validation::validate_phone(&self.phone));
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            errors.check("email", validation::validate_email(email));
        }
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Evening,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilkEntry {
    pub farmer_id: String,
    pub date: NaiveDate,
    /// Litres as typed, digits with an optional decimal point.
    pub quantity: String,
    pub shift: Shift,
    #[serde(default)]
    pub fat_percentage: Option<f64>,
    #[serde(default)]
    pub rate_per_litre: Option<String>,
}

impl MilkEntry {
    pub fn litres(&self) -> f64 {
        super::numeric(&self.quantity)
    }
}

impl Entity for MilkEntry {
    const NAME: &'static str = "Milk entry";
}

impl FormInput for MilkEntry {
    fn normalize(&mut self) {
        self.farmer_id = self.farmer_id.trim().to_string();
        self.quantity = self.quantity.trim().to_string();
    }

    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check("farmerId", validation::validate_person_id(&self.farmer_id))
            .check("quantity", validation::validate_amount(&self.quantity));
        if let Some(fat) = self.fat_percentage {
            errors.check(
                "fatPercentage",
                validation::validate_range(fat, 0.0, 100.0, "Fat percentage"),
            );
        }
        if let Some(rate) = self.rate_per_litre.as_deref() {
            errors.check("ratePerLitre", validation::validate_amount(rate));
        }
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    C,
    D,
}

impl Grade {
    /// Best to worst, the order charts list them in.
    pub const ALL: [Grade; 6] = [
        Grade::APlus,
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::C,
        Grade::D,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestStatus {
    Pending,
    Passed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityTest {
    pub batch_id: String,
    pub sample_id: String,
    pub farmer_id: String,
    pub fat: f64,
    pub protein: f64,
    pub lactose: f64,
    pub snf: f64,
    pub ph: f64,
    pub bacteria_count: u64,
    pub overall_grade: Grade,
    pub status: TestStatus,
    #[serde(default)]
    pub test_date: Option<NaiveDate>,
}

impl Entity for QualityTest {
    const NAME: &'static str = "Quality test";
}

impl FormInput for QualityTest {
    fn normalize(&mut self) {
        self.batch_id = self.batch_id.trim().to_string();
        self.sample_id = self.sample_id.trim().to_string();
        self.farmer_id = self.farmer_id.trim().to_string();
    }

    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check("batchId", validation::validate_batch_id(&self.batch_id))
            .check("sampleId", validation::validate_sample_id(&self.sample_id))
            .check("farmerId", validation::validate_person_id(&self.farmer_id))
            .check("fat", validation::validate_range(self.fat, 0.0, 100.0, "Fat"))
            .check(
                "protein",
                validation::validate_range(self.protein, 0.0, 100.0, "Protein"),
            )
            .check(
                "lactose",
                validation::validate_range(self.lactose, 0.0, 100.0, "Lactose"),
            )
            .check("snf", validation::validate_range(self.snf, 0.0, 100.0, "SNF"))
            .check("ph", validation::validate_ph(self.ph));
        errors
    }
}

/// A quality test as read back, with the farmer's current name joined in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityTestView {
    #[serde(flatten)]
    pub test: Stored<QualityTest>,
    pub farmer_name: Option<String>,
}
