use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::validation::{self, FieldErrors, FormInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub phone: String,
    pub email: String,
    pub salary: String,
    pub status: EmployeeStatus,
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
}

impl Entity for Employee {
    const NAME: &'static str = "Employee";
}

impl FormInput for Employee {
    fn normalize(&mut self) {
        self.employee_id = self.employee_id.trim().to_string();
        self.name = self.name.trim().to_string();
        self.salary = self.salary.trim().to_string();
    }

    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check(
                "employeeId",
                validation::validate_employee_id(&self.employee_id),
            )
            .check("name", validation::validate_name(&self.name))
            .check(
                "position",
                validation::validate_required(&self.position, "Position"),
            )
            .check(
                "department",
                validation::validate_required(&self.department, "Department"),
            )
            .check("phone", validation::validate_phone(&self.phone))
            .check("email", validation::validate_email(&self.email))
            .check("salary", validation::validate_amount(&self.salary));
        errors
    }
}

fn rating(value: u8, label: &str) -> Option<String> {
    validation::validate_range(f64::from(value), 1.0, 10.0, label)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SatisfactionSurvey {
    pub employee_id: String,
    pub job_satisfaction: u8,
    pub work_life_balance: u8,
    pub compensation_satisfaction: u8,
    pub work_environment_rating: u8,
    pub survey_date: NaiveDate,
}

impl Entity for SatisfactionSurvey {
    const NAME: &'static str = "Satisfaction survey";
}

impl FormInput for SatisfactionSurvey {
    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check(
                "employeeId",
                validation::validate_employee_id(&self.employee_id),
            )
            .check(
                "jobSatisfaction",
                rating(self.job_satisfaction, "Job satisfaction"),
            )
            .check(
                "workLifeBalance",
                rating(self.work_life_balance, "Work-life balance"),
            )
            .check(
                "compensationSatisfaction",
                rating(self.compensation_satisfaction, "Compensation satisfaction"),
            )
            .check(
                "workEnvironmentRating",
                rating(self.work_environment_rating, "Work environment rating"),
            );
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    pub employee_id: String,
    pub career_growth_rating: u8,
    pub performance_score: f64,
    pub training_completed: u32,
    pub attendance_rate: f64,
}

impl Entity for PerformanceRecord {
    const NAME: &'static str = "Performance record";
}

impl FormInput for PerformanceRecord {
    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check(
                "employeeId",
                validation::validate_employee_id(&self.employee_id),
            )
            .check(
                "careerGrowthRating",
                rating(self.career_growth_rating, "Career growth rating"),
            )
            .check(
                "performanceScore",
                validation::validate_range(self.performance_score, 0.0, 100.0, "Performance score"),
            )
            .check(
                "attendanceRate",
                validation::validate_range(self.attendance_rate, 0.0, 100.0, "Attendance rate"),
            );
        errors
    }
}

/// Body of the bulk employee-feedback update. Each list that is present
/// replaces the stored list; absent lists are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDataPatch {
    #[serde(default)]
    pub surveys: Option<Vec<SatisfactionSurvey>>,
    #[serde(default)]
    pub performance_data: Option<Vec<PerformanceRecord>>,
}

impl FormInput for EmployeeDataPatch {
    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let bad_survey = self
            .surveys
            .iter()
            .flatten()
            .any(|s| !s.field_errors().is_empty());
        let bad_record = self
            .performance_data
            .iter()
            .flatten()
            .any(|p| !p.field_errors().is_empty());
        if bad_survey {
            errors.check("surveys", Some("Every survey must be valid".to_string()));
        }
        if bad_record {
            errors.check(
                "performanceData",
                Some("Every performance record must be valid".to_string()),
            );
        }
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
    #[serde(rename = "Half Day")]
    HalfDay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl Entity for AttendanceRecord {
    const NAME: &'static str = "Attendance record";
}

impl FormInput for AttendanceRecord {
    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "employeeId",
            validation::validate_employee_id(&self.employee_id),
        );
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "To Do")]
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub title: String,
    pub assignee: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub status: TaskStatus,
    #[serde(default)]
    pub description: Option<String>,
}

impl Entity for Task {
    const NAME: &'static str = "Task";
}

impl FormInput for Task {
    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check("title", validation::validate_required(&self.title, "Title"))
            .check(
                "assignee",
                validation::validate_employee_id(&self.assignee),
            );
        errors
    }
}
