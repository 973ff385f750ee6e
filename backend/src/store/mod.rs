//! The shared application store. Every collection lives here and is only
//! changed through the named operations below; there is no way to swap a
//! whole collection out from under other consumers.

use crate::error::{DairyError, DairyResult};
use crate::models::{
    Announcement, AttendanceRecord, Bill, Delivery, Employee, EmployeeDataPatch, Farmer,
    Feedback, Message, MilkEntry, Payment, PerformanceRecord, QualityTest, QualityTestView,
    Review, SatisfactionSurvey, Stored, Task, Vehicle,
};

pub mod collection;
pub mod local;

pub use collection::Collection;
pub use local::LocalRecord;

#[derive(Debug, Default)]
pub struct Store {
    farmers: Collection<Farmer>,
    milk_entries: Collection<MilkEntry>,
    employees: Collection<Employee>,
    quality_tests: Collection<QualityTest>,
    surveys: Collection<SatisfactionSurvey>,
    performance: Collection<PerformanceRecord>,
    vehicles: Collection<Vehicle>,
    deliveries: Collection<Delivery>,
    messages: Collection<Message>,
    announcements: Collection<Announcement>,
    payments: Collection<Payment>,
    bills: Collection<Bill>,
    reviews: Collection<Review>,
    feedback: Collection<Feedback>,
    attendance: Collection<AttendanceRecord>,
    tasks: Collection<Task>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn farmers(&self) -> &Collection<Farmer> {
        &self.farmers
    }

    pub fn milk_entries(&self) -> &Collection<MilkEntry> {
        &self.milk_entries
    }

    pub fn employees(&self) -> &Collection<Employee> {
        &self.employees
    }

    pub fn quality_tests(&self) -> &Collection<QualityTest> {
        &self.quality_tests
    }

    pub fn surveys(&self) -> &Collection<SatisfactionSurvey> {
        &self.surveys
    }

    pub fn performance(&self) -> &Collection<PerformanceRecord> {
        &self.performance
    }

    // Milk entries

    /// New entries go to the head of the collection.
    pub fn add_milk_entry(&mut self, entry: MilkEntry) -> Stored<MilkEntry> {
        let stored = self.milk_entries.prepend(entry).clone();
        tracing::info!(
            "Milk entry {} added for farmer {}",
            stored.id,
            stored.record.farmer_id
        );
        stored
    }

    pub fn update_milk_entry(
        &mut self,
        index: usize,
        entry: MilkEntry,
    ) -> DairyResult<Stored<MilkEntry>> {
        Ok(self.milk_entries.replace_at(index, entry)?.clone())
    }

    pub fn delete_milk_entry(&mut self, index: usize) -> DairyResult<Stored<MilkEntry>> {
        self.milk_entries.remove_at(index)
    }

    pub fn update_milk_entry_by_id(
        &mut self,
        id: &str,
        entry: MilkEntry,
    ) -> DairyResult<Stored<MilkEntry>> {
        Ok(self.milk_entries.replace(id, entry)?.clone())
    }

    pub fn delete_milk_entry_by_id(&mut self, id: &str) -> DairyResult<Stored<MilkEntry>> {
        self.milk_entries.remove(id)
    }

    // Farmers

    fn ensure_unique_farmer_id(&self, farmer_id: &str, except: Option<&str>) -> DairyResult<()> {
        match self.farmers.iter().find(|s| s.record.farmer_id == farmer_id) {
            Some(existing) if Some(existing.id.as_str()) != except => Err(DairyError::Duplicate {
                field: "farmerId",
                value: farmer_id.to_string(),
            }),
            _ => Ok(()),
        }
    }

    pub fn add_farmer(&mut self, farmer: Farmer) -> DairyResult<Stored<Farmer>> {
        self.ensure_unique_farmer_id(&farmer.farmer_id, None)?;
        let stored = self.farmers.append(farmer).clone();
        tracing::info!("Farmer {} registered", stored.record.farmer_id);
        Ok(stored)
    }

    pub fn update_farmer(&mut self, id: &str, farmer: Farmer) -> DairyResult<Stored<Farmer>> {
        self.farmers.get(id)?;
        self.ensure_unique_farmer_id(&farmer.farmer_id, Some(id))?;
        Ok(self.farmers.replace(id, farmer)?.clone())
    }

    pub fn delete_farmer(&mut self, id: &str) -> DairyResult<Stored<Farmer>> {
        self.farmers.remove(id)
    }

    /// Name of the farmer with this business id, if one is registered.
    pub fn farmer_name(&self, farmer_id: &str) -> Option<&str> {
        self.farmers
            .find(|f| f.farmer_id == farmer_id)
            .map(|s| s.record.name.as_str())
    }

    // Employees

    fn ensure_unique_employee_id(
        &self,
        employee_id: &str,
        except: Option<&str>,
    ) -> DairyResult<()> {
        match self
            .employees
            .iter()
            .find(|s| s.record.employee_id == employee_id)
        {
            Some(existing) if Some(existing.id.as_str()) != except => Err(DairyError::Duplicate {
                field: "employeeId",
                value: employee_id.to_string(),
            }),
            _ => Ok(()),
        }
    }

    pub fn add_employee(&mut self, employee: Employee) -> DairyResult<Stored<Employee>> {
        self.ensure_unique_employee_id(&employee.employee_id, None)?;
        let stored = self.employees.append(employee).clone();
        tracing::info!("Employee {} added", stored.record.employee_id);
        Ok(stored)
    }

    pub fn update_employee(
        &mut self,
        id: &str,
        employee: Employee,
    ) -> DairyResult<Stored<Employee>> {
        self.employees.get(id)?;
        self.ensure_unique_employee_id(&employee.employee_id, Some(id))?;
        Ok(self.employees.replace(id, employee)?.clone())
    }

    pub fn delete_employee(&mut self, id: &str) -> DairyResult<Stored<Employee>> {
        self.employees.remove(id)
    }

    pub fn employee_name(&self, employee_id: &str) -> Option<&str> {
        self.employees
            .find(|e| e.employee_id == employee_id)
            .map(|s| s.record.name.as_str())
    }

    // Quality tests

    pub fn add_quality_test(&mut self, test: QualityTest) -> Stored<QualityTest> {
        let stored = self.quality_tests.append(test).clone();
        tracing::info!(
            "Quality test {} recorded for sample {}",
            stored.id,
            stored.record.sample_id
        );
        stored
    }

    pub fn update_quality_test(
        &mut self,
        id: &str,
        test: QualityTest,
    ) -> DairyResult<Stored<QualityTest>> {
        Ok(self.quality_tests.replace(id, test)?.clone())
    }

    pub fn delete_quality_test(&mut self, id: &str) -> DairyResult<Stored<QualityTest>> {
        self.quality_tests.remove(id)
    }

    /// Joins the farmer name at read time so renames show up everywhere.
    pub fn quality_test_view(&self, test: &Stored<QualityTest>) -> QualityTestView {
        QualityTestView {
            test: test.clone(),
            farmer_name: self.farmer_name(&test.record.farmer_id).map(str::to_string),
        }
    }

    pub fn quality_test_views(&self) -> Vec<QualityTestView> {
        self.quality_tests
            .iter()
            .map(|t| self.quality_test_view(t))
            .collect()
    }

    // Employee feedback

    /// At most one survey per employee: a repeat overwrites the old one in place.
    pub fn upsert_survey(&mut self, survey: SatisfactionSurvey) -> (String, bool) {
        let employee_id = survey.employee_id.clone();
        let (id, replaced) = self
            .surveys
            .upsert_by(survey, |s| s.employee_id.clone());
        tracing::info!(
            "Survey for {} {}",
            employee_id,
            if replaced { "replaced" } else { "added" }
        );
        (id, replaced)
    }

    pub fn upsert_performance(&mut self, record: PerformanceRecord) -> (String, bool) {
        self.performance
            .upsert_by(record, |p| p.employee_id.clone())
    }

    pub fn update_employee_data(&mut self, patch: EmployeeDataPatch) {
        if let Some(surveys) = patch.surveys {
            self.surveys = Collection::from_unique(surveys, |s| s.employee_id.clone());
        }
        if let Some(records) = patch.performance_data {
            self.performance = Collection::from_unique(records, |p| p.employee_id.clone());
        }
    }

    /// Career growth rating from the employee's performance record.
    pub fn career_growth_for(&self, employee_id: &str) -> Option<u8> {
        self.performance
            .iter()
            .rev()
            .find(|p| p.record.employee_id == employee_id)
            .map(|p| p.record.career_growth_rating)
    }
}
