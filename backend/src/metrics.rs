//! Aggregates derived from the store. Nothing here is cached: every call
//! walks the current collections.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::models::{
    numeric, AttendanceRecord, AttendanceStatus, Bill, BillStatus, Delivery, DeliveryStatus,
    Feedback, FeedbackStatus, Grade, Payment, PaymentStatus, QualityTest, Review,
    SatisfactionSurvey, Shift, Task, TaskStatus, TestStatus, Vehicle, VehicleStatus,
};
use crate::store::Store;

pub const JOB_SATISFACTION_WEIGHT: f64 = 0.30;
pub const WORK_LIFE_BALANCE_WEIGHT: f64 = 0.25;
pub const COMPENSATION_WEIGHT: f64 = 0.20;
pub const CAREER_GROWTH_WEIGHT: f64 = 0.15;
pub const WORK_ENVIRONMENT_WEIGHT: f64 = 0.10;
/// Used when an employee has no performance record.
pub const DEFAULT_CAREER_GROWTH: u8 = 5;

/// Weighted 1-10 satisfaction scaled to a 0-100 percentage.
pub fn weighted_satisfaction(survey: &SatisfactionSurvey, career_growth: u8) -> f64 {
    let score = f64::from(survey.job_satisfaction) * JOB_SATISFACTION_WEIGHT
        + f64::from(survey.work_life_balance) * WORK_LIFE_BALANCE_WEIGHT
        + f64::from(survey.compensation_satisfaction) * COMPENSATION_WEIGHT
        + f64::from(survey.work_environment_rating) * WORK_ENVIRONMENT_WEIGHT
        + f64::from(career_growth) * CAREER_GROWTH_WEIGHT;
    score * 10.0
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSatisfaction {
    pub employee_id: String,
    pub employee_name: Option<String>,
    pub career_growth_rating: u8,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SatisfactionReport {
    /// `None` when no survey has been submitted yet.
    pub overall: Option<f64>,
    pub survey_count: usize,
    pub employees: Vec<EmployeeSatisfaction>,
}

pub fn employee_satisfaction_breakdown(store: &Store) -> Vec<EmployeeSatisfaction> {
    store
        .surveys()
        .records()
        .map(|survey| {
            let career_growth = store
                .career_growth_for(&survey.employee_id)
                .unwrap_or(DEFAULT_CAREER_GROWTH);
            EmployeeSatisfaction {
                employee_id: survey.employee_id.clone(),
                employee_name: store.employee_name(&survey.employee_id).map(str::to_string),
                career_growth_rating: career_growth,
                score: weighted_satisfaction(survey, career_growth),
            }
        })
        .collect()
}

/// Average satisfaction over every surveyed employee, or `None` with no surveys.
pub fn calculate_employee_satisfaction(store: &Store) -> Option<f64> {
    satisfaction_report(store).overall
}

pub fn satisfaction_report(store: &Store) -> SatisfactionReport {
    let employees = employee_satisfaction_breakdown(store);
    let overall = if employees.is_empty() {
        None
    } else {
        Some(employees.iter().map(|s| s.score).sum::<f64>() / employees.len() as f64)
    };
    SatisfactionReport {
        overall,
        survey_count: employees.len(),
        employees,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeShare {
    pub grade: Grade,
    pub count: usize,
    pub percentage: f64,
}

/// Share of tests per grade, best grade first. Grades nobody got are left out.
pub fn generate_quality_distribution<'a>(
    tests: impl IntoIterator<Item = &'a QualityTest>,
) -> Vec<GradeShare> {
    let mut counts: HashMap<Grade, usize> = HashMap::new();
    let mut total = 0usize;
    for test in tests {
        *counts.entry(test.overall_grade).or_insert(0) += 1;
        total += 1;
    }
    if total == 0 {
        return Vec::new();
    }
    Grade::ALL
        .iter()
        .filter_map(|grade| {
            counts.get(grade).map(|&count| GradeShare {
                grade: *grade,
                count,
                percentage: count as f64 * 100.0 / total as f64,
            })
        })
        .collect()
}

/// Percentage of finished tests that passed.
pub fn quality_pass_rate<'a>(tests: impl IntoIterator<Item = &'a QualityTest>) -> Option<f64> {
    let (passed, decided) = tests
        .into_iter()
        .fold((0usize, 0usize), |(passed, decided), t| match t.status {
            TestStatus::Passed => (passed + 1, decided + 1),
            TestStatus::Failed => (passed, decided + 1),
            TestStatus::Pending => (passed, decided),
        });
    if decided == 0 {
        None
    } else {
        Some(passed as f64 * 100.0 / decided as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCollection {
    pub date: NaiveDate,
    pub morning_litres: f64,
    pub evening_litres: f64,
    pub total_litres: f64,
}

/// Litres collected per day, oldest first.
pub fn daily_collection(store: &Store) -> Vec<DailyCollection> {
    let mut days: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for entry in store.milk_entries().records() {
        let day = days.entry(entry.date).or_insert((0.0, 0.0));
        match entry.shift {
            Shift::Morning => day.0 += entry.litres(),
            Shift::Evening => day.1 += entry.litres(),
        }
    }
    days.into_iter()
        .map(|(date, (morning, evening))| DailyCollection {
            date,
            morning_litres: morning,
            evening_litres: evening,
            total_litres: morning + evening,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierTotal {
    pub farmer_id: String,
    pub farmer_name: Option<String>,
    pub litres: f64,
    pub entries: usize,
}

/// Farmers ranked by litres supplied. Ties keep farmer id order.
pub fn top_suppliers(store: &Store, limit: usize) -> Vec<SupplierTotal> {
    let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for entry in store.milk_entries().records() {
        let t = totals.entry(entry.farmer_id.as_str()).or_insert((0.0, 0));
        t.0 += entry.litres();
        t.1 += 1;
    }
    let mut ranked: Vec<SupplierTotal> = totals
        .into_iter()
        .map(|(farmer_id, (litres, entries))| SupplierTotal {
            farmer_id: farmer_id.to_string(),
            farmer_name: store.farmer_name(farmer_id).map(str::to_string),
            litres,
            entries,
        })
        .collect();
    ranked.sort_by(|a, b| b.litres.total_cmp(&a.litres));
    ranked.truncate(limit);
    ranked
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub payments_completed: f64,
    pub payments_pending: f64,
    pub payments_failed: f64,
    pub bills_paid: f64,
    pub bills_outstanding: f64,
    pub overdue_bills: usize,
}

pub fn finance_summary(store: &Store) -> FinanceSummary {
    let mut summary = FinanceSummary::default();
    for payment in store.list::<Payment>().records() {
        let amount = numeric(&payment.amount);
        match payment.status {
            PaymentStatus::Completed => summary.payments_completed += amount,
            PaymentStatus::Pending => summary.payments_pending += amount,
            PaymentStatus::Failed => summary.payments_failed += amount,
        }
    }
    for bill in store.list::<Bill>().records() {
        let amount = numeric(&bill.amount);
        match bill.status {
            BillStatus::Paid => summary.bills_paid += amount,
            BillStatus::Unpaid => summary.bills_outstanding += amount,
            BillStatus::Overdue => {
                summary.bills_outstanding += amount;
                summary.overdue_bills += 1;
            }
        }
    }
    summary
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub present: usize,
    pub absent: usize,
    pub leave: usize,
    pub half_day: usize,
    /// Present counts fully and half days count half.
    pub attendance_rate: Option<f64>,
}

pub fn attendance_summary(store: &Store, date: NaiveDate) -> AttendanceSummary {
    let mut summary = AttendanceSummary::default();
    for record in store
        .list::<AttendanceRecord>()
        .records()
        .filter(|r| r.date == date)
    {
        match record.status {
            AttendanceStatus::Present => summary.present += 1,
            AttendanceStatus::Absent => summary.absent += 1,
            AttendanceStatus::Leave => summary.leave += 1,
            AttendanceStatus::HalfDay => summary.half_day += 1,
        }
    }
    let marked = summary.present + summary.absent + summary.leave + summary.half_day;
    if marked > 0 {
        let attended = summary.present as f64 + summary.half_day as f64 * 0.5;
        summary.attendance_rate = Some(attended * 100.0 / marked as f64);
    }
    summary
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

pub fn task_counts(store: &Store) -> TaskCounts {
    let mut counts = TaskCounts::default();
    for task in store.list::<Task>().records() {
        match task.status {
            TaskStatus::Todo => counts.todo += 1,
            TaskStatus::InProgress => counts.in_progress += 1,
            TaskStatus::Done => counts.done += 1,
        }
    }
    counts
}

pub fn average_review_rating(store: &Store) -> Option<f64> {
    let reviews = store.list::<Review>();
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.records().map(|r| u32::from(r.rating)).sum();
    Some(f64::from(sum) / reviews.len() as f64)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_farmers: usize,
    pub total_employees: usize,
    pub milk_entry_count: usize,
    pub total_milk_litres: f64,
    pub morning_litres: f64,
    pub evening_litres: f64,
    pub quality_test_count: usize,
    pub quality_pass_rate: Option<f64>,
    pub employee_satisfaction: Option<f64>,
    pub available_vehicles: usize,
    pub active_deliveries: usize,
    pub pending_payment_amount: f64,
    pub outstanding_bill_amount: f64,
    pub average_review_rating: Option<f64>,
    pub open_feedback: usize,
}

pub fn dashboard_summary(store: &Store) -> DashboardSummary {
    let (morning, evening) =
        store
            .milk_entries()
            .records()
            .fold((0.0, 0.0), |(m, e), entry| match entry.shift {
                Shift::Morning => (m + entry.litres(), e),
                Shift::Evening => (m, e + entry.litres()),
            });
    let finance = finance_summary(store);

    DashboardSummary {
        total_farmers: store.farmers().len(),
        total_employees: store.employees().len(),
        milk_entry_count: store.milk_entries().len(),
        total_milk_litres: morning + evening,
        morning_litres: morning,
        evening_litres: evening,
        quality_test_count: store.quality_tests().len(),
        quality_pass_rate: quality_pass_rate(store.quality_tests().records()),
        employee_satisfaction: calculate_employee_satisfaction(store),
        available_vehicles: store
            .list::<Vehicle>()
            .records()
            .filter(|v| v.status == VehicleStatus::Available)
            .count(),
        active_deliveries: store
            .list::<Delivery>()
            .records()
            .filter(|d| matches!(d.status, DeliveryStatus::Scheduled | DeliveryStatus::InTransit))
            .count(),
        pending_payment_amount: finance.payments_pending,
        outstanding_bill_amount: finance.bills_outstanding,
        average_review_rating: average_review_rating(store),
        open_feedback: store
            .list::<Feedback>()
            .records()
            .filter(|f| f.status == FeedbackStatus::Open)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MilkEntry, PerformanceRecord};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn survey(employee: &str, job: u8, life: u8, comp: u8, env: u8) -> SatisfactionSurvey {
        SatisfactionSurvey {
            employee_id: employee.to_string(),
            job_satisfaction: job,
            work_life_balance: life,
            compensation_satisfaction: comp,
            work_environment_rating: env,
            survey_date: day(1),
        }
    }

    fn graded(grade: Grade, status: TestStatus) -> QualityTest {
        QualityTest {
            batch_id: "BATCH0001".to_string(),
            sample_id: "SAMPLE000001".to_string(),
            farmer_id: "F0001".to_string(),
            fat: 4.0,
            protein: 3.2,
            lactose: 4.7,
            snf: 8.5,
            ph: 6.6,
            bacteria_count: 500,
            overall_grade: grade,
            status,
            test_date: None,
        }
    }

    fn milk(farmer: &str, d: u32, shift: Shift, qty: &str) -> MilkEntry {
        MilkEntry {
            farmer_id: farmer.to_string(),
            date: day(d),
            quantity: qty.to_string(),
            shift,
            fat_percentage: None,
            rate_per_litre: None,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let sum = JOB_SATISFACTION_WEIGHT
            + WORK_LIFE_BALANCE_WEIGHT
            + COMPENSATION_WEIGHT
            + CAREER_GROWTH_WEIGHT
            + WORK_ENVIRONMENT_WEIGHT;
        assert!(close(sum, 1.0));
    }

    #[test]
    fn test_weighted_satisfaction_example() {
        // 2.4 + 1.5 + 1.4 + 0.9 + 0.75 = 6.95 -> 69.5%
        let s = survey("EMP0001", 8, 6, 7, 9);
        assert!(close(weighted_satisfaction(&s, 5), 69.5));
    }

    #[test]
    fn test_career_growth_comes_from_performance_record() {
        let mut store = Store::new();
        store.upsert_survey(survey("EMP0001", 8, 6, 7, 9));
        assert!(close(calculate_employee_satisfaction(&store).unwrap(), 69.5));

        store.upsert_performance(PerformanceRecord {
            employee_id: "EMP0001".to_string(),
            career_growth_rating: 9,
            performance_score: 88.0,
            training_completed: 3,
            attendance_rate: 97.0,
        });
        // careerGrowth 9 adds 4 * 0.15 * 10 = 6 points
        assert!(close(calculate_employee_satisfaction(&store).unwrap(), 75.5));
    }

    #[test]
    fn test_satisfaction_averages_employees_and_reports_no_data() {
        let mut store = Store::new();
        assert_eq!(calculate_employee_satisfaction(&store), None);
        assert_eq!(satisfaction_report(&store).survey_count, 0);

        store.upsert_survey(survey("EMP0001", 10, 10, 10, 10));
        store.upsert_survey(survey("EMP0002", 1, 1, 1, 1));
        // (92.5 + 16.0) / 2 with default career growth 5
        let overall = calculate_employee_satisfaction(&store).unwrap();
        assert!(close(overall, 54.25));
        assert_eq!(satisfaction_report(&store).employees.len(), 2);
    }

    #[test]
    fn test_quality_distribution_sums_to_hundred() {
        let tests = vec![
            graded(Grade::A, TestStatus::Passed),
            graded(Grade::APlus, TestStatus::Passed),
            graded(Grade::A, TestStatus::Passed),
            graded(Grade::D, TestStatus::Failed),
            graded(Grade::BPlus, TestStatus::Pending),
            graded(Grade::A, TestStatus::Passed),
        ];
        let shares = generate_quality_distribution(&tests);
        let grades: Vec<Grade> = shares.iter().map(|s| s.grade).collect();
        assert_eq!(grades, vec![Grade::APlus, Grade::A, Grade::BPlus, Grade::D]);
        assert!(close(shares[1].percentage, 50.0));
        let total: f64 = shares.iter().map(|s| s.percentage).sum();
        assert!(close(total, 100.0));

        assert!(generate_quality_distribution(&Vec::<QualityTest>::new()).is_empty());
    }

    #[test]
    fn test_pass_rate_ignores_pending() {
        let tests = vec![
            graded(Grade::A, TestStatus::Passed),
            graded(Grade::D, TestStatus::Failed),
            graded(Grade::B, TestStatus::Pending),
        ];
        assert!(close(quality_pass_rate(&tests).unwrap(), 50.0));
        assert_eq!(quality_pass_rate(&tests[2..]), None);
    }

    #[test]
    fn test_daily_collection_and_suppliers() {
        let mut store = Store::new();
        store.add_milk_entry(milk("F0002", 2, Shift::Morning, "5"));
        store.add_milk_entry(milk("F0001", 1, Shift::Morning, "10.5"));
        store.add_milk_entry(milk("F0001", 1, Shift::Evening, "4.5"));
        store.add_milk_entry(milk("F0003", 1, Shift::Evening, "bad"));

        let days = daily_collection(&store);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, day(1));
        assert!(close(days[0].morning_litres, 10.5));
        assert!(close(days[0].evening_litres, 4.5));
        assert!(close(days[1].total_litres, 5.0));

        let top = top_suppliers(&store, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].farmer_id, "F0001");
        assert!(close(top[0].litres, 15.0));
        assert_eq!(top[0].entries, 2);
        assert_eq!(top[1].farmer_id, "F0002");
    }

    #[test]
    fn test_dashboard_on_empty_store() {
        let summary = dashboard_summary(&Store::new());
        assert_eq!(summary.total_farmers, 0);
        assert_eq!(summary.employee_satisfaction, None);
        assert_eq!(summary.quality_pass_rate, None);
        assert!(close(summary.total_milk_litres, 0.0));
    }

    #[test]
    fn test_attendance_rate_counts_half_days() {
        let mut store = Store::new();
        for (emp, status) in [
            ("EMP0001", AttendanceStatus::Present),
            ("EMP0002", AttendanceStatus::HalfDay),
            ("EMP0003", AttendanceStatus::Absent),
            ("EMP0004", AttendanceStatus::Present),
        ] {
            store.add(AttendanceRecord {
                employee_id: emp.to_string(),
                date: day(3),
                status,
                remarks: None,
            });
        }
        let summary = attendance_summary(&store, day(3));
        assert_eq!(summary.present, 2);
        assert!(close(summary.attendance_rate.unwrap(), 62.5));
        assert_eq!(attendance_summary(&store, day(4)).attendance_rate, None);
    }
}
