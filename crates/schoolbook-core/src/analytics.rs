//! Derived views over a snapshot of the entity store.
//!
//! Every function here is pure and total: no state between calls, no
//! mutation of its inputs, and well-defined output for empty collections
//! (empty sequences or 0% rates, never a division by zero). Views are
//! recomputed fresh after each mutation; nothing is memoized.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{AttendanceRecord, Class, Performer, Student};

/// Bucket labels for [`performance_distribution`], highest first.
pub const PERFORMANCE_BUCKETS: [&str; 4] = ["Excellent", "Good", "Average", "Needs Improvement"];

/// One bar of the per-class enrollment chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEnrollment {
    pub class_name: String,
    pub count: usize,
}

/// Attendance rate for one student, derived from the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAttendanceRate {
    pub id: String,
    pub name: String,
    /// Rounded percentage in 0..=100.
    pub rate: u32,
}

/// Attendance rate across all records sharing one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAttendanceRate {
    pub date: String,
    pub rate: u32,
}

/// One leaderboard row after ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPerformer {
    /// 1-based position. Ties in points never share a rank; the name
    /// tie-break forces a strict order.
    pub rank: u32,
    #[serde(flatten)]
    pub performer: Performer,
}

/// Share of students falling into one performance bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketShare {
    pub label: &'static str,
    pub count: usize,
    /// Rounded percentage of all students.
    pub percent: u32,
}

/// Header stats for the dashboard view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_students: usize,
    pub total_classes: usize,
    /// Mean stored attendance rate as a percentage, one decimal.
    pub avg_performance: f64,
}

/// Students per class, one entry per class, class order preserved.
pub fn per_class_enrollment(classes: &[Class], students: &[Student]) -> Vec<ClassEnrollment> {
    classes
        .iter()
        .map(|class| ClassEnrollment {
            class_name: class.name.clone(),
            count: students
                .iter()
                .filter(|s| s.class_id.as_deref() == Some(class.id.as_str()))
                .count(),
        })
        .collect()
}

/// Attendance rate per student from the log, in student order.
///
/// A student with no records rates 0%: the denominator floors at 1 so
/// the division is always defined.
pub fn attendance_rate_by_student(
    students: &[Student],
    records: &[AttendanceRecord],
) -> Vec<StudentAttendanceRate> {
    students
        .iter()
        .map(|student| {
            let mut present = 0usize;
            let mut total = 0usize;
            for record in records.iter().filter(|r| r.student_id == student.id) {
                total += 1;
                if record.present {
                    present += 1;
                }
            }
            StudentAttendanceRate {
                id: student.id.clone(),
                name: student.name.clone(),
                rate: percent(present, total.max(1)),
            }
        })
        .collect()
}

/// Attendance rate per calendar date, ascending by exact date string.
pub fn attendance_rate_by_day(records: &[AttendanceRecord]) -> Vec<DailyAttendanceRate> {
    let mut days: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for record in records {
        let entry = days.entry(record.date.as_str()).or_insert((0, 0));
        entry.1 += 1;
        if record.present {
            entry.0 += 1;
        }
    }
    days.into_iter()
        .map(|(date, (present, total))| DailyAttendanceRate {
            date: date.to_string(),
            rate: percent(present, total),
        })
        .collect()
}

/// Top-`top_n` performers: points descending, name ascending on ties,
/// ranks assigned 1-based after sorting.
pub fn leaderboard_ranking(performers: &[Performer], top_n: usize) -> Vec<RankedPerformer> {
    let mut sorted: Vec<&Performer> = performers.iter().collect();
    sorted.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.name.cmp(&b.name)));
    sorted
        .into_iter()
        .take(top_n)
        .enumerate()
        .map(|(i, p)| RankedPerformer {
            rank: i as u32 + 1,
            performer: p.clone(),
        })
        .collect()
}

/// Partition students into the four performance buckets by stored
/// attendance rate and return each bucket's share of the total.
///
/// Ranges: [0.9, 1.0] Excellent, [0.8, 0.9) Good, [0.7, 0.8) Average,
/// below 0.7 Needs Improvement.
pub fn performance_distribution(students: &[Student]) -> Vec<BucketShare> {
    let mut counts = [0usize; 4];
    for student in students {
        let bucket = match student.attendance_rate {
            r if r >= 0.9 => 0,
            r if r >= 0.8 => 1,
            r if r >= 0.7 => 2,
            _ => 3,
        };
        counts[bucket] += 1;
    }
    let denominator = students.len().max(1);
    PERFORMANCE_BUCKETS
        .into_iter()
        .zip(counts)
        .map(|(label, count)| BucketShare {
            label,
            count,
            percent: percent(count, denominator),
        })
        .collect()
}

/// Dashboard header stats: totals plus mean stored attendance rate as a
/// percentage rounded to one decimal.
pub fn dashboard_summary(students: &[Student], classes: &[Class]) -> DashboardSummary {
    let avg_performance = if students.is_empty() {
        0.0
    } else {
        let mean: f64 =
            students.iter().map(|s| s.attendance_rate).sum::<f64>() / students.len() as f64;
        (mean * 1000.0).round() / 10.0
    };
    DashboardSummary {
        total_students: students.len(),
        total_classes: classes.len(),
        avg_performance,
    }
}

/// Case-insensitive student search over name, email, grade, and id,
/// with an optional class filter. Mirrors the original directory view.
pub fn filter_students<'a>(
    students: &'a [Student],
    query: &str,
    class_id: Option<&str>,
) -> Vec<&'a Student> {
    let q = query.trim().to_lowercase();
    students
        .iter()
        .filter(|s| {
            q.is_empty()
                || [&s.name, &s.email, &s.grade, &s.id]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&q))
        })
        .filter(|s| class_id.is_none_or(|c| s.class_id.as_deref() == Some(c)))
        .collect()
}

/// Attendance log filtered by optional class and exact date.
pub fn filter_attendance<'a>(
    records: &'a [AttendanceRecord],
    class_id: Option<&str>,
    date: Option<&str>,
) -> Vec<&'a AttendanceRecord> {
    records
        .iter()
        .filter(|r| class_id.is_none_or(|c| r.class_id == c))
        .filter(|r| date.is_none_or(|d| r.date == d))
        .collect()
}

fn percent(part: usize, whole: usize) -> u32 {
    (100.0 * part as f64 / whole as f64).round() as u32
}
