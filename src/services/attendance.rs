use crate::cli::AttendanceStatus;
use crate::domain::models::{AttendanceRecord, AttendanceSummary, State};

/// Register dates are calendar days. Without an explicit date, the local
/// calendar day of `now_ms` is used, so a replayed `--now` files under the
/// day it names.
pub fn resolve_date(date: Option<&str>, now_ms: i64) -> anyhow::Result<String> {
    match date {
        None => {
            let at = chrono::DateTime::from_timestamp_millis(now_ms)
                .ok_or_else(|| anyhow::anyhow!("timestamp {} is out of range", now_ms))?;
            Ok(at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d")
                .to_string())
        }
        Some(d) => {
            let parsed = chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d")
                .map_err(|e| anyhow::anyhow!("invalid date {:?}: {}", d, e))?;
            Ok(parsed.format("%Y-%m-%d").to_string())
        }
    }
}

/// Inserts a record, replacing any existing one for the same student, date
/// and subject. Returns `true` when an existing record was replaced.
pub fn mark_attendance(state: &mut State, record: AttendanceRecord) -> bool {
    if let Some(existing) = state.records.iter_mut().find(|r| {
        r.student_id == record.student_id && r.date == record.date && r.subject == record.subject
    }) {
        *existing = record;
        true
    } else {
        state.records.push(record);
        false
    }
}

pub fn list_records<'a>(state: &'a State, student: Option<&str>) -> Vec<&'a AttendanceRecord> {
    let mut out: Vec<&AttendanceRecord> = state
        .records
        .iter()
        .filter(|r| student.map(|s| s == r.student_id).unwrap_or(true))
        .collect();
    out.sort_by(|a, b| {
        (&a.date, &a.student_id, &a.subject).cmp(&(&b.date, &b.student_id, &b.subject))
    });
    out
}

pub fn summarize(state: &State, student: &str) -> AttendanceSummary {
    let mut present = 0usize;
    let mut absent = 0usize;
    let mut late = 0usize;
    for r in state.records.iter().filter(|r| r.student_id == student) {
        match r.status {
            AttendanceStatus::Present => present += 1,
            AttendanceStatus::Absent => absent += 1,
            AttendanceStatus::Late => late += 1,
        }
    }
    let total = present + absent + late;
    let attendance_percentage = if total > 0 {
        present as f64 / total as f64 * 100.0
    } else {
        100.0
    };
    AttendanceSummary {
        student_id: student.to_string(),
        total,
        present,
        absent,
        late,
        attendance_percentage,
    }
}
