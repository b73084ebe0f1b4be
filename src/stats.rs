use chrono::{DateTime, Datelike, Local};
use serde::Serialize;

use crate::model::AttendanceType;
use crate::store::RecordStore;

pub const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Rekapitulasi for one calendar month. Departures are not counted; `alpa`
/// is whatever is left of the configured work days, and the rates are not
/// clamped at 100 if the work-day constant is miscalibrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    pub month: u32,
    pub year: i32,
    pub hadir: u32,
    pub izin: u32,
    pub sakit: u32,
    pub alpa: u32,
    pub attendance_rate: u32,
    pub sick_rate: u32,
    pub leave_rate: u32,
    pub total_work_days: u32,
}

impl MonthlySummary {
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    pub fn active_total(&self) -> u32 {
        self.hadir + self.izin + self.sakit
    }
}

fn ratio(count: u32, total_work_days: u32) -> u32 {
    if total_work_days == 0 {
        return 0;
    }
    ((count as f64 / total_work_days as f64) * 100.0).round() as u32
}

/// Recomputed from the full store on every call; nothing is cached.
pub fn monthly_summary(
    store: &RecordStore,
    now: DateTime<Local>,
    total_work_days: u32,
) -> MonthlySummary {
    let (mut hadir, mut izin, mut sakit) = (0u32, 0u32, 0u32);
    for record in store.all() {
        if record.timestamp.month() != now.month() || record.timestamp.year() != now.year() {
            continue;
        }
        match record.kind {
            AttendanceType::Arrival => hadir += 1,
            AttendanceType::Leave => izin += 1,
            AttendanceType::Sick => sakit += 1,
            AttendanceType::Departure => {}
        }
    }

    let active = hadir + izin + sakit;
    MonthlySummary {
        month: now.month(),
        year: now.year(),
        hadir,
        izin,
        sakit,
        alpa: total_work_days.saturating_sub(active),
        attendance_rate: ratio(active, total_work_days),
        sick_rate: ratio(sakit, total_work_days),
        leave_rate: ratio(izin, total_work_days),
        total_work_days,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use uuid::Uuid;

    use super::*;
    use crate::model::AttendanceRecord;

    fn record(kind: AttendanceType, timestamp: DateTime<Local>) -> AttendanceRecord {
        AttendanceRecord {
            id: Uuid::new_v4().to_string(),
            user_id: "1".to_string(),
            user_name: "Budi Santoso, S.Pd.".to_string(),
            user_nip: "19850101 201012 1 001".to_string(),
            kind,
            timestamp,
            note: None,
            location: None,
            photo_data: None,
        }
    }

    #[test]
    fn fixture_counts_and_rates() {
        let now = Local::now();
        let mut store = RecordStore::new();
        for _ in 0..5 {
            store.insert(record(AttendanceType::Arrival, now));
        }
        for _ in 0..2 {
            store.insert(record(AttendanceType::Leave, now));
        }
        store.insert(record(AttendanceType::Sick, now));

        let rekap = monthly_summary(&store, now, 22);
        assert_eq!(rekap.hadir, 5);
        assert_eq!(rekap.izin, 2);
        assert_eq!(rekap.sakit, 1);
        assert_eq!(rekap.alpa, 14);
        assert_eq!(rekap.attendance_rate, 36);
        assert_eq!(rekap.sick_rate, 5);
        assert_eq!(rekap.leave_rate, 9);
        assert_eq!(rekap.active_total(), 8);
    }

    #[test]
    fn other_months_and_departures_are_excluded() {
        let now = Local::now();
        let mut store = RecordStore::new();
        store.insert(record(AttendanceType::Arrival, now));
        store.insert(record(AttendanceType::Departure, now));
        store.insert(record(AttendanceType::Arrival, now - Duration::days(45)));

        let rekap = monthly_summary(&store, now, 22);
        assert_eq!(rekap.hadir, 1);
        assert_eq!(rekap.alpa, 21);
    }

    #[test]
    fn rate_is_not_clamped_at_100() {
        let now = Local::now();
        let mut store = RecordStore::new();
        for _ in 0..6 {
            store.insert(record(AttendanceType::Arrival, now));
        }
        let rekap = monthly_summary(&store, now, 4);
        assert_eq!(rekap.attendance_rate, 150);
        assert_eq!(rekap.alpa, 0);
    }

    #[test]
    fn month_names_line_up() {
        let rekap = monthly_summary(&RecordStore::new(), Local::now(), 22);
        assert_eq!(rekap.month_name(), MONTH_NAMES[(rekap.month - 1) as usize]);
    }
}
