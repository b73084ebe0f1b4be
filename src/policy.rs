use chrono::{NaiveTime, Timelike};

use crate::model::AttendanceType;

/// Fixed note written onto late arrivals instead of the user's own note.
pub const SYSTEM_LATE_NOTE: &str = "Sistem: Terlambat (>07:31)";

/// Whether an event at `at` counts as late. Only arrivals can be late; the
/// cutoff is 07:31:00 inclusive, so 07:31:01 is already late. Evaluated once
/// at record-build time and never again.
pub fn is_late(kind: AttendanceType, at: NaiveTime) -> bool {
    if kind != AttendanceType::Arrival {
        return false;
    }
    let (h, m, s) = (at.hour(), at.minute(), at.second());
    h > 7 || (h == 7 && (m > 31 || (m == 31 && s > 0)))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use strum::IntoEnumIterator;

    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn cutoff_boundary() {
        assert!(!is_late(AttendanceType::Arrival, at(7, 30, 59)));
        assert!(!is_late(AttendanceType::Arrival, at(7, 31, 0)));
        assert!(is_late(AttendanceType::Arrival, at(7, 31, 1)));
        assert!(is_late(AttendanceType::Arrival, at(7, 32, 0)));
        assert!(is_late(AttendanceType::Arrival, at(8, 0, 0)));
        assert!(!is_late(AttendanceType::Arrival, at(6, 59, 59)));
    }

    #[test]
    fn only_arrivals_are_ever_late() {
        for kind in AttendanceType::iter().filter(|k| *k != AttendanceType::Arrival) {
            assert!(!is_late(kind, at(12, 0, 0)), "{kind} must never be late");
        }
    }
}
