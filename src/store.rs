use std::collections::VecDeque;

use chrono::{Duration, Local};

use crate::model::{AttendanceRecord, AttendanceType, User};

/// Session-scoped record list, newest first. Insert-only: no update and no
/// delete, the whole store is dropped at logout.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: VecDeque<AttendanceRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend, so `all` yields display order without sorting.
    pub fn insert(&mut self, record: AttendanceRecord) {
        self.records.push_front(record);
    }

    /// Full history, newest first. Callers derive (filter, count) from the
    /// iterator; nothing hands out mutable access.
    pub fn all(&self) -> impl Iterator<Item = &AttendanceRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fixed demo history shown right after login, with the signed-in user's
    /// own NIP merged onto their row.
    pub fn seeded(user: &User) -> Self {
        let now = Local::now();
        let mut store = Self::new();
        store.records.push_back(AttendanceRecord {
            id: "h1".to_string(),
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            user_nip: user.nip.clone(),
            kind: AttendanceType::Arrival,
            timestamp: now - Duration::hours(4),
            note: None,
            location: None,
            photo_data: None,
        });
        store.records.push_back(AttendanceRecord {
            id: "h2".to_string(),
            user_id: "2".to_string(),
            user_name: "Siti Aminah, M.Pd.".to_string(),
            user_nip: "19800000 000000 0 000".to_string(),
            kind: AttendanceType::Arrival,
            timestamp: now - Duration::minutes(210),
            note: None,
            location: None,
            photo_data: None,
        });
        store.records.push_back(AttendanceRecord {
            id: "h3".to_string(),
            user_id: "3".to_string(),
            user_name: "Andi Pratama, S.Si.".to_string(),
            user_nip: "19810000 000000 0 000".to_string(),
            kind: AttendanceType::Leave,
            timestamp: now - Duration::hours(2),
            note: Some("Urusan Keluarga".to_string()),
            location: None,
            photo_data: None,
        });
        store
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::model::MOCK_USER;

    fn record(kind: AttendanceType) -> AttendanceRecord {
        AttendanceRecord {
            id: Uuid::new_v4().to_string(),
            user_id: "1".to_string(),
            user_name: "Budi Santoso, S.Pd.".to_string(),
            user_nip: "19850101 201012 1 001".to_string(),
            kind,
            timestamp: Local::now(),
            note: None,
            location: None,
            photo_data: None,
        }
    }

    #[test]
    fn insert_prepends_newest_first() {
        let mut store = RecordStore::new();
        let first = record(AttendanceType::Arrival);
        let second = record(AttendanceType::Departure);
        let second_id = second.id.clone();

        store.insert(first);
        store.insert(second);

        let ids: Vec<_> = store.all().map(|r| r.id.clone()).collect();
        assert_eq!(ids[0], second_id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn seeded_store_matches_demo_dataset() {
        let store = RecordStore::seeded(&MOCK_USER);
        let records: Vec<_> = store.all().collect();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].user_nip, MOCK_USER.nip);
        assert_eq!(records[1].user_name, "Siti Aminah, M.Pd.");
        assert_eq!(records[2].kind, AttendanceType::Leave);
        assert_eq!(records[2].note.as_deref(), Some("Urusan Keluarga"));
    }
}
