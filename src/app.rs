use chrono::{DateTime, Local};
use derive_more::{Display, Error};
use tracing::info;

use crate::builder::{self, Submission, ValidationError};
use crate::config::Config;
use crate::model::{AttendanceType, MOCK_USER, User};
use crate::stats::{self, MonthlySummary};
use crate::store::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    #[display(fmt = "Nama pengguna tidak boleh kosong.")]
    EmptyUsername,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SubmitError {
    #[display(fmt = "{}", _0)]
    Validation(ValidationError),
    #[display(fmt = "Belum masuk.")]
    NotLoggedIn,
}

impl From<ValidationError> for SubmitError {
    fn from(err: ValidationError) -> Self {
        SubmitError::Validation(err)
    }
}

/// Explicit application state threaded through the UI layer: current user and
/// the session history, instead of component-level globals.
pub struct AppState {
    pub config: Config,
    user: Option<User>,
    store: RecordStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            user: None,
            store: RecordStore::new(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Any non-empty name signs in the demo profile and seeds the history.
    pub fn login(&mut self, username: &str) -> Result<&User, SessionError> {
        if username.trim().is_empty() {
            return Err(SessionError::EmptyUsername);
        }
        let user = MOCK_USER.clone();
        info!(username, name = %user.name, "user logged in");
        self.store = RecordStore::seeded(&user);
        Ok(&*self.user.insert(user))
    }

    /// Clears the session. The history does not survive logout.
    pub fn logout(&mut self) {
        info!("user logged out");
        self.user = None;
        self.store = RecordStore::new();
    }

    /// Validate and record one attendance event at the capture moment `at`.
    /// Returns the new record's id; a rejected submission leaves the store
    /// untouched.
    pub fn submit_at(
        &mut self,
        kind: AttendanceType,
        submission: Submission,
        at: DateTime<Local>,
    ) -> Result<String, SubmitError> {
        let user = self.user.as_ref().ok_or(SubmitError::NotLoggedIn)?;
        let record = builder::build_record(user, kind, submission, at)?;
        info!(id = %record.id, kind = %record.kind, "attendance recorded");
        let id = record.id.clone();
        self.store.insert(record);
        Ok(id)
    }

    pub fn submit(
        &mut self,
        kind: AttendanceType,
        submission: Submission,
    ) -> Result<String, SubmitError> {
        self.submit_at(kind, submission, Local::now())
    }

    /// Rekap for the current month, recomputed on every call.
    pub fn monthly_summary(&self) -> MonthlySummary {
        stats::monthly_summary(&self.store, Local::now(), self.config.total_work_days)
    }
}
