use chrono::{DateTime, Local};
use derive_more::{Display, Error};
use uuid::Uuid;

use crate::model::{AttendanceLocation, AttendanceRecord, AttendanceType, PhotoData, User};
use crate::policy;

/// Raw submission coming out of a capture session or the leave/sick form,
/// before validation.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub note: Option<String>,
    pub location: Option<AttendanceLocation>,
    pub photo: Option<PhotoData>,
}

/// Inline form errors, worded as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ValidationError {
    #[display(fmt = "Harap ambil foto verifikasi wajah.")]
    MissingPhoto,
    #[display(fmt = "Harap tunggu lokasi GPS.")]
    MissingLocation,
    #[display(fmt = "Mohon isi keterangan.")]
    MissingNote,
}

/// Validates a submission against the per-type field rules and assembles the
/// immutable record. `at` is the capture moment, not the submission moment.
///
/// Arrival/departure need photo + location; leave/sick need a non-empty note
/// and never carry a location. A late arrival gets the fixed system note,
/// replacing whatever the user typed (see DESIGN.md).
pub fn build_record(
    user: &User,
    kind: AttendanceType,
    submission: Submission,
    at: DateTime<Local>,
) -> Result<AttendanceRecord, ValidationError> {
    let Submission { note, location, photo } = submission;
    let note = note
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    let location = if kind.requires_capture() {
        if photo.is_none() {
            return Err(ValidationError::MissingPhoto);
        }
        if location.is_none() {
            return Err(ValidationError::MissingLocation);
        }
        location
    } else {
        if note.is_none() {
            return Err(ValidationError::MissingNote);
        }
        None
    };

    let note = if policy::is_late(kind, at.time()) {
        Some(policy::SYSTEM_LATE_NOTE.to_string())
    } else {
        note
    };

    Ok(AttendanceRecord {
        id: Uuid::new_v4().to_string(),
        user_id: user.id.clone(),
        user_name: user.name.clone(),
        user_nip: user.nip.clone(),
        kind,
        timestamp: at,
        note,
        location,
        photo_data: photo,
    })
}
