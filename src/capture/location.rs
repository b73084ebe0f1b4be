use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use super::error::LocationError;
use crate::model::AttendanceLocation;

/// One-shot position request (getCurrentPosition semantics): high accuracy,
/// bounded wait, no cached fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRequest {
    pub high_accuracy: bool,
    pub timeout: Duration,
    pub maximum_age: Duration,
}

impl Default for LocationRequest {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_millis(15_000),
            maximum_age: Duration::ZERO,
        }
    }
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(
        &self,
        request: LocationRequest,
    ) -> Result<AttendanceLocation, LocationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationPhase {
    Idle,
    Locating,
    Acquired,
    Failed,
}

/// Geolocation state machine: `Idle -> Locating -> Acquired | Failed`.
/// Runs once per capture session; there is no automatic retry.
#[derive(Debug)]
pub struct LocationFlow {
    phase: LocationPhase,
    fix: Option<AttendanceLocation>,
    error: Option<LocationError>,
}

impl Default for LocationFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationFlow {
    pub fn new() -> Self {
        Self {
            phase: LocationPhase::Idle,
            fix: None,
            error: None,
        }
    }

    pub fn phase(&self) -> LocationPhase {
        self.phase
    }

    pub fn fix(&self) -> Option<AttendanceLocation> {
        self.fix
    }

    pub fn error(&self) -> Option<LocationError> {
        self.error
    }

    /// The flow owns the deadline, so a provider that hangs still resolves
    /// as a timeout.
    pub async fn acquire(
        &mut self,
        provider: &dyn LocationProvider,
        request: LocationRequest,
    ) -> Result<AttendanceLocation, LocationError> {
        self.phase = LocationPhase::Locating;
        self.error = None;

        let result = match tokio::time::timeout(request.timeout, provider.current_position(request))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(LocationError::Timeout),
        };

        match result {
            Ok(fix) => {
                info!(
                    latitude = fix.latitude,
                    longitude = fix.longitude,
                    "location acquired"
                );
                self.fix = Some(fix);
                self.phase = LocationPhase::Acquired;
                Ok(fix)
            }
            Err(e) => {
                warn!(error = %e, "location acquisition failed");
                self.phase = LocationPhase::Failed;
                self.error = Some(e);
                Err(e)
            }
        }
    }
}
