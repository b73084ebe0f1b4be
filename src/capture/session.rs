use std::time::Duration;

use chrono::Local;
use tracing::info;

use super::camera::{CameraDevice, CameraFlow, StreamConstraints};
use super::error::CameraError;
use super::location::{LocationFlow, LocationProvider, LocationRequest};
use crate::builder::Submission;
use crate::config::Config;
use crate::model::{AttendanceType, PhotoData};
use crate::policy;

/// One open capture modal: the camera and geolocation sub-flows plus the
/// lateness banner evaluated at open. The two device requests run without
/// waiting on each other, and a failure in one never blocks the other.
pub struct CaptureSession<'a> {
    camera_device: &'a dyn CameraDevice,
    camera: CameraFlow,
    location: LocationFlow,
    kind: AttendanceType,
    late: bool,
    photo: Option<PhotoData>,
}

impl<'a> CaptureSession<'a> {
    pub async fn open(
        camera_device: &'a dyn CameraDevice,
        location_provider: &dyn LocationProvider,
        kind: AttendanceType,
        config: &Config,
    ) -> CaptureSession<'a> {
        let mut session = CaptureSession {
            camera_device,
            camera: CameraFlow::new(Duration::from_millis(config.stream_ready_timeout_ms)),
            location: LocationFlow::new(),
            kind,
            late: policy::is_late(kind, Local::now().time()),
            photo: None,
        };
        info!(kind = %kind, late = session.late, "capture session opened");

        let request = LocationRequest {
            timeout: Duration::from_millis(config.location_timeout_ms),
            ..LocationRequest::default()
        };
        // per-flow errors are kept on the flows for the banner; neither
        // result aborts the session
        let (_, _) = futures::join!(
            session
                .camera
                .start(camera_device, StreamConstraints::default()),
            session.location.acquire(location_provider, request),
        );

        session
    }

    pub fn kind(&self) -> AttendanceType {
        self.kind
    }

    /// Whether the open moment was already past the arrival cutoff. Shown as
    /// a warning before submission; the record's own flag is evaluated again
    /// at build time.
    pub fn is_late_arrival(&self) -> bool {
        self.late
    }

    pub fn camera(&self) -> &CameraFlow {
        &self.camera
    }

    pub fn location(&self) -> &LocationFlow {
        &self.location
    }

    pub fn photo(&self) -> Option<&PhotoData> {
        self.photo.as_ref()
    }

    /// Capture from the live stream. The camera is released by a successful
    /// capture; `retake` starts a fresh stream.
    pub fn capture_photo(&mut self) -> Result<(), CameraError> {
        let photo = self.camera.capture()?;
        self.photo = Some(photo);
        Ok(())
    }

    /// Discard the captured photo and request a new stream.
    pub async fn retake(&mut self) -> Result<(), CameraError> {
        self.photo = None;
        self.camera
            .start(self.camera_device, StreamConstraints::default())
            .await
    }

    /// Retry entry point behind the error banner ("Coba Muat Ulang").
    pub async fn retry_camera(&mut self) -> Result<(), CameraError> {
        self.camera
            .start(self.camera_device, StreamConstraints::default())
            .await
    }

    /// Assemble what this session collected; validation proper stays with the
    /// record builder.
    pub fn submission(&self, note: Option<String>) -> Submission {
        Submission {
            note,
            location: self.location.fix(),
            photo: self.photo.clone(),
        }
    }

    /// Release the camera. Every exit path funnels here; a second close is a
    /// no-op, and an in-flight location request is simply ignored.
    pub fn close(&mut self) {
        self.camera.release();
    }
}

impl Drop for CaptureSession<'_> {
    fn drop(&mut self) {
        self.close();
    }
}
