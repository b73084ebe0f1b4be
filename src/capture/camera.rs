use async_trait::async_trait;
use tokio::time::{Duration, timeout};
use tracing::{info, warn};

use super::error::CameraError;
use crate::model::PhotoData;
use crate::model::photo::{CAPTURE_QUALITY, Frame, render_capture};

/// Stream request handed to the device (getUserMedia constraints).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConstraints {
    pub front_facing: bool,
    pub ideal_width: u32,
    pub ideal_height: u32,
    pub audio: bool,
}

impl Default for StreamConstraints {
    fn default() -> Self {
        Self {
            front_facing: true,
            ideal_width: 1280,
            ideal_height: 720,
            audio: false,
        }
    }
}

/// Live video stream handed out by a camera device.
#[async_trait]
pub trait CameraStream: Send {
    /// Resolves once the preview is playable.
    async fn wait_playable(&mut self) -> Result<(), CameraError>;

    /// Snapshot of the current frame. Only meaningful once playable.
    fn current_frame(&self) -> Frame;

    /// Stop all tracks. Must be idempotent.
    fn stop(&mut self);
}

#[async_trait]
pub trait CameraDevice: Send + Sync {
    async fn open(
        &self,
        constraints: StreamConstraints,
    ) -> Result<Box<dyn CameraStream>, CameraError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraPhase {
    Idle,
    Requesting,
    Streaming,
    Ready,
    Failed,
}

/// Camera acquisition state machine:
/// `Idle -> Requesting -> Streaming -> Ready`, or `-> Failed` on any error.
/// A capture or a release returns the flow to `Idle`.
pub struct CameraFlow {
    phase: CameraPhase,
    stream: Option<Box<dyn CameraStream>>,
    error: Option<CameraError>,
    ready_timeout: Duration,
}

impl CameraFlow {
    pub fn new(ready_timeout: Duration) -> Self {
        Self {
            phase: CameraPhase::Idle,
            stream: None,
            error: None,
            ready_timeout,
        }
    }

    pub fn phase(&self) -> CameraPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&CameraError> {
        self.error.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.phase == CameraPhase::Ready
    }

    /// Request a stream and wait for the preview to become playable. Also the
    /// retry entry point: any previous stream or failure is cleared first.
    pub async fn start(
        &mut self,
        device: &dyn CameraDevice,
        constraints: StreamConstraints,
    ) -> Result<(), CameraError> {
        self.release();
        self.error = None;
        self.phase = CameraPhase::Requesting;

        let mut stream = match device.open(constraints).await {
            Ok(stream) => stream,
            Err(e) => return Err(self.fail(e)),
        };
        self.phase = CameraPhase::Streaming;

        let playable = timeout(self.ready_timeout, stream.wait_playable()).await;
        match playable {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                stream.stop();
                return Err(self.fail(e));
            }
            Err(_) => {
                stream.stop();
                return Err(self.fail(CameraError::StreamTimeout));
            }
        }

        self.stream = Some(stream);
        self.phase = CameraPhase::Ready;
        info!("camera preview ready");
        Ok(())
    }

    /// Render the current frame into the fixed 4:5 output and encode it. A
    /// successful capture stops the stream; a retake has to start a new one.
    pub fn capture(&mut self) -> Result<PhotoData, CameraError> {
        if self.phase != CameraPhase::Ready {
            return Err(CameraError::NotReady);
        }
        let Some(stream) = self.stream.as_ref() else {
            return Err(CameraError::NotReady);
        };

        let output = render_capture(&stream.current_frame());
        let photo = PhotoData::encode(&output, CAPTURE_QUALITY);
        self.release();
        Ok(photo)
    }

    /// Stop and drop any active stream. Safe to call repeatedly; failures
    /// stay visible for the error banner.
    pub fn release(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
        }
        if self.phase != CameraPhase::Failed {
            self.phase = CameraPhase::Idle;
        }
    }

    fn fail(&mut self, err: CameraError) -> CameraError {
        warn!(error = %err, "camera acquisition failed");
        self.phase = CameraPhase::Failed;
        self.error = Some(err.clone());
        err
    }
}

impl Drop for CameraFlow {
    fn drop(&mut self) {
        self.release();
    }
}
