//! Deterministic stand-ins for the platform camera and GPS, used by the demo
//! binary and the integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::time::{Duration, sleep};
use tracing::debug;

use super::camera::{CameraDevice, CameraStream, StreamConstraints};
use super::error::{CameraError, LocationError};
use super::location::{LocationProvider, LocationRequest};
use crate::model::{AttendanceLocation, Frame};

pub struct SimulatedCamera {
    frame_width: u32,
    frame_height: u32,
    startup_delay: Duration,
    stall_preview: bool,
    fail_with: Option<CameraError>,
    stops: Arc<AtomicUsize>,
}

impl SimulatedCamera {
    pub fn new(frame_width: u32, frame_height: u32) -> Self {
        Self {
            frame_width,
            frame_height,
            startup_delay: Duration::ZERO,
            stall_preview: false,
            fail_with: None,
            stops: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Device that rejects every stream request with `err`.
    pub fn failing(err: CameraError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::new(1280, 720)
        }
    }

    /// Device whose preview never becomes playable.
    pub fn stalled() -> Self {
        Self {
            stall_preview: true,
            ..Self::new(1280, 720)
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.startup_delay = delay;
        self
    }

    /// How many streams were stopped so far; lets tests assert the device is
    /// released exactly once.
    pub fn stop_count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CameraDevice for SimulatedCamera {
    async fn open(
        &self,
        constraints: StreamConstraints,
    ) -> Result<Box<dyn CameraStream>, CameraError> {
        debug!(
            ideal_width = constraints.ideal_width,
            ideal_height = constraints.ideal_height,
            front_facing = constraints.front_facing,
            "simulated camera stream requested"
        );
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        sleep(self.startup_delay).await;
        Ok(Box::new(SimulatedStream {
            frame: test_pattern(self.frame_width, self.frame_height),
            stall: self.stall_preview,
            stops: self.stops.clone(),
            stopped: false,
        }))
    }
}

struct SimulatedStream {
    frame: Frame,
    stall: bool,
    stops: Arc<AtomicUsize>,
    stopped: bool,
}

#[async_trait]
impl CameraStream for SimulatedStream {
    async fn wait_playable(&mut self) -> Result<(), CameraError> {
        if self.stall {
            futures::future::pending::<()>().await;
        }
        Ok(())
    }

    fn current_frame(&self) -> Frame {
        self.frame.clone()
    }

    fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.stops.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn test_pattern(width: u32, height: u32) -> Frame {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255]);
        }
    }
    Frame::new(width, height, pixels)
}

pub struct SimulatedLocator {
    fix: AttendanceLocation,
    delay: Duration,
    fail_with: Option<LocationError>,
}

impl Default for SimulatedLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedLocator {
    pub fn new() -> Self {
        Self::at(-6.2, 106.816666)
    }

    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            fix: AttendanceLocation { latitude, longitude },
            delay: Duration::ZERO,
            fail_with: None,
        }
    }

    pub fn failing(err: LocationError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::new()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl LocationProvider for SimulatedLocator {
    async fn current_position(
        &self,
        _request: LocationRequest,
    ) -> Result<AttendanceLocation, LocationError> {
        sleep(self.delay).await;
        if let Some(err) = self.fail_with {
            return Err(err);
        }
        Ok(self.fix)
    }
}
