use derive_more::{Display, Error};

/// Camera acquisition failures, worded as the on-screen messages. All of
/// these are recoverable: the error banner offers a camera retry.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CameraError {
    #[display(fmt = "Akses kamera ditolak. Harap izinkan kamera di pengaturan browser.")]
    PermissionDenied,
    #[display(fmt = "Gagal mengakses kamera: {}", _0)]
    Device(#[error(not(source))] String),
    #[display(fmt = "Gagal memutar pratinjau kamera.")]
    PlaybackFailed,
    #[display(fmt = "Pratinjau kamera tidak kunjung siap.")]
    StreamTimeout,
    #[display(fmt = "Kamera belum siap.")]
    NotReady,
}

/// Geolocation failures: the platform error codes 1/2/3 plus the
/// no-geolocation branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum LocationError {
    #[display(fmt = "Izin lokasi ditolak.")]
    PermissionDenied,
    #[display(fmt = "Sinyal GPS lemah.")]
    Unavailable,
    #[display(fmt = "Waktu permintaan habis.")]
    Timeout,
    #[display(fmt = "Geolokasi tidak didukung.")]
    Unsupported,
}
