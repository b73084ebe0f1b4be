use absensi::app::AppState;
use absensi::builder::Submission;
use absensi::capture::session::CaptureSession;
use absensi::capture::sim::{SimulatedCamera, SimulatedLocator};
use absensi::config::Config;
use absensi::model::{AttendanceType, PhotoData};
use anyhow::Result;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_appender::rolling;

/// Demo driver: runs the whole capture-and-record workflow once against the
/// simulated devices and prints the history plus the monthly rekap.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("E-Absensi demo starting...");

    let mut app = AppState::new(config);
    let user = app.login("guru_hebat")?.clone();
    println!("Masuk sebagai {} ({}) - {}", user.name, user.nip, user.jabatan);

    // Arrival: camera + GPS capture
    let camera = SimulatedCamera::new(1280, 720);
    let locator = SimulatedLocator::new();
    let mut session =
        CaptureSession::open(&camera, &locator, AttendanceType::Arrival, &app.config).await;

    if session.is_late_arrival() {
        println!("Pemberitahuan: waktu sudah melewati 07:31, absen tercatat terlambat.");
    }
    if let Some(err) = session.camera().error() {
        println!("Kamera: {err}");
    }
    if let Some(err) = session.location().error() {
        println!("GPS: {err}");
    }

    if let Err(e) = session.capture_photo() {
        warn!(error = %e, "photo capture failed");
    }
    let submission = session.submission(None);
    let kind = session.kind();
    session.close();

    match app.submit(kind, submission) {
        Ok(id) => println!("Presensi {kind} tercatat ({id})"),
        Err(e) => println!("Presensi {kind} ditolak: {e}"),
    }

    // Leave request: note plus an attached document from the "gallery"
    let attachment = PhotoData::from_file_bytes(b"%PDF-1.4 surat keterangan izin");
    let id = app.submit(AttendanceType::Leave, Submission {
        note: Some("Urusan Keluarga".to_string()),
        photo: Some(attachment),
        ..Default::default()
    })?;
    println!("Laporan IJIN tercatat ({id})");

    println!("\nRiwayat:");
    for record in app.store().all() {
        println!(
            "- [{}] {:6} {} ({})",
            record.timestamp.format("%d/%m/%Y %H:%M"),
            record.kind.to_string(),
            record.user_name,
            record.note.as_deref().unwrap_or("-"),
        );
    }

    let rekap = app.monthly_summary();
    println!(
        "\nRekapitulasi {} {}: hadir={} izin={} sakit={} alpa={} (kehadiran {}%)",
        rekap.month_name(),
        rekap.year,
        rekap.hadir,
        rekap.izin,
        rekap.sakit,
        rekap.alpa,
        rekap.attendance_rate,
    );
    println!("{}", serde_json::to_string_pretty(&rekap)?);

    Ok(())
}
