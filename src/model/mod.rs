pub mod photo;
pub mod record;
pub mod user;

pub use photo::{Frame, PhotoData};
pub use record::{AttendanceLocation, AttendanceRecord, AttendanceType};
pub use user::{MOCK_USER, User};
