pub mod camera;
pub mod error;
pub mod location;
pub mod session;
pub mod sim;
