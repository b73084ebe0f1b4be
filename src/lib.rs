pub mod app;
pub mod builder;
pub mod capture;
pub mod config;
pub mod model;
pub mod policy;
pub mod stats;
pub mod store;
