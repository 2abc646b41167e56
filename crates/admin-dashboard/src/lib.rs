//! Client-side workflows for the employee and vendor admin dashboard.
//!
//! Each screen owns its view state and talks to the REST backend through the
//! repository traits in [`workflows`]; [`backend::HttpBackend`] is the
//! production implementation and [`dashboard::Dashboard`] wires both screens
//! to it.

pub mod backend;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod telemetry;
pub mod workflows;
