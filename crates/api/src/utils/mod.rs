//! Logging setup and request logging middleware

pub mod logging;
