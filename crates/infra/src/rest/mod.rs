//! REST store adapters

pub mod client;
pub mod unconfigured;

pub use client::RestStoreClient;
pub use unconfigured::UnconfiguredStore;
