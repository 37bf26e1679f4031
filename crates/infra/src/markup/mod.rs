//! Markup analysis adapters

pub mod counter;

pub use counter::ScraperTagCounter;
