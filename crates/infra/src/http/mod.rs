//! HTTP client and page fetcher

pub mod client;
pub mod fetcher;

pub use client::{HttpClient, HttpClientBuilder};
pub use fetcher::HttpPageFetcher;
