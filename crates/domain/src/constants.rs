//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

use std::time::Duration;

/// Element names counted by an analysis, in response order
pub const TRACKED_TAGS: [&str; 6] = ["a", "button", "select", "input", "img", "video"];

// Quiz question placeholders
pub const PLACEHOLDER_A: &str = "{a_tags}";
pub const PLACEHOLDER_IMG: &str = "{img_tags}";
pub const PLACEHOLDER_BUTTON: &str = "{button_tags}";
pub const PLACEHOLDER_INPUT: &str = "{input_tags}";
pub const PLACEHOLDER_VIDEO: &str = "{video_tags}";
pub const PLACEHOLDER_SELECT: &str = "{select_tags}";

/// Source label stored for analyses of submitted markup
pub const MARKUP_SOURCE_LABEL: &str = "markup:inline";

// Page fetching
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const BROWSER_ACCEPT_LANGUAGE: &str = "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7";

// Store
pub const APPLICATION_NAME: &str = "accessibility-analyzer";
pub const DEFAULT_STORE_SCHEMA: &str = "public";
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(10);
pub const CONNECTION_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

// Server
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
