//! URL normalization for analysis requests

use a11ylens_domain::{A11yError, Result};
use url::Url;

/// Normalize user input into an absolute URL.
///
/// The input is parsed as given first; if that fails, it is retried with an
/// `https://` prefix so bare hosts like `example.com/page` are accepted.
///
/// # Errors
/// Returns `A11yError::InvalidInput` when the input is blank or neither form
/// parses.
pub fn normalize_url(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(A11yError::InvalidInput("URL is required".to_string()));
    }

    Url::parse(trimmed)
        .or_else(|_| Url::parse(&format!("https://{trimmed}")))
        .map_err(|_| A11yError::InvalidInput("invalid URL".to_string()))
}
