//! Element counting over parsed HTML

use a11ylens_core::TagCounter;
use a11ylens_domain::constants::TRACKED_TAGS;
use a11ylens_domain::{A11yError, Result, TagCounts};
use scraper::{Html, Selector};

/// `TagCounter` backed by the `scraper` HTML parser
///
/// The parser is error-tolerant, so malformed markup still yields counts for
/// whatever elements it recovers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScraperTagCounter;

impl ScraperTagCounter {
    pub fn new() -> Self {
        Self
    }
}

fn count_matches(document: &Html, tag: &str) -> Result<u32> {
    let selector = Selector::parse(tag)
        .map_err(|e| A11yError::Internal(format!("invalid selector '{tag}': {e}")))?;
    Ok(u32::try_from(document.select(&selector).count()).unwrap_or(u32::MAX))
}

impl TagCounter for ScraperTagCounter {
    fn count(&self, markup: &str) -> Result<TagCounts> {
        let document = Html::parse_document(markup);

        let mut found = [0u32; 6];
        for (slot, tag) in found.iter_mut().zip(TRACKED_TAGS) {
            *slot = count_matches(&document, tag)?;
        }
        let [a, button, select, input, img, video] = found;

        Ok(TagCounts { a, button, select, input, img, video })
    }
}
