//! Tag counts and stored site analyses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    MARKUP_SOURCE_LABEL, PLACEHOLDER_A, PLACEHOLDER_BUTTON, PLACEHOLDER_IMG, PLACEHOLDER_INPUT,
    PLACEHOLDER_SELECT, PLACEHOLDER_VIDEO,
};

/* -------------------------------------------------------------------------- */
/* Tag Counts */
/* -------------------------------------------------------------------------- */

/// Number of interactive and media elements found in a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCounts {
    pub a: u32,
    pub button: u32,
    pub select: u32,
    pub input: u32,
    pub img: u32,
    pub video: u32,
}

impl TagCounts {
    /// Placeholder tokens paired with their counts, in substitution order
    pub fn placeholders(&self) -> [(&'static str, u32); 6] {
        [
            (PLACEHOLDER_A, self.a),
            (PLACEHOLDER_IMG, self.img),
            (PLACEHOLDER_BUTTON, self.button),
            (PLACEHOLDER_INPUT, self.input),
            (PLACEHOLDER_VIDEO, self.video),
            (PLACEHOLDER_SELECT, self.select),
        ]
    }

    /// Sum of all tracked elements
    pub fn total(&self) -> u64 {
        [self.a, self.button, self.select, self.input, self.img, self.video]
            .iter()
            .map(|n| u64::from(*n))
            .sum()
    }
}

/* -------------------------------------------------------------------------- */
/* Analysis Source */
/* -------------------------------------------------------------------------- */

/// Where the analysed markup came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnalysisSource {
    /// A normalized absolute URL that was fetched
    Url(String),
    /// Markup submitted directly by the caller
    Markup,
}

impl AnalysisSource {
    /// Value stored in the `url` column
    pub fn label(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Markup => MARKUP_SOURCE_LABEL,
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Site Analyses */
/* -------------------------------------------------------------------------- */

/// Row to insert into `site_analyses`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSiteAnalysis {
    pub url: String,
    pub analyzed_at: DateTime<Utc>,
    pub a_tags: u32,
    pub button_tags: u32,
    pub select_tags: u32,
    pub input_tags: u32,
    pub img_tags: u32,
    pub video_tags: u32,
}

impl NewSiteAnalysis {
    pub fn new(source: &AnalysisSource, counts: TagCounts, analyzed_at: DateTime<Utc>) -> Self {
        Self {
            url: source.label().to_string(),
            analyzed_at,
            a_tags: counts.a,
            button_tags: counts.button,
            select_tags: counts.select,
            input_tags: counts.input,
            img_tags: counts.img,
            video_tags: counts.video,
        }
    }
}

/// Stored `site_analyses` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteAnalysis {
    pub id: i64,
    pub url: String,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub analyzed_at: DateTime<Utc>,
    pub a_tags: u32,
    pub button_tags: u32,
    pub select_tags: u32,
    pub input_tags: u32,
    pub img_tags: u32,
    pub video_tags: u32,
}

impl SiteAnalysis {
    pub fn tag_counts(&self) -> TagCounts {
        TagCounts {
            a: self.a_tags,
            button: self.button_tags,
            select: self.select_tags,
            input: self.input_tags,
            img: self.img_tags,
            video: self.video_tags,
        }
    }

    /// Attach a store-assigned id to an inserted row
    pub fn from_new(id: i64, row: NewSiteAnalysis) -> Self {
        Self {
            id,
            url: row.url,
            analyzed_at: row.analyzed_at,
            a_tags: row.a_tags,
            button_tags: row.button_tags,
            select_tags: row.select_tags,
            input_tags: row.input_tags,
            img_tags: row.img_tags,
            video_tags: row.video_tags,
        }
    }
}
