//! Data types for showfinder
//!
//! These structures mirror the JSON returned by the TVMaze API. Only the fields
//! the renderer needs are modelled; everything else in the payload is ignored.
//! Fields the API may send as `null` or omit decode to their defaults.

use serde::{Deserialize, Serialize};

/// Poster image URLs for a show
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShowImage {
    /// Medium resolution poster
    #[serde(default)]
    pub medium: Option<String>,
    /// Full resolution poster
    #[serde(default)]
    pub original: Option<String>,
}

/// Identifiers of the show on other directories
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Externals {
    #[serde(default)]
    pub tvrage: Option<u64>,
    #[serde(default)]
    pub thetvdb: Option<u64>,
    #[serde(default)]
    pub imdb: Option<String>,
}

/// A TV series as returned by `shows/<id>` and inside search hits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowSummary {
    /// Unique TVMaze identifier
    pub id: u64,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub image: Option<ShowImage>,
    /// HTML fragment describing the show
    #[serde(default)]
    pub summary: Option<String>,
    /// Premiere date (YYYY-MM-DD)
    #[serde(default)]
    pub premiered: Option<String>,
    /// Running, Ended, To Be Determined, ...
    #[serde(default)]
    pub status: Option<String>,
    /// Scripted, Animation, Reality, ...
    #[serde(default, rename = "type")]
    pub show_type: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Episode length in minutes
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub official_site: Option<String>,
    #[serde(default)]
    pub externals: Externals,
}

impl ShowSummary {
    /// Medium poster URL, if the show has an image
    pub fn medium_image(&self) -> Option<&str> {
        self.image.as_ref()?.medium.as_deref()
    }
}

/// One entry of the `search/shows` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Relevance score assigned by the API
    #[serde(default)]
    pub score: f64,
    pub show: ShowSummary,
}

/// A single episode from `shows/<id>/episodes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u64,
    /// Episode title
    pub name: String,
    /// Season number (1-based)
    pub season: u32,
    /// Episode number within the season; specials have none
    #[serde(default)]
    pub number: Option<u32>,
}
