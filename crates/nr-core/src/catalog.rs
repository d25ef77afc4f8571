//! Site data and the provider-grouped game catalog
//!
//! The landing page loads a single JSON document carrying presentation
//! config plus the full game list. The engine never sees the raw document;
//! it consumes a [`ProviderCatalog`] with games grouped into per-provider
//! pools. A failed or missing load degrades to an empty catalog — the
//! engine stays inert rather than crashing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::NrResult;
use crate::provider::ProviderTag;

/// A single game card's data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    /// Display name
    pub name: String,
    /// Image URL
    pub image: String,
    /// Provider display label (e.g. "JILI")
    pub provider: String,
    /// Pre-set RTP display string, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtp: Option<String>,
}

/// Theme color tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

/// Site presentation configuration
///
/// Carried through to the rendering layer untouched; the engine does not
/// interpret any of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub page_title: String,
    pub header_title: String,
    pub play_button_text: String,
    pub cta_url: String,
    #[serde(default)]
    pub cta_text: Option<String>,
    #[serde(default)]
    pub colors: Option<ColorTokens>,
}

/// Root of the site data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteData {
    #[serde(rename = "siteConfig")]
    pub site_config: SiteConfig,
    pub games: Vec<GameEntry>,
}

impl SiteData {
    /// Parse from a JSON document
    pub fn from_json(raw: &str) -> NrResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Games grouped by provider into pools
#[derive(Debug, Clone, Default)]
pub struct ProviderCatalog {
    pools: HashMap<ProviderTag, Vec<GameEntry>>,
}

impl ProviderCatalog {
    /// Empty catalog — every pool is empty, every selection is a no-op
    pub fn empty() -> Self {
        Self::default()
    }

    /// Group a game list into per-provider pools
    ///
    /// Entries with an unrecognized provider label are skipped with a
    /// warning, not treated as fatal.
    pub fn from_games(games: Vec<GameEntry>) -> Self {
        let mut pools: HashMap<ProviderTag, Vec<GameEntry>> = HashMap::new();

        for game in games {
            match ProviderTag::from_label(&game.provider) {
                Ok(tag) => pools.entry(tag).or_default().push(game),
                Err(_) => {
                    log::warn!("Skipping game '{}': unknown provider '{}'", game.name, game.provider);
                }
            }
        }

        Self { pools }
    }

    /// Build from parsed site data
    pub fn from_site_data(data: SiteData) -> Self {
        Self::from_games(data.games)
    }

    /// The pool for one provider (empty slice if none loaded)
    pub fn pool(&self, tag: ProviderTag) -> &[GameEntry] {
        self.pools.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True if no provider has any games
    pub fn is_empty(&self) -> bool {
        self.pools.values().all(Vec::is_empty)
    }

    /// Total number of games across all pools
    pub fn len(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }
}
