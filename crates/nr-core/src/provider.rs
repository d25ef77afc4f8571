//! Provider tags — the fixed set of game providers on the landing page

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NrError, NrResult};

/// A game provider
///
/// The landing page cycles between exactly these three providers. The slug
/// is what the UI layer uses in data attributes; the label is what the data
/// file carries in each game's `provider` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderTag {
    Pg,
    Jili,
    Pp,
}

impl ProviderTag {
    /// All providers, in slider order
    pub const ALL: [ProviderTag; 3] = [ProviderTag::Pg, ProviderTag::Jili, ProviderTag::Pp];

    /// Short slug used by the UI layer
    pub fn slug(self) -> &'static str {
        match self {
            ProviderTag::Pg => "pg",
            ProviderTag::Jili => "jili",
            ProviderTag::Pp => "pp",
        }
    }

    /// Display label, matching the data file's `provider` field
    pub fn label(self) -> &'static str {
        match self {
            ProviderTag::Pg => "PG Soft",
            ProviderTag::Jili => "JILI",
            ProviderTag::Pp => "PP Slot",
        }
    }

    /// Parse from a slug
    pub fn from_slug(slug: &str) -> NrResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.slug() == slug)
            .ok_or_else(|| NrError::UnknownProvider(slug.to_string()))
    }

    /// Parse from a display label
    pub fn from_label(label: &str) -> NrResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.label() == label)
            .ok_or_else(|| NrError::UnknownProvider(label.to_string()))
    }
}

impl fmt::Display for ProviderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_label_roundtrip() {
        for tag in ProviderTag::ALL {
            assert_eq!(ProviderTag::from_slug(tag.slug()).unwrap(), tag);
            assert_eq!(ProviderTag::from_label(tag.label()).unwrap(), tag);
        }
    }

    #[test]
    fn test_unknown_provider_is_error() {
        assert!(ProviderTag::from_slug("netent").is_err());
        assert!(ProviderTag::from_label("NetEnt").is_err());
    }

    #[test]
    fn test_serde_uses_slug_casing() {
        let json = serde_json::to_string(&ProviderTag::Jili).unwrap();
        assert_eq!(json, "\"jili\"");
    }
}
