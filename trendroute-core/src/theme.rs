//! Broad interest categories recognised in free-text intents.
//!
//! # Examples
//! ```
//! use trendroute_core::Theme;
//!
//! assert_eq!(Theme::History.as_str(), "history");
//! assert_eq!(Theme::Food.to_string(), "food");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interest category with a fixed keyword vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
    /// Museums, palaces and historic sites.
    History,
    /// Parks, forests and the seaside.
    Nature,
    /// Restaurants, cafes and local cuisine.
    Food,
    /// Bazaars, markets and souvenirs.
    Shopping,
}

impl Theme {
    /// Every theme in detection order.
    pub const ALL: [Self; 4] = [Self::History, Self::Nature, Self::Food, Self::Shopping];

    /// Return the theme as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::History => "history",
            Self::Nature => "nature",
            Self::Food => "food",
            Self::Shopping => "shopping",
        }
    }

    /// Lowercase keywords that signal this theme.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::History => &["history", "museum", "palace", "mosque"],
            Self::Nature => &["nature", "park", "forest", "sea"],
            Self::Food => &["food", "restaurant", "cafe", "taste"],
            Self::Shopping => &["shopping", "bazaar", "market", "souvenir"],
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "history" => Ok(Self::History),
            "nature" => Ok(Self::Nature),
            "food" => Ok(Self::Food),
            "shopping" => Ok(Self::Shopping),
            _ => Err(format!("unknown theme '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn display_matches_as_str() {
        for theme in Theme::ALL {
            assert_eq!(theme.to_string(), theme.as_str());
            assert_eq!(Theme::from_str(theme.as_str()), Ok(theme));
        }
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = Theme::from_str("astronomy").expect_err("unknown theme");
        assert!(err.contains("unknown theme"));
    }

    #[rstest]
    fn every_theme_lists_its_own_name() {
        for theme in Theme::ALL {
            assert!(theme.keywords().contains(&theme.as_str()));
        }
    }
}
