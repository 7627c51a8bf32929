//! Free-text intent parsing.
//!
//! [`KeywordIntentParser`] is a deterministic stand-in for a language-model
//! parser: it lowercases the text and looks for fixed keywords. A model-backed
//! parser plugs in through [`IntentParser`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BudgetLevel, Theme};

/// Cities recognised when no catalog-specific list is supplied.
pub const DEFAULT_CITIES: [&str; 4] = ["Istanbul", "Cappadocia", "Antalya", "Izmir"];

const LOW_BUDGET_WORDS: &[&str] = &["cheap", "budget", "economical", "low cost"];
const HIGH_BUDGET_WORDS: &[&str] = &["expensive", "luxury", "premium", "high-end"];
const DAY_TRIP_WORDS: &[&str] = &["day trip", "one day", "1 day", "short"];
const WEEKEND_WORDS: &[&str] = &["weekend", "two days", "2 days"];
const HOLIDAY_WORDS: &[&str] = &["holiday", "vacation", "one week", "1 week"];

/// Kind of outing the caller described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TripIntent {
    /// No single dominant theme.
    #[default]
    GeneralTrip,
    /// Focused on history.
    HistoryTour,
    /// Focused on nature.
    NatureTour,
    /// Focused on food.
    FoodTour,
    /// Focused on shopping.
    ShoppingTour,
}

impl From<Theme> for TripIntent {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::History => Self::HistoryTour,
            Theme::Nature => Self::NatureTour,
            Theme::Food => Self::FoodTour,
            Theme::Shopping => Self::ShoppingTour,
        }
    }
}

/// Preferred trip length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TripLength {
    /// A single day out.
    #[default]
    DayTrip,
    /// Two days.
    Weekend,
    /// A longer holiday.
    Holiday,
}

/// Structured reading of a free-text request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedIntent {
    /// Dominant purpose.
    pub intent: TripIntent,
    /// Spending preference.
    pub budget_level: BudgetLevel,
    /// Length preference.
    pub duration_preference: TripLength,
    /// Detected themes in detection order.
    pub interests: Vec<Theme>,
    /// First known city mentioned.
    pub location_preference: Option<String>,
}

/// Turn free text into a [`ParsedIntent`].
pub trait IntentParser: Send + Sync {
    /// Parse `text`. Unrecognised text yields the default intent.
    fn parse(&self, text: &str) -> ParsedIntent;
}

/// Keyword-matching [`IntentParser`].
///
/// # Examples
/// ```
/// use trendroute_core::{
///     BudgetLevel, IntentParser, KeywordIntentParser, Theme, TripIntent, TripLength,
/// };
///
/// let parsed = KeywordIntentParser::default()
///     .parse("A cheap weekend of museums in Istanbul");
/// assert_eq!(parsed.budget_level, BudgetLevel::Low);
/// assert_eq!(parsed.duration_preference, TripLength::Weekend);
/// assert_eq!(parsed.interests, [Theme::History]);
/// assert_eq!(parsed.intent, TripIntent::HistoryTour);
/// assert_eq!(parsed.location_preference.as_deref(), Some("Istanbul"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordIntentParser {
    cities: Vec<String>,
}

impl Default for KeywordIntentParser {
    fn default() -> Self {
        Self::with_cities(DEFAULT_CITIES)
    }
}

impl KeywordIntentParser {
    /// Recognise `cities` as location preferences, earlier entries first.
    pub fn with_cities<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cities: cities.into_iter().map(Into::into).collect(),
        }
    }

    /// Cities this parser recognises.
    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }
}

fn mentions_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

impl IntentParser for KeywordIntentParser {
    fn parse(&self, text: &str) -> ParsedIntent {
        let lowered = text.to_lowercase();

        let budget_level = if mentions_any(&lowered, LOW_BUDGET_WORDS) {
            BudgetLevel::Low
        } else if mentions_any(&lowered, HIGH_BUDGET_WORDS) {
            BudgetLevel::High
        } else {
            BudgetLevel::Medium
        };

        let duration_preference = if mentions_any(&lowered, DAY_TRIP_WORDS) {
            TripLength::DayTrip
        } else if mentions_any(&lowered, WEEKEND_WORDS) {
            TripLength::Weekend
        } else if mentions_any(&lowered, HOLIDAY_WORDS) {
            TripLength::Holiday
        } else {
            TripLength::default()
        };

        let interests: Vec<Theme> = Theme::ALL
            .into_iter()
            .filter(|theme| mentions_any(&lowered, theme.keywords()))
            .collect();

        let intent = match interests.as_slice() {
            [only] => TripIntent::from(*only),
            _ => TripIntent::GeneralTrip,
        };

        let location_preference = self
            .cities
            .iter()
            .find(|city| lowered.contains(&city.to_lowercase()))
            .cloned();

        log::debug!("parsed intent {intent:?} with {} themes", interests.len());

        ParsedIntent {
            intent,
            budget_level,
            duration_preference,
            interests,
            location_preference,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn parser() -> KeywordIntentParser {
        KeywordIntentParser::default()
    }

    #[rstest]
    fn unrecognised_text_yields_defaults(parser: KeywordIntentParser) {
        assert_eq!(parser.parse("surprise me"), ParsedIntent::default());
    }

    #[rstest]
    #[case("something cheap", BudgetLevel::Low)]
    #[case("an ECONOMICAL day", BudgetLevel::Low)]
    #[case("pure luxury", BudgetLevel::High)]
    #[case("premium and cheap", BudgetLevel::Low)]
    #[case("no preference", BudgetLevel::Medium)]
    fn detects_budget_preference(
        parser: KeywordIntentParser,
        #[case] text: &str,
        #[case] expected: BudgetLevel,
    ) {
        assert_eq!(parser.parse(text).budget_level, expected);
    }

    #[rstest]
    #[case("a day trip", TripLength::DayTrip)]
    #[case("this weekend", TripLength::Weekend)]
    #[case("two days away", TripLength::Weekend)]
    #[case("summer vacation", TripLength::Holiday)]
    #[case("one week off", TripLength::Holiday)]
    fn detects_trip_length(
        parser: KeywordIntentParser,
        #[case] text: &str,
        #[case] expected: TripLength,
    ) {
        assert_eq!(parser.parse(text).duration_preference, expected);
    }

    #[rstest]
    fn several_themes_make_a_general_trip(parser: KeywordIntentParser) {
        let parsed = parser.parse("a restaurant, a bazaar and a park");
        assert_eq!(parsed.interests, [Theme::Nature, Theme::Food, Theme::Shopping]);
        assert_eq!(parsed.intent, TripIntent::GeneralTrip);
    }

    #[rstest]
    fn custom_city_list_is_used() {
        let parser = KeywordIntentParser::with_cities(["Bodrum"]);
        assert_eq!(
            parser.parse("sunny BODRUM please").location_preference.as_deref(),
            Some("Bodrum")
        );
        assert_eq!(parser.parse("Istanbul").location_preference, None);
    }
}
