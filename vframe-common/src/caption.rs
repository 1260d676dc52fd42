//! Text formatting for caption overlays

use chrono::{DateTime, Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Shown in place of a date that does not parse
pub const INVALID_DATE: &str = "Invalid Date";

/// Format an ISO date (`2025-01-15`) or RFC 3339 timestamp as `Jan 15 2025`.
///
/// Empty input gives `""`; anything else that does not parse gives
/// [`INVALID_DATE`].
pub fn format_date(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return String::new();
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|dt| dt.date_naive()));

    match date {
        Some(d) => format!("{} {} {}", MONTHS[d.month0() as usize], d.day(), d.year()),
        None => INVALID_DATE.to_string(),
    }
}

/// Split `a, b,c` into `["#a", "#b", "#c"]`. Blank entries are dropped.
pub fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("#{t}"))
        .collect()
}

pub const OUTRO_TITLE: &str = "Thanks for watching";
pub const OUTRO_EXTRA: &str = "👋";

/// Resolved text of an episode caption card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpisodeCard {
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    pub extra: String,
}

impl EpisodeCard {
    /// Build the card text. With `outro` set, the fixed closing card is
    /// returned and every other input is ignored.
    pub fn resolve(title: &str, date: &str, tags: &str, extra: &str, outro: bool) -> Self {
        if outro {
            return Self {
                title: OUTRO_TITLE.to_string(),
                date: String::new(),
                tags: Vec::new(),
                extra: OUTRO_EXTRA.to_string(),
            };
        }

        Self {
            title: title.to_string(),
            date: format_date(date),
            tags: split_tags(tags),
            extra: extra.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_date("2025-01-15"), "Jan 15 2025");
        assert_eq!(format_date("2024-12-01"), "Dec 1 2024");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_date("2025-03-09T18:30:00Z"), "Mar 9 2025");
    }

    #[test]
    fn test_format_empty_and_invalid() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("   "), "");
        assert_eq!(format_date("yesterday"), INVALID_DATE);
        assert_eq!(format_date("2025-02-30"), INVALID_DATE);
    }

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags("a,b"), vec!["#a", "#b"]);
        assert_eq!(split_tags(" rust , , video "), vec!["#rust", "#video"]);
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn test_resolve_regular_card() {
        let card = EpisodeCard::resolve("T", "2025-01-15", "a,b", "E", false);
        assert_eq!(card.title, "T");
        assert_eq!(card.date, "Jan 15 2025");
        assert_eq!(card.tags, vec!["#a", "#b"]);
        assert_eq!(card.extra, "E");
    }

    #[test]
    fn test_outro_ignores_inputs() {
        let card = EpisodeCard::resolve("X", "2025-01-15", "q", "Y", true);
        assert_eq!(card.title, OUTRO_TITLE);
        assert_eq!(card.date, "");
        assert!(card.tags.is_empty());
        assert_eq!(card.extra, OUTRO_EXTRA);
    }
}
