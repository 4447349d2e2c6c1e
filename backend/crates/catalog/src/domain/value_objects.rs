//! Domain Value Objects
//!
//! Immutable value types for the catalog domain.

use derive_more::Display;
use serde::{Serialize, Serializer};

/// Problem difficulty as stored in the catalog
///
/// Anything that is not a recognised spelling of Easy/Medium/Hard is kept
/// verbatim (after normalization) in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum Difficulty {
    #[display("Easy")]
    Easy,
    #[display("Medium")]
    Medium,
    #[display("Hard")]
    Hard,
    #[display("Unknown")]
    Unknown,
    #[display("{_0}")]
    Other(String),
}

impl Difficulty {
    /// Normalize a raw difficulty from source data
    ///
    /// Trim and uppercase, then map `EASY|E`, `MEDIUM|M`, `HARD|H`.
    /// Blank input is `Unknown`; anything else keeps its first letter
    /// upper case and the rest lower case (`"N/A"` → `"N/a"`).
    pub fn normalize(raw: &str) -> Self {
        let upper = raw.trim().to_uppercase();
        match upper.as_str() {
            "" | "UNKNOWN" => Difficulty::Unknown,
            "EASY" | "E" => Difficulty::Easy,
            "MEDIUM" | "M" => Difficulty::Medium,
            "HARD" | "H" => Difficulty::Hard,
            other => Difficulty::Other(capitalize(other)),
        }
    }

    /// Rebuild from an already-normalized stored value
    pub fn from_stored(s: &str) -> Self {
        match s {
            "Easy" => Difficulty::Easy,
            "Medium" => Difficulty::Medium,
            "Hard" => Difficulty::Hard,
            "Unknown" => Difficulty::Unknown,
            other => Difficulty::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Unknown => "Unknown",
            Difficulty::Other(s) => s,
        }
    }
}

impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Recency window a problem was reported in
///
/// The labels are part of the stored data and of the query API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RecencyWindow {
    #[display("1. Thirty Days")]
    ThirtyDays,
    #[display("2. Three Months")]
    ThreeMonths,
    #[display("3. Six Months")]
    SixMonths,
    #[display("4. More Than Six Months")]
    MoreThanSixMonths,
    #[display("5. All")]
    All,
}

impl RecencyWindow {
    pub const ALL_WINDOWS: [RecencyWindow; 5] = [
        RecencyWindow::ThirtyDays,
        RecencyWindow::ThreeMonths,
        RecencyWindow::SixMonths,
        RecencyWindow::MoreThanSixMonths,
        RecencyWindow::All,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            RecencyWindow::ThirtyDays => "1. Thirty Days",
            RecencyWindow::ThreeMonths => "2. Three Months",
            RecencyWindow::SixMonths => "3. Six Months",
            RecencyWindow::MoreThanSixMonths => "4. More Than Six Months",
            RecencyWindow::All => "5. All",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL_WINDOWS.into_iter().find(|w| w.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_known_spellings() {
        for raw in ["easy", "E", "EASY", "  Easy  ", "e"] {
            assert_eq!(Difficulty::normalize(raw), Difficulty::Easy, "{raw}");
        }
        assert_eq!(Difficulty::normalize("m"), Difficulty::Medium);
        assert_eq!(Difficulty::normalize("Medium"), Difficulty::Medium);
        assert_eq!(Difficulty::normalize("H"), Difficulty::Hard);
        assert_eq!(Difficulty::normalize("hard "), Difficulty::Hard);
    }

    #[test]
    fn test_normalize_blank_is_unknown() {
        assert_eq!(Difficulty::normalize(""), Difficulty::Unknown);
        assert_eq!(Difficulty::normalize("   "), Difficulty::Unknown);
    }

    #[test]
    fn test_normalize_other_values_are_capitalized() {
        assert_eq!(Difficulty::normalize("N/A").as_str(), "N/a");
        assert_eq!(Difficulty::normalize("very hard").as_str(), "Very hard");
        // Same stored text as a blank difficulty
        assert_eq!(Difficulty::normalize("unknown"), Difficulty::Unknown);
    }

    #[test]
    fn test_display_and_serialize_match_stored_text() {
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
        assert_eq!(Difficulty::Other("N/a".to_string()).to_string(), "N/a");
        assert_eq!(
            serde_json::to_value(Difficulty::Hard).unwrap(),
            serde_json::json!("Hard")
        );
    }

    #[test]
    fn test_from_stored_roundtrip() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Unknown] {
            assert_eq!(Difficulty::from_stored(d.as_str()), d);
        }
        assert_eq!(
            Difficulty::from_stored("N/a"),
            Difficulty::Other("N/a".to_string())
        );
    }

    #[test]
    fn test_recency_window_labels() {
        assert_eq!(RecencyWindow::ThirtyDays.to_string(), "1. Thirty Days");
        assert_eq!(
            RecencyWindow::from_label("4. More Than Six Months"),
            Some(RecencyWindow::MoreThanSixMonths)
        );
        assert_eq!(RecencyWindow::from_label("Thirty Days"), None);
        for window in RecencyWindow::ALL_WINDOWS {
            assert_eq!(window.label(), window.to_string());
        }
    }
}
