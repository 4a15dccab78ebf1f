use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Weekday covered by the class schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// Returned when a day label is not one of the five schedule weekdays.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Unrecognized weekday {0:?}")]
pub struct ParseDayError(pub String);

impl Day {
    /// All schedule days in calendar order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Full English name, matching the dataset `Day` column.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    /// Three-letter abbreviation.
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = ParseDayError;

    /// Exact match on the full name or the three-letter abbreviation. Case and
    /// surrounding whitespace are significant, like the `Time Slot` column.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|day| raw == day.name() || raw == day.short_name())
            .ok_or_else(|| ParseDayError(raw.to_string()))
    }
}

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_full_and_short_names() {
        assert_eq!("Monday".parse::<Day>(), Ok(Day::Monday));
        assert_eq!("Thu".parse::<Day>(), Ok(Day::Thursday));
    }

    #[test]
    fn off_format_labels_are_rejected() {
        for raw in ["monday", " thu ", "FRIDAY", " Mon ", "Monday "] {
            assert_eq!(raw.parse::<Day>(), Err(ParseDayError(raw.into())), "{raw:?}");
        }
    }

    #[test]
    fn rejects_weekend_days() {
        let err = "Saturday".parse::<Day>().unwrap_err();
        assert_eq!(err, ParseDayError("Saturday".into()));
    }

    #[test]
    fn serde_uses_full_names() {
        let json = serde_json::to_string(&Day::Wednesday).unwrap();
        assert_eq!(json, "\"Wednesday\"");
        let day: Day = serde_json::from_str("\"Tue\"").unwrap();
        assert_eq!(day, Day::Tuesday);
    }
}
