use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}

/// Color of the untouched globe surface.
pub const BASE_COLOR: Rgb = Rgb::from_hex(0x111122);

/// The closed set of moods a user can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mood {
    Create,
    Work,
    Commute,
    Sleep,
    Anxious,
    Active,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Create,
        Mood::Work,
        Mood::Commute,
        Mood::Sleep,
        Mood::Anxious,
        Mood::Active,
    ];

    /// Storage key, as written to the backend.
    pub const fn key(self) -> &'static str {
        match self {
            Mood::Create => "CREATE",
            Mood::Work => "WORK",
            Mood::Commute => "COMMUTE",
            Mood::Sleep => "SLEEP",
            Mood::Anxious => "ANXIOUS",
            Mood::Active => "ACTIVE",
        }
    }

    pub fn from_key(key: &str) -> Option<Mood> {
        Mood::ALL.into_iter().find(|mood| mood.key() == key)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Mood::Create => "Create",
            Mood::Work => "Work",
            Mood::Commute => "Commute",
            Mood::Sleep => "Sleep",
            Mood::Anxious => "Anxious",
            Mood::Active => "Active",
        }
    }

    pub const fn color(self) -> Rgb {
        match self {
            Mood::Create => Rgb::from_hex(0xFFD700),
            Mood::Work => Rgb::from_hex(0x4169E1),
            Mood::Commute => Rgb::from_hex(0x32CD32),
            Mood::Sleep => Rgb::from_hex(0x4B0082),
            Mood::Anxious => Rgb::from_hex(0x808080),
            Mood::Active => Rgb::from_hex(0xFF4500),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A mood reported at a place and time. Never mutated once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodEvent {
    pub geo_point: GeoPoint,
    pub mood: Mood,
    pub color: Rgb,
    /// Milliseconds since the Unix epoch, as assigned by the backend.
    pub timestamp: u64,
}

impl MoodEvent {
    pub fn new(geo_point: GeoPoint, mood: Mood, timestamp: u64) -> Self {
        Self {
            geo_point,
            mood,
            color: mood.color(),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("CREATE", Some(Mood::Create))]
    #[case("ANXIOUS", Some(Mood::Anxious))]
    #[case("anxious", None)]
    #[case("DEFAULT", None)]
    #[case("", None)]
    fn parses_storage_keys(#[case] key: &str, #[case] expected: Option<Mood>) {
        assert_eq!(Mood::from_key(key), expected);
    }

    #[test]
    fn every_mood_round_trips_through_its_key() {
        for mood in Mood::ALL {
            assert_eq!(Mood::from_key(mood.key()), Some(mood));
        }
    }

    #[test]
    fn hex_channels_split_correctly() {
        let gold = Mood::Create.color();
        assert_eq!((gold.r, gold.g, gold.b), (0xFF, 0xD7, 0x00));
        assert_eq!(gold.to_hex(), 0xFFD700);
        assert_eq!(BASE_COLOR.to_string(), "#111122");
    }

    #[test]
    fn event_takes_color_from_mood() {
        let event = MoodEvent::new(GeoPoint::ORIGIN, Mood::Sleep, 7);
        assert_eq!(event.color, Rgb::from_hex(0x4B0082));
    }
}
