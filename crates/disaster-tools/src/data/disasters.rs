//! Reference descriptions for each supported disaster type.

/// Static description of one disaster type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisasterRecord {
    /// Lowercase lookup key.
    pub key: &'static str,
    pub description: &'static str,
    pub safety_tips: &'static str,
    /// Name of the scale used to grade this disaster.
    pub severity_scale: &'static str,
    pub typical_season: &'static str,
}

pub const DISASTERS: &[DisasterRecord] = &[
    DisasterRecord {
        key: "hurricane",
        description: "Hurricanes are powerful tropical storms with wind speeds of 74 mph or higher.",
        safety_tips: "Evacuate if ordered, secure your home, stock emergency supplies, stay indoors away from windows.",
        severity_scale: "Saffir-Simpson scale (Categories 1-5)",
        typical_season: "June 1 - November 30 (Atlantic)",
    },
    DisasterRecord {
        key: "earthquake",
        description: "Earthquakes are sudden ground movements caused by tectonic plate shifts.",
        safety_tips: "Drop, cover, and hold on. Stay away from windows and heavy objects. Have an emergency kit ready.",
        severity_scale: "Richter/Moment Magnitude scale (0-10+)",
        typical_season: "Can occur any time",
    },
    DisasterRecord {
        key: "flood",
        description: "Floods are overflow of water onto normally dry land, often from heavy rain or storm surge.",
        safety_tips: "Move to higher ground immediately. Never drive through flooded areas. Turn off utilities if instructed.",
        severity_scale: "Minor, Moderate, Major, Record flooding",
        typical_season: "Varies by region; spring thaw and hurricane season common",
    },
    DisasterRecord {
        key: "wildfire",
        description: "Wildfires are uncontrolled fires that spread rapidly through vegetation.",
        safety_tips: "Evacuate immediately if ordered. Create defensible space around property. Close all windows and doors.",
        severity_scale: "Classes A-G based on size (acres burned)",
        typical_season: "Typically summer and fall, varies by region",
    },
    DisasterRecord {
        key: "tornado",
        description: "Tornadoes are violent rotating columns of air extending from thunderstorms to ground.",
        safety_tips: "Seek shelter in basement or interior room on lowest floor. Stay away from windows. Get under sturdy furniture.",
        severity_scale: "Enhanced Fujita scale (EF0-EF5)",
        typical_season: "Peak season: March-June, but can occur year-round",
    },
    DisasterRecord {
        key: "tsunami",
        description: "Tsunamis are large ocean waves caused by underwater earthquakes or volcanic eruptions.",
        safety_tips: "Move inland and to higher ground immediately. Stay away from coast until all-clear is given.",
        severity_scale: "Based on wave height and run-up",
        typical_season: "Can occur any time",
    },
    DisasterRecord {
        key: "blizzard",
        description: "Blizzards are severe snowstorms with strong winds and low visibility.",
        safety_tips: "Stay indoors. Keep emergency supplies. Avoid travel. Dress warmly if you must go outside.",
        severity_scale: "Based on wind speed, visibility, and duration",
        typical_season: "Winter months",
    },
];

/// Case-insensitive lookup.
pub fn find_disaster(disaster_type: &str) -> Option<&'static DisasterRecord> {
    let key = disaster_type.trim().to_lowercase();
    DISASTERS.iter().find(|record| record.key == key)
}

/// Supported keys in table order.
pub fn supported_disasters() -> Vec<&'static str> {
    DISASTERS.iter().map(|record| record.key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for record in DISASTERS {
            assert_eq!(record.key, record.key.to_lowercase());
            assert!(seen.insert(record.key), "duplicate key {}", record.key);
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find_disaster("TORNADO").map(|r| r.key), Some("tornado"));
        assert_eq!(find_disaster(" Flood ").map(|r| r.key), Some("flood"));
        assert!(find_disaster("meteor").is_none());
    }
}
