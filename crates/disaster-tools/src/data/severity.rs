//! Severity scales and measurement matching.

/// Ordered severity labels for one disaster type.
#[derive(Debug, Clone, Copy)]
pub struct SeverityTable {
    pub disaster_type: &'static str,
    /// (label, description) in ascending severity.
    pub levels: &'static [(&'static str, &'static str)],
}

pub const SEVERITY_TABLES: &[SeverityTable] = &[
    SeverityTable {
        disaster_type: "hurricane",
        levels: &[
            ("CAT 1", "Minimal - Some damage expected"),
            ("CAT 2", "Moderate - Extensive damage likely"),
            ("CAT 3", "Extensive - Devastating damage"),
            ("CAT 4", "Extreme - Catastrophic damage"),
            (
                "CAT 5",
                "Catastrophic - Complete roof failure and total destruction of buildings",
            ),
        ],
    },
    SeverityTable {
        disaster_type: "earthquake",
        levels: &[
            ("3.0-3.9", "Minor - Often felt, rarely causes damage"),
            ("4.0-4.9", "Light - Noticeable shaking, minor damage"),
            ("5.0-5.9", "Moderate - Can cause damage to poorly constructed buildings"),
            ("6.0-6.9", "Strong - Destructive in populated areas"),
            ("7.0-7.9", "Major - Serious damage over large areas"),
            ("8.0+", "Great - Devastating damage over extensive areas"),
        ],
    },
    SeverityTable {
        disaster_type: "tornado",
        levels: &[
            ("EF0", "Light damage - 65-85 mph winds"),
            ("EF1", "Moderate damage - 86-110 mph winds"),
            ("EF2", "Considerable damage - 111-135 mph winds"),
            ("EF3", "Severe damage - 136-165 mph winds"),
            ("EF4", "Devastating damage - 166-200 mph winds"),
            ("EF5", "Incredible damage - >200 mph winds"),
        ],
    },
];

impl SeverityTable {
    /// First level, in table order, whose label contains the measurement or
    /// is contained by it. `measurement` must already be upper-cased.
    ///
    /// Overlapping labels are not disambiguated: the earliest match wins.
    pub fn match_level(&self, measurement: &str) -> Option<(&'static str, &'static str)> {
        self.levels
            .iter()
            .find(|(label, _)| measurement.contains(label) || label.contains(measurement))
            .copied()
    }

    /// Full listing used when no level matches.
    pub fn listing(&self) -> String {
        let mut out = format!("Severity levels for {}:\n\n", self.disaster_type);
        for (label, description) in self.levels {
            out.push_str(&format!("• {}: {}\n", label, description));
        }
        out
    }
}

/// Case-insensitive table lookup.
pub fn find_severity_table(disaster_type: &str) -> Option<&'static SeverityTable> {
    let key = disaster_type.trim().to_lowercase();
    SEVERITY_TABLES.iter().find(|table| table.disaster_type == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_labels_unique_per_table() {
        let mut types = HashSet::new();
        for table in SEVERITY_TABLES {
            assert!(types.insert(table.disaster_type));
            let mut labels = HashSet::new();
            for (label, _) in table.levels {
                assert!(labels.insert(label.to_uppercase()));
            }
        }
    }

    #[test]
    fn test_match_in_both_directions() {
        let tornado = find_severity_table("tornado").unwrap();
        // label inside measurement
        assert_eq!(
            tornado.match_level("AN EF3 TORNADO").map(|(l, _)| l),
            Some("EF3")
        );
        // measurement inside label
        let quake = find_severity_table("earthquake").unwrap();
        assert_eq!(quake.match_level("7.0").map(|(l, _)| l), Some("7.0-7.9"));
    }

    #[test]
    fn test_first_table_order_match_wins() {
        // A bare "-" sits inside every range label.
        let quake = find_severity_table("earthquake").unwrap();
        assert_eq!(quake.match_level("-").map(|(l, _)| l), Some("3.0-3.9"));
    }

    #[test]
    fn test_listing_format() {
        let hurricane = find_severity_table("HURRICANE").unwrap();
        let listing = hurricane.listing();
        assert!(listing.starts_with("Severity levels for hurricane:\n\n"));
        assert!(listing.contains("• CAT 4: Extreme - Catastrophic damage\n"));
        assert_eq!(listing.matches('•').count(), 5);
    }
}
