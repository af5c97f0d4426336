//! Emergency contact directory.

/// Contacts everyone gets.
pub const GENERAL_CONTACTS: &[(&str, &str)] = &[
    ("Emergency Services", "911 (USA)"),
    ("FEMA", "1-800-621-FEMA (3362) or visit fema.gov"),
    ("Red Cross", "1-800-RED-CROSS (733-2767) or visit redcross.org"),
    (
        "Disaster Distress Helpline",
        "1-800-985-5990 (crisis counseling)",
    ),
];

/// Per-type addenda, keyed by lowercase disaster type.
pub const TYPE_CONTACTS: &[(&str, &[(&str, &str)])] = &[
    (
        "hurricane",
        &[
            ("NHC", "National Hurricane Center: nhc.noaa.gov"),
            ("Evacuation", "Know your evacuation zone and routes"),
        ],
    ),
    (
        "earthquake",
        &[
            ("USGS", "USGS Earthquake Hazards: earthquake.usgs.gov"),
            ("Alerts", "Sign up for ShakeAlert in applicable regions"),
        ],
    ),
    (
        "wildfire",
        &[
            ("Fire Info", "InciWeb: inciweb.nwcg.gov"),
            ("Air Quality", "AirNow.gov for air quality updates"),
        ],
    ),
    (
        "flood",
        &[
            ("NWS", "National Weather Service: weather.gov"),
            ("Flood Safety", "Turn Around, Don't Drown campaign"),
        ],
    ),
];

/// Type-specific contacts, if any exist for this type.
pub fn contacts_for(disaster_type: &str) -> Option<&'static [(&'static str, &'static str)]> {
    let key = disaster_type.trim().to_lowercase();
    TYPE_CONTACTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, contacts)| *contacts)
}
