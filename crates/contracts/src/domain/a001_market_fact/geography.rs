use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Static region → countries mapping. Every country belongs to exactly one region.
pub const REGION_COUNTRIES: &[(&str, &[&str])] = &[
    ("North America", &["U.S.", "Canada"]),
    (
        "Europe",
        &["U.K.", "Germany", "Italy", "France", "Spain", "Russia", "Rest of Europe"],
    ),
    (
        "Asia Pacific",
        &[
            "China",
            "India",
            "Japan",
            "South Korea",
            "ASEAN",
            "Australia",
            "Rest of Asia Pacific",
        ],
    ),
    (
        "Latin America",
        &["Brazil", "Argentina", "Mexico", "Rest of Latin America"],
    ),
    (
        "Middle East & Africa",
        &["GCC", "South Africa", "Rest of Middle East & Africa"],
    ),
];

static COUNTRY_REGION: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    REGION_COUNTRIES
        .iter()
        .flat_map(|(region, countries)| countries.iter().map(move |c| (*c, *region)))
        .collect()
});

/// Region names in declaration order
pub fn regions() -> Vec<&'static str> {
    REGION_COUNTRIES.iter().map(|(region, _)| *region).collect()
}

/// Countries of one region (empty for an unknown region)
pub fn countries_of(region: &str) -> &'static [&'static str] {
    REGION_COUNTRIES
        .iter()
        .find(|(r, _)| *r == region)
        .map(|(_, countries)| *countries)
        .unwrap_or(&[])
}

/// Region a country belongs to
pub fn region_of(country: &str) -> Option<&'static str> {
    COUNTRY_REGION.get(country).copied()
}
