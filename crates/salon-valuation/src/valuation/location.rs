//! Market tier classification for free-text salon locations.
//!
//! A location is either a ZIP code (the input starts with five digits) or a
//! city/neighbourhood name. ZIP tables are consulted first; city names are
//! matched by substring, tier 1 before tier 2, longest name first within a tier.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Area label used when nothing in the curated tables matches.
pub const STANDARD_MARKET: &str = "Standard Market";

/// Market classification, 1 being the strongest market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum LocationTier {
    SuperPremium = 1,
    Premium = 2,
    Standard = 3,
    /// Reserved for secondary markets; the current tables never produce it.
    Emerging = 4,
}

impl LocationTier {
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Additive bonus applied to the valuation multiple.
    pub fn multiplier_adjustment(self) -> f64 {
        match self {
            LocationTier::SuperPremium => 0.4,
            LocationTier::Premium => 0.2,
            LocationTier::Standard | LocationTier::Emerging => 0.0,
        }
    }

    /// Tiers 1 and 2 come from the curated tables.
    pub fn is_known_market(self) -> bool {
        self <= LocationTier::Premium
    }

    pub fn label(self) -> &'static str {
        match self {
            LocationTier::SuperPremium => "super-premium market",
            LocationTier::Premium => "premium market",
            LocationTier::Standard => "standard market",
            LocationTier::Emerging => "emerging market",
        }
    }
}

impl From<LocationTier> for u8 {
    fn from(tier: LocationTier) -> Self {
        tier.number()
    }
}

impl TryFrom<u8> for LocationTier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(LocationTier::SuperPremium),
            2 => Ok(LocationTier::Premium),
            3 => Ok(LocationTier::Standard),
            4 => Ok(LocationTier::Emerging),
            other => Err(format!("location tier must be between 1 and 4, got {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationTierResult {
    pub tier: LocationTier,
    pub area_name: String,
    pub multiplier_adjustment: f64,
}

impl LocationTierResult {
    fn for_tier(tier: LocationTier, area_name: &str) -> Self {
        Self {
            tier,
            area_name: area_name.to_string(),
            multiplier_adjustment: tier.multiplier_adjustment(),
        }
    }

    pub fn standard() -> Self {
        Self::for_tier(LocationTier::Standard, STANDARD_MARKET)
    }
}

/// Output of the percentage-based premium helper kept for older callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPremium {
    pub premium: f64,
    pub multiplier: f64,
    pub area_name: String,
}

pub fn get_location_tier(input: &str) -> LocationTierResult {
    let normalized = input.trim().to_lowercase();

    if let Some(zip) = leading_zip(&normalized) {
        if let Some(result) = lookup_zip(zip) {
            debug!(zip, tier = result.tier.number(), area = %result.area_name, "zip matched");
            return result;
        }
    }

    let city_text: String = normalized
        .chars()
        .filter(|c| !c.is_ascii_digit() && *c != ',')
        .collect();
    let city_text = city_text.trim();

    if !city_text.is_empty() {
        for (tier, cities) in [
            (LocationTier::SuperPremium, SUPER_PREMIUM_CITIES),
            (LocationTier::Premium, PREMIUM_CITIES),
        ] {
            if let Some((_, area)) = longest_city_match(city_text, cities) {
                debug!(tier = tier.number(), area, "city matched");
                return LocationTierResult::for_tier(tier, area);
            }
        }
    }

    LocationTierResult::standard()
}

/// Converts the tier bonus into a percentage uplift on `base_value`.
#[deprecated(note = "use get_location_tier and apply the multiplier adjustment directly")]
pub fn calculate_location_premium(base_value: f64, zip_code: &str) -> LocationPremium {
    let location = get_location_tier(zip_code);
    let multiplier = 1.0 + location.multiplier_adjustment * 0.5;

    LocationPremium {
        premium: (base_value * (multiplier - 1.0)).round(),
        multiplier,
        area_name: location.area_name,
    }
}

fn leading_zip(normalized: &str) -> Option<&str> {
    let candidate = normalized.get(..5)?;
    candidate
        .bytes()
        .all(|byte| byte.is_ascii_digit())
        .then_some(candidate)
}

fn lookup_zip(zip: &str) -> Option<LocationTierResult> {
    for (tier, table) in [
        (LocationTier::SuperPremium, SUPER_PREMIUM_ZIPS),
        (LocationTier::Premium, PREMIUM_ZIPS),
    ] {
        if let Some((_, area)) = table.iter().find(|(code, _)| *code == zip) {
            return Some(LocationTierResult::for_tier(tier, area));
        }
    }
    None
}

fn longest_city_match(
    text: &str,
    cities: &'static [(&'static str, &'static str)],
) -> Option<(&'static str, &'static str)> {
    let mut best: Option<(&'static str, &'static str)> = None;
    for &(needle, area) in cities {
        if !text.contains(needle) {
            continue;
        }
        match best {
            Some((current, _)) if current.len() >= needle.len() => {}
            _ => best = Some((needle, area)),
        }
    }
    best
}

static SUPER_PREMIUM_ZIPS: &[(&str, &str)] = &[
    // Manhattan
    ("10001", "New York City"),
    ("10002", "New York City"),
    ("10003", "New York City"),
    ("10004", "New York City"),
    ("10005", "New York City"),
    ("10006", "New York City"),
    ("10007", "New York City"),
    ("10009", "New York City"),
    ("10010", "New York City"),
    ("10011", "New York City"),
    ("10012", "New York City"),
    ("10013", "New York City"),
    ("10014", "New York City"),
    ("10016", "New York City"),
    ("10017", "New York City"),
    ("10018", "New York City"),
    ("10019", "New York City"),
    ("10021", "New York City"),
    ("10022", "New York City"),
    ("10023", "New York City"),
    ("10024", "New York City"),
    ("10025", "New York City"),
    ("10028", "New York City"),
    ("10036", "New York City"),
    ("10065", "New York City"),
    ("10075", "New York City"),
    ("10128", "New York City"),
    ("10280", "New York City"),
    ("10282", "New York City"),
    // Los Angeles westside
    ("90024", "Westwood"),
    ("90049", "Brentwood"),
    ("90067", "Century City"),
    ("90069", "West Hollywood"),
    ("90210", "Beverly Hills"),
    ("90211", "Beverly Hills"),
    ("90212", "Beverly Hills"),
    ("90265", "Malibu"),
    ("90272", "Pacific Palisades"),
    ("90401", "Santa Monica"),
    ("90402", "Santa Monica"),
    ("90403", "Santa Monica"),
    ("92657", "Newport Coast"),
    ("92660", "Newport Beach"),
    // Bay Area
    ("94027", "Atherton"),
    ("94102", "San Francisco"),
    ("94103", "San Francisco"),
    ("94104", "San Francisco"),
    ("94105", "San Francisco"),
    ("94107", "San Francisco"),
    ("94108", "San Francisco"),
    ("94109", "San Francisco"),
    ("94110", "San Francisco"),
    ("94111", "San Francisco"),
    ("94114", "San Francisco"),
    ("94115", "San Francisco"),
    ("94117", "San Francisco"),
    ("94123", "San Francisco"),
    ("94301", "Palo Alto"),
    // East coast enclaves
    ("02108", "Beacon Hill"),
    ("02116", "Back Bay"),
    ("06830", "Greenwich"),
    ("11937", "East Hampton"),
    ("11968", "Southampton"),
    ("20007", "Georgetown"),
    ("33109", "Fisher Island"),
    ("33131", "Brickell"),
    ("33139", "Miami Beach"),
    ("33140", "Miami Beach"),
    ("33480", "Palm Beach"),
    ("81611", "Aspen"),
];

static PREMIUM_ZIPS: &[(&str, &str)] = &[
    ("02109", "Boston"),
    ("02110", "Boston"),
    ("02115", "Boston"),
    ("02118", "Boston"),
    ("07030", "Hoboken"),
    ("07302", "Jersey City"),
    ("11201", "Brooklyn"),
    ("11211", "Brooklyn"),
    ("11215", "Brooklyn"),
    ("11217", "Brooklyn"),
    ("11238", "Brooklyn"),
    ("19103", "Philadelphia"),
    ("19106", "Philadelphia"),
    ("20001", "Washington DC"),
    ("20009", "Washington DC"),
    ("28202", "Charlotte"),
    ("30305", "Buckhead"),
    ("30309", "Midtown Atlanta"),
    ("30327", "Atlanta"),
    ("37203", "Nashville"),
    ("55401", "Minneapolis"),
    ("60601", "Chicago"),
    ("60602", "Chicago"),
    ("60605", "Chicago"),
    ("60607", "Chicago"),
    ("60610", "Chicago"),
    ("60611", "Chicago"),
    ("60614", "Lincoln Park"),
    ("60657", "Lakeview"),
    ("75201", "Dallas"),
    ("75204", "Dallas"),
    ("75205", "Highland Park"),
    ("77002", "Houston"),
    ("77006", "Montrose"),
    ("77019", "River Oaks"),
    ("77027", "Houston"),
    ("78701", "Austin"),
    ("78703", "Austin"),
    ("78704", "Austin"),
    ("80202", "Denver"),
    ("80206", "Cherry Creek"),
    ("80209", "Denver"),
    ("85251", "Scottsdale"),
    ("85254", "Scottsdale"),
    ("89109", "Las Vegas"),
    ("92037", "La Jolla"),
    ("92101", "San Diego"),
    ("97209", "Portland"),
    ("98101", "Seattle"),
    ("98102", "Seattle"),
    ("98109", "Seattle"),
    ("98121", "Seattle"),
];

static SUPER_PREMIUM_CITIES: &[(&str, &str)] = &[
    ("new york", "New York City"),
    ("nyc", "New York City"),
    ("manhattan", "Manhattan"),
    ("manhattan beach", "Manhattan Beach"),
    ("beverly hills", "Beverly Hills"),
    ("los angeles", "Los Angeles"),
    ("west hollywood", "West Hollywood"),
    ("santa monica", "Santa Monica"),
    ("malibu", "Malibu"),
    ("newport beach", "Newport Beach"),
    ("san francisco", "San Francisco"),
    ("palo alto", "Palo Alto"),
    ("miami beach", "Miami Beach"),
    ("palm beach", "Palm Beach"),
    ("greenwich", "Greenwich"),
    ("the hamptons", "The Hamptons"),
    ("east hampton", "East Hampton"),
    ("southampton", "Southampton"),
    ("georgetown", "Georgetown"),
    ("aspen", "Aspen"),
];

static PREMIUM_CITIES: &[(&str, &str)] = &[
    ("brooklyn", "Brooklyn"),
    ("hoboken", "Hoboken"),
    ("jersey city", "Jersey City"),
    ("boston", "Boston"),
    ("philadelphia", "Philadelphia"),
    ("washington", "Washington DC"),
    ("chicago", "Chicago"),
    ("minneapolis", "Minneapolis"),
    ("seattle", "Seattle"),
    ("portland", "Portland"),
    ("san diego", "San Diego"),
    ("la jolla", "La Jolla"),
    ("san jose", "San Jose"),
    ("oakland", "Oakland"),
    ("pasadena", "Pasadena"),
    ("hollywood", "Hollywood"),
    ("las vegas", "Las Vegas"),
    ("scottsdale", "Scottsdale"),
    ("phoenix", "Phoenix"),
    ("denver", "Denver"),
    ("salt lake city", "Salt Lake City"),
    ("austin", "Austin"),
    ("dallas", "Dallas"),
    ("houston", "Houston"),
    ("nashville", "Nashville"),
    ("atlanta", "Atlanta"),
    ("charlotte", "Charlotte"),
    ("raleigh", "Raleigh"),
    ("miami", "Miami"),
    ("orlando", "Orlando"),
    ("tampa", "Tampa"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_tables_have_unique_five_digit_codes() {
        let mut seen = std::collections::HashSet::new();
        for (code, _) in SUPER_PREMIUM_ZIPS.iter().chain(PREMIUM_ZIPS) {
            assert_eq!(code.len(), 5, "{code} is not five digits");
            assert!(code.bytes().all(|b| b.is_ascii_digit()));
            assert!(seen.insert(*code), "{code} listed twice");
        }
    }

    #[test]
    fn city_needles_are_normalised() {
        for (needle, _) in SUPER_PREMIUM_CITIES.iter().chain(PREMIUM_CITIES) {
            assert_eq!(*needle, needle.trim().to_lowercase());
            assert!(!needle.contains(','));
            assert!(!needle.bytes().any(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn leading_zip_requires_five_digits() {
        assert_eq!(leading_zip("90210 something"), Some("90210"));
        assert_eq!(leading_zip("123456"), Some("12345"));
        assert_eq!(leading_zip("1234"), None);
        assert_eq!(leading_zip("1234a"), None);
        assert_eq!(leading_zip("miami"), None);
    }

    #[test]
    fn tier_round_trips_through_its_number() {
        for tier in [
            LocationTier::SuperPremium,
            LocationTier::Premium,
            LocationTier::Standard,
            LocationTier::Emerging,
        ] {
            assert_eq!(LocationTier::try_from(tier.number()), Ok(tier));
        }
        assert!(LocationTier::try_from(0).is_err());
        assert!(LocationTier::try_from(5).is_err());
    }
}
