//! src/countries.rs
//!
//! Static directory backing the country code picker.
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub iso2: &'static str,
    pub name: &'static str,
    pub dial_code: &'static str,
}

impl Country {
    const fn new(iso2: &'static str, name: &'static str, dial_code: &'static str) -> Self {
        Self {
            iso2,
            name,
            dial_code,
        }
    }

    /// Flag emoji built from the regional indicator symbols of the ISO2 code.
    pub fn flag(&self) -> String {
        self.iso2
            .bytes()
            .filter(u8::is_ascii_uppercase)
            .filter_map(|b| char::from_u32(0x1F1E6 + u32::from(b - b'A')))
            .collect()
    }

    /// Case-insensitive match on the name, or on the dial code with or
    /// without a leading `+`.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }

        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.dial_code.contains(&query)
            || self.dial_code.contains(query.trim_start_matches('+'))
    }
}

// Sorted by name.
static COUNTRIES: [Country; 55] = [
    Country::new("AR", "Argentina", "+54"),
    Country::new("AU", "Australia", "+61"),
    Country::new("AT", "Austria", "+43"),
    Country::new("BD", "Bangladesh", "+880"),
    Country::new("BE", "Belgium", "+32"),
    Country::new("BR", "Brazil", "+55"),
    Country::new("CA", "Canada", "+1"),
    Country::new("CL", "Chile", "+56"),
    Country::new("CN", "China", "+86"),
    Country::new("CO", "Colombia", "+57"),
    Country::new("CZ", "Czech Republic", "+420"),
    Country::new("DK", "Denmark", "+45"),
    Country::new("EG", "Egypt", "+20"),
    Country::new("FI", "Finland", "+358"),
    Country::new("FR", "France", "+33"),
    Country::new("DE", "Germany", "+49"),
    Country::new("GR", "Greece", "+30"),
    Country::new("HK", "Hong Kong", "+852"),
    Country::new("HU", "Hungary", "+36"),
    Country::new("IN", "India", "+91"),
    Country::new("ID", "Indonesia", "+62"),
    Country::new("IE", "Ireland", "+353"),
    Country::new("IL", "Israel", "+972"),
    Country::new("IT", "Italy", "+39"),
    Country::new("JP", "Japan", "+81"),
    Country::new("KE", "Kenya", "+254"),
    Country::new("MY", "Malaysia", "+60"),
    Country::new("MX", "Mexico", "+52"),
    Country::new("MA", "Morocco", "+212"),
    Country::new("NL", "Netherlands", "+31"),
    Country::new("NZ", "New Zealand", "+64"),
    Country::new("NG", "Nigeria", "+234"),
    Country::new("NO", "Norway", "+47"),
    Country::new("PK", "Pakistan", "+92"),
    Country::new("PE", "Peru", "+51"),
    Country::new("PH", "Philippines", "+63"),
    Country::new("PL", "Poland", "+48"),
    Country::new("PT", "Portugal", "+351"),
    Country::new("RO", "Romania", "+40"),
    Country::new("RU", "Russia", "+7"),
    Country::new("SA", "Saudi Arabia", "+966"),
    Country::new("SG", "Singapore", "+65"),
    Country::new("ZA", "South Africa", "+27"),
    Country::new("KR", "South Korea", "+82"),
    Country::new("ES", "Spain", "+34"),
    Country::new("SE", "Sweden", "+46"),
    Country::new("CH", "Switzerland", "+41"),
    Country::new("TW", "Taiwan", "+886"),
    Country::new("TH", "Thailand", "+66"),
    Country::new("TR", "Turkey", "+90"),
    Country::new("UA", "Ukraine", "+380"),
    Country::new("AE", "United Arab Emirates", "+971"),
    Country::new("GB", "United Kingdom", "+44"),
    Country::new("US", "United States", "+1"),
    Country::new("VN", "Vietnam", "+84"),
];

pub fn all() -> &'static [Country] {
    &COUNTRIES
}

pub fn find_by_iso2(iso2: &str) -> Option<&'static Country> {
    COUNTRIES
        .iter()
        .find(|country| country.iso2.eq_ignore_ascii_case(iso2.trim()))
}

pub fn filter(query: &str) -> Vec<&'static Country> {
    COUNTRIES.iter().filter(|country| country.matches(query)).collect()
}
