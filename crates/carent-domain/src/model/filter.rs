//! Filter specification for the catalog listing

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::vehicle::{BodyType, Transmission};

/// Prices strictly below this are "under 500k"
pub const LOWER_PRICE_THRESHOLD: u64 = 500_000;
/// Prices strictly above this are "over 1m"
pub const UPPER_PRICE_THRESHOLD: u64 = 1_000_000;

/// Category selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Suv,
    Mpv,
    Sedan,
    Hatchback,
}

impl Category {
    pub fn parse_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_lowercase();
        if tag == "all" {
            return Some(Category::All);
        }
        BodyType::from_tag(&tag).map(Category::from)
    }

    /// Unknown tags select everything
    pub fn from_tag(tag: &str) -> Self {
        Self::parse_tag(tag).unwrap_or_default()
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Suv => "suv",
            Category::Mpv => "mpv",
            Category::Sedan => "sedan",
            Category::Hatchback => "hatchback",
        }
    }

    pub fn body_type(&self) -> Option<BodyType> {
        match self {
            Category::All => None,
            Category::Suv => Some(BodyType::Suv),
            Category::Mpv => Some(BodyType::Mpv),
            Category::Sedan => Some(BodyType::Sedan),
            Category::Hatchback => Some(BodyType::Hatchback),
        }
    }
}

impl From<BodyType> for Category {
    fn from(body: BodyType) -> Self {
        match body {
            BodyType::Suv => Category::Suv,
            BodyType::Mpv => Category::Mpv,
            BodyType::Sedan => Category::Sedan,
            BodyType::Hatchback => Category::Hatchback,
        }
    }
}

/// Daily price bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    #[default]
    All,
    /// price < 500,000
    UnderThreshold,
    /// 500,000 <= price <= 1,000,000
    MidRange,
    /// price > 1,000,000
    AboveThreshold,
}

impl PriceRange {
    pub fn parse_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "all" => Some(PriceRange::All),
            "under-500k" => Some(PriceRange::UnderThreshold),
            "500k-1m" => Some(PriceRange::MidRange),
            "over-1m" => Some(PriceRange::AboveThreshold),
            _ => None,
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        Self::parse_tag(tag).unwrap_or_default()
    }

    pub fn tag(&self) -> &'static str {
        match self {
            PriceRange::All => "all",
            PriceRange::UnderThreshold => "under-500k",
            PriceRange::MidRange => "500k-1m",
            PriceRange::AboveThreshold => "over-1m",
        }
    }

    /// Both thresholds belong to `MidRange` only.
    pub fn contains(&self, price_per_day: u64) -> bool {
        match self {
            PriceRange::All => true,
            PriceRange::UnderThreshold => price_per_day < LOWER_PRICE_THRESHOLD,
            PriceRange::MidRange => {
                (LOWER_PRICE_THRESHOLD..=UPPER_PRICE_THRESHOLD).contains(&price_per_day)
            }
            PriceRange::AboveThreshold => price_per_day > UPPER_PRICE_THRESHOLD,
        }
    }
}

/// Listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    PriceAscending,
    PriceDescending,
    NewestFirst,
    NameAlphabetical,
}

impl SortKey {
    pub fn parse_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "price-low" => Some(SortKey::PriceAscending),
            "price-high" => Some(SortKey::PriceDescending),
            "newest" => Some(SortKey::NewestFirst),
            "name" => Some(SortKey::NameAlphabetical),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            SortKey::PriceAscending => "price-low",
            SortKey::PriceDescending => "price-high",
            SortKey::NewestFirst => "newest",
            SortKey::NameAlphabetical => "name",
        }
    }
}

/// Immutable filter/sort selection, rebuilt on every interaction.
///
/// `sort == None` keeps catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub search: String,
    pub category: Category,
    pub price_range: PriceRange,
    pub transmissions: BTreeSet<Transmission>,
    pub sort: Option<SortKey>,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: Category::All,
            price_range: PriceRange::All,
            transmissions: BTreeSet::new(),
            sort: Some(SortKey::PriceAscending),
        }
    }
}

impl FilterSpec {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_price_range(mut self, price_range: PriceRange) -> Self {
        self.price_range = price_range;
        self
    }

    pub fn with_transmissions<I: IntoIterator<Item = Transmission>>(mut self, items: I) -> Self {
        self.transmissions = items.into_iter().collect();
        self
    }

    pub fn with_sort(mut self, sort: Option<SortKey>) -> Self {
        self.sort = sort;
        self
    }

    /// Add the transmission if absent, remove it if present
    pub fn toggle_transmission(&self, transmission: Transmission) -> Self {
        let mut next = self.clone();
        if !next.transmissions.remove(&transmission) {
            next.transmissions.insert(transmission);
        }
        next
    }

    /// Build from raw tags. Unknown values fall back to unconstrained.
    ///
    /// Tags match ignoring case and surrounding whitespace, so `MPV`,
    /// `Under-500K` and ` Name ` select a filter here even though the web
    /// listing only recognizes the exact lowercase keys and would skip
    /// those stages.
    pub fn from_tags(tags: &FilterTags) -> Self {
        Self {
            search: tags.search.clone(),
            category: Category::from_tag(&tags.category),
            price_range: PriceRange::from_tag(&tags.price_range),
            transmissions: tags
                .transmission
                .iter()
                .filter_map(|t| Transmission::from_tag(t))
                .collect(),
            sort: SortKey::parse_tag(&tags.sort_by),
        }
    }
}

/// Raw filter state as the listing page sends it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterTags {
    pub search: String,
    pub category: String,
    pub price_range: String,
    pub transmission: Vec<String>,
    pub sort_by: String,
}

impl Default for FilterTags {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: "all".to_string(),
            price_range: "all".to_string(),
            transmission: Vec::new(),
            sort_by: "price-low".to_string(),
        }
    }
}

impl FilterTags {
    /// Tags that will be ignored when building a `FilterSpec`
    pub fn unrecognized(&self) -> Vec<String> {
        let mut unknown = Vec::new();
        if Category::parse_tag(&self.category).is_none() {
            unknown.push(format!("category={}", self.category));
        }
        if PriceRange::parse_tag(&self.price_range).is_none() {
            unknown.push(format!("priceRange={}", self.price_range));
        }
        for t in &self.transmission {
            if Transmission::from_tag(t).is_none() {
                unknown.push(format!("transmission={}", t));
            }
        }
        if SortKey::parse_tag(&self.sort_by).is_none() {
            unknown.push(format!("sortBy={}", self.sort_by));
        }
        unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_boundaries() {
        assert!(!PriceRange::UnderThreshold.contains(500_000));
        assert!(PriceRange::UnderThreshold.contains(499_999));
        assert!(PriceRange::MidRange.contains(500_000));
        assert!(PriceRange::MidRange.contains(1_000_000));
        assert!(!PriceRange::AboveThreshold.contains(1_000_000));
        assert!(PriceRange::AboveThreshold.contains(1_000_001));
        assert!(PriceRange::All.contains(0));
    }

    #[test]
    fn test_unknown_tags_are_permissive() {
        assert_eq!(Category::from_tag("convertible"), Category::All);
        assert_eq!(PriceRange::from_tag("cheap"), PriceRange::All);
        assert_eq!(SortKey::parse_tag("random"), None);
    }

    #[test]
    fn test_from_tags() {
        let tags = FilterTags {
            search: "toyota".to_string(),
            category: "MPV".to_string(),
            price_range: "under-500k".to_string(),
            transmission: vec!["Manual".to_string(), "Tiptronic".to_string()],
            sort_by: "newest".to_string(),
        };
        let spec = FilterSpec::from_tags(&tags);
        assert_eq!(spec.category, Category::Mpv);
        assert_eq!(spec.price_range, PriceRange::UnderThreshold);
        assert_eq!(spec.transmissions.len(), 1);
        assert!(spec.transmissions.contains(&Transmission::Manual));
        assert_eq!(spec.sort, Some(SortKey::NewestFirst));
        assert_eq!(tags.unrecognized(), vec!["transmission=Tiptronic".to_string()]);
    }

    #[test]
    fn test_tags_match_ignoring_case() {
        let tags = FilterTags {
            category: "MPV".to_string(),
            price_range: "Under-500K".to_string(),
            sort_by: " Name ".to_string(),
            ..FilterTags::default()
        };
        let spec = FilterSpec::from_tags(&tags);
        assert_eq!(spec.category, Category::Mpv);
        assert_eq!(spec.price_range, PriceRange::UnderThreshold);
        assert_eq!(spec.sort, Some(SortKey::NameAlphabetical));
        assert!(tags.unrecognized().is_empty());
    }

    #[test]
    fn test_filter_tags_from_page_state() {
        let json = r#"{"search":"","category":"suv","priceRange":"over-1m","transmission":["Automatic"],"sortBy":"price-high"}"#;
        let tags: FilterTags = serde_json::from_str(json).unwrap();
        let spec = FilterSpec::from_tags(&tags);
        assert_eq!(spec.category, Category::Suv);
        assert_eq!(spec.price_range, PriceRange::AboveThreshold);
        assert_eq!(spec.sort, Some(SortKey::PriceDescending));
    }

    #[test]
    fn test_default_tags_match_default_spec() {
        assert_eq!(FilterSpec::from_tags(&FilterTags::default()), FilterSpec::default());
    }

    #[test]
    fn test_toggle_transmission() {
        let spec = FilterSpec::default();
        let on = spec.toggle_transmission(Transmission::Manual);
        assert!(on.transmissions.contains(&Transmission::Manual));
        let off = on.toggle_transmission(Transmission::Manual);
        assert!(off.transmissions.is_empty());
        assert!(spec.transmissions.is_empty());
    }
}
