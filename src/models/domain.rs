use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordinal price tier: `$` < `$$` < `$$$`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PriceTier {
    Budget,
    Mid,
    Premium,
}

impl PriceTier {
    /// Ordinal level (1-3) used for adjacency scoring
    pub fn level(&self) -> i8 {
        match self {
            PriceTier::Budget => 1,
            PriceTier::Mid => 2,
            PriceTier::Premium => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Budget => "$",
            PriceTier::Mid => "$$",
            PriceTier::Premium => "$$$",
        }
    }
}

impl TryFrom<String> for PriceTier {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim() {
            "$" => Ok(PriceTier::Budget),
            "$$" => Ok(PriceTier::Mid),
            "$$$" => Ok(PriceTier::Premium),
            other => Err(format!("unrecognized price tier: {:?}", other)),
        }
    }
}

impl From<PriceTier> for String {
    fn from(value: PriceTier) -> Self {
        value.as_str().to_string()
    }
}

/// Ordinal course difficulty: EASY < MEDIUM < HARD
///
/// Deserializes case-insensitively; serializes to the canonical uppercase
/// spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Ordinal level (1-3) used for adjacency scoring
    pub fn level(&self) -> i8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "EASY" => Ok(Difficulty::Easy),
            "MEDIUM" => Ok(Difficulty::Medium),
            "HARD" => Ok(Difficulty::Hard),
            other => Err(format!("unrecognized difficulty: {:?}", other)),
        }
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.as_str().to_string()
    }
}

/// The six canonical amenity flags
///
/// On a club a flag means the amenity exists on site. On preferences it means
/// the golfer wants it, and on a hard filter it means the amenity is required.
/// A `false` flag never constrains anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenities {
    #[serde(default)]
    pub driving_range: bool,
    #[serde(default)]
    pub putting_green: bool,
    #[serde(default)]
    pub chipping_green: bool,
    #[serde(default)]
    pub practice_bunker: bool,
    #[serde(default)]
    pub restaurant: bool,
    #[serde(default)]
    pub lodging_on_site: bool,
}

impl Amenities {
    pub const COUNT: usize = 6;

    /// Flags paired with their storage column names, in canonical order
    pub fn flags(&self) -> [(&'static str, bool); Self::COUNT] {
        [
            ("driving_range", self.driving_range),
            ("putting_green", self.putting_green),
            ("chipping_green", self.chipping_green),
            ("practice_bunker", self.practice_bunker),
            ("restaurant", self.restaurant),
            ("lodging_on_site", self.lodging_on_site),
        ]
    }

    /// Number of flags true on both sides
    pub fn matching_count(&self, other: &Amenities) -> usize {
        self.flags()
            .iter()
            .zip(other.flags().iter())
            .filter(|((_, a), (_, b))| *a && *b)
            .count()
    }

    /// True when every flag required by `required` is present here
    pub fn satisfies(&self, required: &Amenities) -> bool {
        self.flags()
            .iter()
            .zip(required.flags().iter())
            .all(|((_, have), (_, need))| !*need || *have)
    }

    pub fn any(&self) -> bool {
        self.flags().iter().any(|(_, f)| *f)
    }
}

/// The five canonical service flags
///
/// Same one-directional semantics as [`Amenities`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Services {
    #[serde(default)]
    pub motor_cart: bool,
    #[serde(default)]
    pub pull_cart: bool,
    #[serde(default)]
    pub golf_clubs_rental: bool,
    #[serde(default)]
    pub club_fitting: bool,
    #[serde(default)]
    pub golf_lessons: bool,
}

impl Services {
    pub const COUNT: usize = 5;

    pub fn flags(&self) -> [(&'static str, bool); Self::COUNT] {
        [
            ("motor_cart", self.motor_cart),
            ("pull_cart", self.pull_cart),
            ("golf_clubs_rental", self.golf_clubs_rental),
            ("club_fitting", self.club_fitting),
            ("golf_lessons", self.golf_lessons),
        ]
    }

    pub fn matching_count(&self, other: &Services) -> usize {
        self.flags()
            .iter()
            .zip(other.flags().iter())
            .filter(|((_, a), (_, b))| *a && *b)
            .count()
    }

    pub fn satisfies(&self, required: &Services) -> bool {
        self.flags()
            .iter()
            .zip(required.flags().iter())
            .all(|((_, have), (_, need))| !*need || *have)
    }

    pub fn any(&self) -> bool {
        self.flags().iter().any(|(_, f)| *f)
    }
}

/// A golf club venue with location, pricing, difficulty and facility data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub id: Uuid,
    pub club_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub price_tier: Option<PriceTier>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub number_of_holes: Option<String>,
    #[serde(default)]
    pub club_membership: Option<String>,
    #[serde(default)]
    pub amenities: Amenities,
    #[serde(default)]
    pub services: Services,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Club {
    pub fn location(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A golfer's stored matching preferences
///
/// Every field is optional. An unset field means "no preference" and never
/// penalizes a candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GolferPreferences {
    #[serde(default)]
    pub preferred_price_range: Option<PriceTier>,
    #[serde(default)]
    pub preferred_difficulty: Option<Difficulty>,
    #[serde(default)]
    pub number_of_holes: Option<String>,
    #[serde(default)]
    pub club_membership: Option<String>,
    #[serde(default)]
    pub amenities: Amenities,
    #[serde(default)]
    pub services: Services,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl GolferPreferences {
    /// True when the profile carries no matching signal at all, in which case
    /// scoring falls back to a pure distance score.
    pub fn is_empty(&self) -> bool {
        self.preferred_price_range.is_none()
            && self.preferred_difficulty.is_none()
            && self.number_of_holes.is_none()
            && self.club_membership.is_none()
            && !self.amenities.any()
            && !self.services.any()
            && self.technologies.is_empty()
    }
}

/// Hard filters applied before scoring
///
/// AND-combined: a candidate must satisfy every supplied filter to appear in
/// the result set at all. Boolean flags are one-directional (only `true`
/// constrains); the technology list uses OR semantics within itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClubFilters {
    #[serde(default)]
    pub price_tier: Option<PriceTier>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub number_of_holes: Option<String>,
    #[serde(default)]
    pub club_membership: Option<String>,
    #[serde(default)]
    pub amenities: Amenities,
    #[serde(default)]
    pub services: Services,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// A geographic point in WGS84 degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A scored candidate: the club plus its computed distance and score
///
/// Ephemeral - built per request, sorted, paginated and discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredClub {
    #[serde(flatten)]
    pub club: Club,
    pub distance_miles: f64,
    pub score: f64,
}

/// Geospatial bounding box used as a cheap pre-filter
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

/// Scoring weights
///
/// The five component weights sum to 1.0; `technology_bonus` is an additive
/// per-shared-tag bonus applied on top of the weighted blend.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub distance: f64,
    pub price: f64,
    pub difficulty: f64,
    pub amenities: f64,
    pub services: f64,
    pub technology_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            distance: 0.25,
            price: 0.25,
            difficulty: 0.20,
            amenities: 0.15,
            services: 0.15,
            technology_bonus: 3.0,
        }
    }
}
