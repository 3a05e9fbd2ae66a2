use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Martian solar day index used to page rover photo collections
pub type Sol = u32;

/// The rovers the dashboard knows about, in navigation order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Rover {
    Curiosity,
    Opportunity,
    Spirit,
}

impl Rover {
    /// Fixed roster, constant for the process lifetime
    pub const ALL: [Rover; 3] = [Rover::Curiosity, Rover::Opportunity, Rover::Spirit];

    /// Lowercase identifier used in URLs and `data-value` attributes
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Capitalised name as NASA spells it
    pub fn display_name(&self) -> &'static str {
        match self {
            Rover::Curiosity => "Curiosity",
            Rover::Opportunity => "Opportunity",
            Rover::Spirit => "Spirit",
        }
    }

    /// Case-insensitive lookup against the fixed roster
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse().ok()
    }
}

/// APOD media kind; anything NASA adds later lands in `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
    #[serde(other)]
    Other,
}

/// Astronomy picture (or video) of the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApodImage {
    #[serde(default)]
    pub media_type: MediaType,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub explanation: String,
}

/// Body of the gateway's `GET /apod`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApodResponse {
    pub image: Option<ApodImage>,
}

/// Per-rover mission metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverManifest {
    pub name: String,
    pub status: String,
    pub landing_date: NaiveDate,
    pub launch_date: NaiveDate,
    pub max_sol: Sol,
    pub max_date: NaiveDate,
    pub total_photos: u64,
}

impl RoverManifest {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }

    /// Whether this entry describes `rover`, ignoring case
    pub fn describes(&self, rover: Rover) -> bool {
        self.name.eq_ignore_ascii_case(rover.as_str())
    }
}

/// NASA wraps each manifest in a `photo_manifest` field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEnvelope {
    pub photo_manifest: RoverManifest,
}

/// Body of the gateway's `GET /roverData/manifests`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestsResponse {
    #[serde(rename = "roversManifest")]
    pub rovers_manifest: Vec<ManifestEnvelope>,
}

impl ManifestsResponse {
    /// Strip the `photo_manifest` wrappers, keeping gateway order
    pub fn into_manifests(self) -> Vec<RoverManifest> {
        self.rovers_manifest
            .into_iter()
            .map(|envelope| envelope.photo_manifest)
            .collect()
    }
}

/// A single rover photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: u64,
    pub img_src: String,
    pub earth_date: NaiveDate,
}

/// Body of the gateway's `GET /photos/:rover/:sol`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotosResponse {
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// Error body returned by the gateway when the upstream call fails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: Option<String>,
}
