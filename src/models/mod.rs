use serde::{Deserialize, Serialize};

pub mod announcement;
pub mod report;
pub mod user;

pub use announcement::{Announcement, AnnouncementStatus};
pub use report::{Report, ReportCategory, ReportStatus};
pub use user::{PasswordDigest, Profile, Role, User};

/// Car manufacturer, reference data defined at startup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    pub id: u32,
    pub name: String,
    pub country: Option<String>,
}

impl Brand {
    pub fn new(id: u32, name: &str, country: Option<&str>) -> Self {
        Self {
            id,
            name: name.to_string(),
            country: country.map(str::to_string),
        }
    }
}

/// Point on the globe, in degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    #[serde(alias = "Gasolina")]
    Gasoline,
    #[serde(alias = "Diesel")]
    Diesel,
    #[serde(alias = "Elétrico")]
    Electric,
    #[serde(alias = "Híbrido")]
    Hybrid,
    #[serde(alias = "GPL")]
    Lpg,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    Sedan,
    Suv,
    Hatchback,
    Pickup,
    #[serde(alias = "esportivo")]
    Sports,
    #[serde(alias = "eletrico")]
    Electric,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Transmission {
    Manual,
    #[serde(alias = "Automática")]
    Automatic,
}

/// Vehicle listing as shown in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: u32,
    pub name: String,
    pub brand: Brand,
    pub year: i32,
    /// Asking price in whole euros
    pub price: u32,
    pub mileage_km: u32,
    pub fuel: FuelType,
    pub transmission: Transmission,
    pub body: BodyType,
    pub is_new: bool,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}
