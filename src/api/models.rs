use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

// listing
//  ├── id / price / area / bedrooms
//  ├── address / zip_code
//  ├── city
//  │    ├── id / name / region_id
//  │    └── region { id, name }
//  ├── is_rental (0/1 on the wire)
//  ├── image / description / created_at
//  └── agent { id, name, surname, ... }

#[derive(Debug, Clone, Deserialize)]
pub struct Region {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub region_id: i64,
    pub region: Option<Region>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Agent {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub address: String,
    pub zip_code: String,
    pub price: i64,
    pub area: f64,
    pub bedrooms: i64,
    #[serde(deserialize_with = "bool_from_int")]
    pub is_rental: bool,
    pub image: String,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub city_id: Option<i64>,
    pub city: Option<City>,
    pub agent_id: Option<i64>,
    pub agent: Option<Agent>,
}

impl Listing {
    /// Name of the region this listing belongs to, through its city.
    pub fn region_name(&self) -> Option<&str> {
        self.city
            .as_ref()
            .and_then(|c| c.region.as_ref())
            .map(|r| r.name.as_str())
    }
}

/// Detail-endpoint payload: the listing itself plus listings in a similar
/// location. The related collection is absent on some responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingDetails {
    #[serde(flatten)]
    pub listing: Listing,
    #[serde(default, alias = "related_listings", alias = "relatedListings")]
    pub related: Vec<Listing>,
}

/// A file received from a browser form, held in memory until it is either
/// rejected by validation or forwarded to the API.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Outbound payload for `POST /real-estates`. Field names match the
/// multipart part names the API expects.
#[derive(Debug)]
pub struct NewListing {
    pub address: String,
    pub zip_code: String,
    pub region_id: i64,
    pub city_id: i64,
    pub price: f64,
    pub area: f64,
    pub bedrooms: i64,
    pub description: String,
    pub is_rental: bool,
    pub agent_id: i64,
    pub image: UploadedFile,
}

/// Outbound payload for `POST /agents`.
#[derive(Debug)]
pub struct NewAgent {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub avatar: UploadedFile,
}

/// The API encodes booleans as 0/1 integers.
fn bool_from_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(u8::deserialize(deserializer)? != 0)
}
