//! The `Animal` record family as published by the upstream catalog.
//!
//! These types are "UI safe" - Clone + Debug + Serialize + Deserialize with
//! no infrastructure dependencies. Records are never mutated after
//! deserialization; the browsing client only clones them (for example into
//! the favorites list).

use serde::{Deserialize, Serialize};

/// An adoptable animal.
///
/// The relay forwards these records unchanged. Upstream fields this system
/// does not interpret land in `extra`, so they survive the typed round-trip
/// through the relay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    /// Unique identifier assigned by the upstream catalog.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Species (e.g. "Dog", "Cat").
    pub species: String,
    /// Age category (e.g. "Baby", "Young", "Adult", "Senior").
    pub age: String,
    /// Gender (e.g. "Male", "Female").
    pub gender: String,
    /// Breed information, when published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breeds: Option<Breeds>,
    /// Contact details of the listing organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    /// Photo variants, ordered by the upstream catalog.
    #[serde(default)]
    pub photos: Vec<Photo>,
    /// Upstream fields this system does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Animal {
    /// The first photo of the record, if any.
    pub fn primary_photo(&self) -> Option<&Photo> {
        self.photos.first()
    }
}

/// Breed information for an animal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Breeds {
    /// Primary breed name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Secondary breed name for mixed breeds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Whether the animal is a mixed breed.
    #[serde(default)]
    pub mixed: bool,
}

/// Contact details of the organization listing an animal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Postal address of a listing organization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// One photo in several size variants.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
}

impl Photo {
    /// The best variant for a card-sized rendering: medium first, then the
    /// nearest fallback.
    pub fn card_url(&self) -> Option<&str> {
        self.medium
            .as_deref()
            .or(self.small.as_deref())
            .or(self.large.as_deref())
            .or(self.full.as_deref())
    }
}
