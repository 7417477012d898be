use std::fmt;

/// Stable unique identifier of a spot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpotId(String);

impl SpotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A geotagged place shared by a user.
///
/// Flows through the pool and the deck by value; the same spot may exist in
/// both at once, and neither side ever aliases the other's copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    pub id: SpotId,
    pub title: String,
    pub image_url: String,
    pub lat: f64,
    pub lng: f64,
    pub place_name: String,
}

/// Opaque continuation token for the upstream listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
