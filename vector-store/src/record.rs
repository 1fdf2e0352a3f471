//! Core data models used by the library.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::VectorStoreError;

/// Arbitrary JSON document stored next to a vector.
pub type Payload = Map<String, Value>;

/// Distance function used for the vector space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distance {
    /// Cosine similarity.
    Cosine,
    /// Dot product.
    Dot,
    /// Euclidean distance (L2).
    Euclid,
}

impl Distance {
    /// Every accepted label, in the order reported to callers.
    pub const LABELS: [&'static str; 3] = ["cosine", "dot", "euclid"];

    pub fn label(self) -> &'static str {
        match self {
            Distance::Cosine => "cosine",
            Distance::Dot => "dot",
            Distance::Euclid => "euclid",
        }
    }
}

impl FromStr for Distance {
    type Err = VectorStoreError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "cosine" => Ok(Distance::Cosine),
            "dot" => Ok(Distance::Dot),
            "euclid" => Ok(Distance::Euclid),
            other => Err(VectorStoreError::UnsupportedDistance {
                label: other.to_string(),
                expected: Self::LABELS,
            }),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Point identifier: unsigned integer or string (Qdrant expects UUIDs for strings).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointKey {
    Num(u64),
    Text(String),
}

impl fmt::Display for PointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointKey::Num(n) => write!(f, "{n}"),
            PointKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for PointKey {
    fn from(n: u64) -> Self {
        PointKey::Num(n)
    }
}

impl From<String> for PointKey {
    fn from(s: String) -> Self {
        PointKey::Text(s)
    }
}

impl From<&str> for PointKey {
    fn from(s: &str) -> Self {
        PointKey::Text(s.to_string())
    }
}

/// Shape of a collection: dimensionality and metric are fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionSpec {
    pub name: String,
    pub vector_size: u64,
    pub distance: Distance,
}

/// A single point to write.
#[derive(Clone, Debug, PartialEq)]
pub struct PointRecord {
    pub id: PointKey,
    pub vector: Vec<f32>,
    pub payload: Payload,
}

/// Vector search parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchQuery {
    pub collection: String,
    pub vector: Vec<f32>,
    pub limit: u64,
    pub with_payload: bool,
}

/// A single ranked hit as returned by the database.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredHit {
    pub id: PointKey,
    pub score: f32,
    /// `None` when the payload was not requested.
    pub payload: Option<Payload>,
}
