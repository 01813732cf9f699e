use serde::{Deserialize, Serialize};

/// A movie in the learning catalog.
///
/// Identifiers are opaque strings; the catalog is authored data, not
/// database rows, so there is no generated-id scheme here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub language: String,
    /// Beginner, Intermediate or Advanced. Kept as an open string: the
    /// authored data treats it as display text, not a closed set.
    pub difficulty: String,
    pub rating: f64,
    pub duration: String,
    pub scenes: String,
    /// Percent watched, 0..=100.
    pub progress: u8,
    pub thumbnail: String,
    pub total_lessons: u32,
    pub completed_lessons: u32,
}
