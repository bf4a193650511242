use serde::{Deserialize, Serialize};

/// Catalog identifiers arrive as integers from the places table, but older
/// clients send them as strings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum PlaceId {
    Numeric(i64),
    Text(String),
}

/// A destination record as returned by the place catalog.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Destination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PlaceId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub place_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_season: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transportation: Option<String>,
}

impl Destination {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, place_type: impl Into<String>) -> Self {
        self.place_type = Some(place_type.into());
        self
    }

    pub fn with_activities(mut self, activities: impl Into<String>) -> Self {
        self.activities = Some(activities.into());
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty_level = Some(difficulty.into());
        self
    }

    /// Comma separated activities, trimmed, empties dropped
    pub fn activity_list(&self) -> Vec<String> {
        split_comma_list(self.activities.as_deref())
    }

    /// Comma separated tags, trimmed, empties dropped
    pub fn tag_list(&self) -> Vec<String> {
        split_comma_list(self.tags.as_deref())
    }

    /// Difficulty level, ignoring blank values from the catalog
    pub fn difficulty(&self) -> Option<&str> {
        self.difficulty_level
            .as_deref()
            .map(str::trim)
            .filter(|level| !level.is_empty())
    }
}

fn split_comma_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|text| {
        text.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
