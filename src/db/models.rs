//! Domain models for the campground store.
//!
//! These are the canonical entity types shared by every repository backend.
//! Backend-specific document mappings (e.g. BSON `_id` handling) live with
//! the backend implementation, not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A campsite with its embedded comment sequence.
///
/// `comments` is an owned, ordered sub-document sequence: comments have no
/// lifecycle independent of their parent campsite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Campsite {
    /// Store-assigned identifier.
    pub id: String,
    /// Unique across all campsites.
    pub name: String,
    pub description: String,
    /// Image reference (URL or asset path).
    pub image: String,
    pub elevation: f64,
    /// Monetary value, never negative.
    pub cost: f64,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Campsite {
    /// Locate an embedded comment by its sub-identifier.
    pub fn comment(&self, comment_id: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }
}

/// An embedded review comment. `author` references a user identity owned by
/// the auth collaborator; it is stored as an opaque id and resolved to public
/// user fields at the HTTP layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    /// Unique within the parent campsite only.
    pub id: String,
    /// Integer rating, 1 through 5.
    pub rating: i32,
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user's favorites list. At most one per user; `campsites` holds campsite
/// ids with no duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Favorite {
    pub id: String,
    /// Owning user identity.
    pub user: String,
    #[serde(default)]
    pub campsites: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Favorite {
    pub fn contains(&self, campsite_id: &str) -> bool {
        self.campsites.iter().any(|c| c == campsite_id)
    }
}

/// Fields required to create a campsite. The store assigns id and timestamps.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCampsite {
    pub name: String,
    pub description: String,
    pub image: String,
    pub elevation: f64,
    pub cost: f64,
    #[serde(default)]
    pub featured: bool,
}

/// Partial campsite update: only fields present are applied (`$set`
/// semantics); unset fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CampsiteUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub elevation: Option<f64>,
    pub cost: Option<f64>,
    pub featured: Option<bool>,
}

impl CampsiteUpdate {
    /// Apply the present fields onto an existing campsite.
    pub fn apply(&self, campsite: &mut Campsite) {
        if let Some(ref name) = self.name {
            campsite.name = name.clone();
        }
        if let Some(ref description) = self.description {
            campsite.description = description.clone();
        }
        if let Some(ref image) = self.image {
            campsite.image = image.clone();
        }
        if let Some(elevation) = self.elevation {
            campsite.elevation = elevation;
        }
        if let Some(cost) = self.cost {
            campsite.cost = cost;
        }
        if let Some(featured) = self.featured {
            campsite.featured = featured;
        }
    }
}

/// Fields for a new embedded comment. `author` is always the verified
/// caller's identity, assigned by the handler, never taken from a payload.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub rating: i32,
    pub text: String,
    pub author: String,
}

/// Partial comment update: `rating` and/or `text`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentPatch {
    pub rating: Option<i32>,
    pub text: Option<String>,
}

impl CommentPatch {
    pub fn apply(&self, comment: &mut Comment) {
        if let Some(rating) = self.rating {
            comment.rating = rating;
        }
        if let Some(ref text) = self.text {
            comment.text = text.clone();
        }
    }
}
