//! BSON document mappings for the MongoDB backend.
//!
//! The driver persists these document types; domain models stay free of
//! `_id` naming and other store-specific concerns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::models::{Campsite, Comment, Favorite};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampsiteDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub elevation: f64,
    pub cost: f64,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub comments: Vec<CommentDoc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub rating: i32,
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: String,
    #[serde(default)]
    pub campsites: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CampsiteDoc> for Campsite {
    fn from(doc: CampsiteDoc) -> Self {
        Campsite {
            id: doc.id,
            name: doc.name,
            description: doc.description,
            image: doc.image,
            elevation: doc.elevation,
            cost: doc.cost,
            featured: doc.featured,
            comments: doc.comments.into_iter().map(Into::into).collect(),
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

impl From<Campsite> for CampsiteDoc {
    fn from(campsite: Campsite) -> Self {
        CampsiteDoc {
            id: campsite.id,
            name: campsite.name,
            description: campsite.description,
            image: campsite.image,
            elevation: campsite.elevation,
            cost: campsite.cost,
            featured: campsite.featured,
            comments: campsite.comments.into_iter().map(Into::into).collect(),
            created_at: campsite.created_at,
            updated_at: campsite.updated_at,
        }
    }
}

impl From<CommentDoc> for Comment {
    fn from(doc: CommentDoc) -> Self {
        Comment {
            id: doc.id,
            rating: doc.rating,
            text: doc.text,
            author: doc.author,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

impl From<Comment> for CommentDoc {
    fn from(comment: Comment) -> Self {
        CommentDoc {
            id: comment.id,
            rating: comment.rating,
            text: comment.text,
            author: comment.author,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

impl From<FavoriteDoc> for Favorite {
    fn from(doc: FavoriteDoc) -> Self {
        Favorite {
            id: doc.id,
            user: doc.user,
            campsites: doc.campsites,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

impl From<Favorite> for FavoriteDoc {
    fn from(favorite: Favorite) -> Self {
        FavoriteDoc {
            id: favorite.id,
            user: favorite.user,
            campsites: favorite.campsites,
            created_at: favorite.created_at,
            updated_at: favorite.updated_at,
        }
    }
}
