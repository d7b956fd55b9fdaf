//! MongoDB repository implementation.
//!
//! Field-level updates use `$set`; embedded comment mutations load the
//! parent document, mutate the sequence, and write the whole aggregate back
//! with `replace_one`. Favorite reference sets use `$addToSet`/`$pull`.
//! Concurrent writers are last-write-wins at the store, matching the rest of
//! the system: no optimistic concurrency control or retries here.

pub mod models;

use async_trait::async_trait;
use chrono::Utc;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Client, Collection, Database, IndexModel};
use uuid::Uuid;

use self::models::{CampsiteDoc, CommentDoc, FavoriteDoc};
use crate::db::models::{
    Campsite, CampsiteUpdate, CommentPatch, Favorite, NewCampsite, NewComment,
};
use crate::db::repository::{
    CampsiteRepository, FavoriteRepository, FullRepository, RepositoryError, RepositoryResult,
};

/// Connection settings for the MongoDB backend.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl MongoConfig {
    /// Read `MONGODB_URL` and `MONGODB_DB` from the environment.
    pub fn from_env() -> RepositoryResult<Self> {
        let uri = std::env::var("MONGODB_URL").map_err(|_| {
            RepositoryError::configuration("MONGODB_URL is required for the mongo backend")
        })?;
        let database =
            std::env::var("MONGODB_DB").unwrap_or_else(|_| "campground".to_string());
        Ok(Self { uri, database })
    }
}

/// Repository backed by a MongoDB database.
pub struct MongoRepository {
    db: Database,
}

impl MongoRepository {
    /// Connect and ensure the collection indexes exist.
    pub async fn connect(config: &MongoConfig) -> RepositoryResult<Self> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;
        let repo = Self {
            db: client.database(&config.database),
        };
        repo.ensure_indexes().await?;
        Ok(repo)
    }

    fn campsites(&self) -> Collection<CampsiteDoc> {
        self.db.collection("campsites")
    }

    fn favorites(&self) -> Collection<FavoriteDoc> {
        self.db.collection("favorites")
    }

    fn next_id() -> String {
        Uuid::new_v4().simple().to_string()
    }

    /// Unique indexes back the `name` and one-favorite-per-user invariants
    /// even when two writers race past the pre-insert checks.
    async fn ensure_indexes(&self) -> RepositoryResult<()> {
        let unique = |keys: Document| {
            IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder().unique(true).build())
                .build()
        };
        self.campsites()
            .create_index(unique(doc! { "name": 1 }))
            .await
            .map_err(map_err)?;
        self.favorites()
            .create_index(unique(doc! { "user": 1 }))
            .await
            .map_err(map_err)?;
        Ok(())
    }

    async fn fetch_campsite_doc(&self, id: &str) -> RepositoryResult<Option<CampsiteDoc>> {
        self.campsites()
            .find_one(doc! { "_id": id })
            .await
            .map_err(map_err)
    }

    /// Aggregate write-back: persist a mutated campsite document whole.
    async fn save_campsite_doc(&self, doc: CampsiteDoc) -> RepositoryResult<Campsite> {
        let id = doc.id.clone();
        self.campsites()
            .replace_one(doc! { "_id": id.as_str() }, &doc)
            .await
            .map_err(map_err)?;
        Ok(doc.into())
    }
}

fn map_err(e: mongodb::error::Error) -> RepositoryError {
    let message = e.to_string();
    // Duplicate key violations surface the unique-index invariants.
    if message.contains("E11000") {
        RepositoryError::conflict(message)
    } else {
        RepositoryError::query(message)
    }
}

fn validate_cost(cost: f64) -> RepositoryResult<()> {
    if cost < 0.0 {
        return Err(RepositoryError::validation(format!(
            "cost must be non-negative, got {cost}"
        )));
    }
    Ok(())
}

fn validate_rating(rating: i32) -> RepositoryResult<()> {
    if !(1..=5).contains(&rating) {
        return Err(RepositoryError::validation(format!(
            "rating must be between 1 and 5, got {rating}"
        )));
    }
    Ok(())
}

#[async_trait]
impl CampsiteRepository for MongoRepository {
    async fn list_campsites(&self) -> RepositoryResult<Vec<Campsite>> {
        let cursor = self.campsites().find(doc! {}).await.map_err(map_err)?;
        let docs: Vec<CampsiteDoc> = cursor.try_collect().await.map_err(map_err)?;
        Ok(docs.into_iter().map(Into::into).collect())
    }

    async fn create_campsite(&self, new: NewCampsite) -> RepositoryResult<Campsite> {
        validate_cost(new.cost)?;
        if self
            .campsites()
            .find_one(doc! { "name": new.name.as_str() })
            .await
            .map_err(map_err)?
            .is_some()
        {
            return Err(RepositoryError::conflict(format!(
                "campsite name already in use: {}",
                new.name
            )));
        }
        let now = Utc::now();
        let doc = CampsiteDoc {
            id: Self::next_id(),
            name: new.name,
            description: new.description,
            image: new.image,
            elevation: new.elevation,
            cost: new.cost,
            featured: new.featured,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.campsites().insert_one(&doc).await.map_err(map_err)?;
        Ok(doc.into())
    }

    async fn delete_all_campsites(&self) -> RepositoryResult<u64> {
        let result = self
            .campsites()
            .delete_many(doc! {})
            .await
            .map_err(map_err)?;
        Ok(result.deleted_count)
    }

    async fn fetch_campsite(&self, id: &str) -> RepositoryResult<Option<Campsite>> {
        Ok(self.fetch_campsite_doc(id).await?.map(Into::into))
    }

    async fn update_campsite(
        &self,
        id: &str,
        update: CampsiteUpdate,
    ) -> RepositoryResult<Campsite> {
        if let Some(cost) = update.cost {
            validate_cost(cost)?;
        }
        let mut set = doc! { "updated_at": Utc::now().to_rfc3339() };
        if let Some(ref name) = update.name {
            set.insert("name", name.as_str());
        }
        if let Some(ref description) = update.description {
            set.insert("description", description.as_str());
        }
        if let Some(ref image) = update.image {
            set.insert("image", image.as_str());
        }
        if let Some(elevation) = update.elevation {
            set.insert("elevation", elevation);
        }
        if let Some(cost) = update.cost {
            set.insert("cost", cost);
        }
        if let Some(featured) = update.featured {
            set.insert("featured", featured);
        }
        let updated = self
            .campsites()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_err)?
            .ok_or_else(|| RepositoryError::not_found("Campsite", id))?;
        Ok(updated.into())
    }

    async fn delete_campsite(&self, id: &str) -> RepositoryResult<Campsite> {
        let deleted = self
            .campsites()
            .find_one_and_delete(doc! { "_id": id })
            .await
            .map_err(map_err)?
            .ok_or_else(|| RepositoryError::not_found("Campsite", id))?;
        Ok(deleted.into())
    }

    async fn add_comment(
        &self,
        campsite_id: &str,
        new: NewComment,
    ) -> RepositoryResult<Campsite> {
        validate_rating(new.rating)?;
        let mut doc = self
            .fetch_campsite_doc(campsite_id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Campsite", campsite_id))?;
        let now = Utc::now();
        doc.comments.push(CommentDoc {
            id: Self::next_id(),
            rating: new.rating,
            text: new.text,
            author: new.author,
            created_at: now,
            updated_at: now,
        });
        doc.updated_at = now;
        self.save_campsite_doc(doc).await
    }

    async fn update_comment(
        &self,
        campsite_id: &str,
        comment_id: &str,
        patch: CommentPatch,
    ) -> RepositoryResult<Campsite> {
        if let Some(rating) = patch.rating {
            validate_rating(rating)?;
        }
        let mut doc = self
            .fetch_campsite_doc(campsite_id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Campsite", campsite_id))?;
        let now = Utc::now();
        let comment = doc
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| RepositoryError::not_found("Comment", comment_id))?;
        if let Some(rating) = patch.rating {
            comment.rating = rating;
        }
        if let Some(ref text) = patch.text {
            comment.text = text.clone();
        }
        comment.updated_at = now;
        doc.updated_at = now;
        self.save_campsite_doc(doc).await
    }

    async fn remove_comment(
        &self,
        campsite_id: &str,
        comment_id: &str,
    ) -> RepositoryResult<Campsite> {
        let mut doc = self
            .fetch_campsite_doc(campsite_id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Campsite", campsite_id))?;
        let position = doc
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or_else(|| RepositoryError::not_found("Comment", comment_id))?;
        doc.comments.remove(position);
        doc.updated_at = Utc::now();
        self.save_campsite_doc(doc).await
    }

    async fn clear_comments(&self, campsite_id: &str) -> RepositoryResult<Campsite> {
        let mut doc = self
            .fetch_campsite_doc(campsite_id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Campsite", campsite_id))?;
        // Remove back-to-front so earlier removals cannot shift later indices.
        for index in (0..doc.comments.len()).rev() {
            doc.comments.remove(index);
        }
        doc.updated_at = Utc::now();
        self.save_campsite_doc(doc).await
    }
}

#[async_trait]
impl FavoriteRepository for MongoRepository {
    async fn fetch_favorite(&self, user_id: &str) -> RepositoryResult<Option<Favorite>> {
        Ok(self
            .favorites()
            .find_one(doc! { "user": user_id })
            .await
            .map_err(map_err)?
            .map(Into::into))
    }

    async fn add_favorites(
        &self,
        user_id: &str,
        campsite_ids: &[String],
    ) -> RepositoryResult<Favorite> {
        let now = Utc::now();
        if let Some(existing) = self
            .favorites()
            .find_one(doc! { "user": user_id })
            .await
            .map_err(map_err)?
        {
            let updated = self
                .favorites()
                .find_one_and_update(
                    doc! { "_id": existing.id.as_str() },
                    doc! {
                        "$addToSet": { "campsites": { "$each": campsite_ids.to_vec() } },
                        "$set": { "updated_at": now.to_rfc3339() },
                    },
                )
                .return_document(ReturnDocument::After)
                .await
                .map_err(map_err)?
                .ok_or_else(|| RepositoryError::not_found("Favorite", user_id))?;
            return Ok(updated.into());
        }
        let mut seeded: Vec<String> = Vec::new();
        for id in campsite_ids {
            if !seeded.iter().any(|s| s == id) {
                seeded.push(id.clone());
            }
        }
        let doc = FavoriteDoc {
            id: Self::next_id(),
            user: user_id.to_string(),
            campsites: seeded,
            created_at: now,
            updated_at: now,
        };
        self.favorites().insert_one(&doc).await.map_err(map_err)?;
        Ok(doc.into())
    }

    async fn remove_favorite(
        &self,
        user_id: &str,
        campsite_id: &str,
    ) -> RepositoryResult<Favorite> {
        let updated = self
            .favorites()
            .find_one_and_update(
                doc! { "user": user_id },
                doc! {
                    "$pull": { "campsites": campsite_id },
                    "$set": { "updated_at": Utc::now().to_rfc3339() },
                },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_err)?
            .ok_or_else(|| RepositoryError::not_found("Favorite", user_id))?;
        Ok(updated.into())
    }

    async fn delete_favorite(&self, user_id: &str) -> RepositoryResult<Option<Favorite>> {
        Ok(self
            .favorites()
            .find_one_and_delete(doc! { "user": user_id })
            .await
            .map_err(map_err)?
            .map(Into::into))
    }
}

#[async_trait]
impl FullRepository for MongoRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;
        Ok(true)
    }
}
