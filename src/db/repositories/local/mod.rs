//! In-memory repository for unit testing and local development.
//!
//! Documents live in `parking_lot`-guarded vectors; insertion order is the
//! collection's natural query order. No guard is ever held across an await
//! point.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::db::models::{
    Campsite, CampsiteUpdate, Comment, CommentPatch, Favorite, NewCampsite, NewComment,
};
use crate::db::repository::{
    CampsiteRepository, FavoriteRepository, FullRepository, RepositoryError, RepositoryResult,
};

/// In-memory implementation of the repository traits.
#[derive(Default)]
pub struct LocalRepository {
    campsites: RwLock<Vec<Campsite>>,
    favorites: RwLock<Vec<Favorite>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id() -> String {
        Uuid::new_v4().simple().to_string()
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

fn duplicate_name(campsites: &[Campsite], name: &str, skip_id: Option<&str>) -> bool {
    campsites
        .iter()
        .any(|c| c.name == name && Some(c.id.as_str()) != skip_id)
}

#[async_trait]
impl CampsiteRepository for LocalRepository {
    async fn list_campsites(&self) -> RepositoryResult<Vec<Campsite>> {
        Ok(self.campsites.read().clone())
    }

    async fn create_campsite(&self, new: NewCampsite) -> RepositoryResult<Campsite> {
        validate_cost(new.cost)?;
        let mut campsites = self.campsites.write();
        if duplicate_name(&campsites, &new.name, None) {
            return Err(RepositoryError::conflict(format!(
                "campsite name already in use: {}",
                new.name
            )));
        }
        let now = Utc::now();
        let campsite = Campsite {
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
        campsites.push(campsite.clone());
        Ok(campsite)
    }

    async fn delete_all_campsites(&self) -> RepositoryResult<u64> {
        let mut campsites = self.campsites.write();
        let removed = campsites.len() as u64;
        campsites.clear();
        Ok(removed)
    }

    async fn fetch_campsite(&self, id: &str) -> RepositoryResult<Option<Campsite>> {
        Ok(self.campsites.read().iter().find(|c| c.id == id).cloned())
    }

    async fn update_campsite(
        &self,
        id: &str,
        update: CampsiteUpdate,
    ) -> RepositoryResult<Campsite> {
        if let Some(cost) = update.cost {
            validate_cost(cost)?;
        }
        let mut campsites = self.campsites.write();
        if let Some(ref name) = update.name {
            if duplicate_name(&campsites, name, Some(id)) {
                return Err(RepositoryError::conflict(format!(
                    "campsite name already in use: {name}"
                )));
            }
        }
        let campsite = campsites
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| RepositoryError::not_found("Campsite", id))?;
        update.apply(campsite);
        campsite.updated_at = Utc::now();
        Ok(campsite.clone())
    }

    async fn delete_campsite(&self, id: &str) -> RepositoryResult<Campsite> {
        let mut campsites = self.campsites.write();
        let position = campsites
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| RepositoryError::not_found("Campsite", id))?;
        Ok(campsites.remove(position))
    }

    async fn add_comment(
        &self,
        campsite_id: &str,
        new: NewComment,
    ) -> RepositoryResult<Campsite> {
        validate_rating(new.rating)?;
        let mut campsites = self.campsites.write();
        let campsite = campsites
            .iter_mut()
            .find(|c| c.id == campsite_id)
            .ok_or_else(|| RepositoryError::not_found("Campsite", campsite_id))?;
        let now = Utc::now();
        campsite.comments.push(Comment {
            id: Self::next_id(),
            rating: new.rating,
            text: new.text,
            author: new.author,
            created_at: now,
            updated_at: now,
        });
        campsite.updated_at = now;
        Ok(campsite.clone())
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
        let mut campsites = self.campsites.write();
        let campsite = campsites
            .iter_mut()
            .find(|c| c.id == campsite_id)
            .ok_or_else(|| RepositoryError::not_found("Campsite", campsite_id))?;
        let now = Utc::now();
        let comment = campsite
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| RepositoryError::not_found("Comment", comment_id))?;
        patch.apply(comment);
        comment.updated_at = now;
        campsite.updated_at = now;
        Ok(campsite.clone())
    }

    async fn remove_comment(
        &self,
        campsite_id: &str,
        comment_id: &str,
    ) -> RepositoryResult<Campsite> {
        let mut campsites = self.campsites.write();
        let campsite = campsites
            .iter_mut()
            .find(|c| c.id == campsite_id)
            .ok_or_else(|| RepositoryError::not_found("Campsite", campsite_id))?;
        let position = campsite
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or_else(|| RepositoryError::not_found("Comment", comment_id))?;
        campsite.comments.remove(position);
        campsite.updated_at = Utc::now();
        Ok(campsite.clone())
    }

    async fn clear_comments(&self, campsite_id: &str) -> RepositoryResult<Campsite> {
        let mut campsites = self.campsites.write();
        let campsite = campsites
            .iter_mut()
            .find(|c| c.id == campsite_id)
            .ok_or_else(|| RepositoryError::not_found("Campsite", campsite_id))?;
        // Remove back-to-front so earlier removals cannot shift later indices.
        for index in (0..campsite.comments.len()).rev() {
            campsite.comments.remove(index);
        }
        campsite.updated_at = Utc::now();
        Ok(campsite.clone())
    }
}

#[async_trait]
impl FavoriteRepository for LocalRepository {
    async fn fetch_favorite(&self, user_id: &str) -> RepositoryResult<Option<Favorite>> {
        Ok(self
            .favorites
            .read()
            .iter()
            .find(|f| f.user == user_id)
            .cloned())
    }

    async fn add_favorites(
        &self,
        user_id: &str,
        campsite_ids: &[String],
    ) -> RepositoryResult<Favorite> {
        let mut favorites = self.favorites.write();
        let now = Utc::now();
        if let Some(favorite) = favorites.iter_mut().find(|f| f.user == user_id) {
            for id in campsite_ids {
                if !favorite.contains(id) {
                    favorite.campsites.push(id.clone());
                }
            }
            favorite.updated_at = now;
            return Ok(favorite.clone());
        }
        let mut seeded: Vec<String> = Vec::new();
        for id in campsite_ids {
            if !seeded.iter().any(|s| s == id) {
                seeded.push(id.clone());
            }
        }
        let favorite = Favorite {
            id: Self::next_id(),
            user: user_id.to_string(),
            campsites: seeded,
            created_at: now,
            updated_at: now,
        };
        favorites.push(favorite.clone());
        Ok(favorite)
    }

    async fn remove_favorite(
        &self,
        user_id: &str,
        campsite_id: &str,
    ) -> RepositoryResult<Favorite> {
        let mut favorites = self.favorites.write();
        let favorite = favorites
            .iter_mut()
            .find(|f| f.user == user_id)
            .ok_or_else(|| RepositoryError::not_found("Favorite", user_id))?;
        favorite.campsites.retain(|c| c != campsite_id);
        favorite.updated_at = Utc::now();
        Ok(favorite.clone())
    }

    async fn delete_favorite(&self, user_id: &str) -> RepositoryResult<Option<Favorite>> {
        let mut favorites = self.favorites.write();
        match favorites.iter().position(|f| f.user == user_id) {
            Some(position) => Ok(Some(favorites.remove(position))),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl FullRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_campsite(name: &str) -> NewCampsite {
        NewCampsite {
            name: name.to_string(),
            description: "desc".to_string(),
            image: "img.png".to_string(),
            elevation: 100.0,
            cost: 10.0,
            featured: false,
        }
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name() {
        let repo = LocalRepository::new();
        repo.create_campsite(new_campsite("Pine Lake")).await.unwrap();
        let err = repo
            .create_campsite(new_campsite("Pine Lake"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict { .. }));
    }

    #[tokio::test]
    async fn create_rejects_negative_cost() {
        let repo = LocalRepository::new();
        let mut new = new_campsite("Pine Lake");
        new.cost = -1.0;
        let err = repo.create_campsite(new).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Validation { .. }));
    }

    #[tokio::test]
    async fn add_comment_rejects_out_of_range_rating() {
        let repo = LocalRepository::new();
        let campsite = repo.create_campsite(new_campsite("Pine Lake")).await.unwrap();
        let err = repo
            .add_comment(
                &campsite.id,
                NewComment {
                    rating: 6,
                    text: "too enthusiastic".to_string(),
                    author: "u1".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Validation { .. }));
    }

    #[tokio::test]
    async fn clear_comments_keeps_parent() {
        let repo = LocalRepository::new();
        let campsite = repo.create_campsite(new_campsite("Pine Lake")).await.unwrap();
        for text in ["one", "two", "three"] {
            repo.add_comment(
                &campsite.id,
                NewComment {
                    rating: 3,
                    text: text.to_string(),
                    author: "u1".to_string(),
                },
            )
            .await
            .unwrap();
        }
        let cleared = repo.clear_comments(&campsite.id).await.unwrap();
        assert!(cleared.comments.is_empty());
        assert!(repo.fetch_campsite(&campsite.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn favorites_deduplicate_on_add() {
        let repo = LocalRepository::new();
        let favorite = repo
            .add_favorites("u1", &["a".to_string(), "b".to_string(), "a".to_string()])
            .await
            .unwrap();
        assert_eq!(favorite.campsites, vec!["a", "b"]);
        let again = repo.add_favorites("u1", &["a".to_string()]).await.unwrap();
        assert_eq!(again.campsites, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn remove_favorite_without_document_is_not_found() {
        let repo = LocalRepository::new();
        let err = repo.remove_favorite("u1", "a").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }
}
