//! Blog entities and community-feed DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub author_image: Option<String>,
    pub post_date: chrono::DateTime<chrono::Utc>,
    pub image: Option<String>,
    pub description: String,
    pub likes: i32,
    pub dislikes: i32,
}

/// Projected listing shape for the public blog strip.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BlogPreview {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub post_date: chrono::DateTime<chrono::Utc>,
    pub image: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogDto {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub author: String,
    pub author_image: Option<String>,
    pub image: Option<String>,
    #[validate(length(min = 1))]
    pub description: String,
}

/// A vote is binary: `"like"` bumps likes, anything else bumps dislikes.
/// There is no undo.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VoteBlogDto {
    pub id: Uuid,
    #[validate(length(min = 1))]
    pub vote: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommunityPage {
    pub blogs: Vec<Blog>,
    #[serde(rename = "totalBlogs")]
    pub total_blogs: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_serializes_camel_case() {
        let blog = Blog {
            id: Uuid::new_v4(),
            title: "Stretching 101".to_string(),
            author: "Coach".to_string(),
            author_image: None,
            post_date: chrono::Utc::now(),
            image: None,
            description: "Warm up first".to_string(),
            likes: 3,
            dislikes: 1,
        };
        let json = serde_json::to_string(&blog).unwrap();
        assert!(json.contains(r#""postDate""#));
        assert!(json.contains(r#""authorImage""#));
    }

    #[test]
    fn test_community_page_total_field_name() {
        let page = CommunityPage {
            blogs: vec![],
            total_blogs: 14,
        };
        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains(r#""totalBlogs":14"#));
    }

    #[test]
    fn test_vote_dto_deserialize() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"id":"{}","vote":"like"}}"#, id);
        let dto: VoteBlogDto = serde_json::from_str(&json).unwrap();
        assert_eq!(dto.id, id);
        assert_eq!(dto.vote, "like");
    }
}
