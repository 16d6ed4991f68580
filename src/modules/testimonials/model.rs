use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub review: String,
    pub rating: i32,
    pub image: Option<String>,
}
