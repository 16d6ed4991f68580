use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ClassOffering {
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub details: Option<String>,
    pub total_booking: i32,
}

/// Verified trainer teaching a class, matched by skill.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MatchedTrainer {
    pub id: Uuid,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassWithTrainers {
    #[serde(flatten)]
    pub class: ClassOffering,
    #[serde(rename = "matchedTrainers")]
    pub matched_trainers: Vec<MatchedTrainer>,
}

/// One catalog page plus the total count, from which the frontend derives
/// the page count.
#[derive(Debug, Clone, Serialize)]
pub struct ClassesPage {
    pub result: Vec<ClassWithTrainers>,
    pub totalclass: i64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClassName {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClassDto {
    #[validate(length(min = 1))]
    pub name: String,
    pub image: Option<String>,
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_serializes_total_booking_camel_case() {
        let class = ClassOffering {
            id: Uuid::new_v4(),
            name: "Yoga".to_string(),
            image: None,
            details: None,
            total_booking: 7,
        };
        let json = serde_json::to_string(&class).unwrap();
        assert!(json.contains(r#""totalBooking":7"#));
    }

    #[test]
    fn test_classes_page_wire_shape() {
        let page = ClassesPage {
            result: vec![ClassWithTrainers {
                class: ClassOffering {
                    id: Uuid::new_v4(),
                    name: "Spin".to_string(),
                    image: None,
                    details: None,
                    total_booking: 0,
                },
                matched_trainers: vec![],
            }],
            totalclass: 14,
        };
        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains(r#""totalclass":14"#));
        assert!(json.contains(r#""matchedTrainers":[]"#));
        // flattened class fields appear at the top level of each item
        assert!(json.contains(r#""name":"Spin""#));
    }
}
