//! Slot entities. Rows are stored flat; the wire shape keeps the nested
//! `trainer` / `bookedBy` objects the frontend consumes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotTrainer {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookedBy {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct SlotRow {
    pub id: Uuid,
    pub trainer_id: Uuid,
    pub trainer_email: String,
    pub trainer_name: Option<String>,
    pub slot_name: String,
    pub slot_time: String,
    pub class_name: String,
    pub status: String,
    pub booked_by_name: Option<String>,
    pub booked_by_email: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: Uuid,
    pub trainer: SlotTrainer,
    pub slot_name: String,
    pub slot_time: String,
    pub class_name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booked_by: Option<BookedBy>,
}

impl From<SlotRow> for Slot {
    fn from(row: SlotRow) -> Self {
        let booked_by = match (row.booked_by_name, row.booked_by_email) {
            (Some(name), Some(email)) => Some(BookedBy { name, email }),
            _ => None,
        };

        Slot {
            id: row.id,
            trainer: SlotTrainer {
                id: row.trainer_id,
                email: row.trainer_email,
                name: row.trainer_name,
            },
            slot_name: row.slot_name,
            slot_time: row.slot_time,
            class_name: row.class_name,
            status: row.status,
            booked_by,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlotDto {
    pub trainer: SlotTrainer,
    #[validate(length(min = 1))]
    pub slot_name: String,
    #[validate(length(min = 1))]
    pub slot_time: String,
    #[validate(length(min = 1))]
    pub class_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(status: &str, booked: bool) -> SlotRow {
        SlotRow {
            id: Uuid::new_v4(),
            trainer_id: Uuid::new_v4(),
            trainer_email: "t@example.com".to_string(),
            trainer_name: Some("Coach".to_string()),
            slot_name: "Morning".to_string(),
            slot_time: "06:00".to_string(),
            class_name: "Yoga".to_string(),
            status: status.to_string(),
            booked_by_name: booked.then(|| "Member".to_string()),
            booked_by_email: booked.then(|| "m@example.com".to_string()),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_available_slot_has_no_booked_by() {
        let slot = Slot::from(sample_row("available", false));
        assert!(slot.booked_by.is_none());
        let json = serde_json::to_string(&slot).unwrap();
        assert!(!json.contains("bookedBy"));
    }

    #[test]
    fn test_booked_slot_serializes_nested_booked_by() {
        let slot = Slot::from(sample_row("booked", true));
        let json = serde_json::to_string(&slot).unwrap();
        assert!(json.contains(r#""bookedBy":{"name":"Member","email":"m@example.com"}"#));
        assert!(json.contains(r#""trainer":{"#));
    }

    #[test]
    fn test_create_slot_dto_deserialize() {
        let trainer_id = Uuid::new_v4();
        let json = format!(
            r#"{{"trainer":{{"id":"{}","email":"t@example.com"}},
                 "slotName":"Evening","slotTime":"18:00","className":"Spin"}}"#,
            trainer_id
        );
        let dto: CreateSlotDto = serde_json::from_str(&json).unwrap();
        assert_eq!(dto.trainer.id, trainer_id);
        assert_eq!(dto.slot_name, "Evening");
    }
}
