//! Payment DTOs. The booking confirmation body mirrors what the checkout
//! frontend posts after the processor accepts the charge.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize)]
pub struct BookingUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingClass {
    /// Class name, matched case-insensitively against the catalog.
    #[serde(rename = "cName")]
    pub name: String,
    /// The slot being booked.
    #[serde(rename = "sId")]
    pub slot_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingTrainer {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmBookingDto {
    pub user: BookingUser,
    pub class: BookingClass,
    pub trainer: Option<BookingTrainer>,
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaymentIntentRequest {
    #[validate(range(min = 0.01))]
    pub price: f64,
}

/// Only the client secret leaves the server; the caller completes the
/// charge client-side with it.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_booking_dto_wire_names() {
        let slot_id = Uuid::new_v4();
        let json = format!(
            r#"{{
                "user": {{"name": "Member", "email": "m@example.com"}},
                "class": {{"cName": "Yoga", "sId": "{}"}},
                "trainer": {{"name": "Coach"}},
                "price": 25.0
            }}"#,
            slot_id
        );
        let dto: ConfirmBookingDto = serde_json::from_str(&json).unwrap();
        assert_eq!(dto.class.name, "Yoga");
        assert_eq!(dto.class.slot_id, slot_id);
        assert_eq!(dto.user.email, "m@example.com");
    }

    #[test]
    fn test_confirm_booking_dto_trainer_optional() {
        let json = format!(
            r#"{{
                "user": {{"name": "Member", "email": "m@example.com"}},
                "class": {{"cName": "Yoga", "sId": "{}"}},
                "price": 25.0
            }}"#,
            Uuid::new_v4()
        );
        let dto: ConfirmBookingDto = serde_json::from_str(&json).unwrap();
        assert!(dto.trainer.is_none());
    }

    #[test]
    fn test_intent_request_rejects_non_positive_price() {
        assert!(PaymentIntentRequest { price: 0.0 }.validate().is_err());
        assert!(PaymentIntentRequest { price: -5.0 }.validate().is_err());
        assert!(PaymentIntentRequest { price: 25.0 }.validate().is_ok());
    }

    #[test]
    fn test_intent_response_field_name() {
        let response = PaymentIntentResponse {
            client_secret: "pi_secret".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""clientSecret":"pi_secret""#));
    }
}
