use anyhow::Context;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use super::model::ConfirmBookingDto;
use crate::config::stripe::StripeConfig;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
struct StripeIntent {
    client_secret: String,
}

pub struct PaymentService;

impl PaymentService {
    /// Record a completed booking. Three writes run in one transaction, in
    /// order: bump the class booking counter, flip the slot from available
    /// to booked, then persist the payment. If the class is unknown the
    /// whole booking rolls back with 404; if the slot was already taken it
    /// rolls back with 409, so a slot can never be sold twice.
    pub async fn confirm_booking(db: &PgPool, dto: ConfirmBookingDto) -> Result<Uuid, AppError> {
        let mut tx = db.begin().await.map_err(AppError::database)?;

        let class_updated = sqlx::query(
            "UPDATE classes SET total_booking = total_booking + 1 WHERE LOWER(name) = LOWER($1)",
        )
        .bind(&dto.class.name)
        .execute(&mut *tx)
        .await
        .context("Failed to increment class booking counter")
        .map_err(AppError::database)?;

        if class_updated.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No class named '{}'",
                dto.class.name
            )));
        }

        let slot_updated = sqlx::query(
            r#"
            UPDATE slots
            SET status = 'booked', booked_by_name = $2, booked_by_email = $3
            WHERE id = $1 AND status = 'available'
            "#,
        )
        .bind(dto.class.slot_id)
        .bind(&dto.user.name)
        .bind(&dto.user.email)
        .execute(&mut *tx)
        .await
        .context("Failed to book slot")
        .map_err(AppError::database)?;

        if slot_updated.rows_affected() == 0 {
            error!(
                slot_id = %dto.class.slot_id,
                email = %dto.user.email,
                "Booking rejected: slot missing or already booked"
            );
            return Err(AppError::conflict(anyhow::anyhow!(
                "Slot {} is not available",
                dto.class.slot_id
            )));
        }

        let payment_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO payments
                (user_name, user_email, class_name, slot_id, trainer_name, amount)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&dto.user.name)
        .bind(&dto.user.email)
        .bind(&dto.class.name)
        .bind(dto.class.slot_id)
        .bind(dto.trainer.as_ref().map(|t| t.name.as_str()))
        .bind(dto.price)
        .fetch_one(&mut *tx)
        .await
        .context("Failed to record payment")
        .map_err(AppError::database)?;

        tx.commit().await.map_err(AppError::database)?;
        Ok(payment_id)
    }

    /// Create a payment intent with the processor and hand back its client
    /// secret. `price` is in major units; the processor wants minor units.
    pub async fn create_intent(
        http: &reqwest::Client,
        stripe: &StripeConfig,
        price: f64,
    ) -> Result<String, AppError> {
        let amount = Self::to_minor_units(price)?;
        let url = format!("{}/v1/payment_intents", stripe.api_base);

        let response = http
            .post(&url)
            .bearer_auth(&stripe.secret_key)
            .form(&[
                ("amount", amount.to_string()),
                ("currency", "usd".to_string()),
                ("automatic_payment_methods[enabled]", "true".to_string()),
            ])
            .send()
            .await
            .context("Payment processor unreachable")
            .map_err(AppError::bad_gateway)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "Payment intent creation rejected");
            return Err(AppError::bad_gateway(anyhow::anyhow!(
                "Payment processor returned {}",
                status
            )));
        }

        let intent: StripeIntent = response
            .json()
            .await
            .context("Malformed payment processor response")
            .map_err(AppError::bad_gateway)?;

        Ok(intent.client_secret)
    }

    /// Convert a major-unit price to integer minor units, rounding to the
    /// nearest cent. Non-positive or non-finite amounts are rejected.
    pub fn to_minor_units(price: f64) -> Result<i64, AppError> {
        if !price.is_finite() || price <= 0.0 {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Invalid payment amount: {}",
                price
            )));
        }
        Ok((price * 100.0).round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_to_minor_units_rounds_to_cents() {
        assert_eq!(PaymentService::to_minor_units(25.0).unwrap(), 2500);
        assert_eq!(PaymentService::to_minor_units(19.99).unwrap(), 1999);
        assert_eq!(PaymentService::to_minor_units(0.005).unwrap(), 1);
    }

    #[test]
    fn test_to_minor_units_rejects_bad_amounts() {
        for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = PaymentService::to_minor_units(price).unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_stripe_intent_parses_client_secret() {
        let body = r#"{"id": "pi_123", "client_secret": "pi_123_secret_abc", "status": "requires_payment_method"}"#;
        let intent: StripeIntent = serde_json::from_str(body).unwrap();
        assert_eq!(intent.client_secret, "pi_123_secret_abc");
    }
}
