use std::env;

#[derive(Clone, Debug)]
pub struct StripeConfig {
    pub secret_key: String,
    pub api_base: String,
}

impl StripeConfig {
    pub fn from_env() -> Self {
        Self {
            secret_key: env::var("STRIPE_SK").unwrap_or_default(),
            api_base: env::var("STRIPE_API_BASE")
                .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
        }
    }
}
