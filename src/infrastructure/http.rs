use crate::domain::order::{CreateOrderRequest, PaymentOrder, PaymentResult};
use crate::domain::ports::OrderBackend;
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Order backend reached over HTTP, matching the site's API routes.
///
/// Any transport failure or non-2xx status is reported as a failure of the
/// phase it happened in, so the flow can surface the right message and let
/// the donor retry.
pub struct HttpOrderBackend {
    client: Client,
    base_url: String,
}

impl HttpOrderBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl OrderBackend for HttpOrderBackend {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<PaymentOrder> {
        let url = format!("{}/api/create-order", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| CheckoutError::OrderCreation(e.to_string()))?;
        if !response.status().is_success() {
            return Err(CheckoutError::OrderCreation(format!(
                "unexpected status {}",
                response.status()
            )));
        }
        response
            .json::<PaymentOrder>()
            .await
            .map_err(|e| CheckoutError::OrderCreation(e.to_string()))
    }

    async fn verify_payment(&self, result: &PaymentResult) -> Result<()> {
        let url = format!("{}/api/verify-payment", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(result)
            .send()
            .await
            .map_err(|e| CheckoutError::Verification(e.to_string()))?;
        if !response.status().is_success() {
            return Err(CheckoutError::Verification(format!(
                "unexpected status {}",
                response.status()
            )));
        }
        Ok(())
    }
}
