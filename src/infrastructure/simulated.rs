use crate::domain::order::{CreateOrderRequest, PaymentOrder, PaymentResult};
use crate::domain::ports::{GatewayOptions, GatewayOutcome, OrderBackend, PaymentGateway};
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use sha2::Sha256;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::info;

type HmacSha256 = Hmac<Sha256>;

/// The signature the provider attaches to a completed payment:
/// HMAC-SHA256 over `"{order_id}|{payment_id}"`, hex-encoded.
pub fn sign(secret: &str, order_id: &str, payment_id: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// An order backend that issues and verifies orders entirely in memory,
/// signing with a shared secret so a paired [`SimulatedGateway`] passes
/// verification and an unpaired one does not. Lets the whole checkout run
/// offline.
#[derive(Clone)]
pub struct InMemoryOrderBackend {
    secret: String,
    orders: Arc<RwLock<HashMap<String, u64>>>,
    next_id: Arc<AtomicU64>,
}

impl InMemoryOrderBackend {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            orders: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait]
impl OrderBackend for InMemoryOrderBackend {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<PaymentOrder> {
        let amount_minor = (request.amount * dec!(100))
            .to_u64()
            .ok_or_else(|| CheckoutError::OrderCreation("amount out of range".to_string()))?;
        let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let order_id = format!("order_sim{n:06}");
        self.orders.write().await.insert(order_id.clone(), amount_minor);
        info!(order_id = %order_id, amount = amount_minor, "issued simulated order");
        Ok(PaymentOrder {
            order_id,
            amount: amount_minor,
            currency: "INR".to_string(),
        })
    }

    async fn verify_payment(&self, result: &PaymentResult) -> Result<()> {
        let orders = self.orders.read().await;
        if !orders.contains_key(&result.razorpay_order_id) {
            return Err(CheckoutError::Verification("unknown order id".to_string()));
        }
        let expected = sign(
            &self.secret,
            &result.razorpay_order_id,
            &result.razorpay_payment_id,
        );
        if expected != result.razorpay_signature {
            return Err(CheckoutError::Verification("signature mismatch".to_string()));
        }
        Ok(())
    }
}

/// A gateway standing in for the hosted checkout widget. Completes the
/// payment with a signed result, or reports a dismissal when configured to.
#[derive(Clone)]
pub struct SimulatedGateway {
    secret: String,
    dismiss: bool,
    next_id: Arc<AtomicU64>,
}

impl SimulatedGateway {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            dismiss: false,
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Makes `open` behave like the payer closing the hosted UI unpaid.
    pub fn with_dismissal(mut self) -> Self {
        self.dismiss = true;
        self
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn open(&self, options: GatewayOptions) -> Result<GatewayOutcome> {
        info!(
            order_id = %options.order_id,
            amount = options.amount,
            "opening simulated hosted checkout"
        );
        if self.dismiss {
            return Ok(GatewayOutcome::Dismissed);
        }
        let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let payment_id = format!("pay_sim{n:06}");
        let signature = sign(&self.secret, &options.order_id, &payment_id);
        Ok(GatewayOutcome::Completed(PaymentResult {
            razorpay_order_id: options.order_id,
            razorpay_payment_id: payment_id,
            razorpay_signature: signature,
        }))
    }
}
