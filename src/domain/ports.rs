use crate::domain::order::{CreateOrderRequest, PaymentOrder, PaymentResult};
use crate::error::Result;
use async_trait::async_trait;

/// The two-endpoint order backend bracketing a hosted payment.
#[async_trait]
pub trait OrderBackend: Send + Sync {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<PaymentOrder>;
    async fn verify_payment(&self, result: &PaymentResult) -> Result<()>;
}

/// What the flow hands to the gateway when opening the hosted checkout.
#[derive(Debug, Clone)]
pub struct GatewayOptions {
    pub key: String,
    /// Minor currency units, taken from the created order.
    pub amount: u64,
    pub currency: String,
    pub order_id: String,
    pub name: String,
    pub description: String,
    pub prefill: Prefill,
    pub theme_color: String,
}

#[derive(Debug, Clone)]
pub struct Prefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// How the payer's interaction with the hosted UI ended.
///
/// A dismissal is voluntary cancellation, not a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayOutcome {
    Completed(PaymentResult),
    Dismissed,
}

/// The hosted payment widget.
///
/// `open` renders the out-of-process UI and resolves once with the payer's
/// outcome. There is no timeout: a payer can sit on the hosted UI forever.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn open(&self, options: GatewayOptions) -> Result<GatewayOutcome>;
}

/// Page-level side effects the checkout owns while it is open: the gateway's
/// script tag and the background scroll lock.
pub trait PageChrome: Send + Sync {
    fn inject_script(&self);
    fn remove_script(&self);
    fn lock_scroll(&self);
    fn unlock_scroll(&self);
}

pub type OrderBackendBox = Box<dyn OrderBackend>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
