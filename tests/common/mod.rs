use async_trait::async_trait;
use mandir_checkout::domain::order::{CreateOrderRequest, PaymentOrder, PaymentResult};
use mandir_checkout::domain::ports::{
    GatewayOptions, GatewayOutcome, OrderBackend, PageChrome, PaymentGateway,
};
use mandir_checkout::error::{CheckoutError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Mutex};

/// Order backend that records every call so tests can assert on the call
/// order and the exact requests the flow sent.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    calls: Arc<Mutex<Vec<&'static str>>>,
    last_create: Arc<Mutex<Option<CreateOrderRequest>>>,
    last_verify: Arc<Mutex<Option<PaymentResult>>>,
    fail_create: bool,
    fail_verify: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    pub fn failing_verify() -> Self {
        Self {
            fail_verify: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_create(&self) -> Option<CreateOrderRequest> {
        self.last_create.lock().unwrap().clone()
    }

    pub fn last_verify(&self) -> Option<PaymentResult> {
        self.last_verify.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderBackend for RecordingBackend {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<PaymentOrder> {
        self.calls.lock().unwrap().push("create-order");
        *self.last_create.lock().unwrap() = Some(request.clone());
        if self.fail_create {
            return Err(CheckoutError::OrderCreation(
                "unexpected status 500 Internal Server Error".to_string(),
            ));
        }
        let amount = (request.amount * dec!(100)).to_u64().unwrap();
        Ok(PaymentOrder {
            order_id: "o1".to_string(),
            amount,
            currency: "INR".to_string(),
        })
    }

    async fn verify_payment(&self, result: &PaymentResult) -> Result<()> {
        self.calls.lock().unwrap().push("verify-payment");
        *self.last_verify.lock().unwrap() = Some(result.clone());
        if self.fail_verify {
            return Err(CheckoutError::Verification(
                "unexpected status 400 Bad Request".to_string(),
            ));
        }
        Ok(())
    }
}

/// Gateway that records the options it was opened with, then either
/// completes with a canned result or reports a dismissal.
#[derive(Clone, Default)]
pub struct ScriptedGateway {
    dismiss: bool,
    opens: Arc<Mutex<Vec<GatewayOptions>>>,
}

impl ScriptedGateway {
    pub fn completing() -> Self {
        Self::default()
    }

    pub fn dismissing() -> Self {
        Self {
            dismiss: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<GatewayOptions> {
        self.opens.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    async fn open(&self, options: GatewayOptions) -> Result<GatewayOutcome> {
        self.opens.lock().unwrap().push(options.clone());
        if self.dismiss {
            return Ok(GatewayOutcome::Dismissed);
        }
        Ok(GatewayOutcome::Completed(PaymentResult {
            razorpay_order_id: options.order_id,
            razorpay_payment_id: "pay_test000001".to_string(),
            razorpay_signature: "sig_test".to_string(),
        }))
    }
}

/// Page chrome that counts each side effect so cleanup can be asserted
/// exactly-once.
#[derive(Default)]
pub struct CountingChrome {
    pub injects: AtomicUsize,
    pub removes: AtomicUsize,
    pub locks: AtomicUsize,
    pub unlocks: AtomicUsize,
}

impl PageChrome for CountingChrome {
    fn inject_script(&self) {
        self.injects.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }

    fn remove_script(&self) {
        self.removes.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }

    fn lock_scroll(&self) {
        self.locks.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }

    fn unlock_scroll(&self) {
        self.unlocks.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}
