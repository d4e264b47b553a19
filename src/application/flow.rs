use crate::config::CheckoutConfig;
use crate::domain::order::CreateOrderRequest;
use crate::domain::ports::{
    GatewayOptions, GatewayOutcome, OrderBackendBox, PageChrome, PaymentGatewayBox, Prefill,
};
use crate::domain::session::{CheckoutEvent, CheckoutSession, Step};
use crate::error::Result;
use crate::text;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Scoped ownership of the page-level side effects the open modal holds:
/// the injected gateway script and the background scroll lock.
///
/// Acquired when the flow opens and released exactly once, on explicit close
/// or on drop, whichever comes first. Dropping on an error path still
/// releases.
pub struct PageLease {
    chrome: Arc<dyn PageChrome>,
    released: bool,
}

impl PageLease {
    pub fn acquire(chrome: Arc<dyn PageChrome>) -> Self {
        chrome.inject_script();
        chrome.lock_scroll();
        Self {
            chrome,
            released: false,
        }
    }

    pub fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.chrome.remove_script();
            self.chrome.unlock_scroll();
        }
    }
}

impl Drop for PageLease {
    fn drop(&mut self) {
        self.release();
    }
}

/// Drives one donation attempt from tier selection to a verified payment.
///
/// The order backend, the hosted gateway, and the page side effects are all
/// injected capabilities, so the whole flow runs the same against live
/// endpoints or in-process fakes.
pub struct CheckoutFlow {
    config: CheckoutConfig,
    session: CheckoutSession,
    backend: OrderBackendBox,
    gateway: PaymentGatewayBox,
    lease: PageLease,
}

impl CheckoutFlow {
    /// Opens the checkout, acquiring the page lease for its lifetime.
    pub fn open(
        config: CheckoutConfig,
        backend: OrderBackendBox,
        gateway: PaymentGatewayBox,
        chrome: Arc<dyn PageChrome>,
        preselected_tier: Option<&str>,
    ) -> Self {
        let session = CheckoutSession::open(preselected_tier);
        debug!(step = ?session.step(), "checkout opened");
        Self {
            config,
            session,
            backend,
            gateway,
            lease: PageLease::acquire(chrome),
        }
    }

    pub fn session(&self) -> &CheckoutSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut CheckoutSession {
        &mut self.session
    }

    /// Applies one user interaction to the flow.
    pub async fn apply(&mut self, event: CheckoutEvent) -> Result<()> {
        match event {
            CheckoutEvent::SelectTier(id) => self.session.select_tier(&id),
            CheckoutEvent::CustomAmount(input) => {
                self.session.enter_custom_amount(&input);
                Ok(())
            }
            CheckoutEvent::ConfirmCustom => self.session.confirm_custom_amount(),
            CheckoutEvent::Name(value) => {
                self.session.donor_mut().name = value;
                Ok(())
            }
            CheckoutEvent::Email(value) => {
                self.session.donor_mut().email = value;
                Ok(())
            }
            CheckoutEvent::Phone(value) => {
                self.session.donor_mut().phone = value;
                Ok(())
            }
            CheckoutEvent::Message(value) => {
                self.session.donor_mut().message = value;
                Ok(())
            }
            CheckoutEvent::Anonymous(flag) => {
                self.session.donor_mut().is_anonymous = flag;
                Ok(())
            }
            CheckoutEvent::Submit => self.submit().await,
            CheckoutEvent::Close => {
                self.close();
                Ok(())
            }
        }
    }

    /// Confirms the donor form: validates, creates the order, opens the
    /// hosted gateway, and verifies the signed result.
    ///
    /// Every failure clears the loading flag and leaves the session in
    /// `Form` so the donor can retry; a gateway dismissal does the same but
    /// is not an error. `Success` is only reachable through a successful
    /// verification.
    pub async fn submit(&mut self) -> Result<()> {
        if self.session.is_loading() {
            debug!("submit ignored while a payment is in flight");
            return Ok(());
        }

        let amount = self.session.charge_amount()?;
        self.session.donor().validate()?;
        let donor = self.session.donor().clone();

        self.session.set_loading(true);
        let request = CreateOrderRequest {
            amount,
            donor_info: donor.clone(),
            is_custom_amount: self.session.is_custom_amount(),
            tier_id: self.session.selected_tier().map(|t| t.id.to_string()),
        };
        let order = match self.backend.create_order(request).await {
            Ok(order) => order,
            Err(err) => {
                warn!(error = %err, "create-order failed");
                self.session.set_loading(false);
                return Err(err);
            }
        };
        if (amount * dec!(100)).to_u64() != Some(order.amount) {
            warn!(
                order_amount = order.amount,
                requested = %amount,
                "order amount does not echo the requested amount"
            );
        }

        info!(order_id = %order.order_id, amount = order.amount, "opening hosted checkout");
        let options = GatewayOptions {
            key: self.config.key_id.clone(),
            amount: order.amount,
            currency: order.currency.clone(),
            order_id: order.order_id.clone(),
            name: text::ORG_NAME.to_string(),
            description: text::DONATION_PURPOSE.to_string(),
            prefill: Prefill {
                name: donor.name,
                email: donor.email,
                contact: donor.phone,
            },
            theme_color: self.config.theme_color.clone(),
        };
        let outcome = match self.gateway.open(options).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "gateway failed to open");
                self.session.set_loading(false);
                return Err(err);
            }
        };

        match outcome {
            GatewayOutcome::Dismissed => {
                debug!("payer dismissed the hosted checkout");
                self.session.set_loading(false);
                Ok(())
            }
            GatewayOutcome::Completed(result) => {
                match self.backend.verify_payment(&result).await {
                    Ok(()) => {
                        info!(payment_id = %result.razorpay_payment_id, "payment verified");
                        self.session.complete();
                        self.session.set_loading(false);
                        Ok(())
                    }
                    Err(err) => {
                        warn!(error = %err, "payment verification failed");
                        self.session.set_loading(false);
                        Err(err)
                    }
                }
            }
        }
    }

    /// Dismisses the checkout, releasing the page lease. Safe to call more
    /// than once; dropping the flow without calling it releases too.
    pub fn close(&mut self) {
        if self.session.step() != Step::Success {
            debug!(step = ?self.session.step(), "checkout closed before completion");
        }
        self.lease.release();
    }
}
