use crate::domain::donor::DonorInfo;
use crate::domain::tier::{self, DonationTier};
use crate::error::{CheckoutError, Result};
use crate::text;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Smallest donation accepted, in major units.
pub const MIN_DONATION: Decimal = dec!(100);

/// Where the donor is in the checkout. Strictly forward: once in `Form` the
/// only way back to tier selection is closing the modal and starting over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    TierSelection,
    Form,
    Success,
}

/// One user interaction with the checkout, as replayed by the CLI or fed by
/// an embedding UI.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutEvent {
    SelectTier(String),
    CustomAmount(String),
    ConfirmCustom,
    Name(String),
    Email(String),
    Phone(String),
    Message(String),
    Anonymous(bool),
    Submit,
    Close,
}

/// The transient state of one donation attempt.
///
/// Owns everything the modal displays: the current step, the charge source
/// (tier or custom amount, never both), the donor form, and the loading
/// flag that doubles as a reentrancy guard during submission.
#[derive(Debug)]
pub struct CheckoutSession {
    step: Step,
    selected_tier: Option<&'static DonationTier>,
    is_custom_amount: bool,
    custom_amount: String,
    donor: DonorInfo,
    loading: bool,
}

impl CheckoutSession {
    /// Starts a session, landing on the form directly when a known tier id
    /// was pre-selected. An unknown id falls back to tier selection rather
    /// than entering the form with nothing to charge.
    pub fn open(preselected_tier: Option<&str>) -> Self {
        let selected_tier = preselected_tier.and_then(tier::find);
        Self {
            step: if selected_tier.is_some() {
                Step::Form
            } else {
                Step::TierSelection
            },
            selected_tier,
            is_custom_amount: false,
            custom_amount: String::new(),
            donor: DonorInfo::default(),
            loading: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn donor(&self) -> &DonorInfo {
        &self.donor
    }

    pub fn donor_mut(&mut self) -> &mut DonorInfo {
        &mut self.donor
    }

    pub fn selected_tier(&self) -> Option<&'static DonationTier> {
        self.selected_tier
    }

    pub fn is_custom_amount(&self) -> bool {
        self.is_custom_amount
    }

    pub fn custom_amount(&self) -> &str {
        &self.custom_amount
    }

    /// Picks a catalog tier and moves to the form. Clears the custom-amount
    /// flag: tier and custom amount are mutually exclusive charge sources.
    pub fn select_tier(&mut self, id: &str) -> Result<()> {
        let tier =
            tier::find(id).ok_or(CheckoutError::Validation(text::PICK_TIER_PROMPT))?;
        self.selected_tier = Some(tier);
        self.is_custom_amount = false;
        self.step = Step::Form;
        Ok(())
    }

    /// Records custom-amount input. Switching to a custom amount drops any
    /// tier selection; validation waits until confirm/submit.
    pub fn enter_custom_amount(&mut self, input: &str) {
        self.custom_amount = input.to_string();
        self.is_custom_amount = true;
        self.selected_tier = None;
    }

    /// Whether the continue button under the custom-amount input is enabled.
    pub fn can_continue_with_custom(&self) -> bool {
        self.custom_amount
            .trim()
            .parse::<Decimal>()
            .is_ok_and(|amount| amount >= MIN_DONATION)
    }

    /// Confirms the custom amount and moves to the form, or rejects input
    /// below the minimum without changing step.
    pub fn confirm_custom_amount(&mut self) -> Result<()> {
        if !self.can_continue_with_custom() {
            return Err(CheckoutError::Validation(text::MIN_AMOUNT_PROMPT));
        }
        self.step = Step::Form;
        Ok(())
    }

    /// Resolves the amount to charge, in major units: the custom amount when
    /// that path is active, the selected tier's price otherwise.
    pub fn charge_amount(&self) -> Result<Decimal> {
        if self.is_custom_amount {
            let amount = self
                .custom_amount
                .trim()
                .parse::<Decimal>()
                .map_err(|_| CheckoutError::Validation(text::MIN_AMOUNT_PROMPT))?;
            if amount < MIN_DONATION {
                return Err(CheckoutError::Validation(text::MIN_AMOUNT_PROMPT));
            }
            Ok(amount)
        } else {
            self.selected_tier
                .map(DonationTier::price)
                .ok_or(CheckoutError::Validation(text::PICK_TIER_PROMPT))
        }
    }

    pub(crate) fn complete(&mut self) {
        self.step = Step::Success;
    }
}
