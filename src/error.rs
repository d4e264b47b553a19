use crate::text;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CheckoutError>;

#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Input rejected before any network call. Carries the prompt shown to
    /// the donor.
    #[error("validation failed: {0}")]
    Validation(&'static str),
    #[error("order creation failed: {0}")]
    OrderCreation(String),
    #[error("payment verification failed: {0}")]
    Verification(String),
    #[error("payment gateway error: {0}")]
    Gateway(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("bad checkout event: {0}")]
    Event(String),
}

impl CheckoutError {
    /// The message surfaced to the donor, in the site's locale.
    ///
    /// Verification failures get their own message; every other submission
    /// failure collapses into the generic order-creation one.
    pub fn user_message(&self) -> &'static str {
        match self {
            CheckoutError::Validation(prompt) => prompt,
            CheckoutError::Verification(_) => text::VERIFICATION_FAILED,
            _ => text::ORDER_CREATION_FAILED,
        }
    }
}
