/// Settings passed through to the hosted checkout widget.
///
/// The key id identifies the merchant account to the gateway; it is public
/// by design and typically comes from the `RAZORPAY_KEY_ID` environment
/// variable. The theme color matches the site's accent.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    pub key_id: String,
    pub theme_color: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            key_id: "rzp_test_simulated".to_string(),
            theme_color: "#d97706".to_string(),
        }
    }
}

impl CheckoutConfig {
    pub fn new(key_id: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            ..Self::default()
        }
    }
}
