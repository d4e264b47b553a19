use crate::domain::donor::DonorInfo;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of the create-order call.
///
/// The amount travels in major units; the backend converts and echoes it
/// back in minor units on the [`PaymentOrder`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub amount: Decimal,
    pub donor_info: DonorInfo,
    pub is_custom_amount: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_id: Option<String>,
}

/// Server-issued order the gateway is opened against.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    pub order_id: String,
    /// Minor currency units, echoing the requested amount.
    pub amount: u64,
    pub currency: String,
}

/// Signed result the gateway hands back once the payer completes the hosted
/// UI. Forwarded verbatim to the verification endpoint; the signature is
/// opaque to this flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_order_request_wire_shape() {
        let req = CreateOrderRequest {
            amount: dec!(501),
            donor_info: DonorInfo::default(),
            is_custom_amount: false,
            tier_id: Some("ituka-danam".to_string()),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value["amount"].is_number());
        assert_eq!(value["tierId"], "ituka-danam");
        assert_eq!(value["isCustomAmount"], false);
        assert!(value["donorInfo"].is_object());
    }

    #[test]
    fn test_tier_id_omitted_when_absent() {
        let req = CreateOrderRequest {
            amount: dec!(2500),
            donor_info: DonorInfo::default(),
            is_custom_amount: true,
            tier_id: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("tierId").is_none());
    }

    #[test]
    fn test_payment_order_deserializes_from_backend_shape() {
        let order: PaymentOrder =
            serde_json::from_str(r#"{"orderId":"o1","amount":50100,"currency":"INR"}"#).unwrap();
        assert_eq!(order.order_id, "o1");
        assert_eq!(order.amount, 50_100);
        assert_eq!(order.currency, "INR");
    }

    #[test]
    fn test_payment_result_uses_gateway_field_names() {
        let result = PaymentResult {
            razorpay_order_id: "o1".to_string(),
            razorpay_payment_id: "p1".to_string(),
            razorpay_signature: "sig".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["razorpay_order_id"], "o1");
        assert_eq!(value["razorpay_payment_id"], "p1");
        assert_eq!(value["razorpay_signature"], "sig");
    }
}
