use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    Cash,
}

/// Bill produced by the backend on check-out.
///
/// `amount` is computed server side; the UI only displays it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bill {
    pub id: i64,
    pub reservation_id: i64,
    pub amount: f64,
    pub payment_method: String,
    pub billing_date: String,
    pub status: String,
    pub optional_charges: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bill() {
        let bill: Bill = serde_json::from_str(
            r#"{"id":1,"reservationId":9,"amount":412.75,"paymentMethod":"CREDIT_CARD","billingDate":"2025-01-12","status":"PAID","optionalCharges":12.75}"#,
        )
        .unwrap();
        assert_eq!(bill.reservation_id, 9);
        assert_eq!(bill.amount, 412.75);
        assert_eq!(bill.status, "PAID");
    }
}
