use super::FormError;
use crate::models::{PaymentMethod, PurchaseRequest};
use serde::Deserialize;

/// Confirm-modal submission.
#[derive(Debug, Deserialize)]
pub struct PurchaseForm {
    pub plan_id: i64,
    #[serde(default)]
    pub payment_method: String,
}

impl PurchaseForm {
    pub fn into_request(self) -> Result<PurchaseRequest, FormError> {
        let payment_method = PaymentMethod::from_code(self.payment_method.trim())
            .ok_or(FormError::MissingPaymentMethod)?;
        Ok(PurchaseRequest {
            plan_id: self.plan_id,
            payment_method,
        })
    }
}
