//! Purchase request and result.

use super::subscription::UserSubscription;
use serde::{Deserialize, Serialize};

/// How a purchase is paid. The server settles all three; the console only
/// passes the choice along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Balance,
    Wechat,
    Alipay,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Balance,
        PaymentMethod::Wechat,
        PaymentMethod::Alipay,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Balance => "balance",
            PaymentMethod::Wechat => "wechat",
            PaymentMethod::Alipay => "alipay",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Balance => "Account balance",
            PaymentMethod::Wechat => "WeChat Pay",
            PaymentMethod::Alipay => "Alipay",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }

    /// Label for a stored method code; unknown codes are shown verbatim.
    pub fn label_for(code: &str) -> String {
        match Self::from_code(code) {
            Some(method) => method.label().to_string(),
            None if code.is_empty() => "-".to_string(),
            None => code.to_string(),
        }
    }
}

/// Body of `POST /api/subscription/purchase`.
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseRequest {
    pub plan_id: i64,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PurchaseReceipt {
    pub subscription: Option<UserSubscription>,
    pub payment_id: String,
}
