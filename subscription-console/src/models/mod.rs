//! Subscription API data shapes and the display rules derived from them.

pub mod envelope;
pub mod paging;
pub mod plan;
pub mod purchase;
pub mod quota;
pub mod stats;
pub mod subscription;

pub use envelope::ApiEnvelope;
pub use paging::{PageRequest, Pager};
pub use plan::{PlanPage, PlanPayload, PlanStatus, PlanStatusUpdate, SubscriptionPlan};
pub use purchase::{PaymentMethod, PurchaseReceipt, PurchaseRequest};
pub use quota::{QuotaInfo, QuotaMap, QuotaSnapshot};
pub use stats::{Report, ReportWindow, SystemStats};
pub use subscription::{SubscriptionPage, UserSubscription};

use serde::{Deserialize, Deserializer};

/// Go encodes nil slices and maps as `null`; read those as empty.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
