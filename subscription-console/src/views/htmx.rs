//! htmx response conventions.
//!
//! Mutations answer with an out-of-band toast and an `HX-Trigger` naming the
//! fragments that must reload. An empty main body clears the modal the form
//! lives in.

use super::toast::ToastTemplate;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};

pub const HX_TRIGGER: &str = "hx-trigger";
pub const HX_RETARGET: &str = "hx-retarget";
pub const HX_RESWAP: &str = "hx-reswap";

pub const TOAST_CONTAINER: &str = "#toasts";

pub mod events {
    pub const PLANS_REFRESH: &str = "plans-refresh";
    pub const SUBSCRIPTIONS_REFRESH: &str = "subscriptions-refresh";
    pub const QUOTAS_REFRESH: &str = "quotas-refresh";
    pub const STATS_REFRESH: &str = "stats-refresh";
}

/// Success toast plus the refresh events listeners wait for.
pub fn notify(message: &str, refresh: &[&'static str]) -> Response {
    let mut headers = HeaderMap::new();
    if !refresh.is_empty() {
        if let Ok(value) = HeaderValue::from_str(&refresh.join(", ")) {
            headers.insert(HX_TRIGGER, value);
        }
    }
    (headers, ToastTemplate::success(message).out_of_band()).into_response()
}

/// Headers that send a fragment to the toast stack instead of its target.
pub fn toast_redirect() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(HX_RETARGET, HeaderValue::from_static(TOAST_CONTAINER));
    headers.insert(HX_RESWAP, HeaderValue::from_static("beforeend"));
    headers
}
