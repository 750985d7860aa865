use axum::response::{Html, IntoResponse, Redirect};

pub async fn index() -> impl IntoResponse {
    Redirect::to("/admin/plans")
}

pub async fn health_check() -> &'static str {
    "OK"
}

/// Blank fragment used to clear the modal, dismiss rows and close toasts.
pub async fn empty() -> Html<&'static str> {
    Html("")
}
