use axum::{extract::Request, http::header, middleware::Next, response::IntoResponse};

/// Content security policy for the console pages: own assets plus the htmx
/// script from unpkg. Fragments are swapped in by htmx, so no inline script.
const CONSOLE_CSP: &str = "default-src 'self'; \
     script-src 'self' https://unpkg.com; \
     style-src 'self'; \
     img-src 'self' data:; \
     connect-src 'self'; \
     frame-ancestors 'none'; \
     form-action 'self'";

pub async fn security_headers_middleware(req: Request, next: Next) -> impl IntoResponse {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        header::HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::X_FRAME_OPTIONS,
        header::HeaderValue::from_static("DENY"),
    );
    headers.insert(
        header::REFERRER_POLICY,
        header::HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        header::HeaderValue::from_static(CONSOLE_CSP),
    );

    response
}
