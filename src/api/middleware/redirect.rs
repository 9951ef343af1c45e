//! Redirect resolution middleware.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::domain::Outcome;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves the request path against the redirect chain.
///
/// # Request Flow
///
/// 1. Percent-decode the URI path (without query)
/// 2. Look it up in the chain, outermost layer first
/// 3. **Hit**: return `302 Found` with `Location` set to the target
/// 4. **Miss**: forward the unmodified request to the wrapped handler
///
/// A path that is not valid UTF-8 once decoded can match no route and is
/// forwarded as a miss.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the target cannot be sent as a
/// `Location` header value.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .fallback(default_handler)
///     .layer(middleware::from_fn_with_state(state.clone(), redirect::layer));
/// ```
pub async fn layer(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let outcome = match urlencoding::decode(request.uri().path()) {
        Ok(path) => state.redirects.handle(&path),
        Err(_) => Outcome::Fallthrough,
    };

    match outcome {
        Outcome::Redirect(target) => found(request.method(), &target),
        Outcome::Fallthrough => next.run(request).await,
    }
}

/// Builds a `302 Found` response pointing at `target`.
///
/// `GET` and `HEAD` responses carry a short HTML body linking to the target.
fn found(method: &Method, target: &str) -> Response {
    let location = match HeaderValue::from_str(target) {
        Ok(location) => location,
        Err(e) => {
            error!("Redirect target {:?} is not a valid header value: {}", target, e);
            return AppError::internal(
                "Redirect target is not a valid Location header",
                json!({ "target": target }),
            )
            .into_response();
        }
    };

    if *method == Method::GET || *method == Method::HEAD {
        let body = format!("<a href=\"{}\">Found</a>.\n", escape_html(target));
        (
            StatusCode::FOUND,
            [
                (header::LOCATION, location),
                (
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("text/html; charset=utf-8"),
                ),
            ],
            body,
        )
            .into_response()
    } else {
        (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
