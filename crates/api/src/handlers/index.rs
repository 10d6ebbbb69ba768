use axum::response::Html;

/// The dashboard page. It renders nothing server-side; its script fetches
/// the three `/api` endpoints on load.
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
