use axum::response::IntoResponse;

use super::metadata::link;

pub const URL_PATH: &str = "/robots.txt";

pub async fn handler(
    axum::extract::State(ctx): axum::extract::State<app::context::Context>,
) -> axum::response::Response {
    let body = format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        link(&ctx.base_url, super::sitemap::URL_PATH),
    );
    (
        axum::http::StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/plain")],
        body,
    )
        .into_response()
}
