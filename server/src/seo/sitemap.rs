use axum::response::IntoResponse;

use super::metadata::{link, PAGES};

pub const URL_PATH: &str = "/sitemap.xml";

pub async fn handler(
    axum::extract::State(ctx): axum::extract::State<app::context::Context>,
) -> axum::response::Response {
    // Content ships with the binary, so the deployment date is the most
    // recent modification crawlers can observe.
    let lastmod = chrono::Utc::now().format("%Y-%m-%d");

    let mut body = String::from(concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    ));
    for path in PAGES {
        body.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n  </url>\n",
            link(&ctx.base_url, path),
            lastmod,
        ));
    }
    body.push_str("</urlset>\n");

    (
        axum::http::StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "application/xml")],
        body,
    )
        .into_response()
}
