/// The routes worth surfacing to crawlers.
pub const PAGES: &[&str] = &["/", "/classic"];

/// Public origin of the deployed site. Overridable so staging deploys do
/// not advertise production URLs to crawlers.
pub fn base_url() -> String {
    std::env::var("SITE_BASE_URL").unwrap_or_else(|_| String::from(app::seo::DEFAULT_BASE_URL))
}

pub fn link(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
