pub mod metadata;
pub mod robots;
pub mod sitemap;
