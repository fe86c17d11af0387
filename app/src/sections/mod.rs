mod cta;
mod hero;
mod projects;
mod services;
mod stats;
mod testimonials;

pub use cta::CtaSection;
pub use hero::Hero;
pub use projects::ProjectsSection;
pub use services::ServicesSection;
pub use stats::StatsSection;
pub use testimonials::{TestimonialCarousel, TestimonialGrid};
