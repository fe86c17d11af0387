use leptos::prelude::*;

use crate::components::{Footer, NavBar};
use crate::sections::{CtaSection, Hero, ProjectsSection, ServicesSection, TestimonialGrid};
use crate::seo::LocalBusinessSchema;

// The pre-redesign page: same sections and controllers, minus the
// carousel and the stats band.
#[component]
pub fn Index() -> impl IntoView {
    view! {
        <LocalBusinessSchema/>
        <NavBar/>
        <main class="landing">
            <Hero/>
            <ServicesSection/>
            <ProjectsSection/>
            <TestimonialGrid/>
            <CtaSection/>
        </main>
        <Footer/>
    }
}
