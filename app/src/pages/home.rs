use leptos::prelude::*;

use crate::components::{Footer, NavBar};
use crate::sections::{
    CtaSection, Hero, ProjectsSection, ServicesSection, StatsSection, TestimonialCarousel,
};
use crate::seo::LocalBusinessSchema;

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <LocalBusinessSchema/>
        <NavBar/>
        <main class="landing">
            <Hero trust_indicators=true/>
            <ServicesSection/>
            <ProjectsSection/>
            <StatsSection/>
            <TestimonialCarousel/>
            <CtaSection/>
        </main>
        <Footer/>
    }
}
