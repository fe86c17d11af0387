use leptos::prelude::*;

use crate::components::{ButtonSize, ButtonVariant, LinkButton};

#[component]
pub fn Hero(#[prop(optional)] trust_indicators: bool) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-inner">
                <div class="hero-badge">
                    <span class="hero-badge-dot"></span>
                    "Available for new projects"
                </div>

                <h1 class="hero-title">
                    <span>"Digital Products"</span>
                    <span class="hero-title-accent">"Built to Impress"</span>
                </h1>

                <p class="hero-tagline">
                    "High‑performing websites & apps that earn trust, rank higher, and convert visitors into loyal customers."
                </p>

                <div class="hero-actions">
                    <LinkButton size=ButtonSize::Lg href="#projects">
                        "See My Work"
                    </LinkButton>
                    <LinkButton variant=ButtonVariant::Outline size=ButtonSize::Lg href="#contact">
                        "Free Strategy Call"
                    </LinkButton>
                </div>

                {trust_indicators.then(|| view! {
                    <div class="hero-trust">
                        <div class="trust-item">
                            <span class="stars">"⭐⭐⭐⭐⭐"</span>
                            <span>"5.0 Client Rating"</span>
                        </div>
                        <div class="trust-divider"></div>
                        <div class="trust-item">"15+ Projects Delivered"</div>
                        <div class="trust-divider"></div>
                        <div class="trust-item">"100% Client Satisfaction"</div>
                    </div>
                })}
            </div>
        </section>
    }
}
