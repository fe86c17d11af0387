use leptos::prelude::*;

use crate::catalog::BOOKING_URL;
use crate::components::{ButtonSize, ButtonVariant, LinkButton};

#[component]
pub fn CtaSection() -> impl IntoView {
    view! {
        <section id="contact" class="cta">
            <div class="cta-inner">
                <h2>"Ready to impress your customers?"</h2>
                <p>
                    "Book a free 15‑minute call and discover how we can grow your business with a website or app that truly shines."
                </p>

                <div class="cta-actions">
                    <LinkButton
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Lg
                        href=BOOKING_URL
                        external=true
                    >
                        "Book a Call →"
                    </LinkButton>
                    <span class="cta-aside">"Usually responds within 2 hours"</span>
                </div>

                <div class="cta-reassurance">
                    <span>"No commitment required"</span>
                    <span class="cta-divider"></span>
                    <span>"100% confidential"</span>
                </div>
            </div>
        </section>
    }
}
