use leptos::prelude::*;

use crate::catalog;
use crate::components::{Card, CardContent};

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="section-heading">
                <h2>"What I Do Best"</h2>
                <p>
                    "Specialized services designed to elevate your digital presence and drive real business results."
                </p>
            </div>

            <div class="services-grid">
                {catalog::SERVICES
                    .iter()
                    .map(|service| view! {
                        <Card class="service-card">
                            <CardContent>
                                <div class="service-icon">{service.icon}</div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <ul class="service-features">
                                    {service.features
                                        .iter()
                                        .map(|feature| view! { <li>{*feature}</li> })
                                        .collect_view()}
                                </ul>
                            </CardContent>
                        </Card>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
