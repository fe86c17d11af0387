use chrono::Datelike;
use leptos::prelude::*;

use crate::catalog::BOOKING_URL;
use crate::components::{ButtonSize, LinkButton};

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="site-nav">
                <a href="#top" class="brand">
                    <span class="brand-mark">"K"</span>
                    <span class="brand-name">"Made by Kane"</span>
                </a>
                <ul class="nav-links">
                    <li><a href="#projects">"Work"</a></li>
                    <li><a href="#services">"Services"</a></li>
                    <li><a href="#contact">"Contact"</a></li>
                </ul>
                <LinkButton size=ButtonSize::Sm href=BOOKING_URL external=true>
                    "Book Free Consult"
                </LinkButton>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <a href="#top" class="brand">
                    <span class="brand-mark">"K"</span>
                    <span class="brand-name">"Made by Kane"</span>
                </a>
                <ul class="footer-links">
                    <li><a href="#projects">"Work"</a></li>
                    <li><a href="#services">"Services"</a></li>
                    <li><a href="#contact">"Contact"</a></li>
                </ul>
                <p class="footer-copyright">
                    {format!("© {year} Made by Kane. All rights reserved.")}
                </p>
            </div>
        </footer>
    }
}
