pub mod catalog;
pub mod components;
#[cfg(feature = "ssr")]
pub mod context;
pub mod pages;
pub mod sections;
pub mod seo;
pub mod state;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    SsrMode, StaticSegment,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body id="#top">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/madebykane.css"/>

        // sets the document title
        <Title formatter=|text: String| {
            if text.is_empty() {
                String::from(seo::TITLE)
            } else {
                format!("{} - {}", text, seo::BUSINESS_NAME)
            }
        }/>

        <Meta name="description" content=seo::DESCRIPTION/>
        <Meta property="og:title" content=seo::TITLE/>
        <Meta property="og:description" content=seo::DESCRIPTION/>
        <Meta property="og:image" content=seo::OG_IMAGE_URL/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                // Async rendering so the landing page is fully rendered on
                // the server; all the content is compiled in anyway.
                <Route
                    path=StaticSegment("")
                    view=pages::home::Index
                    ssr=SsrMode::Async
                />
                // The earlier revision of the page, kept reachable while the
                // final copy is settled with the client.
                <Route
                    path=StaticSegment("classic")
                    view=pages::classic::Index
                    ssr=SsrMode::Async
                />
            </Routes>
        </Router>
    }
}
