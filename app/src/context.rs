use leptos::prelude::LeptosOptions;

#[derive(Clone, Debug)]
pub struct Context {
    pub leptos_options: LeptosOptions,
    /// Public origin used for absolute links in the crawl endpoints.
    pub base_url: String,
}

impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(value: &Context) -> Self {
        value.leptos_options.clone()
    }
}
