use leptos::prelude::*;

fn merge(base: &'static str, extra: Option<&'static str>) -> String {
    match extra {
        Some(extra) => format!("{base} {extra}"),
        None => String::from(base),
    }
}

#[component]
pub fn Card(
    #[prop(optional)] class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=merge("card", class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(
    #[prop(optional)] class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=merge("card-header", class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardContent(
    #[prop(optional)] class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=merge("card-content", class)>
            {children()}
        </div>
    }
}
