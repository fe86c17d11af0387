use leptos::prelude::*;

use crate::catalog;

#[component]
pub fn StatsSection() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="stats-grid">
                {catalog::STATS
                    .iter()
                    .map(|stat| view! {
                        <div class="stat">
                            <div class="stat-icon">{stat.icon}</div>
                            <p class="stat-value">{stat.value}</p>
                            <p class="stat-label">{stat.label}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
