use leptos::html::{Div, Section};
use leptos::leptos_dom::helpers::{
    request_animation_frame, set_timeout_with_handle, window, TimeoutHandle,
};
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::catalog::{self, Category, Project};
use crate::components::{Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, LinkButton};
use crate::state::display::{Filter, ProjectDisplay, Toggle, COLLAPSE_DELAY, SCROLL_OFFSET_PX};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let display = RwSignal::new(ProjectDisplay::new(catalog::PROJECTS));
    let section_ref = NodeRef::<Section>::new();
    let toggle_ref = NodeRef::<Div>::new();
    let collapse_timer: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);

    on_cleanup(move || {
        if let Some(pending) = collapse_timer.get_value() {
            pending.clear();
        }
    });

    let on_toggle = Callback::new(move |()| {
        match display.try_update(|d| d.toggle()).flatten() {
            Some(Toggle::Expanded) => {
                // Wait for the expanded grid to be rendered and painted, so
                // the scroll target is computed from settled geometry.
                request_animation_frame(move || {
                    request_animation_frame(move || {
                        if let Some(section) = section_ref.get_untracked() {
                            let top = f64::from(section.offset_top()) + SCROLL_OFFSET_PX;
                            let options = ScrollToOptions::new();
                            options.set_top(top);
                            options.set_behavior(ScrollBehavior::Smooth);
                            window().scroll_to_with_scroll_to_options(&options);
                        }
                        display.update(ProjectDisplay::settle);
                    });
                });
            }
            Some(Toggle::Collapsing) => {
                if let Some(control) = toggle_ref.get_untracked() {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Center);
                    control.scroll_into_view_with_scroll_into_view_options(&options);
                }
                if let Some(pending) = collapse_timer.get_value() {
                    pending.clear();
                }
                let pending = set_timeout_with_handle(
                    move || {
                        display.update(ProjectDisplay::commit_collapse);
                        collapse_timer.set_value(None);
                    },
                    COLLAPSE_DELAY,
                );
                collapse_timer.set_value(pending.ok());
            }
            None => {}
        }
    });

    let heading_class = move || {
        if display.with(|d| d.is_transitioning()) {
            "section-heading is-transitioning"
        } else {
            "section-heading"
        }
    };
    let filter_class = move || {
        if display.with(|d| d.show_all() && !d.is_transitioning()) {
            "category-filter open"
        } else {
            "category-filter"
        }
    };
    let grid_class = move || {
        let mut class = String::from("projects-grid");
        display.with(|d| {
            if d.show_all() {
                class.push_str(" expanded");
            }
            if d.is_transitioning() {
                class.push_str(" is-transitioning");
            }
        });
        class
    };

    let filters =
        std::iter::once(Filter::All).chain(Category::ALL.into_iter().map(Filter::Only));

    view! {
        <section id="projects" class="projects" node_ref=section_ref>
            <div class=heading_class>
                <h2>
                    {move || if display.with(|d| d.show_all()) { "All Projects" } else { "Featured Projects" }}
                </h2>
                <p>
                    {move || if display.with(|d| d.show_all()) {
                        "Explore my complete portfolio of digital solutions across various industries."
                    } else {
                        "Real results for real businesses. Each project tells a story of growth and success."
                    }}
                </p>
            </div>

            // Only reachable while the full catalog is shown; collapsed via
            // CSS the rest of the time so opening it does not reflow twice.
            <div class=filter_class>
                <div class="category-pills">
                    {filters
                        .map(|filter| {
                            let pill_class = move || {
                                if display.with(|d| d.filter() == filter) {
                                    "category-pill active"
                                } else {
                                    "category-pill"
                                }
                            };
                            view! {
                                <button
                                    class=pill_class
                                    on:click=move |_| display.update(|d| {
                                        d.set_filter(filter);
                                    })
                                >
                                    {filter.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class=grid_class>
                {move || {
                    display
                        .with(|d| d.visible())
                        .into_iter()
                        .map(|project| view! { <ProjectCard project/> })
                        .collect_view()
                }}
            </div>

            <div class="projects-toggle" node_ref=toggle_ref>
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Lg
                    disabled=Signal::derive(move || display.with(|d| d.is_transitioning()))
                    on_press=on_toggle
                >
                    {move || if display.with(|d| d.show_all()) {
                        "Show Featured Only"
                    } else {
                        "View All Projects"
                    }}
                </Button>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <Card class="project-card">
            <CardHeader class="project-media">
                <a href=project.link target="_blank" rel="noopener noreferrer">
                    <img src=project.image alt=project.name/>
                </a>
            </CardHeader>
            <CardContent>
                <div class="project-title">
                    <h3>{project.name}</h3>
                    <span class="project-category">{project.category.label()}</span>
                </div>
                <p class="project-description">{project.description}</p>
                <div class="project-tags">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="project-tag">{*tag}</span> })
                        .collect_view()}
                </div>
                <LinkButton
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    class="project-visit"
                    href=project.link
                    external=true
                >
                    "Visit Site ↗"
                </LinkButton>
            </CardContent>
        </Card>
    }
}
