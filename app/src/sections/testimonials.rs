use leptos::either::Either;
use leptos::leptos_dom::helpers::{
    set_interval_with_handle, set_timeout_with_handle, TimeoutHandle,
};
use leptos::prelude::*;

use crate::catalog::{self, Testimonial};
use crate::components::{Card, CardContent};
use crate::state::carousel::{Carousel, QuoteSize, AUTOPLAY_INTERVAL, RESUME_DELAY};

#[component]
pub fn TestimonialCarousel() -> impl IntoView {
    let carousel = match Carousel::new(catalog::TESTIMONIALS.len()) {
        Ok(carousel) => carousel,
        // Nothing to rotate through; leave the section out entirely.
        Err(_) => return Either::Left(()),
    };
    let state = RwSignal::new(carousel);
    let resume_timer: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);

    // Autoplay runs only while the controller says so; on_cleanup clears
    // the interval both when this effect re-runs and on unmount.
    Effect::new(move |_| {
        if !state.with(|c| c.is_autoplaying()) {
            return;
        }
        if let Ok(interval) =
            set_interval_with_handle(move || state.update(Carousel::advance), AUTOPLAY_INTERVAL)
        {
            on_cleanup(move || interval.clear());
        }
    });

    on_cleanup(move || {
        if let Some(pending) = resume_timer.get_value() {
            pending.clear();
        }
    });

    // Manual navigation suspends autoplay; only the newest resume timer
    // is allowed to re-enable it.
    let schedule_resume = move || {
        if let Some(pending) = resume_timer.get_value() {
            pending.clear();
        }
        let pending = set_timeout_with_handle(
            move || {
                state.update(Carousel::resume);
                resume_timer.set_value(None);
            },
            RESUME_DELAY,
        );
        resume_timer.set_value(pending.ok());
    };

    let on_previous = move |_| {
        state.update(|c| {
            c.pause();
            c.retreat();
        });
        schedule_resume();
    };
    let on_next = move |_| {
        state.update(|c| {
            c.pause();
            c.advance();
        });
        schedule_resume();
    };

    let has_controls = state.with_untracked(|c| c.has_controls());

    Either::Right(view! {
        <section class="testimonials">
            <div class="section-heading">
                <h2>"Client Success Stories"</h2>
                <p>
                    "Don't just take my word for it. Here's what clients say about working together."
                </p>
            </div>

            <div class="carousel">
                {has_controls.then(|| view! {
                    <button class="carousel-arrow previous" aria-label="Previous testimonial" on:click=on_previous>
                        "‹"
                    </button>
                })}

                {move || {
                    let testimonial = &catalog::TESTIMONIALS[state.with(|c| c.current())];
                    view! { <TestimonialCard testimonial sized_quote=true/> }
                }}

                {has_controls.then(|| view! {
                    <button class="carousel-arrow next" aria-label="Next testimonial" on:click=on_next>
                        "›"
                    </button>
                })}
            </div>

            {has_controls.then(|| view! {
                <div class="carousel-dots">
                    {(0..catalog::TESTIMONIALS.len())
                        .map(|index| {
                            let dot_class = move || {
                                if state.with(|c| c.current()) == index {
                                    "carousel-dot active"
                                } else {
                                    "carousel-dot"
                                }
                            };
                            view! {
                                <button
                                    class=dot_class
                                    aria-label=format!("Go to testimonial {}", index + 1)
                                    on:click=move |_| {
                                        state.update(|c| {
                                            c.pause();
                                            c.go_to(index);
                                        });
                                        schedule_resume();
                                    }
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            })}
        </section>
    })
}

/// The earlier page revision shows the testimonials side by side instead
/// of rotating through them.
#[component]
pub fn TestimonialGrid() -> impl IntoView {
    view! {
        <section class="testimonials">
            <div class="section-heading">
                <h2>"Client Success Stories"</h2>
                <p>
                    "Don't just take my word for it. Here's what clients say about working together."
                </p>
            </div>

            <div class="testimonials-grid">
                {catalog::TESTIMONIALS
                    .iter()
                    .map(|testimonial| view! { <TestimonialCard testimonial/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(
    testimonial: &'static Testimonial,
    #[prop(optional)] sized_quote: bool,
) -> impl IntoView {
    let quote_class = if sized_quote {
        format!(
            "testimonial-quote {}",
            QuoteSize::for_quote(testimonial.quote).css_class(),
        )
    } else {
        String::from("testimonial-quote")
    };

    view! {
        <Card class="testimonial-card">
            <CardContent>
                <div class="testimonial-author">
                    <img src=testimonial.avatar alt=testimonial.author/>
                    <div>
                        <div class="author-name">{testimonial.author}</div>
                        <div class="author-company">{testimonial.company}</div>
                    </div>
                </div>
                <blockquote class=quote_class>
                    {format!("\u{201c}{}\u{201d}", testimonial.quote)}
                </blockquote>
                <div class="stars">"⭐⭐⭐⭐⭐"</div>
            </CardContent>
        </Card>
    }
}
