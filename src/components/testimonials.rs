use yew::prelude::*;
use web_sys::MouseEvent;
use gloo_timers::callback::Interval;

use crate::config;
use crate::content::{Testimonial, TESTIMONIALS};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SlideDirection {
    Forward,
    Backward,
}

/// One modular step through the entry list. `len` must be non-zero.
pub fn advance(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

/// Direction of the slide animation when jumping straight to `target`
/// from a dot. Jumping to the current index keeps the previous direction.
pub fn direction_to(current: usize, target: usize) -> Option<SlideDirection> {
    if target > current {
        Some(SlideDirection::Forward)
    } else if target < current {
        Some(SlideDirection::Backward)
    } else {
        None
    }
}

fn render_stars(rating: u8) -> Html {
    (0..rating)
        .map(|i| html! { <span class="star" key={i as u32}>{"★"}</span> })
        .collect::<Html>()
}

fn testimonial_card(entry: &Testimonial, compact: bool) -> Html {
    let class = if compact { "testimonial-card compact" } else { "testimonial-card" };
    html! {
        <div class={class}>
            <div class="quote-mark">{"❞"}</div>
            <div class="card-head">
                <div class="avatar">{entry.initial.to_string()}</div>
                <div>
                    <h3>{entry.name}</h3>
                    <div class="stars">{render_stars(entry.rating)}</div>
                </div>
            </div>
            <p class="quote-text">{format!("\u{201c}{}\u{201d}", entry.text)}</p>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let current = use_state(|| 0usize);
    let direction = use_state(|| SlideDirection::Forward);
    let paused = use_state(|| false);

    let len = TESTIMONIALS.len();

    // Exactly one live interval per mount: the effect re-runs whenever the
    // index or the pause flag changes, and its cleanup drops the previous
    // interval before a new one is created.
    {
        let deps = (*current, *paused);
        let current = current.clone();
        let direction = direction.clone();
        use_effect_with_deps(
            move |&(index, paused)| {
                let interval = (!paused && len > 0).then(|| {
                    Interval::new(config::CAROUSEL_INTERVAL_MS, move || {
                        direction.set(SlideDirection::Forward);
                        current.set(advance(index, len, true));
                    })
                });
                move || drop(interval)
            },
            deps,
        );
    }

    let step = {
        let current = current.clone();
        let direction = direction.clone();
        Callback::from(move |forward: bool| {
            direction.set(if forward {
                SlideDirection::Forward
            } else {
                SlideDirection::Backward
            });
            current.set(advance(*current, len, forward));
        })
    };

    let on_prev = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.emit(false))
    };
    let on_next = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.emit(true))
    };

    let select_dot = {
        let current = current.clone();
        let direction = direction.clone();
        Callback::from(move |target: usize| {
            if let Some(dir) = direction_to(*current, target) {
                direction.set(dir);
            }
            current.set(target);
        })
    };

    let on_pause = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let on_resume = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };

    // An empty entry list disables the whole section.
    if len == 0 {
        return html! {};
    }

    let slide_class = match *direction {
        SlideDirection::Forward => "slide slide-forward",
        SlideDirection::Backward => "slide slide-backward",
    };

    html! {
        <section id="testimonials" class="testimonials-section">
            <div class="testimonials-inner">
                <h2>{"What Our Customers Say"}</h2>
                <div class="rating-summary">
                    <div class="stars">{render_stars(5)}</div>
                    <span class="rating-text">{"5.0 out of 5"}</span>
                    <span class="rating-count"><strong>{"500+"}</strong>{" happy customers"}</span>
                </div>

                <div class="carousel">
                    <div
                        class="carousel-window"
                        onmouseenter={on_pause}
                        onmouseleave={on_resume}
                    >
                        <div class={slide_class} key={*current as u32}>
                            { testimonial_card(&TESTIMONIALS[*current], false) }
                        </div>
                    </div>

                    <button class="carousel-arrow prev" onclick={on_prev} aria-label="Previous testimonial">
                        {"‹"}
                    </button>
                    <button class="carousel-arrow next" onclick={on_next} aria-label="Next testimonial">
                        {"›"}
                    </button>

                    <div class="carousel-dots">
                        {
                            (0..len).map(|i| {
                                let select_dot = select_dot.clone();
                                let active = i == *current;
                                html! {
                                    <button
                                        key={i as u32}
                                        class={classes!("dot", active.then(|| "active"))}
                                        aria-label={format!("Go to testimonial {}", i + 1)}
                                        onclick={Callback::from(move |_: MouseEvent| select_dot.emit(i))}
                                    />
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="testimonials-grid">
                    {
                        TESTIMONIALS.iter().map(|entry| html! {
                            <div key={entry.id}>
                                { testimonial_card(entry, true) }
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .testimonials-section {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(to bottom, #f9fafb, #fff);
                }

                .testimonials-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .testimonials-section h2 {
                    font-family: Georgia, serif;
                    font-size: 2.8rem;
                    color: #333;
                    text-align: center;
                    margin-bottom: 1rem;
                }

                .rating-summary {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                    margin-bottom: 3rem;
                    color: #555;
                }

                .rating-count strong {
                    color: #9B786F;
                    font-size: 1.6rem;
                }

                .star {
                    color: #FACC15;
                    font-size: 1.1rem;
                }

                .carousel {
                    position: relative;
                    max-width: 760px;
                    margin: 0 auto;
                }

                .carousel-window {
                    overflow: hidden;
                }

                @keyframes slide-in-forward {
                    from { transform: translateX(60px); opacity: 0; }
                    to { transform: translateX(0); opacity: 1; }
                }

                @keyframes slide-in-backward {
                    from { transform: translateX(-60px); opacity: 0; }
                    to { transform: translateX(0); opacity: 1; }
                }

                .slide-forward {
                    animation: slide-in-forward 0.4s ease-out;
                }

                .slide-backward {
                    animation: slide-in-backward 0.4s ease-out;
                }

                .testimonial-card {
                    position: relative;
                    background: #fff;
                    border-radius: 16px;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.1);
                    padding: 3rem;
                }

                .testimonial-card.compact {
                    padding: 1.8rem;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
                }

                .quote-mark {
                    position: absolute;
                    top: 1.2rem;
                    right: 1.5rem;
                    font-size: 3rem;
                    color: #9B786F;
                    opacity: 0.15;
                }

                .card-head {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.2rem;
                }

                .avatar {
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    background: #9B786F;
                    color: #fff;
                    font-size: 1.5rem;
                    font-weight: bold;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }

                .card-head h3 {
                    font-size: 1.2rem;
                    color: #333;
                    margin: 0;
                }

                .quote-text {
                    color: #555;
                    font-size: 1.1rem;
                    line-height: 1.7;
                    font-family: Georgia, serif;
                }

                .testimonial-card.compact .quote-text {
                    font-size: 0.95rem;
                }

                .carousel-arrow {
                    position: absolute;
                    top: 45%;
                    transform: translateY(-50%);
                    background: #fff;
                    color: #9B786F;
                    border: none;
                    border-radius: 50%;
                    width: 44px;
                    height: 44px;
                    font-size: 1.8rem;
                    line-height: 1;
                    cursor: pointer;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.15);
                    transition: all 0.2s ease;
                }

                .carousel-arrow:hover {
                    transform: translateY(-50%) scale(1.1);
                }

                .carousel-arrow.prev { left: -22px; }
                .carousel-arrow.next { right: -22px; }

                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 2rem;
                }

                .dot {
                    width: 12px;
                    height: 12px;
                    border-radius: 999px;
                    border: none;
                    background: #D1D5DB;
                    cursor: pointer;
                    transition: all 0.3s ease;
                    padding: 0;
                }

                .dot.active {
                    width: 32px;
                    background: #9B786F;
                }

                .testimonials-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                    margin-top: 4rem;
                }

                @media (max-width: 768px) {
                    .testimonials-grid {
                        grid-template-columns: 1fr;
                    }

                    .carousel-arrow.prev { left: 4px; }
                    .carousel-arrow.next { right: 4px; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_forward_wraps_back_to_start() {
        for len in 1..=8 {
            let mut index = 0;
            for _ in 0..len {
                index = advance(index, len, true);
            }
            assert_eq!(index, 0, "len {}", len);
        }
    }

    #[test]
    fn five_next_clicks_over_four_entries_land_on_one() {
        let mut index = 0;
        for _ in 0..5 {
            index = advance(index, 4, true);
        }
        assert_eq!(index, 1);
    }

    #[test]
    fn advancing_backward_from_zero_wraps_to_last() {
        assert_eq!(advance(0, 4, false), 3);
        assert_eq!(advance(0, 1, false), 0);
    }

    #[test]
    fn forward_then_backward_is_identity() {
        for start in 0..4 {
            let there = advance(start, 4, true);
            assert_eq!(advance(there, 4, false), start);
        }
    }

    #[test]
    fn dot_direction_follows_target_ordering() {
        assert_eq!(direction_to(0, 3), Some(SlideDirection::Forward));
        assert_eq!(direction_to(3, 0), Some(SlideDirection::Backward));
        assert_eq!(direction_to(2, 2), None);
    }

    #[test]
    fn entry_list_is_well_formed() {
        assert!(!TESTIMONIALS.is_empty());
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
