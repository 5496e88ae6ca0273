use yew::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config;
use crate::content::NAV_LINKS;
use crate::scroll::scroll_to_anchor;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > config::NAV_SCROLL_THRESHOLD_PX);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Clicking any link scrolls to its section and, on mobile, closes
    // the menu as a side effect.
    let goto_section = {
        let menu_open = menu_open.clone();
        Callback::from(move |(e, anchor): (MouseEvent, &'static str)| {
            e.prevent_default();
            scroll_to_anchor(anchor);
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a
                    href="#hero"
                    class="nav-logo"
                    onclick={
                        let goto_section = goto_section.clone();
                        Callback::from(move |e: MouseEvent| goto_section.emit((e, "hero")))
                    }
                >
                    {"Alpha Books"}
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|(label, anchor)| {
                            let goto_section = goto_section.clone();
                            let anchor = *anchor;
                            html! {
                                <a
                                    href={format!("#{}", anchor)}
                                    class="nav-link"
                                    onclick={Callback::from(move |e: MouseEvent| {
                                        goto_section.emit((e, anchor))
                                    })}
                                >
                                    {*label}
                                </a>
                            }
                        }).collect::<Html>()
                    }
                    <a
                        href="#booking"
                        class="nav-cta-button"
                        onclick={
                            let goto_section = goto_section.clone();
                            Callback::from(move |e: MouseEvent| goto_section.emit((e, "booking")))
                        }
                    >
                        {"Book an appointment"}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: rgba(155, 120, 111, 0.9);
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.15);
                    transition: all 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(155, 120, 111, 0.97);
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.25);
                    backdrop-filter: blur(6px);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 72px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-family: Georgia, serif;
                    font-size: 1.5rem;
                    font-weight: bold;
                    color: #fff;
                    text-decoration: none;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .nav-link {
                    color: rgba(255, 255, 255, 0.9);
                    text-decoration: none;
                    padding: 0.5rem 0.8rem;
                    border-radius: 6px;
                    font-size: 1rem;
                    transition: all 0.2s ease;
                }

                .nav-link:hover {
                    color: #fff;
                    background: rgba(255, 255, 255, 0.1);
                }

                .nav-cta-button {
                    margin-left: 1rem;
                    background: #FF6B6B;
                    color: #fff;
                    padding: 0.6rem 1.2rem;
                    border-radius: 8px;
                    font-weight: 600;
                    text-decoration: none;
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.2);
                    transition: background 0.2s ease;
                }

                .nav-cta-button:hover {
                    background: #ff5252;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                    transition: all 0.3s ease;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                        position: fixed;
                        top: 72px;
                        right: 0;
                        bottom: 0;
                        width: 260px;
                        background: #9B786F;
                        flex-direction: column;
                        align-items: stretch;
                        padding: 1.5rem 1rem;
                        gap: 0.8rem;
                        box-shadow: -4px 0 24px rgba(0, 0, 0, 0.3);
                        overflow-y: auto;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                    }

                    .nav-cta-button {
                        margin-left: 0;
                        text-align: center;
                        margin-top: 0.5rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
