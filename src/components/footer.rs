use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::{HtmlInputElement, MouseEvent, SubmitEvent};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::config;
use crate::content::NAV_LINKS;
use crate::scroll::scroll_to_anchor;
use crate::Route;

/// Lifecycle of one newsletter signup attempt.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NewsletterPhase {
    Idle,
    Submitting,
    Confirmed,
    Failed,
}

/// Minimal `name@host.tld` shape check. The browser's required-email
/// constraint covers the common path; this guards programmatic submits
/// and gives the Failed phase a reachable edge.
pub fn looks_like_email(address: &str) -> bool {
    let address = address.trim();
    if address.contains(char::is_whitespace) {
        return false;
    }
    match address.split_once('@') {
        Some((local, host)) => {
            !local.is_empty()
                && !host.is_empty()
                && host.contains('.')
                && !host.starts_with('.')
                && !host.ends_with('.')
        }
        None => false,
    }
}

/// Phase reached by a submit, or `None` when the submit is ignored.
/// Only an idle or failed form accepts a new attempt.
pub fn phase_after_submit(phase: NewsletterPhase, address_ok: bool) -> Option<NewsletterPhase> {
    match phase {
        NewsletterPhase::Idle | NewsletterPhase::Failed => Some(if address_ok {
            NewsletterPhase::Submitting
        } else {
            NewsletterPhase::Failed
        }),
        NewsletterPhase::Submitting | NewsletterPhase::Confirmed => None,
    }
}

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "https://facebook.com"),
    ("Instagram", "https://instagram.com"),
    ("Twitter", "https://twitter.com"),
    ("WhatsApp", "https://whatsapp.com"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = use_state(String::new);
    let phase = use_state(|| NewsletterPhase::Idle);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let phase = phase.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let address = email.trim().to_string();
            let Some(next) = phase_after_submit(*phase, looks_like_email(&address)) else {
                return;
            };
            phase.set(next);
            if next != NewsletterPhase::Submitting {
                return;
            }

            log::info!("newsletter signup submitted");
            let email = email.clone();
            let phase = phase.clone();
            // No mail-list backend is wired up yet; simulate the round
            // trip and the later return to idle.
            spawn_local(async move {
                TimeoutFuture::new(config::NEWSLETTER_SUBMIT_DELAY_MS).await;
                email.set(String::new());
                phase.set(NewsletterPhase::Confirmed);
                TimeoutFuture::new(config::NEWSLETTER_RESET_DELAY_MS).await;
                phase.set(NewsletterPhase::Idle);
            });
        })
    };

    let goto_section = Callback::from(move |(e, anchor): (MouseEvent, &'static str)| {
        e.prevent_default();
        scroll_to_anchor(anchor);
    });

    let submitting = *phase == NewsletterPhase::Submitting;

    html! {
        <footer id="contact" class="site-footer">
            <div class="footer-inner">
                <div class="footer-columns">
                    <div class="footer-column">
                        <h3>{"Alpha Books"}</h3>
                        <p class="footer-blurb">
                            {"A leading bookstore with many years of experience, specializing \
                              in professional, high-quality service for our customers."}
                        </p>
                        <div class="social-links">
                            {
                                SOCIAL_LINKS.iter().map(|(name, url)| html! {
                                    <a
                                        key={*name}
                                        href={*url}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="social-link"
                                        aria-label={*name}
                                    >
                                        {name.chars().next().map(String::from).unwrap_or_default()}
                                    </a>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div class="footer-column">
                        <h4>{"Quick Links"}</h4>
                        <ul class="footer-links">
                            {
                                NAV_LINKS.iter()
                                    .filter(|(_, anchor)| *anchor != "contact")
                                    .map(|(label, anchor)| {
                                        let goto_section = goto_section.clone();
                                        let anchor = *anchor;
                                        html! {
                                            <li key={anchor}>
                                                <a
                                                    href={format!("#{}", anchor)}
                                                    onclick={Callback::from(move |e: MouseEvent| {
                                                        goto_section.emit((e, anchor))
                                                    })}
                                                >
                                                    {*label}
                                                </a>
                                            </li>
                                        }
                                    }).collect::<Html>()
                            }
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h4>{"Contact"}</h4>
                        <address class="footer-contact">
                            <div>{"📍 123 Books St., Tel Aviv"}</div>
                            <div><a href="tel:+972501234567">{"📞 050-123-4567"}</a></div>
                            <div><a href="mailto:info@alphabooks.co.il">{"✉️ info@alphabooks.co.il"}</a></div>
                            <div class="footer-hours">
                                <div>{"🕘 Sun – Thu: 9:00 – 19:00"}</div>
                                <div class="hours-indent">{"Fri: 9:00 – 14:00"}</div>
                            </div>
                        </address>
                    </div>

                    <div class="footer-column">
                        <h4>{"Newsletter"}</h4>
                        <p class="footer-blurb">
                            {"Sign up for updates on new books and special discounts"}
                        </p>
                        <form onsubmit={on_submit} class="newsletter-form">
                            <input
                                type="email"
                                placeholder="Enter your email"
                                required=true
                                value={(*email).clone()}
                                oninput={on_email_input}
                                disabled={submitting}
                            />
                            <button type="submit" disabled={submitting}>
                                { if submitting { "Sending…" } else { "Subscribe" } }
                            </button>
                            {
                                match *phase {
                                    NewsletterPhase::Confirmed => html! {
                                        <p class="newsletter-status ok" role="status">
                                            {"Thanks for subscribing!"}
                                        </p>
                                    },
                                    NewsletterPhase::Failed => html! {
                                        <p class="newsletter-status error" role="status">
                                            {"Please enter a valid email address."}
                                        </p>
                                    },
                                    _ => html! {},
                                }
                            }
                        </form>
                    </div>
                </div>

                <div class="footer-divider"></div>

                <div class="footer-bottom">
                    <ul class="legal-links">
                        <li><Link<Route> to={Route::Terms}>{"Terms of Use"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>></li>
                    </ul>
                    <p>{"© 2024 Alpha Books. All rights reserved."}</p>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #7A5F58;
                    color: #f3f4f6;
                    padding: 4rem 1.5rem 2rem;
                }

                .footer-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .footer-columns {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2.5rem;
                }

                .footer-column h3 {
                    font-family: Georgia, serif;
                    font-size: 1.5rem;
                    color: #F5E6D3;
                    margin-bottom: 1rem;
                }

                .footer-column h4 {
                    font-size: 1.1rem;
                    color: #F5E6D3;
                    margin-bottom: 1rem;
                }

                .footer-blurb {
                    color: #d1d5db;
                    font-size: 0.92rem;
                    line-height: 1.6;
                    margin-bottom: 1.2rem;
                }

                .social-links {
                    display: flex;
                    gap: 0.7rem;
                }

                .social-link {
                    width: 38px;
                    height: 38px;
                    border-radius: 50%;
                    background: #9B786F;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: bold;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }

                .social-link:hover {
                    background: #B89080;
                }

                .footer-links {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .footer-links li {
                    margin-bottom: 0.7rem;
                }

                .footer-links a,
                .footer-contact a {
                    color: #d1d5db;
                    text-decoration: none;
                    font-size: 0.92rem;
                    transition: color 0.3s ease;
                }

                .footer-links a:hover,
                .footer-contact a:hover {
                    color: #F5E6D3;
                }

                .footer-contact {
                    font-style: normal;
                    font-size: 0.92rem;
                    color: #d1d5db;
                }

                .footer-contact > div {
                    margin-bottom: 0.7rem;
                }

                .hours-indent {
                    margin-left: 1.4rem;
                }

                .newsletter-form input {
                    width: 100%;
                    padding: 0.6rem 0.9rem;
                    border-radius: 6px;
                    border: none;
                    background: #9B786F;
                    color: #fff;
                    font-size: 0.92rem;
                    margin-bottom: 0.7rem;
                }

                .newsletter-form input::placeholder {
                    color: #d1d5db;
                }

                .newsletter-form input:disabled,
                .newsletter-form button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }

                .newsletter-form button {
                    width: 100%;
                    padding: 0.6rem;
                    border: none;
                    border-radius: 6px;
                    background: #9B786F;
                    color: #fff;
                    font-size: 0.95rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .newsletter-form button:hover:enabled {
                    background: #B89080;
                }

                .newsletter-status {
                    margin-top: 0.7rem;
                    font-size: 0.9rem;
                }

                .newsletter-status.ok {
                    color: #F5E6D3;
                }

                .newsletter-status.error {
                    color: #FFB4B4;
                }

                .footer-divider {
                    border-top: 1px solid #9B786F;
                    margin: 2.5rem 0 1.5rem;
                }

                .footer-bottom {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.9rem;
                    color: #d1d5db;
                }

                .legal-links {
                    list-style: none;
                    display: flex;
                    gap: 1.5rem;
                    padding: 0;
                    margin: 0;
                }

                .legal-links a {
                    color: #d1d5db;
                    text-decoration: none;
                }

                .legal-links a:hover {
                    color: #F5E6D3;
                }

                @media (max-width: 900px) {
                    .footer-columns {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 560px) {
                    .footer-columns {
                        grid-template-columns: 1fr;
                    }

                    .footer-bottom {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("reader@alphabooks.co.il"));
        assert!(looks_like_email("  padded@example.com  "));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!looks_like_email(""));
        assert!(!looks_like_email("   "));
        assert!(!looks_like_email("no-at-sign.com"));
        assert!(!looks_like_email("@missing-local.com"));
        assert!(!looks_like_email("missing-host@"));
        assert!(!looks_like_email("no-dot@host"));
        assert!(!looks_like_email("dot@.leading"));
        assert!(!looks_like_email("dot@trailing."));
        assert!(!looks_like_email("spa ce@example.com"));
    }

    #[test]
    fn idle_form_starts_submitting_on_valid_address() {
        assert_eq!(
            phase_after_submit(NewsletterPhase::Idle, true),
            Some(NewsletterPhase::Submitting)
        );
    }

    #[test]
    fn idle_form_fails_on_invalid_address() {
        assert_eq!(
            phase_after_submit(NewsletterPhase::Idle, false),
            Some(NewsletterPhase::Failed)
        );
    }

    #[test]
    fn failed_form_accepts_a_retry() {
        assert_eq!(
            phase_after_submit(NewsletterPhase::Failed, true),
            Some(NewsletterPhase::Submitting)
        );
        assert_eq!(
            phase_after_submit(NewsletterPhase::Failed, false),
            Some(NewsletterPhase::Failed)
        );
    }

    #[test]
    fn in_flight_and_confirmed_forms_ignore_submits() {
        assert_eq!(phase_after_submit(NewsletterPhase::Submitting, true), None);
        assert_eq!(phase_after_submit(NewsletterPhase::Confirmed, true), None);
    }
}
