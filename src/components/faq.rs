use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::FAQ_ENTRIES;
use crate::scroll::scroll_to_anchor;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
}

// Each item keeps its own open flag, so any number of answers can be
// expanded at once.
#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let goto_contact = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor("contact");
    });

    html! {
        <section id="faq" class="faq-section">
            <div class="faq-inner">
                <h2>{"Frequently Asked Questions"}</h2>
                <p class="faq-lead">
                    {"Answers to the most common questions about the store and our services"}
                </p>

                <div class="faq-list">
                    {
                        FAQ_ENTRIES.iter().map(|entry| html! {
                            <FaqItem
                                key={entry.question}
                                question={entry.question}
                                answer={entry.answer}
                            />
                        }).collect::<Html>()
                    }
                </div>

                <div class="faq-contact-card">
                    <h3>{"Still have a question?"}</h3>
                    <p>{"We're here to help! Get in touch and we'll be glad to answer anything."}</p>
                    <a href="#contact" onclick={goto_contact} class="faq-contact-button">
                        {"Contact us"}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .faq-section {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(to bottom, #fff, #f9fafb);
                }

                .faq-inner {
                    max-width: 800px;
                    margin: 0 auto;
                }

                .faq-section h2 {
                    font-family: Georgia, serif;
                    font-size: 2.8rem;
                    color: #9B786F;
                    text-align: center;
                    margin-bottom: 0.8rem;
                }

                .faq-lead {
                    text-align: center;
                    color: #666;
                    font-size: 1.1rem;
                    margin-bottom: 3rem;
                }

                .faq-list {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
                    overflow: hidden;
                }

                .faq-item {
                    border-bottom: 1px solid #e5e7eb;
                    transition: all 0.3s ease;
                }

                .faq-item:last-child {
                    border-bottom: none;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.3rem 1.5rem;
                    background: none;
                    border: none;
                    font-size: 1.1rem;
                    font-weight: 600;
                    color: #1f2937;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    transition: all 0.2s ease;
                }

                .faq-question:hover {
                    background: #f9fafb;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #9B786F;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.3rem;
                }

                .faq-answer p {
                    color: #555;
                    line-height: 1.7;
                }

                .faq-contact-card {
                    margin-top: 3rem;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.05);
                    padding: 2.5rem;
                    text-align: center;
                }

                .faq-contact-card h3 {
                    font-family: Georgia, serif;
                    font-size: 1.6rem;
                    color: #1f2937;
                    margin-bottom: 0.6rem;
                }

                .faq-contact-card p {
                    color: #666;
                    margin-bottom: 1.5rem;
                }

                .faq-contact-button {
                    display: inline-block;
                    background: #9B786F;
                    color: #fff;
                    padding: 0.8rem 2rem;
                    border-radius: 8px;
                    font-weight: 600;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }

                .faq-contact-button:hover {
                    background: #8a6960;
                }
                "#}
            </style>
        </section>
    }
}
