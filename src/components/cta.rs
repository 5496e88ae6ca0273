use yew::prelude::*;
use web_sys::MouseEvent;

use crate::scroll::scroll_to_anchor;

#[function_component(Cta)]
pub fn cta() -> Html {
    let goto_contact = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor("contact");
    });

    html! {
        <section id="booking" class="cta-section">
            <div class="cta-inner">
                <h2>{"Ready for the perfect reading experience?"}</h2>
                <p>
                    {"Join thousands of happy customers who have already discovered our \
                      special collection. Professional service, a rich selection, and an \
                      unforgettable shopping experience await you."}
                </p>
                <a href="#contact" onclick={goto_contact} class="cta-button">
                    {"Book an appointment"}
                </a>
                <p class="cta-urgency">{"⏳ Limited spots — don't miss out"}</p>
            </div>

            <style>
                {r#"
                .cta-section {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(135deg, #9B786F, #7A5F58);
                    color: #fff;
                    text-align: center;
                }

                .cta-inner {
                    max-width: 760px;
                    margin: 0 auto;
                }

                .cta-section h2 {
                    font-family: Georgia, serif;
                    font-size: 2.6rem;
                    margin-bottom: 1.2rem;
                }

                .cta-section p {
                    font-size: 1.15rem;
                    color: rgba(255, 255, 255, 0.9);
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }

                .cta-button {
                    display: inline-block;
                    background: #FF6B6B;
                    color: #fff;
                    padding: 1rem 2.5rem;
                    border-radius: 10px;
                    font-size: 1.2rem;
                    font-weight: 600;
                    text-decoration: none;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.25);
                    transition: all 0.3s ease;
                }

                .cta-button:hover {
                    background: #ff5252;
                    transform: scale(1.05);
                }

                .cta-urgency {
                    margin-top: 1.5rem;
                    font-size: 0.95rem;
                    color: rgba(255, 255, 255, 0.75);
                }

                @media (max-width: 768px) {
                    .cta-section h2 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
