use yew::prelude::*;
use web_sys::MouseEvent;

use crate::scroll::scroll_to_anchor;

#[function_component(Hero)]
pub fn hero() -> Html {
    let scroll_to_booking = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor("booking");
    });

    html! {
        <section id="hero" class="hero-section">
            <div class="hero-background">
                <img
                    src="https://images.unsplash.com/photo-1507842217343-583bb7270b66?q=80&w=2000&auto=format&fit=crop"
                    alt="Bookstore shelves"
                />
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-content">
                <h1>{"The Leading Bookstore in Israel"}</h1>
                <p class="hero-subtitle">{"A perfect customer experience, every visit"}</p>
                <p class="hero-description">
                    {"We are a leading bookstore with many years of experience, \
                      specializing in professional, high-quality service for our customers."}
                </p>
                <button class="hero-cta" onclick={scroll_to_booking}>
                    {"📖 Book an appointment"}
                </button>

                <div class="hero-trust">
                    <span>{"Professional service"}</span>
                    <span>{"Years of experience"}</span>
                    <span>{"Proven reliability"}</span>
                </div>
            </div>

            <style>
                {r#"
                .hero-section {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }

                .hero-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(
                        to bottom,
                        rgba(0, 0, 0, 0.6),
                        rgba(0, 0, 0, 0.5) 50%,
                        rgba(0, 0, 0, 0.7)
                    );
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 800px;
                    padding: 2rem;
                    text-align: center;
                    font-family: Georgia, serif;
                }

                .hero-content h1 {
                    font-size: 3.5rem;
                    color: #C9A79C;
                    margin-bottom: 1.5rem;
                    line-height: 1.2;
                }

                .hero-subtitle {
                    font-size: 1.8rem;
                    color: rgba(255, 255, 255, 0.9);
                    margin-bottom: 1rem;
                }

                .hero-description {
                    font-size: 1.2rem;
                    color: rgba(255, 255, 255, 0.8);
                    margin-bottom: 2.5rem;
                    line-height: 1.6;
                }

                .hero-cta {
                    background: #FF6B6B;
                    color: #fff;
                    border: none;
                    padding: 1.1rem 2.5rem;
                    border-radius: 10px;
                    font-size: 1.3rem;
                    font-weight: 600;
                    font-family: inherit;
                    cursor: pointer;
                    box-shadow: 0 8px 32px rgba(255, 107, 107, 0.4);
                    transition: all 0.3s ease;
                }

                .hero-cta:hover {
                    background: #ff5252;
                    transform: scale(1.05);
                }

                .hero-trust {
                    margin-top: 3rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 2rem;
                    justify-content: center;
                    color: rgba(255, 255, 255, 0.7);
                }

                .hero-trust span::before {
                    content: '•';
                    color: #9B786F;
                    margin-right: 0.5rem;
                }

                @media (max-width: 768px) {
                    .hero-content h1 {
                        font-size: 2.4rem;
                    }

                    .hero-subtitle {
                        font-size: 1.4rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
