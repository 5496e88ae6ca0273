use yew::prelude::*;

use crate::content::SERVICES;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services-section">
            <div class="services-inner">
                <h2>{"Our Services"}</h2>
                <div class="services-divider"></div>

                <div class="services-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <div class="service-card" key={service.id}>
                                <div class="service-icon">{service.icon}</div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .services-section {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(to bottom, #fff, #f9fafb);
                }

                .services-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .services-section h2 {
                    font-family: Georgia, serif;
                    font-size: 2.8rem;
                    color: #9B786F;
                    text-align: center;
                    margin-bottom: 0.8rem;
                }

                .services-divider {
                    width: 96px;
                    height: 4px;
                    background: #9B786F;
                    margin: 0 auto 3rem;
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .service-card {
                    background: #fff;
                    border-radius: 12px;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
                    padding: 2.5rem 2rem;
                    text-align: center;
                    transition: all 0.3s ease;
                }

                .service-card:hover {
                    transform: translateY(-6px);
                    box-shadow: 0 12px 32px rgba(155, 120, 111, 0.2);
                }

                .service-icon {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }

                .service-card h3 {
                    font-family: Georgia, serif;
                    color: #9B786F;
                    font-size: 1.4rem;
                    margin-bottom: 0.8rem;
                }

                .service-card p {
                    color: #666;
                    line-height: 1.6;
                }

                @media (max-width: 900px) {
                    .services-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 600px) {
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
