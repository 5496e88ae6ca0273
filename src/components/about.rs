use yew::prelude::*;

struct Stat {
    icon: &'static str,
    value: &'static str,
    label: &'static str,
}

const STATS: &[Stat] = &[
    Stat { icon: "📚", value: "15+", label: "Years of experience" },
    Stat { icon: "👥", value: "5000+", label: "Happy customers" },
    Stat { icon: "📖", value: "10,000+", label: "Books in stock" },
    Stat { icon: "🏆", value: "100%", label: "Professional service" },
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="about-inner">
                <h2>{"About Us"}</h2>
                <div class="about-divider"></div>

                <div class="about-columns">
                    <div class="about-text">
                        <div class="about-block">
                            <h3>{"A leading bookstore"}</h3>
                            <p>
                                {"We are a leading bookstore with many years of experience, \
                                  specializing in professional, high-quality service for our customers."}
                            </p>
                        </div>
                        <div class="about-block">
                            <h3>{"Quality and excellence"}</h3>
                            <p>
                                {"We are committed to offering the finest books and exceptional \
                                  customer service. Every title is chosen with care to make sure \
                                  our readers leave satisfied."}
                            </p>
                        </div>
                        <div class="about-block">
                            <h3>{"A passion for literature"}</h3>
                            <p>
                                {"Our love of books drives us to keep serving our community with \
                                  dedication and professionalism. We are here to help you find \
                                  the perfect book."}
                            </p>
                        </div>
                    </div>

                    <div class="about-quote">
                        <blockquote>
                            {"Your experts in the world of books"}
                        </blockquote>
                        <p>
                            {"With years of experience and deep expertise, we provide a reliable, \
                              professional service you can count on. Our team is committed to \
                              giving you the best possible experience."}
                        </p>
                    </div>
                </div>

                <div class="about-stats">
                    {
                        STATS.iter().map(|stat| html! {
                            <div class="stat-card">
                                <div class="stat-icon">{stat.icon}</div>
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .about-section {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(to bottom, #f9fafb, #fff);
                }

                .about-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .about-section h2 {
                    font-family: Georgia, serif;
                    font-size: 2.8rem;
                    color: #9B786F;
                    text-align: center;
                    margin-bottom: 0.8rem;
                }

                .about-divider {
                    width: 96px;
                    height: 4px;
                    background: #9B786F;
                    margin: 0 auto 3rem;
                }

                .about-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    margin-bottom: 4rem;
                    align-items: center;
                }

                .about-block h3 {
                    font-family: Georgia, serif;
                    color: #9B786F;
                    font-size: 1.5rem;
                    margin-bottom: 0.6rem;
                }

                .about-block p {
                    color: #555;
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }

                .about-quote {
                    background: #fff;
                    border-right: 4px solid #9B786F;
                    border-radius: 12px;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.08);
                    padding: 2.5rem;
                }

                .about-quote blockquote {
                    font-family: Georgia, serif;
                    font-size: 1.5rem;
                    color: #333;
                    margin: 0 0 1rem;
                }

                .about-quote p {
                    color: #666;
                    line-height: 1.7;
                }

                .about-stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .stat-card {
                    background: #fff;
                    border-top: 4px solid #9B786F;
                    border-radius: 10px;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
                    padding: 1.8rem 1rem;
                    text-align: center;
                }

                .stat-icon {
                    font-size: 2rem;
                    margin-bottom: 0.6rem;
                }

                .stat-value {
                    font-size: 2rem;
                    font-weight: bold;
                    color: #9B786F;
                    margin-bottom: 0.4rem;
                }

                .stat-label {
                    color: #666;
                    font-size: 0.95rem;
                }

                @media (max-width: 768px) {
                    .about-columns {
                        grid-template-columns: 1fr;
                    }

                    .about-stats {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
