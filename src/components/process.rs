use yew::prelude::*;

use crate::content::PROCESS_STEPS;

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="process" class="process-section">
            <div class="process-inner">
                <h2>{"How It Works"}</h2>
                <div class="process-divider"></div>

                <div class="process-steps">
                    {
                        PROCESS_STEPS.iter().map(|step| html! {
                            <div class="process-step" key={step.number as u32}>
                                <div class="step-number">{step.number}</div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .process-section {
                    padding: 5rem 1.5rem;
                    background: #fff;
                }

                .process-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .process-section h2 {
                    font-family: Georgia, serif;
                    font-size: 2.8rem;
                    color: #9B786F;
                    text-align: center;
                    margin-bottom: 0.8rem;
                }

                .process-divider {
                    width: 96px;
                    height: 4px;
                    background: #9B786F;
                    margin: 0 auto 3rem;
                }

                .process-steps {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .process-step {
                    text-align: center;
                    padding: 1.5rem 1rem;
                }

                .step-number {
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
                    margin: 0 auto 1.2rem;
                }

                .process-step h3 {
                    font-family: Georgia, serif;
                    color: #333;
                    font-size: 1.2rem;
                    margin-bottom: 0.6rem;
                }

                .process-step p {
                    color: #666;
                    line-height: 1.6;
                    font-size: 0.95rem;
                }

                @media (max-width: 768px) {
                    .process-steps {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 480px) {
                    .process-steps {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
