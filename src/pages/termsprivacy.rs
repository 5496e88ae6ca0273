use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: &'static str,
    children: Children,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    html! {
        <div class="legal-page">
            <div class="legal-content">
                <h1>{props.title}</h1>
                { for props.children.iter() }
                <Link<Route> to={Route::Home} classes="legal-back">
                    {"← Back to the store"}
                </Link<Route>>
            </div>

            <style>
                {r#"
                .legal-page {
                    min-height: 100vh;
                    background: #f9fafb;
                    padding: 4rem 1.5rem;
                }

                .legal-content {
                    max-width: 720px;
                    margin: 0 auto;
                    background: #fff;
                    border-radius: 12px;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
                    padding: 3rem;
                }

                .legal-content h1 {
                    font-family: Georgia, serif;
                    color: #9B786F;
                    margin-bottom: 1.5rem;
                }

                .legal-content h2 {
                    color: #333;
                    font-size: 1.3rem;
                    margin: 1.8rem 0 0.6rem;
                }

                .legal-content p {
                    color: #555;
                    line-height: 1.7;
                }

                .legal-back {
                    display: inline-block;
                    margin-top: 2.5rem;
                    color: #9B786F;
                    text-decoration: none;
                    font-weight: 600;
                }

                .legal-back:hover {
                    text-decoration: underline;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(TermsOfUse)]
pub fn terms_of_use() -> Html {
    html! {
        <LegalPage title="Terms of Use">
            <h2>{"Purchases"}</h2>
            <p>
                {"Orders placed through the store, by phone, or on the website are binding \
                  once confirmed. Prices include VAT and may change without prior notice; \
                  the price at the time of order is the one honored."}
            </p>
            <h2>{"Returns and exchanges"}</h2>
            <p>
                {"Books may be returned or exchanged within 14 days of purchase in new, \
                  undamaged condition with the original receipt."}
            </p>
            <h2>{"Events"}</h2>
            <p>
                {"Seats at author meetups, reading clubs, and workshops are limited and \
                  allocated by registration order. We may reschedule events and will notify \
                  registered participants."}
            </p>
        </LegalPage>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage title="Privacy Policy">
            <h2>{"What we collect"}</h2>
            <p>
                {"We keep only what we need to serve you: contact details you give us for \
                  orders, event registrations, and the newsletter."}
            </p>
            <h2>{"Newsletter"}</h2>
            <p>
                {"Your email address is used solely for the updates you signed up for. \
                  Every newsletter includes an unsubscribe link, and you can ask us to \
                  remove your address at any time."}
            </p>
            <h2>{"Sharing"}</h2>
            <p>
                {"We never sell or share your details with third parties, except delivery \
                  providers fulfilling your order."}
            </p>
        </LegalPage>
    }
}
