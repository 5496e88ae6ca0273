use yew::prelude::*;

use crate::components::{
    about::About, cta::Cta, faq::Faq, footer::Footer, hero::Hero, navbar::Navbar,
    portfolio::Portfolio, process::Process, services::Services, testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <Navbar />
            <Hero />
            <About />
            <Services />
            <Process />
            <Portfolio />
            <Testimonials />
            <Faq />
            <Cta />
            <Footer />

            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto,
                        Helvetica, Arial, sans-serif;
                    color: #1f2937;
                    background: #fff;
                }

                * {
                    box-sizing: border-box;
                }
                "#}
            </style>
        </div>
    }
}
