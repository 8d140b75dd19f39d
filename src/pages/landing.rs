use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, features::Features, footer::Footer, hero::Hero,
    intelligence::IntelligenceLayer, nexus::Nexus, prologue::Prologue, story::Story, vault::Vault,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="landing">
            <Hero />
            <About />
            <Features />
            <Nexus />
            <Vault />
            <IntelligenceLayer />
            <Prologue />
            <Story />
            <Contact />
            <Footer />
        </main>
    }
}
