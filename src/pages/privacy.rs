use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <div>
                <h1>{"Privacy Policy"}</h1>

                <section>
                    <h2>{"1. Data Collection"}</h2>
                    <p>{ format!("{} is a static site. We do not collect or store:", config::site_name()) }</p>
                    <ul>
                        <li>{"Account or contact details"}</li>
                        <li>{"Your selections in the model hub, vault or prologue"}</li>
                        <li>{"Analytics or tracking cookies"}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"2. Selections"}</h2>
                    <p>{"Everything you select on the page lives in your browser tab only and is gone when you reload."}</p>
                </section>

                <section>
                    <h2>{"3. Third-Party Links"}</h2>
                    <p>{"Social links in the footer lead to external services with their own privacy policies."}</p>
                </section>

                <section>
                    <h2>{"4. Contact Information"}</h2>
                    <p>{"For privacy-related inquiries, contact:"}</p>
                    <p>{"Email: hello@neuralforge.ai"}</p>
                </section>

                <div class="legal-links">
                    <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{"Page not found"}</h1>
                <div class="legal-links">
                    <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
