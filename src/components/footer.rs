use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::particles::{FieldKind, ParticleField};
use crate::config;
use crate::Route;

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("https://discord.com", "Discord"),
    ("https://twitter.com", "Twitter"),
    ("https://youtube.com", "YouTube"),
    ("https://medium.com", "Medium"),
];

const PARTICLE_PALETTE: &[&str] = &[
    "rgba(255, 255, 255, 0.4)",
    "rgba(147, 51, 234, 0.4)",
    "rgba(236, 72, 153, 0.4)",
];
const GLOW_PALETTE: &[&str] = &["rgba(255, 255, 255, 0.1)", "rgba(147, 51, 234, 0.15)"];

pub fn copyright(site: &str, year: i32) -> String {
    format!("©{} {}. All rights reserved", site, year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="section-background">
                <ParticleField
                    class="footer-particle"
                    seed={91}
                    count={20}
                    palette={PARTICLE_PALETTE}
                    size={(1.0, 3.0)}
                />
                <ParticleField
                    class="footer-glow"
                    kind={FieldKind::Glows}
                    seed={92}
                    count={6}
                    palette={GLOW_PALETTE}
                    size={(80.0, 230.0)}
                    max_delay={6.0}
                />
                <div class="footer-pattern" />
            </div>

            <div class="container footer-row">
                <p class="footer-copy">{ copyright(config::site_name(), Utc::now().year()) }</p>

                <div class="social-links">
                    { for SOCIAL_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} target="_blank" rel="noopener noreferrer">{ *label }</a>
                    }) }
                </div>

                <Link<Route> to={Route::Privacy} classes="footer-link">{"Privacy Policy"}</Link<Route>>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line() {
        assert_eq!(copyright("NeuralForge", 2026), "©NeuralForge 2026. All rights reserved");
    }
}
