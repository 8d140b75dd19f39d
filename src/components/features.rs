use yew::prelude::*;

use crate::components::bento::{BentoCard, BentoTilt};
use crate::components::particles::{FieldKind, ParticleField};

const PARTICLE_PALETTE: &[&str] = &[
    "rgba(59, 130, 246, 0.4)",
    "rgba(147, 51, 234, 0.4)",
    "rgba(236, 72, 153, 0.4)",
    "rgba(34, 197, 94, 0.3)",
];

const GLOW_PALETTE: &[&str] = &[
    "rgba(59, 130, 246, 0.08)",
    "rgba(147, 51, 234, 0.08)",
    "rgba(236, 72, 153, 0.08)",
    "rgba(34, 197, 94, 0.06)",
];

/// Dashed connector lines drawn behind the grid: (x1, y1, x2, y2, dash, seconds).
const CONNECTIONS: [(u8, u8, u8, u8, &str, u8); 4] = [
    (15, 15, 35, 45, "4,6", 4),
    (65, 25, 85, 55, "3,7", 5),
    (25, 75, 55, 45, "5,5", 3),
    (45, 85, 75, 15, "2,8", 6),
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="features-section">
            <div class="section-background">
                <ParticleField
                    class="features-particle"
                    seed={21}
                    count={30}
                    palette={PARTICLE_PALETTE}
                    size={(1.0, 3.5)}
                    max_delay={12.0}
                />
                <ParticleField
                    class="features-glow"
                    kind={FieldKind::Glows}
                    seed={22}
                    count={10}
                    palette={GLOW_PALETTE}
                    size={(200.0, 500.0)}
                    max_delay={6.0}
                />
                <svg class="connection-network">
                    { for CONNECTIONS.iter().enumerate().map(|(i, (x1, y1, x2, y2, dash, secs))| html! {
                        <line
                            x1={format!("{}%", x1)}
                            y1={format!("{}%", y1)}
                            x2={format!("{}%", x2)}
                            y2={format!("{}%", y2)}
                            stroke-dasharray={*dash}
                            class="connection-line"
                            style={format!("animation-duration: {}s; animation-direction: {};", secs, if i % 2 == 0 { "normal" } else { "reverse" })}
                        />
                    }) }
                </svg>
            </div>

            <div class="container">
                <div class="features-intro">
                    <p class="features-lead">{"Into the Intelligence Layer"}</p>
                    <p class="features-copy">
                        {"Immerse yourself in a rich and ever-expanding ecosystem where a vibrant array of models converge into an interconnected intelligence experience on your data."}
                    </p>
                </div>

                <BentoTilt class="bento-frame bento-hero">
                    <BentoCard
                        src="videos/feature-1.mp4"
                        title={html! { <>{"radia"}<b>{"n"}</b>{"t"}</> }}
                        description="A cross-platform training studio, turning your experiments across notebooks and clusters into a rewarding pipeline."
                        coming_soon={true}
                    />
                </BentoTilt>

                <div class="bento-grid">
                    <BentoTilt class="bento-tilt-1 bento-tall">
                        <BentoCard
                            src="videos/feature-2.mp4"
                            title={html! { <>{"zig"}<b>{"m"}</b>{"a"}</> }}
                            description="A curated model collection, the IP primed for fine-tuning and expansion."
                            coming_soon={true}
                        />
                    </BentoTilt>

                    <BentoTilt class="bento-tilt-1">
                        <BentoCard
                            src="videos/feature-3.mp4"
                            title={html! { <>{"n"}<b>{"e"}</b>{"xus"}</> }}
                            description="A social hub for model builders, adding a new dimension of collaboration to AI communities."
                            coming_soon={true}
                        />
                    </BentoTilt>

                    <BentoTilt class="bento-tilt-1">
                        <BentoCard
                            src="videos/feature-4.mp4"
                            title={html! { <>{"az"}<b>{"u"}</b>{"l"}</> }}
                            description="A cross-platform AI agent, making your workflows more productive."
                            coming_soon={true}
                        />
                    </BentoTilt>

                    <BentoTilt class="bento-tilt-2">
                        <div class="bento-more">
                            <h1 class="bento-title special-font">
                                {"M"}<b>{"o"}</b>{"re co"}<b>{"m"}</b>{"ing s"}<b>{"o"}</b>{"on."}
                            </h1>
                            <span class="bento-more-arrow">{"➤"}</span>
                        </div>
                    </BentoTilt>

                    <BentoTilt class="bento-tilt-2">
                        <video src="videos/feature-5.mp4" loop={true} muted={true} autoplay={true} class="bento-video" />
                    </BentoTilt>
                </div>
            </div>
        </section>
    }
}
