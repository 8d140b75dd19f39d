use yew::prelude::*;

use crate::components::animated_title::AnimatedTitle;
use crate::components::bento::BentoTilt;
use crate::components::particles::ParticleField;
use crate::hooks::use_reveal;

const PARTICLE_PALETTE: &[&str] = &["rgba(34, 211, 238, 0.2)"];

const STATS: [(&str, &str); 4] = [
    ("99.9%", "Uptime"),
    ("2.5M", "Models Deployed"),
    ("150+", "Integrations"),
    ("24/7", "Support"),
];

struct Capability {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const CAPABILITIES: [Capability; 4] = [
    Capability {
        title: "Neural Orchestration",
        description: "Intelligent coordination of multiple AI models working in harmony to solve complex problems with minimal human intervention.",
        icon: "⎇",
    },
    Capability {
        title: "Adaptive Learning",
        description: "Continuous improvement through real-time feedback loops that enhance model performance and accuracy over time.",
        icon: "📊",
    },
    Capability {
        title: "Cognitive Mesh",
        description: "Interconnected intelligence network that enables seamless knowledge transfer between specialized AI systems.",
        icon: "☁",
    },
    Capability {
        title: "Predictive Intelligence",
        description: "Advanced forecasting capabilities that anticipate trends and provide actionable insights for strategic decision-making.",
        icon: "➤",
    },
];

#[derive(Properties, PartialEq)]
struct CapabilityCardProps {
    title: AttrValue,
    description: AttrValue,
    icon: AttrValue,
    index: usize,
}

#[function_component(CapabilityCard)]
fn capability_card(props: &CapabilityCardProps) -> Html {
    let card = use_node_ref();
    let revealed = use_reveal(card.clone());

    html! {
        <BentoTilt class="vault-item">
            <div
                ref={card}
                class={classes!("showcase-card", "capability-card", "reveal-card", revealed.then_some("revealed"))}
                style={format!("transition-delay: {:.1}s;", props.index as f64 * 0.1)}
            >
                <div class="card-tint gradient-blue" />
                <div class="card-shade" />
                <div class="card-body">
                    <div class="card-header">
                        <div class="vault-badge gradient-cyan">{"Layer"}</div>
                        <span class="card-icon">{ props.icon.clone() }</span>
                    </div>
                    <div class="card-footer">
                        <div class="card-kicker">
                            <span>{"Intelligence"}</span>
                            <div class="kicker-rule" />
                        </div>
                        <h3 class="card-title">{ props.title.clone() }</h3>
                        <p class="card-description">{ props.description.clone() }</p>
                    </div>
                </div>
            </div>
        </BentoTilt>
    }
}

#[function_component(PlatformStats)]
fn platform_stats() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div ref={node} class={classes!("stats-panel", "stats-wide", "reveal-card", revealed.then_some("revealed"))}>
            { for STATS.iter().map(|(value, label)| html! {
                <div class="stat-card stat-blue">
                    <div class="stat-value">{ *value }</div>
                    <div class="stat-label">{ *label }</div>
                </div>
            }) }
        </div>
    }
}

#[function_component(IntelligenceLayer)]
pub fn intelligence_layer() -> Html {
    html! {
        <section id="intelligence" class="dark-section intelligence-section">
            <div class="section-background">
                <ParticleField class="intelligence-particle" seed={61} count={15} palette={PARTICLE_PALETTE} />
                <div class="grid-pattern grid-pattern-cyan" />
            </div>

            <div class="container section-body">
                <div class="section-header">
                    <div class="vault-badge gradient-cyan">{"AI Intelligence Layer"}</div>
                    <AnimatedTitle title="Immerse in <b>I</b>ntell<b>i</b>gence" class="section-title" />
                    <p class="section-copy">
                        {"Immerse yourself in a rich and ever-expanding ecosystem where cutting-edge AI models converge into an interconnected intelligence platform that transforms your workflow."}
                    </p>
                </div>

                <PlatformStats />

                <div class="card-grid">
                    { for CAPABILITIES.iter().enumerate().map(|(index, capability)| html! {
                        <CapabilityCard
                            key={capability.title}
                            title={capability.title}
                            description={capability.description}
                            icon={capability.icon}
                            {index}
                        />
                    }) }
                </div>

                <div class="action-bar">
                    <div class="action-label">
                        <span class="action-icon">{"➤"}</span>
                        <span>{"Activate Intelligence"}</span>
                    </div>
                    <div class="action-divider" />
                    <div class="action-buttons">
                        <button class="pill-button pill-blue">{"Connect"}</button>
                        <button class="pill-button pill-cyan">{"Learn More"}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}
