use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::collection::{CollectionState, Item, Media};
use crate::components::animated_title::AnimatedTitle;
use crate::components::bento::BentoTilt;
use crate::components::notice::{SectionError, SelectionNotice};
use crate::components::particles::ParticleField;
use crate::config;
use crate::hooks::{use_collection, use_reveal, CollectionAction};

const PARTICLE_PALETTE: &[&str] = &["rgba(250, 204, 21, 0.2)"];

pub fn badge_gradient(badge: &str) -> &'static str {
    match badge {
        "CV" => "gradient-cyan",
        "NLP" => "gradient-pink",
        "Analytics" => "gradient-emerald",
        "AutoML" => "gradient-orange",
        _ => "gradient-gray",
    }
}

#[derive(Properties, PartialEq)]
struct ModelCardProps {
    item: Item,
    index: usize,
    selected: bool,
    on_toggle: Callback<()>,
}

#[function_component(ModelCard)]
fn model_card(props: &ModelCardProps) -> Html {
    let card = use_node_ref();
    let video = use_node_ref();
    let hovered = use_state(|| false);
    let revealed = use_reveal(card.clone());

    let onmouseenter = {
        let hovered = hovered.clone();
        let video = video.clone();
        Callback::from(move |_: MouseEvent| {
            hovered.set(true);
            if let Some(video) = video.cast::<HtmlVideoElement>() {
                let _ = video.play();
            }
        })
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        let video = video.clone();
        Callback::from(move |_: MouseEvent| {
            hovered.set(false);
            if let Some(video) = video.cast::<HtmlVideoElement>() {
                let _ = video.pause();
            }
        })
    };

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let selected = props.selected;
        let video = video.clone();
        Callback::from(move |_: MouseEvent| {
            if !selected {
                if let Some(video) = video.cast::<HtmlVideoElement>() {
                    let _ = video.play();
                }
            }
            on_toggle.emit(());
        })
    };

    let item = &props.item;
    let gradient = badge_gradient(&item.category);
    let video_src = match &item.media {
        Some(Media::Video(src)) => src.clone(),
        _ => String::new(),
    };

    html! {
        <BentoTilt class="vault-item">
            <div
                ref={card}
                class={classes!(
                    "showcase-card",
                    "reveal-card",
                    revealed.then_some("revealed"),
                    props.selected.then_some("selected"),
                )}
                style={format!("transition-delay: {:.1}s;", props.index as f64 * 0.1)}
                {onmouseenter}
                {onmouseleave}
                {onclick}
            >
                <video ref={video} src={video_src} loop={true} muted={true} class="card-media" />
                <div class={classes!("card-tint", gradient)} />
                <div class="card-shade" />

                <div class="card-body">
                    <div class="card-header">
                        <div class={classes!("vault-badge", gradient)}>{ item.category.clone() }</div>
                        <span class={classes!("card-arrow", hovered.then_some("rotated"))}>{"➤"}</span>
                    </div>
                    <div class="card-footer">
                        <div class="card-kicker">
                            <span>{"AI Model"}</span>
                            <div class="kicker-rule" />
                        </div>
                        <h3 class="card-title">{ item.title.clone() }</h3>
                        <p class="card-description">{ item.description.clone() }</p>
                        <div class="card-meta">
                            <span>{"Enterprise"}</span>
                            {
                                if props.selected {
                                    html! { <div class="selected-dot" /> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </div>
                </div>
                {
                    if props.selected {
                        html! { <div class="selection-border" /> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </BentoTilt>
    }
}

#[derive(Properties, PartialEq)]
struct ModelGridProps {
    initial: CollectionState,
}

#[function_component(ModelGrid)]
fn model_grid(props: &ModelGridProps) -> Html {
    let section = use_collection(props.initial.clone());

    let on_dismiss = {
        let section = section.clone();
        Callback::from(move |_: ()| section.dispatch(CollectionAction::DismissNotice))
    };

    html! {
        <>
            <SelectionNotice error={section.notice.clone()} {on_dismiss} />
            <div class="card-grid">
                { for section.collection.filtered_view().enumerate().map(|(index, item)| {
                    let on_toggle = {
                        let section = section.clone();
                        let id = item.id.clone();
                        Callback::from(move |_: ()| section.dispatch(CollectionAction::Toggle(id.clone())))
                    };
                    html! {
                        <ModelCard
                            key={item.id.to_string()}
                            item={item.clone()}
                            {index}
                            selected={section.collection.is_selected(&item.id)}
                            {on_toggle}
                        />
                    }
                }) }
            </div>
        </>
    }
}

#[function_component(Nexus)]
pub fn nexus() -> Html {
    let models = use_memo(|_| config::load("models", config::models_config), ());

    let grid = match &*models {
        Ok(initial) => html! { <ModelGrid initial={initial.clone()} /> },
        Err(err) => {
            log::error!("{}", err);
            html! { <SectionError section="model hub" message={err.to_string()} /> }
        }
    };

    html! {
        <section id="nexus" class="dark-section">
            <div class="section-background">
                <ParticleField class="floating-particle" seed={31} count={15} palette={PARTICLE_PALETTE} />
                <div class="grid-pattern" />
            </div>

            <div class="container section-body">
                <div class="section-header">
                    <div class="vault-badge gradient-orange">{"AI Model Hub"}</div>
                    <AnimatedTitle title="C<b>o</b>nnect • C<b>o</b>mpute • C<b>r</b>eate" class="section-title" />
                    <p class="section-copy">
                        {"Enter the ultimate AI ecosystem where every model matters, every connection counts, and every innovation accelerates across the intelligence network."}
                    </p>
                </div>

                { grid }

                <div class="action-bar">
                    <div class="action-label">
                        <span class="action-icon">{"➤"}</span>
                        <span>{"Access Models"}</span>
                    </div>
                    <div class="action-divider" />
                    <div class="action-buttons">
                        <button class="pill-button pill-blue">{"Deploy"}</button>
                        <button class="pill-button pill-gold">{"Explore"}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_badges_have_their_own_gradient() {
        assert_eq!(badge_gradient("NLP"), "gradient-pink");
        assert_eq!(badge_gradient("Quantum"), "gradient-gray");
    }
}
