use yew::prelude::*;

use crate::collection::{CollectionState, Item, Media};
use crate::components::animated_title::AnimatedTitle;
use crate::components::notice::SectionError;
use crate::components::particles::ParticleField;
use crate::config;
use crate::hooks::{use_collection, use_reveal, CollectionAction};

const PARTICLE_PALETTE: &[&str] = &["rgba(250, 204, 21, 0.2)"];

/// Horizontal marker position, in percent, along the timeline.
pub fn marker_offset(index: usize, total: usize) -> f64 {
    if total <= 1 {
        return 0.0;
    }
    index as f64 / (total - 1) as f64 * 100.0
}

/// Fill of the progress bar with the chapter at `active` selected.
pub fn timeline_progress(active: Option<usize>, total: usize) -> f64 {
    match active {
        Some(index) if total > 0 => ((index + 1) as f64 / total as f64).min(1.0),
        _ => 0.0,
    }
}

#[derive(Properties, PartialEq)]
struct ChapterCardProps {
    item: Item,
    index: usize,
    active: bool,
    on_select: Callback<()>,
}

#[function_component(ChapterCard)]
fn chapter_card(props: &ChapterCardProps) -> Html {
    let card = use_node_ref();
    let revealed = use_reveal(card.clone());
    let item = &props.item;

    let onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(()))
    };

    let media = match &item.media {
        Some(Media::Video(src)) => html! {
            <video src={src.clone()} loop={true} muted={true} autoplay={true} class="card-media" />
        },
        Some(Media::Image(src)) => html! {
            <img src={src.clone()} alt={item.title.clone()} class="card-media" />
        },
        None => html! {},
    };

    html! {
        <div
            ref={card}
            class={classes!("chapter-card", "reveal-card", revealed.then_some("revealed"))}
            style={format!("transition-delay: {:.1}s;", props.index as f64 * 0.1)}
            {onclick}
        >
            <div class={classes!("chapter-frame", props.active.then_some("active"))}>
                <div class="chapter-media">
                    { media }
                    <div class="card-tint gradient-teal" />
                    <div class="card-shade" />
                    <div class="chapter-number">
                        <div class="vault-badge gradient-orange">{ format!("Chapter {}", props.index + 1) }</div>
                    </div>
                    <div class={classes!("status-dot", props.active.then_some("active"))} />
                </div>

                <div class="chapter-body">
                    <h3 class="card-title">{ item.title.clone() }</h3>
                    <div class={classes!("chapter-excerpt", props.active.then_some("expanded"))}>
                        <p>{ item.description.clone() }</p>
                        {
                            if props.active {
                                html! {
                                    <div class="chapter-meta">
                                        <span class="read-time">{"⏱ 8 min read"}</span>
                                        <span class="continue">{"Continue Reading ➤"}</span>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TimelineProps {
    total: usize,
    active: Option<usize>,
}

#[function_component(Timeline)]
fn timeline(props: &TimelineProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let progress = timeline_progress(props.active, props.total);

    html! {
        <div ref={node} class={classes!("timeline-container", revealed.then_some("revealed"))}>
            <div class="timeline-track">
                <div class="timeline-progress" style={format!("transform: scaleX({:.3});", progress)} />
            </div>
            <div class="timeline-markers">
                { for (0..props.total).map(|index| {
                    let active = props.active == Some(index);
                    html! {
                        <div
                            class="timeline-marker"
                            style={format!("left: {:.2}%; transition-delay: {:.1}s;", marker_offset(index, props.total), index as f64 * 0.1)}
                        >
                            <div class={classes!("marker-dot", active.then_some("active"))} />
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ChapterListProps {
    initial: CollectionState,
}

#[function_component(ChapterList)]
fn chapter_list(props: &ChapterListProps) -> Html {
    let section = use_collection(props.initial.clone());
    let collection = &section.collection;

    html! {
        <>
            <Timeline total={collection.items().len()} active={collection.active_index()} />
            <div class="chapter-grid">
                { for collection.filtered_view().enumerate().map(|(index, item)| {
                    let on_select = {
                        let section = section.clone();
                        let id = item.id.clone();
                        Callback::from(move |_: ()| section.dispatch(CollectionAction::Toggle(id.clone())))
                    };
                    html! {
                        <ChapterCard
                            key={item.id.to_string()}
                            item={item.clone()}
                            {index}
                            active={collection.is_selected(&item.id)}
                            {on_select}
                        />
                    }
                }) }
            </div>
        </>
    }
}

#[function_component(NarrativeIntro)]
fn narrative_intro() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div ref={node} class={classes!("narrative", revealed.then_some("revealed"))}>
            <div class="grid-pattern grid-pattern-cyan" />
            <div class="narrative-inner">
                <div class="narrative-text narrative-heading">
                    <span class="narrative-kicker">{"📖 The Genesis"}</span>
                    <h2>{"In the Beginning, There Was Data..."}</h2>
                </div>
                <p class="narrative-text">
                    {"Before the first algorithm was written, before the first model was trained, there existed only the infinite potential of raw data. A space where intelligence could emerge, where patterns could be discovered, and where artificial minds could be born."}
                </p>
                <p class="narrative-text muted">
                    {"This is the story of NeuralForge: a platform where every dataset fuels innovation, where every model shapes the future, and where every developer becomes part of something greater than themselves. Welcome to the prologue of the greatest AI revolution ever told."}
                </p>
                <div class="narrative-text narrative-cta">
                    <span>{"Your AI transformation begins here"}</span>
                    <div class="narrative-rule" />
                    <span>{"➤"}</span>
                </div>
            </div>
        </div>
    }
}

#[function_component(Prologue)]
pub fn prologue() -> Html {
    let chapters = use_memo(|_| config::load("chapters", config::chapters_config), ());

    let list = match &*chapters {
        Ok(initial) => html! { <ChapterList initial={initial.clone()} /> },
        Err(err) => {
            log::error!("{}", err);
            html! { <SectionError section="prologue" message={err.to_string()} /> }
        }
    };

    html! {
        <section id="prologue" class="dark-section">
            <div class="section-background">
                <ParticleField class="prologue-particle" seed={51} count={15} palette={PARTICLE_PALETTE} />
                <div class="grid-pattern" />
            </div>

            <div class="container section-body">
                <div class="section-header">
                    <div class="vault-badge gradient-orange">{"AI Evolution"}</div>
                    <AnimatedTitle title="The AI J<b>o</b>urn<b>e</b>y" class="section-title" />
                    <p class="section-copy">
                        {"Every revolution has a beginning. Every breakthrough has an origin. This is where your AI transformation starts."}
                    </p>
                </div>

                <NarrativeIntro />

                { list }

                <div class="closing-card">
                    <h3>{"Ready to Begin Your AI Journey?"}</h3>
                    <p>
                        {"The prologue ends here, but your AI transformation is just beginning. Step into the world of NeuralForge and become part of the intelligence revolution."}
                    </p>
                    <div class="action-buttons">
                        <button class="pill-button pill-gold">{"Enter the Platform ➤"}</button>
                        <button class="pill-button pill-ghost">{"Continue Reading"}</button>
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
    fn markers_spread_across_the_track() {
        assert_eq!(marker_offset(0, 5), 0.0);
        assert_eq!(marker_offset(2, 5), 50.0);
        assert_eq!(marker_offset(4, 5), 100.0);
        assert_eq!(marker_offset(0, 1), 0.0);
    }

    #[test]
    fn progress_follows_the_active_chapter() {
        assert_eq!(timeline_progress(Some(0), 5), 0.2);
        assert_eq!(timeline_progress(Some(4), 5), 1.0);
        assert_eq!(timeline_progress(None, 5), 0.0);
        assert_eq!(timeline_progress(Some(0), 0), 0.0);
    }
}
