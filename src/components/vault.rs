use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::collection::{Aggregate, CategoryFilter, CollectionState, Item, Media, Tier};
use crate::components::animated_title::AnimatedTitle;
use crate::components::bento::BentoTilt;
use crate::components::notice::{SectionError, SelectionNotice};
use crate::components::particles::ParticleField;
use crate::config;
use crate::hooks::{use_collection, use_reveal, CollectionAction};

const CURRENCY: &str = "ZEN";
const PARTICLE_PALETTE: &[&str] = &["rgba(250, 204, 21, 0.2)"];

/// `2500` -> `2,500 ZEN`
pub fn format_value(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{} {}", grouped, CURRENCY)
}

/// `12800` -> `12.8K ZEN`, `2500000` -> `2.5M ZEN`, small values stay exact.
pub fn compact_value(value: u64) -> String {
    let (scaled, suffix) = match value {
        v if v >= 1_000_000 => (v as f64 / 1_000_000.0, "M"),
        v if v >= 1_000 => (v as f64 / 1_000.0, "K"),
        v => return format!("{} {}", v, CURRENCY),
    };
    let rounded = format!("{:.1}", scaled);
    let trimmed = rounded.strip_suffix(".0").unwrap_or(&rounded);
    format!("{}{} {}", trimmed, suffix, CURRENCY)
}

fn tier_gradient(tier: Tier) -> &'static str {
    match tier {
        Tier::Legendary => "gradient-gold",
        Tier::Epic => "gradient-pink",
        Tier::Rare => "gradient-cyan",
        Tier::Common => "gradient-gray",
    }
}

#[derive(Properties, PartialEq)]
struct CategoryFilterBarProps {
    categories: Vec<String>,
    active: CategoryFilter,
    on_change: Callback<CategoryFilter>,
}

#[function_component(CategoryFilterBar)]
fn category_filter_bar(props: &CategoryFilterBarProps) -> Html {
    let options = std::iter::once(CategoryFilter::All)
        .chain(props.categories.iter().map(CategoryFilter::category));

    html! {
        <div class="filter-bar">
            { for options.map(|filter| {
                let active = filter == props.active;
                let label = filter.label().to_string();
                let onclick = {
                    let on_change = props.on_change.clone();
                    Callback::from(move |_: MouseEvent| on_change.emit(filter.clone()))
                };
                html! {
                    <button
                        key={label.clone()}
                        class={classes!("filter-button", active.then_some("active"))}
                        {onclick}
                    >
                        { label }
                    </button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatsPanelProps {
    aggregate: Aggregate,
}

#[function_component(StatsPanel)]
fn stats_panel(props: &StatsPanelProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let stats = [
        (props.aggregate.total_count.to_string(), "Total Items", "stat-purple"),
        (props.aggregate.selected_count.to_string(), "Selected", "stat-green"),
        (compact_value(props.aggregate.total_value), "Total Value", "stat-gold"),
    ];

    html! {
        <div ref={node} class={classes!("stats-panel", "reveal-card", revealed.then_some("revealed"))}>
            { for stats.into_iter().map(|(value, label, tone)| html! {
                <div class={classes!("stat-card", tone)}>
                    <div class="stat-value">{ value }</div>
                    <div class="stat-label">{ label }</div>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct VaultItemCardProps {
    item: Item,
    index: usize,
    selected: bool,
    on_toggle: Callback<()>,
}

#[function_component(VaultItemCard)]
fn vault_item_card(props: &VaultItemCardProps) -> Html {
    let card = use_node_ref();
    let video = use_node_ref();
    let revealed = use_reveal(card.clone());
    let item = &props.item;

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let starts_playing = !props.selected && !item.locked;
        let video = video.clone();
        Callback::from(move |_: MouseEvent| {
            if starts_playing {
                if let Some(video) = video.cast::<HtmlVideoElement>() {
                    let _ = video.play();
                }
            }
            on_toggle.emit(());
        })
    };

    let gradient = tier_gradient(item.tier);
    let media = match &item.media {
        Some(Media::Video(src)) => html! {
            <video ref={video} src={src.clone()} loop={true} muted={true} class="card-media" />
        },
        Some(Media::Image(src)) => html! {
            <img src={src.clone()} alt={item.title.clone()} class="card-media" />
        },
        None => html! {},
    };

    html! {
        <BentoTilt class="vault-item">
            <div
                ref={card}
                class={classes!(
                    "showcase-card",
                    "reveal-card",
                    format!("tier-{}", item.tier.as_str()),
                    revealed.then_some("revealed"),
                    props.selected.then_some("selected"),
                    item.locked.then_some("locked"),
                )}
                style={format!("transition-delay: {:.1}s;", props.index as f64 * 0.1)}
                {onclick}
            >
                { media }
                <div class={classes!("card-tint", gradient)} />
                <div class="card-shade" />

                {
                    if item.locked {
                        html! {
                            <div class="locked-overlay">
                                <div class="lock-ring">{"🔒"}</div>
                                <p>{"Locked"}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <div class="card-body">
                    <div class="card-header">
                        <div class={classes!("vault-badge", gradient)}>{ item.tier.as_str() }</div>
                        <div class="stars">
                            { for (0..item.tier.stars()).map(|_| html! { <span class="star">{"★"}</span> }) }
                        </div>
                    </div>
                    <div class="card-footer">
                        <div class="card-kicker">
                            <span>{ item.category.clone() }</span>
                            <div class="kicker-rule" />
                        </div>
                        <h3 class="card-title">{ item.title.clone() }</h3>
                        <div class="card-meta">
                            <span>{ format!("Value: {}", format_value(item.value)) }</span>
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
struct VaultBoardProps {
    initial: CollectionState,
}

#[function_component(VaultBoard)]
fn vault_board(props: &VaultBoardProps) -> Html {
    let section = use_collection(props.initial.clone());
    let collection = &section.collection;

    let on_filter = {
        let section = section.clone();
        Callback::from(move |filter: CategoryFilter| {
            section.dispatch(CollectionAction::SetFilter(filter))
        })
    };

    let on_dismiss = {
        let section = section.clone();
        Callback::from(move |_: ()| section.dispatch(CollectionAction::DismissNotice))
    };

    let categories: Vec<String> = collection
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect();
    let filter_key = collection.active_category().label().to_string();

    html! {
        <>
            <StatsPanel aggregate={collection.aggregate()} />
            <CategoryFilterBar
                {categories}
                active={collection.active_category().clone()}
                on_change={on_filter}
            />
            <SelectionNotice error={section.notice.clone()} {on_dismiss} />
            <div class="card-grid">
                { for collection.filtered_view().enumerate().map(|(index, item)| {
                    let on_toggle = {
                        let section = section.clone();
                        let id = item.id.clone();
                        Callback::from(move |_: ()| section.dispatch(CollectionAction::Toggle(id.clone())))
                    };
                    html! {
                        <VaultItemCard
                            key={format!("{}-{}", item.id, filter_key)}
                            item={item.clone()}
                            {index}
                            selected={collection.is_selected(&item.id)}
                            {on_toggle}
                        />
                    }
                }) }
            </div>
        </>
    }
}

#[function_component(Vault)]
pub fn vault() -> Html {
    let vault = use_memo(|_| config::load("vault", config::vault_config), ());

    let board = match &*vault {
        Ok(initial) => html! { <VaultBoard initial={initial.clone()} /> },
        Err(err) => {
            log::error!("{}", err);
            html! { <SectionError section="vault" message={err.to_string()} /> }
        }
    };

    html! {
        <section id="vault" class="dark-section">
            <div class="section-background">
                <ParticleField class="vault-particle" seed={41} count={15} palette={PARTICLE_PALETTE} />
                <div class="grid-pattern" />
            </div>

            <div class="container section-body">
                <div class="section-header">
                    <div class="vault-badge gradient-orange">{"Digital Vault"}</div>
                    <AnimatedTitle title="Y<b>o</b>ur Digit<b>a</b>l Tr<b>e</b>asure" class="section-title" />
                    <p class="section-copy">
                        {"Secure, trade, and showcase your most valuable digital assets. Your collection awaits in the ultimate vault."}
                    </p>
                </div>

                { board }

                <div class="action-bar">
                    <div class="action-label">
                        <span class="action-icon">{"🎁"}</span>
                        <span>{"Manage Collection"}</span>
                    </div>
                    <div class="action-divider" />
                    <div class="action-buttons">
                        <button class="pill-button pill-blue">{"Trade"}</button>
                        <button class="pill-button pill-gold">{"Showcase"}</button>
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
    fn groups_thousands() {
        assert_eq!(format_value(0), "0 ZEN");
        assert_eq!(format_value(200), "200 ZEN");
        assert_eq!(format_value(2500), "2,500 ZEN");
        assert_eq!(format_value(1_234_567), "1,234,567 ZEN");
    }

    #[test]
    fn compacts_totals() {
        assert_eq!(compact_value(999), "999 ZEN");
        assert_eq!(compact_value(12_800), "12.8K ZEN");
        assert_eq!(compact_value(13_800), "13.8K ZEN");
        assert_eq!(compact_value(4_000), "4K ZEN");
        assert_eq!(compact_value(2_500_000), "2.5M ZEN");
    }
}
