use std::rc::Rc;

use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::collection::{CategoryFilter, CollectionState, ItemId, SelectionError};

/// A section's collection plus the feedback from the last rejected click.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionState {
    pub collection: CollectionState,
    pub notice: Option<SelectionError>,
}

pub enum CollectionAction {
    SetFilter(CategoryFilter),
    Toggle(ItemId),
    DismissNotice,
}

impl Reducible for SectionState {
    type Action = CollectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CollectionAction::SetFilter(filter) => {
                debug!("Filter set to {}", filter.label());
                Rc::new(SectionState {
                    collection: self.collection.set_filter(filter),
                    notice: None,
                })
            }
            CollectionAction::Toggle(id) => match self.collection.toggle_select(&id) {
                Ok(collection) => Rc::new(SectionState {
                    collection,
                    notice: None,
                }),
                Err(err) => {
                    match &err {
                        SelectionError::ItemLocked(_) => debug!("Selection rejected: {}", err),
                        SelectionError::UnknownItem(_) => warn!("Selection rejected: {}", err),
                    }
                    Rc::new(SectionState {
                        collection: self.collection.clone(),
                        notice: Some(err),
                    })
                }
            },
            CollectionAction::DismissNotice => {
                if self.notice.is_none() {
                    return self;
                }
                Rc::new(SectionState {
                    collection: self.collection.clone(),
                    notice: None,
                })
            }
        }
    }
}

/// Owns one section's collection for the lifetime of the component.
/// Actions are applied in dispatch order against the latest state.
#[hook]
pub fn use_collection(initial: CollectionState) -> UseReducerHandle<SectionState> {
    use_reducer_eq(move || SectionState {
        collection: initial,
        notice: None,
    })
}

pub fn reveal_threshold_crossed(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * 0.85
}

/// True while the element's top edge sits above 85% of the viewport.
/// Reverses when scrolled back up.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(_, viewport_height)| {
                if let Some(element) = node.cast::<Element>() {
                    let top = element.get_bounding_client_rect().top();
                    revealed.set(reveal_threshold_crossed(top, *viewport_height));
                }
                || ()
            },
            (scroll_y as i64, viewport_height),
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{Item, SelectionMode};

    fn section() -> Rc<SectionState> {
        let collection = CollectionState::new(
            vec![
                Item::new("sword", "Weapons").value(200),
                Item::new("rune", "Collectibles").locked(true).value(3000),
            ],
            SelectionMode::Multi,
        )
        .unwrap();
        Rc::new(SectionState {
            collection,
            notice: None,
        })
    }

    #[test]
    fn locked_click_sets_notice_and_keeps_collection() {
        let before = section();
        let after = before
            .clone()
            .reduce(CollectionAction::Toggle(ItemId::from("rune")));
        assert_eq!(after.collection, before.collection);
        assert_eq!(
            after.notice,
            Some(SelectionError::ItemLocked(ItemId::from("rune")))
        );
    }

    #[test]
    fn successful_click_clears_notice() {
        let rejected = section().reduce(CollectionAction::Toggle(ItemId::from("rune")));
        let accepted = rejected.reduce(CollectionAction::Toggle(ItemId::from("sword")));
        assert!(accepted.notice.is_none());
        assert!(accepted.collection.is_selected(&ItemId::from("sword")));
    }

    #[test]
    fn actions_apply_in_order() {
        let state = section()
            .reduce(CollectionAction::Toggle(ItemId::from("sword")))
            .reduce(CollectionAction::SetFilter(CategoryFilter::category("Weapons")))
            .reduce(CollectionAction::Toggle(ItemId::from("sword")));
        assert!(state.collection.selected().is_empty());
        assert_eq!(
            state.collection.active_category(),
            &CategoryFilter::category("Weapons")
        );
    }

    #[test]
    fn dismissing_nothing_keeps_the_same_state() {
        let state = section();
        let same = state.clone().reduce(CollectionAction::DismissNotice);
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn reveal_threshold() {
        assert!(reveal_threshold_crossed(500.0, 1000.0));
        assert!(!reveal_threshold_crossed(850.0, 1000.0));
        assert!(!reveal_threshold_crossed(1200.0, 1000.0));
    }
}
