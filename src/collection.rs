//! Selection and category filtering for the interactive sections.
//!
//! Every operation here is a pure function of the current [`CollectionState`]:
//! mutators hand back a new state (or a typed error and no new state), so the
//! rendering layer can compare states and skip re-renders when nothing changed.
//! Nothing in this module knows about Yew or the DOM.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::new(id)
    }
}

/// Display rank of an item. Only affects styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Legendary,
    Epic,
    Rare,
    #[default]
    Common,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Legendary => "legendary",
            Tier::Epic => "epic",
            Tier::Rare => "rare",
            Tier::Common => "common",
        }
    }

    pub fn stars(&self) -> usize {
        match self {
            Tier::Legendary => 5,
            Tier::Epic => 4,
            Tier::Rare => 3,
            Tier::Common => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Media {
    Video(String),
    Image(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub tier: Tier,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub value: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub media: Option<Media>,
}

impl Item {
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Item {
            id: ItemId::new(id),
            title: String::new(),
            category: category.into(),
            tier: Tier::default(),
            locked: false,
            value: 0,
            description: String::new(),
            media: None,
        }
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn value(mut self, value: u64) -> Self {
        self.value = value;
        self
    }
}

/// How many items may be selected at once. Fixed when the collection is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// At most one selected item. Re-selecting the active item keeps it active.
    Single,
    /// Any number of selected items with toggle semantics.
    Multi,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn category(label: impl Into<String>) -> Self {
        CategoryFilter::Category(label.into())
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => item.category == *category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Category(category) => category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("duplicate item id `{0}`")]
    DuplicateId(ItemId),
    #[error("invalid initial selection: {0}")]
    InitialSelection(#[from] SelectionError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no item with id `{0}`")]
    UnknownItem(ItemId),
    #[error("item `{0}` is locked")]
    ItemLocked(ItemId),
}

/// Static description of a collection as it comes out of the content files.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CollectionConfig {
    pub items: Vec<Item>,
    pub mode: SelectionMode,
    #[serde(default)]
    pub initial_filter: Option<String>,
    #[serde(default)]
    pub initial_selection: Option<ItemId>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub total_count: usize,
    pub selected_count: usize,
    pub total_value: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CollectionState {
    items: Rc<[Item]>,
    mode: SelectionMode,
    active_category: CategoryFilter,
    selected: BTreeSet<ItemId>,
}

impl CollectionState {
    pub fn new(items: Vec<Item>, mode: SelectionMode) -> Result<Self, CollectionError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(CollectionError::DuplicateId(item.id.clone()));
            }
        }

        Ok(CollectionState {
            items: items.into(),
            mode,
            active_category: CategoryFilter::All,
            selected: BTreeSet::new(),
        })
    }

    /// Builds the collection and applies the configured filter and selection
    /// through the regular mutators.
    pub fn from_config(config: CollectionConfig) -> Result<Self, CollectionError> {
        let mut state = CollectionState::new(config.items, config.mode)?;
        if let Some(category) = config.initial_filter {
            state = state.set_filter(CategoryFilter::Category(category));
        }
        if let Some(id) = config.initial_selection {
            state = state.toggle_select(&id)?;
        }
        Ok(state)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn active_category(&self) -> &CategoryFilter {
        &self.active_category
    }

    pub fn selected(&self) -> &BTreeSet<ItemId> {
        &self.selected
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == *id)
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selected.contains(id)
    }

    /// Selection is kept as-is, even for items the new filter hides.
    pub fn set_filter(&self, filter: CategoryFilter) -> Self {
        CollectionState {
            items: Rc::clone(&self.items),
            mode: self.mode,
            active_category: filter,
            selected: self.selected.clone(),
        }
    }

    pub fn toggle_select(&self, id: &ItemId) -> Result<Self, SelectionError> {
        let item = self
            .item(id)
            .ok_or_else(|| SelectionError::UnknownItem(id.clone()))?;
        if item.locked {
            return Err(SelectionError::ItemLocked(id.clone()));
        }

        let mut selected = self.selected.clone();
        match self.mode {
            SelectionMode::Single => {
                if !selected.contains(id) {
                    selected.clear();
                    selected.insert(id.clone());
                }
            }
            SelectionMode::Multi => {
                if !selected.remove(id) {
                    selected.insert(id.clone());
                }
            }
        }

        Ok(CollectionState {
            items: Rc::clone(&self.items),
            mode: self.mode,
            active_category: self.active_category.clone(),
            selected,
        })
    }

    /// Items passing the active filter, in their original order. Each call
    /// starts a fresh iteration.
    pub fn filtered_view(&self) -> impl Iterator<Item = &Item> + Clone + '_ {
        self.items
            .iter()
            .filter(move |item| self.active_category.matches(item))
    }

    /// Counts and totals over what the filter currently shows.
    pub fn aggregate(&self) -> Aggregate {
        self.filtered_view()
            .fold(Aggregate::default(), |mut acc, item| {
                acc.total_count += 1;
                acc.total_value = acc.total_value.saturating_add(item.value);
                if self.selected.contains(&item.id) {
                    acc.selected_count += 1;
                }
                acc
            })
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in self.items.iter() {
            if !categories.contains(&item.category.as_str()) {
                categories.push(&item.category);
            }
        }
        categories
    }

    /// Position of the first selected item in display order.
    pub fn active_index(&self) -> Option<usize> {
        self.items
            .iter()
            .position(|item| self.selected.contains(&item.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn vault() -> CollectionState {
        CollectionState::new(
            vec![
                Item::new("1", "Weapons").value(200),
                Item::new("2", "Armor").locked(true).value(800),
            ],
            SelectionMode::Multi,
        )
        .unwrap()
    }

    fn ids<'a>(items: impl Iterator<Item = &'a Item>) -> Vec<&'a str> {
        items.map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn starts_unfiltered_with_nothing_selected() {
        let state = vault();
        assert_eq!(state.active_category(), &CategoryFilter::All);
        assert!(state.selected().is_empty());
        assert_eq!(ids(state.filtered_view()), vec!["1", "2"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = CollectionState::new(
            vec![Item::new("a", "x"), Item::new("b", "y"), Item::new("a", "z")],
            SelectionMode::Single,
        )
        .unwrap_err();
        assert_eq!(err, CollectionError::DuplicateId(ItemId::from("a")));
    }

    #[test]
    fn vault_walkthrough() {
        let state = vault().set_filter(CategoryFilter::category("Armor"));
        assert_eq!(ids(state.filtered_view()), vec!["2"]);

        let err = state.toggle_select(&ItemId::from("2")).unwrap_err();
        assert_eq!(err, SelectionError::ItemLocked(ItemId::from("2")));
        assert!(state.selected().is_empty());

        let state = state.set_filter(CategoryFilter::category("Weapons"));
        assert_eq!(ids(state.filtered_view()), vec!["1"]);

        let state = state.toggle_select(&ItemId::from("1")).unwrap();
        assert_eq!(state.selected().len(), 1);
        assert!(state.is_selected(&ItemId::from("1")));
        assert_eq!(
            state.aggregate(),
            Aggregate {
                total_count: 1,
                selected_count: 1,
                total_value: 200,
            }
        );
    }

    #[test]
    fn unknown_category_yields_empty_view() {
        let state = vault().set_filter(CategoryFilter::category("Potions"));
        assert_eq!(state.filtered_view().count(), 0);
        assert_eq!(state.aggregate(), Aggregate::default());
    }

    #[test]
    fn filter_does_not_touch_selection() {
        let state = vault().toggle_select(&ItemId::from("1")).unwrap();
        let hidden = state.set_filter(CategoryFilter::category("Armor"));
        assert!(hidden.is_selected(&ItemId::from("1")));
        assert_eq!(hidden.aggregate().selected_count, 0);

        let back = hidden.set_filter(CategoryFilter::All);
        assert_eq!(back.aggregate().selected_count, 1);
    }

    #[test]
    fn unknown_item_is_reported() {
        let state = vault();
        let err = state.toggle_select(&ItemId::from("99")).unwrap_err();
        assert_eq!(err, SelectionError::UnknownItem(ItemId::from("99")));
    }

    #[test]
    fn single_select_switches_and_never_clears() {
        let state = CollectionState::new(
            vec![Item::new("a", "ch"), Item::new("b", "ch"), Item::new("c", "ch")],
            SelectionMode::Single,
        )
        .unwrap();

        let a = state.toggle_select(&ItemId::from("a")).unwrap();
        assert_eq!(a.active_index(), Some(0));
        let again = a.toggle_select(&ItemId::from("a")).unwrap();
        assert_eq!(again, a);

        let b = again.toggle_select(&ItemId::from("b")).unwrap();
        assert_eq!(b.selected().iter().collect::<Vec<_>>(), vec![&ItemId::from("b")]);
        assert_eq!(b.active_index(), Some(1));
    }

    #[test]
    fn categories_keep_first_appearance_order() {
        let state = CollectionState::new(
            vec![
                Item::new("1", "Weapons"),
                Item::new("2", "Artifacts"),
                Item::new("3", "Weapons"),
                Item::new("4", "Armor"),
            ],
            SelectionMode::Multi,
        )
        .unwrap();
        assert_eq!(state.categories(), vec!["Weapons", "Artifacts", "Armor"]);
    }

    #[test]
    fn from_config_applies_initial_filter_and_selection() {
        let config = CollectionConfig {
            items: vec![Item::new("a", "x"), Item::new("b", "y")],
            mode: SelectionMode::Single,
            initial_filter: Some("y".to_string()),
            initial_selection: Some(ItemId::from("a")),
        };
        let state = CollectionState::from_config(config).unwrap();
        assert_eq!(state.active_category(), &CategoryFilter::category("y"));
        assert!(state.is_selected(&ItemId::from("a")));
    }

    #[test]
    fn from_config_rejects_locked_initial_selection() {
        let config = CollectionConfig {
            items: vec![Item::new("a", "x").locked(true)],
            mode: SelectionMode::Multi,
            initial_filter: None,
            initial_selection: Some(ItemId::from("a")),
        };
        assert_eq!(
            CollectionState::from_config(config).unwrap_err(),
            CollectionError::InitialSelection(SelectionError::ItemLocked(ItemId::from("a")))
        );
    }

    const CATEGORIES: [&str; 3] = ["Weapons", "Armor", "Artifacts"];

    fn arb_items() -> impl Strategy<Value = Vec<Item>> {
        prop::collection::vec((0..CATEGORIES.len(), any::<bool>(), 0u64..10_000), 0..12).prop_map(
            |specs| {
                specs
                    .into_iter()
                    .enumerate()
                    .map(|(i, (category, locked, value))| {
                        Item::new(format!("item-{i}"), CATEGORIES[category])
                            .locked(locked)
                            .value(value)
                    })
                    .collect()
            },
        )
    }

    fn arb_mode() -> impl Strategy<Value = SelectionMode> {
        prop_oneof![Just(SelectionMode::Single), Just(SelectionMode::Multi)]
    }

    proptest! {
        #[test]
        fn unfiltered_view_is_the_input(items in arb_items(), mode in arb_mode()) {
            let state = CollectionState::new(items.clone(), mode).unwrap();
            let view: Vec<Item> = state.filtered_view().cloned().collect();
            prop_assert_eq!(view, items);
        }

        #[test]
        fn filter_keeps_only_matching_items_in_order(items in arb_items(), pick in 0..CATEGORIES.len()) {
            let state = CollectionState::new(items.clone(), SelectionMode::Multi).unwrap();
            let filtered = state.set_filter(CategoryFilter::category(CATEGORIES[pick]));
            let expected: Vec<&Item> = items.iter().filter(|item| item.category == CATEGORIES[pick]).collect();
            prop_assert_eq!(filtered.filtered_view().collect::<Vec<_>>(), expected);

            let restored = filtered.set_filter(CategoryFilter::All);
            prop_assert_eq!(restored.filtered_view().count(), items.len());
        }

        #[test]
        fn locked_items_are_never_selected(items in arb_items(), mode in arb_mode(), clicks in prop::collection::vec(0usize..12, 0..20)) {
            let mut state = CollectionState::new(items.clone(), mode).unwrap();
            for click in clicks {
                let Some(item) = items.get(click) else { continue };
                match state.toggle_select(&item.id) {
                    Ok(next) => {
                        prop_assert!(!item.locked);
                        state = next;
                    }
                    Err(err) => {
                        prop_assert!(item.locked);
                        prop_assert_eq!(err, SelectionError::ItemLocked(item.id.clone()));
                    }
                }
                prop_assert!(state.selected().iter().all(|id| !state.item(id).unwrap().locked));
                if mode == SelectionMode::Single {
                    prop_assert!(state.selected().len() <= 1);
                }
                let aggregate = state.aggregate();
                prop_assert!(aggregate.selected_count <= aggregate.total_count);
            }
        }

        #[test]
        fn multi_toggle_twice_restores_selection(items in arb_items(), first in 0usize..12, second in 0usize..12) {
            let state = CollectionState::new(items.clone(), SelectionMode::Multi).unwrap();
            let state = match items.get(first) {
                Some(item) if !item.locked => state.toggle_select(&item.id).unwrap(),
                _ => state,
            };
            if let Some(item) = items.get(second).filter(|item| !item.locked) {
                let round_trip = state
                    .toggle_select(&item.id)
                    .and_then(|next| next.toggle_select(&item.id))
                    .unwrap();
                prop_assert_eq!(round_trip.selected(), state.selected());
            }
        }

        #[test]
        fn single_select_keeps_the_last_pick(items in arb_items(), a in 0usize..12, b in 0usize..12) {
            let unlocked: Vec<&Item> = items.iter().filter(|item| !item.locked).collect();
            prop_assume!(unlocked.len() >= 2);
            let (a, b) = (a % unlocked.len(), b % unlocked.len());
            prop_assume!(a != b);

            let state = CollectionState::new(items.clone(), SelectionMode::Single).unwrap();
            let state = state
                .toggle_select(&unlocked[a].id)
                .and_then(|next| next.toggle_select(&unlocked[b].id))
                .unwrap();
            prop_assert_eq!(state.selected().iter().collect::<Vec<_>>(), vec![&unlocked[b].id]);
        }
    }
}
