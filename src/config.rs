use log::Level;
use thiserror::Error;

use crate::collection::{CollectionConfig, CollectionError, CollectionState};

const VAULT_CONTENT: &str = include_str!("../content/vault.json");
const MODELS_CONTENT: &str = include_str!("../content/models.json");
const CHAPTERS_CONTENT: &str = include_str!("../content/chapters.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse {name} content: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid {name} content: {source}")]
    Invalid {
        name: &'static str,
        #[source]
        source: CollectionError,
    },
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn site_name() -> &'static str {
    "NeuralForge"
}

pub fn vault_config() -> Result<CollectionConfig, ContentError> {
    parse("vault", VAULT_CONTENT)
}

pub fn models_config() -> Result<CollectionConfig, ContentError> {
    parse("models", MODELS_CONTENT)
}

pub fn chapters_config() -> Result<CollectionConfig, ContentError> {
    parse("chapters", CHAPTERS_CONTENT)
}

/// Parses and builds a collection in one go, tagging errors with the section name.
pub fn load(
    name: &'static str,
    config: fn() -> Result<CollectionConfig, ContentError>,
) -> Result<CollectionState, ContentError> {
    let config = config()?;
    CollectionState::from_config(config).map_err(|source| ContentError::Invalid { name, source })
}

fn parse(name: &'static str, raw: &str) -> Result<CollectionConfig, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Parse { name, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{ItemId, Media, SelectionMode, Tier};

    #[test]
    fn vault_content_loads() {
        let state = load("vault", vault_config).unwrap();
        assert_eq!(state.mode(), SelectionMode::Multi);
        assert_eq!(state.items().len(), 8);
        assert_eq!(
            state.categories(),
            vec!["Weapons", "Artifacts", "Armor", "Collectibles"]
        );
        let rune = state.item(&ItemId::from("ancient-rune")).unwrap();
        assert!(rune.locked);
        assert_eq!(rune.tier, Tier::Legendary);
        assert_eq!(rune.media, Some(Media::Image("img/gallery-2.webp".into())));
        assert_eq!(state.aggregate().total_value, 13_800);
    }

    #[test]
    fn chapters_start_on_the_first_chapter() {
        let state = load("chapters", chapters_config).unwrap();
        assert_eq!(state.mode(), SelectionMode::Single);
        assert_eq!(state.active_index(), Some(0));
    }

    #[test]
    fn models_start_unselected() {
        let state = load("models", models_config).unwrap();
        assert!(state.selected().is_empty());
        assert_eq!(state.categories(), vec!["CV", "NLP", "Analytics", "AutoML"]);
    }

    #[test]
    fn malformed_content_is_a_parse_error() {
        let err = parse("broken", r#"{ "mode": "multi" }"#).unwrap_err();
        assert!(matches!(err, ContentError::Parse { name: "broken", .. }));
    }

    #[test]
    fn duplicate_ids_are_invalid_content() {
        fn duplicated() -> Result<CollectionConfig, ContentError> {
            parse(
                "dupes",
                r#"{ "mode": "single", "items": [
                    { "id": "a", "title": "A", "category": "x" },
                    { "id": "a", "title": "B", "category": "x" }
                ] }"#,
            )
        }
        let err = load("dupes", duplicated).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Invalid {
                name: "dupes",
                source: CollectionError::DuplicateId(_)
            }
        ));
    }
}
