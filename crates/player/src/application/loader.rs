//! Sheet Loader - resolves a route parameter into the page's initial data
//!
//! Runs before the page is produced: parses the id parameter, performs the
//! single record-store lookup, and converts the stored record into the
//! plain `Character` snapshot the render layer receives. Invalid ids and
//! missing records both degrade to an absent character; store faults
//! propagate to the hosting route.

use std::sync::Arc;

use fichas_shared::Character;

use crate::ports::outbound::{CharacterStorePort, StoreError};

/// Initial data for the sheet page.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetProps {
    /// `None` for an invalid id or an id with no matching record.
    pub raw_character: Option<Character>,
}

/// Page loader for `/sheet/:id`.
pub struct SheetLoader {
    store: Arc<dyn CharacterStorePort>,
}

impl SheetLoader {
    pub fn new(store: Arc<dyn CharacterStorePort>) -> Self {
        Self { store }
    }

    /// Resolve a route parameter into the page's initial snapshot.
    ///
    /// The record returned by the store is deserialized into the plain
    /// snapshot here: nothing backed by a live store handle may cross into
    /// the render layer.
    pub async fn load(&self, id_param: &str) -> Result<SheetProps, StoreError> {
        let Some(character_id) = parse_character_id(id_param) else {
            return Ok(SheetProps {
                raw_character: None,
            });
        };

        let Some(record) = self.store.find_by_id(character_id).await? else {
            return Ok(SheetProps {
                raw_character: None,
            });
        };

        let character = serde_json::from_value::<Character>(record)
            .map_err(|e| StoreError::Malformed(e.to_string()))?;

        Ok(SheetProps {
            raw_character: Some(character),
        })
    }
}

/// Character ids are positive integers; anything else is treated as absent.
fn parse_character_id(param: &str) -> Option<i64> {
    param.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::character_store_port::MockCharacterStorePort;
    use mockall::predicate::eq;
    use serde_json::json;

    fn loader_with(store: MockCharacterStorePort) -> SheetLoader {
        SheetLoader::new(Arc::new(store))
    }

    mod id_parsing_tests {
        use super::*;

        #[tokio::test]
        async fn non_numeric_id_yields_no_character_without_a_lookup() {
            let mut store = MockCharacterStorePort::new();
            store.expect_find_by_id().times(0);

            let props = loader_with(store).load("abc").await.expect("load succeeds");
            assert_eq!(props.raw_character, None);
        }

        #[tokio::test]
        async fn empty_id_yields_no_character_without_a_lookup() {
            let mut store = MockCharacterStorePort::new();
            store.expect_find_by_id().times(0);

            let props = loader_with(store).load("").await.expect("load succeeds");
            assert_eq!(props.raw_character, None);
        }

        #[tokio::test]
        async fn zero_and_negative_ids_are_treated_as_absent() {
            let mut store = MockCharacterStorePort::new();
            store.expect_find_by_id().times(0);
            let loader = loader_with(store);

            assert_eq!(
                loader.load("0").await.expect("load succeeds").raw_character,
                None
            );
            assert_eq!(
                loader.load("-3").await.expect("load succeeds").raw_character,
                None
            );
        }

        #[tokio::test]
        async fn surrounding_whitespace_is_tolerated() {
            let mut store = MockCharacterStorePort::new();
            store
                .expect_find_by_id()
                .with(eq(12))
                .returning(|_| Ok(None));

            let props = loader_with(store).load(" 12 ").await.expect("load succeeds");
            assert_eq!(props.raw_character, None);
        }
    }

    mod lookup_tests {
        use super::*;

        #[tokio::test]
        async fn missing_record_yields_no_character() {
            let mut store = MockCharacterStorePort::new();
            store.expect_find_by_id().with(eq(7)).returning(|_| Ok(None));

            let props = loader_with(store).load("7").await.expect("load succeeds");
            assert_eq!(props.raw_character, None);
        }

        #[tokio::test]
        async fn found_record_becomes_the_snapshot_field_for_field() {
            let record = json!({
                "id": 7,
                "name": "Mialee",
                "current_hit_points": 12,
                "max_hit_points": 20,
                "class": "Wizard",
                "alignment": "NG"
            });
            let mut store = MockCharacterStorePort::new();
            let returned = record.clone();
            store
                .expect_find_by_id()
                .with(eq(7))
                .returning(move |_| Ok(Some(returned.clone())));

            let props = loader_with(store).load("7").await.expect("load succeeds");
            let character = props.raw_character.expect("character present");
            assert_eq!(
                serde_json::to_value(&character).expect("snapshot serializes"),
                record
            );
        }

        #[tokio::test]
        async fn malformed_record_is_a_store_fault() {
            let mut store = MockCharacterStorePort::new();
            store
                .expect_find_by_id()
                .returning(|_| Ok(Some(json!({ "id": "not-a-number" }))));

            let result = loader_with(store).load("7").await;
            assert!(matches!(result, Err(StoreError::Malformed(_))));
        }

        #[tokio::test]
        async fn store_fault_propagates_instead_of_degrading_to_not_found() {
            let mut store = MockCharacterStorePort::new();
            store
                .expect_find_by_id()
                .returning(|_| Err(StoreError::Unreachable("boom".into())));

            let result = loader_with(store).load("7").await;
            assert!(matches!(result, Err(StoreError::Unreachable(_))));
        }
    }
}
