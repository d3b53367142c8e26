//! Partial-update request bodies for `PUT /character/{id}`
//!
//! The endpoint accepts any subset of character fields; each request type
//! here serializes to exactly the subset its editing surface changes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Personal-details form values, forwarded verbatim as a partial update.
///
/// Carries the name plus every opaque detail field the form was seeded
/// with, so fields the page does not interpret reach the API unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateDetailsRequest {
    pub name: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Hit-points partial update. Exactly these two fields, nothing else.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateHitPointsRequest {
    pub current_hit_points: i32,
    pub max_hit_points: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    mod body_shape_tests {
        use super::*;

        #[test]
        fn hit_points_body_contains_exactly_the_two_fields() {
            let body = UpdateHitPointsRequest {
                current_hit_points: 5,
                max_hit_points: 10,
            };

            let value = serde_json::to_value(&body).expect("body serializes");
            assert_eq!(
                value,
                json!({ "current_hit_points": 5, "max_hit_points": 10 })
            );
        }

        #[test]
        fn details_body_flattens_opaque_fields_beside_the_name() {
            let mut details = Map::new();
            details.insert("class".into(), json!("Cleric"));

            let body = UpdateDetailsRequest {
                name: "Jozan".into(),
                details,
            };

            let value = serde_json::to_value(&body).expect("body serializes");
            assert_eq!(value, json!({ "name": "Jozan", "class": "Cleric" }));
        }
    }
}
