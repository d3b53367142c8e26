//! Character snapshot as served by the record store

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One character record, as loaded from the record store.
///
/// Only the fields the sheet page reasons about are typed. Every other
/// personal-detail column the tracker stores (class, race, alignment,
/// whatever the campaign uses) is collected into `details` and passed
/// through unchanged between load and submit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Primary key, assigned by the record store. Immutable.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Invariant: never negative. May exceed `max_hit_points` (temporary
    /// hit points are a legitimate tabletop state).
    pub current_hit_points: i32,
    pub max_hit_points: i32,
    /// Personal-detail fields the page does not interpret.
    #[serde(flatten)]
    pub details: Map<String, Value>,
}
