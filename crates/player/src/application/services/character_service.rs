//! Character Service - Application service for sheet edit submissions
//!
//! This service implements the two edit paths of the sheet page against
//! the update API. It depends only on the typed `ApiPort`, not concrete
//! HTTP infrastructure.
//!
//! The two paths deliberately differ:
//! - Personal details are forwarded verbatim and the caller performs no
//!   local merge; a reload is the confirmation path.
//! - Hit points are coerced to integers, sent as exactly the two-field
//!   partial update, and the sent payload is returned so the caller can
//!   merge it into its view model once the API has confirmed persistence.

use fichas_shared::{UpdateDetailsRequest, UpdateHitPointsRequest};

use crate::application::error::ServiceError;
use crate::ports::outbound::ApiPort;

/// Free-form hit-point form values, as the editing surface captured them.
#[derive(Clone, Debug, PartialEq)]
pub struct HitPointsInput {
    pub current: String,
    pub max: String,
}

/// Character service for sheet edit operations
#[derive(Clone)]
pub struct CharacterService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> CharacterService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Forward the personal-details form values verbatim as a partial
    /// update. Resolves without touching any local state.
    pub async fn update_details(
        &self,
        character_id: i64,
        values: &UpdateDetailsRequest,
    ) -> Result<(), ServiceError> {
        self.api
            .put_no_response(&format!("/character/{character_id}"), values)
            .await?;
        Ok(())
    }

    /// Coerce the hit-point form values and send the two-field partial
    /// update. Returns the payload that was sent: the caller merges that
    /// payload, not the response body, into its view model.
    pub async fn update_hit_points(
        &self,
        character_id: i64,
        input: &HitPointsInput,
    ) -> Result<UpdateHitPointsRequest, ServiceError> {
        // Current hit points are never negative; there is no upper clamp
        // against the maximum.
        let current = coerce_hit_points(&input.current, "current hit points")?.max(0);
        let max = coerce_hit_points(&input.max, "max hit points")?;

        let body = UpdateHitPointsRequest {
            current_hit_points: current,
            max_hit_points: max,
        };

        self.api
            .put_no_response(&format!("/character/{character_id}"), &body)
            .await?;

        Ok(body)
    }
}

fn coerce_hit_points(raw: &str, field: &str) -> Result<i32, ServiceError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ServiceError::InvalidInput(format!("{field} must be a whole number, got {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::testing::{api_request_failed, RecordingApi};
    use crate::ports::outbound::ApiError;
    use serde_json::json;

    mod hit_points_tests {
        use super::*;

        #[tokio::test]
        async fn string_values_are_coerced_and_sent_as_exactly_two_fields() {
            let api = RecordingApi::new();
            let svc = CharacterService::new(api.clone());

            let sent = svc
                .update_hit_points(
                    42,
                    &HitPointsInput {
                        current: "5".into(),
                        max: "10".into(),
                    },
                )
                .await
                .expect("submit succeeds");

            assert_eq!(sent.current_hit_points, 5);
            assert_eq!(sent.max_hit_points, 10);
            assert_eq!(
                api.puts(),
                vec![(
                    "/character/42".to_string(),
                    json!({ "current_hit_points": 5, "max_hit_points": 10 })
                )]
            );
        }

        #[tokio::test]
        async fn surrounding_whitespace_is_tolerated() {
            let svc = CharacterService::new(RecordingApi::new());

            let sent = svc
                .update_hit_points(
                    1,
                    &HitPointsInput {
                        current: " 7 ".into(),
                        max: "9".into(),
                    },
                )
                .await
                .expect("submit succeeds");

            assert_eq!(sent.current_hit_points, 7);
        }

        #[tokio::test]
        async fn negative_current_clamps_to_zero() {
            let svc = CharacterService::new(RecordingApi::new());

            let sent = svc
                .update_hit_points(
                    1,
                    &HitPointsInput {
                        current: "-3".into(),
                        max: "10".into(),
                    },
                )
                .await
                .expect("submit succeeds");

            assert_eq!(sent.current_hit_points, 0);
            assert_eq!(sent.max_hit_points, 10);
        }

        #[tokio::test]
        async fn non_numeric_input_is_rejected_before_any_request() {
            let api = RecordingApi::new();
            let svc = CharacterService::new(api.clone());

            let result = svc
                .update_hit_points(
                    1,
                    &HitPointsInput {
                        current: "abc".into(),
                        max: "10".into(),
                    },
                )
                .await;

            assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
            assert!(api.puts().is_empty());
        }

        #[tokio::test]
        async fn transport_failure_propagates() {
            let svc =
                CharacterService::new(RecordingApi::failing_with(api_request_failed("timeout")));

            let result = svc
                .update_hit_points(
                    1,
                    &HitPointsInput {
                        current: "5".into(),
                        max: "10".into(),
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(ServiceError::Api(ApiError::RequestFailed(_)))
            ));
        }
    }

    mod details_tests {
        use super::*;

        #[tokio::test]
        async fn form_values_are_forwarded_verbatim() {
            let api = RecordingApi::new();
            let svc = CharacterService::new(api.clone());

            let mut details = serde_json::Map::new();
            details.insert("class".into(), json!("Cleric"));
            details.insert("alignment".into(), json!("LG"));

            svc.update_details(
                7,
                &UpdateDetailsRequest {
                    name: "Jozan".into(),
                    details,
                },
            )
            .await
            .expect("submit succeeds");

            assert_eq!(
                api.puts(),
                vec![(
                    "/character/7".to_string(),
                    json!({ "name": "Jozan", "class": "Cleric", "alignment": "LG" })
                )]
            );
        }

        #[tokio::test]
        async fn failure_propagates_without_side_effects() {
            let svc =
                CharacterService::new(RecordingApi::failing_with(api_request_failed("refused")));

            let result = svc
                .update_details(
                    7,
                    &UpdateDetailsRequest {
                        name: "Jozan".into(),
                        details: serde_json::Map::new(),
                    },
                )
                .await;

            assert!(matches!(result, Err(ServiceError::Api(_))));
        }
    }
}
