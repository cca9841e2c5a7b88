/*
[INPUT]:  Upstream JSON envelope and output-formatting flags
[OUTPUT]: Typed response envelope and call outcome variants
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The upstream response envelope. The adapter does not structure `result`
/// beyond raw JSON; each endpoint's payload shape belongs to the upstream
/// contract, not to this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// A missing `success` field is treated as failure.
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: Value,
}

/// A successful response as delivered to the caller: the whole envelope, or
/// its serialized text form when cleartext mode is configured.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePayload {
    Object(ApiResponse),
    Cleartext(String),
}

/// Outcome of one API call that produced a parseable envelope.
///
/// `Failure` carries the full `success: false` envelope; it is a normal,
/// non-exceptional result. Transport and decode problems never reach this
/// type, they surface as [`crate::BittrexError`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    Success(ResponsePayload),
    Failure(ApiResponse),
}

impl ApiOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }

    /// Decompose into the conventional callback argument pair.
    ///
    /// With `inverse = false` the pair is `(data, error)`; with
    /// `inverse = true` the pair is `(error, data)`. Exactly one slot is
    /// populated.
    pub fn into_callback_args(
        self,
        inverse: bool,
    ) -> (Option<ResponsePayload>, Option<ResponsePayload>) {
        let (data, error) = match self {
            ApiOutcome::Success(payload) => (Some(payload), None),
            ApiOutcome::Failure(envelope) => (None, Some(ResponsePayload::Object(envelope))),
        };
        if inverse { (error, data) } else { (data, error) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn failure_envelope() -> ApiResponse {
        ApiResponse {
            success: false,
            message: "m".to_string(),
            result: Value::Null,
        }
    }

    #[test]
    fn test_missing_success_field_is_failure() {
        let envelope: ApiResponse =
            serde_json::from_value(json!({ "message": "x" })).expect("decode");
        assert!(!envelope.success);
        assert_eq!(envelope.result, Value::Null);
    }

    #[test]
    fn test_failure_callback_args_default_order() {
        let outcome = ApiOutcome::Failure(failure_envelope());
        let (data, error) = outcome.into_callback_args(false);
        assert_eq!(data, None);
        assert_eq!(error, Some(ResponsePayload::Object(failure_envelope())));
    }

    #[test]
    fn test_failure_callback_args_inverted_order() {
        let outcome = ApiOutcome::Failure(failure_envelope());
        let (first, second) = outcome.into_callback_args(true);
        assert_eq!(first, Some(ResponsePayload::Object(failure_envelope())));
        assert_eq!(second, None);
    }

    #[test]
    fn test_success_callback_args_both_orders() {
        let envelope = ApiResponse {
            success: true,
            message: String::new(),
            result: json!({ "Bid": 1.0 }),
        };
        let payload = ResponsePayload::Object(envelope);

        let (data, error) = ApiOutcome::Success(payload.clone()).into_callback_args(false);
        assert_eq!(data, Some(payload.clone()));
        assert_eq!(error, None);

        let (first, second) = ApiOutcome::Success(payload.clone()).into_callback_args(true);
        assert_eq!(first, None);
        assert_eq!(second, Some(payload));
    }
}
