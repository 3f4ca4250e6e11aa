//! `--show-bodies` display helpers.
//!
//! JSON blocks go to stdout; label and progress lines ride the logger
//! (stderr) like the rest of the run output.

use log::info;
use serde::Serialize;
use serde_json::{Value, json};

use tokenloop::wire::{ProtectRequest, RevealRequest};
use tokenloop::{ApiResponse, BulkResult, IterationResult};

/// Status for progress lines; transport failures print as `none`.
pub fn status_label(response: &ApiResponse) -> String {
    response
        .status
        .map_or_else(|| "none".to_owned(), |status| status.to_string())
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn payload_json<T: Serialize>(payload: &T) -> Value {
    serde_json::to_value(payload).unwrap_or(Value::Null)
}

/// Print the request payloads and response bodies of one iteration.
pub fn print_iteration_bodies(policy: &str, result: &IterationResult) {
    let protect_payload = payload_json(&ProtectRequest {
        protection_policy_name: policy,
        data: &result.data,
    });
    let reveal_payload = payload_json(&RevealRequest {
        protection_policy_name: policy,
        protected_data: result.protected_token.as_deref().unwrap_or_default(),
    });

    info!("  Sent protect payload:");
    println!("{}", pretty(&protect_payload));
    info!("  Received protect body:");
    println!("{}", pretty(&result.protect_response.body));
    info!("  Sent reveal payload:");
    println!("{}", pretty(&reveal_payload));
    info!("  Received reveal body:");
    println!("{}", pretty(&result.reveal_response.body));
}

/// Print one batch as a normalized JSON block: counts and echoes with
/// body-provided fields winning over computed fallbacks.
pub fn print_batch_bodies(index: usize, batch: &BulkResult) {
    let protect = normalized_side(
        &batch.protect_response,
        batch.inputs.len(),
        batch.protected_tokens.len(),
        "protected_data_array",
        batch
            .protected_tokens
            .iter()
            .map(|token| json!({"protected_data": token}))
            .collect(),
    );
    let reveal = normalized_side(
        &batch.reveal_response,
        batch.inputs.len(),
        batch.restored_values.len(),
        "data_array",
        batch
            .restored_values
            .iter()
            .map(|value| json!({"data": value}))
            .collect(),
    );

    let block = json!({
        "batch": index,
        "protect": protect,
        "reveal": reveal,
        "time_s": batch.elapsed.as_secs_f64(),
    });
    println!("{}", pretty(&block));
}

fn normalized_side(
    response: &ApiResponse,
    total: usize,
    extracted: usize,
    echo_key: &str,
    echo: Vec<Value>,
) -> Value {
    json!({
        "status": field_or(&response.body, "status", status_word(response)),
        "total_count": field_or(&response.body, "total_count", json!(total)),
        "success_count": field_or(&response.body, "success_count", json!(extracted)),
        "error_count": field_or(
            &response.body,
            "error_count",
            json!(total.saturating_sub(extracted)),
        ),
        echo_key: echo,
    })
}

/// Body-provided field wins over the computed fallback.
fn field_or(body: &Value, key: &str, fallback: Value) -> Value {
    body.get(key).cloned().unwrap_or(fallback)
}

fn status_word(response: &ApiResponse) -> Value {
    Value::String(if response.is_success() { "Success" } else { "Error" }.to_owned())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn status_label_renders_absent_status_as_none() {
        assert_eq!(
            status_label(&ApiResponse::new(Some(200), Value::Null)),
            "200"
        );
        assert_eq!(
            status_label(&ApiResponse::transport_failure("refused")),
            "none"
        );
    }

    #[test]
    fn normalized_side_prefers_body_counts() {
        let response = ApiResponse::new(
            Some(200),
            json!({"status": "Partial", "success_count": 1, "total_count": 2}),
        );
        let side = normalized_side(&response, 2, 2, "data_array", Vec::new());
        assert_eq!(side["status"], "Partial");
        assert_eq!(side["success_count"], 1);
        assert_eq!(side["total_count"], 2);
        // not in the body, so computed
        assert_eq!(side["error_count"], 0);
    }

    #[test]
    fn normalized_side_computes_fallbacks_from_counts() {
        let response = ApiResponse::new(Some(500), json!({"error": "server error"}));
        let side = normalized_side(&response, 4, 1, "data_array", Vec::new());
        assert_eq!(side["status"], "Error");
        assert_eq!(side["total_count"], 4);
        assert_eq!(side["success_count"], 1);
        assert_eq!(side["error_count"], 3);
    }
}
