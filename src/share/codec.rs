//! Plan <-> text encoding
//!
//! The payload is the plan's compact JSON, base64-encoded with the URL-safe
//! alphabet (`-` and `_`) and `.` in place of the `=` padding, so it can sit
//! in a query string without escaping. Decoding also accepts the standard
//! alphabet.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{BudgetError, BudgetSplitResult};
use crate::models::BudgetInput;

/// Encode a plan for embedding in a URL
pub fn encode_plan(plan: &BudgetInput) -> BudgetSplitResult<String> {
    let json = serde_json::to_string(plan)?;
    let b64 = STANDARD.encode(json.as_bytes());
    Ok(to_url_alphabet(&b64))
}

/// Decode a payload produced by [`encode_plan`]
///
/// # Errors
///
/// Any malformed payload (bad base64, invalid UTF-8, JSON that isn't a plan)
/// is reported as [`BudgetError::InvalidShareData`].
pub fn decode_plan(encoded: &str) -> BudgetSplitResult<BudgetInput> {
    let b64 = from_url_alphabet(encoded.trim());

    let bytes = STANDARD
        .decode(b64.as_bytes())
        .map_err(|e| invalid("base64", e))?;
    let json = String::from_utf8(bytes).map_err(|e| invalid("utf-8", e))?;
    let plan = serde_json::from_str(&json).map_err(|e| invalid("plan", e))?;

    log::debug!("Decoded shared plan ({} bytes of JSON)", json.len());
    Ok(plan)
}

fn invalid(stage: &str, err: impl std::fmt::Display) -> BudgetError {
    log::warn!("Rejected share payload at {} stage: {}", stage, err);
    BudgetError::InvalidShareData(format!("{}: {}", stage, err))
}

fn to_url_alphabet(b64: &str) -> String {
    b64.chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            '=' => '.',
            other => other,
        })
        .collect()
}

fn from_url_alphabet(encoded: &str) -> String {
    encoded
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            '.' => '=',
            other => other,
        })
        .collect()
}
