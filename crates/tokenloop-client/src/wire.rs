//! Wire-format request payloads for the protect/reveal endpoints.
//!
//! The bulk payloads carry every compatibility key observed across vendor
//! implementations (`data_array`, `protected_array`,
//! `protected_data_array`) so one request shape satisfies all of them.

use serde::Serialize;

/// Body for `POST /v1/protect`.
#[derive(Debug, Clone, Serialize)]
pub struct ProtectRequest<'a> {
    pub protection_policy_name: &'a str,
    pub data: &'a str,
}

/// Body for `POST /v1/reveal`.
#[derive(Debug, Clone, Serialize)]
pub struct RevealRequest<'a> {
    pub protection_policy_name: &'a str,
    pub protected_data: &'a str,
}

/// Body for `POST /v1/protectbulk`.
#[derive(Debug, Clone, Serialize)]
pub struct ProtectBulkRequest<'a> {
    pub protection_policy_name: &'a str,
    pub data: &'a [String],
    pub data_array: &'a [String],
}

/// One element of `protected_data_array` in a bulk reveal body.
#[derive(Debug, Clone, Serialize)]
pub struct ProtectedItem<'a> {
    pub protected_data: &'a str,
}

/// Body for `POST /v1/revealbulk`.
#[derive(Debug, Clone, Serialize)]
pub struct RevealBulkRequest<'a> {
    pub protection_policy_name: &'a str,
    pub protected_data: &'a [String],
    pub protected_array: &'a [String],
    pub protected_data_array: Vec<ProtectedItem<'a>>,
}

impl<'a> RevealBulkRequest<'a> {
    /// Assemble a bulk reveal body from plain tokens.
    #[must_use]
    pub fn new(policy: &'a str, protected: &'a [String]) -> Self {
        Self {
            protection_policy_name: policy,
            protected_data: protected,
            protected_array: protected,
            protected_data_array: protected
                .iter()
                .map(|token| ProtectedItem {
                    protected_data: token,
                })
                .collect(),
        }
    }
}
