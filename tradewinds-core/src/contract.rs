//! Contract records for the contracts resource family.
//!
//! Field names mirror the remote wire shape (camelCase), so a record read
//! from the API, cached, and written back serializes to the same structure
//! the remote produced. The cache layer never looks inside these types; it
//! stores them under their own `id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of work a contract asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    Procurement,
    Transport,
    Shuttle,
}

/// Payment split between acceptance and fulfillment, in credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractPayment {
    pub on_accepted: i64,
    pub on_fulfilled: i64,
}

/// One delivery obligation within a contract's terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverTerm {
    pub trade_symbol: String,
    pub destination_symbol: String,
    pub units_required: i64,
    pub units_fulfilled: i64,
}

/// Terms a contract must be fulfilled under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTerms {
    /// Deadline for completing all deliveries.
    pub deadline: DateTime<Utc>,
    pub payment: ContractPayment,
    /// Absent for contract types without delivery obligations.
    #[serde(default)]
    pub deliver: Vec<DeliverTerm>,
}

/// One contract as returned by the remote API.
///
/// Uniquely identified by `id`; the cache files index contracts under
/// exactly this identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub faction_symbol: String,
    #[serde(rename = "type")]
    pub contract_type: ContractType,
    pub terms: ContractTerms,
    pub accepted: bool,
    pub fulfilled: bool,
    /// Deprecated on the wire in favor of `deadlineToAccept`, still sent.
    pub expiration: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline_to_accept: Option<DateTime<Utc>>,
}
