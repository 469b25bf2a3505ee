//! tradewinds Core - Data Types
//!
//! Pure data structures with no behavior beyond validation and decoding.
//! The cache and client crates both depend on this; it depends on nothing
//! else in the workspace.

pub mod contract;
pub mod envelope;
pub mod identity;

pub use contract::{Contract, ContractPayment, ContractTerms, ContractType, DeliverTerm};
pub use envelope::{ApiErrorBody, Envelope, ErrorEnvelope, PagedEnvelope, PageMeta};
pub use identity::{Callsign, IdentityError};
