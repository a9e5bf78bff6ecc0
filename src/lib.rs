//! A library for querying a Seele full node over its JSON-RPC API. The
//! library is structured around a few modules.
//!
//! - [`rpc`] contains the main entrypoint to the library. In particular it
//!   contains the [`Client`](rpc::Client) struct which issues queries through
//!   a caller supplied [`Transport`](rpc::Transport) and decodes the untyped
//!   responses into structured values.
//! - [`types`] contains the type definitions modelling the responses.
//! - [`endpoints`] contains the error types returned by queries.
//! - [`constants`] contains the method names and sentinel values of the node
//!   API.
//!
//! The node encodes every numeric value as a JSON float. Quantities that can
//! grow without bound (difficulty, amounts, fees, gas) are decoded into
//! [`BigInt`](num_bigint::BigInt) through an exact conversion, and any value
//! that is not an integer is rejected instead of being truncated.

/// Method names and sentinel values of the node's JSON-RPC API.
pub mod constants;
/// Errors returned by queries to the node.
pub mod endpoints;
mod internal;
/// Type definitions used throughout the rest of the SDK.
pub mod types;

/// A [client](rpc::Client) for the node's JSON-RPC API.
pub mod rpc;

/// Re-export of the arbitrary precision integer used for amounts.
pub use num_bigint::BigInt;
