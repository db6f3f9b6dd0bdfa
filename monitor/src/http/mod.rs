// File: monitor/src/http/mod.rs
//! HTTP communication with monitored Celestia DA nodes
//!
//! Each node exposes a JSON-RPC API authenticated with a bearer token.
//!
//! ```text
//! Monitor → JSON-RPC POST (Bearer token) → Node API
//!              header.LocalHead   → local chain head height
//!              state.Balance      → account balance
//! ```
//!
//! A client is built fresh for every evaluation and dropped afterwards.

pub mod node_client;

pub use node_client::NodeClient;
