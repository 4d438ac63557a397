//! Cross-crate integration flows.

pub mod invoker_flows;
