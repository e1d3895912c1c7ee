//! CLI library components for Lead Relay.

pub mod logging;
