//! glimpse-cli: a stand-in debugger host for the glimpse visualizers.
//!
//! Builds an in-memory snapshot from literal values (or loads one from a
//! JSON file), dispatches the root value through the glm registry, and prints
//! the rendered summary followed by its drill-down children.
pub mod config;
pub mod input;
pub mod tree;
