//! Prompt-to-code demo: a canned template catalog behind a mock generation
//! cycle, an editable code surface with a sandboxed HTML preview, and a
//! filterable project dashboard.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod exec;
pub mod generator;
pub mod log;
pub mod model;
pub mod notice;
pub mod projects;
pub mod prompt;
pub mod provider;
pub mod safety;
pub mod surface;
pub mod templates;
pub mod ux;
