//! repo-bootstrap - start a new project from a GitHub template repository
//!
//! One run performs, in order:
//! - generate a repository from a template through the GitHub REST API
//! - clone it into the current directory
//! - link the clone to a Turborepo remote cache (`npx turbo link`)
//! - upload `TURBO_TOKEN` / `TURBO_TEAM` as sealed Actions secrets
//!
//! Main modules:
//! - cli: clap surface and the layered argument resolver
//! - commands: one module per stage, plus the driver that chains them
//! - config: field metadata table and the resolved configuration
//! - github: REST client and wire models
//! - result: error handling and result types
//! - security: sealed-box encryption of secret values
//! - utils: subprocess spawning and progress spinners

pub mod cli;
pub mod commands;
pub mod config;
pub mod github;
pub mod result;
pub mod security;
pub mod utils;
