//! The eayun-neutron CLI client library.
//!
//! This crate provides the core functionality of the command-line client for
//! the EayunStack Neutron extensions: resource descriptors, request body
//! construction, response shaping, the Neutron REST client and command
//! execution.
//!
//! # Modules
//!
//! - `actions`: Command implementations
//! - `body`: Request body construction from parsed arguments
//! - `commands`: CLI command parsing
//! - `configuration`: Configuration management
//! - `format`: Data formatting utilities for various output formats
//! - `neutron_api`: Neutron REST client
//! - `resources`: Static descriptors of the supported resources
//! - `shaping`: Post-processing of API responses

pub mod actions;
pub mod body;
pub mod cli;
pub mod commands;
pub mod configuration;
pub mod error;
pub mod error_utils;
pub mod exit_codes;
pub mod format;
pub mod http_utils;
pub mod neutron_api;
pub mod resolution_utils;
pub mod resources;
pub mod shaping;

#[cfg(test)]
mod testing;
