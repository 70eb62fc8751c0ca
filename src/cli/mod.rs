//! CLI infrastructure for the hopper toolkit
//!
//! This module provides the command-line interface for inspecting and
//! exporting learned Q-tables.

pub mod commands;
pub mod output;
