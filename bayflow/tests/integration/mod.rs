//! Integration tests for bayflow's shop workflow
//!
//! These drive jobs through the workshop and the command layer against a
//! real `.work/` directory in a temp dir.

pub mod commands;
pub mod helpers;
pub mod persistence;
pub mod workflow;
