//! Consolidated test utilities for asset-vcs
//!
//! This module provides unified testing utilities for integration tests,
//! focused on seeded status databases and recording chain terminals.

pub mod fixtures;
