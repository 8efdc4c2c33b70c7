//! Integration tests for vitrine
//!
//! These tests verify that multiple components work together correctly.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod gallery_flow;
pub mod rendering;
