//! Shared test utilities for bpv integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Offline harnesses use [`fake_tool::FakeTool`] in place
//! of brainpro and a private scratch directory per test, so they run in
//! parallel. Live harnesses share the configured scratch path and serialise
//! on [`live::lock`].

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod fake_tool;
pub mod fixtures;
pub mod live;

pub use fake_tool::FakeTool;
pub use fixtures::*;
