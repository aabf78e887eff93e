//! bpv-core — shared building blocks for the brainpro validation suite.
//!
//! This crate holds everything the runner, the fixture and the scenario
//! executor agree on: the captured [`InvocationResult`], scenario
//! [`Outcome`]s, layered [`config`], the [`git`] working-tree helpers and the
//! [`assertions`] library.
//!
//! # Architecture
//!
//! ```text
//! Scenario ──► Runner.oneshot ──► brainpro ──► InvocationResult
//!    │                                              │
//!    └──────── MockWebapp (git) ◄── assertions ◄────┘
//! ```

pub mod assertions;
pub mod config;
pub mod git;
pub mod types;

pub use types::{InvocationResult, Outcome, Prompt, ResetPolicy};
