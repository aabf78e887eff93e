//! bpv — brainpro validation.
//!
//! End-to-end scenarios that drive the brainpro assistant with
//! natural-language prompts against a disposable mock webapp, then check what
//! it printed and what it changed on disk. The layers are public so the
//! integration harnesses under `tests/` can use them directly.
//!
//! # Architecture
//!
//! ```text
//! Scenario ──► Executor ──► Runner.oneshot ──► brainpro
//!                 │                               │
//!                 ├── MockWebapp (prepare/guard)  │
//!                 └── assertions ◄── InvocationResult
//!                        │
//!                        └──► RunReport
//! ```

pub mod executor;
pub mod report;
pub mod scenarios;

pub use bpv_core::{config::Config, InvocationResult, Outcome, Prompt, ResetPolicy};
pub use bpv_fixture::MockWebapp;
pub use bpv_runner::Runner;
pub use executor::Executor;
pub use report::RunReport;
pub use scenarios::{Check, Guard, Scenario, Suite};
