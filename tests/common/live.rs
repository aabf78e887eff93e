//! Helpers for harnesses that drive the real brainpro binary.
//!
//! Configuration comes from [`Config::load`], so point the suite at a build
//! with `BPV_RUNNER__BINARY=/path/to/brainpro`. All live tests share the one
//! scratch path; hold [`lock`] for the whole scenario.

use bpv::report::ScenarioReport;
use bpv::{Config, Executor, Outcome, Scenario};
use tokio::sync::{Mutex, MutexGuard};

static FIXTURE_LOCK: Mutex<()> = Mutex::const_new(());

pub async fn lock() -> MutexGuard<'static, ()> {
    FIXTURE_LOCK.lock().await
}

pub fn config() -> Config {
    Config::load(None).expect("bpv configuration")
}

/// Run `scenario` against the live fixture. A skipped scenario is reported
/// on stderr and returns `None`; a failure panics with the reason.
pub async fn run(scenario: &Scenario) -> Option<ScenarioReport> {
    let _guard = lock().await;
    let report = Executor::new(config()).run(scenario).await;
    match &report.outcome {
        Outcome::Passed => Some(report),
        Outcome::Skipped(reason) => {
            eprintln!("skipping {}: {reason}", scenario.id());
            None
        }
        Outcome::Failed(reason) => panic!("{} failed: {reason}", scenario.id()),
    }
}
