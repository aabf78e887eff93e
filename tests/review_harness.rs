//! Suite 16 — code review, against the real brainpro.
//!
//! # What this covers
//!
//! - **code_review**: brainpro reports the TODO, the deprecated `old_query`
//!   or the missing docs.
//! - **security_review**: brainpro flags the credential hardcoded in
//!   `src/services/db.rs`.
//! - **custom_command**: brainpro reads `.claude/commands/review.md` and
//!   follows it.
//!
//! # Running
//!
//! ```sh
//! BPV_RUNNER__BINARY=/path/to/brainpro \
//!     cargo test --test review_harness -- --ignored --test-threads=1
//! ```

mod common;
use common::*;

use bpv::scenarios::review;
use bpv::MockWebapp;
use bpv_fixture::template;

#[tokio::test]
#[ignore = "requires the brainpro binary"]
async fn code_review() {
    if let Some(report) = live::run(&review::CODE_REVIEW).await {
        assert_passed!(report);
    }
}

#[tokio::test]
#[ignore = "requires the brainpro binary"]
async fn security_review() {
    // The seeded secret is what the review must find.
    {
        let _guard = live::lock().await;
        let config = live::config();
        let webapp = MockWebapp::prepare(&config.fixture.scratch_dir, config.fixture.reset)
            .expect("mock webapp");
        let db = webapp.read(template::DB_SERVICE).expect("db.rs");
        if !db.contains(&format!("let api_key = \"{}\"", template::SEEDED_SECRET)) {
            eprintln!("skipping security_review: seeded secret no longer in db.rs");
            return;
        }
    }

    if let Some(report) = live::run(&review::SECURITY_REVIEW).await {
        assert_passed!(report);
    }
}

#[tokio::test]
#[ignore = "requires the brainpro binary"]
async fn custom_command() {
    if let Some(report) = live::run(&review::CUSTOM_COMMAND).await {
        assert_passed!(report);
    }
}
