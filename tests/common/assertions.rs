//! Outcome assertion macros for bpv harnesses.
//!
//! These add context-rich failure messages naming the scenario and its
//! actual outcome, so a red test says which check tripped.

/// Assert that a scenario report passed.
///
/// ```rust
/// assert_passed!(report);
/// ```
#[macro_export]
macro_rules! assert_passed {
    ($report:expr) => {{
        let report: &bpv::report::ScenarioReport = &$report;
        if report.outcome != bpv::Outcome::Passed {
            panic!(
                "assert_passed! failed for {}/{}:\n  outcome: {}",
                report.suite, report.name, report.outcome
            );
        }
    }};
}

/// Assert that a scenario report was skipped, optionally with a reason
/// containing `$needle`.
#[macro_export]
macro_rules! assert_skipped {
    ($report:expr) => {
        $crate::assert_skipped!($report, "")
    };
    ($report:expr, $needle:expr) => {{
        let report: &bpv::report::ScenarioReport = &$report;
        let needle: &str = $needle;
        match &report.outcome {
            bpv::Outcome::Skipped(reason) if reason.contains(needle) => {}
            other => panic!(
                "assert_skipped! failed for {}/{}:\n  expected skip containing {:?}\n  actual: {}",
                report.suite, report.name, needle, other
            ),
        }
    }};
}

/// Assert that a scenario report failed with a reason containing `$needle`.
#[macro_export]
macro_rules! assert_failed_with {
    ($report:expr, $needle:expr) => {{
        let report: &bpv::report::ScenarioReport = &$report;
        let needle: &str = $needle;
        match &report.outcome {
            bpv::Outcome::Failed(reason) if reason.contains(needle) => {}
            other => panic!(
                "assert_failed_with! failed for {}/{}:\n  expected failure containing {:?}\n  actual: {}",
                report.suite, report.name, needle, other
            ),
        }
    }};
}
