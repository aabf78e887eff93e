//! Suite 16: code review (code review, security review, custom command).

use super::{Check, Scenario, Suite};

pub const CODE_REVIEW: Scenario = Scenario {
    suite: Suite::Review,
    name: "code_review",
    description: "Review the project for quality issues",
    guard: None,
    prompt: "Review {webapp} for code quality issues. Look for TODO comments, \
             deprecated functions, missing documentation, and code smells. \
             Summarize your findings.",
    checks: &[Check::OutputContainsAny(&[
        "TODO",
        "deprecated",
        "undocumented",
        "documentation",
        "old_query",
    ])],
};

pub const SECURITY_REVIEW: Scenario = Scenario {
    suite: Suite::Review,
    name: "security_review",
    description: "Security review of src/services/",
    guard: None,
    prompt: "Do a security review of all files in {webapp}/src/services/. Look for hardcoded \
             secrets, credentials, SQL injection risks, and other security issues. \
             Report what you find.",
    checks: &[Check::OutputContainsAny(&[
        "hardcoded",
        "api_key",
        "secret",
        "sk-secret",
        "credential",
        "security",
    ])],
};

pub const CUSTOM_COMMAND: Scenario = Scenario {
    suite: Suite::Review,
    name: "custom_command",
    description: "Follow the custom /review command file",
    guard: None,
    prompt: "Read {webapp}/.claude/commands/review.md and follow its instructions to review \
             the codebase.",
    checks: &[Check::OutputContainsAny(&[
        "security",
        "deprecated",
        "documentation",
        "TODO",
        "review",
    ])],
};

pub const SCENARIOS: &[Scenario] = &[CODE_REVIEW, SECURITY_REVIEW, CUSTOM_COMMAND];
