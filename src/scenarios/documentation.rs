//! Suite 13: documentation (add docs, update readme, find undocumented).

use super::{Check, Guard, Scenario, Suite};
use bpv_fixture::template::{HANDLERS, README};

pub const ADD_DOCS: Scenario = Scenario {
    suite: Suite::Documentation,
    name: "add_docs",
    description: "Add doc comments to undocumented public handlers",
    guard: Some(Guard::Undocumented {
        file: HANDLERS,
        function: "get_user",
    }),
    prompt: "Add doc comments (///) to all undocumented public functions in \
             {webapp}/src/api/handlers.rs. Each function should have a brief description \
             of what it does.",
    checks: &[
        Check::GitDirty,
        Check::FileContains {
            file: HANDLERS,
            needle: "/// ",
        },
        Check::Builds,
    ],
};

pub const UPDATE_README: Scenario = Scenario {
    suite: Suite::Documentation,
    name: "update_readme",
    description: "Add an API section to the README",
    guard: Some(Guard::ReadmeLacksSection { heading: "## API" }),
    prompt: "The {webapp}/README.md is missing API documentation. Add a section documenting \
             the available API endpoints/handlers based on what's in {webapp}/src/api/handlers.rs.",
    checks: &[
        Check::GitDirty,
        Check::FileContains {
            file: README,
            needle: "API",
        },
    ],
};

pub const FIND_UNDOCUMENTED: Scenario = Scenario {
    suite: Suite::Documentation,
    name: "find_undocumented",
    description: "List functions without doc comments",
    guard: None,
    prompt: "Find functions in {webapp}/src/api/ that don't have doc comments (/// comments). \
             List them.",
    checks: &[Check::OutputContainsAny(&[
        "get_user",
        "create_user",
        "login",
        "list_users",
        "delete_user",
        "handlers.rs",
    ])],
};

pub const SCENARIOS: &[Scenario] = &[ADD_DOCS, UPDATE_README, FIND_UNDOCUMENTED];
