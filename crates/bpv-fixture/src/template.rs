//! Embedded mock webapp sources.
//!
//! The manifest and ignore file are stored with an `.in` suffix so cargo
//! never mistakes the template directory for a package.

/// `(relative path, contents)` for every file of the mock webapp.
pub const FILES: &[(&str, &str)] = &[
    ("Cargo.toml", include_str!("../mock_webapp/Cargo.toml.in")),
    (".gitignore", include_str!("../mock_webapp/gitignore.in")),
    ("README.md", include_str!("../mock_webapp/README.md")),
    (
        ".claude/commands/review.md",
        include_str!("../mock_webapp/.claude/commands/review.md"),
    ),
    ("src/main.rs", include_str!("../mock_webapp/src/main.rs")),
    ("src/api/mod.rs", include_str!("../mock_webapp/src/api/mod.rs")),
    (
        "src/api/handlers.rs",
        include_str!("../mock_webapp/src/api/handlers.rs"),
    ),
    (
        "src/services/mod.rs",
        include_str!("../mock_webapp/src/services/mod.rs"),
    ),
    (
        "src/services/auth.rs",
        include_str!("../mock_webapp/src/services/auth.rs"),
    ),
    (
        "src/services/db.rs",
        include_str!("../mock_webapp/src/services/db.rs"),
    ),
];

pub const HANDLERS: &str = "src/api/handlers.rs";
pub const README: &str = "README.md";
pub const DB_SERVICE: &str = "src/services/db.rs";
pub const REVIEW_COMMAND: &str = ".claude/commands/review.md";

/// Public handler functions that ship without doc comments.
pub const UNDOCUMENTED_HANDLERS: &[&str] =
    &["get_user", "create_user", "login", "list_users", "delete_user"];

/// The credential hardcoded in [`DB_SERVICE`].
pub const SEEDED_SECRET: &str = "sk-secret-abc123";
