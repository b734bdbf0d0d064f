//! Recognised property keys.

/// Location of the step definitions (the runtime's glue).
pub const STEPS_PACKAGE: &str = "steps.package";

/// Tag expression selecting the scenarios to run.
pub const TAGS: &str = "tags";

/// Directory holding the feature files.
pub const FEATURES_DIRECTORY: &str = "features.directory";

/// Directory receiving the JSON report.
pub const REPORT_DIRECTORY: &str = "cucumber.report.directory";
