use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

/// The fixed set of tasks `devtask` knows how to run.
///
/// Declaration order is also the order used by `--dry-run` listings and by
/// the registry's `BTreeMap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TaskName {
    Check,
    Test,
    Build,
    Dev,
    Format,
    Lint,
    Rapid,
}

impl TaskName {
    pub const ALL: [TaskName; 7] = [
        TaskName::Check,
        TaskName::Test,
        TaskName::Build,
        TaskName::Dev,
        TaskName::Format,
        TaskName::Lint,
        TaskName::Rapid,
    ];

    /// Key used on the command line and in `[task.<name>]` config sections.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskName::Check => "check",
            TaskName::Test => "test",
            TaskName::Build => "build",
            TaskName::Dev => "dev",
            TaskName::Format => "format",
            TaskName::Lint => "lint",
            TaskName::Rapid => "rapid",
        }
    }

    /// Capitalised label used when naming a pipeline step in status lines.
    pub fn label(self) -> &'static str {
        match self {
            TaskName::Check => "Check",
            TaskName::Test => "Test",
            TaskName::Build => "Build",
            TaskName::Dev => "Dev",
            TaskName::Format => "Format",
            TaskName::Lint => "Lint",
            TaskName::Rapid => "Rapid",
        }
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        TaskName::ALL
            .into_iter()
            .find(|name| name.as_str() == key)
            .ok_or_else(|| {
                format!(
                    "invalid task name: {s} (expected one of check, test, build, dev, format, lint, rapid)"
                )
            })
    }
}
