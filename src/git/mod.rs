//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the git command-line
//! interface, allowing for a real subprocess-backed implementation and a
//! scripted implementation for testing.
//!
//! The primary abstraction is the [GitCli] trait, which names exactly the
//! git invocations the release workflow performs. The concrete
//! implementations include:
//!
//! - [system::SystemGit]: shells out to the system `git` binary
//! - [mock::MockGit]: an in-memory double for tests
//!
//! Most code should depend on the [GitCli] trait rather than concrete
//! implementations to enable easy testing.

pub mod mock;
pub mod system;

pub use mock::MockGit;
pub use system::SystemGit;

use crate::error::Result;

/// The git command-line surface used by the release workflow.
///
/// Every method corresponds to one git invocation. Implementations treat git
/// as a black-box synchronous executor: standard output comes back as text,
/// a non-zero exit becomes [crate::error::ReleaseTagError::Command] carrying
/// the child's exit code and stderr.
pub trait GitCli: Send + Sync {
    /// Rebase-pull the branch from the remote (`git pull --rebase <remote> <branch>`).
    fn pull_rebase(&self, remote: &str, branch: &str) -> Result<()>;

    /// Fetch all remote tags (`git fetch --tags`).
    fn fetch_tags(&self) -> Result<()>;

    /// The most recent tag reachable from HEAD by commit-graph distance
    /// (`git describe --tags --abbrev=0`), trimmed.
    ///
    /// Fails when the repository has no tags.
    fn describe_latest_tag(&self) -> Result<String>;

    /// One-line subjects of every commit in `<from_tag>..HEAD`, oldest
    /// first, each line wrapped in double quotes by the log format.
    fn log_subjects_since(&self, from_tag: &str) -> Result<String>;

    /// Create an annotated tag at HEAD (`git tag -a <name> -m <message>`).
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;

    /// Push one tag to the remote (`git push <remote> <name>`).
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}
