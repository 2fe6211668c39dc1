//! System git backend.
//!
//! Every operation is one blocking `git` subprocess. Standard output is
//! returned as text; a non-zero exit aborts the run with the child's exit
//! code and stderr attached.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{ReleaseTagError, Result};
use crate::git::GitCli;

/// [GitCli] implementation that shells out to the system `git` binary.
#[derive(Debug)]
pub struct SystemGit {
    /// Working tree root
    work_tree: PathBuf,
}

impl SystemGit {
    /// Open a git repository at (or above) the given path.
    ///
    /// Performs one `git rev-parse --show-toplevel` call to locate the
    /// working tree root.
    pub fn open(path: &Path) -> Result<Self> {
        let output = Command::new("git")
            .arg("-C")
            .arg(path)
            .args(["rev-parse", "--show-toplevel"])
            .output()?;

        if !output.status.success() {
            return Err(ReleaseTagError::command(
                "rev-parse --show-toplevel",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(SystemGit {
            work_tree: PathBuf::from(stdout.trim()),
        })
    }

    /// Working tree root this backend operates on.
    pub fn work_tree(&self) -> &Path {
        &self.work_tree
    }

    /// Run one git command and return its stdout as text.
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.work_tree)
            .args(args)
            .output()?;

        if !output.status.success() {
            return Err(ReleaseTagError::command(
                args.join(" "),
                output.status.code(),
                String::from_utf8_lossy(&output.stderr),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitCli for SystemGit {
    fn pull_rebase(&self, remote: &str, branch: &str) -> Result<()> {
        self.run(&["pull", "--rebase", remote, branch])?;
        Ok(())
    }

    fn fetch_tags(&self) -> Result<()> {
        self.run(&["fetch", "--tags"])?;
        Ok(())
    }

    fn describe_latest_tag(&self) -> Result<String> {
        let tag = self.run(&["describe", "--tags", "--abbrev=0"])?;
        Ok(tag.trim().to_string())
    }

    fn log_subjects_since(&self, from_tag: &str) -> Result<String> {
        let range = format!("{}..HEAD", from_tag);
        // The quotes are part of the format: each subject comes back quoted.
        self.run(&["log", "--reverse", "--pretty=\"%s\"", &range])
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        self.run(&["tag", "-a", name, "-m", message])?;
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        self.run(&["push", remote, name])?;
        Ok(())
    }
}
