use std::sync::Mutex;

use crate::error::{ReleaseTagError, Result};
use crate::git::GitCli;

/// Mock git backend for testing without spawning processes.
///
/// Scripted with a latest tag and a list of commit subjects; records every
/// mutating call so tests can assert on the exact workflow performed.
pub struct MockGit {
    latest_tag: Option<String>,
    subjects: Vec<String>,
    fail_push: bool,
    /// Ordered record of (remote, branch) pull invocations
    pub pulls: Mutex<Vec<(String, String)>>,
    /// Number of tag-fetch invocations
    pub tag_fetches: Mutex<usize>,
    /// Ordered record of (tag, message) created tags
    pub created: Mutex<Vec<(String, String)>>,
    /// Ordered record of (remote, tag) pushes
    pub pushed: Mutex<Vec<(String, String)>>,
}

impl MockGit {
    /// Repository with one reachable tag and the given commit subjects
    /// (oldest first) since that tag.
    pub fn new(latest_tag: Option<&str>, subjects: &[&str]) -> Self {
        MockGit {
            latest_tag: latest_tag.map(str::to_string),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            fail_push: false,
            pulls: Mutex::new(Vec::new()),
            tag_fetches: Mutex::new(0),
            created: Mutex::new(Vec::new()),
            pushed: Mutex::new(Vec::new()),
        }
    }

    /// Make every push fail the way a rejected `git push` does.
    pub fn failing_push(mut self) -> Self {
        self.fail_push = true;
        self
    }
}

impl GitCli for MockGit {
    fn pull_rebase(&self, remote: &str, branch: &str) -> Result<()> {
        self.pulls
            .lock()
            .unwrap()
            .push((remote.to_string(), branch.to_string()));
        Ok(())
    }

    fn fetch_tags(&self) -> Result<()> {
        *self.tag_fetches.lock().unwrap() += 1;
        Ok(())
    }

    fn describe_latest_tag(&self) -> Result<String> {
        self.latest_tag.clone().ok_or_else(|| {
            ReleaseTagError::command(
                "describe --tags --abbrev=0",
                Some(128),
                "fatal: No names found, cannot describe anything.",
            )
        })
    }

    fn log_subjects_since(&self, _from_tag: &str) -> Result<String> {
        Ok(self
            .subjects
            .iter()
            .map(|s| format!("\"{}\"", s))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        self.created
            .lock()
            .unwrap()
            .push((name.to_string(), message.to_string()));
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        if self.fail_push {
            return Err(ReleaseTagError::command(
                format!("push {} {}", remote, name),
                Some(1),
                "error: failed to push some refs",
            ));
        }
        self.pushed
            .lock()
            .unwrap()
            .push((remote.to_string(), name.to_string()));
        Ok(())
    }
}
