//! Release-tag workflow orchestration.

use crate::config::Config;
use crate::error::Result;
use crate::git::GitCli;
use crate::notes::filter_release_notes;
use crate::version::Version;

/// Orchestrates the release-tag workflow end to end: synchronize the local
/// repository, derive the previous and next versions, build the filtered
/// release note, create the annotated tag, push it.
///
/// The flow is strictly sequential; any failing git invocation aborts the
/// run. A tag already created locally is not rolled back when the push
/// fails, which leaves a local-only tag behind.
pub struct ReleaseTagger<G: GitCli> {
    git: G,
    config: Config,
    version_override: Option<String>,
}

impl<G: GitCli> ReleaseTagger<G> {
    /// Create a tagger, taking the version override from the `VERSION`
    /// environment variable (ignored when empty).
    pub fn new(git: G, config: Config) -> Self {
        let version_override = std::env::var("VERSION").ok().filter(|v| !v.is_empty());
        Self::with_override(git, config, version_override)
    }

    /// Create a tagger with an explicit version override.
    pub fn with_override(git: G, config: Config, version_override: Option<String>) -> Self {
        ReleaseTagger {
            git,
            config,
            version_override,
        }
    }

    /// Access the underlying git backend (used by tests to inspect the
    /// recorded calls of a mock).
    pub fn git(&self) -> &G {
        &self.git
    }

    /// Update the working copy to the latest remote state: rebase pull of
    /// the configured branch, then a tag fetch.
    pub fn sync_repository(&self) -> Result<()> {
        self.git
            .pull_rebase(&self.config.remote, &self.config.branch)?;
        self.git.fetch_tags()
    }

    /// The version recorded by the most recent reachable tag.
    ///
    /// The tag prefix is stripped; no further validation happens. Fails when
    /// the repository has no tags.
    pub fn current_version(&self) -> Result<Version> {
        let tag = self.git.describe_latest_tag()?;
        Ok(Version::from_tag(&tag, &self.config.tag_prefix))
    }

    /// The version for the new release: the override when supplied,
    /// otherwise the current version with its trailing segment incremented.
    pub fn new_version(&self) -> Result<Version> {
        if let Some(version) = &self.version_override {
            return Ok(Version::new(version.clone()));
        }
        self.current_version()?.bump_last()
    }

    /// Raw quoted commit subjects between the previous version's tag and
    /// HEAD, oldest first.
    pub fn release_note(&self) -> Result<String> {
        let previous = self.current_version()?;
        self.git
            .log_subjects_since(&previous.tag_name(&self.config.tag_prefix))
    }

    /// Compute the tag name and annotation message without touching the
    /// repository.
    pub fn preview(&self) -> Result<(String, String)> {
        let new_version = self.new_version()?;
        let raw = self.release_note()?;
        let notes = filter_release_notes(
            &raw,
            &self.config.categories,
            &new_version,
            &self.config.tag_prefix,
        );
        Ok((
            new_version.tag_name(&self.config.tag_prefix),
            notes.join("\n"),
        ))
    }

    /// Create the annotated tag with the filtered release note as its
    /// message and push it to the configured remote. Returns the tag name.
    pub fn create_and_push_tag(&self) -> Result<String> {
        let (tag, message) = self.preview()?;
        self.git.create_annotated_tag(&tag, &message)?;
        self.git.push_tag(&self.config.remote, &tag)?;
        Ok(tag)
    }
}
