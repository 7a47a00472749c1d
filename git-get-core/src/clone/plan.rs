use std::convert::Infallible;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{expand, target_dir};
use crate::{find_executable, Config, Error, Result};

/// A fully resolved `git clone` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonePlan {
    /// Absolute path of the git executable
    pub git: PathBuf,
    /// Clone URL after shorthand expansion
    pub clone_url: String,
    /// Destination directory below the source root
    pub destination: PathBuf,
}

impl ClonePlan {
    /// Resolve a repository reference against the configuration
    ///
    /// Looks up git on PATH and expands `~` in the source root before
    /// deriving the destination.
    pub fn resolve(reference: &str, config: &Config) -> Result<Self> {
        let git = find_executable(&config.clone.git)?;
        let source_root = config.clone.source_root_dir()?;
        Self::from_parts(git, &source_root, reference, &config.clone.default_prefix)
    }

    /// Build a plan from already located git and source root
    pub fn from_parts(
        git: PathBuf,
        source_root: &Path,
        reference: &str,
        default_prefix: &str,
    ) -> Result<Self> {
        let clone_url = expand(reference, default_prefix);
        tracing::debug!(reference, clone_url = %clone_url, "Expanded reference");

        let destination = source_root.join(target_dir(&clone_url)?);

        Ok(Self {
            git,
            clone_url,
            destination,
        })
    }

    /// Arguments passed to git, excluding argv[0]
    pub fn args(&self) -> [OsString; 3] {
        [
            OsString::from("clone"),
            OsString::from(&self.clone_url),
            self.destination.clone().into_os_string(),
        ]
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.git);
        command.args(self.args());
        command
    }

    /// Replace the current process with `git clone`
    ///
    /// The environment is inherited unchanged. This never returns on success;
    /// the caller observes git's exit status instead of ours.
    #[cfg(unix)]
    pub fn handoff(self) -> Result<Infallible> {
        use std::os::unix::process::CommandExt;

        tracing::info!(
            git = %self.git.display(),
            clone_url = %self.clone_url,
            destination = %self.destination.display(),
            "Handing off to git"
        );

        let mut command = self.command();
        command.arg0("git");
        Err(Error::ProcessReplacement(command.exec()))
    }

    /// Run `git clone` and exit with its status
    ///
    /// Without an exec primitive the process is spawned and waited on, then
    /// its exit code is propagated through `std::process::exit`.
    #[cfg(not(unix))]
    pub fn handoff(self) -> Result<Infallible> {
        tracing::info!(
            git = %self.git.display(),
            clone_url = %self.clone_url,
            destination = %self.destination.display(),
            "Running git"
        );

        let status = self
            .command()
            .status()
            .map_err(Error::ProcessReplacement)?;
        std::process::exit(status.code().unwrap_or(1))
    }
}

impl fmt::Display for ClonePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} clone {} {}",
            self.git.display(),
            self.clone_url,
            self.destination.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(reference: &str) -> Result<ClonePlan> {
        ClonePlan::from_parts(
            PathBuf::from("/usr/bin/git"),
            Path::new("/home/alice/src"),
            reference,
            "git@github.com:",
        )
    }

    #[test]
    fn test_shorthand_end_to_end() {
        let plan = plan("org/repo").unwrap();
        assert_eq!(plan.clone_url, "git@github.com:org/repo");
        assert_eq!(
            plan.destination,
            Path::new("/home/alice/src").join("github.com").join("org").join("repo")
        );
    }

    #[test]
    fn test_absolute_url_kept() {
        let plan = plan("https://GitLab.com/Group/Project.git").unwrap();
        assert_eq!(plan.clone_url, "https://GitLab.com/Group/Project.git");
        assert_eq!(
            plan.destination,
            Path::new("/home/alice/src").join("gitlab.com").join("group").join("project")
        );
    }

    #[test]
    fn test_bare_name_is_malformed() {
        assert!(matches!(plan("repo"), Err(Error::MalformedUrl { .. })));
    }

    #[test]
    fn test_args() {
        let plan = plan("org/repo").unwrap();
        let args = plan.args();
        assert_eq!(args[0], "clone");
        assert_eq!(args[1], "git@github.com:org/repo");
        assert_eq!(PathBuf::from(&args[2]), plan.destination);
    }

    #[cfg(unix)]
    #[test]
    fn test_display() {
        let plan = plan("org/repo").unwrap();
        assert_eq!(
            plan.to_string(),
            "/usr/bin/git clone git@github.com:org/repo /home/alice/src/github.com/org/repo"
        );
    }

    #[test]
    fn test_resolve_missing_git() {
        let mut config = Config::default();
        config.clone.git = "definitely-not-a-real-git-binary".to_string();

        let err = ClonePlan::resolve("org/repo", &config).unwrap_err();
        assert!(matches!(err, Error::ExecutableNotFound(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_with_explicit_paths() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let git = dir.path().join("git");
        std::fs::write(&git, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&git, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut config = Config::default();
        config.clone.git = git.to_str().unwrap().to_string();
        config.clone.source_root = dir.path().join("src").to_str().unwrap().to_string();

        let plan = ClonePlan::resolve("git@example.com:Team/Tool.git", &config).unwrap();
        assert_eq!(plan.git, git);
        assert_eq!(plan.destination, dir.path().join("src/example.com/team/tool"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_rejects_empty_source_root() {
        let mut config = Config::default();
        config.clone.git = "/bin/sh".to_string();
        config.clone.source_root = String::new();

        let err = ClonePlan::resolve("org/repo", &config).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_handoff_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let plan = ClonePlan {
            git: dir.path().join("missing-git"),
            clone_url: "git@github.com:org/repo".to_string(),
            destination: dir.path().join("dest"),
        };

        let err = plan.handoff().unwrap_err();
        assert!(matches!(err, Error::ProcessReplacement(_)));
    }
}
