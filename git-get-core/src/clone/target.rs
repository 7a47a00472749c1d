use std::path::PathBuf;

use crate::{Error, Result};

/// Resolve a clone URL to the directory it is cloned into, relative to the source root
///
/// The result is `<hostname>/<path...>` with any username and trailing `.git`
/// removed, lower-cased so that hosts differing only in case share a directory.
pub fn target_dir(clone_url: &str) -> Result<PathBuf> {
    let cleaned = clone_url.strip_suffix(".git").unwrap_or(clone_url);

    // https://, ssh:// and friends take precedence over scp-like host:path
    let (host, path) = if let Some((_, address)) = cleaned.split_once("://") {
        address
            .split_once('/')
            .ok_or_else(|| Error::malformed("expected path in URL", clone_url))?
    } else if let Some(split) = cleaned.split_once(':') {
        split
    } else {
        return Err(Error::malformed(
            "expected PROJECT/REPO or absolute git clone URL",
            clone_url,
        ));
    };

    let hostname = host.rsplit('@').next().unwrap_or(host);

    let target: PathBuf = std::iter::once(hostname)
        .chain(path.split('/'))
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .map(str::to_lowercase)
        .collect();

    tracing::debug!(clone_url, hostname, target = %target.display(), "Resolved target directory");
    Ok(target)
}
