/// Expand an implicitly relative `project/repo` reference into an absolute clone URL
///
/// References containing `:` are already absolute (URL scheme or scp-like
/// `host:path`) and are returned unchanged, as is anything without a `/`.
/// Only the first two `/`-separated segments are kept: `org/repo/extra`
/// expands to `<prefix>org/repo`.
pub fn expand(reference: &str, default_prefix: &str) -> String {
    if reference.contains(':') {
        return reference.to_string();
    }

    let mut parts = reference.split('/');
    match (parts.next(), parts.next()) {
        (Some(project), Some(repo)) => format!("{}{}/{}", default_prefix, project, repo),
        _ => reference.to_string(),
    }
}
