//! Paths inside the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`, which Zellij points at the
//! directory it was started from (normally the user's home).

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
pub const HOST_ROOT: &str = "/host";

/// Plugin data directory: `/host/.local/share/zellij/zicons`.
///
/// Holds the trace file.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/zicons")
}

/// Rewrites a leading `~` to the sandbox host root.
///
/// ```
/// use zicons::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/icons/glyphs.json"), "/host/icons/glyphs.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/glyphs.json"), "/etc/glyphs.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

/// Inverse of [`expand_tilde`] for display: `/host/x` becomes `~/x`.
#[must_use]
pub fn display_path(path: &str) -> String {
    match path.strip_prefix(HOST_ROOT) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_at_the_start() {
        assert_eq!(expand_tilde("~/a"), "/host/a");
        assert_eq!(expand_tilde("~user/a"), "~user/a");
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
    }

    #[test]
    fn display_path_round_trips_home_paths() {
        assert_eq!(display_path(&expand_tilde("~/icons.json")), "~/icons.json");
        assert_eq!(display_path("/hostile/x"), "/hostile/x");
        assert_eq!(display_path("/host"), "~");
    }

    #[test]
    fn data_dir_is_under_host_share() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/zicons")
        );
    }
}
