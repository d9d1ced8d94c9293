//! Paths inside the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`, which points at the cwd Zellij
//! was started from (usually the user's home directory).

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Directory holding the preference file and the trace file.
///
/// Resolves to `~/.local/share/zellij/memeverse` when Zellij was started from
/// the home directory.
///
/// ```
/// use memeverse::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/memeverse"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij").join("memeverse")
}

/// Maps a `~`-prefixed path onto the sandbox mount, e.g. for `theme_file`.
///
/// ```
/// use memeverse::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~/a"), "/host/a");
        assert_eq!(expand_tilde("~user/a"), "~user/a");
        assert_eq!(expand_tilde("relative/~"), "relative/~");
    }
}
