use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// String form of a path as used for cache keys and substring matching
///
/// Non-UTF-8 bytes are replaced lossily; the same path always yields the same key.
pub fn path_key(path: &Path) -> String {
    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use ouravocado::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/notes");
/// // Returns "~/notes" if the home directory is /Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, dirs::home_dir().as_deref())
}

/// Internal helper for path formatting with an explicit home (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && !home.as_os_str().is_empty()
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return path_key(&PathBuf::from("~").join(rest));
    }

    path_key(path)
}
