use std::collections::HashSet;
use std::path::PathBuf;

use crate::utils::path_key;

/// True if the path text contains any ignore substring (case-sensitive, raw text)
pub fn should_ignore_path(path: &str, ignore_substrings: &[String]) -> bool {
    ignore_substrings.iter().any(|ignore| path.contains(ignore.as_str()))
}

/// Drop every path whose text contains one of the ignore substrings
///
/// Survivors keep their relative order. An empty ignore list keeps everything.
pub fn filter_ignored(paths: Vec<PathBuf>, ignore_substrings: &[String]) -> Vec<PathBuf> {
    if ignore_substrings.is_empty() {
        return paths;
    }

    paths
        .into_iter()
        .filter(|path| !should_ignore_path(&path_key(path), ignore_substrings))
        .collect()
}

/// Keep only paths whose lower-cased extension is in the include set
///
/// Each configured extension is normalised with [`normalize_extension`] first, so `MD`,
/// `.md` and `..md` all select `.md` files.
pub fn filter_by_extensions(paths: Vec<PathBuf>, include_extensions: &[String]) -> Vec<PathBuf> {
    let wanted: HashSet<String> =
        include_extensions.iter().map(|ext| normalize_extension(ext)).collect();

    paths
        .into_iter()
        .filter(|path| file_extension(&path_key(path)).is_some_and(|ext| wanted.contains(&ext)))
        .collect()
}

/// Lower-case an extension and give it exactly one leading dot
pub fn normalize_extension(ext: &str) -> String {
    format!(".{}", ext.trim_start_matches('.').to_lowercase())
}

/// Lower-cased suffix of the file name starting at its last dot
///
/// A dot-file such as `.org` has extension `.org`; a name without a dot has none.
pub fn file_extension(path: &str) -> Option<String> {
    let name = path.rsplit(['/', std::path::MAIN_SEPARATOR]).next().unwrap_or(path);
    name.rfind('.').map(|idx| name[idx..].to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_should_ignore_path_substring() {
        let ignores = strings(&["skip", ".git/"]);
        assert!(should_ignore_path("notes/skip/b.md", &ignores));
        assert!(should_ignore_path("repo/.git/HEAD", &ignores));
        assert!(should_ignore_path("notes/skipped.md", &ignores));
        assert!(!should_ignore_path("notes/keep.md", &ignores));
    }

    #[test]
    fn test_should_ignore_path_is_case_sensitive() {
        let ignores = strings(&["Skip"]);
        assert!(!should_ignore_path("notes/skip/b.md", &ignores));
        assert!(should_ignore_path("notes/Skip/b.md", &ignores));
    }

    #[test]
    fn test_filter_ignored_preserves_order() {
        let input = paths(&["c.md", "skip/a.md", "b.md", "x/skip.md", "a.md"]);
        let result = filter_ignored(input, &strings(&["skip"]));
        assert_eq!(result, paths(&["c.md", "b.md", "a.md"]));
    }

    #[test]
    fn test_filter_ignored_empty_list_keeps_all() {
        let input = paths(&["a.md", "b.md"]);
        assert_eq!(filter_ignored(input.clone(), &[]), input);
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension(".md"), ".md");
        assert_eq!(normalize_extension("MD"), ".md");
        assert_eq!(normalize_extension("..Txt"), ".txt");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("dir/a.MD"), Some(".md".to_string()));
        assert_eq!(file_extension("dir/a.txt.bak"), Some(".bak".to_string()));
        assert_eq!(file_extension("dir.d/README"), None);
        assert_eq!(file_extension("dir/.org"), Some(".org".to_string()));
    }

    #[test]
    fn test_filter_by_extensions_case_insensitive() {
        let input = paths(&["a.md", "B.MD", "c.Txt", "d.org", "e.rs", "f.txt.bak", "g"]);
        let result = filter_by_extensions(input, &strings(&["md", ".TXT"]));
        assert_eq!(result, paths(&["a.md", "B.MD", "c.Txt"]));
    }

    #[test]
    fn test_filter_by_extensions_empty_set_keeps_nothing() {
        let input = paths(&["a.md", "b.txt"]);
        assert!(filter_by_extensions(input, &[]).is_empty());
    }
}
