use std::path::Path;

/// Mangle a filesystem path the way Claude names project directories
///
/// Every character that is not ASCII alphanumeric becomes `-`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use prompt_history_viewer::mangle_path;
///
/// assert_eq!(mangle_path(Path::new("/Users/alice/my.app")), "-Users-alice-my-app");
/// ```
pub fn mangle_path(path: &Path) -> String {
    path.to_string_lossy()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use prompt_history_viewer::format_path_with_tilde;
///
/// // Returns "~/Documents" if the home directory is /Users/alice
/// let formatted = format_path_with_tilde(Path::new("/Users/alice/Documents"));
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_home(path, dirs::home_dir().as_deref())
}

/// Tilde substitution against an explicit home directory
pub fn format_path_with_home(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    path.display().to_string()
}
