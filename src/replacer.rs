//! # Pattern Replacer
//!
//! Substitutes environment-derived values into path patterns. A
//! [`PatternReplacer`] captures its environment exactly once at
//! construction (hostname, username, DDEV flag), so every pattern resolved
//! within one provisioning run sees the same consistent snapshot — the
//! environment is never re-read per call.
//!
//! ## Tokens
//!
//! Tokens are literal substrings, replaced verbatim in a single pass:
//!
//! | Token    | Value                                      |
//! |----------|--------------------------------------------|
//! | `%t%`    | template root folder                       |
//! | `%p%`    | project folder (basename of project root)  |
//! | `%pp%`   | project parent folder                      |
//! | `%u%`    | username                                   |
//! | `%h%`    | hostname                                   |
//! | `%s%`    | logical source path (leading `/` stripped) |
//! | `%DDEV%` | `ddev` in DDEV mode, a sentinel otherwise  |
//!
//! Substituted values are never re-scanned for tokens.

use std::env;
use std::path::Path;

/// Long-form deployment mode token.
pub const TOKEN_DDEV: &str = "%DDEV%";

/// Project folder token.
pub const TOKEN_PROJECT_FOLDER: &str = "%p%";
/// Project parent folder token.
pub const TOKEN_PROJECT_PARENT_FOLDER: &str = "%pp%";
/// Username token.
pub const TOKEN_USERNAME: &str = "%u%";
/// Hostname token.
pub const TOKEN_HOSTNAME: &str = "%h%";
/// Source path token.
pub const TOKEN_SOURCE: &str = "%s%";
/// Template root token.
pub const TOKEN_TEMPLATE_ROOT: &str = "%t%";

/// Substitution value for `%DDEV%` outside of DDEV mode. Must never collide
/// with a real folder name.
const NOT_DDEV: &str = "not-ddev-should-not-be-used";

/// Environment snapshot plus token substitution for path patterns.
#[derive(Debug, Clone)]
pub struct PatternReplacer {
    project_root: String,
    template_root: String,
    hostname: String,
    username: String,
    is_ddev: bool,
}

impl PatternReplacer {
    /// Create a replacer with explicit environment values.
    ///
    /// Trailing slashes on `project_root` and `template_root` are stripped.
    pub fn new(
        project_root: &str,
        template_root: &str,
        hostname: &str,
        username: &str,
        is_ddev: bool,
    ) -> Self {
        Self {
            project_root: project_root.trim_end_matches('/').to_string(),
            template_root: template_root.trim_end_matches('/').to_string(),
            hostname: hostname.to_string(),
            username: username.to_string(),
            is_ddev,
        }
    }

    /// Create a replacer by snapshotting the process environment once.
    pub fn from_env(project_root: &str, template_root: &str) -> Self {
        Self::new(
            project_root,
            template_root,
            &determine_hostname(),
            &determine_username(),
            determine_is_ddev(),
        )
    }

    /// Substitute every token occurring in `pattern`.
    ///
    /// `source` has any leading `/` stripped before it is used as the `%s%`
    /// value. Tokens absent from the pattern are no-ops; the substitution is
    /// a single left-to-right pass, so values are not re-scanned.
    pub fn replace(&self, pattern: &str, source: &str) -> String {
        let map = self.map(source);
        let mut out = String::with_capacity(pattern.len());
        let mut rest = pattern;
        'scan: while let Some(ch) = rest.chars().next() {
            for (token, value) in &map {
                if let Some(tail) = rest.strip_prefix(token) {
                    out.push_str(value);
                    rest = tail;
                    continue 'scan;
                }
            }
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
        out
    }

    fn map(&self, source: &str) -> [(&'static str, String); 7] {
        let ddev = if self.is_ddev { "ddev" } else { NOT_DDEV };
        [
            // long
            (TOKEN_DDEV, ddev.to_string()),
            // short
            (TOKEN_TEMPLATE_ROOT, self.template_root.clone()),
            // %pp% before %p%: tokens are unambiguous, but keep the longer
            // spelling first anyway
            (TOKEN_PROJECT_PARENT_FOLDER, self.project_parent_folder()),
            (TOKEN_PROJECT_FOLDER, self.project_folder()),
            (TOKEN_USERNAME, self.username.clone()),
            (TOKEN_HOSTNAME, self.hostname.clone()),
            (TOKEN_SOURCE, source.trim_start_matches('/').to_string()),
        ]
    }

    /// Last segment of the project root path.
    pub fn project_folder(&self) -> String {
        basename(&self.project_root)
    }

    /// Last segment of the project root's parent.
    pub fn project_parent_folder(&self) -> String {
        Path::new(&self.project_root)
            .parent()
            .and_then(|p| p.to_str())
            .map(basename)
            .unwrap_or_default()
    }

    /// The configured template root folder.
    pub fn template_root(&self) -> &str {
        &self.template_root
    }

    /// The captured username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The captured hostname.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Whether the DDEV deployment mode signal was set.
    pub fn is_ddev(&self) -> bool {
        self.is_ddev
    }
}

fn basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string()
}

fn env_non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// `$USER`, else the basename of `$HOME`, else empty.
fn determine_username() -> String {
    if let Some(user) = env_non_empty("USER") {
        return user;
    }
    if let Some(home) = env_non_empty("HOME") {
        return basename(&home);
    }
    String::new()
}

/// `$HOSTNAME`, else the OS-reported hostname, else `localhost`.
fn determine_hostname() -> String {
    if let Some(hostname) = env_non_empty("HOSTNAME") {
        return hostname;
    }
    match gethostname::gethostname().into_string() {
        Ok(hostname) if !hostname.is_empty() => hostname,
        _ => "localhost".to_string(),
    }
}

/// `$IS_DDEV` set to a truthy value: non-empty and not `0`/`false`.
fn determine_is_ddev() -> bool {
    match env_non_empty("IS_DDEV") {
        Some(value) => value != "0" && !value.eq_ignore_ascii_case("false"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn fake_replacer(is_ddev: bool) -> PatternReplacer {
        PatternReplacer::new(
            "/fictive-path/project-parent/project-path/",
            "test-templates/",
            "fake.host.test",
            "fake-user",
            is_ddev,
        )
    }

    #[test]
    fn test_project_folder_values() {
        let replacer = fake_replacer(false);
        assert_eq!(replacer.project_folder(), "project-path");
        assert_eq!(replacer.project_parent_folder(), "project-parent");
        assert_eq!(replacer.template_root(), "test-templates");
    }

    #[test]
    fn test_username_token() {
        let replacer = fake_replacer(false);
        assert_eq!(
            replacer.replace("/some/paths/%u%/after/placeholder", "files-to-find.ext"),
            "/some/paths/fake-user/after/placeholder"
        );
    }

    #[test]
    fn test_source_token() {
        let replacer = fake_replacer(false);
        assert_eq!(
            replacer.replace("/some/paths/%s%", "files-to-find.ext"),
            "/some/paths/files-to-find.ext"
        );
    }

    #[test]
    fn test_source_leading_slash_is_stripped() {
        let replacer = fake_replacer(false);
        assert_eq!(
            replacer.replace("%t%/%s%", "/sub-path/some-file.txt"),
            "test-templates/sub-path/some-file.txt"
        );
    }

    #[test]
    fn test_project_tokens() {
        let replacer = fake_replacer(false);
        assert_eq!(
            replacer.replace("/some/paths/%p%/some-file.txt", "x"),
            "/some/paths/project-path/some-file.txt"
        );
        assert_eq!(
            replacer.replace("/some/paths/%pp%/some-file.txt", "x"),
            "/some/paths/project-parent/some-file.txt"
        );
        assert_eq!(
            replacer.replace("/some/paths/%pp%-%p%/some-file.txt", "x"),
            "/some/paths/project-parent-project-path/some-file.txt"
        );
    }

    #[test]
    fn test_hostname_and_template_tokens() {
        let replacer = fake_replacer(false);
        assert_eq!(
            replacer.replace("%t%/%h%/some-file.txt", "x"),
            "test-templates/fake.host.test/some-file.txt"
        );
    }

    #[test]
    fn test_ddev_token() {
        assert_eq!(
            fake_replacer(true).replace("%t%/%DDEV%/%s%", "f.txt"),
            "test-templates/ddev/f.txt"
        );
        assert_eq!(
            fake_replacer(false).replace("%t%/%DDEV%/%s%", "f.txt"),
            "test-templates/not-ddev-should-not-be-used/f.txt"
        );
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let replacer = fake_replacer(false);
        assert_eq!(replacer.replace("%x%/literal", "f.txt"), "%x%/literal");
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        // A token embedded in the source value must survive literally.
        let replacer = fake_replacer(false);
        assert_eq!(
            replacer.replace("%t%/%s%", "dir/%p%/file.txt"),
            "test-templates/dir/%p%/file.txt"
        );
    }

    #[test]
    #[serial]
    fn test_determine_username_prefers_user_env() {
        env::set_var("USER", "env-user");
        env::set_var("HOME", "/home/home-user");
        assert_eq!(determine_username(), "env-user");
    }

    #[test]
    #[serial]
    fn test_determine_username_falls_back_to_home() {
        env::remove_var("USER");
        env::set_var("HOME", "/home/home-user");
        assert_eq!(determine_username(), "home-user");
        env::set_var("USER", "env-user");
    }

    #[test]
    #[serial]
    fn test_determine_hostname_prefers_env() {
        env::set_var("HOSTNAME", "env.host.test");
        assert_eq!(determine_hostname(), "env.host.test");
        env::remove_var("HOSTNAME");
    }

    #[test]
    #[serial]
    fn test_determine_hostname_without_env_is_non_empty() {
        env::remove_var("HOSTNAME");
        // OS hostname or the localhost fallback, never empty
        assert!(!determine_hostname().is_empty());
    }

    #[test]
    #[serial]
    fn test_determine_is_ddev() {
        env::remove_var("IS_DDEV");
        assert!(!determine_is_ddev());
        env::set_var("IS_DDEV", "true");
        assert!(determine_is_ddev());
        env::set_var("IS_DDEV", "1");
        assert!(determine_is_ddev());
        env::set_var("IS_DDEV", "0");
        assert!(!determine_is_ddev());
        env::set_var("IS_DDEV", "false");
        assert!(!determine_is_ddev());
        env::remove_var("IS_DDEV");
    }
}
