//! Denylist management module
//!
//! Holds the built-in common-password list and pattern set, and loads
//! operator-supplied extensions from a file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::RegexSet;
use thiserror::Error;

/// Environment variable naming an extra denylist file.
pub const DENYLIST_PATH_ENV: &str = "PWD_DENYLIST_PATH";

/// Exact matches, compared against the lower-cased password.
const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "123456789",
    "12345678",
    "1234567890",
    "qwerty",
    "qwerty123",
    "abc123",
    "password123",
    "password1",
    "admin",
    "letmein",
    "welcome",
    "monkey",
    "dragon",
    "iloveyou",
    "sunshine",
    "princess",
    "football",
    "baseball",
    "master",
    "login",
    "111111",
    "000000",
    "trustno1",
];

/// Substring patterns, matched case-sensitively against the original password.
/// Every pattern contains at least one glyph the generator alphabets omit.
const COMMON_PATTERNS: &[&str] = &[
    r"123",
    r"321",
    r"0{3,}",
    r"1{3,}",
    r"password",
    r"Password",
    r"admin",
    r"letmein",
    r"welcome",
    r"login",
];

static BUILTIN: LazyLock<Denylist> = LazyLock::new(Denylist::compile_builtin);

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Returns the extra denylist file path from `PWD_DENYLIST_PATH`, if set.
pub fn denylist_path() -> Option<PathBuf> {
    std::env::var_os(DENYLIST_PATH_ENV).map(PathBuf::from)
}

/// Common passwords plus common substring patterns.
#[derive(Debug, Clone)]
pub struct Denylist {
    passwords: HashSet<String>,
    patterns: RegexSet,
}

impl Denylist {
    /// The process-wide built-in denylist.
    pub fn builtin() -> &'static Denylist {
        &BUILTIN
    }

    fn compile_builtin() -> Self {
        Self {
            passwords: COMMON_PASSWORDS.iter().map(|p| p.to_string()).collect(),
            patterns: RegexSet::new(COMMON_PATTERNS).expect("built-in denylist patterns compile"),
        }
    }

    /// Builds a denylist from the built-in entries plus every non-empty line
    /// of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let denylist = pwd_kit::Denylist::from_path("/etc/myapp/denylist.txt")?;
    /// let result = pwd_kit::evaluate_with("hunter2", &denylist);
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: file not found {:?}", path);
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: empty file {:?}", path);
            return Err(DenylistError::EmptyFile);
        }

        let mut denylist = Self::builtin().clone();
        denylist.passwords.extend(
            content
                .lines()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty()),
        );

        #[cfg(feature = "tracing")]
        tracing::info!("Denylist loaded: {} passwords from {:?}", denylist.len(), path);

        Ok(denylist)
    }

    /// Loads the file named by `PWD_DENYLIST_PATH` on top of the built-in
    /// list, or returns a copy of the built-in list when the variable is unset.
    pub fn from_env() -> Result<Self, DenylistError> {
        match denylist_path() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin().clone()),
        }
    }

    /// Number of exact-match entries.
    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }

    /// Case-insensitive exact match against the common-password set.
    pub fn is_common(&self, password: &str) -> bool {
        self.passwords.contains(&password.to_lowercase())
    }

    /// Case-sensitive substring match against the pattern set.
    pub fn matches_pattern(&self, password: &str) -> bool {
        self.patterns.is_match(password)
    }

    pub fn is_denied(&self, password: &str) -> bool {
        self.is_common(password) || self.matches_pattern(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::SIMILAR_GLYPHS;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::remove_var(key); }
    }

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_denylist_path_unset() {
        remove_env(DENYLIST_PATH_ENV);

        assert_eq!(denylist_path(), None);
    }

    #[test]
    #[serial]
    fn test_denylist_path_from_env() {
        let custom_path = "/custom/path/denylist.txt";
        set_env(DENYLIST_PATH_ENV, custom_path);

        let path = denylist_path();
        assert_eq!(path, Some(PathBuf::from(custom_path)));

        remove_env(DENYLIST_PATH_ENV);
    }

    #[test]
    fn test_builtin_exact_match_is_case_insensitive() {
        let denylist = Denylist::builtin();
        assert!(denylist.is_common("password"));
        assert!(denylist.is_common("PassWord"));
        assert!(denylist.is_common("QWERTY"));
        assert!(!denylist.is_common("password!"));
    }

    #[test]
    fn test_builtin_patterns_are_case_sensitive_substrings() {
        let denylist = Denylist::builtin();
        assert!(denylist.matches_pattern("xx123yy"));
        assert!(denylist.matches_pattern("myPassword!"));
        assert!(denylist.matches_pattern("a0000b"));
        assert!(!denylist.matches_pattern("PASSWORD"));
        assert!(!denylist.matches_pattern("Tr0ub4dor&3"));
    }

    #[test]
    fn test_is_denied_combines_both_checks() {
        let denylist = Denylist::builtin();
        assert!(denylist.is_denied("MONKEY"));
        assert!(denylist.is_denied("zz123zz"));
        assert!(!denylist.is_denied("CorrectHorseBatteryStaple!"));
    }

    #[test]
    fn test_builtin_patterns_contain_a_similar_glyph() {
        for pattern in COMMON_PATTERNS {
            assert!(
                pattern.chars().any(|c| SIMILAR_GLYPHS.contains(c)),
                "pattern {} could appear in generated passwords",
                pattern
            );
        }
    }

    #[test]
    fn test_from_path_file_not_found() {
        let result = Denylist::from_path("/nonexistent/path/denylist.txt");
        assert!(matches!(result, Err(DenylistError::FileNotFound(_))));
    }

    #[test]
    fn test_from_path_empty_file() {
        let temp_file = setup_with_tempfile(&["", "   "]);

        let result = Denylist::from_path(temp_file.path());
        assert!(matches!(result, Err(DenylistError::EmptyFile)));
    }

    #[test]
    fn test_from_path_read_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = Denylist::from_path(dir.path());
        assert!(matches!(result, Err(DenylistError::ReadError(_))));

        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file.write_all(&[0xff, 0xfe]).expect("Failed to write");
        let result = Denylist::from_path(temp_file.path());
        assert!(matches!(result, Err(DenylistError::ReadError(_))));
    }

    #[test]
    fn test_from_path_extends_builtin() {
        let temp_file = setup_with_tempfile(&["  Hunter2 ", "", "correcthorse"]);

        let denylist = Denylist::from_path(temp_file.path()).expect("Failed to load denylist");
        assert_eq!(denylist.len(), Denylist::builtin().len() + 2);
        assert!(denylist.is_common("hunter2"));
        assert!(denylist.is_common("CorrectHorse"));
        assert!(denylist.is_common("password"));
        assert!(!Denylist::builtin().is_common("hunter2"));
    }

    #[test]
    #[serial]
    fn test_from_env_unset_returns_builtin() {
        remove_env(DENYLIST_PATH_ENV);

        let denylist = Denylist::from_env().expect("Failed to load denylist");
        assert_eq!(denylist.len(), Denylist::builtin().len());
    }

    #[test]
    #[serial]
    fn test_from_env_loads_file() {
        let temp_file = setup_with_tempfile(&["testpassword"]);
        let path = temp_file.path().to_str().unwrap();
        set_env(DENYLIST_PATH_ENV, path);

        let denylist = Denylist::from_env().expect("Failed to load denylist");
        assert!(denylist.is_common("TESTPASSWORD"));

        remove_env(DENYLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_missing_file() {
        set_env(DENYLIST_PATH_ENV, "/nonexistent/path/denylist.txt");

        let result = Denylist::from_env();
        assert!(matches!(result, Err(DenylistError::FileNotFound(_))));

        remove_env(DENYLIST_PATH_ENV);
    }
}
