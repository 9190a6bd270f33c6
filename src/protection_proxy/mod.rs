//! # Protection Proxy
//!
//! [`SecuredFile`] has the same interface as the [`File`] it wraps, but only forwards
//! reads once the right password is set. Without it the wrapped file is never touched.
//!
//! ```rust
//! use patterns_recipe::protection_proxy::{File, FileError, NormalFile, SecuredFile};
//!
//! let mut secured = SecuredFile::new(NormalFile);
//! assert_eq!(secured.read("readme.md"), Err(FileError::AccessDenied));
//!
//! secured.set_password("secret");
//! assert_eq!(secured.read("readme.md").unwrap(), "Reading file: readme.md");
//! ```

pub mod error;

pub use error::*;

use tracing::{info, warn};

/// Password a [`SecuredFile`] accepts unless built with [`SecuredFile::with_secret`].
pub const DEFAULT_SECRET: &str = "secret";

/// Line announced when the password check passes, just before the read is forwarded.
pub const PASSWORD_ACCEPTED: &str = "Password is correct";

pub trait File {
    /// Read `name`, returning what was reported.
    fn read(&self, name: &str) -> Result<String, FileError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalFile;

impl File for NormalFile {
    fn read(&self, name: &str) -> Result<String, FileError> {
        let line = format!("Reading file: {name}");
        info!(file = name, "Reading file");
        Ok(line)
    }
}

/// Password-gated proxy over another [`File`].
#[derive(Debug, Clone)]
pub struct SecuredFile<F: File> {
    normal_file: F,
    secret: String,
    password: String,
}

impl<F: File> SecuredFile<F> {
    pub fn new(normal_file: F) -> Self {
        Self::with_secret(normal_file, DEFAULT_SECRET)
    }

    pub fn with_secret(normal_file: F, secret: impl Into<String>) -> Self {
        Self {
            normal_file,
            secret: secret.into(),
            password: String::new(),
        }
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn inner(&self) -> &F {
        &self.normal_file
    }

    fn is_unlocked(&self) -> bool {
        self.password == self.secret
    }
}

impl<F: File> File for SecuredFile<F> {
    fn read(&self, name: &str) -> Result<String, FileError> {
        if !self.is_unlocked() {
            warn!(file = name, "Incorrect password. Access denied!");
            return Err(FileError::AccessDenied);
        }
        info!(file = name, "{PASSWORD_ACCEPTED}");
        self.normal_file.read(name)
    }
}

impl<F: File> SecuredFile<F> {
    /// Read `name` and return every line announced on the way: the password check,
    /// then whatever the wrapped file reported.
    ///
    /// # Errors
    /// [`FileError::AccessDenied`] on a wrong password, or the wrapped file's error.
    pub fn read_reported(&self, name: &str) -> Result<Vec<String>, FileError> {
        let line = self.read(name)?;
        Ok(vec![PASSWORD_ACCEPTED.to_string(), line])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_must_match_exactly() {
        let mut secured = SecuredFile::new(NormalFile);
        for attempt in ["", "Secret", "secret ", "secre"] {
            secured.set_password(attempt);
            assert_eq!(secured.read("a.txt"), Err(FileError::AccessDenied));
        }
    }

    #[test]
    fn test_custom_secret() {
        let mut secured = SecuredFile::with_secret(NormalFile, "hunter2");
        secured.set_password(DEFAULT_SECRET);
        assert!(secured.read("a.txt").is_err());

        secured.set_password("hunter2");
        assert_eq!(secured.read("a.txt").unwrap(), "Reading file: a.txt");
    }

    #[test]
    fn test_clearing_password_locks_again() {
        let mut secured = SecuredFile::new(NormalFile);
        secured.set_password("secret");
        assert!(secured.read("a.txt").is_ok());

        secured.set_password("");
        assert_eq!(secured.read("a.txt"), Err(FileError::AccessDenied));
    }

    #[test]
    fn test_read_reported_includes_password_check() {
        let mut secured = SecuredFile::new(NormalFile);
        assert_eq!(secured.read_reported("a.txt"), Err(FileError::AccessDenied));

        secured.set_password("secret");
        assert_eq!(
            secured.read_reported("a.txt").unwrap(),
            vec!["Password is correct", "Reading file: a.txt"]
        );
    }
}
