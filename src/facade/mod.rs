//! # Facade
//!
//! [`UserRepository`] gives callers two verbs, `save` and `find_first`, and hides the
//! key naming, caching and commit protocol of [`ComplexSystemStore`] behind them.
//!
//! ```rust
//! use patterns_recipe::facade::{User, UserRepository};
//!
//! let mut repository = UserRepository::new();
//! repository.save(&User::new("dbacinski")).unwrap();
//! assert_eq!(repository.find_first(), User::new("dbacinski"));
//! ```

pub mod error;
pub mod store;

pub use error::*;
pub use store::*;

use std::fmt;
use tracing::info;

/// Where preferences "live" unless told otherwise.
pub const DEFAULT_PREFS_PATH: &str = "/data/default.prefs";

/// Store key holding the saved user's login.
pub const USER_KEY: &str = "USER_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct User {
    pub login: String,
}

impl User {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User(login={})", self.login)
    }
}

/// Facade over the preferences store.
#[derive(Debug, Clone)]
pub struct UserRepository {
    system_preferences: ComplexSystemStore,
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository {
    pub fn new() -> Self {
        Self::with_path(DEFAULT_PREFS_PATH)
    }

    pub fn with_path(file_path: impl Into<String>) -> Self {
        Self {
            system_preferences: ComplexSystemStore::new(file_path),
        }
    }

    /// The store behind the facade.
    pub fn system_preferences(&self) -> &ComplexSystemStore {
        &self.system_preferences
    }

    /// Store the user's login and commit it, returning the commit line.
    pub fn save(&mut self, user: &User) -> Result<String, StoreError> {
        self.system_preferences.store(USER_KEY, user.login.as_str());
        let snapshot = self.system_preferences.commit()?;
        Ok(format!(
            "Storing cached data: {snapshot} to file: {}",
            self.system_preferences.file_path()
        ))
    }

    /// The saved user. The login is empty when nothing has been saved yet.
    pub fn find_first(&self) -> User {
        let user = User::new(self.system_preferences.read(USER_KEY));
        info!(login = %user.login, "Found stored user");
        user
    }
}
