//! User account payloads and credentials.

use serde::Serialize;

/// User id that is never created by the suite.
pub const UNKNOWN_USER_ID: u64 = 1222;

/// A password any sane account policy should refuse.
pub const WEAK_PASSWORD: &str = "password";

/// Password that does not belong to the seed user.
pub const WRONG_PASSWORD: &str = "not-the-password-0";

/// A user account.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub user_status: i32,
}

impl User {
    /// The account driven through the user lifecycle.
    pub fn seed() -> Self {
        Self {
            id: 561,
            username: "rostestuser".to_string(),
            first_name: "testuserfirstname".to_string(),
            last_name: "testuserlastname".to_string(),
            email: "testuser123@gmail.com".to_string(),
            password: "test345167".to_string(),
            phone: "12121212".to_string(),
            user_status: 1,
        }
    }

    /// The seed account with updated contact details.
    pub fn seed_updated() -> Self {
        Self {
            email: "testuserupdated123@gmail.com".to_string(),
            phone: "12121256".to_string(),
            ..Self::seed()
        }
    }

    /// Credentials for logging in as this user.
    pub fn credentials(&self) -> UserCredentials {
        UserCredentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("phone", &self.phone)
            .field("user_status", &self.user_status)
            .finish()
    }
}

/// Username and password passed to `GET /user/login`.
#[derive(Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
