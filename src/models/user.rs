use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::password;

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Profile fields safe to hand back to clients.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

/// A user about to be stored. The password is hashed on construction, so
/// repositories never receive plaintext.
#[derive(Debug, Clone)]
pub struct NewUser {
    name: String,
    email: String,
    password_hash: String,
    role: String,
}

impl NewUser {
    pub fn with_password(name: &str, email: &str, plaintext: &str, role: &str) -> Result<Self, String> {
        Ok(Self {
            name: name.trim().to_string(),
            email: normalize_email(email),
            password_hash: password::hash(plaintext)?,
            role: role.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn into_user(self) -> User {
        User {
            id: Uuid::now_v7(),
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role,
            created_at: Utc::now(),
        }
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_never_keeps_plaintext() {
        let user = NewUser::with_password("Asha", " Asha@Example.com ", "s3cret-pass", ROLE_USER)
            .unwrap();
        assert_eq!(user.email(), "asha@example.com");
        assert_ne!(user.password_hash(), "s3cret-pass");
        assert!(password::verify("s3cret-pass", user.password_hash()).unwrap());
    }

    #[test]
    fn serialized_user_omits_hash() {
        let user = NewUser::with_password("Asha", "asha@example.com", "pw", ROLE_ADMIN)
            .unwrap()
            .into_user();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["role"], "admin");
    }
}
