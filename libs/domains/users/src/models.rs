use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// User domain record.
///
/// Identity is absent until the store assigns it on insert. The password is
/// an opaque attribute; it lives on the record but never on [`UserDto`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub password: String,
}

impl User {
    /// Overwrite the mutable fields from a payload, keeping identity
    pub fn apply(&mut self, payload: &UserPayload) {
        self.name = payload.name.clone();
        self.email = payload.email.clone();
        self.phone = payload.phone.clone();
        self.birth_date = payload.birth_date;
        self.password = payload.password.clone();
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.unwrap_or(0).hash(state);
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Response projection of a user; the password never appears here
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            birth_date: user.birth_date,
        }
    }
}

/// Create/update payload for users
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    #[validate(
        length(min = 3, max = 80, message = "Name must have 3 to 80 characters"),
        custom(function = not_blank)
    )]
    pub name: String,
    #[validate(email(message = "Email must be valid"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[validate(length(min = 8, message = "Password must have at least 8 characters"))]
    pub password: String,
}

impl From<&UserPayload> for User {
    fn from(payload: &UserPayload) -> Self {
        Self {
            id: None,
            name: payload.name.clone(),
            email: payload.email.clone(),
            phone: payload.phone.clone(),
            birth_date: payload.birth_date,
            password: payload.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn user(id: Option<i64>, email: &str) -> User {
        User {
            id,
            name: "Maria Brown".to_string(),
            email: email.to_string(),
            phone: Some("988888888".to_string()),
            birth_date: NaiveDate::from_ymd_opt(2001, 7, 25),
            password: "maria-secret".to_string(),
        }
    }

    fn hash_of(user: &User) -> u64 {
        let mut hasher = DefaultHasher::new();
        user.hash(&mut hasher);
        hasher.finish()
    }

    fn payload() -> UserPayload {
        UserPayload {
            name: "Alex Green".to_string(),
            email: "alex@example.com".to_string(),
            phone: None,
            birth_date: None,
            password: "alex-secret".to_string(),
        }
    }

    #[test]
    fn test_users_without_identity_are_equal() {
        let a = user(None, "a@example.com");
        let b = user(None, "b@example.com");

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_equality_follows_identity_only() {
        let a = user(Some(1), "a@example.com");
        let b = user(Some(1), "b@example.com");
        let c = user(Some(2), "a@example.com");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_dto_never_carries_the_password() {
        let dto = UserDto::from(user(Some(1), "maria@example.com"));
        let serialized = serde_json::to_string(&dto).unwrap();

        assert!(!serialized.contains("password"));
        assert!(!serialized.contains("maria-secret"));
    }

    #[test]
    fn test_valid_payload_passes_validation() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_fails_validation() {
        let mut p = payload();
        p.email = "not-an-email".to_string();

        let errors = p.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_short_password_fails_validation() {
        let mut p = payload();
        p.password = "short".to_string();

        let errors = p.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_record_from_payload_has_no_identity() {
        let record = User::from(&payload());
        assert_eq!(record.id, None);
        assert_eq!(record.email, "alex@example.com");
    }

    #[test]
    fn test_apply_overwrites_fields_keeps_identity() {
        let mut record = user(Some(9), "old@example.com");
        record.apply(&payload());

        assert_eq!(record.id, Some(9));
        assert_eq!(record.email, "alex@example.com");
        assert_eq!(record.name, "Alex Green");
    }
}
