use serde::{Deserialize, Serialize};

/// Identifier of an authenticated caller (the identity provider's subject).
/// Products are owned by the seller that created them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_subject_verbatim() {
        let user_id = UserId::new("seller-uid-42");
        assert_eq!(user_id.as_str(), "seller-uid-42");
        assert_eq!(user_id.to_string(), "seller-uid-42");
    }

    #[test]
    fn should_treat_same_subject_as_same_seller() {
        let from_string: UserId = "seller-a".to_string().into();
        let from_str: UserId = "seller-a".into();

        assert_eq!(from_string, from_str);
        assert_ne!(from_str, UserId::new("seller-b"));
    }
}
