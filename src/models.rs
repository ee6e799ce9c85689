//! Directory records
//!
//! Users and the groups they belong to. Records are plain values; nothing
//! checks that a user's group actually exists.

use serde::{Deserialize, Serialize};

/// A member of one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name
    pub name: String,
    /// Id of the [`Group`] the user belongs to
    pub group: u32,
}

/// A named group of users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: u32,
    #[serde(rename = "groupName")]
    pub group_name: String,
}

impl User {
    pub fn new(name: impl Into<String>, group: u32) -> Self {
        User {
            name: name.into(),
            group,
        }
    }
}

impl Group {
    pub fn new(id: u32, group_name: impl Into<String>) -> Self {
        Group {
            id,
            group_name: group_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_serializes_with_group_name_field() {
        let json = serde_json::to_value(Group::new(1, "Hajarna")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "groupName": "Hajarna" }));
    }

    #[test]
    fn test_user_deserializes_from_record_shape() {
        let user: User = serde_json::from_str(r#"{"name":"Erik","group":1}"#).unwrap();
        assert_eq!(user, User::new("Erik", 1));
    }
}
