use crate::domain::common::AdminMeta;
use crate::string_id;
use serde::{Deserialize, Serialize};

string_id!(
    /// Уникальный идентификатор пользователя
    UserId
);

/// Пользователь магазина
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: UserId,
    #[serde(flatten)]
    pub meta: AdminMeta,
    pub email: String,
    pub verified: bool,
    pub vk_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_missing_field_is_schema_error() {
        let json = r#"{
            "id": "u1",
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-01T00:00:00Z",
            "verified": true,
            "vkId": null
        }"#;
        assert!(serde_json::from_str::<UserDto>(json).is_err());
    }
}
