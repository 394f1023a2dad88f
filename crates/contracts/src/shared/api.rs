//! Общие формы ответов админского API

use serde::{Deserialize, Deserializer, Serialize};

/// Ответ списочных эндпоинтов: `{ "items": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// Ответ на создание записи
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResponse {
    pub id: String,
}

/// Десериализация массива, который по контракту не может быть пустым
pub fn deserialize_non_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Vec::<T>::deserialize(deserializer)?;
    if items.is_empty() {
        return Err(serde::de::Error::custom("expected a non-empty array"));
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_requires_items() {
        let parsed: Result<ListResponse<CreateResponse>, _> = serde_json::from_str("{}");
        assert!(parsed.is_err());

        let parsed: ListResponse<CreateResponse> =
            serde_json::from_str(r#"{"items":[{"id":"1"}]}"#).unwrap();
        assert_eq!(parsed.items.len(), 1);
    }
}
