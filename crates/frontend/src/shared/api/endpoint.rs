use serde::Serialize;

use super::error::ApiError;

/// HTTP-метод эндпоинта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Параметры вида `?id=...`
#[derive(Debug, Clone, Serialize)]
pub struct IdParams<'a> {
    pub id: &'a str,
}

/// Описание одного запроса к API
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    /// Имя операции, например `getPublication`
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    /// Строка параметров без `?`, уже закодированная
    pub query: String,
    pub body: Option<serde_json::Value>,
}

impl Endpoint {
    pub fn new(name: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self {
            name,
            method,
            path,
            query: String::new(),
            body: None,
        }
    }

    pub fn get(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Get, path)
    }

    /// Параметры запроса из сериализуемой структуры
    pub fn with_params<P: Serialize>(mut self, params: &P) -> Result<Self, ApiError> {
        self.query = serde_qs::to_string(params).map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(self)
    }

    /// JSON-тело запроса
    pub fn with_body<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Request(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Путь вместе со строкой параметров
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.to_string()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }

    /// Ключ кэша: операция + параметры
    pub fn cache_key(&self) -> String {
        format!("{}:{}", self.name, self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct AddVariationParams<'a> {
        publication_id: &'a str,
        is_active: bool,
    }

    #[test]
    fn test_params_and_cache_key() {
        let endpoint = Endpoint::get("getPublication", "/admin/publication")
            .with_params(&IdParams { id: "pub-1" })
            .unwrap();
        assert_eq!(endpoint.path_and_query(), "/admin/publication?id=pub-1");
        assert_eq!(endpoint.cache_key(), "getPublication:id=pub-1");
    }

    #[test]
    fn test_camel_case_params() {
        let endpoint = Endpoint::new("addVariation", HttpMethod::Post, "/admin/catalog-item")
            .with_params(&AddVariationParams {
                publication_id: "p1",
                is_active: true,
            })
            .unwrap();
        assert_eq!(endpoint.query, "publicationId=p1&isActive=true");
        assert_eq!(endpoint.method.as_str(), "POST");
    }

    #[test]
    fn test_without_params() {
        let endpoint = Endpoint::get("getUserList", "/admin/user-list");
        assert_eq!(endpoint.path_and_query(), "/admin/user-list");
        assert_eq!(endpoint.cache_key(), "getUserList:");
    }
}
