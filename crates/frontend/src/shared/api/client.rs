use gloo_net::http::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use super::endpoint::{Endpoint, HttpMethod};
use super::error::ApiError;
use crate::shared::api_utils::api_url;

fn to_gloo_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Выполнить запрос и вернуть тело успешного ответа как текст
pub async fn execute(endpoint: &Endpoint) -> Result<String, ApiError> {
    let url = api_url(&endpoint.path_and_query());
    log::debug!("{} {} ({})", endpoint.method.as_str(), url, endpoint.name);

    let builder = RequestBuilder::new(&url)
        .method(to_gloo_method(endpoint.method))
        .header("Accept", "application/json");

    let request = match &endpoint.body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        log::warn!("{} failed with status {}", endpoint.name, status);
        return Err(ApiError::Status { status, body: text });
    }

    Ok(text)
}

/// Выполнить запрос и провалидировать ответ по типу `T`
pub async fn fetch_json<T: DeserializeOwned>(endpoint: &Endpoint) -> Result<T, ApiError> {
    let text = execute(endpoint).await?;
    decode_response(endpoint.name, &text)
}

/// Проверка ответа по схеме: либо полный `T`, либо ошибка
pub fn decode_response<T: DeserializeOwned>(name: &str, text: &str) -> Result<T, ApiError> {
    serde_json::from_str::<T>(text).map_err(|e| {
        log::warn!("{}: response failed schema validation: {}", name, e);
        ApiError::Schema(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::api::CreateResponse;

    #[test]
    fn test_decode_valid_response() {
        let parsed: CreateResponse = decode_response("createPublication", r#"{"id":"42"}"#).unwrap();
        assert_eq!(parsed.id, "42");
    }

    #[test]
    fn test_schema_mismatch_is_error() {
        let result: Result<CreateResponse, _> = decode_response("createPublication", r#"{"id":42}"#);
        assert!(matches!(result, Err(ApiError::Schema(_))));

        let result: Result<CreateResponse, _> = decode_response("createPublication", "");
        assert!(matches!(result, Err(ApiError::Schema(_))));
    }
}
