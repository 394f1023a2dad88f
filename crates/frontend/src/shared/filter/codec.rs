use std::borrow::Cow;

use thiserror::Error;

/// Имя повторяющегося параметра с фильтрами
pub const FILTER_PARAM: &str = "filter[]";

const SEPARATOR: char = ':';

/// Условие фильтра таблицы: `field:operator:value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPredicate {
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl FilterPredicate {
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    fn to_param(&self) -> String {
        format!("{}:{}:{}", self.field, self.operator, self.value)
    }

    /// Разбор значения параметра; всё, что не из трёх сегментов, отбрасывается
    fn from_param(raw: &str) -> Option<Self> {
        let parts: Vec<&str> = raw.split(SEPARATOR).collect();
        match parts.as_slice() {
            [field, operator, value] => Some(Self::new(*field, *operator, *value)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterCodecError {
    #[error("Фильтр по полю '{field}' содержит ':' в {segment}")]
    ReservedSeparator { field: String, segment: &'static str },
}

fn check(predicate: &FilterPredicate) -> Result<(), FilterCodecError> {
    let segments = [
        ("field", &predicate.field),
        ("operator", &predicate.operator),
        ("value", &predicate.value),
    ];
    for (segment, text) in segments {
        if text.contains(SEPARATOR) {
            return Err(FilterCodecError::ReservedSeparator {
                field: predicate.field.clone(),
                segment,
            });
        }
    }
    Ok(())
}

/// Параметры строки запроса в исходном порядке
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(Cow::Borrowed(s)) => s.to_string(),
        Ok(Cow::Owned(s)) => s,
        Err(_) => spaced,
    }
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Разбор `?a=1&b=2` (ведущий `?` необязателен)
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| match part.split_once('=') {
                Some((key, value)) => (decode_component(key), decode_component(value)),
                None => (decode_component(part), String::new()),
            })
            .collect();
        Self { pairs }
    }

    /// Строка запроса без ведущего `?`
    pub fn render(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Слить условия в группу `filter[]`
///
/// Условия объединяются с уже записанными по имени поля: последнее
/// побеждает, порядок первого появления сохраняется. Остальные параметры
/// не трогаются. При ошибке `params` остаются без изменений.
pub fn encode(
    params: &mut QueryParams,
    predicates: &[FilterPredicate],
) -> Result<(), FilterCodecError> {
    for predicate in predicates {
        check(predicate)?;
    }

    let mut merged: Vec<FilterPredicate> = Vec::new();
    for predicate in decode(params).into_iter().chain(predicates.iter().cloned()) {
        match merged.iter_mut().find(|p| p.field == predicate.field) {
            Some(existing) => *existing = predicate,
            None => merged.push(predicate),
        }
    }

    params.delete(FILTER_PARAM);
    for predicate in &merged {
        params.append(FILTER_PARAM, predicate.to_param());
    }
    Ok(())
}

/// Прочитать условия из параметров
pub fn decode(params: &QueryParams) -> Vec<FilterPredicate> {
    params
        .get_all(FILTER_PARAM)
        .into_iter()
        .filter_map(|raw| {
            let parsed = FilterPredicate::from_param(raw);
            if parsed.is_none() {
                log::debug!("dropping malformed filter entry '{}'", raw);
            }
            parsed
        })
        .collect()
}
