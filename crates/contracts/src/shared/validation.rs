//! Правила валидации полей форм

/// Ошибки формы, привязанные к путям полей (`link`, `items.0.price`, ...)
///
/// Для каждого пути хранится только первое сообщение.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить ошибку, если для пути её ещё нет
    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        let path = path.into();
        if self.get(&path).is_none() {
            self.entries.push((path, message.into()));
        }
    }

    /// Перенести ошибки вложенной формы с префиксом пути
    pub fn extend_prefixed(&mut self, prefix: &str, nested: FieldErrors) {
        for (path, message) in nested.entries {
            self.push(format!("{}.{}", prefix, path), message);
        }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, m)| (p.as_str(), m.as_str()))
    }

    /// `Ok(value)` если ошибок нет
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Символ допустим в ссылке публикации: латиница, кириллица, цифры, `-` и `_`
fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c == '-'
        || c == '_'
        || ('а'..='я').contains(&c)
        || ('А'..='Я').contains(&c)
        || c == 'ё'
        || c == 'Ё'
}

/// Проверка ссылки (slug) публикации
pub fn validate_slug(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Укажите ссылку");
    }
    if !value.chars().all(is_slug_char) {
        return Err(
            "Ссылка может включать только латинские или русские буквы, цифры, дефис и нижнее подчеркивание",
        );
    }
    Ok(())
}

/// Разбор целого числа из текстового поля
///
/// Пустая строка и любые нецифровые символы дают `None`.
pub fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<i64>().ok()
}

/// Положительное целое из текстового поля, иначе одно из двух сообщений
pub fn require_positive(
    text: &str,
    missing: &'static str,
    not_positive: &'static str,
) -> Result<u64, &'static str> {
    match parse_int(text) {
        None => Err(missing),
        Some(v) if v <= 0 => Err(not_positive),
        Some(v) => Ok(v as u64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_accepts_latin_cyrillic_digits() {
        assert!(validate_slug("iphone-15_pro").is_ok());
        assert!(validate_slug("Ёлка-новогодняя_2").is_ok());
        assert!(validate_slug("ёжик").is_ok());
    }

    #[test]
    fn test_slug_rejects_other_chars() {
        assert_eq!(validate_slug(""), Err("Укажите ссылку"));
        assert!(validate_slug("with space").is_err());
        assert!(validate_slug("slash/inside").is_err());
        assert!(validate_slug("naïve").is_err());
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int(" 7 "), Some(7));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("4a"), None);
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("5", "missing", "neg"), Ok(5));
        assert_eq!(require_positive("", "missing", "neg"), Err("missing"));
        assert_eq!(require_positive("0", "missing", "neg"), Err("neg"));
    }

    #[test]
    fn test_field_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors.push("price", "first");
        errors.push("price", "second");
        let mut nested = FieldErrors::new();
        nested.push("sum", "bad");
        errors.extend_prefixed("items.0", nested);

        assert_eq!(errors.get("price"), Some("first"));
        assert_eq!(errors.get("items.0.sum"), Some("bad"));
        assert_eq!(errors.len(), 2);
        assert!(errors.into_result(()).is_err());
    }
}
