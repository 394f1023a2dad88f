use super::codec::FilterPredicate;

/// Операторы фильтра таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Contains,
    DoesNotContain,
    Equals,
    DoesNotEqual,
    StartsWith,
    EndsWith,
    IsEmpty,
    IsNotEmpty,
    NumEq,
    NumNe,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl FilterOperator {
    pub fn code(&self) -> &'static str {
        match self {
            FilterOperator::Contains => "contains",
            FilterOperator::DoesNotContain => "doesNotContain",
            FilterOperator::Equals => "equals",
            FilterOperator::DoesNotEqual => "doesNotEqual",
            FilterOperator::StartsWith => "startsWith",
            FilterOperator::EndsWith => "endsWith",
            FilterOperator::IsEmpty => "isEmpty",
            FilterOperator::IsNotEmpty => "isNotEmpty",
            FilterOperator::NumEq => "=",
            FilterOperator::NumNe => "!=",
            FilterOperator::Gt => ">",
            FilterOperator::Gte => ">=",
            FilterOperator::Lt => "<",
            FilterOperator::Lte => "<=",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FilterOperator::Contains => "Содержит",
            FilterOperator::DoesNotContain => "Не содержит",
            FilterOperator::Equals => "Равно",
            FilterOperator::DoesNotEqual => "Не равно",
            FilterOperator::StartsWith => "Начинается с",
            FilterOperator::EndsWith => "Оканчивается на",
            FilterOperator::IsEmpty => "Пусто",
            FilterOperator::IsNotEmpty => "Не пусто",
            FilterOperator::NumEq => "=",
            FilterOperator::NumNe => "!=",
            FilterOperator::Gt => ">",
            FilterOperator::Gte => ">=",
            FilterOperator::Lt => "<",
            FilterOperator::Lte => "<=",
        }
    }

    pub fn all() -> Vec<FilterOperator> {
        vec![
            FilterOperator::Contains,
            FilterOperator::DoesNotContain,
            FilterOperator::Equals,
            FilterOperator::DoesNotEqual,
            FilterOperator::StartsWith,
            FilterOperator::EndsWith,
            FilterOperator::IsEmpty,
            FilterOperator::IsNotEmpty,
            FilterOperator::NumEq,
            FilterOperator::NumNe,
            FilterOperator::Gt,
            FilterOperator::Gte,
            FilterOperator::Lt,
            FilterOperator::Lte,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|op| op.code() == code)
    }

    /// Оператор не использует значение
    pub fn is_unary(&self) -> bool {
        matches!(self, FilterOperator::IsEmpty | FilterOperator::IsNotEmpty)
    }

    /// Проверить значение ячейки
    ///
    /// Текстовые операторы сравнивают без учёта регистра; числовые
    /// требуют, чтобы обе стороны были числами.
    pub fn matches(&self, cell: &str, value: &str) -> bool {
        let cell_lc = cell.to_lowercase();
        let value_lc = value.to_lowercase();
        let numbers = || Some((cell.trim().parse::<f64>().ok()?, value.trim().parse::<f64>().ok()?));
        match self {
            FilterOperator::Contains => cell_lc.contains(&value_lc),
            FilterOperator::DoesNotContain => !cell_lc.contains(&value_lc),
            FilterOperator::Equals => cell_lc == value_lc,
            FilterOperator::DoesNotEqual => cell_lc != value_lc,
            FilterOperator::StartsWith => cell_lc.starts_with(&value_lc),
            FilterOperator::EndsWith => cell_lc.ends_with(&value_lc),
            FilterOperator::IsEmpty => cell.trim().is_empty(),
            FilterOperator::IsNotEmpty => !cell.trim().is_empty(),
            FilterOperator::NumEq => numbers().is_some_and(|(a, b)| a == b),
            FilterOperator::NumNe => numbers().is_some_and(|(a, b)| a != b),
            FilterOperator::Gt => numbers().is_some_and(|(a, b)| a > b),
            FilterOperator::Gte => numbers().is_some_and(|(a, b)| a >= b),
            FilterOperator::Lt => numbers().is_some_and(|(a, b)| a < b),
            FilterOperator::Lte => numbers().is_some_and(|(a, b)| a <= b),
        }
    }
}

/// Строка таблицы, к которой можно применить фильтр
pub trait FilterableRow {
    /// Текстовое значение колонки, `None` если колонки нет
    fn field_value(&self, field: &str) -> Option<String>;

    /// Проверить одно условие
    ///
    /// Неизвестный оператор, неизвестная колонка и пустое значение у
    /// бинарного оператора не отсекают строку.
    fn matches(&self, predicate: &FilterPredicate) -> bool {
        let Some(operator) = FilterOperator::from_code(&predicate.operator) else {
            return true;
        };
        if !operator.is_unary() && predicate.value.is_empty() {
            return true;
        }
        match self.field_value(&predicate.field) {
            Some(cell) => operator.matches(&cell, &predicate.value),
            None => true,
        }
    }
}

/// Оставить строки, удовлетворяющие всем условиям
pub fn apply_filters<'a, T: FilterableRow>(
    rows: &'a [T],
    predicates: &[FilterPredicate],
) -> Vec<&'a T> {
    rows.iter()
        .filter(|row| predicates.iter().all(|p| row.matches(p)))
        .collect()
}
