use crate::domain::a002_product::{ProductDto, ProductId};
use crate::string_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

string_id!(
    /// Уникальный идентификатор вариации
    CatalogItemId
);

// ============================================================================
// Discount
// ============================================================================

/// Скидка вариации
///
/// На проводе: `null` либо `{"type": "FIXED" | "PERCENTAGE", "value": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Discount {
    #[default]
    None,
    /// Фиксированная сумма в рублях
    Fixed(u64),
    /// Процент от цены, не более 100
    Percentage(u64),
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
enum DiscountWire {
    Fixed(u64),
    Percentage(u64),
}

impl Serialize for Discount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match *self {
            Discount::None => None,
            Discount::Fixed(v) => Some(DiscountWire::Fixed(v)),
            Discount::Percentage(v) => Some(DiscountWire::Percentage(v)),
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Discount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<DiscountWire>::deserialize(deserializer)? {
            None => Discount::None,
            Some(DiscountWire::Fixed(v)) => Discount::Fixed(v),
            Some(DiscountWire::Percentage(v)) => Discount::Percentage(v),
        })
    }
}

impl Discount {
    pub fn is_none(&self) -> bool {
        matches!(self, Discount::None)
    }

    /// Проверка значения скидки
    pub fn validate(&self) -> Result<(), &'static str> {
        match *self {
            Discount::None => Ok(()),
            Discount::Fixed(0) | Discount::Percentage(0) => {
                Err("Скидка должна быть положительным числом")
            }
            Discount::Percentage(v) if v > 100 => Err("Процент не может превышать 100%"),
            Discount::Fixed(_) | Discount::Percentage(_) => Ok(()),
        }
    }
}

// ============================================================================
// Quantity
// ============================================================================

/// Количество товара в вариации
///
/// На проводе: число либо `null` (без ограничения).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Limited(u64),
    Unlimited,
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Quantity::Limited(n) => serializer.serialize_some(&n),
            Quantity::Unlimited => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<u64>::deserialize(deserializer)? {
            Some(n) => Quantity::Limited(n),
            None => Quantity::Unlimited,
        })
    }
}

impl Quantity {
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Quantity::Unlimited)
    }
}

// ============================================================================
// Credit
// ============================================================================

/// Один платёж графика рассрочки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditPayment {
    pub sum: u64,
    pub deadline: DateTime<Utc>,
}

/// График рассрочки вариации
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreditInfo {
    pub payments: Vec<CreditPayment>,
}

impl CreditInfo {
    /// Сумма всех платежей; `None` при переполнении
    pub fn total(&self) -> Option<u64> {
        self.payments
            .iter()
            .try_fold(0_u64, |acc, payment| acc.checked_add(payment.sum))
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Вариация в ответе API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemDto {
    pub id: CatalogItemId,
    pub product: ProductDto,
    pub rating: u32,
    pub price: u64,
    pub quantity: Quantity,
    pub discount: Discount,
    pub quantity_restriction: Option<u64>,
    pub credit_info: Option<CreditInfo>,
    pub is_active: bool,
}

impl CatalogItemDto {
    /// Цена для покупателя с учётом скидки
    pub fn price_after_discount(&self) -> Option<i64> {
        super::pricing::discounted_price(i64::try_from(self.price).ok()?, &self.discount)
    }
}

/// Новая вариация в составе создаваемой публикации или добавляемая к существующей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemPublishDto {
    pub product_id: ProductId,
    pub rating: u32,
    pub price: u64,
    pub quantity: Quantity,
    pub discount: Discount,
    pub credit_info: Option<CreditInfo>,
}

/// Изменение существующей вариации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemUpdateDto {
    pub id: CatalogItemId,
    pub rating: u32,
    pub price: u64,
    pub quantity: Quantity,
    pub discount: Discount,
    pub quantity_restriction: Option<u64>,
    pub credit_info: Option<CreditInfo>,
}

/// Максимальный рейтинг среди вариаций, подсказка при выставлении рейтинга
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxRatingDto {
    pub max_rating: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_wire_format() {
        assert_eq!(serde_json::to_string(&Discount::None).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&Discount::Percentage(15)).unwrap(),
            r#"{"type":"PERCENTAGE","value":15}"#
        );
        let fixed: Discount = serde_json::from_str(r#"{"type":"FIXED","value":300}"#).unwrap();
        assert_eq!(fixed, Discount::Fixed(300));
        assert!(serde_json::from_str::<Discount>(r#"{"type":"BONUS","value":1}"#).is_err());
    }

    #[test]
    fn test_discount_validation() {
        assert!(Discount::None.validate().is_ok());
        assert!(Discount::Fixed(500).validate().is_ok());
        assert!(Discount::Percentage(100).validate().is_ok());
        assert_eq!(
            Discount::Percentage(101).validate(),
            Err("Процент не может превышать 100%")
        );
        assert!(Discount::Fixed(0).validate().is_err());
    }

    #[test]
    fn test_quantity_null_is_unlimited() {
        let q: Quantity = serde_json::from_str("null").unwrap();
        assert!(q.is_unlimited());
        let q: Quantity = serde_json::from_str("12").unwrap();
        assert_eq!(q, Quantity::Limited(12));
        assert_eq!(serde_json::to_string(&Quantity::Unlimited).unwrap(), "null");
    }

    #[test]
    fn test_catalog_item_parses_camel_case() {
        let json = r#"{
            "id": "v1",
            "product": {"id": "p1", "title": "Кружка", "category": {"id": "c1", "title": "Посуда"}},
            "rating": 3,
            "price": 1000,
            "quantity": null,
            "discount": {"type": "PERCENTAGE", "value": 10},
            "quantityRestriction": 2,
            "creditInfo": {"payments": [
                {"sum": 400, "deadline": "2026-01-10T00:00:00Z"},
                {"sum": 600, "deadline": "2026-02-10T00:00:00Z"}
            ]},
            "isActive": true
        }"#;
        let item: CatalogItemDto = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, Quantity::Unlimited);
        assert_eq!(item.credit_info.as_ref().and_then(CreditInfo::total), Some(1000));
        assert_eq!(item.price_after_discount(), Some(900));
    }

    #[test]
    fn test_credit_total_overflow_is_none() {
        let deadline = DateTime::parse_from_rfc3339("2026-01-10T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let payment = |sum| CreditPayment { sum, deadline };
        let info = CreditInfo {
            payments: vec![payment(u64::MAX), payment(u64::MAX), payment(5)],
        };
        assert_eq!(info.total(), None);
        let info = CreditInfo {
            payments: vec![payment(400), payment(600)],
        };
        assert_eq!(info.total(), Some(1000));
    }
}
