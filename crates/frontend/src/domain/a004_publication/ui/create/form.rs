//! Состояние формы создания публикации и правила его проверки
//!
//! Поля хранятся текстом, как их видит пользователь; типизированный
//! `PublicationCreateDto` получается только после успешной валидации.

use chrono::{DateTime, Utc};
use contracts::domain::a001_category::CategoryId;
use contracts::domain::a002_product::{ProductDto, ProductId};
use contracts::domain::a003_preorder::PreorderId;
use contracts::domain::a004_publication::{PublicationCreateDto, PublicationKind};
use contracts::domain::a005_catalog_item::pricing::discounted_price;
use contracts::domain::a005_catalog_item::{
    CatalogItemPublishDto, CreditInfo, CreditPayment, Discount, Quantity,
};
use contracts::enums::ShippingCostIncluded;
use contracts::shared::validation::{parse_int, require_positive, validate_slug, FieldErrors};
use uuid::Uuid;

use super::variation_list::{default_selection, VariationList};

// ============================================================================
// Поля вариации
// ============================================================================

/// Поле количества с флажком «Количество не ограничено»
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantityInput {
    pub text: String,
    pub unlimited: bool,
}

impl QuantityInput {
    /// Переключение флажка всегда очищает введённое число
    pub fn set_unlimited(&mut self, unlimited: bool) {
        self.unlimited = unlimited;
        self.text.clear();
    }
}

/// Поле скидки: выключено, рубли или проценты
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DiscountInput {
    #[default]
    None,
    Fixed(String),
    Percentage(String),
}

impl DiscountInput {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, DiscountInput::None)
    }

    pub fn is_percentage(&self) -> bool {
        matches!(self, DiscountInput::Percentage(_))
    }

    pub fn text(&self) -> &str {
        match self {
            DiscountInput::None => "",
            DiscountInput::Fixed(text) | DiscountInput::Percentage(text) => text,
        }
    }

    /// Единица измерения для подписи поля
    pub fn unit(&self) -> &'static str {
        if self.is_percentage() {
            "%"
        } else {
            "₽"
        }
    }

    /// Включение скидки начинает с пустой суммы в рублях
    pub fn set_enabled(&mut self, enabled: bool) {
        *self = if enabled {
            DiscountInput::Fixed(String::new())
        } else {
            DiscountInput::None
        };
    }

    /// Смена типа сбрасывает значение
    pub fn set_percentage(&mut self, percentage: bool) {
        if !self.is_enabled() {
            return;
        }
        *self = if percentage {
            DiscountInput::Percentage(String::new())
        } else {
            DiscountInput::Fixed(String::new())
        };
    }

    pub fn set_text(&mut self, value: String) {
        match self {
            DiscountInput::None => {}
            DiscountInput::Fixed(text) | DiscountInput::Percentage(text) => *text = value,
        }
    }

    /// Скидка, если значение разбирается как неотрицательное целое
    pub fn parse(&self) -> Option<Discount> {
        let value = |text: &str| parse_int(text).and_then(|v| u64::try_from(v).ok());
        match self {
            DiscountInput::None => None,
            DiscountInput::Fixed(text) => value(text).map(Discount::Fixed),
            DiscountInput::Percentage(text) => value(text).map(Discount::Percentage),
        }
    }
}

/// Платёж рассрочки в форме
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreditPaymentDraft {
    pub sum: String,
    pub deadline: Option<DateTime<Utc>>,
}

/// Вариация в форме создания
#[derive(Debug, Clone, PartialEq)]
pub struct VariationDraft {
    /// Ключ строки для отрисовки, не уходит на сервер
    pub key: Uuid,
    pub product: Option<ProductDto>,
    pub rating: String,
    pub price: String,
    pub quantity: QuantityInput,
    pub discount: DiscountInput,
    pub credit_payments: Vec<CreditPaymentDraft>,
}

impl Default for VariationDraft {
    fn default() -> Self {
        Self::new(None)
    }
}

impl VariationDraft {
    pub fn new(product: Option<ProductDto>) -> Self {
        Self {
            key: Uuid::new_v4(),
            product,
            rating: "0".to_string(),
            price: String::new(),
            quantity: QuantityInput::default(),
            discount: DiscountInput::None,
            credit_payments: Vec::new(),
        }
    }

    pub fn product_id(&self) -> Option<&ProductId> {
        self.product.as_ref().map(|p| &p.id)
    }

    /// Цена закрыта для ввода, пока есть платежи рассрочки
    pub fn price_locked(&self) -> bool {
        !self.credit_payments.is_empty()
    }

    pub fn price_after_discount(&self) -> Option<i64> {
        price_after_discount(&self.discount, &self.price)
    }

    pub fn credit_total(&self) -> Option<u64> {
        credit_payments_total(&self.credit_payments)
    }

    pub fn add_credit_payment(&mut self) {
        self.credit_payments.push(CreditPaymentDraft::default());
        sync_price_with_credit(self);
    }

    pub fn remove_credit_payment(&mut self, index: usize) {
        if index < self.credit_payments.len() {
            self.credit_payments.remove(index);
            sync_price_with_credit(self);
        }
    }

    pub fn set_credit_sum(&mut self, index: usize, sum: String) {
        if let Some(payment) = self.credit_payments.get_mut(index) {
            payment.sum = sum;
            sync_price_with_credit(self);
        }
    }

    pub fn set_credit_deadline(&mut self, index: usize, deadline: Option<DateTime<Utc>>) {
        if let Some(payment) = self.credit_payments.get_mut(index) {
            payment.deadline = deadline;
        }
    }
}

// ============================================================================
// Производные значения
// ============================================================================

/// Цена после скидки для подсказки «Итог»
///
/// `None`, если скидки нет или цена/скидка не разбираются как целые.
pub fn price_after_discount(discount: &DiscountInput, price_text: &str) -> Option<i64> {
    let price = parse_int(price_text)?;
    let discount = discount.parse()?;
    discounted_price(price, &discount)
}

/// Сумма платежей рассрочки; неразобранная сумма считается нулём
///
/// `None`, если сумма не помещается в поле цены.
pub fn credit_payments_total(payments: &[CreditPaymentDraft]) -> Option<u64> {
    payments
        .iter()
        .filter_map(|p| parse_int(&p.sum))
        .filter(|v| *v >= 0)
        .try_fold(0_i64, |acc, v| acc.checked_add(v))
        .and_then(|total| u64::try_from(total).ok())
}

/// При наличии платежей цена равна их сумме
pub fn sync_price_with_credit(draft: &mut VariationDraft) {
    if draft.credit_payments.is_empty() {
        return;
    }
    let total = credit_payments_total(&draft.credit_payments)
        .map(|total| total.to_string())
        .unwrap_or_default();
    if draft.price != total {
        draft.price = total;
    }
}

// ============================================================================
// Публикация
// ============================================================================

/// Форма создания публикации
#[derive(Debug, Clone, PartialEq)]
pub struct PublicationDraft {
    pub kind: PublicationKind,
    pub link: String,
    pub category_id: Option<CategoryId>,
    pub preorder_id: Option<PreorderId>,
    pub shipping_cost_included: Option<ShippingCostIncluded>,
    pub items: VariationList,
}

impl PublicationDraft {
    pub fn new(kind: PublicationKind) -> Self {
        Self {
            kind,
            link: String::new(),
            category_id: None,
            preorder_id: None,
            shipping_cost_included: None,
            items: VariationList::default(),
        }
    }

    /// Начальные значения формы
    ///
    /// Запрошенные продукты подставляются вариациями, категория берётся
    /// из первого из них. Предзаказ подставляется, только если он есть
    /// в списке.
    pub fn with_defaults(
        kind: PublicationKind,
        products: &[ProductDto],
        requested_ids: &[ProductId],
        preorder_ids: &[PreorderId],
        requested_preorder: Option<&PreorderId>,
    ) -> Self {
        let mut draft = Self::new(kind);
        if !requested_ids.is_empty() {
            let (selected, category_id) = default_selection(products, requested_ids);
            draft.items = VariationList::from_products(selected);
            draft.category_id = category_id;
        }
        if kind == PublicationKind::Preorder {
            draft.preorder_id =
                requested_preorder.filter(|id| preorder_ids.contains(id)).cloned();
        }
        draft
    }

    /// Смена категории очищает продукты чужой категории
    pub fn set_category(&mut self, category_id: Option<CategoryId>) {
        self.items.on_category_changed(category_id.as_ref());
        self.category_id = category_id;
    }

    /// Переход к публикации в наличии снимает поля предзаказа
    pub fn set_kind(&mut self, kind: PublicationKind) {
        self.kind = kind;
        if kind == PublicationKind::Stock {
            self.preorder_id = None;
            self.shipping_cost_included = None;
            for index in 0..self.items.len() {
                self.items.update(index, |item| {
                    item.credit_payments.clear();
                    if item.quantity.unlimited {
                        item.quantity.set_unlimited(false);
                    }
                });
            }
        }
    }

    /// Проверка всей формы
    pub fn validate(&self) -> Result<PublicationCreateDto, FieldErrors> {
        let mut errors = FieldErrors::new();

        if let Err(message) = validate_slug(&self.link) {
            errors.push("link", message);
        }
        if self.category_id.is_none() {
            errors.push("categoryId", "Выберите категорию");
        }

        let preorder = self.kind == PublicationKind::Preorder;
        if preorder {
            if self.preorder_id.is_none() {
                errors.push("preorderId", "Выберите предзаказ");
            }
            if self.shipping_cost_included.is_none() {
                errors.push(
                    "shippingCostIncluded",
                    "Укажите, включена ли стоимость доставки в цену товаров",
                );
            }
        }

        if self.items.is_empty() {
            errors.push("items", "У публикации должен быть хотя бы один товар");
        }

        let mut items = Vec::with_capacity(self.items.len());
        for (index, draft) in self.items.iter().enumerate() {
            match validate_variation(self.kind, self.category_id.as_ref(), draft) {
                Ok(item) => items.push(item),
                Err(nested) => errors.extend_prefixed(&format!("items.{}", index), nested),
            }
        }

        let Some(category_id) = self.category_id.clone() else {
            return Err(errors);
        };
        errors.into_result(PublicationCreateDto {
            link: self.link.clone(),
            category_id,
            preorder_id: if preorder { self.preorder_id.clone() } else { None },
            shipping_cost_included: if preorder {
                self.shipping_cost_included
            } else {
                None
            },
            items,
        })
    }
}

/// Проверка одной вариации
///
/// `category_id`: категория публикации; продукт другой категории
/// считается невыбранным.
pub fn validate_variation(
    kind: PublicationKind,
    category_id: Option<&CategoryId>,
    draft: &VariationDraft,
) -> Result<CatalogItemPublishDto, FieldErrors> {
    let mut errors = FieldErrors::new();

    let product_id = match &draft.product {
        Some(product) if category_id.map_or(true, |c| product.category_id() == c) => {
            Some(product.id.clone())
        }
        _ => {
            errors.push("product", "Выберите продукт");
            None
        }
    };

    let rating = match parse_int(&draft.rating).map(u32::try_from) {
        None => {
            errors.push("rating", "Укажите рейтинг");
            0
        }
        Some(Ok(value)) => value,
        Some(Err(_)) => {
            errors.push("rating", "Рейтинг должен быть положительным числом");
            0
        }
    };

    let price = match require_positive(
        &draft.price,
        "Укажите цену",
        "Цена должна быть положительным числом",
    ) {
        Ok(value) => value,
        Err(message) => {
            errors.push("price", message);
            0
        }
    };

    let quantity = if draft.quantity.unlimited {
        if kind == PublicationKind::Stock {
            errors.push("quantity", "Укажите количество");
        }
        Quantity::Unlimited
    } else {
        match require_positive(
            &draft.quantity.text,
            "Укажите количество",
            "Количество должно быть положительным числом",
        ) {
            Ok(value) => Quantity::Limited(value),
            Err(message) => {
                errors.push("quantity", message);
                Quantity::Unlimited
            }
        }
    };

    let discount = validate_discount(&draft.discount).unwrap_or_else(|message| {
        errors.push("discount", message);
        Discount::None
    });

    let credit_info = if draft.credit_payments.is_empty() {
        None
    } else if kind == PublicationKind::Stock {
        errors.push("creditPayments", "Рассрочка доступна только для предзаказа");
        None
    } else {
        let mut payments = Vec::with_capacity(draft.credit_payments.len());
        let mut total = 0_u64;
        for (index, payment) in draft.credit_payments.iter().enumerate() {
            let sum = require_positive(
                &payment.sum,
                "Укажите сумму кредитного платежа",
                "Сумма должна быть положительным числом",
            )
            .and_then(|sum| match total.checked_add(sum) {
                // сумма платежей становится ценой и должна в неё помещаться
                Some(next) if i64::try_from(next).is_ok() => {
                    total = next;
                    Ok(sum)
                }
                _ => Err("Сумма должна быть положительным числом"),
            });
            if let Err(message) = sum {
                errors.push(format!("creditPayments.{}.sum", index), message);
            }
            if payment.deadline.is_none() {
                errors.push(
                    format!("creditPayments.{}.deadline", index),
                    "Укажите срок действия кредитного платежа",
                );
            }
            if let (Ok(sum), Some(deadline)) = (sum, payment.deadline) {
                payments.push(CreditPayment { sum, deadline });
            }
        }
        Some(CreditInfo { payments })
    };

    let Some(product_id) = product_id else {
        return Err(errors);
    };
    errors.into_result(CatalogItemPublishDto {
        product_id,
        rating,
        price,
        quantity,
        discount,
        credit_info,
    })
}

/// Проверка поля скидки с сообщениями формы
pub fn validate_discount(input: &DiscountInput) -> Result<Discount, &'static str> {
    if !input.is_enabled() {
        return Ok(Discount::None);
    }
    if input.text().trim().is_empty() {
        return Err("Укажите скидку");
    }
    let discount = input.parse().ok_or("Скидка должна быть положительным числом")?;
    discount.validate()?;
    Ok(discount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::CategoryDto;
    use chrono::TimeZone;

    fn product(id: &str, category: &str) -> ProductDto {
        ProductDto {
            id: ProductId::from(id),
            title: format!("Продукт {}", id),
            category: CategoryDto {
                id: CategoryId::from(category),
                title: category.to_string(),
            },
            images: Vec::new(),
        }
    }

    fn valid_item(product_id: &str) -> VariationDraft {
        let mut draft = VariationDraft::new(Some(product(product_id, "A")));
        draft.price = "1000".to_string();
        draft.quantity.text = "5".to_string();
        draft
    }

    fn deadline() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 12, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_price_after_discount() {
        let pct = DiscountInput::Percentage("15".to_string());
        assert_eq!(price_after_discount(&pct, "1000"), Some(850));
        let pct = DiscountInput::Percentage("10".to_string());
        assert_eq!(price_after_discount(&pct, "999"), Some(900));
        let fixed = DiscountInput::Fixed("150".to_string());
        assert_eq!(price_after_discount(&fixed, "1000"), Some(850));
        assert_eq!(price_after_discount(&DiscountInput::None, "1000"), None);
        assert_eq!(price_after_discount(&fixed, ""), None);
        assert_eq!(price_after_discount(&DiscountInput::Fixed(String::new()), "1000"), None);
    }

    #[test]
    fn test_credit_total_ignores_unparsable_sums() {
        let payments = vec![
            CreditPaymentDraft {
                sum: "400".to_string(),
                deadline: None,
            },
            CreditPaymentDraft {
                sum: String::new(),
                deadline: None,
            },
            CreditPaymentDraft {
                sum: "600".to_string(),
                deadline: None,
            },
        ];
        assert_eq!(credit_payments_total(&payments), Some(1000));
    }

    #[test]
    fn test_credit_total_overflow_is_rejected() {
        let category = CategoryId::from("A");
        let mut draft = valid_item("1");
        draft.quantity.set_unlimited(true);
        draft.add_credit_payment();
        draft.add_credit_payment();
        draft.set_credit_sum(0, i64::MAX.to_string());
        draft.set_credit_sum(1, "5".to_string());
        draft.set_credit_deadline(0, Some(deadline()));
        draft.set_credit_deadline(1, Some(deadline()));
        assert_eq!(draft.credit_total(), None);
        assert_eq!(draft.price, "");
        assert_eq!(draft.price_after_discount(), None);

        let errors = validate_variation(PublicationKind::Preorder, Some(&category), &draft)
            .unwrap_err();
        assert_eq!(errors.get("creditPayments.0.sum"), None);
        assert_eq!(
            errors.get("creditPayments.1.sum"),
            Some("Сумма должна быть положительным числом")
        );
    }

    #[test]
    fn test_credit_payments_drive_price() {
        let mut draft = valid_item("1");
        draft.add_credit_payment();
        assert_eq!(draft.price, "0");
        assert!(draft.price_locked());

        draft.set_credit_sum(0, "400".to_string());
        draft.add_credit_payment();
        draft.set_credit_sum(1, "600".to_string());
        assert_eq!(draft.price, "1000");

        sync_price_with_credit(&mut draft);
        sync_price_with_credit(&mut draft);
        assert_eq!(draft.price, "1000");

        draft.remove_credit_payment(0);
        assert_eq!(draft.price, "600");

        // без платежей цена остаётся последней рассчитанной
        draft.remove_credit_payment(0);
        assert_eq!(draft.price, "600");
        assert!(!draft.price_locked());
    }

    #[test]
    fn test_discount_toggles_reset_value() {
        let mut discount = DiscountInput::None;
        discount.set_text("10".to_string());
        assert_eq!(discount, DiscountInput::None);

        discount.set_enabled(true);
        assert_eq!(discount, DiscountInput::Fixed(String::new()));
        discount.set_text("10".to_string());
        discount.set_percentage(true);
        assert_eq!(discount, DiscountInput::Percentage(String::new()));
        assert_eq!(discount.unit(), "%");

        discount.set_enabled(false);
        assert!(!discount.is_enabled());
    }

    #[test]
    fn test_discount_validation_messages() {
        assert_eq!(validate_discount(&DiscountInput::None), Ok(Discount::None));
        assert_eq!(
            validate_discount(&DiscountInput::Fixed(String::new())),
            Err("Укажите скидку")
        );
        assert_eq!(
            validate_discount(&DiscountInput::Fixed("0".to_string())),
            Err("Скидка должна быть положительным числом")
        );
        assert_eq!(
            validate_discount(&DiscountInput::Percentage("101".to_string())),
            Err("Процент не может превышать 100%")
        );
        assert_eq!(
            validate_discount(&DiscountInput::Percentage("100".to_string())),
            Ok(Discount::Percentage(100))
        );
    }

    #[test]
    fn test_unlimited_toggle_clears_text() {
        let mut quantity = QuantityInput {
            text: "12".to_string(),
            unlimited: false,
        };
        quantity.set_unlimited(true);
        assert!(quantity.unlimited);
        assert!(quantity.text.is_empty());
        quantity.set_unlimited(false);
        assert!(!quantity.unlimited);
        assert!(quantity.text.is_empty());
    }

    #[test]
    fn test_variation_errors_are_field_level() {
        let draft = VariationDraft::new(None);
        let errors = validate_variation(PublicationKind::Preorder, None, &draft).unwrap_err();
        assert_eq!(errors.get("product"), Some("Выберите продукт"));
        assert_eq!(errors.get("price"), Some("Укажите цену"));
        assert_eq!(errors.get("quantity"), Some("Укажите количество"));
        assert_eq!(errors.get("rating"), None);
    }

    #[test]
    fn test_stock_forbids_unlimited_and_credit() {
        let category = CategoryId::from("A");
        let mut draft = valid_item("1");
        draft.quantity.set_unlimited(true);
        draft.add_credit_payment();
        let errors =
            validate_variation(PublicationKind::Stock, Some(&category), &draft).unwrap_err();
        assert!(errors.get("quantity").is_some());
        assert!(errors.get("creditPayments").is_some());

        let ok = validate_variation(PublicationKind::Preorder, Some(&category), &draft);
        let errors = ok.unwrap_err();
        assert_eq!(
            errors.get("creditPayments.0.sum"),
            Some("Укажите сумму кредитного платежа")
        );
        assert_eq!(
            errors.get("creditPayments.0.deadline"),
            Some("Укажите срок действия кредитного платежа")
        );
    }

    #[test]
    fn test_preorder_variation_with_credit() {
        let category = CategoryId::from("A");
        let mut draft = valid_item("1");
        draft.quantity.set_unlimited(true);
        draft.discount = DiscountInput::Percentage("10".to_string());
        draft.add_credit_payment();
        draft.set_credit_sum(0, "700".to_string());
        draft.set_credit_deadline(0, Some(deadline()));

        let item = validate_variation(PublicationKind::Preorder, Some(&category), &draft).unwrap();
        assert_eq!(item.price, 700);
        assert_eq!(item.quantity, Quantity::Unlimited);
        assert_eq!(item.discount, Discount::Percentage(10));
        assert_eq!(item.credit_info.and_then(|c| c.total()), Some(700));
    }

    #[test]
    fn test_product_from_other_category_is_rejected() {
        let other = CategoryId::from("B");
        let errors =
            validate_variation(PublicationKind::Stock, Some(&other), &valid_item("1")).unwrap_err();
        assert_eq!(errors.get("product"), Some("Выберите продукт"));
    }

    #[test]
    fn test_publication_requires_preorder_fields() {
        let mut draft = PublicationDraft::new(PublicationKind::Preorder);
        draft.link = "кружка-2026".to_string();
        draft.set_category(Some(CategoryId::from("A")));
        draft.items = VariationList::from_products(Vec::new());
        draft.items.update(0, |item| *item = valid_item("1"));

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("preorderId"), Some("Выберите предзаказ"));
        assert!(errors.get("shippingCostIncluded").is_some());

        draft.preorder_id = Some(PreorderId::from("pre1"));
        draft.shipping_cost_included = Some(ShippingCostIncluded::Full);
        let dto = draft.validate().unwrap();
        assert_eq!(dto.preorder_id, Some(PreorderId::from("pre1")));
        assert_eq!(dto.items.len(), 1);
    }

    #[test]
    fn test_stock_publication_drops_preorder_fields() {
        let mut draft = PublicationDraft::new(PublicationKind::Preorder);
        draft.link = "mug".to_string();
        draft.category_id = Some(CategoryId::from("A"));
        draft.preorder_id = Some(PreorderId::from("pre1"));
        draft.shipping_cost_included = Some(ShippingCostIncluded::Not);
        draft.items.update(0, |item| {
            *item = valid_item("1");
            item.quantity.set_unlimited(true);
            item.credit_payments.push(CreditPaymentDraft::default());
        });

        draft.set_kind(PublicationKind::Stock);
        let item = draft.items.get(0).unwrap();
        assert!(!item.quantity.unlimited);
        assert!(item.credit_payments.is_empty());

        draft.items.update(0, |item| item.quantity.text = "3".to_string());
        let dto = draft.validate().unwrap();
        assert_eq!(dto.preorder_id, None);
        assert_eq!(dto.shipping_cost_included, None);
        assert_eq!(dto.items[0].credit_info, None);
    }

    #[test]
    fn test_item_errors_are_prefixed() {
        let mut draft = PublicationDraft::new(PublicationKind::Stock);
        draft.link = "bad link".to_string();
        draft.items.append(VariationDraft::default());
        let errors = draft.validate().unwrap_err();
        assert!(errors.get("link").is_some());
        assert_eq!(errors.get("categoryId"), Some("Выберите категорию"));
        assert_eq!(errors.get("items.1.product"), Some("Выберите продукт"));
    }

    #[test]
    fn test_defaults_from_requested_products() {
        let products = vec![product("1", "A"), product("2", "A"), product("3", "B")];
        let requested = vec![ProductId::from("2"), ProductId::from("3")];
        let preorders = vec![PreorderId::from("pre1")];

        let draft = PublicationDraft::with_defaults(
            PublicationKind::Preorder,
            &products,
            &requested,
            &preorders,
            Some(&PreorderId::from("missing")),
        );
        assert_eq!(draft.category_id, Some(CategoryId::from("A")));
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.preorder_id, None);

        let draft = PublicationDraft::with_defaults(
            PublicationKind::Preorder,
            &products,
            &[],
            &preorders,
            Some(&PreorderId::from("pre1")),
        );
        assert_eq!(draft.items.len(), 1);
        assert!(draft.items.get(0).unwrap().product.is_none());
        assert_eq!(draft.preorder_id, Some(PreorderId::from("pre1")));
    }
}
