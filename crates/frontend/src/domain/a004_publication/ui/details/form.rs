//! Формы страницы публикации: заголовок и редактирование вариаций

use contracts::domain::a001_category::CategoryId;
use contracts::domain::a002_product::ProductDto;
use contracts::domain::a004_publication::{PublicationDto, PublicationKind, PublicationUpdateDto};
use contracts::domain::a005_catalog_item::{
    CatalogItemDto, CatalogItemUpdateDto, Discount, Quantity,
};
use contracts::enums::ShippingCostIncluded;
use contracts::shared::validation::{parse_int, validate_slug, FieldErrors};

use crate::domain::a004_publication::ui::create::form::{
    validate_variation, CreditPaymentDraft, DiscountInput, QuantityInput, VariationDraft,
};
use crate::shared::date_utils::to_date_input;

/// Заголовочные поля публикации
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderDraft {
    pub link: String,
    pub category_id: Option<CategoryId>,
    pub shipping_cost_included: Option<ShippingCostIncluded>,
}

impl HeaderDraft {
    pub fn from_publication(publication: &PublicationDto) -> Self {
        Self {
            link: publication.link.clone(),
            category_id: Some(publication.category.id.clone()),
            shipping_cost_included: publication.shipping_cost_included,
        }
    }

    pub fn validate(
        &self,
        publication: &PublicationDto,
    ) -> Result<PublicationUpdateDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Err(message) = validate_slug(&self.link) {
            errors.push("link", message);
        }
        if self.category_id.is_none() {
            errors.push("categoryId", "Выберите категорию");
        }
        let preorder = publication.kind() == PublicationKind::Preorder;
        if preorder && self.shipping_cost_included.is_none() {
            errors.push(
                "shippingCostIncluded",
                "Укажите, включена ли стоимость доставки в цену товаров",
            );
        }
        let Some(category_id) = self.category_id.clone() else {
            return Err(errors);
        };
        errors.into_result(PublicationUpdateDto {
            id: publication.id.clone(),
            link: self.link.clone(),
            category_id,
            shipping_cost_included: if preorder {
                self.shipping_cost_included
            } else {
                None
            },
        })
    }
}

/// Редактирование существующей вариации
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItemEdit {
    pub draft: VariationDraft,
    /// Ограничение количества в одни руки, пустая строка без ограничения
    pub quantity_restriction: String,
}

impl CatalogItemEdit {
    pub fn from_item(item: &CatalogItemDto) -> Self {
        let quantity = match item.quantity {
            Quantity::Limited(n) => QuantityInput {
                text: n.to_string(),
                unlimited: false,
            },
            Quantity::Unlimited => QuantityInput {
                text: String::new(),
                unlimited: true,
            },
        };
        let discount = match item.discount {
            Discount::None => DiscountInput::None,
            Discount::Fixed(v) => DiscountInput::Fixed(v.to_string()),
            Discount::Percentage(v) => DiscountInput::Percentage(v.to_string()),
        };
        let credit_payments = item
            .credit_info
            .as_ref()
            .map(|info| {
                info.payments
                    .iter()
                    .map(|p| CreditPaymentDraft {
                        sum: p.sum.to_string(),
                        deadline: Some(p.deadline),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let mut draft = VariationDraft::new(Some(item.product.clone()));
        draft.rating = item.rating.to_string();
        draft.price = item.price.to_string();
        draft.quantity = quantity;
        draft.discount = discount;
        draft.credit_payments = credit_payments;

        Self {
            draft,
            quantity_restriction: item
                .quantity_restriction
                .map(|n| n.to_string())
                .unwrap_or_default(),
        }
    }

    /// Правки отличаются от сохранённой вариации
    pub fn is_dirty(&self, item: &CatalogItemDto) -> bool {
        let mut original = Self::from_item(item);
        original.draft.key = self.draft.key;
        original != *self
    }

    pub fn validate(
        &self,
        kind: PublicationKind,
        item: &CatalogItemDto,
    ) -> Result<CatalogItemUpdateDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let restriction = if self.quantity_restriction.trim().is_empty() {
            None
        } else {
            match parse_int(&self.quantity_restriction) {
                Some(n) if n > 0 => Some(n as u64),
                _ => {
                    errors.push(
                        "quantityRestriction",
                        "Ограничение должно быть положительным числом",
                    );
                    None
                }
            }
        };

        // продукт вариации не меняется, категория берётся из него
        let category = item.product.category_id();
        let publish = match validate_variation(kind, Some(category), &self.draft) {
            Ok(publish) => Some(publish),
            Err(nested) => {
                for (path, message) in nested.iter() {
                    errors.push(path, message);
                }
                None
            }
        };

        let Some(publish) = publish else {
            return Err(errors);
        };
        errors.into_result(CatalogItemUpdateDto {
            id: item.id.clone(),
            rating: publish.rating,
            price: publish.price,
            quantity: publish.quantity,
            discount: publish.discount,
            quantity_restriction: restriction,
            credit_info: publish.credit_info,
        })
    }
}

/// Продукты, которые можно добавить новой вариацией
///
/// Только категория публикации и только ещё не использованные продукты.
pub fn addable_products(publication: &PublicationDto, products: &[ProductDto]) -> Vec<ProductDto> {
    products
        .iter()
        .filter(|p| p.category_id() == &publication.category.id)
        .filter(|p| !publication.items.iter().any(|item| item.product.id == p.id))
        .cloned()
        .collect()
}

/// Срок платежа для поля даты
pub fn deadline_input(payment: &CreditPaymentDraft) -> String {
    payment
        .deadline
        .as_ref()
        .map(to_date_input)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::CategoryDto;
    use contracts::domain::a002_product::ProductId;
    use contracts::domain::a005_catalog_item::{CatalogItemId, CreditInfo, CreditPayment};
    use contracts::domain::common::AdminMeta;
    use contracts::domain::a003_preorder::{PreorderDto, PreorderId};
    use contracts::domain::a004_publication::PublicationId;
    use chrono::{TimeZone, Utc};

    fn product(id: &str, category: &str) -> ProductDto {
        ProductDto {
            id: ProductId::from(id),
            title: id.to_string(),
            category: CategoryDto {
                id: CategoryId::from(category),
                title: category.to_string(),
            },
            images: Vec::new(),
        }
    }

    fn item(product_id: &str) -> CatalogItemDto {
        CatalogItemDto {
            id: CatalogItemId::from("v1"),
            product: product(product_id, "A"),
            rating: 3,
            price: 1000,
            quantity: Quantity::Unlimited,
            discount: Discount::Percentage(10),
            quantity_restriction: Some(2),
            credit_info: Some(CreditInfo {
                payments: vec![
                    CreditPayment {
                        sum: 400,
                        deadline: Utc.with_ymd_and_hms(2026, 1, 10, 0, 0, 0).unwrap(),
                    },
                    CreditPayment {
                        sum: 600,
                        deadline: Utc.with_ymd_and_hms(2026, 2, 10, 0, 0, 0).unwrap(),
                    },
                ],
            }),
            is_active: true,
        }
    }

    fn publication(preorder: bool) -> PublicationDto {
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        PublicationDto {
            id: PublicationId::from("pub1"),
            meta: AdminMeta {
                created_at: at,
                updated_at: at,
            },
            link: "mug".to_string(),
            category: CategoryDto {
                id: CategoryId::from("A"),
                title: "A".to_string(),
            },
            preorder: preorder.then(|| PreorderDto {
                id: PreorderId::from("pre1"),
                title: "Весна".to_string(),
            }),
            shipping_cost_included: None,
            items: vec![item("1")],
        }
    }

    #[test]
    fn test_edit_roundtrips_unchanged_item() {
        let original = item("1");
        let edit = CatalogItemEdit::from_item(&original);
        assert!(!edit.is_dirty(&original));
        assert_eq!(edit.draft.price, "1000");
        assert_eq!(deadline_input(&edit.draft.credit_payments[1]), "2026-02-10");

        let update = edit.validate(PublicationKind::Preorder, &original).unwrap();
        assert_eq!(update.id, original.id);
        assert_eq!(update.price, 1000);
        assert_eq!(update.quantity, Quantity::Unlimited);
        assert_eq!(update.discount, Discount::Percentage(10));
        assert_eq!(update.quantity_restriction, Some(2));
        assert_eq!(update.credit_info, original.credit_info);
    }

    #[test]
    fn test_edit_reports_restriction_and_price() {
        let original = item("1");
        let mut edit = CatalogItemEdit::from_item(&original);
        edit.quantity_restriction = "0".to_string();
        edit.draft.set_credit_sum(0, String::new());
        assert!(edit.is_dirty(&original));

        let errors = edit.validate(PublicationKind::Preorder, &original).unwrap_err();
        assert!(errors.get("quantityRestriction").is_some());
        assert_eq!(
            errors.get("creditPayments.0.sum"),
            Some("Укажите сумму кредитного платежа")
        );
    }

    #[test]
    fn test_header_requires_shipping_for_preorder() {
        let stock = publication(false);
        let header = HeaderDraft::from_publication(&stock);
        let update = header.validate(&stock).unwrap();
        assert_eq!(update.shipping_cost_included, None);

        let preorder = publication(true);
        let mut header = HeaderDraft::from_publication(&preorder);
        assert!(header.validate(&preorder).is_err());
        header.shipping_cost_included = Some(ShippingCostIncluded::Foreign);
        header.link = "кружка".to_string();
        let update = header.validate(&preorder).unwrap();
        assert_eq!(update.link, "кружка");
        assert_eq!(
            update.shipping_cost_included,
            Some(ShippingCostIncluded::Foreign)
        );
    }

    #[test]
    fn test_addable_products_skip_used_and_foreign() {
        let publication = publication(false);
        let products = vec![product("1", "A"), product("2", "A"), product("3", "B")];
        let addable: Vec<_> = addable_products(&publication, &products)
            .into_iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(addable, vec!["2"]);
    }
}
