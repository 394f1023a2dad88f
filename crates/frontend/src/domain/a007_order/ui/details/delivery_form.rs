//! Форма доставки заказа

use std::sync::LazyLock;

use contracts::domain::a007_order::{Delivery, DeliveryPoint, Recipient};
use contracts::enums::DeliveryService;
use contracts::shared::validation::FieldErrors;
use regex::Regex;

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$")
        .expect("phone pattern is valid")
});

const PHONE_MIN_LEN: usize = 10;
const FULL_NAME_MIN_LEN: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryDraft {
    pub full_name: String,
    pub phone: String,
    pub service: Option<DeliveryService>,
    pub point_address: String,
    pub point_code: String,
}

impl DeliveryDraft {
    pub fn from_delivery(delivery: Option<&Delivery>) -> Self {
        let Some(delivery) = delivery else {
            return Self::default();
        };
        let (point_address, point_code) = delivery
            .point
            .as_ref()
            .map(|p| (p.address.clone(), p.code.clone()))
            .unwrap_or_default();
        Self {
            full_name: delivery.recipient.full_name.clone(),
            phone: delivery.recipient.phone.clone(),
            service: Some(delivery.service),
            point_address,
            point_code,
        }
    }

    /// Пункт выдачи заполнен целиком
    fn point(&self) -> Option<DeliveryPoint> {
        let address = self.point_address.trim();
        let code = self.point_code.trim();
        if address.is_empty() || code.is_empty() {
            return None;
        }
        Some(DeliveryPoint {
            address: address.to_string(),
            code: code.to_string(),
        })
    }

    pub fn validate(&self) -> Result<Delivery, FieldErrors> {
        let mut errors = FieldErrors::new();

        let full_name = self.full_name.trim();
        if full_name.chars().count() < FULL_NAME_MIN_LEN {
            errors.push("recipient.fullName", "ФИО должно быть не менее 2 символов");
        }
        if let Err(message) = validate_phone(&self.phone) {
            errors.push("recipient.phone", message);
        }

        let point = self.point();
        let Some(service) = self.service else {
            errors.push("service", "Укажите способ доставки");
            return Err(errors);
        };
        if service.requires_point() && point.is_none() {
            errors.push("point", "Укажите адрес доставки");
        }

        errors.into_result(Delivery {
            recipient: Recipient {
                full_name: full_name.to_string(),
                phone: self.phone.trim().to_string(),
            },
            service,
            point: if service.requires_point() { point } else { None },
        })
    }
}

pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    let phone = phone.trim();
    if !PHONE.is_match(phone) {
        return Err("Неверный номер телефона");
    }
    if phone.chars().count() < PHONE_MIN_LEN {
        return Err("Номер телефона должен быть не менее 10 символов");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(service: DeliveryService) -> DeliveryDraft {
        DeliveryDraft {
            full_name: "Иван Петров".to_string(),
            phone: "999 123 4567".to_string(),
            service: Some(service),
            point_address: String::new(),
            point_code: String::new(),
        }
    }

    #[test]
    fn test_phone_pattern() {
        assert!(validate_phone("+79991234567").is_ok());
        assert!(validate_phone("(999)123-4567").is_ok());
        assert!(validate_phone("999.123.456789").is_ok());
        assert!(validate_phone("9991234567").is_ok());
        assert_eq!(validate_phone("+7 999 123-4567"), Err("Неверный номер телефона"));
        assert_eq!(validate_phone("+9991234"), Err("Неверный номер телефона"));
        assert_eq!(validate_phone(""), Err("Неверный номер телефона"));
    }

    #[test]
    fn test_cdek_requires_point() {
        let mut draft = filled(DeliveryService::Cdek);
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("point"), Some("Укажите адрес доставки"));
        assert_eq!(errors.len(), 1);

        draft.point_address = "Москва, Тверская 1".to_string();
        let errors = draft.validate().unwrap_err();
        assert!(errors.get("point").is_some());

        draft.point_code = "MSK12".to_string();
        let delivery = draft.validate().unwrap();
        assert_eq!(delivery.point.unwrap().code, "MSK12");
    }

    #[test]
    fn test_self_pickup_drops_point() {
        let mut draft = filled(DeliveryService::SelfPickup);
        draft.point_address = "Москва".to_string();
        draft.point_code = "X".to_string();
        let delivery = draft.validate().unwrap();
        assert_eq!(delivery.point, None);
        assert_eq!(delivery.recipient.full_name, "Иван Петров");
    }

    #[test]
    fn test_missing_fields() {
        let draft = DeliveryDraft {
            full_name: "И".to_string(),
            ..DeliveryDraft::default()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.get("recipient.fullName"),
            Some("ФИО должно быть не менее 2 символов")
        );
        assert_eq!(errors.get("recipient.phone"), Some("Неверный номер телефона"));
        assert_eq!(errors.get("service"), Some("Укажите способ доставки"));
    }

    #[test]
    fn test_roundtrip_from_existing_delivery() {
        let mut draft = filled(DeliveryService::Cdek);
        draft.point_address = "Казань".to_string();
        draft.point_code = "KZN1".to_string();
        let delivery = draft.validate().unwrap();
        assert_eq!(DeliveryDraft::from_delivery(Some(&delivery)), draft);
        assert_eq!(DeliveryDraft::from_delivery(None), DeliveryDraft::default());
    }
}
