//! Расчёт цены со скидкой

use super::aggregate::Discount;

/// Цена после применения скидки
///
/// `FIXED`: `price - value`; `PERCENTAGE`: `ceil(price - price * value / 100)`.
/// Без скидки или при переполнении возвращает `None`.
pub fn discounted_price(price: i64, discount: &Discount) -> Option<i64> {
    match *discount {
        Discount::None => None,
        Discount::Fixed(value) => price.checked_sub(i64::try_from(value).ok()?),
        Discount::Percentage(value) => {
            let rest = 100_i64.checked_sub(i64::try_from(value).ok()?)?;
            ceil_div_100(price.checked_mul(rest)?)
        }
    }
}

/// Округление вверх при делении на 100 (в том числе для отрицательных)
fn ceil_div_100(numerator: i64) -> Option<i64> {
    numerator.checked_neg()?.div_euclid(100).checked_neg()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_discount() {
        assert_eq!(discounted_price(1000, &Discount::None), None);
    }

    #[test]
    fn test_fixed_discount() {
        assert_eq!(discounted_price(1000, &Discount::Fixed(150)), Some(850));
        assert_eq!(discounted_price(100, &Discount::Fixed(150)), Some(-50));
    }

    #[test]
    fn test_percentage_rounds_up() {
        assert_eq!(discounted_price(999, &Discount::Percentage(10)), Some(900));
        assert_eq!(discounted_price(1000, &Discount::Percentage(15)), Some(850));
        assert_eq!(discounted_price(1, &Discount::Percentage(50)), Some(1));
        assert_eq!(discounted_price(1000, &Discount::Percentage(100)), Some(0));
        assert_eq!(discounted_price(1000, &Discount::Percentage(0)), Some(1000));
    }

    #[test]
    fn test_percentage_is_exact_ceiling() {
        for price in [0_i64, 1, 7, 99, 100, 101, 1234, 99_999] {
            for pct in 0..=100_u64 {
                let result = discounted_price(price, &Discount::Percentage(pct)).unwrap();
                let scaled = price * (100 - pct as i64);
                assert!(result * 100 >= scaled, "price={price} pct={pct}");
                assert!((result - 1) * 100 < scaled, "price={price} pct={pct}");
            }
        }
    }

    #[test]
    fn test_huge_price_yields_no_total() {
        let price: i64 = "1000000000000000000".parse().unwrap();
        assert_eq!(discounted_price(price, &Discount::Percentage(10)), None);
        assert_eq!(discounted_price(i64::MIN, &Discount::Fixed(1)), None);
        assert_eq!(discounted_price(1000, &Discount::Fixed(u64::MAX)), None);
        assert_eq!(
            discounted_price(i64::MAX, &Discount::Percentage(0)),
            None
        );
        assert_eq!(
            discounted_price(i64::MAX / 100, &Discount::Percentage(0)),
            Some(i64::MAX / 100)
        );
    }
}
