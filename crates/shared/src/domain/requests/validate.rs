use rust_decimal::Decimal;
use validator::ValidationError;

/// Largest amount a `NUMERIC(12,2)` column holds.
pub const MAX_MONEY: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

/// Per-line cap on order quantities.
pub const MAX_ITEM_QUANTITY: i32 = 10_000;

pub fn money(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new("positive").with_message("must be greater than 0".into()));
    }

    if *value > MAX_MONEY {
        return Err(ValidationError::new("max").with_message("must not exceed 9999999999.99".into()));
    }

    if value.normalize().scale() > 2 {
        return Err(ValidationError::new("scale").with_message("at most 2 decimal places".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_cents() {
        assert!(money(&Decimal::new(1999, 2)).is_ok());
        assert!(money(&Decimal::new(40, 0)).is_ok());
        assert!(money(&Decimal::new(12500, 3)).is_ok());
    }

    #[test]
    fn rejects_zero_negative_and_fractions_of_cents() {
        assert!(money(&Decimal::ZERO).is_err());
        assert!(money(&Decimal::new(-100, 2)).is_err());
        assert!(money(&Decimal::new(10001, 3)).is_err());
    }

    #[test]
    fn caps_at_column_precision() {
        assert_eq!(MAX_MONEY, Decimal::new(999_999_999_999, 2));
        assert!(money(&MAX_MONEY).is_ok());
        assert!(money(&Decimal::new(1_000_000_000_000, 2)).is_err());
        assert!(money(&Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0)).is_err());
    }
}
