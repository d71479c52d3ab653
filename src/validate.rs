// Field validators for interactive capture. Each returns the cleaned value
// or a `ValidationError` whose message is shown before re-prompting.

use crate::error::ValidationError;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::OnceLock;

fn code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^SKU[0-9]{5}$").expect("static SKU pattern"))
}

/// Country and product names: letters and spaces, at least one letter.
pub fn name(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    let mut letters = trimmed.chars().filter(|c| *c != ' ').peekable();
    if letters.peek().is_none() || !letters.all(char::is_alphabetic) {
        return Err(ValidationError::NotAlphabetic);
    }
    Ok(trimmed.to_string())
}

/// Product code, upper-cased before matching `SKU` + five digits.
pub fn code(input: &str) -> Result<String, ValidationError> {
    let code = input.trim().to_uppercase();
    if !code_pattern().is_match(&code) {
        return Err(ValidationError::CodeFormat);
    }
    Ok(code)
}

pub fn cost(input: &str) -> Result<Decimal, ValidationError> {
    let cost = Decimal::from_str(input.trim()).map_err(|_| ValidationError::CostFormat)?;
    if cost.is_sign_negative() && !cost.is_zero() {
        return Err(ValidationError::NegativeCost);
    }
    Ok(cost)
}

pub fn quantity(input: &str) -> Result<u32, ValidationError> {
    let value = input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::QuantityFormat)?;
    if value < 0 {
        return Err(ValidationError::NegativeQuantity);
    }
    u32::try_from(value).map_err(|_| ValidationError::QuantityFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_allow_spaces_but_not_digits() {
        assert_eq!(name("  South Africa ").unwrap(), "South Africa");
        assert_eq!(name("Air Max"), Ok("Air Max".to_string()));
        assert_eq!(name("Air Max 90"), Err(ValidationError::NotAlphabetic));
        assert_eq!(name("Peru,Chile"), Err(ValidationError::NotAlphabetic));
        assert_eq!(name("   "), Err(ValidationError::NotAlphabetic));
        assert_eq!(name(""), Err(ValidationError::NotAlphabetic));
    }

    #[test]
    fn code_is_uppercased_and_matched() {
        assert_eq!(code(" sku12345 ").unwrap(), "SKU12345");
        assert_eq!(code("SKU1234"), Err(ValidationError::CodeFormat));
        assert_eq!(code("SKU123456"), Err(ValidationError::CodeFormat));
        assert_eq!(code("ABC12345"), Err(ValidationError::CodeFormat));
    }

    #[test]
    fn cost_must_be_non_negative_number() {
        assert_eq!(cost("20.50").unwrap(), Decimal::new(2050, 2));
        assert_eq!(cost("0").unwrap(), Decimal::ZERO);
        assert_eq!(cost("-1"), Err(ValidationError::NegativeCost));
        assert_eq!(cost("abc"), Err(ValidationError::CostFormat));
    }

    #[test]
    fn quantity_must_be_non_negative_integer() {
        assert_eq!(quantity("7"), Ok(7));
        assert_eq!(quantity("0"), Ok(0));
        assert_eq!(quantity("-3"), Err(ValidationError::NegativeQuantity));
        assert_eq!(quantity("2.5"), Err(ValidationError::QuantityFormat));
        assert_eq!(quantity("lots"), Err(ValidationError::QuantityFormat));
    }
}
