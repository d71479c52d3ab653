// Shoe record model and its line format in the backing file.

use crate::error::RecordParseError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Header written as the first line of the backing file.
pub const HEADER: &str = "Country,Code,Product,Cost,Quantity";

/// Amount as shown to the user: whole numbers get one decimal place
/// (`10` -> `10.0`), anything with a fractional scale is left alone.
pub fn display_amount(amount: Decimal) -> Decimal {
    let mut shown = amount;
    if shown.scale() == 0 {
        shown.rescale(1);
    }
    shown
}

/// One shoe inventory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoeRecord {
    pub country: String,
    pub code: String,
    pub product: String,
    pub cost: Decimal,
    pub quantity: u32,
}

impl ShoeRecord {
    pub fn new(
        country: impl Into<String>,
        code: impl Into<String>,
        product: impl Into<String>,
        cost: Decimal,
        quantity: u32,
    ) -> Self {
        ShoeRecord {
            country: country.into(),
            code: code.into(),
            product: product.into(),
            cost,
            quantity,
        }
    }

    /// Stock value of this item: cost times quantity, or `None` when the
    /// product does not fit in a `Decimal`.
    pub fn value(&self) -> Option<Decimal> {
        self.cost.checked_mul(Decimal::from(self.quantity))
    }

    /// Serialize as a backing-file line (no trailing newline).
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.country, self.code, self.product, self.cost, self.quantity
        )
    }
}

impl FromStr for ShoeRecord {
    type Err = RecordParseError;

    /// Parse `country,code,product,cost,quantity`. The code is taken as-is.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();
        let [country, code, product, cost, quantity] = parts[..] else {
            return Err(RecordParseError::FieldCount(parts.len()));
        };

        let cost = Decimal::from_str(cost)
            .ok()
            .filter(|c| !c.is_sign_negative() || c.is_zero())
            .ok_or_else(|| RecordParseError::Cost(cost.to_string()))?;
        let quantity = quantity
            .parse::<u32>()
            .map_err(|_| RecordParseError::Quantity(quantity.to_string()))?;

        Ok(ShoeRecord::new(country, code, product, cost, quantity))
    }
}

impl fmt::Display for ShoeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Product: {}", self.product)?;
        writeln!(f, "Code: {}", self.code)?;
        writeln!(f, "Country: {}", self.country)?;
        writeln!(f, "Cost: {}", display_amount(self.cost))?;
        writeln!(f, "Quantity: {}", self.quantity)
    }
}
