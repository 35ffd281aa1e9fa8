use crate::domain::cart::{CartSnapshot, LineItem};
use crate::error::{OrderError, Result};
use rust_decimal::Decimal;
use std::io::Read;

/// Reads cart line items from a CSV source with a `name,quantity,price` header.
///
/// This reader stands in for the storefront's cart: it owns the total, which
/// it derives as the sum of `quantity * price` using the digits of each
/// display price (`"50,000"` and `"50.000"` both read as 50000).
pub struct CartReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CartReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes line items, rejecting zero quantities.
    pub fn items(self) -> impl Iterator<Item = Result<LineItem>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(OrderError::from))
    }

    /// Reads every row and totals the cart. Fails on the first bad row.
    pub fn snapshot(self) -> Result<CartSnapshot> {
        let items = self.items().collect::<Result<Vec<_>>>()?;
        let mut total = Decimal::ZERO;
        for item in &items {
            total = price_value(&item.price)?
                .checked_mul(Decimal::from(item.quantity.value()))
                .and_then(|line| total.checked_add(line))
                .ok_or_else(|| OrderError::ValidationError("Cart total overflows".to_string()))?;
        }
        Ok(CartSnapshot::new(items, total))
    }
}

fn price_value(price: &str) -> Result<Decimal> {
    let digits: String = price.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(OrderError::ValidationError(format!(
            "Price has no digits: {price:?}"
        )));
    }
    digits
        .parse::<Decimal>()
        .map_err(|e| OrderError::ValidationError(format!("Invalid price {price:?}: {e}")))
}
