/// Sum of price * weight terms with inner type of i128.
/// Kept at full precision, truncation happens only in `per_unit`
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct WeightedPrice(i128);

impl WeightedPrice {
    pub const ZERO: WeightedPrice = WeightedPrice(0);

    /// Returns inner value
    pub const fn into_inner(self) -> i128 {
        self.0
    }

    /// Construct WeightedPrice from inner value
    pub fn from_inner<T: Into<i128>>(inner: T) -> WeightedPrice {
        WeightedPrice(inner.into())
    }

    /// Construct a single price * weight term
    pub fn from_product<P: Into<i128>, W: Into<i128>>(price: P, weight: W) -> Option<WeightedPrice> {
        price.into().checked_mul(weight.into()).map(WeightedPrice)
    }

    /// Sum of two weighted values
    pub fn checked_add(self, other: WeightedPrice) -> Option<WeightedPrice> {
        self.0.checked_add(other.0).map(WeightedPrice)
    }

    /// Subtraction of two weighted values
    pub fn checked_sub(self, other: WeightedPrice) -> Option<WeightedPrice> {
        self.0.checked_sub(other.0).map(WeightedPrice)
    }

    /// Adds a price * weight term to the sum
    pub fn accumulate<P: Into<i128>, W: Into<i128>>(
        self,
        price: P,
        weight: W,
    ) -> Option<WeightedPrice> {
        Self::from_product(price, weight).and_then(|term| self.checked_add(term))
    }

    /// Divides the sum by the total weight, truncating towards zero.
    /// Result is a price. None when total weight is zero
    pub fn per_unit<T: Into<i128>>(self, total_weight: T) -> Option<i128> {
        self.0.checked_div(total_weight.into())
    }

    /// Returns true if self is negative, false - when positive or zero
    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    /// Returns true if self is zero
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}
