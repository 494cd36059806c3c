/// Numeric bounds of an axis: `(start, end)` with `start <= end`.
///
/// The empty bounds ([`NumBounds::NAN`]) are the identity of [`NumBounds::unite_with`]:
/// uniting them with any bounds gives those bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumBounds(f64, f64);

impl NumBounds {
    /// The empty bounds
    pub const NAN: Self = Self(f64::NAN, f64::NAN);
}

impl Default for NumBounds {
    fn default() -> Self {
        Self::NAN
    }
}

impl From<f64> for NumBounds {
    fn from(value: f64) -> Self {
        Self(value, value)
    }
}

impl From<(f64, f64)> for NumBounds {
    fn from(value: (f64, f64)) -> Self {
        Self(value.0.min(value.1), value.0.max(value.1))
    }
}

impl FromIterator<f64> for NumBounds {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut bounds = NumBounds::NAN;
        for v in iter {
            bounds.add_sample(v);
        }
        bounds
    }
}

impl<'a> FromIterator<&'a f64> for NumBounds {
    fn from_iter<I: IntoIterator<Item = &'a f64>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl FromIterator<NumBounds> for NumBounds {
    fn from_iter<I: IntoIterator<Item = NumBounds>>(iter: I) -> Self {
        iter.into_iter().fold(NumBounds::NAN, |acc, b| acc.united(&b))
    }
}

impl NumBounds {
    /// Lower bound, NaN if empty
    pub fn start(&self) -> f64 {
        self.0
    }

    /// Upper bound, NaN if empty
    pub fn end(&self) -> f64 {
        self.1
    }

    /// `end - start`
    pub fn span(&self) -> f64 {
        self.1 - self.0
    }

    /// Whether no sample was ever added
    pub fn is_empty(&self) -> bool {
        self.0.is_nan() || self.1.is_nan()
    }

    /// Whether start and end are equal
    pub fn is_degenerate(&self) -> bool {
        !self.is_empty() && self.0 == self.1
    }

    /// Whether `point` is within the bounds, with a small relative tolerance
    pub fn contains(&self, point: f64) -> bool {
        let eps = 1e-10 * self.0.abs().max(self.1.abs()).max(f64::MIN_POSITIVE);
        point >= (self.0 - eps) && point <= (self.1 + eps)
    }

    /// Extend the bounds to include `point`. NaN points are ignored.
    pub fn add_sample(&mut self, point: f64) {
        if point.is_nan() {
            return;
        }
        // f64::min and f64::max return the non-NaN operand
        self.0 = self.0.min(point);
        self.1 = self.1.max(point);
    }

    /// Extend the bounds to include `bounds`
    pub fn unite_with(&mut self, bounds: &NumBounds) {
        if bounds.is_empty() {
            return;
        }
        self.0 = self.0.min(bounds.0);
        self.1 = self.1.max(bounds.1);
    }

    /// The union of `self` and `other`
    pub fn united(&self, other: &NumBounds) -> NumBounds {
        let mut res = *self;
        res.unite_with(other);
        res
    }
}

#[cfg(test)]
impl crate::tests::Near for NumBounds {
    fn near_abs(&self, other: &Self, tol: f64) -> bool {
        use crate::tests::Near;
        self.0.near_abs(&other.0, tol) && self.1.near_abs(&other.1, tol)
    }

    fn near_rel(&self, other: &Self, err: f64) -> bool {
        use crate::tests::Near;
        self.0.near_rel(&other.0, err) && self.1.near_rel(&other.1, err)
    }
}
