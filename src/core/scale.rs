use ordered_float::OrderedFloat;

/// Span substituted for a degenerate (`max == min`) domain.
pub const MIN_DOMAIN_SPAN: f64 = 1.0;

/// Inclusive `[min, max]` extent of a value domain with its precomputed span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
    span: f64,
}

impl ValueRange {
    /// Builds a range from two bounds, swapping them when given out of order.
    ///
    /// Returns `None` when either bound is not finite.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Option<Self> {
        if !a.is_finite() || !b.is_finite() {
            return None;
        }
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        Some(Self {
            min,
            max,
            span: max - min,
        })
    }

    /// Min/max over every finite value produced by `values`.
    #[must_use]
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut bounds: Option<(OrderedFloat<f64>, OrderedFloat<f64>)> = None;
        for value in values.into_iter().filter(|value| value.is_finite()) {
            let value = OrderedFloat(value);
            bounds = Some(match bounds {
                None => (value, value),
                Some((min, max)) => (min.min(value), max.max(value)),
            });
        }
        bounds.and_then(|(min, max)| Self::new(min.into_inner(), max.into_inner()))
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// Raw `max - min`, zero for a flat domain.
    #[must_use]
    pub fn span(self) -> f64 {
        self.span
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span <= 0.0
    }

    /// Span used as a divisor; never zero.
    #[must_use]
    pub fn effective_span(self) -> f64 {
        if self.is_degenerate() {
            MIN_DOMAIN_SPAN
        } else {
            self.span
        }
    }
}

/// Maps `value` from `[domain_min, domain_max]` onto the downward-growing
/// pixel range `[range_min, range_max]`.
///
/// `domain_max` lands on `range_min` and `domain_min` on `range_max`, so a
/// higher value yields a smaller y. A zero-width domain is mapped with
/// [`MIN_DOMAIN_SPAN`] and every finite input yields a finite pixel.
#[must_use]
pub fn map_inverted(
    value: f64,
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
) -> f64 {
    let mut span = domain_max - domain_min;
    if span == 0.0 || !span.is_finite() {
        span = MIN_DOMAIN_SPAN;
    }
    let range_size = range_max - range_min;
    range_max - ((value - domain_min) / span) * range_size
}

/// Value-to-pixel function bound to one domain and one pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMapper {
    domain: ValueRange,
    range_min: f64,
    range_max: f64,
}

impl ScaleMapper {
    #[must_use]
    pub fn new(domain: ValueRange, range_min: f64, range_max: f64) -> Self {
        Self {
            domain,
            range_min,
            range_max,
        }
    }

    #[must_use]
    pub fn domain(self) -> ValueRange {
        self.domain
    }

    #[must_use]
    pub fn pixel_range(self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        map_inverted(
            value,
            self.domain.min,
            self.domain.max,
            self.range_min,
            self.range_max,
        )
    }
}
