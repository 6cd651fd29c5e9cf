use super::FuzzyError;

/// Triangular membership function described by its three break points.
///
/// The function is zero outside `[a, c]`, rises linearly over `[a, b]`, peaks at
/// `b` and falls linearly over `[b, c]`. Collapsed flanks (`a == b` or `b == c`)
/// behave as steps so shoulder sets such as `Extensive` or `Top Candidate` keep a
/// full degree at the edge of their universe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangular {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangular {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, FuzzyError> {
        let finite = a.is_finite() && b.is_finite() && c.is_finite();
        if !finite || a > b || b > c {
            return Err(FuzzyError::InvalidMembership { a, b, c });
        }

        Ok(Self { a, b, c })
    }

    pub fn points(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Closed interval on which the function can be non-zero.
    pub fn support(&self) -> (f64, f64) {
        (self.a, self.c)
    }

    pub fn degree(&self, x: f64) -> f64 {
        if x.is_nan() || x < self.a || x > self.c {
            return 0.0;
        }
        if x == self.b {
            return 1.0;
        }

        let degree = if x < self.b {
            (x - self.a) / (self.b - self.a)
        } else {
            (self.c - x) / (self.c - self.b)
        };

        degree.clamp(0.0, 1.0)
    }
}
