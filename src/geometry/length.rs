//! Symbolic length expressions.
//!
//! Board geometry is computed as deferred expressions over three base units
//! instead of pixels:
//! - `%` of the containing board (along the property's axis)
//! - `vh` (percent of the viewport height)
//! - `px`
//!
//! Keeping the expression symbolic lets a web view emit `calc(...)` strings
//! that stay correct when the container is resized, with no recomputation.
//! Targets without a deferred-length primitive call `resolve` against a
//! known container size instead.
//!
//! ## Canonical Form
//!
//! Every expression is linear in its base units, so `Length::linear` folds any
//! tree into a `LinearLength { percent, vh, px }`. Two expressions denote the
//! same length iff their linear forms match.
//!
//! ```
//! use rust_board::geometry::Length;
//!
//! let unit = Length::percent(100.0) / 5.0;
//! let half = unit.clone() / 2.0;
//! let expr = unit + half;
//!
//! assert_eq!(expr.to_css(), "calc((100% / 5) + ((100% / 5) / 2))");
//! assert!((expr.linear().percent - 30.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Tolerance used when comparing folded lengths.
pub const LENGTH_EPSILON: f64 = 1e-9;

/// A deferred length expression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Length {
    /// Percentage of the container extent.
    Percent(f64),
    /// Percentage of the viewport height.
    Vh(f64),
    /// Absolute pixels.
    Px(f64),
    /// `a + b`
    Sum(Box<Length>, Box<Length>),
    /// `a - b`
    Difference(Box<Length>, Box<Length>),
    /// `a * k`
    Scaled(Box<Length>, f64),
    /// `a / k`
    Divided(Box<Length>, f64),
}

impl Length {
    /// A percentage of the container.
    #[must_use]
    pub const fn percent(value: f64) -> Self {
        Self::Percent(value)
    }

    /// A percentage of the viewport height.
    #[must_use]
    pub const fn vh(value: f64) -> Self {
        Self::Vh(value)
    }

    /// Absolute pixels.
    #[must_use]
    pub const fn px(value: f64) -> Self {
        Self::Px(value)
    }

    /// The zero length.
    #[must_use]
    pub const fn zero() -> Self {
        Self::Px(0.0)
    }

    /// Check if this is a single base-unit value (no operators).
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Percent(_) | Self::Vh(_) | Self::Px(_))
    }

    /// Fold the expression into its linear coefficients.
    #[must_use]
    pub fn linear(&self) -> LinearLength {
        match self {
            Self::Percent(v) => LinearLength::new(*v, 0.0, 0.0),
            Self::Vh(v) => LinearLength::new(0.0, *v, 0.0),
            Self::Px(v) => LinearLength::new(0.0, 0.0, *v),
            Self::Sum(a, b) => a.linear() + b.linear(),
            Self::Difference(a, b) => a.linear() - b.linear(),
            Self::Scaled(a, k) => a.linear() * *k,
            Self::Divided(a, k) => a.linear() / *k,
        }
    }

    /// Resolve to pixels.
    #[must_use]
    pub fn resolve(&self, ctx: &LengthContext) -> f64 {
        self.linear().resolve(ctx)
    }

    /// Check whether two expressions denote the same length.
    #[must_use]
    pub fn approx_eq(&self, other: &Length) -> bool {
        self.linear().approx_eq(&other.linear(), LENGTH_EPSILON)
    }

    /// Render as a CSS length.
    ///
    /// Leaves render bare (`20vh`); compound expressions are wrapped in a
    /// single outer `calc(...)` with nested operands parenthesized.
    #[must_use]
    pub fn to_css(&self) -> String {
        if self.is_leaf() {
            self.css_operand()
        } else {
            format!("calc({})", self.css_inner())
        }
    }

    fn css_inner(&self) -> String {
        match self {
            Self::Percent(v) => format!("{v}%"),
            Self::Vh(v) => format!("{v}vh"),
            Self::Px(v) => format!("{v}px"),
            Self::Sum(a, b) => format!("{} + {}", a.css_operand(), b.css_operand()),
            Self::Difference(a, b) => format!("{} - {}", a.css_operand(), b.css_operand()),
            Self::Scaled(a, k) => format!("{} * {k}", a.css_operand()),
            Self::Divided(a, k) => format!("{} / {k}", a.css_operand()),
        }
    }

    fn css_operand(&self) -> String {
        if self.is_leaf() {
            self.css_inner()
        } else {
            format!("({})", self.css_inner())
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length::Sum(Box::new(self), Box::new(rhs))
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length::Difference(Box::new(self), Box::new(rhs))
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length::Scaled(Box::new(self), rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length::Divided(Box::new(self), rhs)
    }
}

/// What a length is resolved against.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LengthContext {
    /// Container extent (px) that `100%` refers to.
    pub percent_base: f64,
    /// Viewport height (px) that `100vh` refers to.
    pub viewport_height: f64,
}

impl LengthContext {
    /// Create a resolution context.
    #[must_use]
    pub const fn new(percent_base: f64, viewport_height: f64) -> Self {
        Self {
            percent_base,
            viewport_height,
        }
    }
}

/// A length folded to `percent% + vh·vh + px·px`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearLength {
    pub percent: f64,
    pub vh: f64,
    pub px: f64,
}

impl LinearLength {
    /// Create a linear length from its coefficients.
    #[must_use]
    pub const fn new(percent: f64, vh: f64, px: f64) -> Self {
        Self { percent, vh, px }
    }

    /// Resolve to pixels.
    #[must_use]
    pub fn resolve(&self, ctx: &LengthContext) -> f64 {
        self.percent / 100.0 * ctx.percent_base + self.vh / 100.0 * ctx.viewport_height + self.px
    }

    /// Coefficient-wise comparison within `eps`.
    #[must_use]
    pub fn approx_eq(&self, other: &LinearLength, eps: f64) -> bool {
        (self.percent - other.percent).abs() <= eps
            && (self.vh - other.vh).abs() <= eps
            && (self.px - other.px).abs() <= eps
    }

    /// Convert back into an expression.
    #[must_use]
    pub fn to_length(&self) -> Length {
        let mut terms = Vec::with_capacity(3);
        if self.percent != 0.0 {
            terms.push(Length::percent(self.percent));
        }
        if self.vh != 0.0 {
            terms.push(Length::vh(self.vh));
        }
        if self.px != 0.0 {
            terms.push(Length::px(self.px));
        }
        terms
            .into_iter()
            .reduce(|acc, term| acc + term)
            .unwrap_or_else(Length::zero)
    }
}

impl Add for LinearLength {
    type Output = LinearLength;

    fn add(self, rhs: LinearLength) -> LinearLength {
        LinearLength::new(self.percent + rhs.percent, self.vh + rhs.vh, self.px + rhs.px)
    }
}

impl Sub for LinearLength {
    type Output = LinearLength;

    fn sub(self, rhs: LinearLength) -> LinearLength {
        LinearLength::new(self.percent - rhs.percent, self.vh - rhs.vh, self.px - rhs.px)
    }
}

impl Mul<f64> for LinearLength {
    type Output = LinearLength;

    fn mul(self, k: f64) -> LinearLength {
        LinearLength::new(self.percent * k, self.vh * k, self.px * k)
    }
}

impl Div<f64> for LinearLength {
    type Output = LinearLength;

    fn div(self, k: f64) -> LinearLength {
        LinearLength::new(self.percent / k, self.vh / k, self.px / k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_css() {
        assert_eq!(Length::percent(50.0).to_css(), "50%");
        assert_eq!(Length::vh(20.0).to_css(), "20vh");
        assert_eq!(Length::zero().to_css(), "0px");
    }

    #[test]
    fn test_nested_css() {
        let expr = Length::percent(100.0) - (Length::vh(20.0) * 0.5 + Length::px(4.0));
        assert_eq!(expr.to_css(), "calc(100% - ((20vh * 0.5) + 4px))");
    }

    #[test]
    fn test_linear_folding() {
        let expr = (Length::percent(40.0) + Length::vh(10.0)) / 2.0 - Length::px(3.0) * 2.0;
        let lin = expr.linear();

        assert!((lin.percent - 20.0).abs() < LENGTH_EPSILON);
        assert!((lin.vh - 5.0).abs() < LENGTH_EPSILON);
        assert!((lin.px + 6.0).abs() < LENGTH_EPSILON);
    }

    #[test]
    fn test_resolve() {
        let expr = Length::percent(50.0) + Length::vh(10.0) + Length::px(5.0);
        let ctx = LengthContext::new(800.0, 1000.0);

        assert!((expr.resolve(&ctx) - (400.0 + 100.0 + 5.0)).abs() < LENGTH_EPSILON);
    }

    #[test]
    fn test_approx_eq_ignores_structure() {
        let a = Length::percent(10.0) + Length::percent(10.0);
        let b = Length::percent(20.0);

        assert_ne!(a, b);
        assert!(a.approx_eq(&b));
        assert!(!a.approx_eq(&Length::vh(20.0)));
    }

    #[test]
    fn test_linear_round_trip_drops_zero_terms() {
        let lin = LinearLength::new(12.5, 0.0, -2.0);
        let expr = lin.to_length();

        assert_eq!(expr.to_css(), "calc(12.5% + -2px)");
        assert!(expr.linear().approx_eq(&lin, LENGTH_EPSILON));
        assert_eq!(LinearLength::default().to_length(), Length::zero());
    }

    #[test]
    fn test_display_matches_css() {
        let expr = Length::vh(20.0) / 4.0;
        assert_eq!(format!("{expr}"), expr.to_css());
    }

    #[test]
    fn test_serialization() {
        let expr = Length::percent(100.0) - Length::vh(20.0) * 0.25;
        let json = serde_json::to_string(&expr).unwrap();
        let back: Length = serde_json::from_str(&json).unwrap();
        assert_eq!(expr, back);
    }
}
