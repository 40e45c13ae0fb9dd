//! Card dimensions per orientation.
//!
//! Card size is independent of the grid: a portrait card is `20vh` tall and
//! as wide as the reference card image's aspect ratio allows. A landscape card
//! is the same card rotated 90°, so its width and height are swapped.

use serde::{Deserialize, Serialize};

use super::length::Length;

/// Width / height of the reference card image (1024 × 1429 px).
pub const CARD_ASPECT_RATIO: f64 = 1024.0 / 1429.0;

/// Portrait card height in `vh`.
pub const CARD_HEIGHT_VH: f64 = 20.0;

/// Card layout mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Tall card.
    Portrait,
    /// Wide card (portrait transposed).
    Landscape,
}

impl Orientation {
    /// The other orientation.
    #[must_use]
    pub const fn rotated(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Portrait => f.write_str("portrait"),
            Orientation::Landscape => f.write_str("landscape"),
        }
    }
}

/// Width and height of one card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDimensions {
    pub w: Length,
    pub h: Length,
}

impl CardDimensions {
    /// Swap width and height.
    #[must_use]
    pub fn transposed(self) -> Self {
        Self {
            w: self.h,
            h: self.w,
        }
    }
}

/// Card size accessor consumed by the rect builders.
pub trait CardMetrics {
    /// Card width and height for an orientation.
    fn size_by_orientation(&self, orientation: Orientation) -> CardDimensions;
}

/// Fixed card size derived from a base height and aspect ratio.
///
/// ## Example
///
/// ```
/// use rust_board::geometry::{CardMetrics, CardSize, Orientation};
///
/// let cards = CardSize::new();
/// let portrait = cards.size_by_orientation(Orientation::Portrait);
/// let landscape = cards.size_by_orientation(Orientation::Landscape);
///
/// assert_eq!(portrait.h.to_css(), "20vh");
/// assert_eq!(landscape.w, portrait.h);
/// assert_eq!(landscape.h, portrait.w);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardSize {
    aspect_ratio: f64,
    portrait: CardDimensions,
}

impl CardSize {
    /// Standard card size: `20vh` tall, reference aspect ratio.
    #[must_use]
    pub fn new() -> Self {
        Self::with_height(Length::vh(CARD_HEIGHT_VH), CARD_ASPECT_RATIO)
    }

    /// Card size from an arbitrary portrait height and aspect ratio.
    ///
    /// Panics if `aspect_ratio` is not a positive finite number.
    #[must_use]
    pub fn with_height(portrait_height: Length, aspect_ratio: f64) -> Self {
        assert!(
            aspect_ratio.is_finite() && aspect_ratio > 0.0,
            "Card aspect ratio must be positive"
        );

        let w = portrait_height.clone() * aspect_ratio;
        Self {
            aspect_ratio,
            portrait: CardDimensions {
                w,
                h: portrait_height,
            },
        }
    }

    /// Width / height ratio of a portrait card.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    #[must_use]
    pub fn portrait(&self) -> CardDimensions {
        self.portrait.clone()
    }

    #[must_use]
    pub fn landscape(&self) -> CardDimensions {
        self.portrait.clone().transposed()
    }
}

impl Default for CardSize {
    fn default() -> Self {
        Self::new()
    }
}

impl CardMetrics for CardSize {
    fn size_by_orientation(&self, orientation: Orientation) -> CardDimensions {
        match orientation {
            Orientation::Portrait => self.portrait(),
            Orientation::Landscape => self.landscape(),
        }
    }
}
