//! Board configuration.
//!
//! `BoardConfig::default()` is the standard board: a 4×5 grid, `20vh` cards
//! at the reference aspect ratio, quarter-height buttons, and sixth-height
//! labels. Every value can be overridden with a `with_*` builder or loaded
//! from JSON, where missing fields fall back to the defaults.
//!
//! ```
//! use rust_board::config::BoardConfig;
//! use rust_board::geometry::GridSpec;
//!
//! let config = BoardConfig::from_json(r#"{"grid":{"rows":3,"cols":6}}"#).unwrap();
//! assert_eq!(config.grid, GridSpec::new(3, 6));
//! assert_eq!(config.card_height_vh, 20.0);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{
    ButtonRectOptions, ButtonSlot, CardSize, Grid, GridSpec, LabelRectOptions, LabelSlot, LabelWidthMode, Length,
    CARD_ASPECT_RATIO, CARD_HEIGHT_VH,
};

/// Error loading a `BoardConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid board config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid board config: {field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

/// Geometry parameters of the board.
///
/// Deserialization validates, so a decoded config is always usable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardConfigFields", rename_all = "camelCase")]
pub struct BoardConfig {
    pub grid: GridSpec,
    /// Portrait card height in `vh`.
    pub card_height_vh: f64,
    /// Portrait card width / height.
    pub card_aspect_ratio: f64,
    /// Button height as a fraction of the card height.
    pub button_height_ratio: f64,
    /// Label height as a fraction of the card height.
    pub label_height_ratio: f64,
    /// Lane reserved per label, as a fraction of the card height.
    pub label_lane_height_ratio: f64,
    pub label_width_mode: LabelWidthMode,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let button = ButtonRectOptions::default();
        let label = LabelRectOptions::default();

        Self {
            grid: GridSpec::default(),
            card_height_vh: CARD_HEIGHT_VH,
            card_aspect_ratio: CARD_ASPECT_RATIO,
            button_height_ratio: button.height_ratio,
            label_height_ratio: label.height_ratio,
            label_lane_height_ratio: label.lane_height_ratio,
            label_width_mode: label.width_mode,
        }
    }
}

/// Unvalidated wire form of `BoardConfig`; missing fields take defaults.
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct BoardConfigFields {
    grid: GridSpec,
    card_height_vh: f64,
    card_aspect_ratio: f64,
    button_height_ratio: f64,
    label_height_ratio: f64,
    label_lane_height_ratio: f64,
    label_width_mode: LabelWidthMode,
}

impl Default for BoardConfigFields {
    fn default() -> Self {
        let config = BoardConfig::default();
        Self {
            grid: config.grid,
            card_height_vh: config.card_height_vh,
            card_aspect_ratio: config.card_aspect_ratio,
            button_height_ratio: config.button_height_ratio,
            label_height_ratio: config.label_height_ratio,
            label_lane_height_ratio: config.label_lane_height_ratio,
            label_width_mode: config.label_width_mode,
        }
    }
}

impl TryFrom<BoardConfigFields> for BoardConfig {
    type Error = ConfigError;

    fn try_from(fields: BoardConfigFields) -> Result<Self, Self::Error> {
        let config = Self {
            grid: fields.grid,
            card_height_vh: fields.card_height_vh,
            card_aspect_ratio: fields.card_aspect_ratio,
            button_height_ratio: fields.button_height_ratio,
            label_height_ratio: fields.label_height_ratio,
            label_lane_height_ratio: fields.label_lane_height_ratio,
            label_width_mode: fields.label_width_mode,
        };
        config.validate()?;
        Ok(config)
    }
}

impl BoardConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON and validate it.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let fields: BoardConfigFields = serde_json::from_str(text)?;
        Self::try_from(fields)
    }

    /// Check that every size and ratio is a positive finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("cardHeightVh", self.card_height_vh),
            ("cardAspectRatio", self.card_aspect_ratio),
            ("buttonHeightRatio", self.button_height_ratio),
            ("labelHeightRatio", self.label_height_ratio),
            ("labelLaneHeightRatio", self.label_lane_height_ratio),
        ];

        match fields.into_iter().find(|(_, value)| !(value.is_finite() && *value > 0.0)) {
            Some((field, value)) => Err(ConfigError::NotPositive { field, value }),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn with_grid(mut self, rows: u32, cols: u32) -> Self {
        self.grid = GridSpec::new(rows, cols);
        self
    }

    /// Set the portrait card height in `vh`.
    ///
    /// Panics if `height` is not positive.
    #[must_use]
    pub fn with_card_height_vh(mut self, height: f64) -> Self {
        assert!(height.is_finite() && height > 0.0, "Card height must be positive");
        self.card_height_vh = height;
        self
    }

    /// Panics if `ratio` is not positive.
    #[must_use]
    pub fn with_aspect_ratio(mut self, ratio: f64) -> Self {
        assert!(ratio.is_finite() && ratio > 0.0, "Card aspect ratio must be positive");
        self.card_aspect_ratio = ratio;
        self
    }

    /// Panics if `ratio` is not positive.
    #[must_use]
    pub fn with_button_height_ratio(mut self, ratio: f64) -> Self {
        assert!(ratio.is_finite() && ratio > 0.0, "Button height ratio must be positive");
        self.button_height_ratio = ratio;
        self
    }

    /// Set the label's own height and the lane it reserves.
    ///
    /// Panics if either ratio is not positive.
    #[must_use]
    pub fn with_label_ratios(mut self, height: f64, lane_height: f64) -> Self {
        assert!(height.is_finite() && height > 0.0, "Label height ratio must be positive");
        assert!(
            lane_height.is_finite() && lane_height > 0.0,
            "Label lane height ratio must be positive"
        );
        self.label_height_ratio = height;
        self.label_lane_height_ratio = lane_height;
        self
    }

    #[must_use]
    pub fn with_label_width_mode(mut self, mode: LabelWidthMode) -> Self {
        self.label_width_mode = mode;
        self
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid)
    }

    #[must_use]
    pub fn card_size(&self) -> CardSize {
        CardSize::with_height(Length::vh(self.card_height_vh), self.card_aspect_ratio)
    }

    #[must_use]
    pub fn button_options(&self, slot: ButtonSlot) -> ButtonRectOptions {
        ButtonRectOptions::default()
            .with_height_ratio(self.button_height_ratio)
            .with_slot(slot)
    }

    #[must_use]
    pub fn label_options(&self, slot: LabelSlot) -> LabelRectOptions {
        LabelRectOptions {
            height_ratio: self.label_height_ratio,
            lane_height_ratio: self.label_lane_height_ratio,
            width_mode: self.label_width_mode,
            slot,
        }
    }
}
