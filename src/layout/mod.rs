//! Board assembly: registry tables in, rectangles out.

pub mod board;

pub use board::{BoardLayout, PlacedButton, PlacedLabel, PlacedZone};
