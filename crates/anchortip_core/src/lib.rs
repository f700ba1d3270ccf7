//! Core types and utilities for anchortip.
//!
//! This crate provides the toolkit-independent pieces of the tooltip overlay:
//!
//! - **error**: Error handling for builder and config mistakes
//! - **models**: Geometry, sides, tips and animation settings
//! - **config**: Serializable tooltip style
//! - **logging**: Structured logging setup

pub mod config;
pub mod error;
pub mod logging;
pub mod models;

pub use config::{TooltipStyle, NO_AUTO_CANCEL};
pub use error::AnchorTipError;
pub use models::{
    AnimationKind, AnimationSpec, Axis, Color, Direction, Point, Rect, Side, Size, Tip, TipPaint,
    TipPath,
};
