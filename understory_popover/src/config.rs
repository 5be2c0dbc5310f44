// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover configuration: trigger mode, timing, and layout knobs.
//!
//! ## Defaults
//!
//! | Option | Default |
//! |---|---|
//! | [`placement`](PopoverConfig::placement) | [`Placement::Top`] |
//! | [`trigger`](PopoverConfig::trigger) | [`Trigger::Click`] |
//! | [`continue_on_overlay_hover`](PopoverConfig::continue_on_overlay_hover) | `false` |
//! | [`delay_ms`](PopoverConfig::delay_ms) | [`DEFAULT_DELAY_MS`] |
//! | [`max_width`](PopoverConfig::max_width) | `None` |
//! | [`secondary_background`](PopoverConfig::secondary_background) | `false` |
//! | [`gap`](PopoverConfig::gap) | [`DEFAULT_GAP`] |
//! | [`hover_tolerance`](PopoverConfig::hover_tolerance) | [`DEFAULT_HOVER_TOLERANCE`] |
//! | [`throttle_ms`](PopoverConfig::throttle_ms) | [`DEFAULT_THROTTLE_MS`] |

use understory_placement::{DEFAULT_GAP, Placement};

/// Sustained hover required before a hover-triggered popover shows.
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Padding around the anchor when checking the pointer as the hover delay elapses.
pub const DEFAULT_HOVER_TOLERANCE: f64 = 4.0;

/// Minimum interval between processed pointer-move samples.
pub const DEFAULT_THROTTLE_MS: u64 = 16;

/// What opens the popover.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Trigger {
    /// Pointer-down on the anchor opens; pointer-down outside the overlay closes.
    #[default]
    Click,
    /// Sustained hover over the anchor opens; leaving the anchor closes.
    Hover,
}

/// Error returned by [`PopoverConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Max width must be finite and positive.
    #[error("max width must be finite and positive, got {0}")]
    InvalidMaxWidth(f64),
    /// Gap must be finite and non-negative.
    #[error("gap must be finite and non-negative, got {0}")]
    InvalidGap(f64),
    /// Hover tolerance must be finite and non-negative.
    #[error("hover tolerance must be finite and non-negative, got {0}")]
    InvalidHoverTolerance(f64),
}

/// Configuration for a [`Popover`](crate::popover::Popover).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PopoverConfig {
    /// Side of the anchor the overlay is drawn on.
    pub placement: Placement,
    /// Click or hover mode.
    pub trigger: Trigger,
    /// Keep a hover-triggered popover open while the pointer travels onto the overlay.
    ///
    /// Ignored in click mode.
    pub continue_on_overlay_hover: bool,
    /// Milliseconds of sustained hover before showing.
    pub delay_ms: u64,
    /// Cap on the overlay's width. Changing it repositions a visible overlay.
    pub max_width: Option<f64>,
    /// Draw the overlay with the secondary background. Styling only.
    pub secondary_background: bool,
    /// Distance between anchor and overlay.
    pub gap: f64,
    /// Padding around the anchor for the hover-intent check.
    pub hover_tolerance: f64,
    /// Minimum interval between processed pointer-move samples.
    pub throttle_ms: u64,
}

impl Default for PopoverConfig {
    fn default() -> Self {
        Self {
            placement: Placement::Top,
            trigger: Trigger::Click,
            continue_on_overlay_hover: false,
            delay_ms: DEFAULT_DELAY_MS,
            max_width: None,
            secondary_background: false,
            gap: DEFAULT_GAP,
            hover_tolerance: DEFAULT_HOVER_TOLERANCE,
            throttle_ms: DEFAULT_THROTTLE_MS,
        }
    }
}

impl PopoverConfig {
    /// Shorthand for a hover-triggered configuration.
    pub fn hover() -> Self {
        Self {
            trigger: Trigger::Hover,
            ..Self::default()
        }
    }

    /// Set the placement.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the trigger mode.
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Keep the popover open while the pointer moves onto the overlay.
    pub fn with_continue_on_overlay_hover(mut self, enabled: bool) -> Self {
        self.continue_on_overlay_hover = enabled;
        self
    }

    /// Set the hover delay in milliseconds.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the max width.
    pub fn with_max_width(mut self, max_width: Option<f64>) -> Self {
        self.max_width = max_width;
        self
    }

    /// Use the secondary background.
    pub fn with_secondary_background(mut self, enabled: bool) -> Self {
        self.secondary_background = enabled;
        self
    }

    /// Set the gap between anchor and overlay.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Set the hover tolerance padding.
    pub fn with_hover_tolerance(mut self, tolerance: f64) -> Self {
        self.hover_tolerance = tolerance;
        self
    }

    /// Set the pointer sampling interval in milliseconds.
    pub fn with_throttle_ms(mut self, throttle_ms: u64) -> Self {
        self.throttle_ms = throttle_ms;
        self
    }

    /// Whether continued hover applies, i.e. it is enabled and the trigger is hover.
    pub fn retains_on_overlay_hover(&self) -> bool {
        self.trigger == Trigger::Hover && self.continue_on_overlay_hover
    }

    /// Check numeric options.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_max_width(self.max_width)?;
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(ConfigError::InvalidGap(self.gap));
        }
        if !self.hover_tolerance.is_finite() || self.hover_tolerance < 0.0 {
            return Err(ConfigError::InvalidHoverTolerance(self.hover_tolerance));
        }
        Ok(())
    }
}

pub(crate) fn validate_max_width(max_width: Option<f64>) -> Result<(), ConfigError> {
    match max_width {
        Some(w) if !w.is_finite() || w <= 0.0 => Err(ConfigError::InvalidMaxWidth(w)),
        _ => Ok(()),
    }
}
