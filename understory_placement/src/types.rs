// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: sides, axes, pins, requests and results.

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size};

/// Default distance between the anchor and the overlay.
///
/// Leaves room for the connecting indicator (arrow) drawn in the gap.
pub const DEFAULT_GAP: f64 = 8.0;

/// Tolerance used when deciding whether a measured overlay edge is flush with
/// a viewport edge.
///
/// Hosts commonly snap layout to device pixels, so the re-measured rectangle may
/// differ from the requested position by a fraction of a pixel.
pub const PIN_EPSILON: f64 = 0.5;

/// Which side of the anchor the overlay is drawn on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Placement {
    /// Above the anchor.
    #[default]
    Top,
    /// To the right of the anchor.
    Right,
    /// Below the anchor.
    Bottom,
    /// To the left of the anchor.
    Left,
}

/// One of the two layout axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// The coordinate of `pt` along this axis.
    #[inline]
    pub fn coord(self, pt: Point) -> f64 {
        match self {
            Self::Horizontal => pt.x,
            Self::Vertical => pt.y,
        }
    }

    /// The extent of `size` along this axis.
    #[inline]
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// The `(start, end)` span of `rect` along this axis.
    #[inline]
    pub fn span(self, rect: Rect) -> (f64, f64) {
        match self {
            Self::Horizontal => (rect.x0, rect.x1),
            Self::Vertical => (rect.y0, rect.y1),
        }
    }
}

impl Placement {
    /// All placements, in clockwise order starting at the top.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The axis the overlay is offset along (away from the anchor).
    #[inline]
    pub fn main_axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// The axis the overlay is centered and clamped along.
    ///
    /// This is also the axis the indicator offset is measured on.
    #[inline]
    pub fn cross_axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Horizontal,
            Self::Left | Self::Right => Axis::Vertical,
        }
    }

    /// The opposite side.
    ///
    /// The indicator is drawn on the overlay's edge on this side, facing the anchor.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// The lowercase name of the placement.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown placement name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown placement, expected one of `top`, `right`, `bottom`, `left`")]
pub struct ParsePlacementError;

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            _ => Err(ParsePlacementError),
        }
    }
}

/// Which viewport edge, if any, the overlay was pinned against on its cross axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Pin {
    /// Not clamped; the overlay is centered on the anchor.
    #[default]
    None,
    /// The overlay's near edge sits at 0.
    Start,
    /// The overlay's far edge sits at the viewport extent.
    End,
}

/// Inputs to a placement computation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementRequest {
    /// Anchor bounding box in viewport coordinates.
    pub anchor: Rect,
    /// Current size of the overlay.
    pub overlay: Size,
    /// Requested side.
    pub placement: Placement,
    /// Viewport size; the viewport origin is `(0, 0)`.
    pub viewport: Size,
    /// Distance between anchor and overlay along the main axis.
    pub gap: f64,
}

impl PlacementRequest {
    /// Create a request with the [default gap](DEFAULT_GAP).
    pub fn new(anchor: Rect, overlay: Size, placement: Placement, viewport: Size) -> Self {
        Self {
            anchor,
            overlay,
            placement,
            viewport,
            gap: DEFAULT_GAP,
        }
    }

    /// Replace the gap.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }
}

/// Result of the first pass: a clamped position for the overlay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Estimate {
    /// Clamped top-left of the overlay.
    pub origin: Point,
    /// Which edge the first pass pinned against.
    pub pin: Pin,
}

/// Final placement after the overlay has been re-measured.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolved {
    /// Top-left of the overlay in viewport coordinates.
    pub origin: Point,
    /// Offset of the indicator along the overlay's cross axis, measured from
    /// the overlay's near edge.
    pub indicator_offset: f64,
    /// Side the overlay is drawn on.
    pub placement: Placement,
}
