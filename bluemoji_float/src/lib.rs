// Copyright 2025 the Bluemoji Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bluemoji_float --heading-base-level=0

//! Bluemoji Float: collision-aware positioning for an anchored floating card.
//!
//! Given the rectangle of an inline anchor, the natural size of a floating
//! card, and the viewport, [`place`] computes where the card goes:
//!
//! - offset a small fixed distance from the anchor on the main axis,
//! - on the preferred side, flipping to the opposite side when the preferred
//!   side would overflow the padded viewport,
//! - shifted along the cross axis so the card stays fully on-screen,
//! - with the card's size clamped to the space actually available after
//!   flip/shift, so long content scroll-clips instead of overflowing.
//!
//! Everything here is pure geometry with no state. Hosts re-invoke [`place`]
//! whenever the anchor or viewport moves or resizes while the card is
//! mounted; the floating element itself lives in a top-level overlay layer
//! so scrolling ancestors cannot clip it.
//!
//! ## Minimal example
//!
//! ```rust
//! use bluemoji_float::{place, FloatConfig, Side};
//! use kurbo::{Rect, Size};
//!
//! let viewport = Rect::new(0.0, 0.0, 1280.0, 720.0);
//! let anchor = Rect::new(600.0, 300.0, 620.0, 318.0);
//!
//! let placement = place(anchor, Size::new(300.0, 120.0), viewport, &FloatConfig::default());
//!
//! // Default side is below, offset 4 units from the anchor.
//! assert_eq!(placement.side, Side::Below);
//! assert_eq!(placement.rect.y0, anchor.y1 + 4.0);
//! ```
//!
//! This crate is `no_std` compatible (enable the `libm` feature for builds
//! without the standard library).

#![no_std]

use kurbo::{Rect, Size};

/// Main-axis gap between the anchor and the floating rect.
pub const ANCHOR_OFFSET: f64 = 4.0;

/// Padding kept between the floating rect and every viewport edge.
pub const EDGE_PADDING: f64 = 16.0;

/// Side of the anchor the floating rect is placed on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Side {
    /// Above the anchor.
    Above,
    /// Below the anchor (the default).
    #[default]
    Below,
}

impl Side {
    /// The opposite side, used when the preferred side does not fit.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Above => Self::Below,
            Self::Below => Self::Above,
        }
    }
}

/// Positioning configuration.
///
/// The defaults match the production card: a 4-unit offset, 16 units of
/// viewport edge padding, and placement below the anchor.
#[derive(Copy, Clone, Debug)]
pub struct FloatConfig {
    /// Main-axis gap between anchor and floating rect.
    pub offset: f64,
    /// Padding kept from every viewport edge.
    pub padding: f64,
    /// Preferred side of the anchor.
    pub side: Side,
}

impl Default for FloatConfig {
    fn default() -> Self {
        Self {
            offset: ANCHOR_OFFSET,
            padding: EDGE_PADDING,
            side: Side::default(),
        }
    }
}

impl FloatConfig {
    /// Set the main-axis offset.
    #[must_use]
    pub const fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the viewport edge padding.
    #[must_use]
    pub const fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the preferred side.
    #[must_use]
    pub const fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }
}

/// A resolved placement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Where the floating element goes, already clamped to available space.
    pub rect: Rect,
    /// The side actually used after flip resolution.
    pub side: Side,
    /// Maximum size available at this placement.
    ///
    /// Hosts apply this as a max-width/max-height so content larger than the
    /// available space scroll-clips inside the card.
    pub max_size: Size,
}

/// Position `floating` relative to `anchor` inside `viewport`.
///
/// The preferred side is kept when the floating height fits there; otherwise
/// the placement flips to the opposite side if that one fits, and falls back
/// to whichever side has more room when neither does. The cross axis centers
/// on the anchor and then shifts to stay inside the padded viewport.
#[must_use]
pub fn place(anchor: Rect, floating: Size, viewport: Rect, config: &FloatConfig) -> Placement {
    let pad = config.padding;
    let gap = config.offset;

    let room_above = anchor.y0 - gap - (viewport.y0 + pad);
    let room_below = (viewport.y1 - pad) - (anchor.y1 + gap);
    let side = resolve_side(config.side, floating.height, room_above, room_below);
    let room = match side {
        Side::Above => room_above,
        Side::Below => room_below,
    }
    .max(0.0);

    let max_width = (viewport.width() - 2.0 * pad).max(0.0);
    let width = floating.width.min(max_width);
    let height = floating.height.min(room);

    let y = match side {
        Side::Below => anchor.y1 + gap,
        Side::Above => anchor.y0 - gap - height,
    };

    // Center on the anchor, then shift into the padded viewport.
    let lo = viewport.x0 + pad;
    let hi = (viewport.x1 - pad - width).max(lo);
    let centered = anchor.x0 + (anchor.width() - width) / 2.0;
    let x = centered.clamp(lo, hi);

    Placement {
        rect: Rect::from_origin_size((x, y), Size::new(width, height)),
        side,
        max_size: Size::new(max_width, room),
    }
}

fn resolve_side(preferred: Side, height: f64, room_above: f64, room_below: f64) -> Side {
    let (room_preferred, room_flipped) = match preferred {
        Side::Above => (room_above, room_below),
        Side::Below => (room_below, room_above),
    };
    if height <= room_preferred {
        preferred
    } else if height <= room_flipped || room_flipped > room_preferred {
        preferred.flipped()
    } else {
        preferred
    }
}
