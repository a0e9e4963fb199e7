// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flyout Position: pure placement math for context menus.
//!
//! This crate answers one question: given the measured size of a menu, the
//! anchor point where the user asked for it (usually the pointer position),
//! and the viewport size, where should the menu's top-left corner go so that
//! the menu stays fully on screen?
//!
//! Two resolution functions are provided:
//!
//! - [`resolve_ltr`]: the menu hangs down-right from the anchor. On overflow
//!   it flips up and/or left by its own extent; if a flip pushes a coordinate
//!   negative, the menu is re-centered on that axis when it fits the
//!   viewport, otherwise clamped to the viewport edge.
//! - [`resolve_rtl`]: the mirrored variant for right-to-left layouts. The
//!   menu's *right* edge anchors at `x`, and the horizontal corrections run
//!   with the opposite sign.
//!
//! [`Direction`] plus [`resolve`] dispatch between the two, so a caller can
//! hold the layout direction as data.
//!
//! The [`anchor`] module extracts the anchor point itself from raw pointer or
//! touch coordinates, applying a caller-chosen per-axis offset so triggers can
//! report positions relative to an origin other than the viewport's.
//!
//! This crate knows nothing about widgets, styles, or event loops; it is
//! plain geometry over [`kurbo`] types. Inputs are assumed finite (no NaNs).
//!
//! ## Example
//!
//! A 100×100 menu opened at (1000, 700) inside a 1024×768 viewport overflows
//! on both axes and flips to (900, 600):
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use flyout_position::{resolve, resolve_ltr, Direction};
//!
//! let menu = Size::new(100.0, 100.0);
//! let viewport = Size::new(1024.0, 768.0);
//!
//! // Fits as-is: no correction.
//! assert_eq!(
//!     resolve_ltr(menu, Point::new(100.0, 100.0), viewport),
//!     Point::new(100.0, 100.0),
//! );
//!
//! // Overflows right and bottom: flipped by the menu's own extent.
//! assert_eq!(
//!     resolve(Direction::Ltr, menu, Point::new(1000.0, 700.0), viewport),
//!     Point::new(900.0, 600.0),
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point
//!   math.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Size};

pub mod anchor;

/// Horizontal layout direction of the surrounding document.
///
/// The direction only selects which placement function runs; it has no other
/// behavioral effect.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left-to-right layout: the menu hangs down-right from the anchor.
    #[default]
    Ltr,
    /// Right-to-left layout: the menu's right edge anchors at the pointer.
    Rtl,
}

/// Resolve the menu's top-left corner for the given layout [`Direction`].
///
/// See [`resolve_ltr`] and [`resolve_rtl`] for the per-direction rules.
#[must_use]
pub fn resolve(direction: Direction, menu: Size, anchor: Point, viewport: Size) -> Point {
    match direction {
        Direction::Ltr => resolve_ltr(menu, anchor, viewport),
        Direction::Rtl => resolve_rtl(menu, anchor, viewport),
    }
}

/// Resolve the menu's top-left corner in a left-to-right layout.
///
/// Starting at the anchor:
///
/// 1. If the bottom edge would overflow the viewport, flip up by the menu
///    height.
/// 2. If the right edge would overflow, flip left by the menu width.
/// 3. If a coordinate ends up negative after flipping, center the menu on
///    that axis when it fits the viewport, otherwise clamp to 0.
#[must_use]
pub fn resolve_ltr(menu: Size, anchor: Point, viewport: Size) -> Point {
    debug_assert!(
        menu.width.is_finite() && menu.height.is_finite(),
        "menu size must be finite; got {menu:?}"
    );

    let mut top = anchor.y;
    let mut left = anchor.x;

    if anchor.y + menu.height > viewport.height {
        top -= menu.height;
    }
    if anchor.x + menu.width > viewport.width {
        left -= menu.width;
    }

    if top < 0.0 {
        top = center_or_zero(menu.height, viewport.height);
    }
    if left < 0.0 {
        left = center_or_zero(menu.width, viewport.width);
    }

    Point::new(left, top)
}

/// Resolve the menu's top-left corner in a right-to-left layout.
///
/// The menu's right edge anchors at `anchor.x` (so the first candidate is
/// `x - width`), then the same overflow rules as [`resolve_ltr`] apply with
/// the horizontal sign mirrored: a negative `left` flips back right by the
/// menu width, and a final right-edge overflow re-centers or clamps.
#[must_use]
pub fn resolve_rtl(menu: Size, anchor: Point, viewport: Size) -> Point {
    debug_assert!(
        menu.width.is_finite() && menu.height.is_finite(),
        "menu size must be finite; got {menu:?}"
    );

    let mut top = anchor.y;
    // Prefer the left side of the anchor.
    let mut left = anchor.x - menu.width;

    if anchor.y + menu.height > viewport.height {
        top -= menu.height;
    }
    if left < 0.0 {
        left += menu.width;
    }

    if top < 0.0 {
        top = center_or_zero(menu.height, viewport.height);
    }
    if left + menu.width > viewport.width {
        left = center_or_zero(menu.width, viewport.width);
    }

    Point::new(left, top)
}

/// Center an extent within the viewport extent when it fits, else clamp to 0.
fn center_or_zero(extent: f64, viewport_extent: f64) -> f64 {
    if extent < viewport_extent {
        (viewport_extent - extent) / 2.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1024.0, 768.0);
    const MENU: Size = Size::new(100.0, 100.0);

    #[test]
    fn ltr_fits_without_correction() {
        let pos = resolve_ltr(MENU, Point::new(100.0, 100.0), VIEWPORT);
        assert_eq!(pos, Point::new(100.0, 100.0));
    }

    #[test]
    fn ltr_flips_on_both_axes_when_overflowing() {
        let pos = resolve_ltr(MENU, Point::new(1000.0, 700.0), VIEWPORT);
        assert_eq!(pos, Point::new(900.0, 600.0));
    }

    #[test]
    fn ltr_flips_only_the_overflowing_axis() {
        let right = resolve_ltr(MENU, Point::new(1000.0, 100.0), VIEWPORT);
        assert_eq!(right, Point::new(900.0, 100.0));

        let bottom = resolve_ltr(MENU, Point::new(100.0, 700.0), VIEWPORT);
        assert_eq!(bottom, Point::new(100.0, 600.0));
    }

    #[test]
    fn ltr_recenters_when_flip_goes_negative() {
        // Anchor near the top-left with a bottom/right overflow is impossible
        // here, so drive the negative branch with an oversized anchor that
        // flips past zero: y=50 with a 100-tall menu in a 60-tall viewport.
        let viewport = Size::new(1024.0, 60.0);
        let pos = resolve_ltr(MENU, Point::new(100.0, 50.0), viewport);
        // 50 + 100 > 60 flips to -50; the menu does not fit vertically, so
        // the coordinate clamps to 0.
        assert_eq!(pos.y, 0.0);

        // Same shape horizontally, but with a menu that fits: re-center.
        let viewport = Size::new(150.0, 768.0);
        let pos = resolve_ltr(MENU, Point::new(90.0, 100.0), viewport);
        // 90 + 100 > 150 flips to -10; the menu fits (100 < 150), so it is
        // centered at (150 - 100) / 2.
        assert_eq!(pos.x, 25.0);
    }

    #[test]
    fn rtl_anchors_right_edge_at_pointer() {
        let pos = resolve_rtl(MENU, Point::new(500.0, 100.0), VIEWPORT);
        assert_eq!(pos, Point::new(400.0, 100.0));
    }

    #[test]
    fn rtl_flips_right_when_left_edge_goes_negative() {
        let pos = resolve_rtl(MENU, Point::new(40.0, 100.0), VIEWPORT);
        // 40 - 100 < 0 flips back to the anchor.
        assert_eq!(pos, Point::new(40.0, 100.0));
    }

    #[test]
    fn rtl_flips_up_on_bottom_overflow() {
        let pos = resolve_rtl(MENU, Point::new(500.0, 700.0), VIEWPORT);
        assert_eq!(pos, Point::new(400.0, 600.0));
    }

    #[test]
    fn rtl_recenters_on_final_right_overflow() {
        // A narrow viewport where flipping right overflows again.
        let viewport = Size::new(150.0, 768.0);
        let pos = resolve_rtl(MENU, Point::new(60.0, 100.0), viewport);
        // 60 - 100 < 0 flips to 60; 60 + 100 > 150 re-centers at 25.
        assert_eq!(pos.x, 25.0);
    }

    #[test]
    fn rtl_clamps_when_menu_wider_than_viewport() {
        let viewport = Size::new(80.0, 768.0);
        let pos = resolve_rtl(MENU, Point::new(60.0, 100.0), viewport);
        assert_eq!(pos.x, 0.0);
    }

    #[test]
    fn resolve_dispatches_on_direction() {
        let anchor = Point::new(500.0, 100.0);
        assert_eq!(
            resolve(Direction::Ltr, MENU, anchor, VIEWPORT),
            resolve_ltr(MENU, anchor, VIEWPORT),
        );
        assert_eq!(
            resolve(Direction::Rtl, MENU, anchor, VIEWPORT),
            resolve_rtl(MENU, anchor, VIEWPORT),
        );
    }
}
