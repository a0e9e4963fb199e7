// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The derived style record for the menu container.

use kurbo::{Point, Vec2};

/// Presentation-level style for the menu container.
///
/// This is derived state: it cannot be set directly and is entirely a
/// function of the controller's visibility and placement. While the menu is
/// hidden the style is always the single canonical [`MenuStyle::HIDDEN`]
/// record, independent of any previously computed position; while visible and
/// placed, `translate` is the viewport-clamped top-left corner.
///
/// Keeping the hidden menu translated to the origin with zero opacity and no
/// pointer events (instead of unmounting it) is what lets the placement pass
/// measure the container before the user sees it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MenuStyle {
    /// 0.0 while hidden or not yet placed, 1.0 once placed.
    pub opacity: f64,
    /// Whether the container should receive pointer events.
    pub pointer_events: bool,
    /// Translation from the viewport origin to the menu's top-left corner.
    pub translate: Vec2,
}

impl MenuStyle {
    /// The canonical hidden record.
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        pointer_events: false,
        translate: Vec2::ZERO,
    };

    /// The style for a menu placed with its top-left corner at `origin`.
    #[must_use]
    pub fn placed(origin: Point) -> Self {
        Self {
            opacity: 1.0,
            pointer_events: true,
            translate: origin.to_vec2(),
        }
    }

    /// True when this is the canonical hidden record.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        *self == Self::HIDDEN
    }
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self::HIDDEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_the_default() {
        assert!(MenuStyle::default().is_hidden());
        assert_eq!(MenuStyle::default(), MenuStyle::HIDDEN);
    }

    #[test]
    fn placed_style_is_interactive() {
        let style = MenuStyle::placed(Point::new(10.0, 20.0));
        assert_eq!(style.opacity, 1.0);
        assert!(style.pointer_events);
        assert_eq!(style.translate, Vec2::new(10.0, 20.0));
        assert!(!style.is_hidden());
    }
}
