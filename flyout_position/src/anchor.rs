// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor extraction from raw pointer and touch coordinates.
//!
//! Triggers receive low-level input whose coordinates are expressed in the
//! host's viewport space. These helpers turn them into the anchor point fed
//! to the placement functions, subtracting a caller-chosen offset on each
//! axis so a trigger can report positions relative to an origin other than
//! the viewport's (for example a scrolled or transformed container).

use kurbo::{Point, Vec2};

/// Anchor for a pointer event, from its viewport-space position.
///
/// The `offset` is subtracted per axis.
#[must_use]
pub fn pointer_anchor(client: Point, offset: Vec2) -> Point {
    client - offset
}

/// Anchor for a touch event, from its first touch point.
///
/// Returns `None` when the touch list is empty (for example a `touchend`
/// with no remaining contact points). The `offset` is subtracted per axis.
#[must_use]
pub fn touch_anchor(touches: &[Point], offset: Vec2) -> Option<Point> {
    touches.first().map(|first| *first - offset)
}
