// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of document-level listeners the menu needs while open.

use bitflags::bitflags;

bitflags! {
    /// Document-level listeners, described as data.
    ///
    /// The controller attaches a set on the hidden→visible transition and
    /// detaches exactly what it attached on the way back. The invariant is
    /// strict: the set is empty whenever the menu is hidden, and hosts should
    /// never register these handlers unconditionally and filter inside them.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ListenerSet: u8 {
        /// Document pointer-down, for outside-click dismissal. Register with
        /// capture + passive semantics where the host distinguishes them.
        const POINTER_DOWN = 1 << 0;
        /// Document touch-start, for outside-touch dismissal.
        const TOUCH_START = 1 << 1;
        /// Document key-down, for keyboard navigation.
        const KEY_DOWN = 1 << 2;
        /// Document scroll, one-shot, only when the controller is configured
        /// to hide on scroll.
        const SCROLL = 1 << 3;
    }
}

impl ListenerSet {
    /// The listeners every open menu needs, scroll excluded.
    pub const BASE: Self = Self::POINTER_DOWN
        .union(Self::TOUCH_START)
        .union(Self::KEY_DOWN);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_set_excludes_scroll() {
        assert!(ListenerSet::BASE.contains(ListenerSet::POINTER_DOWN));
        assert!(ListenerSet::BASE.contains(ListenerSet::TOUCH_START));
        assert!(ListenerSet::BASE.contains(ListenerSet::KEY_DOWN));
        assert!(!ListenerSet::BASE.contains(ListenerSet::SCROLL));
    }
}
