// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard navigation intents and their conventional key codes.

/// Conventional key codes for the navigation keys the menu understands.
pub mod key_code {
    /// Tab.
    pub const TAB: u32 = 9;
    /// Enter / Return.
    pub const ENTER: u32 = 13;
    /// Escape.
    pub const ESCAPE: u32 = 27;
    /// Up arrow.
    pub const UP_ARROW: u32 = 38;
    /// Down arrow.
    pub const DOWN_ARROW: u32 = 40;
}

/// A keyboard navigation intent while the menu is open.
///
/// Hosts map their raw key events to this; any key without a mapping is a
/// no-op for the menu and must be left unconsumed so default behavior is
/// preserved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// Focus is moving on; dismiss the menu.
    Tab,
    /// Dismiss the menu.
    Escape,
    /// Activate the selected item (if any), then dismiss.
    Enter,
    /// Move selection to the previous item.
    Up,
    /// Move selection to the next item.
    Down,
}

impl NavKey {
    /// Map a conventional key code to a navigation intent.
    #[must_use]
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            key_code::TAB => Some(Self::Tab),
            key_code::ESCAPE => Some(Self::Escape),
            key_code::ENTER => Some(Self::Enter),
            key_code::UP_ARROW => Some(Self::Up),
            key_code::DOWN_ARROW => Some(Self::Down),
            _ => None,
        }
    }
}
