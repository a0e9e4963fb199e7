// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding snapshots for the menu container and its items.
//!
//! These are the declarative halves of the controller's contract: plain
//! records a presentation layer copies onto the elements it renders. The
//! container binding reflects live controller state (style and visibility);
//! the item binding is constant.

use crate::style::MenuStyle;

/// Basic widget role of a bound element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// The menu container.
    Menu,
    /// A selectable item inside the menu.
    MenuItem,
}

/// Snapshot of the menu container's binding.
///
/// Beyond copying these fields, the host wires two behaviors to the
/// container: forward its own context-request events to
/// [`MenuController::on_container_context_request`](crate::MenuController::on_container_context_request)
/// (so right-clicking the open menu does not pop a nested platform menu), and
/// register the rendered element so outside-dismissal containment can be
/// checked.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MenuBinding {
    /// Derived container style; [`MenuStyle::HIDDEN`] while not visible.
    pub style: MenuStyle,
    /// Always [`Role::Menu`].
    pub role: Role,
    /// The container is reachable with the keyboard.
    pub tab_index: i32,
    /// Mirror of "not visible", for `aria-hidden`-style attributes.
    pub hidden: bool,
}

/// Snapshot of a menu item's binding.
///
/// Items register themselves with
/// [`MenuController::register_item`](crate::MenuController::register_item) on
/// mount, and the presentation layer clears the registry (registering `None`)
/// when items unmount.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemBinding {
    /// Always [`Role::MenuItem`].
    pub role: Role,
    /// Items are not tab-reachable; selection moves with the arrow keys.
    pub tab_index: i32,
}

impl ItemBinding {
    pub(crate) const DEFAULT: Self = Self {
        role: Role::MenuItem,
        tab_index: -1,
    };
}
