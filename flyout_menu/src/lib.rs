// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flyout Menu: a renderer-agnostic context-menu controller.
//!
//! This crate models one context menu instance as an explicit state machine,
//! [`MenuController`], that owns:
//!
//! - **Visibility** and the anchor coordinates/payload of the current reveal.
//! - **Placement**: the viewport-clamped position, computed lazily in a
//!   host-driven post-layout pass ([`MenuController::place`]) so the menu is
//!   measured before it is ever painted at a stale position.
//! - **Keyboard selection** over a registry of selectable item handles,
//!   rebuilt by the presentation layer every render pass.
//! - **Listener lifecycle**: the set of document-level listeners
//!   ([`ListenerSet`]) the host should have registered, attached on the
//!   hidden→visible transition and detached on the way back — never
//!   registered while hidden, never filtered inside always-on handlers.
//!
//! The controller exposes four things to a presentation layer: the container
//! binding ([`MenuBinding`]), the item binding ([`ItemBinding`]), a factory
//! for [`Trigger`]s, and the control surface (visibility, coordinates, and
//! payload accessors plus [`MenuController::hide`]) for programmatic use such
//! as closing the menu from a selected command's handler.
//!
//! ## Host model
//!
//! Nothing here touches a real event loop or document. Every mutating method
//! returns [`MenuEffects`] describing what the host should do: attach or
//! detach listeners, run a layout pass, consume the triggering event, focus
//! or activate an item. Forward document-level input back into the `on_*`
//! methods while the menu is open.
//!
//! ## Wiring a trigger to a menu
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use flyout_menu::{MenuConfig, MenuController, NavKey};
//! use flyout_trigger::{PointerInput, TriggerConfig};
//!
//! // Item handles are host-defined; here they are plain ids.
//! let mut menu: MenuController<u32, &str> = MenuController::new(MenuConfig::default());
//! let mut trigger = menu.trigger(TriggerConfig::default());
//!
//! // A right click on the trigger element…
//! let response = trigger.on_context_request(&PointerInput::new(Point::new(100.0, 100.0)));
//! // …opens the menu, collecting the payload at open time.
//! let effects = menu.apply_trigger(&response, || "clicked the report row");
//! assert!(menu.is_visible());
//! assert!(effects.request_layout);
//! assert!(!effects.attach.is_empty());
//!
//! // The host's post-layout pass measures the container and the viewport.
//! menu.place(Size::new(100.0, 100.0), Size::new(1024.0, 768.0));
//! assert_eq!(menu.style().translate, Vec2::new(100.0, 100.0));
//!
//! // Items register as the presentation layer mounts them.
//! menu.register_item(Some(1));
//! menu.register_item(Some(2));
//!
//! // Arrow keys drive selection; Enter activates and dismisses.
//! assert_eq!(menu.on_key(NavKey::Down).select, Some(1));
//! let effects = menu.on_key(NavKey::Enter);
//! assert_eq!(effects.activate, Some(1));
//! assert!(!menu.is_visible());
//! assert!(menu.attached_listeners().is_empty());
//! ```
//!
//! ## Dismissal policy
//!
//! While open, the menu dismisses on an outside pointer-down or touch-start,
//! on Tab/Escape, optionally on the first scroll
//! ([`MenuConfig::hide_on_scroll`]), and after Enter. A fresh context-request
//! elsewhere in the document is not a distinct dismissal signal: the outside
//! pointer-down that precedes it already dismisses, and the container
//! swallows context-requests on itself
//! ([`MenuController::on_container_context_request`]).
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point
//!   math.
//!
//! This crate is `no_std`; registries spill to `alloc` via `smallvec`.

#![no_std]

mod bindings;
mod controller;
mod keys;
mod listeners;
mod style;

pub use bindings::{ItemBinding, MenuBinding, Role};
pub use controller::{MenuConfig, MenuController, MenuEffects};
pub use keys::{NavKey, key_code};
pub use listeners::ListenerSet;
pub use style::MenuStyle;

// The trigger half of the contract, re-exported so hosts wiring a menu do
// not need a direct `flyout_trigger` dependency.
pub use flyout_trigger::{Trigger, TriggerConfig, TriggerResponse};
