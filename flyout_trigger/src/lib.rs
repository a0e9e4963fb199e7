// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flyout Trigger: the per-trigger gesture state machine.
//!
//! A [`Trigger`] decides, from low-level pointer and touch input, when a
//! context menu should open and at what anchor point. It models three ways
//! in:
//!
//! - **Immediate open**: a context-request event (right click, menu key,
//!   long-press synthesized by the platform) opens the menu at the pointer,
//!   unless the trigger is disabled or shift-blocked.
//! - **Mouse hold-to-open**: with [`TriggerConfig::hold_mouse`] set to
//!   [`HoldMode::After`], a primary-button press arms a timer; releasing or
//!   leaving before expiry cancels it, expiry opens at the original press
//!   position.
//! - **Touch hold-to-open**: the same for touch, cancelled by touch
//!   end/cancel/move. A completed touch hold marks the gesture handled so the
//!   trailing touch-end can suppress its own default action, and a genuine
//!   context-request arriving while a touch hold is pending is swallowed
//!   rather than opening the menu twice.
//!
//! ## Host model
//!
//! The trigger never schedules real timers or touches an event loop. Each
//! `on_*` method returns a [`TriggerResponse`] describing what the host
//! should do: open the menu at an anchor, arm or disarm a single-shot timer
//! (identified by a [`HoldToken`]), and/or consume the triggering event.
//! When the host's timer fires it calls [`Trigger::on_hold_expired`] with the
//! token it was given; tokens carry a generation, so a fire that raced a
//! cancellation is a safe no-op.
//!
//! At most one hold is pending per [`HoldKind`] at any time: re-arming
//! disarms the stale token in the same response (apply
//! [`TriggerResponse::disarm`] before [`TriggerResponse::arm`]).
//!
//! Payload collection stays with the host: when a response carries
//! [`TriggerResponse::open`], gather whatever data the menu should show *at
//! that moment* and pass both to your menu controller, so the payload
//! reflects current state rather than bind-time state.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use flyout_trigger::{
//!     HoldMode, PointerButton, PointerInput, Trigger, TriggerConfig,
//! };
//!
//! let mut trigger = Trigger::new(TriggerConfig {
//!     hold_mouse: HoldMode::After(500),
//!     ..TriggerConfig::default()
//! });
//!
//! // Press and hold the primary button…
//! let press = PointerInput::new(Point::new(40.0, 60.0));
//! let armed = trigger.on_pointer_down(&press).arm.expect("hold should arm");
//! assert_eq!(armed.delay_ms, 500);
//!
//! // …and 500ms later the host's timer fires.
//! let fired = trigger.on_hold_expired(armed.token);
//! assert_eq!(fired.open, Some(Point::new(40.0, 60.0)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point
//!   math.
//!
//! This crate is `no_std`.

#![no_std]

use bitflags::bitflags;
use flyout_position::anchor::{pointer_anchor, touch_anchor};
use kurbo::{Point, Vec2};

/// Which mouse button a pointer event carries.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The primary (usually left) button. Only this button arms mouse holds.
    #[default]
    Primary,
    /// The secondary (usually right) button.
    Secondary,
    /// Any other button.
    Other,
}

/// A pointer event as forwarded by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerInput {
    /// Viewport-space position of the pointer.
    pub position: Point,
    /// Button carried by the event.
    pub button: PointerButton,
    /// Whether the shift modifier was held.
    pub shift: bool,
    /// Whether the event's default action can still be prevented.
    pub cancelable: bool,
}

impl PointerInput {
    /// A primary-button, unmodified, cancelable pointer event at `position`.
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            shift: false,
            cancelable: true,
        }
    }
}

/// A touch event as forwarded by the host.
///
/// Only the first touch point participates in anchor extraction; the list may
/// be empty (for example a `touchend` with no remaining contacts).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchInput<'a> {
    /// Active touch points in viewport space.
    pub touches: &'a [Point],
    /// Whether the event's default action can still be prevented.
    pub cancelable: bool,
}

impl<'a> TouchInput<'a> {
    /// A cancelable touch event with the given contact points.
    #[must_use]
    pub fn new(touches: &'a [Point]) -> Self {
        Self {
            touches,
            cancelable: true,
        }
    }
}

/// Hold-to-open configuration for one input modality.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HoldMode {
    /// No hold semantics: only a context-request opens the menu.
    #[default]
    Off,
    /// A press held for this many milliseconds opens the menu.
    After(u64),
}

impl HoldMode {
    /// The hold delay, or `None` when holds are off.
    #[must_use]
    pub fn delay_ms(self) -> Option<u64> {
        match self {
            Self::Off => None,
            Self::After(ms) => Some(ms),
        }
    }
}

/// Per-trigger configuration.
///
/// Immutable per interaction in spirit: a [`Trigger`] reads it live, so
/// flipping [`TriggerConfig::disable`] takes effect on the next event and on
/// holds already in flight.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TriggerConfig {
    /// Suppress all menu opening from this trigger.
    pub disable: bool,
    /// Suppress opening when the shift modifier is held, preserving the
    /// platform's native context menu for power users.
    pub disable_if_shift_pressed: bool,
    /// Mouse hold-to-open mode.
    pub hold_mouse: HoldMode,
    /// Touch hold-to-open mode.
    pub hold_touch: HoldMode,
    /// Per-axis offset subtracted from event coordinates when computing the
    /// menu anchor.
    pub offset: Vec2,
}

bitflags! {
    /// Which event handlers a host should attach for a trigger.
    ///
    /// The context-request handler is always present; mouse and touch
    /// handlers only when the corresponding hold mode is enabled, so
    /// triggers without hold semantics never intercept those events.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct TriggerBindings: u8 {
        /// Context-request events ([`Trigger::on_context_request`]).
        const CONTEXT_REQUEST = 1 << 0;
        /// Pointer press ([`Trigger::on_pointer_down`]).
        const POINTER_DOWN = 1 << 1;
        /// Pointer release ([`Trigger::on_pointer_up`]).
        const POINTER_UP = 1 << 2;
        /// Pointer leaving the element ([`Trigger::on_pointer_out`]).
        const POINTER_OUT = 1 << 3;
        /// Touch start ([`Trigger::on_touch_start`]).
        const TOUCH_START = 1 << 4;
        /// Touch end ([`Trigger::on_touch_end`]).
        const TOUCH_END = 1 << 5;
        /// Touch cancel ([`Trigger::on_touch_cancel`]).
        const TOUCH_CANCEL = 1 << 6;
        /// Touch move ([`Trigger::on_touch_move`]).
        const TOUCH_MOVE = 1 << 7;
    }
}

/// Gesture kind of a hold timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoldKind {
    /// A mouse-press hold.
    Mouse,
    /// A touch-start hold.
    Touch,
}

/// Handle to one armed hold timer.
///
/// The generation distinguishes a live timer from one that was already
/// cancelled or replaced; [`Trigger::on_hold_expired`] ignores stale tokens,
/// which makes fire/cancel races and double cancellation safe no-ops.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HoldToken {
    kind: HoldKind,
    generation: u32,
}

impl HoldToken {
    /// The gesture kind this token belongs to.
    #[must_use]
    pub fn kind(self) -> HoldKind {
        self.kind
    }
}

/// A request for the host to schedule a single-shot timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HoldRequest {
    /// Token to hand back via [`Trigger::on_hold_expired`] when the timer
    /// fires.
    pub token: HoldToken,
    /// Delay in milliseconds.
    pub delay_ms: u64,
}

/// What the host should do after forwarding an event to a [`Trigger`].
///
/// Apply `disarm` before `arm`: a restarted hold carries both, and the stale
/// timer must be cancelled before its replacement is scheduled.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TriggerResponse {
    /// Open the menu at this anchor (gather the payload now).
    pub open: Option<Point>,
    /// Schedule a single-shot timer.
    pub arm: Option<HoldRequest>,
    /// Cancel a previously scheduled timer.
    pub disarm: Option<HoldToken>,
    /// Prevent the event's default action.
    pub prevent_default: bool,
    /// Stop the event's propagation.
    pub stop_propagation: bool,
}

impl TriggerResponse {
    /// True when the response asks the host to do nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A hold that has been armed but has not yet fired or been cancelled.
#[derive(Copy, Clone, Debug)]
struct PendingHold {
    generation: u32,
    /// Anchor captured from the press event, already offset-adjusted.
    anchor: Point,
    /// Shift state captured at press time, checked again at expiry.
    shift: bool,
}

/// Gesture state machine for one trigger element.
///
/// Create one per element that should open the menu, forward that element's
/// events into the `on_*` methods, and execute the returned
/// [`TriggerResponse`]s. [`Trigger::bindings`] describes which handlers are
/// worth attaching for the current configuration.
#[derive(Clone, Debug)]
pub struct Trigger {
    config: TriggerConfig,
    pending_mouse: Option<PendingHold>,
    pending_touch: Option<PendingHold>,
    /// Monotonic counter stamping each armed hold.
    generation: u32,
    /// Set when a touch hold fired, so the trailing touch-end suppresses its
    /// own default action instead of synthesizing a second open.
    touch_handled: bool,
}

impl Trigger {
    /// Create a trigger with the given configuration.
    #[must_use]
    pub fn new(config: TriggerConfig) -> Self {
        Self {
            config,
            pending_mouse: None,
            pending_touch: None,
            generation: 0,
            touch_handled: false,
        }
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Holds already in flight are judged against the new configuration at
    /// expiry, so disabling takes effect immediately.
    pub fn set_config(&mut self, config: TriggerConfig) {
        self.config = config;
    }

    /// Which handlers the host should attach for this trigger.
    #[must_use]
    pub fn bindings(&self) -> TriggerBindings {
        let mut bindings = TriggerBindings::CONTEXT_REQUEST;
        if self.config.hold_mouse != HoldMode::Off {
            bindings |= TriggerBindings::POINTER_DOWN
                | TriggerBindings::POINTER_UP
                | TriggerBindings::POINTER_OUT;
        }
        if self.config.hold_touch != HoldMode::Off {
            bindings |= TriggerBindings::TOUCH_START
                | TriggerBindings::TOUCH_END
                | TriggerBindings::TOUCH_CANCEL
                | TriggerBindings::TOUCH_MOVE;
        }
        bindings
    }

    /// True when a hold of the given kind is armed.
    #[must_use]
    pub fn is_hold_pending(&self, kind: HoldKind) -> bool {
        match kind {
            HoldKind::Mouse => self.pending_mouse.is_some(),
            HoldKind::Touch => self.pending_touch.is_some(),
        }
    }

    /// A context-request event (right click or platform long-press).
    ///
    /// While a touch hold is pending on an enabled trigger, the request is
    /// swallowed (default prevented when cancelable) so the platform's
    /// synthesized context-request cannot open the menu a second time.
    /// Otherwise this is the immediate open path; see [`Trigger::request_open`].
    pub fn on_context_request(&mut self, input: &PointerInput) -> TriggerResponse {
        if self.pending_touch.is_some() && !self.config.disable {
            return TriggerResponse {
                prevent_default: input.cancelable,
                ..TriggerResponse::default()
            };
        }
        self.request_open(input)
    }

    /// The raw open handler, for advanced manual wiring.
    ///
    /// Opens at the offset-adjusted pointer position unless the trigger is
    /// disabled, or shift-blocked while shift is held. An open consumes the
    /// event: default prevented when cancelable, propagation stopped.
    pub fn request_open(&self, input: &PointerInput) -> TriggerResponse {
        if !self.may_open(input.shift) {
            return TriggerResponse::default();
        }
        TriggerResponse {
            open: Some(pointer_anchor(input.position, self.config.offset)),
            prevent_default: input.cancelable,
            stop_propagation: true,
            ..TriggerResponse::default()
        }
    }

    /// A pointer press on the trigger element.
    ///
    /// Arms a mouse hold when configured and the press is primary-button.
    pub fn on_pointer_down(&mut self, input: &PointerInput) -> TriggerResponse {
        let Some(delay_ms) = self.config.hold_mouse.delay_ms() else {
            return TriggerResponse::default();
        };
        if input.button != PointerButton::Primary {
            return TriggerResponse::default();
        }
        let anchor = pointer_anchor(input.position, self.config.offset);
        self.arm(HoldKind::Mouse, anchor, input.shift, delay_ms)
    }

    /// A pointer release on the trigger element.
    ///
    /// Cancels a pending mouse hold when the release is primary-button.
    pub fn on_pointer_up(&mut self, input: &PointerInput) -> TriggerResponse {
        if input.button != PointerButton::Primary {
            return TriggerResponse::default();
        }
        TriggerResponse {
            disarm: self.disarm(HoldKind::Mouse),
            ..TriggerResponse::default()
        }
    }

    /// The pointer left the trigger element; cancels a pending mouse hold.
    pub fn on_pointer_out(&mut self) -> TriggerResponse {
        TriggerResponse {
            disarm: self.disarm(HoldKind::Mouse),
            ..TriggerResponse::default()
        }
    }

    /// A touch start on the trigger element.
    ///
    /// Clears the handled flag from any previous gesture and arms a touch
    /// hold when configured and a contact point exists.
    pub fn on_touch_start(&mut self, input: &TouchInput<'_>) -> TriggerResponse {
        self.touch_handled = false;
        let Some(delay_ms) = self.config.hold_touch.delay_ms() else {
            return TriggerResponse::default();
        };
        let Some(anchor) = touch_anchor(input.touches, self.config.offset) else {
            return TriggerResponse::default();
        };
        self.arm(HoldKind::Touch, anchor, false, delay_ms)
    }

    /// A touch end on the trigger element.
    ///
    /// Cancels a pending touch hold. When a hold already fired for this
    /// gesture, the event's default action is prevented so the platform does
    /// not synthesize a click or context-request on top of the open menu.
    pub fn on_touch_end(&mut self, input: &TouchInput<'_>) -> TriggerResponse {
        self.touch_release(input)
    }

    /// A touch cancel; same handling as [`Trigger::on_touch_end`].
    pub fn on_touch_cancel(&mut self, input: &TouchInput<'_>) -> TriggerResponse {
        self.touch_release(input)
    }

    /// A touch move; cancels a pending touch hold (moving is not holding).
    pub fn on_touch_move(&mut self, input: &TouchInput<'_>) -> TriggerResponse {
        self.touch_release(input)
    }

    /// The host's hold timer fired.
    ///
    /// Stale tokens (cancelled or replaced since arming) are ignored. A live
    /// expiry runs the open check against the current configuration and the
    /// shift state captured at press time, and opens at the press anchor. A
    /// touch expiry marks the gesture handled.
    pub fn on_hold_expired(&mut self, token: HoldToken) -> TriggerResponse {
        let slot = match token.kind {
            HoldKind::Mouse => &mut self.pending_mouse,
            HoldKind::Touch => &mut self.pending_touch,
        };
        // A stale token must not clear a newer hold occupying the same slot.
        let pending = match slot {
            Some(pending) if pending.generation == token.generation => {
                let pending = *pending;
                *slot = None;
                pending
            }
            _ => return TriggerResponse::default(),
        };

        if !self.may_open(pending.shift) {
            return TriggerResponse::default();
        }
        if token.kind == HoldKind::Touch {
            self.touch_handled = true;
        }
        TriggerResponse {
            open: Some(pending.anchor),
            ..TriggerResponse::default()
        }
    }

    fn may_open(&self, shift: bool) -> bool {
        if self.config.disable {
            return false;
        }
        !(self.config.disable_if_shift_pressed && shift)
    }

    fn arm(&mut self, kind: HoldKind, anchor: Point, shift: bool, delay_ms: u64) -> TriggerResponse {
        // Replacing a still-pending hold must cancel it first; the host sees
        // both in one response and applies disarm before arm.
        let disarm = self.disarm(kind);
        self.generation = self.generation.wrapping_add(1);
        let pending = PendingHold {
            generation: self.generation,
            anchor,
            shift,
        };
        let token = HoldToken {
            kind,
            generation: self.generation,
        };
        match kind {
            HoldKind::Mouse => self.pending_mouse = Some(pending),
            HoldKind::Touch => self.pending_touch = Some(pending),
        }
        TriggerResponse {
            arm: Some(HoldRequest { token, delay_ms }),
            disarm,
            stop_propagation: true,
            ..TriggerResponse::default()
        }
    }

    fn disarm(&mut self, kind: HoldKind) -> Option<HoldToken> {
        let pending = match kind {
            HoldKind::Mouse => self.pending_mouse.take(),
            HoldKind::Touch => self.pending_touch.take(),
        };
        pending.map(|p| HoldToken {
            kind,
            generation: p.generation,
        })
    }

    fn touch_release(&mut self, input: &TouchInput<'_>) -> TriggerResponse {
        TriggerResponse {
            disarm: self.disarm(HoldKind::Touch),
            prevent_default: self.touch_handled && input.cancelable,
            ..TriggerResponse::default()
        }
    }
}

impl Default for Trigger {
    fn default() -> Self {
        Self::new(TriggerConfig::default())
    }
}
