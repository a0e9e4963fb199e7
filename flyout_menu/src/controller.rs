// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu controller: one open menu's worth of state and transitions.

use flyout_position::{Direction, resolve};
use flyout_trigger::{Trigger, TriggerConfig, TriggerResponse};
use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::bindings::{ItemBinding, MenuBinding, Role};
use crate::keys::NavKey;
use crate::listeners::ListenerSet;
use crate::style::MenuStyle;

/// Controller-level configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MenuConfig {
    /// Use the right-to-left placement variant.
    pub rtl: bool,
    /// Dismiss the menu on the first scroll after opening.
    pub hide_on_scroll: bool,
}

/// What the host should do after a controller transition.
///
/// Fields compose: a single transition can detach listeners, emit an
/// activation, and request layout at once. `attach`/`detach` are the
/// listener-lifecycle edges of the visibility state machine; `select` asks
/// the host to highlight an item (conventionally by focusing it — hosts with
/// a different highlight scheme interpret it their own way); `activate` asks
/// the host to invoke the item as if clicked.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MenuEffects<K> {
    /// Document listeners to register.
    pub attach: ListenerSet,
    /// Document listeners to remove.
    pub detach: ListenerSet,
    /// Run a layout pass: measure the container and the viewport, then call
    /// [`MenuController::place`]. The flag coalesces — several state changes
    /// in one batch still need only one pass.
    pub request_layout: bool,
    /// Prevent the triggering event's default action.
    pub prevent_default: bool,
    /// Move selection highlight to this item.
    pub select: Option<K>,
    /// Programmatically activate this item.
    pub activate: Option<K>,
}

impl<K> Default for MenuEffects<K> {
    fn default() -> Self {
        Self {
            attach: ListenerSet::empty(),
            detach: ListenerSet::empty(),
            request_layout: false,
            prevent_default: false,
            select: None,
            activate: None,
        }
    }
}

impl<K: PartialEq> MenuEffects<K> {
    /// True when there is nothing for the host to do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attach.is_empty()
            && self.detach.is_empty()
            && !self.request_layout
            && !self.prevent_default
            && self.select.is_none()
            && self.activate.is_none()
    }
}

/// State machine for one context menu instance.
///
/// `K` is an opaque, copyable handle to a rendered menu item (whatever the
/// host uses to identify elements); `D` is the payload collected by the
/// trigger that opened the menu.
///
/// Every mutating method returns [`MenuEffects`] for the host to execute.
/// The controller owns the visibility flag, the anchor coordinates and
/// payload, the derived style and placement, the selectable-item registry,
/// and — critically — the set of document listeners currently attached,
/// which is nonempty exactly while the menu is visible.
#[derive(Clone, Debug)]
pub struct MenuController<K, D> {
    config: MenuConfig,
    visible: bool,
    coords: Point,
    data: Option<D>,
    selected: Option<usize>,
    selectables: SmallVec<[K; 8]>,
    placement: Option<Point>,
    menu_rect: Option<Rect>,
    attached: ListenerSet,
    layout_dirty: bool,
}

impl<K: Copy + Eq, D> MenuController<K, D> {
    /// Create a hidden controller with the given configuration.
    #[must_use]
    pub fn new(config: MenuConfig) -> Self {
        Self {
            config,
            visible: false,
            coords: Point::ZERO,
            data: None,
            selected: None,
            selectables: SmallVec::new(),
            placement: None,
            menu_rect: None,
            attached: ListenerSet::empty(),
            layout_dirty: false,
        }
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> MenuConfig {
        self.config
    }

    /// Whether the menu is visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The anchor coordinates of the last reveal.
    #[must_use]
    pub fn coords(&self) -> Point {
        self.coords
    }

    /// The payload collected when the menu was opened.
    #[must_use]
    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    /// Take the collected payload, leaving `None`.
    pub fn take_data(&mut self) -> Option<D> {
        self.data.take()
    }

    /// Index of the keyboard-selected item, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The currently registered selectable items, in registration order.
    #[must_use]
    pub fn selectables(&self) -> &[K] {
        &self.selectables
    }

    /// The document listeners currently attached on the controller's behalf.
    ///
    /// Empty exactly when the menu is hidden.
    #[must_use]
    pub fn attached_listeners(&self) -> ListenerSet {
        self.attached
    }

    /// True when a layout pass is owed; cleared by [`MenuController::place`].
    #[must_use]
    pub fn needs_layout(&self) -> bool {
        self.layout_dirty
    }

    /// Derived container style.
    ///
    /// The canonical hidden record whenever the menu is not visible or not
    /// yet placed, regardless of any previously computed position.
    #[must_use]
    pub fn style(&self) -> MenuStyle {
        match self.placement {
            Some(origin) if self.visible => MenuStyle::placed(origin),
            _ => MenuStyle::HIDDEN,
        }
    }

    /// Snapshot of the container binding.
    #[must_use]
    pub fn menu_binding(&self) -> MenuBinding {
        MenuBinding {
            style: self.style(),
            role: Role::Menu,
            tab_index: 0,
            hidden: !self.visible,
        }
    }

    /// Snapshot of the item binding.
    #[must_use]
    pub fn item_binding(&self) -> ItemBinding {
        ItemBinding::DEFAULT
    }

    /// Create a [`Trigger`] whose opens should be routed back through
    /// [`MenuController::apply_trigger`].
    #[must_use]
    pub fn trigger(&self, config: TriggerConfig) -> Trigger {
        Trigger::new(config)
    }

    /// Open the menu at `anchor` with the given payload.
    ///
    /// On the hidden→visible edge the full listener set is attached (scroll
    /// included only when configured). Revealing an already-visible menu just
    /// moves it: new anchor, new payload, fresh layout pass.
    pub fn reveal(&mut self, anchor: Point, data: D) -> MenuEffects<K> {
        self.coords = anchor;
        self.data = Some(data);

        let mut effects = MenuEffects::default();
        if !self.visible {
            self.visible = true;
            debug_assert!(
                self.attached.is_empty(),
                "listeners attached while hidden: {:?}",
                self.attached
            );
            self.attached = self.desired_listeners();
            effects.attach = self.attached;
        }
        self.layout_dirty = true;
        effects.request_layout = true;
        effects
    }

    /// Dismiss the menu. Idempotent.
    ///
    /// Resets keyboard selection, forgets the placement (so the style snaps
    /// back to the canonical hidden record), and detaches exactly the
    /// listeners that are attached — calling this twice detaches nothing the
    /// second time.
    pub fn hide(&mut self) -> MenuEffects<K> {
        let mut effects = MenuEffects::default();
        if self.visible {
            self.visible = false;
            effects.detach = self.attached;
            self.attached = ListenerSet::empty();
        }
        self.selected = None;
        self.placement = None;
        self.menu_rect = None;
        self.layout_dirty = false;
        effects
    }

    /// Programmatic visibility control.
    ///
    /// Showing this way reuses the current coordinates and payload.
    pub fn set_visible(&mut self, visible: bool) -> MenuEffects<K> {
        if !visible {
            return self.hide();
        }
        let mut effects = MenuEffects::default();
        if !self.visible {
            self.visible = true;
            self.attached = self.desired_listeners();
            effects.attach = self.attached;
            self.layout_dirty = true;
            effects.request_layout = true;
        }
        effects
    }

    /// Move the anchor. Re-requests layout while visible.
    pub fn set_coords(&mut self, coords: Point) -> MenuEffects<K> {
        self.coords = coords;
        let mut effects = MenuEffects::default();
        if self.visible {
            self.layout_dirty = true;
            effects.request_layout = true;
        }
        effects
    }

    /// Switch the layout direction. Re-requests layout while visible.
    pub fn set_rtl(&mut self, rtl: bool) -> MenuEffects<K> {
        let mut effects = MenuEffects::default();
        if self.config.rtl != rtl {
            self.config.rtl = rtl;
            if self.visible {
                self.layout_dirty = true;
                effects.request_layout = true;
            }
        }
        effects
    }

    /// The post-layout, pre-paint pass: resolve the final position.
    ///
    /// The host calls this with the container's measured size and the
    /// viewport size after the menu became measurable. A hidden or unmounted
    /// menu skips placement entirely. One call services any number of
    /// preceding state changes, using the latest coordinates.
    pub fn place(&mut self, menu_size: Size, viewport: Size) {
        if !self.visible {
            return;
        }
        let direction = if self.config.rtl {
            Direction::Rtl
        } else {
            Direction::Ltr
        };
        let origin = resolve(direction, menu_size, self.coords, viewport);
        self.placement = Some(origin);
        self.menu_rect = Some(Rect::from_origin_size(origin, menu_size));
        self.layout_dirty = false;
    }

    /// A document-level pointer-down was observed at `point`.
    ///
    /// Dismisses unless the point falls inside the placed menu. A menu that
    /// was never placed (no measured rect) neither dismisses nor panics.
    pub fn on_outside_pointer_down(&mut self, point: Point) -> MenuEffects<K> {
        self.outside_interaction(point)
    }

    /// A document-level touch-start was observed at `point`; same handling
    /// as [`MenuController::on_outside_pointer_down`].
    pub fn on_outside_touch_start(&mut self, point: Point) -> MenuEffects<K> {
        self.outside_interaction(point)
    }

    /// A document-level scroll was observed.
    ///
    /// One-shot when configured: the resulting hide detaches the scroll
    /// listener along with the rest, so nothing fires again until reopened.
    pub fn on_scroll(&mut self) -> MenuEffects<K> {
        if self.visible && self.config.hide_on_scroll {
            self.hide()
        } else {
            MenuEffects::default()
        }
    }

    /// A keyboard navigation intent while the menu is open.
    ///
    /// - `Tab` dismisses (unconsumed, focus moves on).
    /// - `Escape` dismisses and consumes.
    /// - `Up` consumes; moves selection up only from an index greater than 0.
    /// - `Down` consumes; moves selection down to at most the last item,
    ///   entering at index 0 when nothing is selected.
    /// - `Enter` activates the selected item if any, then dismisses.
    pub fn on_key(&mut self, key: NavKey) -> MenuEffects<K> {
        if !self.visible {
            return MenuEffects::default();
        }
        match key {
            NavKey::Tab => self.hide(),
            NavKey::Escape => {
                let mut effects = self.hide();
                effects.prevent_default = true;
                effects
            }
            NavKey::Up => {
                let mut effects = MenuEffects::default();
                effects.prevent_default = true;
                if let Some(index) = self.selected
                    && index > 0
                {
                    self.selected = Some(index - 1);
                    effects.select = Some(self.selectables[index - 1]);
                }
                effects
            }
            NavKey::Down => {
                let mut effects = MenuEffects::default();
                effects.prevent_default = true;
                let next = self.selected.map_or(0, |index| index + 1);
                if next < self.selectables.len() {
                    self.selected = Some(next);
                    effects.select = Some(self.selectables[next]);
                }
                effects
            }
            NavKey::Enter => {
                let activate = self.selected.map(|index| self.selectables[index]);
                let mut effects = self.hide();
                effects.activate = activate;
                effects
            }
        }
    }

    /// Register a mounted item, or clear the registry.
    ///
    /// Items register with `Some(handle)` as they mount, in order. The
    /// presentation layer registers `None` when items unmount, which clears
    /// the registry and resets selection — the registry is rebuilt fresh on
    /// the next render pass, keeping the selection index valid by
    /// construction.
    pub fn register_item(&mut self, item: Option<K>) {
        match item {
            Some(handle) => self.selectables.push(handle),
            None => {
                self.selectables.clear();
                self.selected = None;
            }
        }
    }

    /// A context-request on the menu container itself.
    ///
    /// Swallowed, so right-clicking the open menu does not pop a nested
    /// platform menu on top of it.
    pub fn on_container_context_request(&mut self) -> MenuEffects<K> {
        MenuEffects {
            prevent_default: true,
            ..MenuEffects::default()
        }
    }

    /// Fold a trigger's response into this controller.
    ///
    /// An `open` becomes a [`MenuController::reveal`] with the payload
    /// gathered *now* by `collect`, so it reflects current host state. The
    /// trigger's consume flags carry through; its timer requests
    /// (`arm`/`disarm`) stay in the response for the host to execute.
    pub fn apply_trigger(
        &mut self,
        response: &TriggerResponse,
        collect: impl FnOnce() -> D,
    ) -> MenuEffects<K> {
        let mut effects = match response.open {
            Some(anchor) => self.reveal(anchor, collect()),
            None => MenuEffects::default(),
        };
        effects.prevent_default |= response.prevent_default;
        effects
    }

    /// Release everything on host teardown.
    ///
    /// Detaches any attached listeners and clears the registry. Hosts must
    /// run this (and execute the effects) when the owning component goes
    /// away; dropping a visible controller without it leaks the host-side
    /// listeners.
    pub fn teardown(&mut self) -> MenuEffects<K> {
        let effects = self.hide();
        self.selectables.clear();
        self.data = None;
        effects
    }

    fn desired_listeners(&self) -> ListenerSet {
        let mut set = ListenerSet::BASE;
        if self.config.hide_on_scroll {
            set |= ListenerSet::SCROLL;
        }
        set
    }

    fn outside_interaction(&mut self, point: Point) -> MenuEffects<K> {
        if !self.visible {
            return MenuEffects::default();
        }
        match self.menu_rect {
            Some(rect) if !rect.contains(point) => self.hide(),
            _ => MenuEffects::default(),
        }
    }
}

impl<K: Copy + Eq, D> Default for MenuController<K, D> {
    fn default() -> Self {
        Self::new(MenuConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flyout_trigger::{HoldMode, PointerInput};
    use kurbo::Vec2;

    const VIEWPORT: Size = Size::new(1024.0, 768.0);
    const MENU_SIZE: Size = Size::new(100.0, 100.0);

    fn controller() -> MenuController<u32, &'static str> {
        MenuController::new(MenuConfig::default())
    }

    fn opened(items: &[u32]) -> MenuController<u32, &'static str> {
        let mut menu = controller();
        menu.reveal(Point::new(100.0, 100.0), "payload");
        menu.place(MENU_SIZE, VIEWPORT);
        for &item in items {
            menu.register_item(Some(item));
        }
        menu
    }

    #[test]
    fn reveal_then_hide_resets_visibility_and_selection() {
        let mut menu = opened(&[1, 2, 3]);
        menu.on_key(NavKey::Down);
        assert_eq!(menu.selected_index(), Some(0));

        menu.hide();
        assert!(!menu.is_visible());
        assert_eq!(menu.selected_index(), None);
    }

    #[test]
    fn hide_is_idempotent() {
        let mut menu = opened(&[]);
        let first = menu.hide();
        assert_eq!(first.detach, ListenerSet::BASE);
        let second = menu.hide();
        assert!(second.is_empty());
    }

    #[test]
    fn listeners_attach_on_reveal_and_detach_on_hide() {
        let mut menu = controller();
        assert!(menu.attached_listeners().is_empty());

        let shown = menu.reveal(Point::new(0.0, 0.0), "x");
        assert_eq!(shown.attach, ListenerSet::BASE);
        assert_eq!(menu.attached_listeners(), ListenerSet::BASE);

        let hidden = menu.hide();
        assert_eq!(hidden.detach, ListenerSet::BASE);
        assert!(menu.attached_listeners().is_empty());
    }

    #[test]
    fn scroll_listener_only_when_configured() {
        let mut menu: MenuController<u32, ()> = MenuController::new(MenuConfig {
            hide_on_scroll: true,
            ..MenuConfig::default()
        });
        let shown = menu.reveal(Point::new(0.0, 0.0), ());
        assert!(shown.attach.contains(ListenerSet::SCROLL));
        assert_eq!(shown.attach, ListenerSet::BASE | ListenerSet::SCROLL);
    }

    #[test]
    fn rapid_toggle_never_double_attaches() {
        let mut menu = controller();
        let first = menu.reveal(Point::new(0.0, 0.0), "a");
        assert_eq!(first.attach, ListenerSet::BASE);

        // Re-revealing while visible attaches nothing further.
        let second = menu.reveal(Point::new(10.0, 10.0), "b");
        assert!(second.attach.is_empty());
        assert!(second.request_layout);

        let hidden = menu.hide();
        assert_eq!(hidden.detach, ListenerSet::BASE);
        let third = menu.reveal(Point::new(0.0, 0.0), "c");
        assert_eq!(third.attach, ListenerSet::BASE);
    }

    #[test]
    fn style_is_canonical_hidden_until_placed() {
        let mut menu = controller();
        assert!(menu.style().is_hidden());

        menu.reveal(Point::new(100.0, 100.0), "x");
        // Visible but not yet measured: still hidden style, layout owed.
        assert!(menu.style().is_hidden());
        assert!(menu.needs_layout());

        menu.place(MENU_SIZE, VIEWPORT);
        assert!(!menu.needs_layout());
        assert_eq!(menu.style().translate, Vec2::new(100.0, 100.0));
        assert_eq!(menu.style().opacity, 1.0);
    }

    #[test]
    fn style_snaps_back_to_hidden_after_hide() {
        let mut menu = opened(&[]);
        assert!(!menu.style().is_hidden());
        menu.hide();
        assert_eq!(menu.style(), MenuStyle::HIDDEN);
    }

    #[test]
    fn place_clamps_to_viewport() {
        let mut menu = controller();
        menu.reveal(Point::new(1000.0, 700.0), "x");
        menu.place(MENU_SIZE, VIEWPORT);
        assert_eq!(menu.style().translate, Vec2::new(900.0, 600.0));
    }

    #[test]
    fn place_uses_latest_coords_after_a_batch() {
        let mut menu = controller();
        let first = menu.reveal(Point::new(10.0, 10.0), "x");
        let second = menu.set_coords(Point::new(300.0, 200.0));
        assert!(first.request_layout && second.request_layout);

        // The host services the coalesced request once, after layout.
        menu.place(MENU_SIZE, VIEWPORT);
        assert_eq!(menu.style().translate, Vec2::new(300.0, 200.0));
        assert!(!menu.needs_layout());
    }

    #[test]
    fn rtl_switch_repositions() {
        let mut menu = opened(&[]);
        menu.set_coords(Point::new(500.0, 100.0));
        menu.place(MENU_SIZE, VIEWPORT);
        assert_eq!(menu.style().translate, Vec2::new(500.0, 100.0));

        let switched = menu.set_rtl(true);
        assert!(switched.request_layout);
        menu.place(MENU_SIZE, VIEWPORT);
        // Right edge now anchors at the pointer.
        assert_eq!(menu.style().translate, Vec2::new(400.0, 100.0));

        // No change, no work.
        assert!(menu.set_rtl(true).is_empty());
    }

    #[test]
    fn place_while_hidden_is_skipped() {
        let mut menu = controller();
        menu.place(MENU_SIZE, VIEWPORT);
        assert!(menu.style().is_hidden());
    }

    #[test]
    fn outside_pointer_down_dismisses() {
        let mut menu = opened(&[]);
        let effects = menu.on_outside_pointer_down(Point::new(500.0, 500.0));
        assert_eq!(effects.detach, ListenerSet::BASE);
        assert!(!menu.is_visible());
    }

    #[test]
    fn inside_pointer_down_does_not_dismiss() {
        let mut menu = opened(&[]);
        // Placed at (100, 100) with size 100×100.
        let effects = menu.on_outside_pointer_down(Point::new(150.0, 150.0));
        assert!(effects.is_empty());
        assert!(menu.is_visible());
    }

    #[test]
    fn outside_touch_start_dismisses_like_pointer_down() {
        let mut menu = opened(&[]);
        menu.on_outside_touch_start(Point::new(900.0, 20.0));
        assert!(!menu.is_visible());
    }

    #[test]
    fn unplaced_menu_never_dismisses_on_outside_interaction() {
        let mut menu = controller();
        menu.reveal(Point::new(100.0, 100.0), "x");
        // No place() call: container never measured.
        let effects = menu.on_outside_pointer_down(Point::new(500.0, 500.0));
        assert!(effects.is_empty());
        assert!(menu.is_visible());
    }

    #[test]
    fn scroll_hides_once_when_configured() {
        let mut menu: MenuController<u32, ()> = MenuController::new(MenuConfig {
            hide_on_scroll: true,
            ..MenuConfig::default()
        });
        menu.reveal(Point::new(0.0, 0.0), ());
        let effects = menu.on_scroll();
        assert!(effects.detach.contains(ListenerSet::SCROLL));
        assert!(!menu.is_visible());

        // Listener gone; a stray second call is inert.
        assert!(menu.on_scroll().is_empty());
    }

    #[test]
    fn scroll_is_ignored_when_not_configured() {
        let mut menu = opened(&[]);
        assert!(menu.on_scroll().is_empty());
        assert!(menu.is_visible());
    }

    #[test]
    fn down_arrow_advances_to_last_item_and_stops() {
        let mut menu = opened(&[10, 20, 30]);
        for expected in [10, 20, 30] {
            let effects = menu.on_key(NavKey::Down);
            assert!(effects.prevent_default);
            assert_eq!(effects.select, Some(expected));
        }
        // Pinned at the last index.
        let effects = menu.on_key(NavKey::Down);
        assert!(effects.select.is_none());
        assert_eq!(menu.selected_index(), Some(2));
    }

    #[test]
    fn up_arrow_only_moves_from_index_greater_than_zero() {
        let mut menu = opened(&[10, 20]);
        // Nothing selected: up is consumed but moves nothing.
        let effects = menu.on_key(NavKey::Up);
        assert!(effects.prevent_default);
        assert!(effects.select.is_none());
        assert_eq!(menu.selected_index(), None);

        menu.on_key(NavKey::Down);
        menu.on_key(NavKey::Down);
        let effects = menu.on_key(NavKey::Up);
        assert_eq!(effects.select, Some(10));
        assert_eq!(menu.selected_index(), Some(0));

        // At index 0: stays put.
        assert!(menu.on_key(NavKey::Up).select.is_none());
        assert_eq!(menu.selected_index(), Some(0));
    }

    #[test]
    fn reopening_resets_selection_before_navigation() {
        let mut menu = opened(&[10, 20]);
        menu.on_key(NavKey::Down);
        menu.on_key(NavKey::Down);
        assert_eq!(menu.selected_index(), Some(1));

        menu.hide();
        menu.reveal(Point::new(0.0, 0.0), "again");
        assert_eq!(menu.selected_index(), None);
        menu.place(MENU_SIZE, VIEWPORT);
        assert_eq!(menu.on_key(NavKey::Down).select, Some(10));
    }

    #[test]
    fn escape_consumes_and_hides() {
        let mut menu = opened(&[]);
        let effects = menu.on_key(NavKey::Escape);
        assert!(effects.prevent_default);
        assert!(!menu.is_visible());
    }

    #[test]
    fn tab_hides_without_consuming() {
        let mut menu = opened(&[]);
        let effects = menu.on_key(NavKey::Tab);
        assert!(!effects.prevent_default);
        assert!(!menu.is_visible());
    }

    #[test]
    fn enter_activates_selection_then_hides() {
        let mut menu = opened(&[10, 20]);
        menu.on_key(NavKey::Down);
        let effects = menu.on_key(NavKey::Enter);
        assert_eq!(effects.activate, Some(10));
        assert!(!menu.is_visible());
    }

    #[test]
    fn enter_without_selection_just_hides() {
        let mut menu = opened(&[10, 20]);
        let effects = menu.on_key(NavKey::Enter);
        assert!(effects.activate.is_none());
        assert!(!menu.is_visible());
    }

    #[test]
    fn keys_are_ignored_while_hidden() {
        let mut menu = controller();
        assert!(menu.on_key(NavKey::Escape).is_empty());
        assert!(menu.on_key(NavKey::Down).is_empty());
    }

    #[test]
    fn registry_clear_resets_selection() {
        let mut menu = opened(&[10, 20]);
        menu.on_key(NavKey::Down);
        assert_eq!(menu.selected_index(), Some(0));

        menu.register_item(None);
        assert_eq!(menu.selected_index(), None);
        assert!(menu.selectables().is_empty());

        // Rebuilt registry navigates from scratch.
        menu.register_item(Some(99));
        assert_eq!(menu.on_key(NavKey::Down).select, Some(99));
    }

    #[test]
    fn container_context_request_is_swallowed() {
        let mut menu = opened(&[]);
        assert!(menu.on_container_context_request().prevent_default);
    }

    #[test]
    fn apply_trigger_collects_payload_at_open_time() {
        let mut menu = controller();
        let mut trigger = menu.trigger(TriggerConfig::default());

        let label = core::cell::Cell::new("before");
        let response = trigger.on_context_request(&PointerInput::new(Point::new(50.0, 60.0)));
        label.set("after");
        let effects = menu.apply_trigger(&response, || label.get());

        assert!(menu.is_visible());
        assert_eq!(menu.coords(), Point::new(50.0, 60.0));
        assert_eq!(menu.data(), Some(&"after"));
        assert!(effects.prevent_default);
        assert!(effects.request_layout);
    }

    #[test]
    fn apply_trigger_without_open_does_not_collect() {
        let mut menu = controller();
        let mut trigger = menu.trigger(TriggerConfig {
            hold_mouse: HoldMode::After(500),
            ..TriggerConfig::default()
        });
        let response = trigger.on_pointer_down(&PointerInput::new(Point::new(0.0, 0.0)));

        let effects = menu.apply_trigger(&response, || unreachable!("no open, no collect"));
        assert!(effects.is_empty());
        assert!(!menu.is_visible());
    }

    #[test]
    fn menu_binding_reflects_state() {
        let mut menu = controller();
        let binding = menu.menu_binding();
        assert_eq!(binding.role, Role::Menu);
        assert_eq!(binding.tab_index, 0);
        assert!(binding.hidden);
        assert!(binding.style.is_hidden());

        menu.reveal(Point::new(100.0, 100.0), "x");
        menu.place(MENU_SIZE, VIEWPORT);
        let binding = menu.menu_binding();
        assert!(!binding.hidden);
        assert_eq!(binding.style.translate, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn item_binding_is_constant() {
        let menu = controller();
        let binding = menu.item_binding();
        assert_eq!(binding.role, Role::MenuItem);
        assert_eq!(binding.tab_index, -1);
    }

    #[test]
    fn take_data_leaves_none() {
        let mut menu = opened(&[]);
        assert_eq!(menu.take_data(), Some("payload"));
        assert_eq!(menu.data(), None);
    }

    #[test]
    fn set_visible_round_trips_listeners() {
        let mut menu = opened(&[]);
        menu.hide();

        let shown = menu.set_visible(true);
        assert_eq!(shown.attach, ListenerSet::BASE);
        assert!(shown.request_layout);
        // Already visible: nothing more to do.
        assert!(menu.set_visible(true).is_empty());

        let hidden = menu.set_visible(false);
        assert_eq!(hidden.detach, ListenerSet::BASE);
    }

    #[test]
    fn teardown_detaches_and_clears() {
        let mut menu = opened(&[10, 20]);
        let effects = menu.teardown();
        assert_eq!(effects.detach, ListenerSet::BASE);
        assert!(menu.selectables().is_empty());
        assert_eq!(menu.data(), None);
        assert!(menu.attached_listeners().is_empty());
    }
}
