// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The popover state machine.
//!
//! ## States
//!
//! A popover is either hidden or visible. Hidden is the initial state; there is
//! no terminal state. While hidden in hover mode, a popover may additionally be
//! *pending*: the pointer entered the anchor and the show delay is running.
//!
//! Hidden means unmounted. The overlay's position, measurements, and resize
//! observation are dropped on every hide and re-established on every show.
//!
//! ## Hover mode
//!
//! 1) [`Popover::pointer_enter`] schedules a show `delay_ms` later and starts
//!    tracking the pointer.
//! 2) [`Popover::pointer_move`] samples are throttled; the trailing sample of a
//!    burst is kept.
//! 3) [`Popover::tick`] fires the scheduled show if the latest sample is still
//!    inside the anchor (widened by the hover tolerance).
//! 4) Once visible, a sample outside the anchor hides the popover unless
//!    continued hover is enabled and the pointer is in the
//!    [retention region](understory_placement::retention_contains).
//!
//! ## Click mode
//!
//! Pointer-down on the anchor shows the popover and attaches a document-level
//! pointer-down listener that ignores the event that opened it. Any later
//! pointer-down outside the overlay hides it.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use understory_popover::{Popover, PopoverConfig, PopoverEvent, PopoverHost};
//!
//! struct Host {
//!     overlay: Option<Rect>,
//! }
//!
//! impl PopoverHost<u32> for Host {
//!     fn element_rect(&self, _id: &u32) -> Option<Rect> {
//!         Some(Rect::from_origin_size((100.0, 100.0), (200.0, 40.0)))
//!     }
//!     fn overlay_rect(&self) -> Option<Rect> {
//!         self.overlay
//!     }
//!     fn viewport(&self) -> Size {
//!         Size::new(1024.0, 768.0)
//!     }
//!     fn set_overlay_max_width(&mut self, _max_width: Option<f64>) {}
//!     fn place_overlay(&mut self, origin: Point) {
//!         self.overlay = Some(Rect::from_origin_size(origin, (150.0, 60.0)));
//!     }
//! }
//!
//! let mut host = Host { overlay: None };
//! let mut popover = Popover::anchored_to(1_u32, PopoverConfig::default()).unwrap();
//!
//! let events = popover.pointer_down(Point::new(150.0, 120.0), &mut host);
//! assert!(popover.is_visible());
//! assert!(events.contains(&PopoverEvent::Shown));
//!
//! // The host mounts the overlay, then lets the popover place it.
//! host.overlay = Some(Rect::from_origin_size((0.0, 0.0), (150.0, 60.0)));
//! let _ = popover.overlay_mounted(&mut host);
//! assert_eq!(popover.position(), Some(Point::new(125.0, 32.0)));
//!
//! let _ = popover.pointer_down(Point::new(900.0, 700.0), &mut host);
//! assert!(!popover.is_visible());
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use log::{debug, trace};
use understory_placement::{
    Placement, PlacementRequest, Resolved, contains_inclusive, first_pass, retention_contains,
    second_pass, within_padded,
};

use crate::anchor::AnchorSource;
use crate::config::{ConfigError, PopoverConfig, Trigger, validate_max_width};
use crate::host::{PORTAL_ROOT_ID, PopoverHost};
use crate::throttle::Throttle;
use crate::types::{Background, Indicator, OverlayStyle, PopoverEvent, Subscriptions};

#[derive(Clone, Debug)]
struct HoverIntent {
    deadline: Option<u64>,
    pointer: Option<Point>,
    throttle: Throttle<Point>,
}

impl HoverIntent {
    fn new(throttle_ms: u64) -> Self {
        Self {
            deadline: None,
            pointer: None,
            throttle: Throttle::new(throttle_ms),
        }
    }

    fn reset(&mut self) {
        self.deadline = None;
        self.pointer = None;
        self.throttle.reset();
    }
}

/// A popover anchored to an element, with its own visibility and placement state.
///
/// `K` identifies elements in the host toolkit; `C` is the overlay content the
/// host renders.
#[derive(Clone, Debug)]
pub struct Popover<K, C = ()> {
    anchor: AnchorSource<K>,
    config: PopoverConfig,
    content: C,
    visible: bool,
    subscriptions: Subscriptions,
    placed: Option<Resolved>,
    overlay: Option<Rect>,
    intent: HoverIntent,
    ignore_next_pointer_down: bool,
}

impl<K: Copy> Popover<K, ()> {
    /// Create a popover, anchored to `anchor` if given or to wrapped children otherwise.
    pub fn new(anchor: Option<K>, config: PopoverConfig) -> Result<Self, ConfigError> {
        Self::from_source(AnchorSource::from_option(anchor), config)
    }

    /// Create a popover anchored to an external element.
    pub fn anchored_to(anchor: K, config: PopoverConfig) -> Result<Self, ConfigError> {
        Self::from_source(AnchorSource::External(anchor), config)
    }

    /// Create a popover anchored to a wrapper container around its children.
    ///
    /// The popover is inert until [`wrapper_mounted`](Popover::wrapper_mounted).
    pub fn wrapping(config: PopoverConfig) -> Result<Self, ConfigError> {
        Self::from_source(AnchorSource::Wrapped { container: None }, config)
    }

    fn from_source(anchor: AnchorSource<K>, config: PopoverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            anchor,
            intent: HoverIntent::new(config.throttle_ms),
            config,
            content: (),
            visible: false,
            subscriptions: Subscriptions::empty(),
            placed: None,
            overlay: None,
            ignore_next_pointer_down: false,
        })
    }
}

impl<K: Copy, C> Popover<K, C> {
    /// Attach overlay content.
    pub fn with_content<D>(self, content: D) -> Popover<K, D> {
        Popover {
            anchor: self.anchor,
            config: self.config,
            content,
            visible: self.visible,
            subscriptions: self.subscriptions,
            placed: self.placed,
            overlay: self.overlay,
            intent: self.intent,
            ignore_next_pointer_down: self.ignore_next_pointer_down,
        }
    }

    /// The overlay content.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Mutable access to the overlay content.
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// The current configuration.
    pub fn config(&self) -> &PopoverConfig {
        &self.config
    }

    /// The anchoring mode.
    pub fn anchor_source(&self) -> &AnchorSource<K> {
        &self.anchor
    }

    /// The element the popover is anchored to, if resolved.
    pub fn anchor(&self) -> Option<K> {
        self.anchor.resolve()
    }

    /// Whether the overlay is shown (and mounted).
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a hover-triggered show is scheduled.
    pub fn is_pending(&self) -> bool {
        self.intent.deadline.is_some()
    }

    /// Resources the host must currently keep attached.
    pub fn subscriptions(&self) -> Subscriptions {
        self.subscriptions
    }

    /// The last computed placement, while visible.
    pub fn placement(&self) -> Option<&Resolved> {
        self.placed.as_ref()
    }

    /// Top-left of the overlay, while visible and placed.
    pub fn position(&self) -> Option<Point> {
        self.placed.map(|p| p.origin)
    }

    /// Where to draw the indicator, while visible and placed.
    pub fn indicator(&self) -> Option<Indicator> {
        self.placed.as_ref().map(Indicator::from_resolved)
    }

    /// Styling inputs for the overlay.
    pub fn style(&self) -> OverlayStyle {
        OverlayStyle {
            max_width: self.config.max_width,
            background: if self.config.secondary_background {
                Background::Secondary
            } else {
                Background::Primary
            },
        }
    }

    /// The next timestamp at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.intent.deadline, self.intent.throttle.next_flush()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Record the mounted wrapper container (wrapped mode only).
    pub fn wrapper_mounted(&mut self, container: K) {
        if self.anchor.attach(container) {
            trace!("popover: wrapper container mounted");
        }
    }

    /// Forget the wrapper container, hiding the popover if it was shown.
    pub fn wrapper_unmounted(&mut self) -> Vec<PopoverEvent> {
        if self.anchor.detach() {
            self.hide()
        } else {
            Vec::new()
        }
    }

    /// The pointer entered the anchor.
    pub fn pointer_enter(&mut self, now: u64, pos: Point) -> Vec<PopoverEvent> {
        let mut out = Vec::new();
        if self.config.trigger != Trigger::Hover
            || self.visible
            || self.is_pending()
            || self.anchor.resolve().is_none()
        {
            return out;
        }
        let deadline = now.saturating_add(self.config.delay_ms);
        self.intent.deadline = Some(deadline);
        self.intent.pointer = Some(pos);
        self.subscribe(Subscriptions::POINTER_MOVE, &mut out);
        debug!("popover: hover intent, show due at {deadline}");
        out
    }

    /// The pointer left the anchor. Cancels a scheduled show.
    pub fn pointer_leave(&mut self) -> Vec<PopoverEvent> {
        let mut out = Vec::new();
        self.cancel_intent(&mut out);
        out
    }

    /// Document-level pointer movement.
    pub fn pointer_move<H: PopoverHost<K>>(
        &mut self,
        now: u64,
        pos: Point,
        host: &mut H,
    ) -> Vec<PopoverEvent> {
        if !self.subscriptions.contains(Subscriptions::POINTER_MOVE) {
            return Vec::new();
        }
        let Some(sample) = self.intent.throttle.offer(now, pos) else {
            trace!("popover: pointer sample throttled at {now}");
            return Vec::new();
        };
        if self.visible {
            self.check_retention(sample, host)
        } else {
            self.intent.pointer = Some(sample);
            Vec::new()
        }
    }

    /// Advance time: flush trailing pointer samples and fire a due show.
    pub fn tick<H: PopoverHost<K>>(&mut self, now: u64, host: &mut H) -> Vec<PopoverEvent> {
        let mut out = Vec::new();
        if self.visible {
            if let Some(sample) = self.intent.throttle.flush(now) {
                out.extend(self.check_retention(sample, host));
            }
            return out;
        }

        let Some(deadline) = self.intent.deadline else {
            return out;
        };
        if now < deadline {
            if let Some(sample) = self.intent.throttle.flush(now) {
                self.intent.pointer = Some(sample);
            }
            return out;
        }

        self.intent.deadline = None;
        if let Some(sample) = self.intent.throttle.take_pending() {
            self.intent.pointer = Some(sample);
        }
        let anchor = self.anchor_rect(host);
        let still_inside = match (anchor, self.intent.pointer) {
            (Some(a), Some(p)) => within_padded(a, self.config.hover_tolerance, p),
            _ => false,
        };
        if still_inside {
            out.extend(self.open(host));
        } else {
            debug!("popover: pointer gone when hover delay elapsed");
            self.intent.reset();
            self.unsubscribe(Subscriptions::POINTER_MOVE, &mut out);
        }
        out
    }

    /// The anchor's own pointer-down handler.
    pub fn anchor_pointer_down<H: PopoverHost<K>>(&mut self, host: &mut H) -> Vec<PopoverEvent> {
        if self.config.trigger != Trigger::Click
            || self.visible
            || self.anchor.resolve().is_none()
        {
            return Vec::new();
        }
        let out = self.open(host);
        // The document listener sees the opening event after this handler.
        self.ignore_next_pointer_down = true;
        out
    }

    /// The document-level pointer-down listener.
    pub fn document_pointer_down<H: PopoverHost<K>>(
        &mut self,
        pos: Point,
        host: &mut H,
    ) -> Vec<PopoverEvent> {
        if !self.subscriptions.contains(Subscriptions::POINTER_DOWN) {
            return Vec::new();
        }
        if core::mem::take(&mut self.ignore_next_pointer_down) {
            trace!("popover: ignoring the pointer-down that opened the popover");
            return Vec::new();
        }
        let Some(overlay) = host.overlay_rect().or(self.overlay) else {
            return Vec::new();
        };
        if contains_inclusive(overlay, pos) {
            return Vec::new();
        }
        debug!("popover: pointer-down outside overlay");
        self.close()
    }

    /// Route one pointer-down through the anchor handler (when over the anchor)
    /// and then the document listener.
    pub fn pointer_down<H: PopoverHost<K>>(&mut self, pos: Point, host: &mut H) -> Vec<PopoverEvent> {
        let mut out = Vec::new();
        let over_anchor = self
            .anchor_rect(host)
            .is_some_and(|a| contains_inclusive(a, pos));
        if over_anchor {
            out.extend(self.anchor_pointer_down(host));
        }
        out.extend(self.document_pointer_down(pos, host));
        out
    }

    /// Show the popover regardless of trigger.
    pub fn show<H: PopoverHost<K>>(&mut self, host: &mut H) -> Vec<PopoverEvent> {
        if self.visible {
            return Vec::new();
        }
        self.intent.deadline = None;
        let out = self.open(host);
        self.ignore_next_pointer_down = false;
        out
    }

    /// Hide the popover and cancel any scheduled show.
    pub fn hide(&mut self) -> Vec<PopoverEvent> {
        let mut out = self.close();
        self.cancel_intent(&mut out);
        out
    }

    /// Release every resource. The popover can be reused afterwards.
    pub fn teardown(&mut self) -> Vec<PopoverEvent> {
        let mut out = self.hide();
        self.unsubscribe(self.subscriptions, &mut out);
        self.intent.reset();
        out
    }

    /// The host mounted the overlay; place it.
    pub fn overlay_mounted<H: PopoverHost<K>>(&mut self, host: &mut H) -> Vec<PopoverEvent> {
        self.reposition(host)
    }

    /// The overlay's size changed.
    pub fn overlay_resized<H: PopoverHost<K>>(&mut self, host: &mut H) -> Vec<PopoverEvent> {
        if !self.subscriptions.contains(Subscriptions::RESIZE_OVERLAY) {
            return Vec::new();
        }
        self.reposition(host)
    }

    /// The anchor's size or position changed.
    pub fn anchor_resized<H: PopoverHost<K>>(&mut self, host: &mut H) -> Vec<PopoverEvent> {
        if !self.subscriptions.contains(Subscriptions::RESIZE_ANCHOR) {
            return Vec::new();
        }
        self.reposition(host)
    }

    /// Change the max width, repositioning a visible overlay.
    pub fn set_max_width<H: PopoverHost<K>>(
        &mut self,
        max_width: Option<f64>,
        host: &mut H,
    ) -> Result<Vec<PopoverEvent>, ConfigError> {
        validate_max_width(max_width)?;
        if self.config.max_width == max_width {
            return Ok(Vec::new());
        }
        self.config.max_width = max_width;
        Ok(self.reposition(host))
    }

    /// Change the placement, repositioning a visible overlay.
    pub fn set_placement<H: PopoverHost<K>>(
        &mut self,
        placement: Placement,
        host: &mut H,
    ) -> Vec<PopoverEvent> {
        if self.config.placement == placement {
            return Vec::new();
        }
        self.config.placement = placement;
        self.reposition(host)
    }

    /// Recompute the overlay position.
    ///
    /// Silently does nothing while hidden or while the anchor or overlay cannot
    /// be measured; a later trigger retries.
    pub fn reposition<H: PopoverHost<K>>(&mut self, host: &mut H) -> Vec<PopoverEvent> {
        if !self.visible {
            return Vec::new();
        }
        let Some(anchor) = self.anchor_rect(host) else {
            return Vec::new();
        };
        host.set_overlay_max_width(self.config.max_width);
        let Some(overlay) = host.overlay_rect() else {
            return Vec::new();
        };
        let viewport = host.viewport();
        let placement = self.config.placement;

        let estimate = first_pass(&PlacementRequest {
            anchor,
            overlay: overlay.size(),
            placement,
            viewport,
            gap: self.config.gap,
        });
        host.place_overlay(estimate.origin);
        let measured = host.overlay_rect().unwrap_or_else(|| {
            Rect::from_origin_size(estimate.origin, overlay.size())
        });
        let resolved = second_pass(&estimate, anchor, measured, placement, viewport);

        debug!(
            "popover: placed {placement} at ({:.1}, {:.1}), pin {:?}, indicator {:.1}",
            resolved.origin.x, resolved.origin.y, estimate.pin, resolved.indicator_offset
        );
        self.overlay = Some(measured);
        self.placed = Some(resolved);
        alloc::vec![PopoverEvent::Repositioned(resolved)]
    }

    fn anchor_rect<H: PopoverHost<K>>(&self, host: &H) -> Option<Rect> {
        self.anchor.resolve().and_then(|id| host.element_rect(&id))
    }

    fn check_retention<H: PopoverHost<K>>(&mut self, pos: Point, host: &H) -> Vec<PopoverEvent> {
        let Some(anchor) = self.anchor_rect(host) else {
            return Vec::new();
        };
        if contains_inclusive(anchor, pos) {
            return Vec::new();
        }
        if self.config.retains_on_overlay_hover()
            && let Some(overlay) = host.overlay_rect().or(self.overlay)
            && retention_contains(self.config.placement, anchor, overlay, self.config.gap, pos)
        {
            return Vec::new();
        }
        debug!("popover: pointer left anchor at ({:.1}, {:.1})", pos.x, pos.y);
        self.close()
    }

    fn open<H: PopoverHost<K>>(&mut self, host: &mut H) -> Vec<PopoverEvent> {
        let mut out = Vec::new();
        if self.visible {
            return out;
        }
        self.visible = true;
        out.push(PopoverEvent::Mount {
            root: PORTAL_ROOT_ID,
            style: self.style(),
        });
        let listener = match self.config.trigger {
            Trigger::Click => Subscriptions::POINTER_DOWN,
            Trigger::Hover => Subscriptions::POINTER_MOVE,
        };
        self.subscribe(
            listener | Subscriptions::RESIZE_ANCHOR | Subscriptions::RESIZE_OVERLAY,
            &mut out,
        );
        out.push(PopoverEvent::Shown);
        debug!("popover: shown");
        out.extend(self.reposition(host));
        out
    }

    fn close(&mut self) -> Vec<PopoverEvent> {
        let mut out = Vec::new();
        if !self.visible {
            return out;
        }
        self.visible = false;
        self.placed = None;
        self.overlay = None;
        self.ignore_next_pointer_down = false;
        self.intent.reset();
        self.unsubscribe(self.subscriptions, &mut out);
        out.push(PopoverEvent::Unmount);
        out.push(PopoverEvent::Hidden);
        debug!("popover: hidden");
        out
    }

    fn cancel_intent(&mut self, out: &mut Vec<PopoverEvent>) {
        if self.intent.deadline.take().is_some() {
            debug!("popover: hover intent cancelled");
            self.intent.reset();
            self.unsubscribe(Subscriptions::POINTER_MOVE, out);
        }
    }

    fn subscribe(&mut self, flags: Subscriptions, out: &mut Vec<PopoverEvent>) {
        let added = flags.difference(self.subscriptions);
        if !added.is_empty() {
            self.subscriptions.insert(added);
            out.push(PopoverEvent::Subscribe(added));
        }
    }

    fn unsubscribe(&mut self, flags: Subscriptions, out: &mut Vec<PopoverEvent>) {
        let removed = flags.intersection(self.subscriptions);
        if !removed.is_empty() {
            self.subscriptions.remove(removed);
            out.push(PopoverEvent::Unsubscribe(removed));
        }
    }
}
