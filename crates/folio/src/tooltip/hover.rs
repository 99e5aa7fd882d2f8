use std::time::{Duration, Instant};

use super::{position, Bounds, Pos, Size};

/// How long a tooltip survives after the pointer leaves its anchor, so the
/// pointer can cross the gap into the tooltip itself.
pub const HIDE_GRACE: Duration = Duration::from_millis(100);

/// Which anchor, if any, currently owns the tooltip, and where it sits.
///
/// Placement is two-step: [`HoverTooltip::show`] records the anchor, and
/// [`HoverTooltip::place`] computes the position once the panel has been
/// laid out and its size is known.
#[derive(Debug, Clone)]
pub struct HoverTooltip<K> {
    anchor: Option<(K, Bounds)>,
    position: Option<Pos>,
    pending_hide: Option<Instant>,
    grace: Duration,
}

impl<K> Default for HoverTooltip<K> {
    fn default() -> Self {
        Self::new(HIDE_GRACE)
    }
}

impl<K> HoverTooltip<K> {
    pub fn new(grace: Duration) -> Self {
        Self {
            anchor: None,
            position: None,
            pending_hide: None,
            grace,
        }
    }

    pub fn anchor(&self) -> Option<&K> {
        self.anchor.as_ref().map(|(key, _)| key)
    }

    pub fn anchor_bounds(&self) -> Option<Bounds> {
        self.anchor.as_ref().map(|(_, bounds)| *bounds)
    }

    /// `None` until the panel has been measured.
    pub fn position(&self) -> Option<Pos> {
        self.position
    }

    pub fn is_hide_pending(&self) -> bool {
        self.pending_hide.is_some()
    }

    /// Clears the tooltip right away.
    pub fn hide(&mut self) {
        self.anchor = None;
        self.position = None;
        self.pending_hide = None;
    }

    /// The pointer left the anchor or the panel. The tooltip goes away
    /// after the grace period unless [`Self::cancel_hide`] runs first.
    pub fn request_hide(&mut self, now: Instant) {
        if self.anchor.is_some() && self.pending_hide.is_none() {
            self.pending_hide = Some(now + self.grace);
        }
    }

    /// The pointer is back over the anchor or the panel.
    pub fn cancel_hide(&mut self) {
        self.pending_hide = None;
    }

    /// Applies a pending hide whose deadline has passed. Returns true when
    /// the tooltip was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending_hide {
            Some(deadline) if now >= deadline => {
                self.hide();
                true
            }
            _ => false,
        }
    }

    /// Time left before a pending hide fires, for scheduling a repaint.
    pub fn time_until_hide(&self, now: Instant) -> Option<Duration> {
        self.pending_hide
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Positions the panel for the current anchor once its size is known.
    pub fn place(&mut self, panel: Size, viewport: Size) -> Option<Pos> {
        let (_, anchor) = self.anchor.as_ref()?;
        let pos = position(*anchor, panel, viewport);
        self.position = Some(pos);
        Some(pos)
    }
}

impl<K: PartialEq> HoverTooltip<K> {
    /// The pointer entered `key`. Nothing happens when the anchor has no
    /// content to show. Returns whether the tooltip now belongs to `key`.
    pub fn show(&mut self, key: K, bounds: Bounds, has_content: bool) -> bool {
        if !has_content {
            return false;
        }

        self.pending_hide = None;
        let same = self
            .anchor
            .as_ref()
            .is_some_and(|(current, _)| *current == key);
        if !same {
            // new anchor: wait for a fresh measurement
            self.position = None;
        }
        self.anchor = Some((key, bounds));
        true
    }

    pub fn is_showing(&self, key: &K) -> bool {
        self.anchor
            .as_ref()
            .is_some_and(|(current, _)| current == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: Bounds = Bounds::new(100.0, 300.0, 40.0, 40.0);
    const VIEWPORT: Size = Size::new(800.0, 600.0);

    #[test]
    fn empty_anchor_is_ignored() {
        let mut tooltip: HoverTooltip<&str> = HoverTooltip::default();
        assert!(!tooltip.show("2026-01-02", CELL, false));
        assert_eq!(tooltip.anchor(), None);
    }

    #[test]
    fn placed_after_measurement() {
        let mut tooltip = HoverTooltip::default();
        tooltip.show("2026-01-01", CELL, true);
        assert_eq!(tooltip.position(), None);

        let pos = tooltip.place(Size::new(100.0, 50.0), VIEWPORT).unwrap();
        assert_eq!(pos, Pos { x: 70.0, y: 242.0 });
        assert_eq!(tooltip.position(), Some(pos));
    }

    #[test]
    fn hide_waits_for_grace() {
        let start = Instant::now();
        let mut tooltip = HoverTooltip::default();
        tooltip.show("2026-01-01", CELL, true);

        tooltip.request_hide(start);
        assert!(!tooltip.tick(start + Duration::from_millis(50)));
        assert!(tooltip.is_showing(&"2026-01-01"));
        assert_eq!(
            tooltip.time_until_hide(start + Duration::from_millis(50)),
            Some(Duration::from_millis(50))
        );

        assert!(tooltip.tick(start + HIDE_GRACE));
        assert_eq!(tooltip.anchor(), None);
        assert_eq!(tooltip.position(), None);
    }

    #[test]
    fn reentering_cancels_hide() {
        let start = Instant::now();
        let mut tooltip = HoverTooltip::default();
        tooltip.show("2026-01-01", CELL, true);
        tooltip.request_hide(start);

        // pointer reached the panel
        tooltip.cancel_hide();
        assert!(!tooltip.tick(start + Duration::from_secs(1)));
        assert!(tooltip.is_showing(&"2026-01-01"));
    }

    #[test]
    fn switching_anchor_needs_new_measurement() {
        let mut tooltip = HoverTooltip::default();
        tooltip.show("a", CELL, true);
        tooltip.place(Size::new(100.0, 50.0), VIEWPORT);
        tooltip.show("a", CELL, true);
        assert!(tooltip.position().is_some());
        tooltip.show("b", CELL, true);
        assert_eq!(tooltip.position(), None);
        assert_eq!(tooltip.anchor(), Some(&"b"));
    }
}
