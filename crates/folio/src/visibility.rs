//! Viewport intersection bookkeeping. The shell reports where things were
//! laid out each frame; the watchers decide what that means.

use std::collections::HashSet;
use std::hash::Hash;

use crate::tooltip::Bounds;

/// Fraction of an element that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// The reveal area stops this far above the bottom of the viewport.
pub const REVEAL_BOTTOM_MARGIN: f32 = 40.0;

/// Receives one report per watched element per frame.
pub trait VisibilityWatcher<K> {
    fn observe(&mut self, key: K, target: Bounds, viewport: Bounds);

    /// Called once after every element of a frame has been observed.
    fn end_frame(&mut self) {}
}

/// Marks elements visible the first time enough of them intersects the
/// viewport. Only elements that existed while the watcher was armed are
/// tracked, so it must be re-armed after anything adds new elements.
#[derive(Debug, Clone)]
pub struct RevealWatcher<K> {
    tracked: HashSet<K>,
    revealed: HashSet<K>,
    armed: bool,
}

impl<K> Default for RevealWatcher<K> {
    fn default() -> Self {
        Self {
            tracked: HashSet::new(),
            revealed: HashSet::new(),
            armed: true,
        }
    }
}

impl<K: Eq + Hash> RevealWatcher<K> {
    /// Track every element reported during the next frame.
    pub fn rearm(&mut self) {
        self.armed = true;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn is_tracked(&self, key: &K) -> bool {
        self.tracked.contains(key)
    }
}

/// Share of `target` inside `root`. A zero sized target counts as fully
/// visible when it sits inside `root`.
pub fn intersection_ratio(target: &Bounds, root: &Bounds) -> f32 {
    let area = target.area();
    if area <= 0.0 {
        let inside = target.left >= root.left
            && target.right() <= root.right()
            && target.top >= root.top
            && target.bottom() <= root.bottom();
        return if inside { 1.0 } else { 0.0 };
    }

    target
        .intersect(root)
        .map_or(0.0, |overlap| overlap.area() / area)
}

impl<K: Eq + Hash + Clone> VisibilityWatcher<K> for RevealWatcher<K> {
    fn observe(&mut self, key: K, target: Bounds, viewport: Bounds) {
        if self.armed {
            self.tracked.insert(key.clone());
        } else if !self.tracked.contains(&key) {
            return;
        }

        if self.revealed.contains(&key) {
            return;
        }

        let root = Bounds::new(
            viewport.left,
            viewport.top,
            viewport.width,
            (viewport.height - REVEAL_BOTTOM_MARGIN).max(0.0),
        );
        if intersection_ratio(&target, &root) >= REVEAL_THRESHOLD {
            self.revealed.insert(key);
        }
    }

    fn end_frame(&mut self) {
        self.armed = false;
    }
}

/// Tracks which section crosses the horizontal line through the middle of
/// the viewport. The last section seen crossing it stays active until
/// another one does.
#[derive(Debug, Clone)]
pub struct ActiveSectionWatcher<K> {
    active: Option<K>,
}

impl<K> Default for ActiveSectionWatcher<K> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<K> ActiveSectionWatcher<K> {
    pub fn active(&self) -> Option<&K> {
        self.active.as_ref()
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

impl<K> VisibilityWatcher<K> for ActiveSectionWatcher<K> {
    fn observe(&mut self, key: K, target: Bounds, viewport: Bounds) {
        let centre = viewport.center_y();
        if target.top <= centre && centre < target.bottom() {
            self.active = Some(key);
        }
    }
}
