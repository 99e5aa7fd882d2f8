/// Distance kept between a tooltip and the viewport edges, and between a
/// tooltip and its anchor.
pub const MARGIN: f32 = 8.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Top-left corner of a floating panel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}

/// An axis aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.top + self.height / 2.0
    }

    /// Overlap with `other`, or `None` when they do not touch.
    pub fn intersect(&self, other: &Bounds) -> Option<Bounds> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Bounds::new(left, top, right - left, bottom - top))
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

/// Where to put a panel of `panel` size next to `anchor`.
///
/// Horizontally the panel is centred on the anchor, then clamped to the
/// margins. Vertically it goes above the anchor; if that top edge crosses
/// the top margin it flips below, and if the flipped panel then crosses the
/// bottom margin its bottom edge is pinned to that margin.
pub fn position(anchor: Bounds, panel: Size, viewport: Size) -> Pos {
    let x = (anchor.center_x() - panel.width / 2.0)
        .min(viewport.width - MARGIN - panel.width)
        .max(MARGIN);

    let mut y = anchor.top - MARGIN - panel.height;
    if y < MARGIN {
        y = anchor.bottom() + MARGIN;
        if y + panel.height > viewport.height - MARGIN {
            y = viewport.height - MARGIN - panel.height;
        }
    }

    Pos { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(800.0, 600.0);
    const PANEL: Size = Size::new(200.0, 100.0);

    #[test]
    fn centred_above_by_default() {
        let anchor = Bounds::new(300.0, 300.0, 40.0, 40.0);
        let pos = position(anchor, PANEL, VIEWPORT);
        assert_eq!(pos.x, 220.0);
        assert_eq!(pos.y, 300.0 - 8.0 - 100.0);
    }

    #[test]
    fn clamped_at_right_edge() {
        let anchor = Bounds::new(770.0, 300.0, 30.0, 30.0);
        let pos = position(anchor, PANEL, VIEWPORT);
        assert!(pos.x + PANEL.width <= VIEWPORT.width - MARGIN);
        assert_eq!(pos.x, 800.0 - 8.0 - 200.0);
    }

    #[test]
    fn clamped_at_left_edge() {
        let anchor = Bounds::new(0.0, 300.0, 30.0, 30.0);
        assert_eq!(position(anchor, PANEL, VIEWPORT).x, MARGIN);
    }

    #[test]
    fn flips_below_near_top() {
        let anchor = Bounds::new(300.0, 50.0, 40.0, 40.0);
        let pos = position(anchor, PANEL, VIEWPORT);
        assert_eq!(pos.y, 90.0 + 8.0);
    }

    #[test]
    fn flipped_panel_is_pinned_to_bottom() {
        let viewport = Size::new(800.0, 200.0);
        let anchor = Bounds::new(300.0, 60.0, 40.0, 40.0);
        let pos = position(anchor, PANEL, viewport);
        assert_eq!(pos.y, 200.0 - 8.0 - 100.0);
    }

    #[test]
    fn below_overflow_alone_does_not_flip() {
        // room above, so the bottom edge never matters
        let anchor = Bounds::new(300.0, 560.0, 40.0, 40.0);
        let pos = position(anchor, PANEL, VIEWPORT);
        assert_eq!(pos.y, 560.0 - 8.0 - 100.0);
    }

    #[test]
    fn intersection() {
        let a = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let b = Bounds::new(50.0, 80.0, 100.0, 100.0);
        assert_eq!(a.intersect(&b), Some(Bounds::new(50.0, 80.0, 50.0, 20.0)));
        assert_eq!(a.intersect(&Bounds::new(200.0, 0.0, 10.0, 10.0)), None);
    }
}
