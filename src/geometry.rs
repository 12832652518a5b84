/// Integer axis-aligned box in screen pixels. Anchors follow the usual
/// sprite conventions: `x`/`y` is the top-left corner, `right`/`bottom`
/// are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn centerx(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn centery(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn set_centerx(&mut self, cx: i32) {
        self.x = cx - self.w / 2;
    }

    pub fn set_centery(&mut self, cy: i32) {
        self.y = cy - self.h / 2;
    }

    pub fn set_center(&mut self, cx: i32, cy: i32) {
        self.set_centerx(cx);
        self.set_centery(cy);
    }

    /// AABB overlap. Touching edges do not count, empty boxes never collide.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_requires_shared_area() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(9, 9, 5, 5)));
        assert!(!a.intersects(&Rect::new(10, 0, 5, 5))); // edge touch
        assert!(!a.intersects(&Rect::new(0, 0, 0, 5)));
    }

    #[test]
    fn center_anchors() {
        let mut r = Rect::new(0, 0, 200, 50);
        r.set_center(550, 300);
        assert_eq!((r.x, r.y), (450, 275));
        assert_eq!((r.centerx(), r.centery()), (550, 300));
        assert_eq!((r.right(), r.bottom()), (650, 325));
    }

    #[test]
    fn point_containment_is_half_open() {
        let r = Rect::new(450, 275, 200, 50);
        assert!(r.contains_point(450, 275));
        assert!(r.contains_point(649, 324));
        assert!(!r.contains_point(650, 300));
    }
}
