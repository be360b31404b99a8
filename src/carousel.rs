//! Index and scroll model behind the circular gallery.

pub const DEFAULT_SCROLL_SPEED: f64 = 2.0;
pub const DEFAULT_SCROLL_EASE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// `position` and `target` are measured in items; `index` is the item the
/// strip is settling on.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    index: usize,
    position: f64,
    target: f64,
    speed: f64,
    ease: f64,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            position: 0.0,
            target: 0.0,
            speed: DEFAULT_SCROLL_SPEED,
            ease: DEFAULT_SCROLL_EASE,
        }
    }

    /// `speed` in items per minute of idle drift, `ease` the fraction of the
    /// remaining distance covered per frame.
    pub fn with_motion(mut self, speed: f64, ease: f64) -> Self {
        self.speed = speed.max(0.0);
        self.ease = ease.clamp(0.0, 1.0);
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn advance(&mut self, direction: Direction) -> usize {
        if self.len == 0 {
            return 0;
        }
        self.index = match direction {
            Direction::Next => (self.index + 1) % self.len,
            Direction::Prev => (self.index + self.len - 1) % self.len,
        };
        self.target = self.index as f64;
        self.index
    }

    pub fn scroll_next(&mut self) -> usize {
        self.advance(Direction::Next)
    }

    pub fn scroll_prev(&mut self) -> usize {
        self.advance(Direction::Prev)
    }

    /// Advances the idle drift by `dt_ms` and eases the position one frame.
    pub fn step(&mut self, dt_ms: f64) {
        if self.len == 0 {
            return;
        }
        let len = self.len as f64;
        let before = self.target.round();
        self.target += self.speed * dt_ms / 60_000.0;
        // the commanded index only changes when drift carries the target
        // onto another item
        if self.target.round() != before {
            self.index = (self.target.round().rem_euclid(len) as usize) % self.len;
        }
        // wrapped moves take the short way round
        let mut delta = self.target - self.position;
        if delta > len / 2.0 {
            delta -= len;
        } else if delta < -len / 2.0 {
            delta += len;
        }
        self.position = (self.position + delta * self.ease).rem_euclid(len);
        self.target = self.target.rem_euclid(len);
    }

    /// Signed distance of `item` from the current position, in items, folded
    /// into `(-len/2, len/2]` so the strip wraps.
    pub fn offset_of(&self, item: usize) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        let len = self.len as f64;
        let mut d = (item as f64 - self.position).rem_euclid(len);
        if d > len / 2.0 {
            d -= len;
        }
        d
    }
}

/// Vertical drop for an item `offset` slots from the centre on a strip bent
/// by `bend` (0 keeps it flat).
pub fn bend_drop(offset: f64, bend: f64) -> f64 {
    if bend == 0.0 {
        return 0.0;
    }
    offset * offset * bend * 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraparound() {
        let mut carousel = Carousel::new(9);
        assert_eq!(carousel.scroll_prev(), 8);
        assert_eq!(carousel.scroll_next(), 0);
        for _ in 0..8 {
            carousel.scroll_next();
        }
        assert_eq!(carousel.index(), 8);
        assert_eq!(carousel.scroll_next(), 0);
    }

    #[test]
    fn test_empty_never_panics() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.advance(Direction::Next), 0);
        assert_eq!(carousel.advance(Direction::Prev), 0);
        carousel.step(16.0);
        assert_eq!(carousel.offset_of(3), 0.0);
        assert!(carousel.is_empty());
    }

    #[test]
    fn test_step_eases_towards_target() {
        let mut carousel = Carousel::new(5).with_motion(0.0, 0.5);
        carousel.scroll_next();
        carousel.step(16.0);
        assert!((carousel.position() - 0.5).abs() < 1e-9);
        carousel.step(16.0);
        assert!((carousel.position() - 0.75).abs() < 1e-9);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_step_wraps_short_way() {
        let mut carousel = Carousel::new(4).with_motion(0.0, 0.5);
        carousel.scroll_prev();
        carousel.step(16.0);
        // moving from 0 to 3 goes backwards through the seam
        assert!((carousel.position() - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_frames_keep_commanded_index() {
        let mut carousel = Carousel::new(5);
        assert_eq!(carousel.scroll_next(), 1);
        carousel.step(16.0);
        // position is still easing near 0, the index must not follow it
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.scroll_next(), 2);
        for _ in 0..10 {
            carousel.step(16.0);
        }
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.scroll_prev(), 1);
    }

    #[test]
    fn test_drift_moves_index_across_seam() {
        let mut carousel = Carousel::new(3).with_motion(60.0, 0.1);
        carousel.scroll_prev();
        assert_eq!(carousel.index(), 2);
        // 2.0 drifts to 3.0, which wraps to item 0
        carousel.step(1000.0);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_idle_drift() {
        let mut carousel = Carousel::new(3).with_motion(60.0, 1.0);
        carousel.step(1000.0);
        assert!((carousel.position() - 1.0).abs() < 1e-9);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_offsets_fold() {
        let carousel = Carousel::new(6);
        assert_eq!(carousel.offset_of(0), 0.0);
        assert_eq!(carousel.offset_of(1), 1.0);
        assert_eq!(carousel.offset_of(5), -1.0);
        assert_eq!(carousel.offset_of(3), 3.0);
        assert_eq!(bend_drop(2.0, 0.0), 0.0);
        assert_eq!(bend_drop(-1.0, 3.0), 12.0);
    }
}
