// bounds.rs - Live-region tracking
//
// A LiveBounds is a conservative box around every live cell of a buffer: it
// may include dead cells but never excludes a live one. Coordinates are
// interior buffer coordinates, so 1..=width and 1..=height; the ghost border
// is never part of a region.

/// Inclusive rectangle in interior buffer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl Region {
    /// The whole logical extent of a `width` x `height` world.
    pub fn full(width: usize, height: usize) -> Self {
        Self { min_x: 1, min_y: 1, max_x: width, max_y: height }
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }

    pub fn width(&self) -> usize {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> usize {
        self.max_y - self.min_y + 1
    }

    /// Smallest region enclosing both.
    pub fn union(self, other: Region) -> Region {
        Region {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows the region by one cell on every side. An axis whose grown range
    /// would reach the ghost border is widened to the full extent instead,
    /// since its neighbours wrap around to the opposite edge.
    pub fn expanded(self, width: usize, height: usize) -> Region {
        let (min_x, max_x) = expand_axis(self.min_x, self.max_x, width);
        let (min_y, max_y) = expand_axis(self.min_y, self.max_y, height);
        Region { min_x, min_y, max_x, max_y }
    }
}

fn expand_axis(min: usize, max: usize, extent: usize) -> (usize, usize) {
    if min <= 1 || max >= extent {
        (1, extent)
    } else {
        (min - 1, max + 1)
    }
}

/// Box around the live cells of one buffer, or nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiveBounds {
    /// No cell is known to be alive.
    #[default]
    Empty,
    Region(Region),
}

impl LiveBounds {
    pub fn full(width: usize, height: usize) -> Self {
        LiveBounds::Region(Region::full(width, height))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LiveBounds::Empty)
    }

    pub fn region(&self) -> Option<Region> {
        match *self {
            LiveBounds::Empty => None,
            LiveBounds::Region(region) => Some(region),
        }
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.region().is_some_and(|region| region.contains(x, y))
    }

    /// Widens the box to cover `(x, y)`. Never narrows it.
    pub fn include(&mut self, x: usize, y: usize) {
        *self = match *self {
            LiveBounds::Empty => LiveBounds::Region(Region { min_x: x, min_y: y, max_x: x, max_y: y }),
            LiveBounds::Region(region) => LiveBounds::Region(region.union(Region {
                min_x: x,
                min_y: y,
                max_x: x,
                max_y: y,
            })),
        };
    }

    pub fn union(self, other: LiveBounds) -> LiveBounds {
        match (self, other) {
            (LiveBounds::Empty, bounds) | (bounds, LiveBounds::Empty) => bounds,
            (LiveBounds::Region(a), LiveBounds::Region(b)) => LiveBounds::Region(a.union(b)),
        }
    }

    /// Cells the next step has to visit: every cell that is alive now or
    /// could be born from a live neighbour.
    pub fn sweep_region(&self, width: usize, height: usize) -> Option<Region> {
        self.region().map(|region| region.expanded(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn include_grows_from_empty() {
        let mut bounds = LiveBounds::Empty;
        assert!(bounds.is_empty());
        bounds.include(5, 7);
        assert_eq!(bounds.region(), Some(Region { min_x: 5, min_y: 7, max_x: 5, max_y: 7 }));
        bounds.include(3, 9);
        assert_eq!(bounds.region(), Some(Region { min_x: 3, min_y: 7, max_x: 5, max_y: 9 }));
        // Already inside: unchanged.
        bounds.include(4, 8);
        assert_eq!(bounds.region(), Some(Region { min_x: 3, min_y: 7, max_x: 5, max_y: 9 }));
    }

    #[test]
    fn interior_region_expands_by_one() {
        let region = Region { min_x: 10, min_y: 20, max_x: 12, max_y: 22 };
        assert_eq!(
            region.expanded(100, 100),
            Region { min_x: 9, min_y: 19, max_x: 13, max_y: 23 }
        );
    }

    #[test]
    fn edge_touching_axis_clamps_to_full_extent_independently() {
        // Touches the left edge only: x goes full, y still expands by one.
        let region = Region { min_x: 1, min_y: 20, max_x: 3, max_y: 22 };
        assert_eq!(
            region.expanded(50, 40),
            Region { min_x: 1, min_y: 19, max_x: 50, max_y: 23 }
        );

        // Reaching the bottom row forces the full vertical extent.
        let region = Region { min_x: 10, min_y: 38, max_x: 12, max_y: 39 };
        assert_eq!(
            region.expanded(50, 40),
            Region { min_x: 9, min_y: 1, max_x: 13, max_y: 40 }
        );
    }

    #[test]
    fn empty_bounds_have_no_sweep() {
        assert_eq!(LiveBounds::Empty.sweep_region(10, 10), None);
        assert!(!LiveBounds::Empty.contains(1, 1));
    }

    #[test]
    fn union_with_empty_is_identity() {
        let full = LiveBounds::full(8, 6);
        assert_eq!(full.union(LiveBounds::Empty), full);
        assert_eq!(LiveBounds::Empty.union(full), full);
        assert_eq!(LiveBounds::Empty.union(LiveBounds::Empty), LiveBounds::Empty);
    }

    #[test]
    fn region_dimensions_are_inclusive() {
        let region = Region::full(8, 6);
        assert_eq!(region.width(), 8);
        assert_eq!(region.height(), 6);
        assert!(region.contains(8, 6));
        assert!(!region.contains(0, 1));
        assert!(!region.contains(9, 1));
    }
}
