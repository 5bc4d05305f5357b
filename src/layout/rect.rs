//! Rect: A rectangle primitive for section geometry.

/// A rectangle defined by position and size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the top-left corner.
    pub x: u16,
    /// Y coordinate (row) of the top-left corner.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from a terminal size (full screen).
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Split vertically at a given row offset.
    ///
    /// Used to peel a section's header row off the top of its region.
    pub fn split_vertical(&self, at: u16) -> (Self, Self) {
        let at = at.min(self.height);
        (
            Self::new(self.x, self.y, self.width, at),
            Self::new(self.x, self.y + at, self.width, self.height - at),
        )
    }

    /// A rectangle of the given size centered inside this one.
    ///
    /// Sizes are clamped to this rectangle; a block larger than the region
    /// starts at the region's origin on that axis.
    #[must_use]
    pub const fn center(&self, width: u16, height: u16) -> Self {
        let width = if width > self.width { self.width } else { width };
        let height = if height > self.height { self.height } else { height };
        Self::new(
            self.x + (self.width - width) / 2,
            self.y + (self.height - height) / 2,
            width,
            height,
        )
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_vertical_peels_header_row() {
        let area = Rect::from_size(80, 24);
        let (header, main) = area.split_vertical(1);
        assert_eq!(header, Rect::new(0, 0, 80, 1));
        assert_eq!(main, Rect::new(0, 1, 80, 23));
    }

    #[test]
    fn test_split_vertical_clamps_to_height() {
        let area = Rect::from_size(10, 2);
        let (top, rest) = area.split_vertical(5);
        assert_eq!(top.height, 2);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_center_within_region() {
        let area = Rect::new(0, 1, 80, 23);
        let block = area.center(20, 1);
        assert_eq!(block, Rect::new(30, 12, 20, 1));
    }

    #[test]
    fn test_center_clamps_oversized_block() {
        let area = Rect::from_size(10, 3);
        let block = area.center(40, 8);
        assert_eq!(block, Rect::from_size(10, 3));
    }

    #[test]
    fn test_contains_edges_exclusive() {
        let r = Rect::new(2, 2, 4, 4);
        assert!(r.contains(2, 2));
        assert!(r.contains(5, 5));
        assert!(!r.contains(6, 6));
    }
}
