//! Decomposition of rectangles into the four half-plane quadrants around the origin
//!
//! Generation always moves away from `(0, 0)`: a cell's neighbours nearer the
//! origin are decided first. Splitting a request per quadrant lets every fill
//! walk outward along its own axes. Quadrants share their boundary axes, so a
//! cell on `x = 0` or `y = 0` belongs to two (the origin to all four).

use crate::spatial::grid::BoundingBox;

/// One of the four quadrants around the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `x >= 0` and `y >= 0`
    Q1,
    /// `x <= 0` and `y >= 0`
    Q2,
    /// `x <= 0` and `y <= 0`
    Q3,
    /// `x >= 0` and `y <= 0`
    Q4,
}

impl Quadrant {
    /// All quadrants in generation order
    pub const ALL: [Self; 4] = [Self::Q1, Self::Q2, Self::Q3, Self::Q4];

    /// Per-axis step `[sx, sy]` pointing away from the origin
    pub const fn outward(self) -> [i32; 2] {
        match self {
            Self::Q1 => [1, 1],
            Self::Q2 => [-1, 1],
            Self::Q3 => [-1, -1],
            Self::Q4 => [1, -1],
        }
    }

    /// Whether `region` has nonempty extent inside this quadrant
    ///
    /// Only the corner of `region` nearest the quadrant needs testing.
    pub const fn intersects(self, region: &BoundingBox) -> bool {
        match self {
            Self::Q1 => region.max[0] >= 0 && region.max[1] >= 0,
            Self::Q2 => region.min[0] <= 0 && region.max[1] >= 0,
            Self::Q3 => region.min[0] <= 0 && region.min[1] <= 0,
            Self::Q4 => region.max[0] >= 0 && region.min[1] <= 0,
        }
    }

    /// Part of `region` inside this quadrant
    ///
    /// Origin-facing sides are clamped to 0, far sides are kept. Returns
    /// `None` when nothing is left.
    pub fn clamp(self, region: &BoundingBox) -> Option<BoundingBox> {
        let [min_x, min_y] = region.min;
        let [max_x, max_y] = region.max;
        let (min, max) = match self {
            Self::Q1 => ([min_x.max(0), min_y.max(0)], [max_x, max_y]),
            Self::Q2 => ([min_x, min_y.max(0)], [max_x.min(0), max_y]),
            Self::Q3 => ([min_x, min_y], [max_x.min(0), max_y.min(0)]),
            Self::Q4 => ([min_x.max(0), min_y], [max_x, max_y.min(0)]),
        };
        BoundingBox::new(min[0], min[1], max[0], max[1]).ok()
    }

    /// Corner of `region` closest to the origin for this quadrant
    pub const fn near_corner(self, region: &BoundingBox) -> [i32; 2] {
        let [sx, sy] = self.outward();
        [
            if sx > 0 { region.min[0] } else { region.max[0] },
            if sy > 0 { region.min[1] } else { region.max[1] },
        ]
    }

    /// Corner of `region` farthest from the origin for this quadrant
    pub const fn far_corner(self, region: &BoundingBox) -> [i32; 2] {
        let [sx, sy] = self.outward();
        [
            if sx > 0 { region.max[0] } else { region.min[0] },
            if sy > 0 { region.max[1] } else { region.min[1] },
        ]
    }

    /// Quadrants `region` reaches, each paired with its clamped part
    pub fn decompose(region: &BoundingBox) -> Vec<(Self, BoundingBox)> {
        Self::ALL
            .into_iter()
            .filter(|quadrant| quadrant.intersects(region))
            .filter_map(|quadrant| quadrant.clamp(region).map(|part| (quadrant, part)))
            .collect()
    }
}
