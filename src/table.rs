use bevy_math::IRect;
use glam::IVec2;

/// Side length of the standard table.
pub const DEFAULT_TABLE_SIZE: i32 = 5;

/// The square table the robot moves on.
///
/// Cells run from `(0, 0)` to `(size - 1, size - 1)` inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table {
    bounds: IRect,
}

impl Table {
    /// Builds a `size` x `size` table. `size` must be positive; see
    /// [`RobotConfig::validate`](crate::RobotConfig::validate).
    pub fn new(size: i32) -> Self {
        Self {
            // IRect is inclusive on both corners.
            bounds: IRect::new(0, 0, size - 1, size - 1),
        }
    }

    pub fn size(&self) -> i32 {
        self.bounds.width() + 1
    }

    /// Whether `cell` lies on the table.
    pub fn contains(&self, cell: IVec2) -> bool {
        self.bounds.contains(cell)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_SIZE)
    }
}
