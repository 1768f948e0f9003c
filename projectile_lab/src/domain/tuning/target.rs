// Axis-aligned target zone in meters, origin at the launch point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetZone {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl TargetZone {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left: left.min(right),
            right: left.max(right),
            bottom: bottom.min(top),
            top: bottom.max(top),
        }
    }

    // Elevated basket used by the adjustable-speed lab.
    pub fn basket() -> Self {
        Self::new(30.0, 33.0, 6.0, 7.0)
    }

    // Block standing on the ground, 4 m wide and 24 m tall.
    pub fn ground_block() -> Self {
        Self::new(146.0, 150.0, 0.0, 24.0)
    }
}

impl Default for TargetZone {
    fn default() -> Self {
        Self::basket()
    }
}
