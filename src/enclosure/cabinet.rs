use crate::enclosure::constants::{CABINET_RATIO_D, CABINET_RATIO_H, CABINET_RATIO_W};

/// External cabinet proportions in cm.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CabinetDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl CabinetDimensions {
    /// Partitions `volume_l` as width : height : depth = 1 : 1.6 : 0.6 of the
    /// cube root of the volume in cm³.
    ///
    /// Non-positive or non-finite volumes yield all-zero dimensions.
    pub fn from_volume(volume_l: f64) -> Self {
        if !volume_l.is_finite() || volume_l <= 0.0 {
            return Self::default();
        }

        // cbrt(1000 · V) = 10 · cbrt(V), which cannot overflow for finite V.
        let cube_root = volume_l.cbrt() * 10.0;
        Self {
            width: cube_root * CABINET_RATIO_W,
            height: cube_root * CABINET_RATIO_H,
            depth: cube_root * CABINET_RATIO_D,
        }
    }
}
