//! Enclosure design constants and defaults.

/// Speed of sound in air at room temperature (m/s).
pub const SPEED_OF_SOUND: f64 = 343.0;

/// Cabinet width factor applied to the cube root of the net volume.
pub const CABINET_RATIO_W: f64 = 1.0;

/// Cabinet height factor applied to the cube root of the net volume.
pub const CABINET_RATIO_H: f64 = 1.6;

/// Cabinet depth factor applied to the cube root of the net volume.
pub const CABINET_RATIO_D: f64 = 0.6;

/// Default target system Q for sealed boxes (Butterworth).
pub const DEFAULT_QTC: f64 = 0.707;

/// Default bandpass volume ratio.
pub const DEFAULT_BANDPASS_S: f64 = 0.6;

/// Default transmission-line taper ratio (straight line).
pub const DEFAULT_TAPER_RATIO: f64 = 1.0;

/// Default passive-radiator compliance ratio.
pub const DEFAULT_PR_DELTA: f64 = 1.0;

/// Default port diameter in cm.
pub const DEFAULT_PORT_DIAMETER_CM: f64 = 5.0;

/// Volume lost to internal bracing in liters.
pub const DEFAULT_BRACING_ALLOWANCE_L: f64 = 0.5;

/// Port air velocity above which chuffing becomes audible (5% of c).
pub const DEFAULT_PORT_VELOCITY_LIMIT: f64 = 0.05 * SPEED_OF_SOUND;

/// Helmholtz constant for a single vent (cm-liter units).
pub const HELMHOLTZ_K_SINGLE: f64 = 23_562.5;

/// Helmholtz constant for the bandpass front-chamber vent.
pub const HELMHOLTZ_K_BANDPASS: f64 = 94_250.0;

/// Port end correction as a multiple of the port diameter.
pub const PORT_END_CORRECTION: f64 = 0.85;

/// Qts below this recommends a vented box.
pub const RECOMMEND_PORTED_BELOW: f64 = 0.4;

/// Qts at or below this (and at or above the ported threshold) recommends a sealed box.
pub const RECOMMEND_SEALED_MAX: f64 = 0.6;
