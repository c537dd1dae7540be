//! Vent and line geometry.
//!
//! Units follow the rest of the crate: lengths in cm, volumes in liters,
//! frequencies in Hz, diaphragm area in cm² and excursion in mm.

use std::f64::consts::PI;

use crate::enclosure::constants::{PORT_END_CORRECTION, SPEED_OF_SOUND};

/// Physical length of a round vent tuning `volume_l` to `tuning_hz`.
///
/// `L = K·r² / (f²·V) − 0.85·d`. The result can be zero or negative when the
/// chosen diameter is too small for the box; callers decide how to report it.
/// Returns 0.0 for degenerate (non-finite) inputs.
pub fn helmholtz_port_length(k: f64, diameter_cm: f64, tuning_hz: f64, volume_l: f64) -> f64 {
    let r = diameter_cm / 2.0;
    let length = (k * r * r) / (tuning_hz * tuning_hz * volume_l) - PORT_END_CORRECTION * diameter_cm;
    if length.is_finite() { length } else { 0.0 }
}

/// Air volume occupied by a vent, in liters.
pub fn port_volume(diameter_cm: f64, length_cm: f64) -> f64 {
    let r = diameter_cm / 2.0;
    PI * r * r * length_cm / 1000.0
}

/// Peak air velocity in the vent (m/s).
///
/// The cone's peak volume velocity `Sd · Xmax · 2π·f` must pass through the
/// vent cross-section `π·r²`.
pub fn port_air_velocity(sd_cm2: f64, xmax_mm: f64, tuning_hz: f64, diameter_cm: f64) -> f64 {
    let sd = sd_cm2 * 1e-4;
    let xmax = xmax_mm * 1e-3;
    let r = diameter_cm * 1e-2 / 2.0;
    let port_area = PI * r * r;

    if port_area <= 0.0 {
        return 0.0;
    }

    let velocity = (sd * xmax * 2.0 * PI * tuning_hz / port_area).abs();
    if velocity.is_finite() { velocity } else { 0.0 }
}

/// Quarter-wave transmission line length in cm, scaled by the taper correction `sf`.
pub fn quarter_wave_length(sf: f64, tuning_hz: f64) -> f64 {
    let length = sf * SPEED_OF_SOUND / (4.0 * tuning_hz) * 100.0;
    if length.is_finite() { length } else { 0.0 }
}
