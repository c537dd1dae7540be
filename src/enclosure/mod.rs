//! Enclosure Design Module
//!
//! This module turns a driver's Thiele-Small parameters into an enclosure
//! design. It is organized into sub-modules, each with a specific
//! responsibility:
//!
//! - [`alignment`]: Empirical alignment tables (transmission line, passive radiator)
//! - [`cabinet`]: Cabinet proportions from net volume
//! - [`constants`]: Design constants and defaults
//! - [`errors`]: Design-specific error types
//! - [`port`]: Vent and line geometry
//! - [`result`]: Design result and warning kinds
//! - [`topology`]: Topologies, tuning options and the Qts recommendation
//!
//! The [`EnclosureDesigner`] ties these together. It holds only immutable
//! settings, so one instance can be shared freely between threads.

use crate::config::{ConfigError, KeyValueFile};
use crate::driver::DriverParameters;
use crate::enclosure::alignment::{PR_TUNING_TABLE, TL_ALPHA, TL_TAPER_TABLE, TL_TUNING_RATIO};
use crate::enclosure::constants::{
    DEFAULT_BRACING_ALLOWANCE_L, DEFAULT_PORT_DIAMETER_CM, DEFAULT_PORT_VELOCITY_LIMIT,
    HELMHOLTZ_K_BANDPASS, HELMHOLTZ_K_SINGLE,
};
use crate::enclosure::port::{
    helmholtz_port_length, port_air_velocity, port_volume, quarter_wave_length,
};

pub mod alignment;
pub mod cabinet;
pub mod constants;
pub mod errors;
pub mod port;
pub mod result;
pub mod topology;

pub use cabinet::CabinetDimensions;
pub use errors::DesignError;
pub use result::{DesignWarning, EnclosureResult};
pub use topology::{EnclosureTopology, Recommendation, TopologyKind, TuningOptions};

const SEALED_RESPONSE: &str = "12 dB/octave roll-off below Fc";
const PORTED_RESPONSE: &str = "24 dB/octave roll-off below Fb";
const BANDPASS_RESPONSE: &str = "Bandpass response";
const TRANSMISSION_LINE_RESPONSE: &str = "Quarter-wave line loading below Fb";
const PASSIVE_RADIATOR_RESPONSE: &str = "Similar to ported";

/// Settings shared by every design made with one [`EnclosureDesigner`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignerSettings {
    /// Diameter assumed for round vents (cm).
    pub port_diameter_cm: f64,
    /// Volume lost to bracing (liters).
    pub bracing_allowance_l: f64,
    /// Port velocity above which a warning is raised (m/s).
    pub port_velocity_limit: f64,
}

impl Default for DesignerSettings {
    fn default() -> Self {
        Self {
            port_diameter_cm: DEFAULT_PORT_DIAMETER_CM,
            bracing_allowance_l: DEFAULT_BRACING_ALLOWANCE_L,
            port_velocity_limit: DEFAULT_PORT_VELOCITY_LIMIT,
        }
    }
}

impl DesignerSettings {
    /// Reads `port_diameter_cm`, `bracing_allowance_l` and
    /// `port_velocity_limit`, keeping the defaults for missing keys.
    pub fn from_config(file: &KeyValueFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let settings = Self {
            port_diameter_cm: file.get_f64_or("port_diameter_cm", defaults.port_diameter_cm)?,
            bracing_allowance_l: file
                .get_f64_or("bracing_allowance_l", defaults.bracing_allowance_l)?,
            port_velocity_limit: file
                .get_f64_or("port_velocity_limit", defaults.port_velocity_limit)?,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects non-finite values, a non-positive port diameter or velocity
    /// limit, and a negative bracing allowance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("port_diameter_cm", self.port_diameter_cm, is_positive(self.port_diameter_cm)),
            (
                "bracing_allowance_l",
                self.bracing_allowance_l,
                self.bracing_allowance_l.is_finite() && self.bracing_allowance_l >= 0.0,
            ),
            (
                "port_velocity_limit",
                self.port_velocity_limit,
                is_positive(self.port_velocity_limit),
            ),
        ];
        for (key, value, valid) in checks {
            if !valid {
                return Err(ConfigError::InvalidNumber {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// How the enclosure is vented.
#[derive(Debug, Clone, Copy)]
enum Vent {
    None,
    /// Round Helmholtz vent tuned against `volume_l` with constant `k`.
    Helmholtz { k: f64, volume_l: f64 },
    /// Quarter-wave line of the given length (cm).
    Line { length_cm: f64 },
}

/// Output of one formula set, before displacements are subtracted.
#[derive(Debug, Clone, Copy)]
struct Alignment {
    alpha: f64,
    gross_volume: f64,
    tuning_hz: f64,
    response: &'static str,
    vent: Vent,
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Driver fields every formula divides by or scales with.
fn invalid_driver_parameters(params: &DriverParameters) -> Vec<DesignWarning> {
    let mut warnings = Vec::new();
    for (parameter, value) in [("fs", params.fs), ("qts", params.qts), ("vas", params.vas)] {
        if !is_positive(value) {
            warnings.push(DesignWarning::InvalidDriverParameter { parameter, value });
        }
    }
    if !params.vd.is_finite() || params.vd < 0.0 {
        warnings.push(DesignWarning::InvalidDriverParameter {
            parameter: "vd",
            value: params.vd,
        });
    }
    warnings
}

fn check_tuning(option: &'static str, value: f64, warnings: &mut Vec<DesignWarning>) -> bool {
    if is_positive(value) {
        return true;
    }
    warnings.push(DesignWarning::InvalidTuningOption { option, value });
    false
}

fn check_alpha(topology: TopologyKind, alpha: f64, warnings: &mut Vec<DesignWarning>) -> bool {
    if is_positive(alpha) {
        return true;
    }
    warnings.push(DesignWarning::InfeasibleAlignment { topology, alpha });
    false
}

/// Computes enclosure designs from driver parameters.
#[derive(Debug, Clone, Default)]
pub struct EnclosureDesigner {
    settings: DesignerSettings,
}

impl EnclosureDesigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails when `settings` does not pass [`DesignerSettings::validate`].
    pub fn with_settings(settings: DesignerSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &DesignerSettings {
        &self.settings
    }

    /// Suggests a topology from Qts alone.
    pub fn recommend(&self, qts: f64) -> Recommendation {
        Recommendation::for_qts(qts)
    }

    /// Designs an enclosure by topology name, resolving tuning defaults.
    ///
    /// Fails only when `name` is not one of the supported topologies.
    pub fn design_named(
        &self,
        params: &DriverParameters,
        name: &str,
        options: &TuningOptions,
    ) -> Result<EnclosureResult, DesignError> {
        let kind: TopologyKind = name.parse()?;
        Ok(self.design(params, EnclosureTopology::resolve(kind, options, params)))
    }

    /// Designs an enclosure for `params`.
    ///
    /// Never fails: degenerate inputs produce a zero-valued result carrying
    /// warnings. No returned number is NaN or infinite.
    pub fn design(&self, params: &DriverParameters, topology: EnclosureTopology) -> EnclosureResult {
        let kind = topology.kind();
        let mut result = EnclosureResult::empty(kind);
        result.within_xmax = is_positive(params.xmax);

        let invalid = invalid_driver_parameters(params);
        if !invalid.is_empty() {
            result.warnings = invalid;
            log_warnings(&result);
            return result;
        }

        let mut warnings = Vec::new();
        let alignment = match topology {
            EnclosureTopology::Sealed { qtc } => Self::sealed(params, qtc, &mut warnings),
            EnclosureTopology::Ported { fb } => Self::ported(params, fb, &mut warnings),
            EnclosureTopology::Bandpass { s } => Self::bandpass(params, s, &mut warnings),
            EnclosureTopology::TransmissionLine { tr } => {
                Self::transmission_line(params, tr, &mut warnings)
            }
            EnclosureTopology::PassiveRadiator { delta } => {
                Self::passive_radiator(params, delta, &mut warnings)
            }
        };

        let Some(alignment) = alignment else {
            result.warnings = warnings;
            log_warnings(&result);
            return result;
        };

        if !alignment.gross_volume.is_finite() || !alignment.tuning_hz.is_finite() {
            warnings.push(DesignWarning::Overflow {
                quantity: if alignment.gross_volume.is_finite() {
                    "tuning frequency"
                } else {
                    "gross volume"
                },
            });
            result.warnings = warnings;
            log_warnings(&result);
            return result;
        }

        result.alpha = alignment.alpha;
        result.gross_volume = alignment.gross_volume;
        result.tuning_frequency = alignment.tuning_hz;
        result.frequency_response = alignment.response;

        let port_volume_l = self.apply_vent(params, &alignment, &mut result, &mut warnings);

        let net = alignment.gross_volume - params.vd - self.settings.bracing_allowance_l - port_volume_l;
        if !net.is_finite() {
            warnings.push(DesignWarning::Overflow {
                quantity: "net volume",
            });
            result.net_volume = 0.0;
            result.warnings = warnings;
            log_warnings(&result);
            return result;
        }
        if net <= 0.0 {
            warnings.push(DesignWarning::NegativeNetVolume {
                gross_liters: alignment.gross_volume,
                net_liters: net,
            });
        }
        result.net_volume = net;
        result.cabinet = CabinetDimensions::from_volume(net);
        result.warnings = warnings;

        log::debug!(
            "{kind} design: alpha={:.4} gross={:.2} L net={:.2} L tuning={:.2} Hz",
            result.alpha,
            result.gross_volume,
            result.net_volume,
            result.tuning_frequency
        );
        log_warnings(&result);
        result
    }

    /// Fills in vent geometry and returns the vent's displaced volume in liters.
    fn apply_vent(
        &self,
        params: &DriverParameters,
        alignment: &Alignment,
        result: &mut EnclosureResult,
        warnings: &mut Vec<DesignWarning>,
    ) -> f64 {
        match alignment.vent {
            Vent::None => 0.0,
            Vent::Line { length_cm } => {
                result.port_length = length_cm;
                0.0
            }
            Vent::Helmholtz { k, volume_l } => {
                let diameter = self.settings.port_diameter_cm;
                let length = helmholtz_port_length(k, diameter, alignment.tuning_hz, volume_l);
                let velocity = port_air_velocity(params.sd, params.xmax, alignment.tuning_hz, diameter);

                result.port_diameter = diameter;
                result.port_length = length;
                result.air_velocity = velocity;

                if velocity > self.settings.port_velocity_limit {
                    warnings.push(DesignWarning::PortVelocityHigh {
                        velocity,
                        limit: self.settings.port_velocity_limit,
                    });
                }

                if length <= 0.0 {
                    warnings.push(DesignWarning::NonPhysicalPort { length_cm: length });
                    return 0.0;
                }
                port_volume(diameter, length)
            }
        }
    }

    fn sealed(
        params: &DriverParameters,
        qtc: f64,
        warnings: &mut Vec<DesignWarning>,
    ) -> Option<Alignment> {
        if !check_tuning("qtc", qtc, warnings) {
            return None;
        }

        let alpha = (qtc / params.qts).powi(2) - 1.0;
        if !check_alpha(TopologyKind::Sealed, alpha, warnings) {
            return None;
        }

        Some(Alignment {
            alpha,
            gross_volume: params.vas / alpha,
            tuning_hz: params.fs * (1.0 + alpha).sqrt(),
            response: SEALED_RESPONSE,
            vent: Vent::None,
        })
    }

    fn ported(
        params: &DriverParameters,
        fb: f64,
        warnings: &mut Vec<DesignWarning>,
    ) -> Option<Alignment> {
        if !check_tuning("fb", fb, warnings) {
            return None;
        }

        // Approximate Butterworth B4.
        let h = fb / params.fs;
        let alpha = 1.0 / (h * h) - 1.0;
        if !check_alpha(TopologyKind::Ported, alpha, warnings) {
            return None;
        }

        let gross_volume = params.vas / alpha;
        Some(Alignment {
            alpha,
            gross_volume,
            tuning_hz: fb,
            response: PORTED_RESPONSE,
            vent: Vent::Helmholtz {
                k: HELMHOLTZ_K_SINGLE,
                volume_l: gross_volume,
            },
        })
    }

    fn bandpass(
        params: &DriverParameters,
        s: f64,
        warnings: &mut Vec<DesignWarning>,
    ) -> Option<Alignment> {
        if !check_tuning("s", s, warnings) {
            return None;
        }

        let qbp = 1.0 / (2.0 * s);
        let alpha = (qbp / params.qts).powi(2) - 1.0;
        if !check_alpha(TopologyKind::Bandpass, alpha, warnings) {
            return None;
        }

        let front = (2.0 * s * params.qts).powi(2) * params.vas;
        let rear = params.vas / alpha;
        Some(Alignment {
            alpha,
            gross_volume: front + rear,
            tuning_hz: qbp * (params.fs / params.qts),
            response: BANDPASS_RESPONSE,
            // Only the front chamber is vented.
            vent: Vent::Helmholtz {
                k: HELMHOLTZ_K_BANDPASS,
                volume_l: front,
            },
        })
    }

    fn transmission_line(
        params: &DriverParameters,
        tr: f64,
        warnings: &mut Vec<DesignWarning>,
    ) -> Option<Alignment> {
        if !check_tuning("tr", tr, warnings) {
            return None;
        }

        let taper = TL_TAPER_TABLE.lookup(tr);
        if taper.clamped {
            warnings.push(DesignWarning::TaperOutsideTable {
                tr,
                clamped: taper.value,
            });
        }

        let tuning_hz = TL_TUNING_RATIO * params.fs;
        Some(Alignment {
            alpha: TL_ALPHA,
            gross_volume: params.vas / TL_ALPHA,
            tuning_hz,
            response: TRANSMISSION_LINE_RESPONSE,
            vent: Vent::Line {
                length_cm: quarter_wave_length(taper.value, tuning_hz),
            },
        })
    }

    fn passive_radiator(
        params: &DriverParameters,
        delta: f64,
        warnings: &mut Vec<DesignWarning>,
    ) -> Option<Alignment> {
        let alpha = delta;
        if !check_alpha(TopologyKind::PassiveRadiator, alpha, warnings) {
            return None;
        }

        let h = PR_TUNING_TABLE.lookup(delta).value;
        Some(Alignment {
            alpha,
            gross_volume: params.vas / alpha,
            tuning_hz: h * params.fs,
            response: PASSIVE_RADIATOR_RESPONSE,
            vent: Vent::None,
        })
    }
}

fn log_warnings(result: &EnclosureResult) {
    for warning in &result.warnings {
        log::warn!("{} design: {warning}", result.topology);
    }
}
