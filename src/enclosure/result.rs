//! Design result and warning definitions.

use std::fmt;

use crate::enclosure::cabinet::CabinetDimensions;
use crate::enclosure::topology::TopologyKind;

/// A condition that constrains or invalidates a design.
///
/// Warnings are data, not errors: the designer always returns a result and
/// callers branch on the warning kinds they care about.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignWarning {
    /// A driver parameter the formulas divide by or scale with is unusable.
    InvalidDriverParameter { parameter: &'static str, value: f64 },

    /// A tuning option is zero, negative or not finite.
    InvalidTuningOption { option: &'static str, value: f64 },

    /// The alignment constant is non-positive or not finite: no box realizes
    /// the requested target with this driver.
    InfeasibleAlignment { topology: TopologyKind, alpha: f64 },

    /// Driver, bracing and port displacements consume the whole volume.
    NegativeNetVolume { gross_liters: f64, net_liters: f64 },

    /// The vent equation has no positive-length solution for this box.
    NonPhysicalPort { length_cm: f64 },

    /// Peak vent air velocity above the audible-noise limit.
    PortVelocityHigh { velocity: f64, limit: f64 },

    /// Taper ratio outside the alignment table; the nearest row was used.
    TaperOutsideTable { tr: f64, clamped: f64 },

    /// A computed quantity exceeded the `f64` range; the design was abandoned.
    Overflow { quantity: &'static str },
}

impl DesignWarning {
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Self::InfeasibleAlignment { .. })
    }
}

impl fmt::Display for DesignWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDriverParameter { parameter, value } => {
                write!(f, "invalid driver parameter {parameter} = {value}")
            }
            Self::InvalidTuningOption { option, value } => {
                write!(f, "invalid tuning option {option} = {value}")
            }
            Self::InfeasibleAlignment { topology, alpha } => write!(
                f,
                "no valid {topology} alignment for this driver (alpha = {alpha:.4})"
            ),
            Self::NegativeNetVolume {
                gross_liters,
                net_liters,
            } => write!(
                f,
                "internal displacements exceed box volume ({gross_liters:.2} L gross, {net_liters:.2} L net)"
            ),
            Self::NonPhysicalPort { length_cm } => write!(
                f,
                "port length {length_cm:.2} cm is not physical; use a larger box or smaller port diameter"
            ),
            Self::PortVelocityHigh { velocity, limit } => write!(
                f,
                "port air velocity {velocity:.1} m/s exceeds {limit:.1} m/s; expect port noise"
            ),
            Self::TaperOutsideTable { tr, clamped } => write!(
                f,
                "taper ratio {tr} is outside the alignment table; using {clamped}"
            ),
            Self::Overflow { quantity } => {
                write!(f, "{quantity} is out of range; check the driver parameters")
            }
        }
    }
}

/// A fully-populated enclosure design.
#[derive(Debug, Clone, PartialEq)]
pub struct EnclosureResult {
    pub topology: TopologyKind,
    /// Alignment constant the volume was derived from.
    pub alpha: f64,
    /// Internal volume before displacements (liters).
    pub gross_volume: f64,
    /// Usable internal volume (liters). Negative values carry a
    /// [`DesignWarning::NegativeNetVolume`].
    pub net_volume: f64,
    /// Fc for sealed boxes, Fb otherwise (Hz).
    pub tuning_frequency: f64,
    pub frequency_response: &'static str,
    /// Vent length, or line length for transmission lines (cm).
    pub port_length: f64,
    pub port_diameter: f64,
    /// Peak vent air velocity (m/s).
    pub air_velocity: f64,
    pub cabinet: CabinetDimensions,
    pub within_xmax: bool,
    pub warnings: Vec<DesignWarning>,
}

impl EnclosureResult {
    /// A zero-valued result for `topology`, used as the starting point and as
    /// the best-effort answer when a design is abandoned.
    pub fn empty(topology: TopologyKind) -> Self {
        Self {
            topology,
            alpha: 0.0,
            gross_volume: 0.0,
            net_volume: 0.0,
            tuning_frequency: 0.0,
            frequency_response: "",
            port_length: 0.0,
            port_diameter: 0.0,
            air_velocity: 0.0,
            cabinet: CabinetDimensions::default(),
            within_xmax: false,
            warnings: Vec::new(),
        }
    }

    pub fn has_port(&self) -> bool {
        self.port_length > 0.0
    }

    pub fn is_infeasible(&self) -> bool {
        self.warnings.iter().any(DesignWarning::is_infeasible)
    }
}

impl fmt::Display for EnclosureResult {
    /// Plain-text report, one field per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Type: {}", self.topology)?;
        writeln!(f, "Vb (gross): {:.2} L", self.gross_volume)?;
        writeln!(f, "Vb (net): {:.2} L", self.net_volume)?;
        writeln!(f, "Fc/Fb: {:.2} Hz", self.tuning_frequency)?;
        writeln!(f, "Response: {}", self.frequency_response)?;
        if self.has_port() {
            writeln!(f, "Port Length: {:.2} cm", self.port_length)?;
            if self.port_diameter > 0.0 {
                writeln!(f, "Port Diameter: {:.2} cm", self.port_diameter)?;
                writeln!(f, "Air Velocity: {:.2} m/s", self.air_velocity)?;
            }
        }
        writeln!(
            f,
            "Dimensions (WxHxD cm): {:.1}x{:.1}x{:.1}",
            self.cabinet.width, self.cabinet.height, self.cabinet.depth
        )?;
        write!(
            f,
            "Within Xmax: {}",
            if self.within_xmax { "Yes" } else { "No" }
        )?;
        for warning in &self.warnings {
            write!(f, "\nWarning: {warning}")?;
        }
        Ok(())
    }
}
