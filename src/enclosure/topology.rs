//! Enclosure topologies and their tuning options.
//!
//! [`EnclosureTopology`] carries exactly the tuning value each formula set
//! needs. [`TuningOptions`] is the loosely-populated form coming from a file,
//! the command line or Python; [`EnclosureTopology::resolve`] applies the
//! defaults once, at the boundary.

use std::fmt;
use std::str::FromStr;

use crate::driver::DriverParameters;
use crate::enclosure::constants::{
    DEFAULT_BANDPASS_S, DEFAULT_PR_DELTA, DEFAULT_QTC, DEFAULT_TAPER_RATIO,
    RECOMMEND_PORTED_BELOW, RECOMMEND_SEALED_MAX,
};
use crate::enclosure::errors::DesignError;

/// The five supported enclosure kinds, without tuning data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopologyKind {
    Sealed,
    Ported,
    Bandpass,
    TransmissionLine,
    PassiveRadiator,
}

impl TopologyKind {
    pub const ALL: [TopologyKind; 5] = [
        Self::Sealed,
        Self::Ported,
        Self::Bandpass,
        Self::TransmissionLine,
        Self::PassiveRadiator,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sealed => "Sealed",
            Self::Ported => "Ported",
            Self::Bandpass => "Bandpass",
            Self::TransmissionLine => "TransmissionLine",
            Self::PassiveRadiator => "PassiveRadiator",
        }
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TopologyKind {
    type Err = DesignError;

    /// Accepts the variant names in any case, ignoring spaces, `-` and `_`,
    /// plus the short aliases `vented`, `bp`, `tl` and `pr`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "sealed" | "closed" => Ok(Self::Sealed),
            "ported" | "vented" => Ok(Self::Ported),
            "bandpass" | "bp" => Ok(Self::Bandpass),
            "transmissionline" | "tl" => Ok(Self::TransmissionLine),
            "passiveradiator" | "pr" => Ok(Self::PassiveRadiator),
            _ => Err(DesignError::UnsupportedTopology(s.to_string())),
        }
    }
}

/// Optional tuning overrides. Missing fields fall back to the documented defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TuningOptions {
    /// Target system Q (sealed). Default 0.707.
    pub qtc: Option<f64>,
    /// Target tuning frequency in Hz (ported). Default: driver Fs.
    pub fb: Option<f64>,
    /// Bandpass volume ratio. Default 0.6.
    pub s: Option<f64>,
    /// Transmission-line taper ratio. Default 1.0.
    pub tr: Option<f64>,
    /// Passive-radiator compliance ratio. Default 1.0.
    pub delta: Option<f64>,
}

impl TuningOptions {
    /// Builds options from a string-keyed mapping. Unrecognized keys are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            match key {
                "qtc" => options.qtc = Some(value),
                "fb" => options.fb = Some(value),
                "s" => options.s = Some(value),
                "tr" => options.tr = Some(value),
                "delta" => options.delta = Some(value),
                _ => log::debug!("Ignoring unknown tuning option '{key}'"),
            }
        }
        options
    }
}

/// A topology together with its resolved tuning parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnclosureTopology {
    Sealed { qtc: f64 },
    Ported { fb: f64 },
    Bandpass { s: f64 },
    TransmissionLine { tr: f64 },
    PassiveRadiator { delta: f64 },
}

impl EnclosureTopology {
    /// Resolves `kind` against `options`, filling in defaults.
    ///
    /// The ported default depends on the driver (`fb = Fs`), which is why the
    /// parameters are needed here.
    pub fn resolve(kind: TopologyKind, options: &TuningOptions, params: &DriverParameters) -> Self {
        match kind {
            TopologyKind::Sealed => Self::Sealed {
                qtc: options.qtc.unwrap_or(DEFAULT_QTC),
            },
            TopologyKind::Ported => Self::Ported {
                fb: options.fb.unwrap_or(params.fs),
            },
            TopologyKind::Bandpass => Self::Bandpass {
                s: options.s.unwrap_or(DEFAULT_BANDPASS_S),
            },
            TopologyKind::TransmissionLine => Self::TransmissionLine {
                tr: options.tr.unwrap_or(DEFAULT_TAPER_RATIO),
            },
            TopologyKind::PassiveRadiator => Self::PassiveRadiator {
                delta: options.delta.unwrap_or(DEFAULT_PR_DELTA),
            },
        }
    }

    pub fn sealed() -> Self {
        Self::Sealed { qtc: DEFAULT_QTC }
    }

    pub fn kind(&self) -> TopologyKind {
        match self {
            Self::Sealed { .. } => TopologyKind::Sealed,
            Self::Ported { .. } => TopologyKind::Ported,
            Self::Bandpass { .. } => TopologyKind::Bandpass,
            Self::TransmissionLine { .. } => TopologyKind::TransmissionLine,
            Self::PassiveRadiator { .. } => TopologyKind::PassiveRadiator,
        }
    }
}

/// Topology suggested by the driver's Qts alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Sealed,
    Ported,
    Other,
}

impl Recommendation {
    /// `Ported` below 0.4, `Sealed` in `0.4..=0.6`, `Other` otherwise (NaN included).
    pub fn for_qts(qts: f64) -> Self {
        if qts < RECOMMEND_PORTED_BELOW {
            Self::Ported
        } else if (RECOMMEND_PORTED_BELOW..=RECOMMEND_SEALED_MAX).contains(&qts) {
            Self::Sealed
        } else {
            Self::Other
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sealed => "Sealed",
            Self::Ported => "Ported",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
