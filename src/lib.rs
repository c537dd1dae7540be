//! Loudspeaker enclosure design from Thiele-Small parameters.
//!
//! The entry point is [`EnclosureDesigner`]: give it a [`DriverParameters`]
//! record and an [`EnclosureTopology`] and it returns an [`EnclosureResult`]
//! with volume, tuning, vent geometry, cabinet dimensions and warnings.

pub mod config;
pub mod driver;
pub mod enclosure;
pub mod logging;

#[cfg(feature = "python")]
mod python;

pub use config::{ConfigError, KeyValueFile};
pub use driver::DriverParameters;
pub use enclosure::{
    DesignError, DesignWarning, DesignerSettings, EnclosureDesigner, EnclosureResult,
    EnclosureTopology, Recommendation, TopologyKind, TuningOptions,
};

/// The Python module implemented in Rust.
#[cfg(feature = "python")]
#[pyo3::pymodule]
mod speakerbox {
    #[pymodule_export]
    use super::python::PyEnclosureDesigner;
}
