//! Python bindings for the enclosure designer.

use std::collections::HashMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::driver::DriverParameters;
use crate::enclosure::{DesignerSettings, EnclosureDesigner, TuningOptions};
use crate::logging::setup_logger;

/// EnclosureDesigner computes box volumes, tuning and port geometry from
/// Thiele-Small parameters.
#[pyclass(name = "EnclosureDesigner", frozen)]
pub struct PyEnclosureDesigner {
    inner: EnclosureDesigner,
}

#[pymethods]
impl PyEnclosureDesigner {
    /// Create a designer, optionally overriding port diameter (cm) and
    /// bracing allowance (liters).
    ///
    /// Raises ValueError for a non-positive diameter, a negative bracing
    /// allowance or a non-finite value.
    #[new]
    #[pyo3(signature = (port_diameter_cm=None, bracing_allowance_l=None))]
    pub fn new(port_diameter_cm: Option<f64>, bracing_allowance_l: Option<f64>) -> PyResult<Self> {
        setup_logger("warn");

        let defaults = DesignerSettings::default();
        let settings = DesignerSettings {
            port_diameter_cm: port_diameter_cm.unwrap_or(defaults.port_diameter_cm),
            bracing_allowance_l: bracing_allowance_l.unwrap_or(defaults.bracing_allowance_l),
            ..defaults
        };
        let inner = EnclosureDesigner::with_settings(settings)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyEnclosureDesigner { inner })
    }

    /// Recommend "Sealed", "Ported" or "Other" from Qts.
    pub fn recommend(&self, qts: f64) -> &'static str {
        self.inner.recommend(qts).name()
    }

    /// Design an enclosure.
    ///
    /// Args:
    ///     params: Driver parameters keyed by fs, qts, vas, re, sd, xmax, vd, le, cms, mms, bl
    ///     topology: Sealed, Ported, Bandpass, TransmissionLine or PassiveRadiator
    ///     options: Tuning overrides keyed by qtc, fb, s, tr, delta
    ///
    /// Returns:
    ///     Dict with the design result; `warnings` is a list of strings
    #[pyo3(signature = (params, topology, options=None))]
    pub fn design(
        &self,
        py: Python<'_>,
        params: HashMap<String, f64>,
        topology: &str,
        options: Option<HashMap<String, f64>>,
    ) -> PyResult<Py<PyAny>> {
        let driver = DriverParameters::from_pairs(params.iter().map(|(k, v)| (k.as_str(), *v)));
        let options = options
            .map(|o| TuningOptions::from_pairs(o.iter().map(|(k, v)| (k.as_str(), *v))))
            .unwrap_or_default();

        let result = self
            .inner
            .design_named(&driver, topology, &options)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        let warnings: Vec<String> = result.warnings.iter().map(ToString::to_string).collect();

        let dict = PyDict::new(py);
        dict.set_item("type", result.topology.name())?;
        dict.set_item("alpha", result.alpha)?;
        dict.set_item("gross_volume", result.gross_volume)?;
        dict.set_item("vb", result.net_volume)?;
        dict.set_item("fc_or_fb", result.tuning_frequency)?;
        dict.set_item("freq_response", result.frequency_response)?;
        dict.set_item("port_length", result.port_length)?;
        dict.set_item("port_diameter", result.port_diameter)?;
        dict.set_item("air_velocity", result.air_velocity)?;
        dict.set_item("width", result.cabinet.width)?;
        dict.set_item("height", result.cabinet.height)?;
        dict.set_item("depth", result.cabinet.depth)?;
        dict.set_item("within_xmax", result.within_xmax)?;
        dict.set_item("warnings", warnings)?;

        Ok(dict.into_any().unbind())
    }
}
