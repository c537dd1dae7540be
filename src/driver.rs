//! Thiele-Small driver parameters.
//!
//! [`DriverParameters`] is a plain value record. Construction never validates:
//! zero or negative measurements are accepted here and turned into design
//! warnings by the [`EnclosureDesigner`](crate::enclosure::EnclosureDesigner).

use crate::config::ConfigError;

/// Persistence keys, in the order they are written to a driver file.
pub const FIELD_NAMES: [&str; 11] = [
    "fs", "qts", "vas", "re", "sd", "xmax", "vd", "le", "cms", "mms", "bl",
];

/// Small-signal parameters of a loudspeaker driver.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DriverParameters {
    /// Free-air resonance (Hz).
    pub fs: f64,
    /// Total Q at resonance.
    pub qts: f64,
    /// Equivalent compliance volume (liters).
    pub vas: f64,
    /// Voice-coil DC resistance (ohms).
    pub re: f64,
    /// Effective diaphragm area (cm²).
    pub sd: f64,
    /// Peak linear one-way excursion (mm).
    pub xmax: f64,
    /// Volume displaced by the driver inside the box (liters).
    pub vd: f64,
    /// Voice-coil inductance (mH).
    pub le: f64,
    /// Mechanical compliance (m/N).
    pub cms: f64,
    /// Moving mass (g).
    pub mms: f64,
    /// Force factor (T·m).
    pub bl: f64,
}

impl DriverParameters {
    /// Displaced volume derived from diaphragm area and excursion: `Sd · Xmax / 1000`.
    pub fn derived_vd(&self) -> f64 {
        self.sd * self.xmax / 1000.0
    }

    /// Returns a copy whose `vd` is replaced by [`derived_vd`](Self::derived_vd).
    pub fn with_derived_vd(self) -> Self {
        Self {
            vd: self.derived_vd(),
            ..self
        }
    }

    /// Reads a field by its persistence key.
    pub fn get(&self, key: &str) -> Option<f64> {
        let value = match key {
            "fs" => self.fs,
            "qts" => self.qts,
            "vas" => self.vas,
            "re" => self.re,
            "sd" => self.sd,
            "xmax" => self.xmax,
            "vd" => self.vd,
            "le" => self.le,
            "cms" => self.cms,
            "mms" => self.mms,
            "bl" => self.bl,
            _ => return None,
        };
        Some(value)
    }

    /// Writes a field by its persistence key.
    pub fn set(&mut self, key: &str, value: f64) -> Result<(), ConfigError> {
        let slot = match key {
            "fs" => &mut self.fs,
            "qts" => &mut self.qts,
            "vas" => &mut self.vas,
            "re" => &mut self.re,
            "sd" => &mut self.sd,
            "xmax" => &mut self.xmax,
            "vd" => &mut self.vd,
            "le" => &mut self.le,
            "cms" => &mut self.cms,
            "mms" => &mut self.mms,
            "bl" => &mut self.bl,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        *slot = value;
        Ok(())
    }

    /// Builds a record from `(key, value)` pairs. Unknown keys are skipped.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            if params.set(key, value).is_err() {
                log::debug!("Ignoring unknown driver parameter '{key}'");
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let params = DriverParameters::default();
        for key in FIELD_NAMES {
            assert_eq!(params.get(key), Some(0.0), "{key}");
        }
    }

    #[test]
    fn test_derived_vd() {
        let params = DriverParameters {
            sd: 220.0,
            xmax: 5.0,
            ..Default::default()
        };
        assert!((params.derived_vd() - 1.1).abs() < 1e-12);

        let params = params.with_derived_vd();
        assert!((params.vd - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_set_and_get_every_field() {
        let mut params = DriverParameters::default();
        for (i, key) in FIELD_NAMES.iter().enumerate() {
            params.set(key, i as f64 + 1.0).unwrap();
        }
        for (i, key) in FIELD_NAMES.iter().enumerate() {
            assert_eq!(params.get(key), Some(i as f64 + 1.0));
        }
        assert_eq!(params.fs, 1.0);
        assert_eq!(params.bl, 11.0);
    }

    #[test]
    fn test_unknown_key() {
        let mut params = DriverParameters::default();
        assert!(params.get("sensitivity").is_none());
        assert!(matches!(
            params.set("sensitivity", 88.0),
            Err(ConfigError::UnknownKey(key)) if key == "sensitivity"
        ));
    }

    #[test]
    fn test_from_pairs_skips_unknown_keys() {
        let params = DriverParameters::from_pairs([("fs", 30.0), ("qts", 0.4), ("spl", 90.0)]);
        assert_eq!(params.fs, 30.0);
        assert_eq!(params.qts, 0.4);
        assert_eq!(params.vas, 0.0);
    }
}
