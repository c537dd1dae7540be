//! Empirical alignment tables.
//!
//! Transmission-line and passive-radiator designs are not solved analytically;
//! their constants come from published alignment tables. The tables live here
//! as data so new rows can be added without touching the formulas.

/// One tabulated point: `key -> value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentRow {
    pub key: f64,
    pub value: f64,
}

/// Result of a table lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lookup {
    pub value: f64,
    /// `true` when the key fell outside the table and the nearest row was used.
    pub clamped: bool,
}

/// A piecewise-linear table over rows sorted by ascending key.
#[derive(Debug, Clone, Copy)]
pub struct AlignmentTable {
    rows: &'static [AlignmentRow],
}

impl AlignmentTable {
    pub const fn new(rows: &'static [AlignmentRow]) -> Self {
        Self { rows }
    }

    /// Interpolates linearly between neighbouring rows; outside the table the
    /// first or last row is used and the lookup is marked as clamped.
    pub fn lookup(&self, key: f64) -> Lookup {
        let (Some(first), Some(last)) = (self.rows.first(), self.rows.last()) else {
            return Lookup {
                value: 0.0,
                clamped: true,
            };
        };

        if key.is_nan() || key < first.key {
            return Lookup {
                value: first.value,
                clamped: key != first.key,
            };
        }
        if key > last.key {
            return Lookup {
                value: last.value,
                clamped: true,
            };
        }

        for pair in self.rows.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if key <= hi.key {
                let span = hi.key - lo.key;
                if span <= 0.0 {
                    return Lookup {
                        value: hi.value,
                        clamped: false,
                    };
                }
                let t = (key - lo.key) / span;
                return Lookup {
                    value: lo.value + (hi.value - lo.value) * t,
                    clamped: false,
                };
            }
        }

        Lookup {
            value: last.value,
            clamped: false,
        }
    }
}

/// Transmission-line taper ratio (`tr`) to line-length correction (`sf`).
pub const TL_TAPER_TABLE: AlignmentTable = AlignmentTable::new(&[
    AlignmentRow {
        key: 0.1,
        value: 0.62,
    },
    AlignmentRow {
        key: 1.0,
        value: 1.0,
    },
]);

/// Transmission-line compliance ratio for a straight line.
pub const TL_ALPHA: f64 = 1.5198;

/// Transmission-line tuning multiplier (`Fb = h · Fs`).
pub const TL_TUNING_RATIO: f64 = 1.0;

/// Passive-radiator compliance ratio (`delta`) to tuning multiplier (`h`).
pub const PR_TUNING_TABLE: AlignmentTable = AlignmentTable::new(&[AlignmentRow {
    key: 1.0,
    value: 1.51,
}]);

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ROWS: AlignmentTable = AlignmentTable::new(&[
        AlignmentRow {
            key: 0.0,
            value: 10.0,
        },
        AlignmentRow {
            key: 1.0,
            value: 20.0,
        },
    ]);

    #[test]
    fn test_exact_rows() {
        assert_eq!(
            TL_TAPER_TABLE.lookup(1.0),
            Lookup {
                value: 1.0,
                clamped: false
            }
        );
        assert_eq!(
            TL_TAPER_TABLE.lookup(0.1),
            Lookup {
                value: 0.62,
                clamped: false
            }
        );
    }

    #[test]
    fn test_interpolation() {
        let lookup = TWO_ROWS.lookup(0.25);
        assert!((lookup.value - 12.5).abs() < 1e-12);
        assert!(!lookup.clamped);

        let lookup = TL_TAPER_TABLE.lookup(0.55);
        assert!((lookup.value - 0.81).abs() < 1e-9);
    }

    #[test]
    fn test_clamping_outside_range() {
        let below = TWO_ROWS.lookup(-3.0);
        assert_eq!(below.value, 10.0);
        assert!(below.clamped);

        let above = TWO_ROWS.lookup(4.0);
        assert_eq!(above.value, 20.0);
        assert!(above.clamped);

        let nan = TWO_ROWS.lookup(f64::NAN);
        assert_eq!(nan.value, 10.0);
        assert!(nan.clamped);
    }

    #[test]
    fn test_single_row_table() {
        assert_eq!(PR_TUNING_TABLE.lookup(1.0).value, 1.51);
        assert!(!PR_TUNING_TABLE.lookup(1.0).clamped);
        assert_eq!(PR_TUNING_TABLE.lookup(2.0).value, 1.51);
        assert!(PR_TUNING_TABLE.lookup(2.0).clamped);
    }

    #[test]
    fn test_empty_table() {
        const EMPTY: AlignmentTable = AlignmentTable::new(&[]);
        let lookup = EMPTY.lookup(1.0);
        assert_eq!(lookup.value, 0.0);
        assert!(lookup.clamped);
    }
}
