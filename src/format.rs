use num_complex::Complex64;
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Encoding of each complex pair on a Touchstone data line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ComplexNumberType {
    #[default]
    ReIm,
    MagAng,
    Db,
    /// Any other option-line token. Pairs decode to zero magnitude and phase.
    Unknown,
}

impl ComplexNumberType {
    /// Decode a pair into (linear magnitude, phase in degrees).
    pub fn mag_ang(&self, x: f64, y: f64) -> (f64, f64) {
        match self {
            ComplexNumberType::ReIm => {
                let c = Complex64::new(x, y);
                (c.norm(), c.arg().to_degrees())
            }
            ComplexNumberType::MagAng => (x, y),
            ComplexNumberType::Db => (10_f64.powf(x / 20.0), y),
            ComplexNumberType::Unknown => (0.0, 0.0),
        }
    }

    /// Decode a pair into (magnitude in dB, phase in degrees).
    pub fn db_ang(&self, x: f64, y: f64) -> (f64, f64) {
        let (mag, ang) = self.mag_ang(x, y);
        (20.0 * mag.log10(), ang)
    }
}

impl FromStr for ComplexNumberType {
    type Err = Box<dyn std::error::Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "RI" => Ok(ComplexNumberType::ReIm),
            "MA" => Ok(ComplexNumberType::MagAng),
            "DB" => Ok(ComplexNumberType::Db),
            _ => Ok(ComplexNumberType::Unknown),
        }
    }
}

impl fmt::Display for ComplexNumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            ComplexNumberType::ReIm => write!(f, "RI"),
            ComplexNumberType::MagAng => write!(f, "MA"),
            ComplexNumberType::Db => write!(f, "DB"),
            ComplexNumberType::Unknown => write!(f, "unknown"),
        }
    }
}
