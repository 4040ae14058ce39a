//! Touchstone (`.sNp`) S-parameter parsing and trace preparation.
//!
//! ```
//! use snpplot::prelude::*;
//!
//! let text = "# GHz S MA R 50\n1.0 0.1 10 0.9 -170 0.05 90 0.95 5\n";
//! let ts = parse_touchstone(text, 2);
//! let s21 = ParameterName::new(2, 1);
//! assert_eq!(ts.phase_deg(&s21).unwrap(), &[-170.0]);
//! ```
pub mod error;
pub mod file;
pub mod format;
pub mod parameter;
pub mod plot;
pub mod prelude;
pub mod scale;
pub mod touchstone;
pub mod util;
