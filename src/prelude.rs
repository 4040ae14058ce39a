//! snpplot prelude.
//!
//! This module contains the most used types and functions that you can
//! import easily as a group.
//!
//! ```
//! use snpplot::prelude::*;
//!
//! ```

#[doc(no_inline)]
pub use crate::error::TouchstoneError;

#[doc(no_inline)]
pub use crate::file::{nports_from_path, read_touchstone};

#[doc(no_inline)]
pub use crate::format::ComplexNumberType;

#[doc(no_inline)]
pub use crate::parameter::{column_order, enumerate, ParameterName, RFParameter};

#[doc(no_inline)]
pub use crate::plot::{Chart, PlotBuilder, PlotData, Trace};

#[doc(no_inline)]
pub use crate::scale::Scale;

#[doc(no_inline)]
pub use crate::touchstone::{parse_touchstone, OptionLine, Series, Touchstone};
