use core::fmt;
use serde::{Serialize, Serializer};
use simple_error::{bail, SimpleError};
use std::str::FromStr;

/// Descriptor of RF parameter type named on the option line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Eq, Hash)]
pub enum RFParameter {
    G,
    H,
    #[default]
    S,
    Y,
    Z,
}

impl RFParameter {
    // Convert RFParameter to &str
    pub fn to_str(&self) -> &str {
        match self {
            RFParameter::G => "G",
            RFParameter::H => "H",
            RFParameter::S => "S",
            RFParameter::Y => "Y",
            RFParameter::Z => "Z",
        }
    }
}

impl FromStr for RFParameter {
    type Err = SimpleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "g" => Ok(RFParameter::G),
            "h" => Ok(RFParameter::H),
            "s" => Ok(RFParameter::S),
            "y" => Ok(RFParameter::Y),
            "z" => Ok(RFParameter::Z),
            _ => bail!("string not a valid option line parameter type"),
        }
    }
}

impl fmt::Display for RFParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Name of a single S-parameter, 1-indexed `S{row}{col}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParameterName {
    row: usize,
    col: usize,
}

impl ParameterName {
    pub fn new(row: usize, col: usize) -> Self {
        ParameterName { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}{}", self.row, self.col)
    }
}

impl Serialize for ParameterName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for ParameterName {
    type Err = SimpleError;

    /// Accepts `S21` for single digit ports, or `S2,1` / `S2_1` for any port.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(idx) = s.strip_prefix('S').or_else(|| s.strip_prefix('s')) else {
            bail!("parameter name must start with 'S': {}", s);
        };

        let (row, col) = match idx.split_once([',', '_']) {
            Some((row, col)) => (row.parse::<usize>(), col.parse::<usize>()),
            None => {
                if idx.len() != 2 || !idx.chars().all(|c| c.is_ascii_digit()) {
                    bail!("ambiguous parameter name, use S<i>,<j>: {}", s);
                }
                (idx[..1].parse::<usize>(), idx[1..].parse::<usize>())
            }
        };

        match (row, col) {
            (Ok(row), Ok(col)) if row > 0 && col > 0 => Ok(ParameterName::new(row, col)),
            _ => bail!("invalid parameter indices: {}", s),
        }
    }
}

/// Ordered parameter names for an n-port network.
///
/// Row-major: `S11, S12, .., S1N, S21, ..`. Index `k` of the result names the
/// `k`-th complex pair of a Touchstone data line.
pub fn enumerate(nports: usize) -> Vec<ParameterName> {
    let mut names = Vec::with_capacity(nports * nports);
    for i in 1..=nports {
        for j in 1..=nports {
            names.push(ParameterName::new(i, j));
        }
    }
    names
}

/// Parameter names in the order their pairs appear on a data line.
///
/// Two-port files list `S11 S21 S12 S22`; every other port count follows
/// `enumerate`.
pub fn column_order(nports: usize) -> Vec<ParameterName> {
    match nports {
        2 => vec![
            ParameterName::new(1, 1),
            ParameterName::new(2, 1),
            ParameterName::new(1, 2),
            ParameterName::new(2, 2),
        ],
        _ => enumerate(nports),
    }
}
