use serde::Serialize;
use std::{fmt, str::FromStr};

/// Frequency unit prefix from the option line
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub enum Scale {
    Base,
    Kilo,
    Mega,
    #[default]
    Giga,
    Tera,
}

impl Scale {
    pub fn to_str(&self) -> &str {
        match self {
            Scale::Base => "",
            Scale::Kilo => "k",
            Scale::Mega => "M",
            Scale::Giga => "G",
            Scale::Tera => "T",
        }
    }
}

impl FromStr for Scale {
    type Err = Box<dyn std::error::Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hz" => Ok(Scale::Base),
            "khz" => Ok(Scale::Kilo),
            "mhz" => Ok(Scale::Mega),
            "ghz" => Ok(Scale::Giga),
            "thz" => Ok(Scale::Tera),
            _ => Err(format!("frequency unit not recognized: {}", s).into()),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Hz", self.to_str())
    }
}
