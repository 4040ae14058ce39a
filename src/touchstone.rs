//! Touchstone text parser.
//!
//! Lines are handled one at a time:
//! - blank lines and `!` comments are skipped
//! - a `#` option line sets the data format (field 3, e.g. `# GHz S MA R 50`)
//! - anything else is a data line: a frequency followed by N² complex pairs in
//!   row-major order (`S11 S12 .. S1N S21 ..`), except two-port files which
//!   use `S11 S21 S12 S22`
//!
//! Data lines seen before a format, or carrying fewer than `1 + 2N²` values,
//! are dropped whole so every series stays aligned with the frequency axis.

use crate::format::ComplexNumberType;
use crate::parameter::{column_order, enumerate, ParameterName, RFParameter};
use crate::scale::Scale;
use serde::Serialize;
use std::str::FromStr;

/// Fields of a `# <unit> <param> <format> R <impedance>` option line.
///
/// Only `format` changes how data lines are decoded; the rest is kept for
/// display.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OptionLine {
    pub unit: Option<Scale>,
    pub parameter: Option<RFParameter>,
    pub format: Option<ComplexNumberType>,
    pub impedance: Option<f64>,
}

impl OptionLine {
    /// Fields are positional on the whitespace split of the whole line, `#`
    /// included, so the format is field 3.
    pub fn parse(line: &str) -> OptionLine {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let field = |i: usize| fields.get(i).copied();

        let impedance = fields
            .iter()
            .position(|f| f.eq_ignore_ascii_case("r"))
            .and_then(|i| field(i + 1))
            .and_then(|z| z.parse::<f64>().ok());

        OptionLine {
            unit: field(1).and_then(|u| Scale::from_str(u).ok()),
            parameter: field(2).and_then(|p| RFParameter::from_str(p).ok()),
            format: field(3).and_then(|f| ComplexNumberType::from_str(f).ok()),
            impedance,
        }
    }
}

/// Magnitude and phase samples for one parameter.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Series {
    mag_db: Vec<f64>,
    phase_deg: Vec<f64>,
}

impl Series {
    pub fn mag_db(&self) -> &[f64] {
        &self.mag_db
    }

    pub fn phase_deg(&self) -> &[f64] {
        &self.phase_deg
    }

    pub fn len(&self) -> usize {
        self.mag_db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mag_db.is_empty()
    }
}

/// Parsed Touchstone data, one series per enumerated parameter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Touchstone {
    name: String,
    nports: usize,
    params: Vec<ParameterName>,
    options: Option<OptionLine>,
    comments: String,
    freq: Vec<f64>,
    series: Vec<Series>,
    skipped_lines: usize,
}

impl Touchstone {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn nports(&self) -> usize {
        self.nports
    }

    /// Parameter names in `enumerate` order; series `k` belongs to `params()[k]`.
    pub fn params(&self) -> &[ParameterName] {
        &self.params
    }

    /// Last option line seen, if any.
    pub fn options(&self) -> Option<&OptionLine> {
        self.options.as_ref()
    }

    pub fn format(&self) -> Option<ComplexNumberType> {
        self.options.as_ref().and_then(|o| o.format)
    }

    /// `!` comment text found ahead of the first data line.
    pub fn comments(&self) -> &str {
        &self.comments
    }

    /// Frequency values as written in the file.
    pub fn freq(&self) -> &[f64] {
        &self.freq
    }

    pub fn npts(&self) -> usize {
        self.freq.len()
    }

    /// Data lines dropped for arriving before a format or being too short.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Position of `param` in `params()`.
    pub fn index_of(&self, param: &ParameterName) -> Option<usize> {
        let (i, j) = (param.row(), param.col());
        if i == 0 || j == 0 || i > self.nports || j > self.nports {
            return None;
        }
        Some((i - 1) * self.nports + (j - 1))
    }

    pub fn series(&self, k: usize) -> Option<&Series> {
        self.series.get(k)
    }

    pub fn series_of(&self, param: &ParameterName) -> Option<&Series> {
        self.index_of(param).and_then(|k| self.series.get(k))
    }

    pub fn mag_db(&self, param: &ParameterName) -> Option<&[f64]> {
        self.series_of(param).map(Series::mag_db)
    }

    pub fn phase_deg(&self, param: &ParameterName) -> Option<&[f64]> {
        self.series_of(param).map(Series::phase_deg)
    }
}

/// Parse Touchstone text for an `nports`-port network.
///
/// Never fails. Malformed data lines are dropped, non-numeric values become
/// NaN and zero magnitudes become negative infinity dB.
pub fn parse_touchstone(text: &str, nports: usize) -> Touchstone {
    let params = enumerate(nports);
    let nparams = params.len();
    let min_fields = 1 + 2 * nparams;
    // series slot for the k-th pair on a data line
    let slots: Vec<usize> = column_order(nports)
        .iter()
        .map(|p| (p.row() - 1) * nports + (p.col() - 1))
        .collect();

    let mut options: Option<OptionLine> = None;
    let mut comments = String::new();
    let mut data_section = false;
    let mut freq: Vec<f64> = vec![];
    let mut series = vec![Series::default(); nparams];
    let mut vals: Vec<f64> = Vec::with_capacity(min_fields);

    let mut skipped_lines = 0;
    let mut short_lines = 0;
    let mut wide_lines = 0;

    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(comment) = line.strip_prefix('!') {
            if !data_section {
                if !comments.is_empty() {
                    comments += "\n";
                }
                comments += comment.trim();
            }
            continue;
        }

        if line.starts_with('#') {
            let opts = OptionLine::parse(line);
            match opts.format {
                None => tracing::warn!(
                    "line {}: option line has no format field, data ignored until the next one",
                    lineno + 1
                ),
                Some(ComplexNumberType::Unknown) => tracing::warn!(
                    "line {}: unrecognized format in option line `{}`",
                    lineno + 1,
                    line
                ),
                Some(_) => (),
            }
            options = Some(opts);
            continue;
        }

        data_section = true;
        let Some(format) = options.as_ref().and_then(|o| o.format) else {
            tracing::debug!("line {}: data before a valid option line, skipped", lineno + 1);
            skipped_lines += 1;
            continue;
        };

        vals.clear();
        vals.extend(
            line.split_whitespace()
                .map(|v| v.parse::<f64>().unwrap_or(f64::NAN)),
        );

        if vals.len() < min_fields {
            tracing::debug!(
                "line {}: {} values, expected at least {}, skipped",
                lineno + 1,
                vals.len(),
                min_fields
            );
            skipped_lines += 1;
            short_lines += 1;
            continue;
        }
        if vals.len() > min_fields {
            wide_lines += 1;
        }

        freq.push(vals[0]);
        for (k, &slot) in slots.iter().enumerate() {
            let (db, ang) = format.db_ang(vals[1 + 2 * k], vals[2 + 2 * k]);
            series[slot].mag_db.push(db);
            series[slot].phase_deg.push(ang);
        }
    }

    if short_lines > 0 {
        tracing::warn!(
            "{} data lines had fewer than {} values; does the file match {} ports?",
            short_lines,
            min_fields,
            nports
        );
    }
    if wide_lines > 0 {
        tracing::warn!(
            "{} data lines had more than {} values; extra columns ignored",
            wide_lines,
            min_fields
        );
    }
    tracing::debug!(
        "parsed {} points for {} parameters ({} lines skipped)",
        freq.len(),
        nparams,
        skipped_lines
    );

    Touchstone {
        name: String::new(),
        nports,
        params,
        options,
        comments,
        freq,
        series,
        skipped_lines,
    }
}
