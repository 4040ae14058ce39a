//! Chart descriptions handed to a renderer.
//!
//! Two charts share the frequency axis: magnitude in dB with 0 dB pinned to
//! the top, and phase in degrees with a free range. Non-finite samples
//! serialize as `null`, which renderers draw as a gap.

use crate::parameter::ParameterName;
use crate::touchstone::Touchstone;
use serde::Serialize;

const FREQ_TITLE: &str = "Frequency (GHz)";

/// One named line on a chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    /// `[bottom, top]`; absent means autorange.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_range: Option<[f64; 2]>,
    pub traces: Vec<Trace>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlotData {
    pub magnitude: Chart,
    pub phase: Chart,
}

/// Builder design pattern for PlotData
///
/// ## Example
/// ```
/// use snpplot::prelude::*;
///
/// let ts = parse_touchstone("# GHz S MA R 50\n1.0 0.5 10\n", 1);
/// let plot = PlotBuilder::new().build(&ts);
/// assert_eq!(plot.magnitude.traces[0].name, "S11 (dB)");
/// ```
#[derive(Clone, Debug, Default)]
pub struct PlotBuilder {
    params: Option<Vec<ParameterName>>,
    freq_title: Option<String>,
}

impl PlotBuilder {
    pub fn new() -> Self {
        PlotBuilder::default()
    }

    /// Restrict the charts to `params`. Every parameter is drawn otherwise.
    pub fn params(mut self, params: &[ParameterName]) -> Self {
        self.params = Some(params.to_vec());
        self
    }

    /// Override the x axis title.
    pub fn freq_title(mut self, title: &str) -> Self {
        self.freq_title = Some(title.to_string());
        self
    }

    pub fn build(&self, ts: &Touchstone) -> PlotData {
        let freq_title = self.freq_title.as_deref().unwrap_or(FREQ_TITLE);

        let selected: Vec<(ParameterName, &[f64], &[f64])> = ts
            .params()
            .iter()
            .filter(|p| self.params.as_ref().map_or(true, |sel| sel.contains(p)))
            .filter_map(|p| Some((*p, ts.mag_db(p)?, ts.phase_deg(p)?)))
            .collect();

        let overall_min = selected
            .iter()
            .flat_map(|(_, mag, _)| mag.iter())
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<f64>, &v| Some(acc.map_or(v, |m| m.min(v))));

        let trace = |name: String, y: &[f64]| Trace {
            name,
            x: ts.freq().to_vec(),
            y: y.to_vec(),
        };

        PlotData {
            magnitude: Chart {
                title: "Magnitude (dB)".to_string(),
                x_title: freq_title.to_string(),
                y_title: "|S| (dB)".to_string(),
                y_range: overall_min.map(|min| [min, 0.0]),
                traces: selected
                    .iter()
                    .map(|(p, mag, _)| trace(format!("{} (dB)", p), mag))
                    .collect(),
            },
            phase: Chart {
                title: "Phase (°)".to_string(),
                x_title: freq_title.to_string(),
                y_title: "∠S (°)".to_string(),
                y_range: None,
                traces: selected
                    .iter()
                    .map(|(p, _, ph)| trace(format!("∠{} (°)", p), ph))
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::touchstone::parse_touchstone;
    use crate::util::comp_f64;
    use float_cmp::F64Margin;

    const TWO_PORT: &str = "# GHz S MA R 50\n\
                            1.0 0.1 10 0.9 -170 0.05 90 0.95 5\n\
                            2.0 0.0 20 0.8 -160 0.01 80 0.9 10\n";

    #[test]
    fn all_parameters_by_default() {
        let ts = parse_touchstone(TWO_PORT, 2);
        let plot = PlotBuilder::new().build(&ts);

        let names: Vec<&str> = plot.magnitude.traces.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["S11 (dB)", "S12 (dB)", "S21 (dB)", "S22 (dB)"]);
        let names: Vec<&str> = plot.phase.traces.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["∠S11 (°)", "∠S12 (°)", "∠S21 (°)", "∠S22 (°)"]);

        assert_eq!(plot.magnitude.title, "Magnitude (dB)");
        assert_eq!(plot.magnitude.x_title, "Frequency (GHz)");
        assert_eq!(plot.magnitude.y_title, "|S| (dB)");
        assert_eq!(plot.phase.title, "Phase (°)");
        assert_eq!(plot.phase.y_range, None);
        for t in plot.magnitude.traces.iter().chain(plot.phase.traces.iter()) {
            assert_eq!(t.x, vec![1.0, 2.0]);
            assert_eq!(t.y.len(), 2);
        }
    }

    #[test]
    fn magnitude_range_skips_negative_infinity() {
        let ts = parse_touchstone(TWO_PORT, 2);
        let plot = PlotBuilder::new().build(&ts);

        // S11 at 2 GHz is -inf; a plain minimum would give [-inf, 0], but the
        // range stops at the lowest finite value, S12 = 0.01 -> -40 dB
        assert!(plot.magnitude.traces[0].y.contains(&f64::NEG_INFINITY));
        let [bottom, top] = plot.magnitude.y_range.unwrap();
        comp_f64(&-40.0, &bottom, F64Margin::default(), "range", "bottom");
        assert_eq!(top, 0.0);
    }

    #[test]
    fn selection_limits_traces() {
        let ts = parse_touchstone(TWO_PORT, 2);
        let plot = PlotBuilder::new()
            .params(&[ParameterName::new(2, 1), ParameterName::new(5, 5)])
            .freq_title("Frequency")
            .build(&ts);

        assert_eq!(plot.magnitude.traces.len(), 1);
        assert_eq!(plot.magnitude.traces[0].name, "S21 (dB)");
        assert_eq!(plot.phase.traces[0].y, vec![-170.0, -160.0]);
        assert_eq!(plot.phase.x_title, "Frequency");

        let [bottom, _] = plot.magnitude.y_range.unwrap();
        comp_f64(
            &(20.0 * 0.8_f64.log10()),
            &bottom,
            F64Margin::default(),
            "selection",
            "bottom",
        );
    }

    #[test]
    fn empty_selection_autoranges() {
        let ts = parse_touchstone(TWO_PORT, 2);
        let plot = PlotBuilder::new().params(&[]).build(&ts);
        assert!(plot.magnitude.traces.is_empty());
        assert_eq!(plot.magnitude.y_range, None);
    }

    #[test]
    fn serializes_non_finite_as_null() {
        let ts = parse_touchstone("# GHz S MA R 50\n1.0 0 10\n", 1);
        let plot = PlotBuilder::new().build(&ts);
        let json = serde_json::to_value(&plot).unwrap();

        assert!(json["magnitude"]["traces"][0]["y"][0].is_null());
        assert_eq!(json["phase"]["traces"][0]["y"][0], 10.0);
        assert!(json["magnitude"].get("y_range").is_none());
        assert!(json["phase"].get("y_range").is_none());
    }
}
