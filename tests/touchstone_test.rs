use float_cmp::F64Margin;
use snpplot::prelude::*;
use snpplot::util::{comp_line, comp_series};

const MARGIN: F64Margin = F64Margin {
    epsilon: 1e-6,
    ulps: 4,
};

fn s(row: usize, col: usize) -> ParameterName {
    ParameterName::new(row, col)
}

fn db(mag: f64) -> f64 {
    20.0 * mag.log10()
}

#[test]
fn read_touchstone_s2p() {
    let ts = read_touchstone("./data/test.s2p").unwrap();

    assert_eq!(ts.name(), "test");
    assert_eq!(ts.nports(), 2);
    let opts = ts.options().unwrap();
    assert_eq!(opts.unit, Some(Scale::Giga));
    assert_eq!(opts.parameter, Some(RFParameter::S));
    assert_eq!(opts.format, Some(ComplexNumberType::MagAng));
    assert_eq!(opts.impedance, Some(50.0));
    comp_line(
        "2-port test fixture\nTouchstone 1.1\nfreq |S11| <S11 |S21| <S21 |S12| <S12 |S22| <S22",
        ts.comments(),
        "comments(test.s2p)",
    );

    // the 3.0 GHz line is truncated
    assert_eq!(ts.freq(), &[1.0, 2.0, 4.0]);
    assert_eq!(ts.skipped_lines(), 1);

    comp_series(
        &[db(0.1), db(0.2), f64::NEG_INFINITY],
        ts.mag_db(&s(1, 1)).unwrap(),
        MARGIN,
        "S11 mag",
    );
    comp_series(
        &[db(0.9), db(0.8), db(0.5)],
        ts.mag_db(&s(2, 1)).unwrap(),
        MARGIN,
        "S21 mag",
    );
    comp_series(
        &[-170.0, -160.0, -150.0],
        ts.phase_deg(&s(2, 1)).unwrap(),
        MARGIN,
        "S21 phase",
    );
    comp_series(
        &[db(0.05), db(0.05), db(0.1)],
        ts.mag_db(&s(1, 2)).unwrap(),
        MARGIN,
        "S12 mag",
    );
    comp_series(
        &[15.0],
        &ts.phase_deg(&s(2, 2)).unwrap()[2..],
        MARGIN,
        "S22 phase",
    );
}

#[test]
fn read_touchstone_s3p() {
    let ts = read_touchstone("./data/test.s3p").unwrap();

    assert_eq!(ts.nports(), 3);
    assert_eq!(ts.format(), Some(ComplexNumberType::Db));
    comp_line(
        "Created with skrf (http://scikit-rf.org).",
        ts.comments(),
        "comments(test.s3p)",
    );
    assert_eq!(ts.freq(), &[330.0, 330.85]);

    for p in ts.params() {
        let (mag, ang) = if p.row() == p.col() {
            (-9.542425094, 180.0)
        } else {
            (-3.521825181, 0.0)
        };
        comp_series(&[mag, mag], ts.mag_db(p).unwrap(), MARGIN, &p.to_string());
        comp_series(&[ang, ang], ts.phase_deg(p).unwrap(), MARGIN, &p.to_string());
    }
}

#[test]
fn every_series_matches_frequency_length() {
    for file in ["./data/test.s1p", "./data/test.s2p", "./data/test.s3p"] {
        let ts = read_touchstone(file).unwrap();
        let names = enumerate(ts.nports());
        assert_eq!(ts.params(), names.as_slice());
        for p in &names {
            assert_eq!(ts.mag_db(p).unwrap().len(), ts.npts(), "{} {}", file, p);
            assert_eq!(ts.phase_deg(p).unwrap().len(), ts.npts(), "{} {}", file, p);
        }
    }
}

#[test]
fn four_port_columns_follow_enumeration() {
    let names = enumerate(4);
    let mut line = String::from("5.0");
    for k in 0..names.len() {
        line += &format!(" {} {}", k as f64 + 1.0, k);
    }
    let ts = parse_touchstone(&format!("# MHz S MA R 50\n{}\n", line), 4);

    for (k, p) in names.iter().enumerate() {
        comp_series(
            &[db(k as f64 + 1.0)],
            ts.mag_db(p).unwrap(),
            MARGIN,
            &p.to_string(),
        );
        assert_eq!(ts.phase_deg(p).unwrap(), &[k as f64]);
    }
}

#[test]
fn parses_independently_across_threads() {
    let text = std::fs::read_to_string("./data/test.s2p").unwrap();
    let expected = parse_touchstone(&text, 2);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let text = text.clone();
            std::thread::spawn(move || parse_touchstone(&text, 2))
        })
        .collect();

    for handle in handles {
        let ts = handle.join().unwrap();
        assert_eq!(ts.freq(), expected.freq());
        for p in ts.params() {
            let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<u64>>();
            assert_eq!(
                bits(ts.mag_db(p).unwrap()),
                bits(expected.mag_db(p).unwrap())
            );
        }
    }
}

#[test]
fn plot_from_file() {
    let ts = read_touchstone("./data/test.s2p").unwrap();
    let plot = PlotBuilder::new().params(&[s(2, 1), s(1, 1)]).build(&ts);

    // trace order follows the file's parameter order, not the selection order
    let names: Vec<&str> = plot.magnitude.traces.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["S11 (dB)", "S21 (dB)"]);

    let [bottom, top] = plot.magnitude.y_range.unwrap();
    comp_series(&[db(0.1), 0.0], &[bottom, top], MARGIN, "range");

    let json = serde_json::to_string(&plot).unwrap();
    assert!(json.contains("\"Frequency (GHz)\""));
    assert!(json.contains("null"));
}
