use std::io::Write;

use depthscan_scan::{count_increases, scan_source, ScanError, ScanReport, WindowScan};
use depthscan_source::{NumberSource, SourceConfig, SourceError};
use depthscan_window::{SlidingSum, WindowError};
use pretty_assertions::assert_eq;
use tests::{scan_text, SONAR_INCREASES, SONAR_REPORT};

fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

#[test]
fn sonar_report_from_text() {
    init_test_logger();
    let reports = scan_text(SONAR_REPORT, &[1, 3]).unwrap();
    let increases: Vec<(usize, u64)> = reports.iter().map(|r| (r.window, r.increases)).collect();
    assert_eq!(increases, SONAR_INCREASES.to_vec());
}

#[test]
fn sonar_report_from_file_matches_text() {
    init_test_logger();
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(SONAR_REPORT.as_bytes()).expect("write report");

    let source = NumberSource::<_, i32>::from_file(file.path(), SourceConfig::default()).unwrap();
    let from_file = scan_source(source, &[1, 3]).unwrap();
    assert_eq!(from_file, scan_text(SONAR_REPORT, &[1, 3]).unwrap());
}

#[test]
fn single_pass_matches_separate_scans() {
    let values: Vec<i32> = NumberSource::from_text(SONAR_REPORT, SourceConfig::default())
        .collect::<Result<_, _>>()
        .unwrap();

    let windows = [1, 2, 3, 4, 10, 11];
    let combined = scan_text(SONAR_REPORT, &windows).unwrap();
    let separate: Vec<ScanReport> = windows
        .iter()
        .map(|&w| count_increases(values.iter().copied(), w).unwrap())
        .collect();
    assert_eq!(combined, separate);
}

#[test]
fn window_larger_than_input_reports_nothing_full() {
    let reports = scan_text(SONAR_REPORT, &[11]).unwrap();
    assert_eq!(
        reports,
        vec![ScanReport {
            window: 11,
            values: 10,
            full_windows: 0,
            increases: 0,
            last_sum: None,
        }]
    );
}

#[test]
fn empty_report_is_not_an_error() {
    let reports = scan_text("", &[1, 3]).unwrap();
    assert!(reports.iter().all(|r| r.values == 0 && r.increases == 0));
}

#[test]
fn malformed_line_aborts_every_window() {
    let err = scan_text("199\n200\n2O8\n", &[1, 3]).unwrap_err();
    match err {
        ScanError::Source(SourceError::Parse { line, text }) => {
            assert_eq!(line, 3);
            assert_eq!(text, "2O8");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn overflow_in_a_wide_window_is_reported_with_its_size() {
    let big = i32::MAX / 2 + 1;
    let text = format!("{big}\n{big}\n{big}\n");
    let err = scan_text(&text, &[1, 2]).unwrap_err();
    assert!(matches!(
        err,
        ScanError::Window {
            window: 2,
            source: WindowError::ArithmeticOverflow { position: 2 }
        }
    ));
}

#[test]
fn wider_element_type_avoids_the_overflow() {
    let big = i64::from(i32::MAX / 2 + 1);
    let report = count_increases([big, big, big], 2).unwrap();
    assert_eq!(report.last_sum, Some(i128::from(big * 2)));
    assert_eq!(report.increases, 0);
}

#[test]
fn accumulator_can_be_driven_directly() {
    let mut window = SlidingSum::<i32>::new(3).unwrap();
    let mut scan = WindowScan::<i32>::new(3).unwrap();
    let mut previous = None;
    let mut increases = 0;

    for value in [199, 200, 208, 210, 200, 207] {
        let reading = window.feed(value).unwrap();
        let scanned = scan.feed(value).unwrap();
        if reading.is_full {
            assert_eq!(scanned, Some(reading.sum));
            if previous.is_some_and(|p| reading.sum > p) {
                increases += 1;
            }
            previous = Some(reading.sum);
        } else {
            assert_eq!(scanned, None);
        }
    }

    assert_eq!(scan.finish().increases, increases);
    window.destroy();
}
