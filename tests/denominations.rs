use denoms::dynamic::{count_denoms_splits, run, try_count_denoms_splits, Parity, Scenario};
use denoms::Error;

#[test]
fn test_default_report_values() {
    let report = run(&Scenario::default());

    assert_eq!(report.denoms, vec![1, 5, 10, 25]);
    assert_eq!(report.target, 100);
    assert_eq!(report.ways, 242);
    assert_eq!(report.odd_splits.sum, 6149);
    assert_eq!(
        report.odd_splits.parity,
        Parity::of(report.odd_splits.sum % 2)
    );
}

#[test]
fn test_default_report_text() {
    let text = run(&Scenario::default()).to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("[1, 5, 10, 25]"));
    assert!(lines[1].ends_with("100"));
    assert!(lines[2].ends_with("242"));
    assert!(lines[3].ends_with("6149"));
    assert!(lines[4].ends_with("odd"));
}

#[test]
fn test_report_is_repeatable() {
    let scenario = Scenario::default();
    assert_eq!(run(&scenario), run(&scenario));
}

#[test]
fn test_checked_counting_through_crate_root() {
    assert_eq!(try_count_denoms_splits(&[25, 10, 5, 1], 100), Ok(242));
    assert_eq!(
        try_count_denoms_splits(&[5, 0], 10),
        Err(Error::InvalidDenomination { index: 1 })
    );

    // 64 copies of 1 split 1000 in C(1063, 63) ways.
    let ones = vec![1; 64];
    assert!(matches!(
        try_count_denoms_splits(&ones, 1_000),
        Err(Error::Overflow { .. })
    ));
    assert_eq!(count_denoms_splits(&[1, 2], 1_000), 501);
}
