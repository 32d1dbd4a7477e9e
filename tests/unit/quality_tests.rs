/*!
 * Tests for the delivery quality report
 */

use celcheck::app_config::ReportConfig;
use celcheck::validation::{DeliveryRecord, DeliveryStatus, QualityReport};
use crate::common;

fn sample_records() -> Vec<DeliveryRecord> {
    serde_json::from_str(common::sample_delivery_records_json()).unwrap()
}

/// Test the status split of the sample log
#[test]
fn test_analyze_withSampleLog_shouldCountByStatus() {
    let report = QualityReport::analyze(&sample_records(), &ReportConfig::default());

    assert_eq!(report.total_failed, 4);
    assert_eq!(report.total_processing, 2);
    assert_eq!(report.unique_phones, 3);
}

/// Test repeated and processing phone rankings
#[test]
fn test_analyze_withSampleLog_shouldRankPhones() {
    let report = QualityReport::analyze(&sample_records(), &ReportConfig::default());

    assert_eq!(report.repeated_phones.keys(), vec!["573157894261", "3111111111"]);
    assert_eq!(report.processing_phones.get("3111111111"), Some(2));
    assert_eq!(report.error_codes.keys(), vec!["131026", "131049", "131000"]);
    assert_eq!(report.error_codes.get("131026"), Some(2));
    assert_eq!(report.top_prefixes.keys(), vec!["315", "372", "311"]);
}

/// Test the validation summary of the distinct phones
#[test]
fn test_analyze_withSampleLog_shouldSummarizeValidation() {
    let report = QualityReport::analyze(&sample_records(), &ReportConfig::default());

    assert_eq!(report.summary.valid, 2);
    assert_eq!(report.summary.invalid, 1);
    assert_eq!(report.summary.suspicious, 1);
    assert_eq!(report.invalid_numbers.len(), 1);
    assert_eq!(report.invalid_numbers[0].phone, "573725270507");
    assert!(report.invalid_numbers[0].detail.contains("372"));
    assert_eq!(report.suspicious_numbers[0].phone, "3111111111");
    assert_eq!(report.by_operator.get("Claro"), Some(1));
    assert_eq!(report.by_operator.get("Movistar"), Some(1));
    assert_eq!(report.by_operator.get("Desconocido"), Some(1));
    assert_eq!(report.summary.top_issues.len(), 1);
}

/// Test that delivered or read records never reach the report
#[test]
fn test_analyze_withOnlyOtherStatuses_shouldBeEmpty() {
    let records = vec![
        DeliveryRecord::new(Some("3157894261"), DeliveryStatus::Other, None),
        DeliveryRecord::new(Some("3104729583"), DeliveryStatus::Other, Some("0")),
    ];

    let report = QualityReport::analyze(&records, &ReportConfig::default());

    assert_eq!(report, QualityReport::default());
}

/// Test that the issue ranking honours its limit
#[test]
fn test_analyze_withManyIssues_shouldLimitTopIssues() {
    let records: Vec<DeliveryRecord> = ["1", "12", "2123456789", "573725270507", "+57", "3701234567"]
        .into_iter()
        .map(|phone| DeliveryRecord::new(Some(phone), DeliveryStatus::Failed, None))
        .collect();
    let limits = ReportConfig {
        top_issues: 2,
        ..ReportConfig::default()
    };

    let report = QualityReport::analyze(&records, &limits);

    assert_eq!(report.summary.invalid, 6);
    assert_eq!(report.summary.top_issues.len(), 2);
    assert_eq!(report.invalid_numbers.len(), 6);
}
