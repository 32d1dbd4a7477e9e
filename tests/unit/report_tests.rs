/*!
 * Tests for text and JSON rendering
 */

use celcheck::app_config::ReportConfig;
use celcheck::report::{render_quality, render_result, render_result_row, render_stats, to_json};
use celcheck::validation::{validate_batch, validate_number, DeliveryRecord, QualityReport};
use serde_json::Value;
use crate::common;

/// Test the detail block of an invalid number
#[test]
fn test_renderResult_withInvalidNumber_shouldShowError() {
    let text = render_result(&validate_number(Some("573725270507")));

    assert!(text.contains("❌ Prefijo inválido"));
    assert!(text.contains("Desconocido"));
    assert!(text.contains("Prefijo 372 no corresponde a ningún operador colombiano"));
    assert!(!text.contains("Sospecha"));
}

/// Test one-line rows for valid and invalid numbers
#[test]
fn test_renderResultRow_shouldStartWithStatusIcon() {
    assert!(render_result_row(&validate_number(Some("3157894261"))).starts_with("✅"));
    assert!(render_result_row(&validate_number(Some("123"))).starts_with("❌"));
}

/// Test the batch summary block
#[test]
fn test_renderStats_withDuplicates_shouldListRepeatedNumbers() {
    let report = validate_batch(["3157894261", "+573157894261", "123"]);
    let text = render_stats(&report.stats);

    assert!(text.contains("66.67%"));
    assert!(text.contains("33.33%"));
    assert!(text.contains("Más repetidos"));
    assert!(text.contains("3157894261"));
}

/// Test the quality report text
#[test]
fn test_renderQuality_withSampleLog_shouldListFlaggedNumbers() {
    let records: Vec<DeliveryRecord> =
        serde_json::from_str(common::sample_delivery_records_json()).unwrap();
    let report = QualityReport::analyze(&records, &ReportConfig::default());

    let text = render_quality(&report);

    assert!(text.contains("❌ 573725270507"));
    assert!(text.contains("⚠️ 3111111111"));
    assert!(text.contains("131026"));
}

/// Test the JSON shape consumed by downstream tools
#[test]
fn test_toJson_withBatchReport_shouldExposeResultFields() {
    let report = validate_batch(["3157894261", ""]);
    let value: Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();

    assert_eq!(value["stats"]["total"], 2);
    assert_eq!(value["stats"]["percentage_valid"], 50.0);
    assert_eq!(value["stats"]["categories"]["Vacío"], 1);

    let first = &value["results"][0];
    assert_eq!(first["original"], "3157894261");
    assert_eq!(first["cleaned_national"], "3157894261");
    assert_eq!(first["full_international"], "+573157894261");
    assert_eq!(first["is_valid"], true);
    assert_eq!(first["category"], "Válido");
    assert_eq!(first["operator"], "Claro");
    assert_eq!(first["is_suspicious"], false);

    assert_eq!(value["results"][1]["operator"], "N/A");
    assert_eq!(value["results"][1]["category"], "Vacío");
}
