/*!
 * End-to-end tests: delivery log file -> quality report -> JSON file
 */

use anyhow::Result;
use celcheck::app_config::Config;
use celcheck::file_utils::{read_delivery_records, FileManager};
use celcheck::report::{render_quality, to_json};
use celcheck::validation::QualityReport;
use serde_json::Value;
use crate::common;

/// Test the full quality workflow with custom limits from a config file
#[test]
fn test_qualityWorkflow_withConfigLimits_shouldHonourThem() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let records_path = common::create_test_file(
        temp_dir.path(),
        "deliveries.json",
        common::sample_delivery_records_json(),
    )?;
    let config_path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "report": { "top_raw_repeated": 1, "top_prefixes": 2 } }"#,
    )?;

    let config = Config::load_or_create(&config_path)?;
    config.validate()?;
    let records = read_delivery_records(&records_path)?;
    let report = QualityReport::analyze(&records, &config.report);

    assert_eq!(report.repeated_phones.keys(), vec!["573157894261"]);
    assert_eq!(report.top_prefixes.len(), 2);

    let output = temp_dir.path().join("quality.json");
    FileManager::write_to_file(&output, &to_json(&report)?)?;
    let saved: Value = serde_json::from_str(&FileManager::read_to_string(&output)?)?;

    assert_eq!(saved["total_failed"], 4);
    assert_eq!(saved["summary"]["invalid"], 1);
    assert_eq!(saved["invalid_numbers"][0]["phone"], "573725270507");
    assert!(render_quality(&report).contains("Números únicos:    3"));

    Ok(())
}
