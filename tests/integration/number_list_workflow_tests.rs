/*!
 * End-to-end tests: number list file -> batch report -> JSON file
 */

use anyhow::Result;
use celcheck::app_config::Config;
use celcheck::file_utils::{read_number_list, FileManager};
use celcheck::report::to_json;
use celcheck::validation::{PhoneValidator, ResultFilter};
use serde_json::Value;
use crate::common;

/// Test the full list workflow with the configured limits
#[test]
fn test_numberListWorkflow_withSampleFile_shouldWriteReport() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_number_list(temp_dir.path(), "numbers.txt")?;
    let output = temp_dir.path().join("out").join("report.json");
    let config = Config::load_or_create(temp_dir.path().join("conf.json"))?;

    let numbers = read_number_list(&input)?;
    let report = PhoneValidator::new().validate_batch(&numbers, config.report.top_repeated);
    FileManager::write_to_file(&output, &to_json(&report)?)?;

    let saved: Value = serde_json::from_str(&FileManager::read_to_string(&output)?)?;
    assert_eq!(saved["stats"]["total"], 8);
    assert_eq!(saved["stats"]["duplicate_numbers"], 1);
    assert_eq!(saved["results"].as_array().map(Vec::len), Some(8));
    assert_eq!(saved["results"][3]["category"], "Prefijo inválido");

    let invalid = report.filtered(&"invalid".parse::<ResultFilter>()?);
    assert_eq!(invalid.len(), 3);

    let movistar = report.filtered(&"operator:movistar".parse::<ResultFilter>()?);
    assert_eq!(movistar.len(), 3);

    Ok(())
}

/// Test that an empty list gives an empty, well-formed report
#[test]
fn test_numberListWorkflow_withBlankFile_shouldReportZeroes() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "empty.txt", "\n  \n\n")?;

    let numbers = read_number_list(&input)?;
    let report = PhoneValidator::new().validate_batch(&numbers, 10);

    assert!(numbers.is_empty());
    assert_eq!(report.stats.total, 0);
    assert_eq!(report.stats.percentage_valid, 0.0);
    assert_eq!(report.stats.percentage_suspicious, 0.0);
    assert!(report.results.is_empty());

    Ok(())
}
