/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use celcheck::file_utils::{read_delivery_records, read_number_list, FileManager};
use celcheck::validation::DeliveryStatus;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "numbers.txt", "3157894261")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that write_to_file creates missing parent directories
#[test]
fn test_write_to_file_withNestedPath_shouldCreateParents() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("reports").join("2024").join("batch.json");

    FileManager::write_to_file(&target, "{}")?;

    assert!(FileManager::dir_exists(temp_dir.path().join("reports").join("2024")));
    assert_eq!(FileManager::read_to_string(&target)?, "{}");

    Ok(())
}

/// Test reading a pasted list from disk
#[test]
fn test_read_number_list_withSampleFile_shouldSkipBlankLines() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_number_list(temp_dir.path(), "numbers.txt")?;

    let numbers = read_number_list(&path)?;

    assert_eq!(numbers.len(), 8);
    assert_eq!(numbers[0], "+57 315 789 4261");
    assert_eq!(numbers[7], "(350) 193-8476");

    Ok(())
}

/// Test that a missing list is an error, not an empty batch
#[test]
fn test_read_number_list_withMissingFile_shouldFail() {
    assert!(read_number_list("definitely/not/here.txt").is_err());
}

/// Test reading delivery records
#[test]
fn test_read_delivery_records_withSampleFile_shouldParseStatuses() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "deliveries.json",
        common::sample_delivery_records_json(),
    )?;

    let records = read_delivery_records(&path)?;

    assert_eq!(records.len(), 7);
    assert_eq!(records[0].status, DeliveryStatus::Failed);
    assert_eq!(records[3].status, DeliveryStatus::Processing);
    assert_eq!(records[5].status, DeliveryStatus::Other);
    assert_eq!(records[6].phone, None);

    Ok(())
}

/// Test that malformed record files report the path
#[test]
fn test_read_delivery_records_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "broken.json", "{ not json")?;

    let error = read_delivery_records(&path).unwrap_err();

    assert!(error.to_string().contains("broken.json"));

    Ok(())
}

/// Test that ensure_dir refuses a path taken by a regular file
#[test]
fn test_ensure_dir_withExistingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let blocker = common::create_test_file(temp_dir.path(), "reports", "not a dir")?;

    assert!(FileManager::ensure_dir(&blocker).is_err());
    assert!(FileManager::write_to_file(blocker.join("batch.json"), "{}").is_err());

    Ok(())
}
