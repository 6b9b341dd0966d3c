/*!
 * Tests for file utility functions
 */

use std::path::Path;
use anyhow::Result;
use subedit::file_utils::{FileManager, FileType};
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(&temp_dir.path().to_path_buf(), "test_file_exists.tmp", "test content")?;

    assert!(FileManager::file_exists(test_file.to_str().unwrap()));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that generate_output_path creates the correct path
#[test]
fn test_generate_output_path_withValidInputs_shouldCreateCorrectPath() {
    let input_file = Path::new("/tmp/input/movie.srt");
    let output_dir = Path::new("/tmp/output");

    let output_path = FileManager::generate_output_path(input_file, output_dir, "edited", "srt");

    assert_eq!(output_path, Path::new("/tmp/output/movie.edited.srt"));
}

/// Test that dir_exists returns true for existing directories
#[test]
fn test_dir_exists_withExistingDir_shouldReturnTrue() {
    assert!(FileManager::dir_exists("."));
}

/// Test that dir_exists returns false for non-existent directories
#[test]
fn test_dir_exists_withNonExistentDir_shouldReturnFalse() {
    assert!(!FileManager::dir_exists("./non_existent_directory_12345"));
}

/// Test that ensure_dir creates directories as needed
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_subdir = temp_dir.path().join("test_subdir");

    FileManager::ensure_dir(test_subdir.to_str().unwrap())?;

    assert!(test_subdir.exists());
    assert!(test_subdir.is_dir());

    Ok(())
}

/// Test that read_to_string returns file content correctly
#[test]
fn test_read_to_string_withValidFile_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(&temp_dir.path().to_path_buf(), "read_test.txt", "line one\nline two")?;

    let content = FileManager::read_to_string(&test_file)?;
    assert_eq!(content, "line one\nline two");

    Ok(())
}

/// Test that write_to_file creates parent directories and writes content
#[test]
fn test_write_to_file_withNestedPath_shouldCreateParents() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested_path = temp_dir.path().join("a").join("b").join("out.srt");

    FileManager::write_to_file(&nested_path, "content")?;

    assert!(nested_path.exists());
    assert_eq!(FileManager::read_to_string(&nested_path)?, "content");

    Ok(())
}

/// Test that find_files locates subtitle files recursively
#[test]
fn test_find_files_withNestedSrtFiles_shouldFindAll() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    let nested = root.join("season1");
    FileManager::ensure_dir(&nested)?;

    common::create_test_subtitle(&root, "a.srt")?;
    common::create_test_subtitle(&nested, "b.srt")?;
    common::create_test_file(&root, "notes.txt", "not a subtitle")?;

    let found = FileManager::find_files(&root, "srt")?;
    assert_eq!(found.len(), 2);

    let found_with_dot = FileManager::find_files(&root, ".srt")?;
    assert_eq!(found_with_dot.len(), 2);

    Ok(())
}

/// Test file type detection by extension
#[test]
fn test_detect_file_type_withSrtExtension_shouldReturnSubtitle() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_subtitle(&temp_dir.path().to_path_buf(), "movie.srt")?;

    assert_eq!(FileManager::detect_file_type(&file)?, FileType::Subtitle);

    Ok(())
}

/// Test file type detection by content when the extension is missing
#[test]
fn test_detect_file_type_withSrtContentNoExtension_shouldReturnSubtitle() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(&temp_dir.path().to_path_buf(), "mystery", common::SAMPLE_SRT)?;

    assert_eq!(FileManager::detect_file_type(&file)?, FileType::Subtitle);

    Ok(())
}

/// Test file type detection falls back to unknown
#[test]
fn test_detect_file_type_withPlainText_shouldReturnUnknown() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(&temp_dir.path().to_path_buf(), "notes.txt", "just some notes")?;

    assert_eq!(FileManager::detect_file_type(&file)?, FileType::Unknown);

    Ok(())
}
