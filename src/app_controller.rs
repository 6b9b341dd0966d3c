use anyhow::Result;
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};
use crate::app_config::Config;
use crate::content_filter::{self, FilteredLine};
use crate::file_utils::FileManager;
use crate::srt_parser;
use crate::subtitle_document::{LineState, SubtitleDocument};

// @module: Application controller for subtitle editing

/// Summary of an apply-to-all filter pass over a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    // @field: Lines whose text was reduced
    pub modified: usize,

    // @field: Lines removed entirely
    pub removed: usize,

    // @field: Lines in the document before filtering
    pub total: usize,
}

/// Main application controller for subtitle editing
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Load an SRT file into a document.
    ///
    /// A file that yields zero lines is not an error; the caller decides how
    /// to surface that to the user.
    pub fn load_document<P: AsRef<Path>>(&self, path: P) -> Result<SubtitleDocument> {
        let path = path.as_ref();
        let content = FileManager::read_to_string(path)?;
        let lines = srt_parser::from_srt(&content);

        if lines.is_empty() {
            warn!("No subtitle lines parsed from {:?}", path);
        } else {
            debug!("Parsed {} subtitle lines from {:?}", lines.len(), path);
        }

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| String::from("unknown.srt"));

        Ok(SubtitleDocument::new(filename, lines))
    }

    /// Preview the configured filters against a file without changing anything
    pub fn preview_filters<P: AsRef<Path>>(&self, path: P) -> Result<Vec<FilteredLine>> {
        let document = self.load_document(path)?;
        Ok(content_filter::filter_document(&document.lines, &self.config.filters))
    }

    /// Run the configured filters over a document and apply every result:
    /// lines with remaining text become modified, emptied lines are removed.
    pub fn filter_document(&self, document: &SubtitleDocument) -> (SubtitleDocument, FilterSummary) {
        let results = content_filter::filter_document(&document.lines, &self.config.filters);

        let modified = results.iter().filter(|r| !r.result_line.is_empty()).count();
        let removed = results.len() - modified;
        let summary = FilterSummary {
            modified,
            removed,
            total: document.lines.len(),
        };

        let lines = content_filter::apply_results(&document.lines, &results);
        (document.with_lines(lines), summary)
    }

    /// Filter one file and write the edited result next to it (or under
    /// `output_dir` when given)
    pub fn run_filter(&self, input_file: &Path, output_dir: Option<&Path>, force_overwrite: bool) -> Result<()> {
        if !input_file.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = self.output_path_for(input_file, output_dir);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, output already exists (use -f to force overwrite): {:?}", output_path);
            return Ok(());
        }

        let document = self.load_document(input_file)?;
        let (filtered, summary) = self.filter_document(&document);

        info!(
            "{}: {} lines, {} modified, {} removed",
            document.filename, summary.total, summary.modified, summary.removed
        );

        FileManager::write_to_file(&output_path, &srt_parser::to_srt(&filtered.lines))?;
        info!("Success: {}", output_path.display());

        Ok(())
    }

    /// Shift every line of one file by a signed millisecond delta and write
    /// the result
    pub fn run_shift(&self, input_file: &Path, output_dir: Option<&Path>, delta_ms: i64, force_overwrite: bool) -> Result<()> {
        if !input_file.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = self.output_path_for(input_file, output_dir);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, output already exists (use -f to force overwrite): {:?}", output_path);
            return Ok(());
        }

        let document = self.load_document(input_file)?;
        let shifted = document.shifted_by(delta_ms);

        info!("{}: shifted {} lines by {}ms", document.filename, shifted.lines.len(), delta_ms);

        FileManager::write_to_file(&output_path, &srt_parser::to_srt(&shifted.lines))?;
        info!("Success: {}", output_path.display());

        Ok(())
    }

    /// Run the filter in folder mode, processing all .srt files under a
    /// directory. Files whose output already exists are skipped.
    pub fn run_filter_folder(&self, input_dir: &Path, force_overwrite: bool) -> Result<()> {
        if !input_dir.exists() {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let subtitle_files: Vec<PathBuf> = FileManager::find_files(input_dir, "srt")?
            .into_iter()
            // Outputs of a previous run are not inputs
            .filter(|path| !self.is_generated_output(path))
            .collect();

        if subtitle_files.is_empty() {
            return Err(anyhow::anyhow!("No subtitle files found in directory: {:?}", input_dir));
        }

        let folder_pb = ProgressBar::new(subtitle_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Processing files");

        let mut success_count = 0;
        let mut error_count = 0;

        for subtitle_file in subtitle_files.iter() {
            let file_name = subtitle_file.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Processing: {}", file_name));

            match self.run_filter(subtitle_file, None, force_overwrite) {
                Ok(_) => {
                    success_count += 1;
                }
                Err(e) => {
                    error!("Error processing file {}: {}", file_name, e);
                    error_count += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder processing complete");

        info!("Folder processing completed: {} processed, {} errors", success_count, error_count);

        Ok(())
    }

    /// Tally line states for reporting
    pub fn state_counts(document: &SubtitleDocument) -> (usize, usize, usize) {
        let mut enabled = 0;
        let mut removed = 0;
        let mut modified = 0;
        for line in &document.lines {
            match line.state {
                LineState::Enabled => enabled += 1,
                LineState::Removed => removed += 1,
                LineState::Modified { .. } => modified += 1,
            }
        }
        (enabled, removed, modified)
    }

    // Output path: next to the input unless an output directory was given
    fn output_path_for(&self, input_file: &Path, output_dir: Option<&Path>) -> PathBuf {
        let dir = output_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| input_file.parent().unwrap_or(Path::new(".")).to_path_buf());
        FileManager::generate_output_path(input_file, &dir, &self.config.output.suffix, "srt")
    }

    // True when the filename already carries the configured output suffix
    fn is_generated_output(&self, path: &Path) -> bool {
        let marker = format!(".{}.srt", self.config.output.suffix);
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(&marker))
            .unwrap_or(false)
    }
}
