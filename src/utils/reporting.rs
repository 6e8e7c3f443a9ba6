use std::path::Path;
use csv::Writer;
use crate::archive::extractor::ExtractionSummary;
use crate::Result;

pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    /// Final textual report: every failed archive path, or a success line.
    pub fn print_summary(&self, summary: &ExtractionSummary) {
        if summary.all_succeeded() {
            println!("All files processed successfully.");
            return;
        }

        println!("\nFiles in error:");
        for failure in &summary.failures {
            println!("{}", failure.path.display());
        }
    }

    pub fn generate_failure_report(
        &self,
        summary: &ExtractionSummary,
        output_path: impl AsRef<Path>,
    ) -> Result<()> {
        let output_path_ref = output_path.as_ref();
        let mut writer = Writer::from_path(output_path_ref)?;

        // Write header
        writer.write_record(["Archive Path", "Reason"])?;

        for failure in &summary.failures {
            writer.write_record([
                failure.path.display().to_string(),
                failure.reason.clone(),
            ])?;
        }

        // Write summary
        writer.write_record(["", ""])?;
        writer.write_record(["Summary", ""])?;
        writer.write_record(["Total Archives", summary.total.to_string().as_str()])?;
        writer.write_record(["Extracted", summary.extracted.to_string().as_str()])?;
        writer.write_record(["Failed", summary.failures.len().to_string().as_str()])?;

        writer.flush()?;
        println!("Report generated: {}", output_path_ref.display());
        Ok(())
    }
}
