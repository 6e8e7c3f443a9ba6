use clap::Parser;
use album_extractor::{
    ArchiveExtractor,
    cli::commands::{Cli, Commands},
    utils::reporting::Reporter,
};

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { input, output, dry_run, report } => {
            println!("=== Starting Archive Extraction ===");
            println!("Scanning for zip archives in: {}", input.display());
            println!("Extracting albums into: {}", output.display());
            println!("Dry run mode: {}", dry_run);

            let extractor = ArchiveExtractor::new(&input, &output);
            let summary = match extractor.run(dry_run) {
                Ok(summary) => summary,
                Err(e) => {
                    eprintln!("Error scanning {}: {}", input.display(), e);
                    std::process::exit(1);
                }
            };

            if dry_run {
                println!("\nDry run - no archives were extracted or deleted");
            }

            let reporter = Reporter::new();
            reporter.print_summary(&summary);

            if let Some(report_path) = report {
                match reporter.generate_failure_report(&summary, &report_path) {
                    Ok(_) => println!("Report saved to: {}", report_path.display()),
                    Err(e) => eprintln!("Error generating report: {}", e),
                }
            }

            println!("\n=== Archive Extraction Complete ===");
        }
    }
}
