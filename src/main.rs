use anyhow::{Context, Result};
use clap::Parser;
use img2epub::assemble::metadata_build::BookMetadata;
use img2epub::assemble::package::{PackageEvent, package_epub};
use img2epub::cli::EpubCli;
use img2epub::cli::output::OutputConfig;

/// Format a byte count as a human-readable size string.
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

fn main() -> Result<()> {
    let cli = EpubCli::parse();
    let output = OutputConfig::from_flags(cli.verbosity);
    output.init_logging();

    let meta = BookMetadata::new(cli.title, cli.author);
    let result = package_epub(&cli.input_folder, &cli.output, &meta, |event| match event {
        PackageEvent::Found(count) => output.status(&format!("Found {count} images")),
        PackageEvent::Adding(_, image) => output.status(&format!("  Adding: {}", image.file_name)),
    });

    let summary = match result {
        Ok(summary) => summary,
        Err(e) if e.is_input_error() => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!(
                    "building {} from {}",
                    cli.output.display(),
                    cli.input_folder.display()
                )
            });
        }
    };

    output.status(&format!("\nEPUB created: {}", summary.output.display()));
    if output.verbose
        && let Ok(meta) = std::fs::metadata(&summary.output)
    {
        output.detail(&format!(
            "  {} pages, {}",
            summary.pages,
            format_size(meta.len())
        ));
    }

    Ok(())
}
