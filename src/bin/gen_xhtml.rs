use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use img2epub::cli::XhtmlCli;
use img2epub::cli::output::OutputConfig;
use img2epub::fragment::{FragmentOptions, emit_fragments};

fn parse_args() -> XhtmlCli {
    match XhtmlCli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage problems exit with 1 rather than clap's default of 2.
            let _ = e.print();
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let cli = parse_args();
    let output = OutputConfig::from_flags(cli.verbosity);
    output.init_logging();

    let options = FragmentOptions {
        image_dir: cli.image_folder,
        output_dir: cli.output_folder,
        title: cli.title,
        image_rel_prefix: cli.image_rel_prefix,
    };
    output.detail(&format!("Image prefix: {}", options.image_rel_prefix));

    let report = emit_fragments(&options, |page| {
        output.status(&format!(
            "  {}  ({}x{})  <- {}",
            page.file_name, page.width, page.height, page.source_name
        ))
    })
    .with_context(|| {
        format!(
            "generating pages from {} into {}",
            options.image_dir.display(),
            options.output_dir.display()
        )
    })?;

    if report.is_empty() {
        output.status(&format!(
            "No .jpg files found in {}",
            options.image_dir.display()
        ));
        return Ok(());
    }

    output.status(&format!(
        "\nGenerated {} xhtml files in {}",
        report.pages.len(),
        report.output_dir.display()
    ));

    Ok(())
}
