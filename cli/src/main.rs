//! casedoc CLI - business-case PDF rendering tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use casedoc::{Casedoc, Geometry, JsonFormat};

#[derive(Parser)]
#[command(name = "casedoc")]
#[command(version)]
#[command(about = "Render business-case narratives to styled PDF documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a narrative to PDF
    Render {
        /// Narrative text file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Company or client name shown on every page
        #[arg(short, long, env = "CASEDOC_SUBJECT")]
        subject: String,

        /// Output PDF file
        #[arg(short, long, value_name = "FILE", default_value = "business-case.pdf")]
        output: PathBuf,

        /// Banner title
        #[arg(long)]
        title: Option<String>,

        /// Generation timestamp in RFC 3339 (current time if not specified)
        #[arg(long, value_name = "TIMESTAMP")]
        generated_at: Option<String>,

        /// Deflate page content streams
        #[arg(long)]
        compress: bool,

        /// Page size
        #[arg(long, value_enum, default_value = "letter")]
        page_size: PageSize,
    },

    /// Print the layout plan as JSON
    Layout {
        /// Narrative text file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Page size
        #[arg(long, value_enum, default_value = "letter")]
        page_size: PageSize,
    },

    /// Verify a PDF's cross-reference table and show a report
    Inspect {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PageSize {
    /// US Letter, 612 x 792 points
    Letter,
    /// ISO A4, 595 x 842 points
    A4,
}

impl From<PageSize> for Geometry {
    fn from(size: PageSize) -> Self {
        match size {
            PageSize::Letter => Geometry::letter(),
            PageSize::A4 => Geometry::a4(),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            input,
            subject,
            output,
            title,
            generated_at,
            compress,
            page_size,
        }) => cmd_render(
            input.as_deref(),
            &subject,
            &output,
            title,
            generated_at.as_deref(),
            compress,
            page_size,
        ),
        Some(Commands::Layout {
            input,
            compact,
            page_size,
        }) => cmd_layout(input.as_deref(), compact, page_size),
        Some(Commands::Inspect { input }) => cmd_inspect(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: casedoc render [FILE] --subject <NAME>".yellow());
            println!("       casedoc --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read the narrative from a file, or stdin when no file is given.
fn read_narrative(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn parse_generated_at(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| format!("Invalid --generated-at '{}': {}", value, e))
}

fn cmd_render(
    input: Option<&Path>,
    subject: &str,
    output: &Path,
    title: Option<String>,
    generated_at: Option<&str>,
    compress: bool,
    page_size: PageSize,
) -> Result<(), Box<dyn std::error::Error>> {
    let narrative = read_narrative(input)?;

    let mut builder = Casedoc::new().with_geometry(page_size.into());
    if let Some(title) = title {
        builder = builder.with_title(title);
    }
    if let Some(value) = generated_at {
        builder = builder.with_generated_at(parse_generated_at(value)?);
    }
    if compress {
        builder = builder.compressed();
    }

    let (pages, written) = write_pdf(&builder, &narrative, subject, output)?;

    println!(
        "{} {} ({} pages, {} bytes)",
        "Saved to".green(),
        output.display(),
        pages,
        written
    );

    Ok(())
}

/// Paginate once, render from the plan and write the file.
/// Returns the page count and the number of bytes written.
fn write_pdf(
    builder: &Casedoc,
    narrative: &str,
    subject: &str,
    output: &Path,
) -> casedoc::Result<(usize, usize)> {
    let plan = builder.plan(narrative)?;
    let pdf = builder.render_plan(&plan, subject)?;
    fs::write(output, &pdf)?;

    log::debug!(
        "Wrote {} pages ({} bytes) to {}",
        plan.page_count(),
        pdf.len(),
        output.display()
    );

    Ok((plan.page_count(), pdf.len()))
}

fn cmd_layout(
    input: Option<&Path>,
    compact: bool,
    page_size: PageSize,
) -> Result<(), Box<dyn std::error::Error>> {
    let narrative = read_narrative(input)?;
    let plan = Casedoc::new()
        .with_geometry(page_size.into())
        .plan(&narrative)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    println!("{}", casedoc::render::to_json(&plan, format)?);

    Ok(())
}

fn cmd_inspect(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let report = casedoc::inspect_file(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), report.format);
    match report.page_count {
        Some(count) => println!("{}: {}", "Pages".bold(), count),
        None => println!("{}: {}", "Pages".bold(), "unknown".dimmed()),
    }
    println!("{}: {}", "Objects".bold(), report.object_count);
    println!("{}: {}", "Xref offset".bold(), report.xref_offset);
    println!("{}: {}", "Size".bold(), report.byte_len);

    println!();
    println!("{}", "Cross-reference table OK".green().bold());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "casedoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Business-case PDF rendering tool");
    println!();
    println!("License: MIT");
}
