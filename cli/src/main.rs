//! cvpress CLI - résumé and cover letter layout tool

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use cvpress::locale::{date_line, today_line, DEFAULT_LOCATION};
use cvpress::{
    CleanupPreset, Content, Cvpress, CvpressResult, DocumentKind, Element, JsonFormat,
    RenderOptions, RendererRegistry, Role,
};

#[derive(Parser)]
#[command(name = "cvpress")]
#[command(version)]
#[command(about = "Lay out generated résumés and cover letters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a résumé
    #[command(alias = "cv")]
    Resume {
        /// Input Markdown or text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        /// Header used when the résumé has no identity line
        #[arg(long, env = "CVPRESS_PLACEHOLDER")]
        placeholder: Option<String>,
    },

    /// Lay out a cover letter
    Letter {
        /// Input Markdown or text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        /// Title used to name the exported file (e.g. the candidate name)
        #[arg(long)]
        title: Option<String>,

        /// Job title appended to the file name, gender markers removed
        #[arg(long)]
        job_title: Option<String>,
    },

    /// Show the laid-out roles and statistics of a document
    Inspect {
        /// Input Markdown or text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Treat the input as a cover letter
        #[arg(long)]
        letter: bool,

        /// Text cleanup preset
        #[arg(long, value_enum, default_value = "standard")]
        cleanup: CleanupLevel,
    },

    /// Lay out every .md and .txt file of a directory in parallel
    Batch {
        /// Input directory
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "exports")]
        out_dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: Format,

        /// Treat the inputs as cover letters
        #[arg(long)]
        letters: bool,

        /// Text cleanup preset
        #[arg(long, value_enum, default_value = "standard")]
        cleanup: CleanupLevel,

        /// Header used when a résumé has no identity line
        #[arg(long, env = "CVPRESS_PLACEHOLDER")]
        placeholder: Option<String>,
    },

    /// Print the letter date line
    Dateline {
        /// Location written before the date
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,

        /// Date as YYYY-MM-DD (today if not specified)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show version information
    Version,
}

/// Output selection shared by the layout commands.
#[derive(clap::Args)]
struct OutputArgs {
    /// Output file; the format follows its extension
    #[arg(short, long, value_name = "FILE", conflicts_with = "out_dir")]
    output: Option<PathBuf>,

    /// Output directory; the file is named after the document title
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Output format for stdout and --out-dir
    #[arg(short, long, value_enum, default_value = "html")]
    format: Format,

    /// Text cleanup preset
    #[arg(long, value_enum, default_value = "standard")]
    cleanup: CleanupLevel,

    /// Include YAML frontmatter in Markdown output
    #[arg(long)]
    frontmatter: bool,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,
}

impl OutputArgs {
    fn render_options(&self) -> RenderOptions {
        let json_format = if self.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        RenderOptions::new()
            .with_frontmatter(self.frontmatter)
            .with_json_format(json_format)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Unicode normalization and code fences only
    Minimal,
    /// Also citation artifacts and agent instructions (default)
    Standard,
    /// Also generated footer lines and blank-line runs
    Aggressive,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
            CleanupLevel::Aggressive => CleanupPreset::Aggressive,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Print-ready HTML page
    Html,
    /// Markdown
    #[value(alias = "markdown")]
    Md,
    /// JSON document model
    Json,
    /// Plain text
    #[value(alias = "text")]
    Txt,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Md => "md",
            Format::Json => "json",
            Format::Txt => "txt",
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Resume {
            input,
            output,
            placeholder,
        } => cmd_resume(&input, &output, placeholder),
        Commands::Letter {
            input,
            output,
            title,
            job_title,
        } => cmd_letter(&input, &output, title, job_title.as_deref()),
        Commands::Inspect {
            input,
            letter,
            cleanup,
        } => cmd_inspect(&input, letter, cleanup),
        Commands::Batch {
            input,
            out_dir,
            format,
            letters,
            cleanup,
            placeholder,
        } => cmd_batch(&input, &out_dir, format, letters, cleanup, placeholder),
        Commands::Dateline { location, date } => cmd_dateline(&location, date.as_deref()),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn builder(cleanup: CleanupLevel, render: RenderOptions, placeholder: Option<String>) -> Cvpress {
    let builder = Cvpress::new()
        .with_cleanup(cleanup.into())
        .with_render_options(render);
    match placeholder {
        Some(p) => builder.with_placeholder(p),
        None => builder,
    }
}

fn cmd_resume(
    input: &Path,
    output: &OutputArgs,
    placeholder: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = builder(output.cleanup, output.render_options(), placeholder).resume_file(input)?;
    emit(&result, output)
}

fn cmd_letter(
    input: &Path,
    output: &OutputArgs,
    title: Option<String>,
    job_title: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut result = builder(output.cleanup, output.render_options(), None).letter_file(input)?;
    if let Some(title) = title {
        result = result.with_title(title);
    }
    if let Some(job) = job_title {
        result = result.with_job_title(job);
    }
    emit(&result, output)
}

/// Write a laid-out document to a file, a directory or stdout.
fn emit(result: &CvpressResult, output: &OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(ref path) = output.output {
        result.export(path)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else if let Some(ref dir) = output.out_dir {
        fs::create_dir_all(dir)?;
        let path = result.export_to_dir(dir, output.format.extension())?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        let registry = RendererRegistry::with_options(&output.render_options());
        let bytes = registry.render(result.document(), output.format.extension())?;
        println!("{}", String::from_utf8_lossy(&bytes));
    }
    Ok(())
}

fn cmd_inspect(
    input: &Path,
    letter: bool,
    cleanup: CleanupLevel,
) -> Result<(), Box<dyn std::error::Error>> {
    let builder = Cvpress::new().with_cleanup(cleanup.into());
    let result = if letter {
        builder.letter_file(input)?
    } else {
        builder.resume_file(input)?
    };
    let doc = result.document();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    let kind = match doc.kind {
        DocumentKind::Resume => "résumé",
        DocumentKind::Letter => "cover letter",
    };
    println!("{}: {}", "Kind".bold(), kind);
    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref subject) = doc.metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }

    println!();
    println!("{}", "Elements".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for element in &doc.elements {
        match element {
            Element::Spacer { height } => {
                println!("  {:<14} {}pt", "spacer".dimmed(), height);
            }
            Element::Styled(styled) => {
                let label = role_label(styled.role);
                match &styled.content {
                    Content::Text(text) => {
                        let mut lines = doc.split_lines(text);
                        println!("  {:<14} {}", label, lines.next().unwrap_or_default());
                        for line in lines {
                            println!("  {:<14} {}", "", line);
                        }
                    }
                    Content::Items(items) => {
                        for (i, item) in items.iter().enumerate() {
                            let label = if i == 0 { label.clone() } else { "".normal() };
                            println!("  {:<14} • {}", label, item);
                        }
                    }
                }
            }
        }
    }

    let stats = result.stats();
    println!();
    println!("{}", "Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Section titles".bold(), stats.title_count);
    println!(
        "{}: {} ({} items)",
        "Bullet lists".bold(),
        stats.list_count,
        stats.bullet_count
    );
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Spacers".bold(), stats.spacer_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn role_label(role: Role) -> ColoredString {
    let name = role.name();
    match role {
        Role::Header | Role::Subject => name.cyan().bold(),
        Role::SectionTitle => name.cyan(),
        Role::Bullet => name.green(),
        Role::IdentityLine | Role::DateLine | Role::Recipient | Role::Signature => name.yellow(),
        Role::Intro | Role::Paragraph | Role::Body => name.normal(),
    }
}

fn cmd_batch(
    input: &Path,
    out_dir: &Path,
    format: Format,
    letters: bool,
    cleanup: CleanupLevel,
    placeholder: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = collect_inputs(input)?;
    if files.is_empty() {
        println!("{}", "No .md or .txt files found.".yellow());
        return Ok(());
    }
    fs::create_dir_all(out_dir)?;
    log::debug!("Batch layout of {} files into {}", files.len(), out_dir.display());

    let builder = builder(cleanup, RenderOptions::default(), placeholder);
    let ext = format.extension();

    let pb = ProgressBar::new(files.len() as u64 * 2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Laying out...");
    let laid_out: Vec<(PathBuf, Result<CvpressResult, String>)> = files
        .par_iter()
        .map(|file| {
            let result = if letters {
                builder.letter_file(file).map(|r| r.with_title(file_stem(file)))
            } else {
                builder.resume_file(file)
            };
            pb.inc(1);
            (file.clone(), result.map_err(|e| e.to_string()))
        })
        .collect();

    // Distinct documents may share a title; every one gets its own path.
    let mut taken: HashSet<String> = HashSet::new();
    let jobs: Vec<(PathBuf, Result<(CvpressResult, PathBuf), String>)> = laid_out
        .into_iter()
        .map(|(file, result)| {
            let job = result.map(|r| {
                let name = unique_name(&mut taken, &r, ext);
                let target = out_dir.join(name);
                (r, target)
            });
            (file, job)
        })
        .collect();

    pb.set_message("Exporting...");
    let outcomes: Vec<(PathBuf, Result<PathBuf, String>)> = jobs
        .into_par_iter()
        .map(|(file, job)| {
            let outcome = job.and_then(|(r, target)| {
                r.export(&target).map(|_| target).map_err(|e| e.to_string())
            });
            pb.inc(1);
            (file, outcome)
        })
        .collect();
    pb.finish_with_message("Done!");

    println!();
    let mut failed = 0;
    for (file, outcome) in &outcomes {
        match outcome {
            Ok(path) => println!("  {} {}", "✓".green(), path.display()),
            Err(e) => {
                failed += 1;
                println!("  {} {}: {}", "✗".red(), file.display(), e);
            }
        }
    }

    println!(
        "\n{} {} exported, {} failed",
        "Done!".green().bold(),
        outcomes.len() - failed,
        failed
    );

    if failed > 0 {
        return Err(format!("{} file(s) could not be laid out", failed).into());
    }
    Ok(())
}

/// Markdown and text files of a directory, sorted by name.
fn collect_inputs(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let supported = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| matches!(e.to_lowercase().as_str(), "md" | "txt"))
            .unwrap_or(false);
        if path.is_file() && supported {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

/// Standard output name, suffixed with ` (n)` when already taken.
///
/// Names are compared case-insensitively so that outputs stay distinct on
/// case-insensitive file systems.
fn unique_name(taken: &mut HashSet<String>, result: &CvpressResult, ext: &str) -> String {
    let name = result.file_name(ext);
    let stem = name
        .strip_suffix(&format!(".{}", ext))
        .unwrap_or(&name)
        .to_string();

    let mut candidate = name;
    let mut n = 1;
    while taken.contains(&candidate.to_lowercase()) {
        n += 1;
        candidate = format!("{} ({}).{}", stem, n, ext);
    }
    taken.insert(candidate.to_lowercase());
    candidate
}

fn cmd_dateline(location: &str, date: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let line = match date {
        Some(d) => {
            let date = NaiveDate::parse_from_str(d, "%Y-%m-%d")
                .map_err(|e| format!("Invalid date '{}': {}", d, e))?;
            date_line(location, date)
        }
        None => today_line(location),
    };
    println!("{}", line);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "cvpress".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Résumé and cover letter layout tool");
    println!();
    println!("License: MIT");
}
