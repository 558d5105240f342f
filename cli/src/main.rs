//! pdfchunk CLI - split PDF pages into heading, paragraph, and list chunks

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfchunk::{
    chunk_pages, open_source, render, ChunkOptions, ChunkStats, ChunkedDocument, ErrorMode,
    ExtractOptions, JsonFormat, PageSelection, PageSource, PageText, PdfSource,
};

/// Output file name used when none is given.
const DEFAULT_OUTPUT_NAME: &str = "parsed_chunks.json";

#[derive(Parser)]
#[command(name = "pdfchunk")]
#[command(version)]
#[command(about = "Split PDF pages into heading, paragraph, and list chunks", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output JSON file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Directory to resolve relative input names against
    #[arg(long, global = true, env = "PDFCHUNK_ASSETS_DIR", value_name = "DIR")]
    assets_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Chunk a document and write JSON
    Chunk {
        /// Input PDF or text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (parsed_chunks.json beside the input if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        chunking: ChunkArgs,
    },

    /// Chunk a document and render Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input PDF or text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        chunking: ChunkArgs,
    },

    /// Print the raw extracted text of each page
    Text {
        /// Input PDF or text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Show document information and chunk statistics
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Args, Clone, Default)]
struct ChunkArgs {
    /// Page range (e.g., "1-10", "1,3,5")
    #[arg(long)]
    pages: Option<String>,

    /// Bullet prefix marking a list item (repeatable, replaces the defaults)
    #[arg(long = "bullet", value_name = "PREFIX", allow_hyphen_values = true)]
    bullets: Vec<String>,

    /// Headings must be shorter than this many characters
    #[arg(long, value_name = "N")]
    max_heading_chars: Option<usize>,

    /// Chunk pages one at a time
    #[arg(long)]
    sequential: bool,

    /// Fail if any page's text cannot be extracted
    #[arg(long)]
    strict: bool,

    /// Apply Unicode NFC normalization to extracted text
    #[arg(long)]
    normalize: bool,
}

impl ChunkArgs {
    fn extract_options(&self) -> Result<ExtractOptions, pdfchunk::Error> {
        let mode = if self.strict {
            ErrorMode::Strict
        } else {
            ErrorMode::Lenient
        };
        Ok(ExtractOptions::new()
            .with_error_mode(mode)
            .with_pages(parse_pages(self.pages.as_deref())?)
            .with_unicode_normalization(self.normalize))
    }

    fn chunk_options(&self) -> ChunkOptions {
        let mut options = ChunkOptions::new().with_parallel(!self.sequential);
        if !self.bullets.is_empty() {
            options = options.with_bullet_prefixes(self.bullets.iter().cloned());
        }
        if let Some(chars) = self.max_heading_chars {
            options = options.with_max_heading_chars(chars);
        }
        options
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let assets_dir = cli.assets_dir.as_deref();

    let result = match cli.command {
        Some(Commands::Chunk {
            input,
            output,
            compact,
            chunking,
        }) => cmd_chunk(
            &resolve_input(&input, assets_dir),
            output.as_deref(),
            compact,
            &chunking,
        ),
        Some(Commands::Markdown {
            input,
            output,
            chunking,
        }) => cmd_markdown(
            &resolve_input(&input, assets_dir),
            output.as_deref(),
            &chunking,
        ),
        Some(Commands::Text {
            input,
            output,
            pages,
        }) => cmd_text(
            &resolve_input(&input, assets_dir),
            output.as_deref(),
            pages.as_deref(),
        ),
        Some(Commands::Info { input }) => cmd_info(&resolve_input(&input, assets_dir)),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_chunk(
                    &resolve_input(&input, assets_dir),
                    cli.output.as_deref(),
                    false,
                    &ChunkArgs::default(),
                )
            } else {
                println!("{}", "Usage: pdfchunk <FILE> [OUTPUT]".yellow());
                println!("       pdfchunk --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Resolve a relative input that does not exist against the assets directory.
fn resolve_input(input: &Path, assets_dir: Option<&Path>) -> PathBuf {
    match assets_dir {
        Some(dir) if input.is_relative() && !input.exists() => dir.join(input),
        _ => input.to_path_buf(),
    }
}

/// Default JSON output path: `parsed_chunks.json` next to the input.
fn default_output(input: &Path) -> PathBuf {
    input
        .parent()
        .map(|dir| dir.join(DEFAULT_OUTPUT_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_NAME))
}

fn parse_pages(pages: Option<&str>) -> Result<PageSelection, pdfchunk::Error> {
    pages.map_or(Ok(PageSelection::All), PageSelection::parse)
}

/// Extract pages, then chunk them while a progress bar tracks the work.
fn extract_and_chunk(
    input: &Path,
    chunking: &ChunkArgs,
) -> Result<ChunkedDocument, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Extracting text...");
    let source = open_source(input, &chunking.extract_options()?)?;
    let pages = source.pages()?;
    pb.inc(1);

    pb.set_message(format!("Chunking {} pages...", pages.len()));
    let doc = chunk_pages(&pages, &chunking.chunk_options());
    pb.inc(1);

    pb.finish_and_clear();
    Ok(doc)
}

fn cmd_chunk(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    chunking: &ChunkArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = extract_and_chunk(input, chunking)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(input));
    render::write_json(&output, &doc, format)?;

    let stats = ChunkStats::from_document(&doc);
    println!(
        "{} {} ({} chunks, {} pages)",
        "Saved to".green(),
        output.display(),
        stats.chunk_count(),
        stats.page_count
    );

    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    chunking: &ChunkArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = extract_and_chunk(input, chunking)?;
    let markdown = render::to_markdown(&doc);

    if let Some(path) = output {
        fs::write(path, &markdown)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", markdown);
    }

    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    pages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ExtractOptions::new()
        .lenient()
        .with_pages(parse_pages(pages)?);
    let pages = open_source(input, &options)?.pages()?;
    let text = format_pages(&pages);

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

/// Join page texts with form feeds, the separator `.txt` sources split on.
fn format_pages(pages: &[PageText]) -> String {
    pages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\x0C")
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let source = PdfSource::open_with_options(input, ExtractOptions::new().lenient())?;
    let info = source.info();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), info.pdf_version);
    println!("{}: {}", "Pages".bold(), info.page_count);
    println!(
        "{}: {}",
        "Encrypted".bold(),
        if info.encrypted { "Yes" } else { "No" }
    );

    if let Some(ref title) = info.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = info.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref producer) = info.producer {
        println!("{}: {}", "Producer".bold(), producer);
    }
    if let Some(ref created) = info.created {
        println!("{}: {}", "Created".bold(), created);
    }

    let doc = chunk_pages(&source.pages()?, &ChunkOptions::default());
    let stats = ChunkStats::from_document(&doc);

    println!();
    println!("{}", "Chunk Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Lists".bold(), stats.list_count);
    println!("{}: {}", "Empty pages".bold(), stats.empty_page_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfchunk".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Layout-heuristic PDF chunking tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_input_uses_assets_dir_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = resolve_input(Path::new("Report.pdf"), Some(dir.path()));
        assert_eq!(resolved, dir.path().join("Report.pdf"));
    }

    #[test]
    fn test_resolve_input_keeps_existing_or_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let absolute = dir.path().join("a.pdf");
        assert_eq!(resolve_input(&absolute, Some(Path::new("assets"))), absolute);
        assert_eq!(
            resolve_input(Path::new("x.pdf"), None),
            PathBuf::from("x.pdf")
        );
    }

    #[test]
    fn test_default_output_beside_input() {
        assert_eq!(
            default_output(Path::new("assets/Device.pdf")),
            PathBuf::from("assets/parsed_chunks.json")
        );
        assert_eq!(
            default_output(Path::new("Device.pdf")),
            PathBuf::from("parsed_chunks.json")
        );
    }

    #[test]
    fn test_chunk_args_defaults_are_lenient() {
        let args = ChunkArgs::default();
        let extract = args.extract_options().unwrap();
        assert_eq!(extract.error_mode, ErrorMode::Lenient);
        assert!(args.chunk_options().parallel);
    }

    #[test]
    fn test_chunk_args_overrides() {
        let args = ChunkArgs {
            pages: Some("2-3".to_string()),
            bullets: vec!["* ".to_string()],
            max_heading_chars: Some(50),
            sequential: true,
            strict: true,
            normalize: false,
        };
        let extract = args.extract_options().unwrap();
        assert_eq!(extract.error_mode, ErrorMode::Strict);
        assert_eq!(extract.pages, PageSelection::Range(2..=3));

        let chunk = args.chunk_options();
        assert_eq!(chunk.bullet_prefixes, vec!["* "]);
        assert_eq!(chunk.max_heading_chars, 50);
        assert!(!chunk.parallel);
    }

    #[test]
    fn test_format_pages_round_trips_through_text_source() {
        use pdfchunk::TextSource;

        let pages = vec![PageText::new(1, "one"), PageText::new(2, "two")];
        let text = format_pages(&pages);
        let back = TextSource::from_form_feed(&text).pages().unwrap();
        assert_eq!(back, pages);
    }
}
