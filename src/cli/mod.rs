//! CLI argument parsing for prodgen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use crate::product::{ContentLength, ImageStyle, StyleOptions};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Prodgen: product content prompts and response extraction.
///
/// Builds prompts from product JSON, runs them through a configured backend
/// command, and turns loosely formatted responses into structured JSON.
#[derive(Parser, Debug)]
#[command(name = "prodgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to prodgen.yaml in the working directory when present).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for prodgen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract structured fields from a response.
    ///
    /// Reads the response from --input or stdin and prints JSON.
    Parse(ParseArgs),

    /// Print the prompt that would be sent for a product.
    Prompt(GenerateArgs),

    /// Generate content for a product with the configured backend.
    Generate(GenerateArgs),

    /// Fill in every missing field and piece of content for a product.
    ///
    /// Existing values are never replaced.
    Complete(CompleteArgs),
}

/// Kinds of response the extractors understand.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseKind {
    Seo,
    Email,
    Description,
    Social,
    Missing,
}

/// Kinds of content that can be generated.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Description,
    Seo,
    Email,
    Social,
    Missing,
    Image,
}

/// Arguments for the `parse` command.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Response format to extract.
    pub kind: ParseKind,

    /// File holding the response (defaults to stdin).
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Platforms to extract posts for (social only).
    #[arg(long, value_delimiter = ',')]
    pub platforms: Vec<String>,

    /// Product JSON the response completes (required for missing).
    #[arg(long, value_name = "FILE")]
    pub product: Option<PathBuf>,
}

/// Arguments for the `prompt` and `generate` commands.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Content to produce.
    pub kind: ContentKind,

    /// Product JSON file.
    #[arg(long, value_name = "FILE")]
    pub product: PathBuf,

    /// Platforms to write posts for (social only; defaults to instagram, facebook, twitter).
    #[arg(long, value_delimiter = ',')]
    pub platforms: Vec<String>,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Writing and image style flags.
#[derive(Args, Debug, Default)]
pub struct StyleArgs {
    /// Writing tone, e.g. professional or playful.
    #[arg(long)]
    pub tone: Option<String>,

    /// Content length: short, medium or long.
    #[arg(long, value_parser = parse_length)]
    pub length: Option<ContentLength>,

    /// Target audience.
    #[arg(long)]
    pub audience: Option<String>,

    /// Keywords to work into the copy.
    #[arg(long = "keyword", value_delimiter = ',')]
    pub keywords: Vec<String>,

    /// Photographic style (image only).
    #[arg(long)]
    pub image_style: Option<String>,

    /// Camera angle (image only).
    #[arg(long)]
    pub angle: Option<String>,

    /// Backdrop (image only).
    #[arg(long)]
    pub background: Option<String>,
}

impl StyleArgs {
    pub fn style_options(&self) -> StyleOptions {
        StyleOptions {
            tone: self.tone.clone(),
            length: self.length,
            audience: self.audience.clone(),
            keywords: self.keywords.clone(),
        }
    }

    pub fn image_style(&self) -> ImageStyle {
        ImageStyle {
            style: self.image_style.clone(),
            angle: self.angle.clone(),
            background: self.background.clone(),
        }
    }
}

/// Arguments for the `complete` command.
#[derive(Args, Debug)]
pub struct CompleteArgs {
    /// Product JSON file.
    #[arg(long, value_name = "FILE")]
    pub product: PathBuf,

    /// Write the completed product here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

fn parse_length(s: &str) -> Result<ContentLength, String> {
    ContentLength::from_str(s)
        .ok_or_else(|| format!("invalid length '{}' (expected short, medium or long)", s))
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
