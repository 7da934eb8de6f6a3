use super::generate::{cmd_complete, cmd_generate, cmd_prompt};
use super::parse::cmd_parse;
use crate::cli::{CompleteArgs, ContentKind, GenerateArgs, ParseArgs, ParseKind, StyleArgs};
use crate::config::Config;
use crate::error::ProdgenError;
use crate::prompt::system;
use crate::service::ContentService;
use crate::test_support::{ScriptedGenerator, partial_backpack};
use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn product_file(dir: &TempDir) -> PathBuf {
    let content = serde_json::to_string(&partial_backpack()).unwrap();
    write(dir, "product.json", &content)
}

fn parse_args(kind: ParseKind, input: &Path) -> ParseArgs {
    ParseArgs {
        kind,
        input: Some(input.to_path_buf()),
        platforms: Vec::new(),
        product: None,
    }
}

fn generate_args(kind: ContentKind, product: PathBuf) -> GenerateArgs {
    GenerateArgs {
        kind,
        product,
        platforms: Vec::new(),
        style: StyleArgs::default(),
    }
}

#[test]
fn test_parse_seo_file() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "seo.txt", "Title: Trail Pack\nDescription: Stay dry.");
    let output = cmd_parse(&parse_args(ParseKind::Seo, &input), &Config::default()).unwrap();
    assert_eq!(output, json!({"title": "Trail Pack", "description": "Stay dry."}));
}

#[test]
fn test_parse_social_with_platforms() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "social.txt", "INSTAGRAM:\ngram\nLINKEDIN:\npro");
    let mut args = parse_args(ParseKind::Social, &input);
    args.platforms = vec!["linkedin".to_string()];
    let output = cmd_parse(&args, &Config::default()).unwrap();
    assert_eq!(output, json!({"linkedin": "pro"}));
}

#[test]
fn test_parse_social_unknown_platform() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "social.txt", "INSTAGRAM:\ngram");
    let mut args = parse_args(ParseKind::Social, &input);
    args.platforms = vec!["myspace".to_string()];
    let err = cmd_parse(&args, &Config::default()).unwrap_err();
    assert!(matches!(err, ProdgenError::UserError(_)));
}

#[test]
fn test_parse_missing_requires_product() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "missing.txt", "{}");
    let err = cmd_parse(&parse_args(ParseKind::Missing, &input), &Config::default()).unwrap_err();
    assert!(err.to_string().contains("--product is required"));
}

#[test]
fn test_parse_missing_against_product() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "missing.txt", "Category: Bags\nBrand: Other");
    let mut args = parse_args(ParseKind::Missing, &input);
    args.product = Some(product_file(&dir));
    let output = cmd_parse(&args, &Config::default()).unwrap();
    assert_eq!(output, json!({"category": "Bags"}));
}

#[test]
fn test_platforms_rejected_outside_social() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "email.txt", "Subject: Hi");
    let mut args = parse_args(ParseKind::Email, &input);
    args.platforms = vec!["instagram".to_string()];
    assert!(cmd_parse(&args, &Config::default()).is_err());
}

#[test]
fn test_missing_input_file() {
    let args = parse_args(ParseKind::Email, Path::new("/nonexistent/prodgen/input.txt"));
    let err = cmd_parse(&args, &Config::default()).unwrap_err();
    assert!(err.to_string().contains("failed to read input file"));
}

#[test]
fn test_prompt_includes_system_role() {
    let dir = TempDir::new().unwrap();
    let args = generate_args(ContentKind::Seo, product_file(&dir));
    let output = cmd_prompt(&args, &Config::default()).unwrap();
    assert_eq!(output["system"], system::SEO_EXPERT);
    assert!(output["prompt"].as_str().unwrap().contains("- Name: Trail Pack 30L"));
}

#[test]
fn test_image_prompt_has_no_system_role() {
    let dir = TempDir::new().unwrap();
    let args = generate_args(ContentKind::Image, product_file(&dir));
    let output = cmd_prompt(&args, &Config::default()).unwrap();
    assert!(output["system"].is_null());
}

#[test]
fn test_generate_email() {
    let dir = TempDir::new().unwrap();
    let service = ContentService::new(
        ScriptedGenerator::new(["Subject: Hello\n\nBody"]),
        Config::default().extraction,
    );
    let args = generate_args(ContentKind::Email, product_file(&dir));
    let output = cmd_generate(&args, &service).unwrap();
    assert_eq!(output, json!({"subject": "Hello", "body": "Body"}));
}

#[test]
fn test_complete_returns_full_record() {
    let dir = TempDir::new().unwrap();
    let service = ContentService::new(
        ScriptedGenerator::new([
            r#"{"category": "Bags", "subcategory": "Backpacks", "features": ["a", "b", "c"], "materials": ["nylon"], "tags": ["x", "y", "z"]}"#,
            "Long description.",
            "Title: T\nDescription: D",
            "Subject: S\n\nB",
            "INSTAGRAM:\ni\nFACEBOOK:\nf\nTWITTER:\nt",
        ]),
        Config::default().extraction,
    );
    let args = CompleteArgs {
        product: product_file(&dir),
        output: None,
    };
    let output = cmd_complete(&args, &service).unwrap();
    assert_eq!(output["name"], "Trail Pack 30L");
    assert_eq!(output["category"], "Bags");
    assert_eq!(output["seo_title"], "T");
    assert_eq!(output["marketing_copy"]["social_media"]["twitter"], "t");
}
