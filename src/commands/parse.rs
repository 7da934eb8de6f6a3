//! `prodgen parse`: extract fields from a response.

use super::io::{platforms_or_default, read_input, require_product};
use crate::cli::{ParseArgs, ParseKind};
use crate::config::Config;
use crate::error::{ProdgenError, Result};
use crate::extract::{
    parse_description_response, parse_email_response, parse_missing_fields, parse_seo_response,
    parse_social_response,
};
use crate::product::ProductRecord;
use serde_json::Value;

pub(super) fn cmd_parse(args: &ParseArgs, config: &Config) -> Result<Value> {
    if !args.platforms.is_empty() && args.kind != ParseKind::Social {
        return Err(ProdgenError::UserError(
            "--platforms only applies to social responses".to_string(),
        ));
    }

    // Load the product before blocking on stdin.
    let record = match args.kind {
        ParseKind::Missing => {
            require_product(args.product.as_deref(), "missing-field responses")?
        }
        _ => ProductRecord::new(),
    };
    let text = read_input(args.input.as_deref())?;
    let extraction = &config.extraction;

    match args.kind {
        ParseKind::Seo => to_value(parse_seo_response(&text, extraction)),
        ParseKind::Email => to_value(parse_email_response(&text, extraction)),
        ParseKind::Description => to_value(parse_description_response(&text)),
        ParseKind::Social => {
            let platforms = platforms_or_default(&args.platforms)?;
            to_value(parse_social_response(&text, &platforms))
        }
        ParseKind::Missing => to_value(parse_missing_fields(&text, &record, extraction)),
    }
}

pub(super) fn to_value<T: serde::Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|e| ProdgenError::UserError(format!("failed to serialize output: {}", e)))
}
