//! `prodgen prompt`, `prodgen generate` and `prodgen complete`.

use super::io::platforms_or_default;
use super::parse::to_value;
use crate::cli::{CompleteArgs, ContentKind, GenerateArgs};
use crate::config::Config;
use crate::error::Result;
use crate::generator::TextGenerator;
use crate::product::ProductRecord;
use crate::prompt::{self, system};
use crate::service::ContentService;
use serde_json::{Value, json};
use tracing::info;

/// The system role and prompt for `args`, without calling a backend.
pub(super) fn cmd_prompt(args: &GenerateArgs, config: &Config) -> Result<Value> {
    let record = ProductRecord::load(&args.product)?;
    let style = args.style.style_options();

    let (role, text) = match args.kind {
        ContentKind::Description => (
            Some(system::COPYWRITER),
            prompt::description_prompt(&record, &style)?,
        ),
        ContentKind::Seo => (Some(system::SEO_EXPERT), prompt::seo_prompt(&record)?),
        ContentKind::Email => (
            Some(system::EMAIL_SPECIALIST),
            prompt::email_prompt(&record, &style)?,
        ),
        ContentKind::Social => {
            let platforms = platforms_or_default(&args.platforms)?;
            (
                Some(system::SOCIAL_MEDIA_MANAGER),
                prompt::social_prompt(&record, &style, &platforms)?,
            )
        }
        ContentKind::Missing => (
            Some(system::PRODUCT_DATA_SPECIALIST),
            prompt::missing_fields_prompt(&record, config.extraction.list_min_items)?,
        ),
        ContentKind::Image => (None, prompt::image_prompt(&record, &args.style.image_style())?),
    };

    Ok(json!({ "system": role, "prompt": text }))
}

/// Generate one kind of content for the product.
pub(super) fn cmd_generate<G: TextGenerator>(
    args: &GenerateArgs,
    service: &ContentService<G>,
) -> Result<Value> {
    let record = ProductRecord::load(&args.product)?;
    let style = args.style.style_options();
    info!(kind = ?args.kind, product = %args.product.display(), "generating content");

    match args.kind {
        ContentKind::Description => to_value(service.generate_product_description(&record, &style)?),
        ContentKind::Seo => to_value(service.generate_seo_content(&record)?),
        ContentKind::Email => to_value(service.generate_marketing_email(&record, &style)?),
        ContentKind::Social => {
            let platforms = platforms_or_default(&args.platforms)?;
            to_value(service.generate_social_media_content(&record, &style, &platforms)?)
        }
        ContentKind::Missing => to_value(service.generate_missing_fields(&record)?),
        ContentKind::Image => {
            to_value(service.generate_product_image(&record, &args.style.image_style())?)
        }
    }
}

/// Complete the product and return it.
pub(super) fn cmd_complete<G: TextGenerator>(
    args: &CompleteArgs,
    service: &ContentService<G>,
) -> Result<Value> {
    let record = ProductRecord::load(&args.product)?;
    info!(product = %args.product.display(), "completing product");
    Ok(service.complete_product(&record)?.into_value())
}
