//! Content generation: prompt, backend call, extraction.

#[cfg(test)]
mod tests;

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::extract::{
    DescriptionContent, EmailContent, ExtractionResult, SeoContent, SocialPosts,
    parse_description_response, parse_email_response, parse_missing_fields,
    parse_seo_response, parse_social_response,
};
use crate::generator::{CompletionRequest, TextGenerator};
use crate::product::{ContentLength, ImageStyle, PlatformSet, ProductRecord, StyleOptions};
use crate::prompt::{self, system};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::{debug, info};

/// A generated product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub image_url: String,
    pub prompt: String,
}

/// Generates product content with a backend and extracts the results.
pub struct ContentService<G> {
    generator: G,
    extraction: ExtractionConfig,
}

impl<G: TextGenerator> ContentService<G> {
    pub fn new(generator: G, extraction: ExtractionConfig) -> Self {
        Self {
            generator,
            extraction,
        }
    }

    /// The backend in use.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    fn ask(&self, system: &str, prompt: String) -> Result<String> {
        self.generator
            .complete(&CompletionRequest::new(system, prompt))
    }

    pub fn generate_product_description(
        &self,
        record: &ProductRecord,
        style: &StyleOptions,
    ) -> Result<DescriptionContent> {
        let response = self.ask(system::COPYWRITER, prompt::description_prompt(record, style)?)?;
        Ok(parse_description_response(&response))
    }

    pub fn generate_seo_content(&self, record: &ProductRecord) -> Result<SeoContent> {
        let response = self.ask(system::SEO_EXPERT, prompt::seo_prompt(record)?)?;
        Ok(parse_seo_response(&response, &self.extraction))
    }

    pub fn generate_marketing_email(
        &self,
        record: &ProductRecord,
        style: &StyleOptions,
    ) -> Result<EmailContent> {
        let response = self.ask(system::EMAIL_SPECIALIST, prompt::email_prompt(record, style)?)?;
        Ok(parse_email_response(&response, &self.extraction))
    }

    pub fn generate_social_media_content(
        &self,
        record: &ProductRecord,
        style: &StyleOptions,
        platforms: &PlatformSet,
    ) -> Result<SocialPosts> {
        let prompt = prompt::social_prompt(record, style, platforms)?;
        let response = self.ask(system::SOCIAL_MEDIA_MANAGER, prompt)?;
        Ok(parse_social_response(&response, platforms))
    }

    /// Ask for the record's missing fields.
    ///
    /// The result never holds a field the record already has.
    pub fn generate_missing_fields(&self, record: &ProductRecord) -> Result<ExtractionResult> {
        let prompt = prompt::missing_fields_prompt(record, self.extraction.list_min_items)?;
        let response = self.ask(system::PRODUCT_DATA_SPECIALIST, prompt)?;
        Ok(parse_missing_fields(&response, record, &self.extraction))
    }

    pub fn generate_product_image(
        &self,
        record: &ProductRecord,
        style: &ImageStyle,
    ) -> Result<GeneratedImage> {
        let prompt = prompt::image_prompt(record, style)?;
        let image_url = self.generator.generate_image(&prompt)?;
        Ok(GeneratedImage { image_url, prompt })
    }

    /// Fill in everything the record lacks.
    ///
    /// Missing basic fields come first so later prompts can use them. Then
    /// the detailed description, SEO title and description, marketing email
    /// and social posts are generated only where absent. Present values are
    /// never replaced.
    pub fn complete_product(&self, record: &ProductRecord) -> Result<ProductRecord> {
        let mut product = record.clone();

        let needed = prompt::needed_fields(&product, self.extraction.list_min_items);
        if needed.is_empty() {
            debug!("no basic fields missing");
        } else {
            info!(fields = ?needed, "generating missing fields");
            let missing = self.generate_missing_fields(&product)?;
            let merged = product.merge_missing(&missing, self.extraction.list_min_items);
            debug!(merged = ?merged, "merged generated fields");
        }

        if !product.is_truthy("detailed_description") {
            let style = StyleOptions::with_tone("professional").length(ContentLength::Medium);
            let description = self.generate_product_description(&product, &style)?;
            product.set(
                "detailed_description",
                Value::String(description.detailed_description),
            );
        }

        let has_title = product.is_truthy("seo_title");
        let has_description = product.is_truthy("seo_description");
        if !has_title || !has_description {
            let seo = self.generate_seo_content(&product)?;
            if !has_title {
                product.set("seo_title", Value::String(seo.title));
            }
            if !has_description {
                product.set("seo_description", Value::String(seo.description));
            }
        }

        if !product.is_truthy_at(&["marketing_copy", "email"]) {
            let style = StyleOptions::with_tone("enthusiastic").length(ContentLength::Medium);
            let email = self.generate_marketing_email(&product, &style)?;
            product.set_at(
                &["marketing_copy", "email"],
                json!({"subject": email.subject, "body": email.body}),
            );
        }

        if !product.is_truthy_at(&["marketing_copy", "social_media"]) {
            let style = StyleOptions::with_tone("casual").length(ContentLength::Short);
            let posts = self.generate_social_media_content(
                &product,
                &style,
                &PlatformSet::campaign_default(),
            )?;
            let posts: Map<String, Value> = posts
                .into_iter()
                .map(|(platform, post)| (platform.as_str().to_string(), Value::String(post)))
                .collect();
            product.set_at(&["marketing_copy", "social_media"], Value::Object(posts));
        }

        Ok(product)
    }
}
