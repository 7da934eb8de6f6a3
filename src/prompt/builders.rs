//! Prompt builders for each kind of generated content.

use super::context::{ProductContext, bullets, insert_style_vars};
use super::template::{TemplateError, TemplateVars, render_template};
use crate::extract::{
    DocumentKind, LengthHint, SUBJECT_LENGTH, TITLE_LENGTH, is_list_field, length_hint,
};
use crate::product::{ContentLength, ImageStyle, Platform, PlatformSet, ProductRecord, StyleOptions};

/// System role sent with each kind of request.
pub mod system {
    pub const COPYWRITER: &str =
        "You are an expert eCommerce copywriter who creates compelling product descriptions.";
    pub const SEO_EXPERT: &str =
        "You are an SEO expert who creates optimized product titles and meta descriptions.";
    pub const EMAIL_SPECIALIST: &str =
        "You are an email marketing specialist who creates compelling product-focused emails.";
    pub const SOCIAL_MEDIA_MANAGER: &str =
        "You are a social media manager who creates engaging product posts.";
    pub const PRODUCT_DATA_SPECIALIST: &str =
        "You are a product data specialist who completes missing product information accurately.";
}

type PromptResult = Result<String, TemplateError>;

/// Appends rendered fragments to a prompt.
struct PromptWriter {
    vars: TemplateVars,
    out: String,
}

impl PromptWriter {
    fn new(vars: TemplateVars) -> Self {
        Self {
            vars,
            out: String::new(),
        }
    }

    fn push(&mut self, template: &str) -> Result<(), TemplateError> {
        let rendered = render_template(template, &self.vars)?;
        self.out.push_str(&rendered);
        Ok(())
    }

    fn push_if(&mut self, condition: bool, template: &str) -> Result<(), TemplateError> {
        if condition { self.push(template) } else { Ok(()) }
    }

    fn finish(self) -> String {
        self.out
    }
}

const DESCRIPTION_HEADER: &str = "\
You are a eCommerce copywriter. Create a compelling product description for the following e-commerce product:

PRODUCT: {name}
BRAND: {brand}
PRICE: ${price}
";

const DESCRIPTION_INSTRUCTIONS: &str = "
--- WRITING INSTRUCTIONS ---
TONE: {tone}
LENGTH: {length_guidance}
TARGET AUDIENCE: {audience}

STRUCTURE:
1. Start with an attention-grabbing opening that highlights a key benefit
2. Describe what the product is and its primary use cases
3. Highlight 3-4 key features and their benefits to the user
4. Include relevant details about quality, materials, or design
5. End with a concise call-to-action or value proposition

ADDITIONAL GUIDELINES:
• Use active voice and present tense
• Focus on benefits, not just features
• Create vivid, sensory language where appropriate
• Avoid clichés and generic marketing language
";

const DESCRIPTION_FOOTER: &str = "
Provide the product description as a cohesive, ready-to-use text without headings or bullet points unless they enhance readability. Don't include any disclaimers or explanations about the content.";

fn length_guidance(length: ContentLength) -> &'static str {
    match length {
        ContentLength::Short => "Concise, approximately 75-100 words",
        ContentLength::Medium => "Balanced, approximately 150-175 words",
        ContentLength::Long => "Detailed, approximately 200-250 words",
    }
}

/// Prompt for a long-form product description.
pub fn description_prompt(record: &ProductRecord, style: &StyleOptions) -> PromptResult {
    let ctx = ProductContext::from_record(record);
    let mut vars = ctx.to_template_vars();
    insert_style_vars(&mut vars, style, "professional");
    vars.insert(
        "length_guidance".to_string(),
        length_guidance(style.length.unwrap_or_default()).to_string(),
    );

    let mut w = PromptWriter::new(vars);
    w.push(DESCRIPTION_HEADER)?;
    w.push_if(!ctx.category.is_empty(), "CATEGORY: {category_path}\n")?;
    w.push_if(!ctx.features.is_empty(), "\nKEY FEATURES:\n{features_bullets}\n")?;
    w.push_if(!ctx.materials.is_empty(), "\nMATERIALS:\n{materials_bullets}\n")?;
    w.push_if(!ctx.colors.is_empty(), "\nAVAILABLE COLORS: {colors}\n")?;
    w.push_if(
        !ctx.basic_description.is_empty(),
        "\nBASIC PRODUCT INFO: {basic_description}\n",
    )?;
    w.push_if(!ctx.tags.is_empty(), "\nTARGET KEYWORDS: {tags}\n")?;
    w.push(DESCRIPTION_INSTRUCTIONS)?;
    w.push_if(
        !style.keywords.is_empty(),
        "\nPlease naturally incorporate these keywords: {keywords}\n",
    )?;
    w.push(DESCRIPTION_FOOTER)?;
    Ok(w.finish())
}

const SEO_TEMPLATE: &str = "\
You are an expert SEO copywriter.

Generate an SEO-optimized product title and a small meta description for the following product:

PRODUCT INFORMATION:
- Name: {name}
- Brand: {brand}
- Category: {category}
- Subcategory: {subcategory}
- Basic Description: {basic_description}

Key Features:
{features_bullets}

Target Keywords: {tags}

INSTRUCTIONS:
1. Create a small SEO-optimized product title:
- Highlight a key benefit or feature
- Keep the title STRICTLY between {title_length} characters

2. Create a small meta description:
- Start with the main keyword
- Include a strong value prop and a clear call-to-action
- Use 1-2 secondary keywords naturally
- Keep the description STRICTLY under 150 and above 120 characters

RESPONSE FORMAT:
Title: [your SEO title here]
Description: [your meta description here]

Respond only with the fields above in plain text, no extra explanations or formatting.";

/// Prompt for an SEO title and meta description.
pub fn seo_prompt(record: &ProductRecord) -> PromptResult {
    let mut vars = ProductContext::from_record(record).to_template_vars();
    insert_length(&mut vars, "title_length", DocumentKind::Seo, "title", TITLE_LENGTH);
    render_template(SEO_TEMPLATE, &vars)
}

const EMAIL_TEMPLATE: &str = "\
Create a human-sounding, compelling marketing email for the following product:

PRODUCT: {name}
BRAND: {brand}
PRICE: ${price}
CATEGORY: {category}

PRODUCT DESCRIPTION:
{description}

KEY FEATURES:
{features_bullets}

TARGET AUDIENCE: {audience}

INSTRUCTIONS:
1. Create an attention-grabbing subject line ({subject_length} characters)
- Create urgency or curiosity
- Mention a key benefit or the product name

2. Write an email body (150-200 words) that includes:
- Engaging opening paragraph highlighting a key benefit
- 2-3 paragraphs highlighting features and their benefits
- Clear product imagery description (where image would be placed)
- Strong call-to-action

TONE: {tone}
LENGTH: {length}

RESPONSE FORMAT:
Subject Line: [your subject line]

[Email Body Content]

Note: Format the email body as it should appear, with paragraph breaks and sections. Do not include any placeholders.";

/// Prompt for a marketing email with a `Subject Line:` marker.
pub fn email_prompt(record: &ProductRecord, style: &StyleOptions) -> PromptResult {
    let mut vars = ProductContext::from_record(record).to_template_vars();
    insert_style_vars(&mut vars, style, "enthusiastic");
    insert_length(&mut vars, "subject_length", DocumentKind::Email, "subject", SUBJECT_LENGTH);
    render_template(EMAIL_TEMPLATE, &vars)
}

fn insert_length(
    vars: &mut TemplateVars,
    name: &str,
    kind: DocumentKind,
    field: &str,
    fallback: LengthHint,
) {
    let hint = length_hint(kind, field).unwrap_or(fallback);
    vars.insert(name.to_string(), hint.to_string());
}

fn platform_brief(platform: Platform) -> &'static str {
    match platform {
        Platform::Instagram => "
INSTAGRAM:
- Create an eye-catching caption that works with a product image
- Include 2-3 relevant emojis spaced throughout the text
- Keep the main message under 125 words
- End with a clear call-to-action
- Include 3-5 relevant hashtags at the end (format with # symbol)
- Tone should be visual, aspirational, and lifestyle-focused
",
        Platform::Facebook => "
FACEBOOK:
- Write a more detailed post (75-100 words)
- Include one question to encourage engagement
- Create a clear value proposition
- End with a specific call-to-action
- Tone should be conversational and informative
- No hashtags needed
",
        Platform::Twitter => "
TWITTER:
- Create a concise, attention-grabbing tweet (max 280 characters)
- Make it shareable and engaging
- Include 1-2 relevant hashtags integrated into the text
- Include a call-to-action when possible
- Make it conversational, clever or timely when appropriate
",
        Platform::LinkedIn => "
LINKEDIN:
- Create a professional post focused on product benefits (100-150 words)
- Highlight business value, efficiency, or professional benefits
- Use a more formal, business-appropriate tone
- Include one industry insight or trend connection if relevant
- End with a professional call-to-action
- No hashtags needed
",
    }
}

const SOCIAL_FORMAT: &str = "
Format your response with clear headings for each platform like this:

INSTAGRAM:
[Instagram post content here with hashtags at the end]

FACEBOOK:
[Facebook post content here]

And so on for each requested platform.
";

/// Social posts use at most this many features.
const SOCIAL_FEATURE_LIMIT: usize = 3;

/// Prompt for one post per requested platform, under `INSTAGRAM:` style headers.
pub fn social_prompt(
    record: &ProductRecord,
    style: &StyleOptions,
    platforms: &PlatformSet,
) -> PromptResult {
    let ctx = ProductContext::from_record(record);
    let mut vars = ctx.to_template_vars();
    insert_style_vars(&mut vars, style, "casual and engaging");
    let top_features: Vec<String> = ctx
        .features
        .iter()
        .take(SOCIAL_FEATURE_LIMIT)
        .map(|feature| format!("- {}", feature))
        .collect();
    vars.insert("top_features".to_string(), top_features.join("\n"));
    vars.insert(
        "hashtag_keywords".to_string(),
        ctx.hashtag_keywords().join(", "),
    );

    let mut w = PromptWriter::new(vars);
    w.push(
        "I need engaging social media posts to promote the following product:\n\n\
         Product Name: {name}\nBrand: {brand}\nPrice: ${price}\n",
    )?;
    w.push_if(
        !ctx.basic_description.is_empty(),
        "Basic Description: {basic_description}\n",
    )?;
    w.push_if(!ctx.features.is_empty(), "\nKey Selling Points:\n{top_features}\n")?;
    w.push("\nTarget Audience: {audience}\n")?;
    w.push("\nI need content for the following platforms:\n")?;
    for platform in platforms.iter() {
        w.out.push_str(platform_brief(platform));
    }
    w.push("\nOverall tone should be: {tone}\n")?;
    w.push_if(
        !ctx.brand.is_empty(),
        "The content should reflect {brand}'s brand identity.\n",
    )?;
    w.push_if(
        !ctx.tags.is_empty(),
        "\nRelevant hashtag keywords: {hashtag_keywords}\n",
    )?;
    w.out.push_str(SOCIAL_FORMAT);
    Ok(w.finish())
}

/// Product fields the missing-fields prompt asks for.
pub const COMPLETABLE_FIELDS: [&str; 5] =
    ["category", "subcategory", "features", "materials", "tags"];

/// Fields of `record` that still need generating.
///
/// `features` and `tags` count as missing with fewer than `list_min_items`
/// entries; the others when absent or empty.
pub fn needed_fields(record: &ProductRecord, list_min_items: usize) -> Vec<&'static str> {
    COMPLETABLE_FIELDS
        .into_iter()
        .filter(|field| match *field {
            "features" | "tags" => record.list_len(field) < list_min_items,
            field if is_list_field(field) => record.list_len(field) == 0,
            field => !record.is_truthy(field),
        })
        .collect()
}

const ENRICHMENT_TEMPLATE: &str = "\
The following product appears to have all the required fields filled.

PRODUCT NAME: {name}
BRAND: {brand}
PRICE: ${price}
DESCRIPTION: {basic_description}

Please respond with a JSON object that includes a note like this:

{{
\"note\": \"No missing fields detected. All essential product data is present.\"
}}

Alternatively, feel free to provide an 'enrichment_suggestions' array to improve the product listing:

{{
\"enrichment_suggestions\": [
    \"Add more vibrant color options.\",
    \"Include size variants for different users.\",
    \"Mention customer testimonials or reviews.\"
]
}}

Respond only with the JSON.";

const MISSING_FIELDS_TEMPLATE: &str = "\
Based on the following product information, generate the missing product fields marked as NEEDED:

PRODUCT NAME: {name}
BRAND: {brand}
PRICE: ${price}
BASIC DESCRIPTION: {basic_description}

CATEGORY: {category_slot}
SUBCATEGORY: {subcategory_slot}

FEATURES: {features_slot}
MATERIALS: {materials_slot}
COLORS: {colors}
TAGS/KEYWORDS: {tags_slot}

INSTRUCTIONS:
1. For each field marked as NEEDED, generate realistic and appropriate content.
2. Ensure all generated content is consistent with existing product information.
3. For FEATURES, focus on specific benefits and unique selling points.
4. For MATERIALS, be specific about composition and quality.
5. For TAGS/KEYWORDS, include a mix of broad and specific terms relevant to the product.

RESPONSE FORMAT:
Provide your response as a JSON object with only the missing fields. For example:

{{
\"category\": \"Example Category\",
\"subcategory\": \"Example Subcategory\",
\"features\": [\"Feature 1\", \"Feature 2\", \"Feature 3\", \"Feature 4\"],
\"materials\": [\"Material 1\", \"Material 2\"],
\"tags\": [\"tag1\", \"tag2\", \"tag3\", \"tag4\", \"tag5\"]
}}

Only include fields that were marked as NEEDED. Do not include explanations outside the JSON.";

/// Prompt asking for the record's missing fields as JSON.
///
/// When nothing is missing, asks for enrichment suggestions instead.
pub fn missing_fields_prompt(record: &ProductRecord, list_min_items: usize) -> PromptResult {
    let needed = needed_fields(record, list_min_items);
    let ctx = ProductContext::from_record(record);
    let mut vars = ctx.to_template_vars();

    if needed.is_empty() {
        return render_template(ENRICHMENT_TEMPLATE, &vars);
    }

    let slot = |field: &str, request: &str, present: String| {
        if needed.iter().any(|n| *n == field) {
            request.to_string()
        } else {
            present
        }
    };
    let slots = [
        ("category_slot", slot("category", "NEEDED", ctx.category.clone())),
        ("subcategory_slot", slot("subcategory", "NEEDED", ctx.subcategory.clone())),
        (
            "features_slot",
            slot(
                "features",
                "NEEDED (at least 4-5 key features)",
                bullets(&ctx.features),
            ),
        ),
        ("materials_slot", slot("materials", "NEEDED", bullets(&ctx.materials))),
        (
            "tags_slot",
            slot(
                "tags",
                "NEEDED (at least 5-7 relevant keywords)",
                ctx.tags.join(", "),
            ),
        ),
    ];
    for (key, value) in slots {
        vars.insert(key.to_string(), value);
    }

    render_template(MISSING_FIELDS_TEMPLATE, &vars)
}

const IMAGE_TEMPLATE: &str = "\
Create a professional product image of the {name} by {brand_or_premium}.

Product details:
- Brand: {brand}
- Type: {category_path}
- Description: {basic_description}
- Color: {color}
{materials_line}
Image specifications:
- Style: {image_style}
- Angle: {image_angle}
- Background: {image_background}
- High-quality, well-lit commercial product shot
- Clean, professional appearance suitable for e-commerce";

/// Staging hint for categories that photograph best a particular way.
fn staging_hint(category: &str) -> Option<&'static str> {
    let category = category.to_lowercase();
    if category.contains("clothing") || category.contains("apparel") {
        Some("- Show the item on an invisible mannequin or flat lay")
    } else if category.contains("electronics") {
        Some("- Show multiple angles if appropriate, emphasize sleek design")
    } else if category.contains("furniture") {
        Some("- Show the item in context within a minimalist room setting")
    } else {
        None
    }
}

/// Prompt for a product photo.
pub fn image_prompt(record: &ProductRecord, image_style: &ImageStyle) -> PromptResult {
    let ctx = ProductContext::from_record(record);
    let mut vars = ctx.to_template_vars();

    let brand_or_premium = if ctx.brand.is_empty() {
        "a premium brand".to_string()
    } else {
        ctx.brand.clone()
    };
    let color = ctx
        .colors
        .first()
        .cloned()
        .unwrap_or_else(|| "standard color".to_string());
    let materials_line = if ctx.materials.is_empty() {
        String::new()
    } else {
        let shown: Vec<&str> = ctx.materials.iter().take(2).map(String::as_str).collect();
        format!("- Made of: {}\n", shown.join(", "))
    };

    let extra = [
        ("brand_or_premium", brand_or_premium),
        ("color", color),
        ("materials_line", materials_line),
        ("image_style", image_style.style().to_string()),
        ("image_angle", image_style.angle().to_string()),
        ("image_background", image_style.background().to_string()),
    ];
    for (key, value) in extra {
        vars.insert(key.to_string(), value);
    }

    let mut prompt = render_template(IMAGE_TEMPLATE, &vars)?;
    if let Some(hint) = staging_hint(&ctx.category) {
        prompt.push('\n');
        prompt.push_str(hint);
    }
    Ok(prompt)
}
