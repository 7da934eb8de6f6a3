//! Prompt construction from product records.
//!
//! - **Template**: `{variable}` substitution, also used for backend commands
//! - **Context**: product fields flattened into template variables
//! - **Builders**: one prompt per kind of generated content
//!
//! Prompts ask for the formats the extractors understand: `Title:` and
//! `Description:` markers, a `Subject Line:` marker, `INSTAGRAM:` style
//! section headers, and a JSON object for missing fields.

mod builders;
mod context;
mod template;

#[cfg(test)]
mod tests;

pub use builders::{
    COMPLETABLE_FIELDS, description_prompt, email_prompt, image_prompt, missing_fields_prompt,
    needed_fields, seo_prompt, social_prompt, system,
};
pub use context::ProductContext;
pub use template::{TemplateError, TemplateVars, render_template, vars};
