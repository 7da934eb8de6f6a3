use super::*;
use crate::product::{ContentLength, ImageStyle, Platform, PlatformSet, ProductRecord, StyleOptions};
use serde_json::json;

fn backpack() -> ProductRecord {
    ProductRecord::from_value(json!({
        "name": "Trail Pack 30L",
        "brand": "Summit",
        "price": 89.99,
        "category": "Bags",
        "subcategory": "Backpacks",
        "features": ["Waterproof shell", "Padded straps", "Laptop sleeve", "Side pockets"],
        "materials": ["Ripstop nylon", "Aluminum", "Mesh"],
        "colors": ["Forest Green", "Black"],
        "tags": ["hiking backpack", "travel", "outdoor gear"],
        "basic_description": "A 30 liter pack for day hikes."
    }))
    .unwrap()
}

#[test]
fn test_context_renders_lists_two_ways() {
    let vars = ProductContext::from_record(&backpack()).to_template_vars();
    assert_eq!(vars["price"], "89.99");
    assert_eq!(vars["colors"], "Forest Green, Black");
    assert_eq!(vars["materials_bullets"], "• Ripstop nylon\n• Aluminum\n• Mesh");
    assert_eq!(vars["category_path"], "Bags > Backpacks");
    assert_eq!(vars["description"], "A 30 liter pack for day hikes.");
}

#[test]
fn test_description_prompt_sections() {
    let style = StyleOptions {
        keywords: vec!["durable".to_string()],
        ..StyleOptions::with_tone("playful").length(ContentLength::Short)
    };
    let prompt = description_prompt(&backpack(), &style).unwrap();
    assert!(prompt.contains("PRODUCT: Trail Pack 30L\nBRAND: Summit\nPRICE: $89.99\n"));
    assert!(prompt.contains("CATEGORY: Bags > Backpacks\n"));
    assert!(prompt.contains("KEY FEATURES:\n• Waterproof shell\n"));
    assert!(prompt.contains("TONE: playful\n"));
    assert!(prompt.contains("LENGTH: Concise, approximately 75-100 words"));
    assert!(prompt.contains("TARGET AUDIENCE: general consumers"));
    assert!(prompt.contains("incorporate these keywords: durable"));
}

#[test]
fn test_description_prompt_skips_empty_sections() {
    let record = ProductRecord::from_value(json!({"name": "Mug"})).unwrap();
    let prompt = description_prompt(&record, &StyleOptions::default()).unwrap();
    assert!(!prompt.contains("CATEGORY:"));
    assert!(!prompt.contains("KEY FEATURES"));
    assert!(!prompt.contains("incorporate these keywords"));
    assert!(prompt.contains("TONE: professional"));
    assert!(prompt.contains("LENGTH: Balanced, approximately 150-175 words"));
}

#[test]
fn test_seo_prompt_requests_markers() {
    let prompt = seo_prompt(&backpack()).unwrap();
    assert!(prompt.contains("- Name: Trail Pack 30L"));
    assert!(prompt.contains("Target Keywords: hiking backpack, travel, outdoor gear"));
    assert!(prompt.contains("Title: [your SEO title here]\nDescription: [your meta description here]"));
    assert!(prompt.contains("STRICTLY between 30-70 characters"));
}

#[test]
fn test_email_prompt_prefers_detailed_description() {
    let mut record = backpack();
    record.set("detailed_description", json!("The long story."));
    let prompt = email_prompt(&record, &StyleOptions::default()).unwrap();
    assert!(prompt.contains("PRODUCT DESCRIPTION:\nThe long story.\n"));
    assert!(prompt.contains("TONE: enthusiastic\nLENGTH: medium"));
    assert!(prompt.contains("Subject Line: [your subject line]"));
    assert!(prompt.contains("subject line (40-60 characters)"));
}

#[test]
fn test_social_prompt_lists_only_requested_platforms() {
    let platforms: PlatformSet = [Platform::Twitter, Platform::LinkedIn].into_iter().collect();
    let prompt = social_prompt(&backpack(), &StyleOptions::default(), &platforms).unwrap();
    assert!(prompt.contains("\nTWITTER:\n- Create a concise"));
    assert!(prompt.contains("\nLINKEDIN:\n- Create a professional post"));
    assert!(!prompt.contains("- Create an eye-catching caption"));
    assert!(prompt.contains("- Laptop sleeve\n"));
    assert!(!prompt.contains("- Side pockets"));
    assert!(prompt.contains("Relevant hashtag keywords: hikingbackpack, travel, outdoorgear"));
    assert!(prompt.contains("Overall tone should be: casual and engaging"));
    assert!(prompt.contains("reflect Summit's brand identity"));
}

#[test]
fn test_needed_fields() {
    let record = ProductRecord::from_value(json!({
        "category": "Bags",
        "features": ["a", "b"],
        "materials": [],
        "tags": ["x", "y", "z"]
    }))
    .unwrap();
    assert_eq!(needed_fields(&record, 3), vec!["subcategory", "features", "materials"]);
    assert!(needed_fields(&backpack(), 3).is_empty());
}

#[test]
fn test_missing_fields_prompt_marks_needed() {
    let record = ProductRecord::from_value(json!({
        "name": "Trail Pack",
        "category": "Bags",
        "colors": ["Red"]
    }))
    .unwrap();
    let prompt = missing_fields_prompt(&record, 3).unwrap();
    assert!(prompt.contains("CATEGORY: Bags\n"));
    assert!(prompt.contains("SUBCATEGORY: NEEDED\n"));
    assert!(prompt.contains("FEATURES: NEEDED (at least 4-5 key features)"));
    assert!(prompt.contains("COLORS: Red\n"));
    assert!(prompt.contains("\"tags\": [\"tag1\", \"tag2\", \"tag3\", \"tag4\", \"tag5\"]"));
}

#[test]
fn test_missing_fields_prompt_asks_for_enrichment_when_complete() {
    let prompt = missing_fields_prompt(&backpack(), 3).unwrap();
    assert!(prompt.starts_with("The following product appears to have all the required fields filled."));
    assert!(prompt.contains("{\n\"note\": \"No missing fields detected."));
}

#[test]
fn test_image_prompt_defaults_and_staging() {
    let record = ProductRecord::from_value(json!({
        "name": "Desk Lamp",
        "category": "Electronics"
    }))
    .unwrap();
    let prompt = image_prompt(&record, &ImageStyle::default()).unwrap();
    assert!(prompt.contains("of the Desk Lamp by a premium brand."));
    assert!(prompt.contains("- Color: standard color\n"));
    assert!(!prompt.contains("Made of"));
    assert!(prompt.contains("- Style: realistic product photography"));
    assert!(prompt.ends_with("- Show multiple angles if appropriate, emphasize sleek design"));
}

#[test]
fn test_image_prompt_uses_record_details() {
    let style = ImageStyle {
        background: Some("forest trail".to_string()),
        ..ImageStyle::default()
    };
    let prompt = image_prompt(&backpack(), &style).unwrap();
    assert!(prompt.contains("by Summit."));
    assert!(prompt.contains("- Color: Forest Green\n"));
    assert!(prompt.contains("- Made of: Ripstop nylon, Aluminum\n"));
    assert!(prompt.contains("- Background: forest trail"));
    assert!(prompt.ends_with("suitable for e-commerce"));
}
