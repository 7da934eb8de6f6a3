use super::*;
use crate::error::ProdgenError;
use crate::extract::FieldValue;
use crate::product::Platform;
use crate::test_support::{ScriptedGenerator, complete_backpack, partial_backpack};
use serde_json::json;

fn service(generator: ScriptedGenerator) -> ContentService<ScriptedGenerator> {
    ContentService::new(generator, ExtractionConfig::default())
}

const MISSING_RESPONSE: &str = "```json\n{\"category\": \"Bags\", \"subcategory\": \"Backpacks\", \
    \"features\": [\"Waterproof\", \"Light\", \"Roomy\"], \"materials\": \"nylon, mesh\", \
    \"tags\": [\"hiking\", \"travel\", \"outdoor\"]}\n```";
const DESCRIPTION_RESPONSE: &str = "  Meet the Trail Pack, built for long days.  ";
const SEO_RESPONSE: &str = "Title: Trail Pack 30L Waterproof Hiking Backpack\nDescription: Stay dry on every trail.";
const EMAIL_RESPONSE: &str = "Subject Line: Your next hike starts here\n\nHi there,\nMeet the pack.";
const SOCIAL_RESPONSE: &str = "INSTAGRAM:\nGram post\n\nFACEBOOK:\nFace post\n\nTWITTER:\nTweet";

#[test]
fn test_description_uses_copywriter_role() {
    let svc = service(ScriptedGenerator::new([DESCRIPTION_RESPONSE]));
    let description = svc
        .generate_product_description(&partial_backpack(), &StyleOptions::default())
        .unwrap();
    assert_eq!(
        description.detailed_description,
        "Meet the Trail Pack, built for long days."
    );

    let requests = svc.generator().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].system, system::COPYWRITER);
    assert!(requests[0].prompt.contains("PRODUCT: Trail Pack 30L"));
}

#[test]
fn test_seo_and_email_are_extracted() {
    let svc = service(ScriptedGenerator::new([SEO_RESPONSE, EMAIL_RESPONSE]));
    let seo = svc.generate_seo_content(&partial_backpack()).unwrap();
    assert_eq!(seo.title, "Trail Pack 30L Waterproof Hiking Backpack");

    let email = svc
        .generate_marketing_email(&partial_backpack(), &StyleOptions::default())
        .unwrap();
    assert_eq!(email.subject, "Your next hike starts here");
    assert_eq!(email.body, "Hi there,\nMeet the pack.");

    let roles: Vec<String> = svc.generator().requests().into_iter().map(|r| r.system).collect();
    assert_eq!(roles, vec![system::SEO_EXPERT, system::EMAIL_SPECIALIST]);
}

#[test]
fn test_social_posts_for_requested_platforms() {
    let svc = service(ScriptedGenerator::new([SOCIAL_RESPONSE]));
    let platforms: PlatformSet = [Platform::Twitter].into_iter().collect();
    let posts = svc
        .generate_social_media_content(&partial_backpack(), &StyleOptions::default(), &platforms)
        .unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[&Platform::Twitter], "Tweet");
}

#[test]
fn test_missing_fields_respect_record() {
    let svc = service(ScriptedGenerator::new([MISSING_RESPONSE]));
    let mut record = partial_backpack();
    record.set("category", json!("Luggage"));
    let fields = svc.generate_missing_fields(&record).unwrap();
    assert!(!fields.contains("category"));
    assert_eq!(fields.get_text("subcategory"), Some("Backpacks"));
    assert_eq!(
        fields.get("materials"),
        Some(&FieldValue::list(["nylon", "mesh"]))
    );
}

#[test]
fn test_product_image() {
    let svc = service(ScriptedGenerator::default().with_image("https://img.example/pack.png"));
    let image = svc
        .generate_product_image(&partial_backpack(), &ImageStyle::default())
        .unwrap();
    assert_eq!(image.image_url, "https://img.example/pack.png");
    assert_eq!(svc.generator().image_prompts(), vec![image.prompt.clone()]);
    assert!(image.prompt.contains("Trail Pack 30L by Summit"));
}

#[test]
fn test_complete_product_fills_everything() {
    let svc = service(ScriptedGenerator::new([
        MISSING_RESPONSE,
        DESCRIPTION_RESPONSE,
        SEO_RESPONSE,
        EMAIL_RESPONSE,
        SOCIAL_RESPONSE,
    ]));
    let product = svc.complete_product(&partial_backpack()).unwrap();

    assert_eq!(product.text("name"), "Trail Pack 30L");
    assert_eq!(product.text("category"), "Bags");
    assert_eq!(product.list("materials"), vec!["nylon", "mesh"]);
    assert_eq!(
        product.text("detailed_description"),
        "Meet the Trail Pack, built for long days."
    );
    assert_eq!(product.text("seo_description"), "Stay dry on every trail.");
    assert_eq!(
        product.get("marketing_copy"),
        Some(&json!({
            "email": {"subject": "Your next hike starts here", "body": "Hi there,\nMeet the pack."},
            "social_media": {"instagram": "Gram post", "facebook": "Face post", "twitter": "Tweet"}
        }))
    );

    let requests = svc.generator().requests();
    assert_eq!(requests[0].system, system::PRODUCT_DATA_SPECIALIST);
    // Later prompts see the generated fields.
    assert!(requests[1].prompt.contains("CATEGORY: Bags > Backpacks"));
    assert!(requests[4].prompt.contains("Overall tone should be: casual"));
}

#[test]
fn test_complete_product_keeps_present_values() {
    let mut record = complete_backpack();
    record.set("detailed_description", json!("Existing copy."));
    record.set("seo_title", json!("Existing title"));
    record.set_at(&["marketing_copy", "email"], json!({"subject": "Hi", "body": "Old"}));

    let svc = service(ScriptedGenerator::new([SEO_RESPONSE, SOCIAL_RESPONSE]));
    let product = svc.complete_product(&record).unwrap();

    assert_eq!(product.text("detailed_description"), "Existing copy.");
    assert_eq!(product.text("seo_title"), "Existing title");
    assert_eq!(product.text("seo_description"), "Stay dry on every trail.");
    assert!(product.is_truthy_at(&["marketing_copy", "social_media", "twitter"]));
    assert_eq!(
        product.get("marketing_copy").and_then(|m| m.get("email")),
        Some(&json!({"subject": "Hi", "body": "Old"}))
    );

    let roles: Vec<String> = svc.generator().requests().into_iter().map(|r| r.system).collect();
    assert_eq!(roles, vec![system::SEO_EXPERT, system::SOCIAL_MEDIA_MANAGER]);
}

#[test]
fn test_backend_failure_propagates() {
    let svc = service(ScriptedGenerator::default());
    let err = svc.generate_seo_content(&partial_backpack()).unwrap_err();
    assert!(matches!(err, ProdgenError::GenerationError(_)));
}
