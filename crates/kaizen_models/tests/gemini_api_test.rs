//! Live Gemini API tests.
//!
//! These hit the real API and are ignored by default. Run with
//! `cargo test -p kaizen_models -- --ignored` with `GEMINI_API_KEY` set.

use kaizen_core::{GenerateRequest, Input, Message, Role};
use kaizen_interface::KaizenDriver;
use kaizen_models::GeminiClient;
use kaizen_models::gemini::DEFAULT_MODEL;

#[tokio::test]
#[ignore = "requires GEMINI_API_KEY and network access"]
async fn live_text_generation() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let client = GeminiClient::new(DEFAULT_MODEL)?;

    let request = GenerateRequest::builder()
        .messages(vec![Message {
            role: Role::User,
            content: vec![Input::Text(
                "Reply with the single word: ready".to_string(),
            )],
        }])
        .temperature(Some(0.0))
        .build()?;

    let response = client.generate(&request).await?;
    assert!(!response.text().is_empty());
    Ok(())
}
