use reqwest::Client;
use serde_json::json;

/// Smoke test against a running server: `cargo run -p chat_relay --example client [base_url]`.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:3000".to_string());
    let site_url = "https://demo.example";

    println!("🔍 Testing chat relay at {}", base_url);

    println!("\n📋 Health Check:");
    let health_response = client.get(format!("{}/health", base_url)).send().await?;
    println!("Status: {}", health_response.status());
    let health_json: serde_json::Value = health_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&health_json)?);

    println!("\n💬 Chat:");
    let chat_payload = json!({
        "question": "What are your opening hours?",
        "site_url": site_url,
        "site_text": "Demo Cafe. Open Monday to Friday, 8:00 to 18:00.",
        "knowledge_text": "We serve coffee, tea and pastries.",
        "language": "en"
    });
    let chat_response = client
        .post(format!("{}/chat", base_url))
        .json(&chat_payload)
        .send()
        .await?;
    println!("Status: {}", chat_response.status());
    let chat_json: serde_json::Value = chat_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&chat_json)?);

    println!("\n🗑️  Delete price list:");
    let delete_response = client
        .post(format!("{}/delete-pricelist", base_url))
        .form(&[("site_url", site_url)])
        .send()
        .await?;
    let delete_json: serde_json::Value = delete_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&delete_json)?);

    println!("\n✅ Client test completed!");
    Ok(())
}
