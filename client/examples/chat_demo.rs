//! Example walking through the full login + chat flow against a running
//! backend.
//!
//! Run with: cargo run --example chat_demo -- <phone-number>
//!
//! Reads `JIBU_API_URL` from the environment (or `.env`), defaulting to
//! `http://localhost:8000`.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use jibu_client::{ApiClient, AuthService, ChatService};
use jibu_core::{MemoryCredentialStore, SessionListener};
use jibu_shared::utils::phone::{format_phone_for_display, normalize_phone_number};
use jibu_shared::ApiConfig;

struct PrintlnListener;

impl SessionListener for PrintlnListener {
    fn on_session_expired(&self) {
        println!("(session expired, please log in again)");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let phone = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: chat_demo <phone-number>"))?;

    let credentials = Arc::new(MemoryCredentialStore::new());
    let client = Arc::new(ApiClient::new(ApiConfig::from_env(), credentials.clone())?);
    client.add_session_listener(Arc::new(PrintlnListener));

    let auth = AuthService::new(client.clone(), credentials);
    let chats = ChatService::new(client);

    // Step 1: request an OTP
    let receipt = auth.request_otp(&phone).await?;
    println!("{}", receipt.message);

    // Step 2: verify it
    print!("Enter the 6-digit code: ");
    io::stdout().flush()?;
    let mut otp = String::new();
    io::stdin().lock().read_line(&mut otp)?;

    let tokens = auth.verify_otp(&phone, otp.trim()).await?;
    println!(
        "Logged in as {} ({})",
        format_phone_for_display(&normalize_phone_number(&phone)),
        tokens.token_type
    );

    // Step 3: list conversations
    let conversations = chats.conversations().await?;
    println!("\n=== {} conversation(s) ===", conversations.len());
    for conversation in &conversations {
        println!("  [{}] {} - {}", conversation.id, conversation.title, conversation.last_message);
    }

    // Step 4: ask a question in a new conversation
    let message = chats.ask("What can you help me with?", None).await?;
    println!("\nQ: {}", message.question);
    println!("A: {}", message.answer);

    auth.logout();
    Ok(())
}
