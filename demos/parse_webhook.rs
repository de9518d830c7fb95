//! Decode a webhook event read from stdin.
//!
//! ```sh
//! echo '{"resource":"call","event":"call.ended","data":{"id":1}}' \
//!     | cargo run --example parse_webhook
//! ```

use std::io::Read;

use aircall_rs::webhook::InboundWebhook;
use aircall_rs::{Error, Result};

fn main() -> Result<()> {
    let mut body = Vec::new();
    std::io::stdin().read_to_end(&mut body)?;

    let event = InboundWebhook::from_slice(&body)?;
    println!("{} / {}", event.resource, event.event);

    let summary = match event.resource.as_str() {
        "call" => format!("{:?}", event.call()?),
        "user" => format!("{:?}", event.user()?),
        "number" => format!("{:?}", event.number()?),
        "contact" => format!("{:?}", event.contact()?),
        "message" => format!("{:?}", event.message()?),
        "integration" => format!("{:?}", event.integration()?),
        "conversation_intelligence" => match event.sentiment() {
            Ok(sentiment) => format!("{sentiment:?}"),
            Err(Error::EventMismatch { .. }) => format!("{:?}", event.transcription()?),
            Err(err) => return Err(err),
        },
        other => format!("unhandled resource {other}"),
    };

    println!("{summary}");
    Ok(())
}
