//! List recent calls and stream every user of the company.
//!
//! ```sh
//! AIRCALL_API_ID=... AIRCALL_API_TOKEN=... RUST_LOG=aircall_rs=debug \
//!     cargo run --example list_calls
//! ```

use std::env;

use futures_util::StreamExt;
use tracing_subscriber::EnvFilter;

use aircall_rs::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (Ok(api_id), Ok(api_token)) = (env::var("AIRCALL_API_ID"), env::var("AIRCALL_API_TOKEN"))
    else {
        eprintln!("AIRCALL_API_ID and AIRCALL_API_TOKEN must be set");
        return Ok(());
    };

    let client = AircallClient::new()?;
    client.authenticate_basic(api_id, api_token);

    let company = client.company().get().await?;
    println!(
        "{} ({} users, {} numbers)",
        company.name.as_deref().unwrap_or("?"),
        company.users_count.unwrap_or_default(),
        company.numbers_count.unwrap_or_default()
    );

    let query = ListCallsQuery::new().order("desc").paginate(1, 10);
    let calls = client.calls().list(Some(&query)).await?;
    for call in &calls.calls {
        println!(
            "call {:>10} {:<8} {:<8} {:>4}s",
            call.id.unwrap_or_default(),
            call.direction.as_deref().unwrap_or("-"),
            call.status.as_deref().unwrap_or("-"),
            call.duration.unwrap_or_default()
        );
    }

    let mut users = client.users().list_stream(None);
    while let Some(user) = users.next().await {
        let user = user?;
        println!(
            "user {:>10} {}",
            user.id.unwrap_or_default(),
            user.name.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
