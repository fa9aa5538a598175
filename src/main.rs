//! Search Client CLI
//!
//! Runs a single search against a live backend and prints the result and
//! the client's metrics as JSON.
//!
//! # Usage
//! ```text
//! search_client pets [key=value ...]
//! search_client messages <query>
//! search_client faceted <query>
//! search_client suggest <query> [pets|messages|all]
//! ```

use anyhow::{bail, Context};
use serde_json::{Map, Value};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use search_client::models::{
    AdvancedSearchOptions, MessageSearchOptions, PetSearchFilters, SearchOptions, SuggestionScope,
};
use search_client::{SearchClient, SearchConfig};

/// Main entry point for the search client CLI.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the search client (starts the expiry sweep)
/// 4. Run the requested search and print the JSON result
/// 5. Stop the sweep
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "search_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        bail!("usage: search_client <pets|messages|faceted|suggest> [args...]");
    };

    let config = SearchConfig::from_env();
    info!(
        "Configuration loaded: api_url={}, max_cache_size={}, cache_ttl={:?}, debug={}",
        config.api_url, config.max_cache_size, config.cache_ttl, config.debug
    );

    let client = SearchClient::new(config).context("failed to build search client")?;

    let result = match command.as_str() {
        "pets" => {
            let filters = parse_pet_filters(rest)?;
            serde_json::to_value(client.search_pets(&filters, SearchOptions::default()).await)?
        }
        "messages" => {
            let options = MessageSearchOptions::new(rest.join(" "));
            serde_json::to_value(
                client
                    .search_messages(&options, SearchOptions::default())
                    .await,
            )?
        }
        "faceted" => serde_json::to_value(
            client
                .faceted_search(&rest.join(" "), &AdvancedSearchOptions::default())
                .await,
        )?,
        "suggest" => {
            let Some(query) = rest.first() else {
                bail!("usage: search_client suggest <query> [pets|messages|all]");
            };
            let scope = match rest.get(1) {
                Some(raw) => raw.parse::<SuggestionScope>().map_err(anyhow::Error::msg)?,
                None => SuggestionScope::default(),
            };
            serde_json::to_value(client.get_search_suggestions(query, scope).await)?
        }
        other => bail!("unknown command '{}'", other),
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    println!(
        "{}",
        serde_json::to_string_pretty(&client.get_search_metrics().await)?
    );

    client.shutdown();
    info!("Search client shutdown complete");
    Ok(())
}

/// Parses `key=value` pairs into pet filters; `page` and `limit` become numbers.
fn parse_pet_filters(pairs: &[String]) -> anyhow::Result<PetSearchFilters> {
    let mut fields = Map::new();

    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("expected key=value, got '{}'", pair);
        };
        let value = match key {
            "page" | "limit" => Value::from(
                value
                    .parse::<u32>()
                    .with_context(|| format!("{} must be a number", key))?,
            ),
            _ => Value::from(value),
        };
        fields.insert(key.to_string(), value);
    }

    serde_json::from_value(Value::Object(fields)).context("invalid pet filters")
}
