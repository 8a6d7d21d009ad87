use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use immo_scout::controller::{detail_location, PROPERTIES_PATH};
use immo_scout::models::KNOWN_CITIES;
use immo_scout::pages::{load_admin_overview, load_detail, load_home, DetailState, Gallery};
use immo_scout::{
    view, ApiClient, Config, FilterField, ListingQueryController, ListingSource, MemoryHistory,
    Navigator, RenderState,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "immo-scout", version, about = "Browse real-estate listings from the listing API")]
struct Cli {
    /// Listing API base URL (overrides IMMO_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Filtered listing page
    List {
        /// Location query to start from, e.g. "?city=Paris&transaction_type=vente"
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, help = format!("City filter (e.g. {})", KNOWN_CITIES.join(", ")))]
        city: Option<String>,
        /// vente or location
        #[arg(long)]
        transaction: Option<String>,
        /// appartement, maison, studio or villa
        #[arg(long)]
        property_type: Option<String>,
        #[arg(long)]
        zip: Option<String>,
        /// Clear every filter after hydrating
        #[arg(long)]
        reset: bool,
        /// Retry a failed fetch up to N times with the same filters
        #[arg(long, default_value_t = 0)]
        retries: u32,
        /// Write the listings to a JSON file
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Single listing with its image gallery
    Show {
        id: u64,
        /// Gallery image to display (0-based)
        #[arg(long, default_value_t = 0)]
        image: usize,
    },
    /// Latest listings preview
    Home,
    /// Listing totals
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    let client = Arc::new(ApiClient::new(&config).context("Failed to create listing API client")?);
    info!("🏠 Immo Scout - {}", client.base_url());

    match cli.command {
        Command::List {
            query,
            city,
            transaction,
            property_type,
            zip,
            reset,
            retries,
            save,
        } => {
            let location = format!("{}{}", PROPERTIES_PATH, normalize_query(&query));
            let mut page =
                ListingQueryController::new(client, MemoryHistory::new(location), config.listing_page_size);
            page.mount();

            let edits = [
                (FilterField::City, city),
                (FilterField::TransactionType, transaction),
                (FilterField::PropertyType, property_type),
                (FilterField::ZipCode, zip),
            ];
            for (field, value) in edits {
                if let Some(value) = value {
                    page.set_filter(field, &value);
                }
            }
            if reset {
                page.reset_filters();
            }

            println!("URL: {}\n", page.navigator().current());

            let mut state = page.settled().await;
            for attempt in 1..=retries {
                if !matches!(state, RenderState::Error(_)) {
                    break;
                }
                info!("Retrying listing fetch ({}/{})", attempt, retries);
                page.retry();
                state = page.settled().await;
            }
            print!("{}", view::render_listing_state(&state));

            if let (Some(path), RenderState::Success { items, .. }) = (save, &state) {
                let json = serde_json::to_string_pretty(items)?;
                tokio::fs::write(&path, json)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("💾 Saved {} listings to {}", items.len(), path.display());
            }
        }
        Command::Show { id, image } => {
            let mut history = MemoryHistory::default();
            history.push(detail_location(id));
            info!("Loading {}", history.current());
            let state = load_detail(client.as_ref(), id).await;
            let gallery = match &state {
                DetailState::Loaded(listing) => {
                    let mut gallery = Gallery::for_listing(listing);
                    gallery.select(image);
                    Some(gallery)
                }
                _ => None,
            };
            print!("{}", view::render_detail(&state, gallery.as_ref()));
        }
        Command::Home => {
            let state = load_home(client.as_ref(), config.home_page_size).await;
            print!("{}", view::render_listing_state(&state));
        }
        Command::Stats => {
            let overview = load_admin_overview(client.as_ref(), config.admin_page_size)
                .await
                .with_context(|| format!("Failed to load listings from {}", client.source_name()))?;
            print!("{}", view::render_admin(&overview));
        }
    }

    Ok(())
}

fn normalize_query(query: &str) -> String {
    let query = query.trim().trim_start_matches('?');
    if query.is_empty() {
        String::new()
    } else {
        format!("?{}", query)
    }
}
