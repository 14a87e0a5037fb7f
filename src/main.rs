use anyhow::Context;
use autopremium::catalog::{self, FilterCriteria};
use autopremium::config::AppConfig;
use autopremium::demo::demo_catalog;
use autopremium::models::Listing;
use autopremium::services::Admin;
use autopremium::store::{FileStorage, Store};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "autopremium")]
#[command(about = "Search the AutoPremium car catalog")]
#[command(version)]
struct Cli {
    /// JSON file with filter criteria; defaults apply when omitted
    criteria: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚗 AutoPremium - Catalog Search");
    info!("===============================");

    let config = AppConfig::from_env();

    // Open the store and seed the administrator on first run
    let storage = FileStorage::open(&config.data_dir)?;
    let data_dir = storage.dir().to_path_buf();
    let store = Store::new(storage);
    store.initialize()?;
    let overview = Admin::new(&store).overview()?;
    info!(
        "Store at {}: {} users, {} announcements, {} pending reports",
        data_dir.display(),
        overview.total_users,
        overview.total_announcements,
        overview.pending_reports
    );

    let listings: Vec<Listing> = match &config.catalog_path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read catalog {}", path.display()))?;
            serde_json::from_str(&raw).context("Failed to parse catalog")?
        }
        None => demo_catalog(),
    };

    let criteria: FilterCriteria = match &cli.criteria {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read criteria {}", path.display()))?;
            serde_json::from_str(&raw).context("Failed to parse criteria")?
        }
        None => FilterCriteria::default(),
    };

    let hits = catalog::search(&listings, &criteria);

    // Display results
    info!("✅ {} of {} vehicles match\n", hits.len(), listings.len());

    for (i, hit) in hits.iter().enumerate() {
        let car = &hit.listing;
        println!("{}. {} ({} €)", i + 1, car.name, car.price);
        println!("   {} · {} · {} km", car.year, car.brand.name, car.mileage_km);
        if let Some(location) = &car.location {
            match hit.distance_km {
                Some(d) => println!("   {} ({} km away)", location, d),
                None => println!("   {}", location),
            }
        }
        println!("   ID: {}", car.id);
        println!();
    }

    let json = serde_json::to_string_pretty(&hits)?;
    tokio::fs::write(&config.output_path, json).await?;
    info!("💾 Saved results to {}", config.output_path.display());

    Ok(())
}
