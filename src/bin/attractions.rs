use roadside::config::Config;
use roadside::constants::{MAX_PICK_COUNT, MIN_PICK_COUNT};
use roadside::report;
use roadside::services::AttractionFinder;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_REPORT_PATH: &str = "map.html";

fn print_help() {
    eprintln!(
        "\
Usage: attractions <ORIGIN> <DESTINATION> [OPTIONS]

Options:
  --n=N                 How many attractions to return (clamped to {}-{})
  --step-km=F           Sampling interval along the route in km
  --radius-km=F         Search radius around each sample in km
  --corridor-km=F       Corridor width before the distance penalty in km
  --out=PATH            HTML report path (default: {})
  --help                Show this help message

Environment:
  GOOGLE_MAPS_API_KEY       Required, used for directions and place search
  GOOGLE_MAPS_BROWSER_KEY   Optional, embeds an interactive map in the report",
        MIN_PICK_COUNT, MAX_PICK_COUNT, DEFAULT_REPORT_PATH
    );
}

fn flag_value<T: std::str::FromStr>(args: &[String], prefix: &str) -> Result<Option<T>, String> {
    match args.iter().find_map(|a| a.strip_prefix(prefix)) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| format!("Invalid value for {}: {}", prefix.trim_end_matches('='), raw)),
        None => Ok(None),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (quiet unless RUST_LOG says otherwise)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roadside=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI args
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();
    let (origin, destination) = match positional.as_slice() {
        [origin, destination] => (origin.as_str(), destination.as_str()),
        _ => {
            print_help();
            return Err("Expected exactly two arguments: <ORIGIN> <DESTINATION>".into());
        }
    };

    let config = Config::from_env().map_err(|e| format!("Config error: {}", e))?;
    let defaults = &config.finder;

    let want = defaults.pick_count(flag_value(&args, "--n=")?);
    let step_km = flag_value(&args, "--step-km=")?.unwrap_or(defaults.step_km);
    let radius_km = flag_value(&args, "--radius-km=")?.unwrap_or(defaults.radius_km);
    let corridor_km = flag_value(&args, "--corridor-km=")?.unwrap_or(defaults.corridor_km);
    let out_path: PathBuf = flag_value(&args, "--out=")?
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH));

    let finder = AttractionFinder::from_config(&config);

    let route = finder.compute_route(origin, destination).await?;
    let picks = finder
        .find_attractions(&route.path, step_km, radius_km, want, corridor_km)
        .await?;

    println!(
        "\nRoute: {} -> {}  (~{} km, ~{} h)",
        route.start_label,
        route.end_label,
        route.total_km.round(),
        route.total_hours
    );
    if picks.is_empty() {
        println!("No attractions found near the route. Try increasing --radius-km or decreasing --step-km.");
    } else {
        for (i, pick) in picks.iter().enumerate() {
            println!(
                "{}. {}  | {} ({} reviews) | {} km off | {}",
                i + 1,
                pick.name,
                report::format_rating(pick.rating),
                pick.reviews,
                pick.distance_from_route_km,
                pick.maps_uri
            );
        }
    }

    let browser_key = env::var("GOOGLE_MAPS_BROWSER_KEY").ok();
    let html = report::render_html(&route, &picks, browser_key.as_deref())?;
    tokio::fs::write(&out_path, html).await?;
    println!(
        "\nWrote {} - open it in your browser to view the route and picks.",
        out_path.display()
    );

    Ok(())
}
