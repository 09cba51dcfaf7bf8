use std::env;
use std::path::Path;
use std::process::ExitCode;

use pushkind_taxonomy::Taxonomy;
use pushkind_taxonomy::config;
use pushkind_taxonomy::repository::InMemoryRepository;

/// Prints the taxonomy snapshot, or the resolved selection for the category
/// code given as the first argument, as JSON.
fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
    let settings = match config::load(Path::new("config"), &app_env) {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Failed to load configuration for {app_env}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let taxonomy = Taxonomy::new(InMemoryRepository::seeded(), &settings);

    let output = match env::args().nth(1) {
        Some(code) => taxonomy
            .resolve_selection_by_category_code(&code)
            .map_err(|err| err.to_string())
            .and_then(|selection| {
                serde_json::to_string_pretty(&selection).map_err(|err| err.to_string())
            }),
        None => taxonomy
            .get_snapshot()
            .map_err(|err| err.to_string())
            .and_then(|snapshot| {
                serde_json::to_string_pretty(&snapshot).map_err(|err| err.to_string())
            }),
    };

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
