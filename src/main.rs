use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::info;

use zoneglance::config::Config;
use zoneglance::logger;
use zoneglance::service::{HomeState, TimeService};
use zoneglance::storage::{LocalStorage, PairStore};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(path)?;
        return Ok(());
    }

    let config = Config::load()?;
    if let Err(e) = logger::init(&config.logging) {
        eprintln!("⚠️  Logging disabled: {e:#}");
    }

    let storage = Arc::new(open_storage(&config).await?);
    let store: Arc<dyn PairStore> = storage.clone();
    let service = TimeService::new(store, Duration::from_millis(config.ticker.interval_ms));

    match args.first().map(String::as_str) {
        Some("add") => {
            let (Some(from), Some(to)) = (args.get(1), args.get(2)) else {
                eprintln!("Usage: zoneglance add <FROM_ZONE> <TO_ZONE>");
                std::process::exit(2);
            };
            service.add_pair(from, to).await;
            print_state(&service.state());
        }
        Some("rm") => {
            let id: i64 = match args.get(1).map(|a| a.parse()) {
                Some(Ok(id)) => id,
                _ => {
                    eprintln!("Usage: zoneglance rm <ID>");
                    std::process::exit(2);
                }
            };
            service.delete_pair(id).await;
            print_state(&service.state());
        }
        Some("--json") => {
            service.refresh_all().await;
            println!("{}", serde_json::to_string_pretty(&service.state())?);
        }
        None => run_live(&config, &service).await?,
        Some(other) => {
            eprintln!("Unknown command: {other}");
            eprintln!("Usage: zoneglance [add <FROM> <TO> | rm <ID> | --json | --generate-config]");
            std::process::exit(2);
        }
    }

    storage.close().await?;
    Ok(())
}

async fn open_storage(config: &Config) -> Result<LocalStorage> {
    if config.storage.in_memory {
        LocalStorage::new(true).await
    } else if let Some(path) = &config.storage.path {
        LocalStorage::open(path).await
    } else {
        LocalStorage::new(false).await
    }
}

/// Render state snapshots to the terminal until Ctrl-C.
async fn run_live(config: &Config, service: &TimeService) -> Result<()> {
    service.load().await;
    service.refresh_all().await;
    service.start_ticker();
    if config.refresh.auto_refresh_interval_minutes > 0 {
        service.start_auto_refresh(Duration::from_secs(
            config.refresh.auto_refresh_interval_minutes * 60,
        ));
    }

    let mut state_rx = service.subscribe();
    print_live(&service.state());

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = state_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                print_live(&state_rx.borrow().clone());
            }
        }
    }

    info!("shutting down");
    Ok(())
}

fn print_live(state: &HomeState) {
    // Repaint in place
    print!("\x1b[2J\x1b[H");
    print_state(state);
    println!("\nPress Ctrl-C to quit.");
}

fn print_state(state: &HomeState) {
    if let Some(error) = &state.error {
        eprintln!("❌ {error}");
        return;
    }
    if state.pairs.is_empty() {
        println!("No zone pairs yet. Add one with: zoneglance add <FROM_ZONE> <TO_ZONE>");
        return;
    }

    for row in &state.pairs {
        println!("[{}] {} → {}", row.id, row.from_zone, row.to_zone);
        println!("    {}  |  {}", row.from_time, row.to_time);
        println!("    {}", row.diff_text);
        println!("    {}", row.dst_text);
    }
}
