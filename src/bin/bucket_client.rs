use bucket_list::config::client::ClientCommand;
use bucket_list::core::session::BucketList;
use bucket_list::core::PlaceCatalog;
use bucket_list::utils::{logger, validation::Validate};
use bucket_list::{
    haversine_km, BucketError, ClientCli, Coordinate, HttpPlacesClient, MutationState, Place,
    Result,
};
use clap::Parser;

fn print_places(title: &str, places: &[Place], origin: Option<Coordinate>) {
    println!("{}", title);
    if places.is_empty() {
        println!("  (none)");
        return;
    }

    for place in places {
        match origin {
            Some(origin) => {
                let km = haversine_km(origin, place.coordinate());
                println!("  {:<4} {:<28} {:>8.0} km", place.id, place.title, km);
            }
            None => println!("  {:<4} {}", place.id, place.title),
        }
    }
}

async fn run(cli: &ClientCli) -> Result<()> {
    let client = HttpPlacesClient::new(cli.server_url.clone());
    let origin = cli
        .lat
        .zip(cli.lon)
        .map(|(lat, lon)| Coordinate::new(lat, lon));
    let mut session = BucketList::new(client.clone(), client.clone(), cli.geolocation());

    match &cli.command {
        ClientCommand::Places => {
            session.load_available().await;
            if let Some(message) = session.available_error() {
                return Err(BucketError::LoadError {
                    message: message.to_string(),
                });
            }
            print_places("Available Places", session.available(), origin);
        }
        ClientCommand::List => {
            session.load_selection().await;
            if let Some(message) = session.load_error() {
                return Err(BucketError::LoadError {
                    message: message.to_string(),
                });
            }
            print_places("I'd like to visit ...", session.selection(), origin);
        }
        ClientCommand::Add { id } => {
            let place = client
                .list_places()
                .await?
                .into_iter()
                .find(|place| &place.id == id)
                .ok_or_else(|| BucketError::PlaceNotFound { id: id.clone() })?;

            session.load_selection().await;
            if let Some(message) = session.load_error() {
                return Err(BucketError::LoadError {
                    message: message.to_string(),
                });
            }

            match session.select_place(place).await {
                MutationState::Idle => println!("'{}' is already on your list", id),
                MutationState::RolledBack => {
                    let message = session
                        .update_error()
                        .map(|e| e.message.clone())
                        .unwrap_or_default();
                    return Err(BucketError::UpdateError { message });
                }
                _ => println!("Added '{}'", id),
            }
            print_places("I'd like to visit ...", session.selection(), origin);
        }
        ClientCommand::Remove { id } => {
            session.load_selection().await;
            if let Some(message) = session.load_error() {
                return Err(BucketError::LoadError {
                    message: message.to_string(),
                });
            }

            if session.remove_place(id).await == MutationState::RolledBack {
                let message = session
                    .update_error()
                    .map(|e| e.message.clone())
                    .unwrap_or_default();
                return Err(BucketError::UpdateError { message });
            }
            println!("Removed '{}'", id);
            print_places("I'd like to visit ...", session.selection(), origin);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = ClientCli::parse();

    logger::init_cli_logger(cli.verbose);

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(&cli).await {
        tracing::debug!("Command failed: {:?} (Severity: {:?})", e, e.severity());
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
