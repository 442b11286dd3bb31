use rusqlite::Connection;

use std::error::Error;
use std::sync::{Arc, Mutex};

use taskflow::config::AppConfig;
use taskflow::init_db;

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;

    let connection = Connection::open(&config.database_path)?;
    init_db(&connection)?;
    let connection = Arc::new(Mutex::new(connection));

    log::info!("database ready at {}", config.database_path);

    taskflow::rocket(connection)
        .configure(rocket::Config {
            port: config.port,
            ..rocket::Config::default()
        })
        .launch()
        .await?;

    Ok(())
}
