//! locatiezoeker CLI entry point
//!
//! Dutch location search and earthquake feed client

use locatiezoeker::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
