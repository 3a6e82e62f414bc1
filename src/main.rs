use dotenv::dotenv;
use quiz_migrate::cli;
use quiz_migrate::logger::system_logger;
use quiz_migrate::migration;
use std::env;

#[tokio::main]
async fn main() {
    // Load environment variables from .env if available
    dotenv().ok();

    // Setup Logging
    if let Err(e) = system_logger() {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }

    cli::print_banner();

    let args: Vec<String> = env::args().collect();
    let password = match cli::parse_args(&args) {
        Ok(password) => password,
        Err(e) => {
            eprintln!("⚠️  {}", e);
            std::process::exit(1);
        }
    };

    match migration::run(&password).await {
        Ok(()) => println!("✅ Migration applied successfully!"),
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}
