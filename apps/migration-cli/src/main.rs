use app_config::Settings;
use clap::Parser;
use db_infra::{run_migrations_offline, run_migrations_online};
use migration::MigrationCommand;

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Batchcooking API database migration tool")]
struct Args {
    /// Migration command to run
    command: String,

    /// Emit the SQL script to stdout instead of applying changes
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so an offline script on stdout stays clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,db_infra=info,app_config=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let command = match args.command.as_str() {
        "up" => MigrationCommand::Up,
        "down" => MigrationCommand::Down,
        "fresh" => MigrationCommand::Fresh,
        "reset" => MigrationCommand::Reset,
        "refresh" => MigrationCommand::Refresh,
        "status" => MigrationCommand::Status,
        other => {
            eprintln!(
                "Unknown command: {other}. Use: up | down | fresh | reset | refresh | status"
            );
            std::process::exit(2);
        }
    };

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    if args.offline {
        if !matches!(command, MigrationCommand::Up) {
            eprintln!("Offline mode only supports the 'up' command");
            std::process::exit(2);
        }
        let mut stdout = std::io::stdout();
        if let Err(e) = run_migrations_offline(&settings, &mut stdout) {
            eprintln!("Migration failed: {e}");
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = run_migrations_online(&settings, command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
