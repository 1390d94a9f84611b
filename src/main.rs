use dirs::config_dir;
use env_logger::Builder;
use log::LevelFilter;
use repo_bootstrap::cli::Cli;
use std::fs::OpenOptions;
use std::io::Write;

/** Main entry point for repo-bootstrap
 *
 * # Process Flow
 * 1. Initialize logging system with file output
 * 2. Parse command line arguments using Clap
 * 3. Resolve configuration and run every stage in order
 * 4. Print the first error and exit with status 1
 *
 * # Example
 * ```bash
 * repo-bootstrap --owner acme --name widgets --token "$GITHUB_TOKEN" \
 *     --turbo-token "$TURBO_TOKEN" --turbo-team acme
 * ```
 */
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let cli = match Cli::try_parse_from_env() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = cli.execute().await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    log::info!("repo-bootstrap finished");
}

/** Initializes file-based logging
 *
 * # Configuration
 * - Log file location: platform-specific config directory
 * - Log level: Info and above
 * - Output: Append mode to preserve historical logs
 * - If the file cannot be opened, log records are discarded rather than
 *   mixed into the interactive terminal output
 *
 * # Directory Structure
 * - Linux: `~/.config/repo-bootstrap/repo-bootstrap.log`
 * - macOS: `~/Library/Application Support/repo-bootstrap/repo-bootstrap.log`
 * - Windows: `%APPDATA%\repo-bootstrap\repo-bootstrap.log`
 */
fn init_logging() {
    let log_file = get_log_file_path();

    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent).ok(); // Non-fatal if directory creation fails
    }

    let target: Box<dyn Write + Send> = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
    {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(std::io::sink()),
    };

    Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .filter_level(LevelFilter::Info)
        .init();

    log::info!("repo-bootstrap {} started", env!("CARGO_PKG_VERSION"));
}

fn get_log_file_path() -> std::path::PathBuf {
    if let Some(config_dir) = config_dir() {
        config_dir.join("repo-bootstrap").join("repo-bootstrap.log")
    } else {
        std::env::current_dir()
            .map(|p| p.join("repo-bootstrap.log"))
            .unwrap_or_else(|_| "repo-bootstrap.log".into())
    }
}
