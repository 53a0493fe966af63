use clap::Parser;
use survey_split::app::{handle_fatal_error, init_logging, AppConfig};
use survey_split::cli::{execute_command, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let app = AppConfig::new(cli.verbose).with_settings_path(cli.config);
    init_logging(&app);

    if let Err(e) = execute_command(cli.command, &app).await {
        handle_fatal_error(e, app.verbose);
    }
}
