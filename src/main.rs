use anyhow::Result;
use env_logger::Env;

use skyscrapers_checker::board;
use skyscrapers_checker::config::Config;
use skyscrapers_checker::validation;

fn main() -> Result<()> {
    // Parse configuration from command line and the optional config file
    let config = Config::from_args_and_env()?;
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str())).init();

    let board = board::load_board(&config.board_path)?;
    let result = validation::validate_board(&board, &config.markers);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for diagnostic in &result.diagnostics {
            log::info!(
                "line {}: {:?} - {}",
                diagnostic.line,
                diagnostic.severity,
                diagnostic.message
            );
        }
        println!("{}", result.is_valid());
    }

    Ok(())
}
