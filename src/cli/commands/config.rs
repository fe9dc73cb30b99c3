use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        if *path {
            println!("{}", Config::config_file().display());
        }

        // bare `config` behaves like `config --print`
        if *print_config || !*path {
            println!("{}", cfg.to_yaml()?);
        }
    }
    Ok(())
}
