use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                println!("📄 Current configuration ({}):\n", path.display());
            } else {
                info(format!(
                    "{} not found, showing defaults (run `volunteerhub init`).",
                    path.display()
                ));
            }
            println!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
