use crate::cli::commands::{open_store, parse_kind, report_warnings};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        kind,
        format,
        file,
        force,
    } = cmd
    {
        let kind = parse_kind(kind)?;
        let mut store = open_store(cfg)?;
        ExportLogic::export(&mut store, kind, *format, file, *force)?;
        report_warnings(&mut store);
    }
    Ok(())
}
