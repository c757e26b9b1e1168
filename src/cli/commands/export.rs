use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::visit_log::VisitLog;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        region,
        force,
        password,
    } = cmd
    {
        super::ensure_admin(cfg, password)?;

        let log = VisitLog::new(&cfg.visit_log);
        ExportLogic::export(&log, format.clone(), file, range, region, *force)?;
    }

    Ok(())
}
