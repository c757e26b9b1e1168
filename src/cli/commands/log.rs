use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::audit;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print, password } = cmd {
        if !print {
            return Ok(());
        }

        super::ensure_admin(cfg, password)?;

        let path = audit::audit_file_for(&cfg.visit_log);
        let lines = audit::read_newest_first(&path)?;

        if lines.is_empty() {
            info("Operation log is empty.");
            return Ok(());
        }

        for line in lines {
            println!("{line}");
        }
    }

    Ok(())
}
