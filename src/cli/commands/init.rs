use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::visit_log::VisitLog;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and configuration file (skipped in test mode)
///  - an empty visit log with the canonical column header
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.data.clone(), cli.test)?;

    let log_path = cli
        .data
        .clone()
        .unwrap_or_else(|| Config::visit_log_file().to_string_lossy().to_string());

    println!("⚙️  Initializing fieldlog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Visit log  : {}", &log_path);

    let log = VisitLog::new(&log_path);
    if log.path().exists() {
        println!("ℹ️  Visit log already exists, leaving it untouched.");
    } else {
        log.create_empty()?;
        println!("✅ Visit log created with the canonical column layout.");
    }

    success("fieldlog initialization completed!");
    Ok(())
}
