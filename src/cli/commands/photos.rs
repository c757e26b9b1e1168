use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::photos::PhotoStore;
use crate::ui::messages::info;

/// List stored site photos, sorted by filename (site id + timestamp).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Photos) {
        let store = PhotoStore::new(cfg.resolve_photo_dir());
        let names = store.list()?;

        if names.is_empty() {
            info("No photos stored.");
            return Ok(());
        }

        println!("📸 Stored photos:");
        for name in names {
            println!("  {name}");
        }
    }

    Ok(())
}
