use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::master::MasterDirectory;
use crate::ui::messages::warning;

/// Look up a site in the master directory, the way the check-in form
/// previews RTO and Region before submitting.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Master { site_id } = cmd {
        let directory = MasterDirectory::new(&cfg.master_data);
        let (rto, region) = directory.lookup(site_id);

        if rto.is_empty() && region.is_empty() {
            warning(format!(
                "Site {site_id} has no master directory entry ({}).",
                directory.path().display()
            ));
            return Ok(());
        }

        println!("Site ID : {site_id}");
        println!("RTO     : {}", if rto.is_empty() { "-" } else { rto.as_str() });
        println!(
            "Region  : {}",
            if region.is_empty() { "-" } else { region.as_str() }
        );
    }

    Ok(())
}
