use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ReportLogic, VisitFilter, VisitSummary};
use crate::errors::AppResult;
use crate::models::visit::VisitRecord;
use crate::store::visit_log::VisitLog;
use crate::ui::messages::info;
use crate::utils::date::parse_period;
use crate::utils::table::Table;
use crate::utils::time::format_dwell;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        now,
        name,
        region,
        site,
        open_only,
        summary,
    } = cmd
    {
        let bounds = if *now {
            let today = crate::utils::date::today();
            Some((today, today))
        } else {
            match period {
                Some(p) => Some(parse_period(p)?),
                None => None,
            }
        };

        let filter = VisitFilter {
            bounds,
            name: name.clone(),
            region: region.clone(),
            site: site.clone(),
            open_only: *open_only,
        };

        let records = VisitLog::new(&cfg.visit_log).load()?;
        let visits = ReportLogic::filter(&records, &filter);

        if visits.is_empty() {
            info("No visits found for the selected filters.");
            return Ok(());
        }

        println!("📅 Site visits:");
        print!("{}", render_table(&visits, &cfg.separator_char));

        if *summary {
            print_summary(&ReportLogic::summary(&visits));
        }
    }

    Ok(())
}

fn render_table(visits: &[VisitRecord], separator_char: &str) -> String {
    let mut table = Table::new(&[
        "Site ID", "Name", "Ticket", "Region", "Opened", "Closed", "Dwell", "Status",
    ]);

    for visit in visits {
        table.add_row(vec![
            visit.site_id.clone(),
            visit.name.clone(),
            visit.ticket.clone(),
            if visit.region.is_empty() {
                "-".to_string()
            } else {
                visit.region.clone()
            },
            visit.opened_at.format("%Y-%m-%d %H:%M").to_string(),
            match visit.closed_at {
                Some(closed) => closed.format("%Y-%m-%d %H:%M").to_string(),
                None => "-".to_string(),
            },
            match visit.dwell() {
                Some(dwell) => format_dwell(dwell),
                None => "-".to_string(),
            },
            visit.status.as_cell().to_string(),
        ]);
    }

    table.render(separator_char)
}

fn print_summary(summary: &VisitSummary) {
    println!();
    println!(
        "Total {} | Open {} | Closed {} | Avg dwell {}",
        summary.total,
        summary.open,
        summary.closed,
        crate::utils::time::format_minutes(summary.average_dwell_minutes)
    );

    for (region, count) in &summary.by_region {
        println!("  {region}: {count}");
    }
}
