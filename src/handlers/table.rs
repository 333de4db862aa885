use comfy_table::{modifiers, presets, Attribute, Cell, Color, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};

use crate::catalog::Catalog;
use crate::models::{Configuration, Droplet, DropletConfig};

pub const UNUSED_STATUS: &str = "unused";

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

/// Live status of a configuration: the status of a running droplet with the
/// same name in the same region, if there is one.
pub fn live_status<'a>(cfg: &DropletConfig, live: &'a Catalog<Droplet>) -> Option<&'a str> {
    live.get(&cfg.name)
        .filter(|d| d.region.slug == cfg.region)
        .map(|d| d.status.as_str())
}

/// Render every stored configuration, name-sorted, with its live status.
pub fn configurations_table(config: &Configuration, live: &Catalog<Droplet>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Name", "Size", "Image", "Region", "Floating IP", "Volumes", "Status"]);
    for name in config.names() {
        let Some(cfg) = config.droplets.get(name) else {
            continue;
        };
        let status = match live_status(cfg, live) {
            Some(s) => Cell::new(s).fg(Color::Green).add_attribute(Attribute::Bold),
            None => Cell::new(UNUSED_STATUS).fg(Color::Magenta).add_attribute(Attribute::Bold),
        };
        table.add_row(vec![
            Cell::new(&cfg.name),
            Cell::new(&cfg.size),
            Cell::new(&cfg.image),
            Cell::new(&cfg.region),
            Cell::new(&cfg.floating_ip),
            Cell::new(cfg.volumes.join(", ")),
            status,
        ]);
    }
    table
}
