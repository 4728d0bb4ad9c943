use std::path::Path;

use anyhow::Result;
use eventdesk_core::settings::Settings;
use owo_colors::OwoColorize;

pub fn run(dir: &Path, toggle: bool) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let mut settings = Settings::load(dir);

    if toggle {
        settings.dark = !settings.dark;
        settings.save(dir)?;
    }

    let label = if settings.dark { "dark" } else { "light" };
    println!("  Theme: {}", label.bold());
    Ok(())
}
