use anyhow::{Context, Result};

use ascroll_core::AppConfig;

pub fn run(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if !init {
        println!("# {}", path.display());
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    AppConfig::default()
        .save()
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote default config to {}", path.display());

    Ok(())
}
