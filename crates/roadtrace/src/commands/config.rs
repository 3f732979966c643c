use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            let path = config.save()?;
            println!(
                "{} {key} = {value} ({})",
                "Saved".green().bold(),
                path.display()
            );
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let config = Config::load_or_default();
    let options = config.search_options();

    println!("{}", "Effective configuration".bold());
    println!("  defaults.algorithm      {}", config.algorithm());
    println!("  search.heuristic        {:?}", options.heuristic);
    println!("  search.heuristic_scale  {}", options.heuristic_scale);
    println!("  trace.frame_stride      {}", config.frame_stride());

    match Config::path() {
        Ok(path) if path.exists() => println!("\nLoaded from {}", path.display()),
        Ok(path) => println!(
            "\n{}",
            format!("No config file at {}; showing defaults.", path.display()).dimmed()
        ),
        Err(e) => println!("\n{}", e.to_string().yellow()),
    }
    Ok(())
}
