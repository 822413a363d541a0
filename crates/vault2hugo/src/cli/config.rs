//! CLI handler for `config` subcommands.

use vault2hugo_core::config::Config;

use super::ConfigCommands;

/// Dispatch config sub-commands.
pub fn handle_config_command(command: ConfigCommands) {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::SetImageDir { directory } => set_image_dir(directory),
    }
}

fn show() {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    if let Some(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
    println!("image_directory = {}", config.image_directory);
}

fn set_image_dir(directory: String) {
    let mut config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    config.image_directory = directory;
    match config.save() {
        Ok(()) => println!("Image directory set to {}", config.image_directory),
        Err(e) => eprintln!("Error: {e}"),
    }
}
