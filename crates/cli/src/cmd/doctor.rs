use dailyprompt_core::config::loader::{default_config_path, ConfigLoader};
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            println!("OK   dprompt doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("vault_root: {}", rc.vault_root.display());
            println!("daily.folder: {}", rc.daily.folder.display());
            println!("daily.format: {}", rc.daily.format);
            if let Some(template) = &rc.daily.template {
                println!("daily.template: {}", template.display());
            }
            println!("prompt.heading: {}", rc.prompt.heading);
            println!("prompt.questions: {}", rc.prompt.questions.len());
            if !rc.vault_root.is_dir() {
                println!("warning: vault_root does not exist");
            }
        }
        Err(e) => {
            println!("FAIL dprompt doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
