use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn launch(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        let yaml = serde_yaml::to_string(cfg)
            .map_err(|e| AppError::Config(format!("cannot serialize config: {e}")))?;
        info(format!("Current configuration ({}):", path.display()));
        println!("{yaml}");
    }

    if *edit_config {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist yet, run `rstringlog init` first",
                path.display()
            )));
        }

        let fallback = default_editor();
        let mut candidates = vec![editor.clone().unwrap_or_else(|| fallback.clone())];
        if candidates[0] != fallback {
            candidates.push(fallback);
        }

        for (i, ed) in candidates.iter().enumerate() {
            if launch(ed, &path) {
                success(format!("Configuration file edited with '{ed}'"));
                return Ok(());
            }
            if let Some(next) = candidates.get(i + 1) {
                warning(format!("Editor '{ed}' not available, falling back to '{next}'"));
            }
        }

        return Err(AppError::Config(format!(
            "could not launch an editor for {}",
            path.display()
        )));
    }

    Ok(())
}
