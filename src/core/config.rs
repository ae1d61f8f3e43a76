use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the config file as stored, or the effective defaults when no
    /// file exists yet.
    pub fn print(path: &Path, cfg: &Config) -> AppResult<()> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
            println!("{}", content);
        } else {
            warning(format!("No config file at {}, showing defaults", path.display()));
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }
        Ok(())
    }

    /// Open the config file in `editor`, falling back to $EDITOR / $VISUAL or
    /// a platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{}'", requested));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                requested, default_editor
            )),
        }

        let status = Command::new(&default_editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(e.to_string()))?;
        if !status.success() {
            return Err(AppError::Config(format!(
                "editor '{}' exited with {}",
                default_editor, status
            )));
        }
        success(format!("Configuration file edited using '{}'", default_editor));
        Ok(())
    }
}
