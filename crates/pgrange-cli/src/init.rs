use crate::cli::InitArgs;
use std::path::Path;

const TEMPLATE: &str = r#"
version = "1"

[defaults]
type = "int4range" # int4range | numrange

[format]
# Digits after the decimal point for numrange bounds.
float_precision = 6
"#;

pub fn run(args: InitArgs) -> anyhow::Result<String> {
    write_template(&args.config)?;
    Ok(format!("wrote {}", args.config.display()))
}

fn write_template(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("refusing to overwrite existing file: {}", path.display());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("failed to create directory {}: {e}", parent.display())
            })?;
        }
    }

    std::fs::write(path, TEMPLATE.trim_start_matches('\n'))
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFile;

    #[test]
    fn template_is_a_valid_config() {
        let cfg = ConfigFile::from_toml(TEMPLATE).unwrap();
        assert_eq!(cfg, ConfigFile::default());
    }

    #[test]
    fn writes_once() {
        let dir = std::env::temp_dir().join(format!("pgrange-init-{}", std::process::id()));
        let path = dir.join("nested").join("pgrange.toml");
        let _ = std::fs::remove_dir_all(&dir);

        let msg = run(InitArgs {
            config: path.clone(),
        })
        .unwrap();
        assert!(msg.starts_with("wrote "));
        assert!(ConfigFile::load(&path, true).is_ok());

        let err = run(InitArgs {
            config: path.clone(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("refusing to overwrite"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
