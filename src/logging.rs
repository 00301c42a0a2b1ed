use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

const LOG_FILE: &str = "keytally.log";

/// Route log records to a file in `dir`; the terminal is owned by the
/// dashboard while it runs. `RUST_LOG` overrides `default_level`.
pub fn init(dir: &Path, default_level: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create log directory {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unusable_log_dir_reports_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = init(&blocker, "info").unwrap_err();
        assert!(format!("{err:#}").contains("not-a-dir"));
    }
}
