use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const AUDIT_LOG_FILE: &str = "audit.log";

/// Durable record of every save/discard decision.
///
/// Each line goes to two sinks: the append-only `audit.log` file and the
/// live console (via tracing). Injected into the store and pipeline rather
/// than held as global state so tests can point it at a temp directory and
/// read the lines back.
pub struct AuditLog {
    file: File,
    path: PathBuf,
}

impl AuditLog {
    /// Open (or create) `<log_dir>/audit.log` in append mode.
    pub fn open(log_dir: &Path) -> std::io::Result<Self> {
        fs::create_dir_all(log_dir)?;
        let path = log_dir.join(AUDIT_LOG_FILE);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Emit one timestamped, leveled line to both sinks. A failed file write
    /// is not fatal: the decision itself has already been (or will be)
    /// persisted, only the trail goes silent.
    pub fn info(&self, message: &str) {
        let _ = writeln!(
            &self.file,
            "{} [INFO] {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S"),
            message
        );
        tracing::info!("{}", message);
    }

    /// Run-boundary separator line.
    pub fn banner(&self) {
        self.info(&"=".repeat(50));
    }
}
