//  ____  ____                ____
// |  _ \|  _ \ __ _ ___ ___ / ___| ___ _ __
// | |_) | |_) / _` / __/ __| |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \ |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/\____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-03
// Version : 0.1.0
// License : Mulan PSL v2
//
// Session password history

use std::io;
use std::path::{Path, PathBuf};
use chrono::{DateTime, Local};

pub const MAX_HISTORY: usize = 10;

/// Bounded in-session history, newest first. Created empty, mutated only by
/// `record`; there is no clear operation.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a password; past `MAX_HISTORY` entries the oldest is dropped.
    pub fn record(&mut self, password: String) {
        self.entries.insert(0, password);
        self.entries.truncate(MAX_HISTORY);
    }

    pub fn snapshot(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the export blob: header line, human-readable timestamp line,
    /// blank line, then one password per line in history order.
    pub fn export_text(&self, now: DateTime<Local>) -> String {
        let mut text = String::from("--- Historial de Contraseñas Generadas ---\n");
        text.push_str(&format!("Fecha y Hora: {}\n\n", now.format("%Y-%m-%d %H:%M:%S")));
        for password in &self.entries {
            text.push_str(password);
            text.push('\n');
        }
        text
    }

    pub fn export_filename(now: DateTime<Local>) -> String {
        format!("password_history_{}.txt", now.format("%Y%m%d_%H%M%S"))
    }

    /// Write the export blob into `dir`. The same instant names the file and
    /// stamps the header.
    pub fn save_in(&self, dir: &Path, now: DateTime<Local>) -> io::Result<PathBuf> {
        let path = dir.join(Self::export_filename(now));
        std::fs::write(&path, self.export_text(now))?;
        Ok(path)
    }

    /// Write the export blob into the process working directory.
    pub fn save(&self, now: DateTime<Local>) -> io::Result<PathBuf> {
        self.save_in(&std::env::current_dir()?, now)
    }
}
