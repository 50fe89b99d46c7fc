//  ____  ____                ____
// |  _ \|  _ \ __ _ ___ ___ / ___| ___ _ __
// | |_) | |_) / _` / __/ __| |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \ |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/\____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Application state and command handlers

use std::path::PathBuf;
use chrono::{DateTime, Local};

use crate::history::History;
use crate::passgen::{self, CharSelection, GenError};
use crate::strength::{self, StrengthLabel};

/// Session state a UI layer binds to. The UI owns widgets and shortcuts; this
/// struct owns the selection, the length, the history and the current
/// password, mutated only through the `on_*` handlers.
pub struct AppState {
    pub selection: CharSelection,
    pub length: usize,
    pub history: History,
    current: Option<String>,
    strength: f64,
    initial_load: bool,
}

impl AppState {
    pub fn new(selection: CharSelection, length: usize) -> Self {
        Self {
            selection,
            length,
            history: History::new(),
            current: None,
            strength: 0.0,
            initial_load: true,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn strength_label(&self) -> StrengthLabel {
        strength::bucket(self.strength)
    }

    /// Generate a new password and make it current. The very first
    /// generation after construction is the initial display and stays out of
    /// the history; every later one is recorded. On failure the current
    /// password is cleared and strength reads as zero.
    pub fn on_generate(&mut self) -> Result<&str, GenError> {
        match passgen::generate(&self.selection, self.length) {
            Ok(password) => {
                self.strength = strength::score(&password);
                if self.initial_load {
                    // La contraseña inicial no entra al historial
                    self.initial_load = false;
                } else {
                    self.history.record(password.clone());
                }
                Ok(self.current.insert(password))
            }
            Err(e) => {
                self.current = None;
                self.strength = 0.0;
                Err(e)
            }
        }
    }

    /// Resolve the text a copy request refers to: the current password, or a
    /// history entry by zero-based index. The clipboard write itself belongs
    /// to the UI layer.
    pub fn on_copy(&self, index: Option<usize>) -> Result<&str, String> {
        match index {
            Some(i) => self
                .history
                .snapshot()
                .get(i)
                .map(String::as_str)
                .ok_or_else(|| format!("No hay entrada {} en el historial", i + 1)),
            None => self
                .current()
                .ok_or_else(|| "No hay contraseña para copiar".to_string()),
        }
    }

    /// Save the history to a timestamped file in the working directory.
    pub fn on_save(&self, now: DateTime<Local>) -> Result<PathBuf, String> {
        if self.history.is_empty() {
            return Err("Historial vacío, nada que guardar".to_string());
        }
        self.history
            .save(now)
            .map_err(|e| format!("Error al escribir en el archivo: {}", e))
    }
}
