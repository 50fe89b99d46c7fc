use chrono::Local;

use crate::app::AppState;
use crate::commands::print_strength;
use crate::configtool::{prompt_input, UiConfig};
use crate::setclip::{self, SlotTimer};

/// Interactive session. Keeps one `AppState`, shows a first password that
/// stays out of the history, then loops over the menu until the user quits.
pub fn run_session(length: Option<usize>, symbols: bool) -> Result<(), String> {
    let mut config = UiConfig::load().map_err(|e| format!("Failed to load config: {}", e))?;
    if symbols {
        config.default_selection.include_symbols = true;
    }
    let length = length.unwrap_or(config.default_length);

    let mut state = AppState::new(config.default_selection, length);
    let mut timer = SlotTimer::new();

    println!("=== Generador de Contraseñas Seguras ===");
    println!("Tema: {} | Longitud: {}", config.appearance, length);
    show_generated(&mut state);

    loop {
        let input = prompt_input(
            "\n[g]enerar  [c]opiar  [h]istorial  [s] guardar  [t]ema  [q] salir > ",
        )?;
        match input.as_str() {
            "g" => show_generated(&mut state),
            "c" => copy_entry(&state, None, &mut timer, &config),
            "h" => {
                if state.history.is_empty() {
                    println!("(historial vacío)");
                } else {
                    for (i, password) in state.history.snapshot().iter().enumerate() {
                        println!("{:>2}. {}", i + 1, password);
                    }
                }
            }
            "s" => match state.on_save(Local::now()) {
                Ok(path) => println!("💾 Guardado como {}", path.display()),
                Err(e) => println!("❌ {}", e),
            },
            "t" => {
                config.appearance = config.appearance.toggled();
                if let Err(e) = config.save() {
                    eprintln!("Failed to save config: {}", e);
                }
                println!("Tema: {}", config.appearance);
            }
            "q" => break,
            other => {
                if let Ok(n) = other.parse::<usize>() {
                    if n >= 1 {
                        copy_entry(&state, Some(n - 1), &mut timer, &config);
                    } else {
                        println!("Opción no reconocida: {}", other);
                    }
                } else if !other.is_empty() {
                    println!("Opción no reconocida: {}", other);
                }
            }
        }
    }

    timer.cancel();
    Ok(())
}

fn show_generated(state: &mut AppState) {
    match state.on_generate() {
        Ok(password) => {
            println!("\nContraseña: {}", password);
            print_strength(password);
        }
        Err(e) => println!("Error: {}", e),
    }
}

fn copy_entry(state: &AppState, index: Option<usize>, timer: &mut SlotTimer, config: &UiConfig) {
    match state.on_copy(index) {
        Ok(password) => match setclip::copy_to_clipboard(password) {
            Ok(()) => {
                println!("✅ ¡Copiado!");
                // Una nueva copia reemplaza el borrado pendiente anterior
                setclip::clear_after(timer, password.to_string(), config.clipboard_clear_secs);
            }
            Err(e) => println!("❌ Error al copiar al portapapeles: {}", e),
        },
        Err(e) => println!("{}", e),
    }
}
