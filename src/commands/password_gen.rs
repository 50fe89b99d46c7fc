use crate::commands::print_strength;
use crate::passgen::{self, CharSelection};
use crate::setclip;

pub fn generate_random(
    length: usize,
    no_uppercase: bool,
    no_lowercase: bool,
    no_digits: bool,
    symbols: bool,
    copy: bool,
) -> Result<(), String> {
    let selection = CharSelection {
        include_uppercase: !no_uppercase,
        include_lowercase: !no_lowercase,
        include_digits: !no_digits,
        include_symbols: symbols,
    };
    let password = passgen::generate(&selection, length)
        .map_err(|e| format!("Failed to generate password: {}", e))?;
    println!("Generated password: {}", password);
    print_strength(&password);
    if copy {
        setclip::copy_to_clipboard(&password)
            .map_err(|e| format!("Failed to copy to clipboard: {}", e))?;
        println!("Password copied to clipboard");
    }
    Ok(())
}
