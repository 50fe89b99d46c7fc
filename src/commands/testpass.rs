use crate::commands::print_strength;

pub fn test_password(password: String) -> Result<(), String> {
    print_strength(&password);
    println!("Longitud: {}", password.chars().count());

    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| c.is_ascii_punctuation());
    println!("Minúsculas: {}", if has_lower { "Sí" } else { "No" });
    println!("Mayúsculas: {}", if has_upper { "Sí" } else { "No" });
    println!("Números: {}", if has_digit { "Sí" } else { "No" });
    println!("Símbolos: {}", if has_symbol { "Sí" } else { "No" });
    Ok(())
}
