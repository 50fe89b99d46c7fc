//  ____  ____                ____
// |  _ \|  _ \ __ _ ___ ___ / ___| ___ _ __
// | |_) | |_) / _` / __/ __| |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \ |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/\____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-01
// Version : 0.1.0
// License : Mulan PSL v2
//
// A secure password generator with session history written in Rust.

use clap::Parser;

use rpassgen::commands::{password_gen, session, testpass};

#[derive(Debug, Parser)]
#[command(name = "rpassgen")]
#[command(about = "A secure password generator with session history", long_about = None)]
enum Cli {
    /// Generate a single random password
    Gen(GenArgs),

    /// Test password strength
    Testpass(TestpassArgs),

    /// Start an interactive generation session
    Session(SessionArgs),
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password (8 to 64)
    #[arg(short, long, default_value_t = 16)]
    length: usize,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude digits
    #[arg(long, default_value_t = false)]
    no_digits: bool,

    /// Include symbols
    #[arg(short = 's', long, default_value_t = false)]
    symbols: bool,

    /// Copy the password to the clipboard
    #[arg(short = 'c', long, default_value_t = false)]
    copy: bool,
}

#[derive(Debug, Parser)]
struct TestpassArgs {
    /// Password to test
    password: String,
}

#[derive(Debug, Parser)]
struct SessionArgs {
    /// Override the configured password length
    #[arg(short, long)]
    length: Option<usize>,

    /// Include symbols
    #[arg(short = 's', long, default_value_t = false)]
    symbols: bool,
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();

    match cli {
        Cli::Gen(args) => password_gen::generate_random(
            args.length,
            args.no_uppercase,
            args.no_lowercase,
            args.no_digits,
            args.symbols,
            args.copy,
        ),
        Cli::Testpass(args) => testpass::test_password(args.password),
        Cli::Session(args) => session::run_session(args.length, args.symbols),
    }
}
