pub mod password_gen;
pub mod session;
pub mod testpass;

use crate::strength;

// Shared strength read-out: meter, numeric score, bucket label.
pub(crate) fn print_strength(password: &str) {
    let score = strength::score(password);
    let label = strength::bucket(score);
    let filled = (score * 10.0).round() as usize;
    println!(
        "Fortaleza: [{}{}] {:.2} ({})",
        "#".repeat(filled),
        "-".repeat(10 - filled),
        score,
        label
    );
}
