use std::io::Write;

use console::Style;

/// Print a status line to stderr: `  Interactive Ctrl-D to quit`
///
/// The `label` is right-padded to 12 characters and printed in bold cyan,
/// followed by the `message` in the default terminal colour.
pub fn status_info(label: &str, message: &str) {
    let cyan_bold = Style::new().cyan().bold();
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        cyan_bold.apply_to(label),
    );
}

/// Print a warning-style status line (bold yellow label).
pub fn status_warn(label: &str, message: &str) {
    let yellow_bold = Style::new().yellow().bold();
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        yellow_bold.apply_to(label),
    );
}

/// Print an error-style status line (bold red label).
pub fn status_error(label: &str, message: &str) {
    let red_bold = Style::new().red().bold();
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        red_bold.apply_to(label),
    );
}

/// Render the interactive prompt string.
///
/// The prompt is coloured green when stderr is a terminal and left
/// untouched otherwise, so piped sessions stay free of escape codes.
pub fn styled_prompt(ps1: &str) -> String {
    if console::Term::stderr().features().colors_supported() {
        Style::new().green().apply_to(ps1).to_string()
    } else {
        ps1.to_string()
    }
}
