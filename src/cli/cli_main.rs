use crate::Balancer::balancer::ReactionBalancer;
use crate::Balancer::error::BalanceError;
use crate::settings::Settings;
use log::warn;
use std::io::{self, BufRead, IsTerminal, Write};

/* colors
Cyan (\x1b[36m) - prompt
Green (\x1b[32m) - balanced equation
Red (\x1b[31m) - error message
Reset (\x1b[0m) - Returns to normal color after each colored section
*/
const PROMPT: &str = "Enter a chemical equation (e.g., H2 + O2 = H2O): ";

/// exit code of a successful run
pub const EXIT_OK: i32 = 0;
/// exit code when the equation could not be balanced (malformed or impossible)
pub const EXIT_BALANCE_ERROR: i32 = 1;
/// exit code when standard input could not be read
pub const EXIT_IO_ERROR: i32 = 2;

/// line printed for a balance result; errors start with "Error:" and so can never be
/// mistaken for an equation
pub fn render_result(result: &Result<String, BalanceError>) -> String {
    match result {
        Ok(equation) => format!("Balanced Eq: {}", equation),
        Err(e) => format!("Error: {}", e),
    }
}

/// Prompts once, reads one equation line, prints the result.
/// Returns the process exit code.
pub fn run_prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &Settings,
    colored: bool,
) -> io::Result<i32> {
    let paint = |code: &str, text: &str| -> String {
        if colored {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    };
    write!(output, "{}", paint("36", PROMPT))?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let mut balancer = ReactionBalancer::new(line.trim()).with_style(settings.output_style());
    let result = balancer.balance().map(|balanced| balanced.equation);
    let message = render_result(&result);
    match &result {
        Ok(_) => {
            writeln!(output, "{}", paint("32", &message))?;
            if settings.config.print_report {
                if let Some(stoich) = &balancer.stoich_matrix {
                    stoich.to_table().print(&mut *output)?;
                }
                if let Some(table) = balancer.report_table() {
                    table.print(&mut *output)?;
                }
            }
            Ok(EXIT_OK)
        }
        Err(e) => {
            warn!("failed to balance '{}': {}", line.trim(), e);
            writeln!(output, "{}", paint("31", &message))?;
            Ok(EXIT_BALANCE_ERROR)
        }
    }
}

/// escape codes only go to a terminal, never into a pipe or a file
pub fn colour_enabled<T: IsTerminal>(stream: &T) -> bool {
    stream.is_terminal()
}

/// interactive entry point on stdin/stdout
pub fn run_interactive_prompt(settings: &Settings) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let colored = colour_enabled(&stdout);
    match run_prompt(&mut stdin.lock(), &mut stdout.lock(), settings, colored) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: failed to read input: {}", e);
            EXIT_IO_ERROR
        }
    }
}
