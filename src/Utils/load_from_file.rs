use crate::Balancer::balancer::balance_equation_with_style;
use crate::Balancer::error::BalanceError;
use crate::Balancer::formatter::OutputStyle;
use log::{error, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// header lines that open the section with equations
const HEADERS: [&str; 2] = ["EQUATIONS", "REACTIONS"];

// header is a line of capitals and underscores without '='
fn is_header(line: &str) -> bool {
    !line.is_empty()
        && !line.contains('=')
        && line
            .chars()
            .all(|c| c.is_uppercase() || c == '_' || c == ' ')
}

/// Reads equations from a text file, one per line.
/// If the file contains an "EQUATIONS" or "REACTIONS" header only the lines after it
/// (up to the next header) are taken, otherwise the whole file.
/// Blank lines and lines starting with '#' are skipped.
pub fn load_equations_from_file(file_name: &str) -> Result<Vec<String>, String> {
    let path = Path::new(file_name);
    if !path.exists() {
        return Err(format!("File '{}' does not exist", file_name));
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return Err(format!("Failed to open file '{}': {}", file_name, e)),
    };

    let reader = BufReader::new(file);
    let lines: Vec<String> = reader.lines().map_while(Result::ok).collect();

    let start_index = lines
        .iter()
        .position(|line| HEADERS.contains(&line.trim().to_uppercase().as_str()))
        .map(|i| i + 1);
    let (start_index, end_index) = match start_index {
        Some(start) => {
            let end = lines[start..]
                .iter()
                .position(|line| is_header(line.trim()))
                .map_or(lines.len(), |offset| start + offset);
            (start, end)
        }
        None => (0, lines.len()),
    };

    let equations: Vec<String> = lines[start_index..end_index]
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_string())
        .collect();
    if equations.is_empty() {
        warn!("No equations found in file '{}'", file_name);
    }
    info!("Loaded {} equations from file '{}'", equations.len(), file_name);
    Ok(equations)
}

/// balances every equation of the file; a failure of one equation does not stop the others
pub fn balance_equations_from_file(
    file_name: &str,
    style: &OutputStyle,
) -> Result<Vec<(String, Result<String, BalanceError>)>, String> {
    let equations = load_equations_from_file(file_name)?;
    let results = equations
        .into_iter()
        .map(|equation| {
            let result = balance_equation_with_style(&equation, style);
            if let Err(e) = &result {
                error!("{}: {}", equation, e);
            }
            (equation, result)
        })
        .collect();
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_plain_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "# combustion").unwrap();
        writeln!(temp_file, "CH4 + O2 = CO2 + H2O").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "  H2 + O2 = H2O  ").unwrap();
        let equations = load_equations_from_file(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(equations, vec!["CH4 + O2 = CO2 + H2O", "H2 + O2 = H2O"]);
    }

    #[test]
    fn test_load_section_after_header() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Some header text").unwrap();
        writeln!(temp_file, "EQUATIONS").unwrap();
        writeln!(temp_file, "Fe + O2 = Fe2O3").unwrap();
        writeln!(temp_file, "NO = N2 + O2").unwrap();
        writeln!(temp_file, "ANOTHER_HEADER").unwrap();
        writeln!(temp_file, "Some other content").unwrap();
        let equations = load_equations_from_file(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(equations, vec!["Fe + O2 = Fe2O3", "NO = N2 + O2"]);
    }

    #[test]
    fn test_missing_file() {
        let result = load_equations_from_file("no_such_file_with_equations.txt");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("does not exist"));
    }

    #[test]
    fn test_balance_equations_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "REACTIONS").unwrap();
        writeln!(temp_file, "H2 + O2 = H2O").unwrap();
        writeln!(temp_file, "Na = Cl").unwrap();
        writeln!(temp_file, "H2 + = H2O").unwrap();
        let results = balance_equations_from_file(
            temp_file.path().to_str().unwrap(),
            &OutputStyle::compact(),
        )
        .unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].1, Ok("2H2+1O2 = 2H2O".to_string()));
        assert!(matches!(results[1].1, Err(BalanceError::Unbalanceable(_))));
        assert!(matches!(results[2].1, Err(BalanceError::Format(_))));
    }
}
