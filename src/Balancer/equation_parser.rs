/// Splitting of an equation string into ordered lists of reactant and product formulae.
///
/// Whitespace is stripped everywhere, the sides are separated by exactly one `=`,
/// compounds within a side by `+`. A leading integer coefficient on a compound
/// (as in an already balanced equation `2H2 + 1O2 = 2H2O`) is tolerated and dropped with a
/// warning; a zero coefficient is a format error.
use crate::Balancer::error::BalanceError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// ordered reactants and products of an equation, order is preserved to the output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    pub reactants: Vec<String>,
    pub products: Vec<String>,
}

impl Equation {
    /// all compounds, reactants first
    pub fn compounds(&self) -> Vec<String> {
        self.reactants
            .iter()
            .chain(self.products.iter())
            .cloned()
            .collect()
    }
    pub fn reactant_count(&self) -> usize {
        self.reactants.len()
    }
}

pub fn parse_equation(equation: &str) -> Result<Equation, BalanceError> {
    let stripped: String = equation.chars().filter(|c| !c.is_whitespace()).collect();
    let sides: Vec<&str> = stripped.split('=').collect();
    if sides.len() != 2 {
        return Err(BalanceError::Format(format!(
            "expected exactly one '=', found {}",
            sides.len() - 1
        )));
    }
    let reactants = split_side(sides[0], "reactant")?;
    let products = split_side(sides[1], "product")?;
    debug!("reactants: {:?}, products: {:?}", reactants, products);
    Ok(Equation {
        reactants,
        products,
    })
}

fn split_side(side: &str, side_name: &str) -> Result<Vec<String>, BalanceError> {
    let mut compounds = Vec::new();
    for (i, token) in side.split('+').enumerate() {
        if token.is_empty() {
            return Err(BalanceError::Format(format!(
                "empty {} formula at position {}",
                side_name,
                i + 1
            )));
        }
        compounds.push(strip_coefficient(token)?.to_string());
    }
    Ok(compounds)
}

// 2H2O -> H2O, 0H2O is rejected
fn strip_coefficient(token: &str) -> Result<&str, BalanceError> {
    let formula = token.trim_start_matches(|c: char| c.is_ascii_digit());
    if formula.is_empty() {
        return Err(BalanceError::Format(format!(
            "'{}' is a number, not a formula",
            token
        )));
    }
    let coefficient = &token[..token.len() - formula.len()];
    if !coefficient.is_empty() {
        if coefficient.trim_start_matches('0').is_empty() {
            return Err(BalanceError::Format(format!(
                "zero coefficient in '{}'",
                token
            )));
        }
        warn!(
            "given coefficient {} of {} is ignored, coefficients are recomputed",
            coefficient, formula
        );
    }
    Ok(formula)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_equation() {
        let equation = parse_equation("CH4 + O2 = CO2 + H2O").unwrap();
        assert_eq!(equation.reactants, strings(&["CH4", "O2"]));
        assert_eq!(equation.products, strings(&["CO2", "H2O"]));
        assert_eq!(equation.reactant_count(), 2);
        assert_eq!(equation.compounds(), strings(&["CH4", "O2", "CO2", "H2O"]));
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let spaced = parse_equation("  H 2 +O2\t=  H2O ").unwrap();
        let compact = parse_equation("H2+O2=H2O").unwrap();
        assert_eq!(spaced, compact);
    }

    #[test]
    fn test_leading_coefficients_are_dropped() {
        let equation = parse_equation("2H2 + 1O2 = 2H2O").unwrap();
        assert_eq!(equation.reactants, strings(&["H2", "O2"]));
        assert_eq!(equation.products, strings(&["H2O"]));
    }

    #[test]
    fn test_zero_coefficient_is_rejected() {
        assert_eq!(
            parse_equation("0H2 + 5O2 = H2O"),
            Err(BalanceError::Format("zero coefficient in '0H2'".to_string()))
        );
        assert!(matches!(parse_equation("H2 + O2 = 00H2O"), Err(BalanceError::Format(_))));
        let equation = parse_equation("10H2 + 05O2 = H2O").unwrap();
        assert_eq!(equation.reactants, strings(&["H2", "O2"]));
    }

    #[test]
    fn test_equals_count() {
        assert!(matches!(parse_equation("H2 + O2"), Err(BalanceError::Format(_))));
        assert!(matches!(
            parse_equation("H2 = O2 = H2O"),
            Err(BalanceError::Format(_))
        ));
    }

    #[test]
    fn test_empty_tokens() {
        assert!(matches!(parse_equation("H2 + = H2O"), Err(BalanceError::Format(_))));
        assert!(matches!(parse_equation("H2 + O2 = H2O +"), Err(BalanceError::Format(_))));
        assert!(matches!(parse_equation("= H2O"), Err(BalanceError::Format(_))));
        assert!(matches!(parse_equation("H2 + O2 = 2"), Err(BalanceError::Format(_))));
    }
}
