/// Rendering of balanced coefficients back into an equation string.
use serde::{Deserialize, Serialize};

/// cosmetic options of the rendered equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputStyle {
    /// `2H2 + 1O2` instead of `2H2+1O2`
    pub spaced: bool,
    /// `1O2` instead of `O2`
    pub show_unit_coefficients: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            spaced: true,
            show_unit_coefficients: true,
        }
    }
}

impl OutputStyle {
    pub fn compact() -> Self {
        Self {
            spaced: false,
            ..Self::default()
        }
    }
    fn plus(&self) -> &'static str {
        if self.spaced { " + " } else { "+" }
    }
    fn term(&self, coefficient: u64, formula: &str) -> String {
        if coefficient == 1 && !self.show_unit_coefficients {
            formula.to_string()
        } else {
            format!("{}{}", coefficient, formula)
        }
    }
}

/// `coefficients` follows the order reactants-then-products
pub fn format_equation(
    reactants: &[String],
    products: &[String],
    coefficients: &[u64],
    style: &OutputStyle,
) -> String {
    debug_assert_eq!(reactants.len() + products.len(), coefficients.len());
    let (reactant_coeffs, product_coeffs) =
        coefficients.split_at(reactants.len().min(coefficients.len()));
    let side = |formulae: &[String], coeffs: &[u64]| -> String {
        formulae
            .iter()
            .zip(coeffs.iter())
            .map(|(formula, &c)| style.term(c, formula))
            .collect::<Vec<_>>()
            .join(style.plus())
    };
    format!(
        "{} = {}",
        side(reactants, reactant_coeffs),
        side(products, product_coeffs)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_style() {
        let reactants = strings(&["H2", "O2"]);
        let products = strings(&["H2O"]);
        assert_eq!(
            format_equation(&reactants, &products, &[2, 1, 2], &OutputStyle::default()),
            "2H2 + 1O2 = 2H2O"
        );
    }

    #[test]
    fn test_compact_style() {
        let reactants = strings(&["CH4", "O2"]);
        let products = strings(&["CO2", "H2O"]);
        assert_eq!(
            format_equation(&reactants, &products, &[1, 2, 1, 2], &OutputStyle::compact()),
            "1CH4+2O2 = 1CO2+2H2O"
        );
    }

    #[test]
    fn test_unit_coefficients_hidden() {
        let style = OutputStyle {
            spaced: true,
            show_unit_coefficients: false,
        };
        let reactants = strings(&["CH4", "O2"]);
        let products = strings(&["CO2", "H2O"]);
        assert_eq!(
            format_equation(&reactants, &products, &[1, 2, 1, 2], &style),
            "CH4 + 2O2 = CO2 + 2H2O"
        );
    }
}
