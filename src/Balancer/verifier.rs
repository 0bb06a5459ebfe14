/// Exact check that coefficients conserve every element.
use crate::Balancer::error::BalanceError;
use crate::Balancer::molmass::parse_formula;
use log::warn;
use num_bigint::BigUint;
use std::collections::BTreeMap;

/// For every element sums `coefficient * atoms` over the reactants (indices below
/// `reactant_count`) and over the products; the equation is balanced iff both sums agree
/// for each element. Arithmetic is arbitrary precision, there is no tolerance.
pub fn verify_balance(
    compounds: &[String],
    coefficients: &[u64],
    reactant_count: usize,
) -> Result<bool, BalanceError> {
    if compounds.len() != coefficients.len() {
        return Err(BalanceError::Verification(format!(
            "{} coefficients given for {} compounds",
            coefficients.len(),
            compounds.len()
        )));
    }
    // element -> (reactant side, product side)
    let mut totals: BTreeMap<String, (BigUint, BigUint)> = BTreeMap::new();
    for (i, compound) in compounds.iter().enumerate() {
        let counts = parse_formula(compound)?;
        for (element, count) in counts {
            let atoms = BigUint::from(coefficients[i]) * BigUint::from(count);
            let entry = totals.entry(element).or_default();
            if i < reactant_count {
                entry.0 += atoms;
            } else {
                entry.1 += atoms;
            }
        }
    }
    let mut balanced = true;
    for (element, (reactant_side, product_side)) in totals.iter() {
        if reactant_side != product_side {
            warn!(
                "element {} is not conserved: {} atoms in reactants, {} in products",
                element, reactant_side, product_side
            );
            balanced = false;
        }
    }
    Ok(balanced)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_balanced() {
        let compounds = strings(&["CH4", "O2", "CO2", "H2O"]);
        assert!(verify_balance(&compounds, &[1, 2, 1, 2], 2).unwrap());
        let compounds = strings(&["Fe", "O2", "Fe2O3"]);
        assert!(verify_balance(&compounds, &[4, 3, 2], 2).unwrap());
    }

    #[test]
    fn test_unbalanced() {
        let compounds = strings(&["H2", "O2", "H2O"]);
        assert!(!verify_balance(&compounds, &[1, 1, 1], 2).unwrap());
        // same numbers but split at the wrong place
        assert!(!verify_balance(&compounds, &[2, 1, 2], 1).unwrap());
    }

    #[test]
    fn test_length_mismatch() {
        let compounds = strings(&["H2", "O2", "H2O"]);
        assert!(matches!(
            verify_balance(&compounds, &[2, 1], 2),
            Err(BalanceError::Verification(_))
        ));
    }

    #[test]
    fn test_large_coefficients_do_not_overflow() {
        let compounds = strings(&["H999999999", "H2"]);
        let coefficients = [2 * u32::MAX as u64, 999_999_999 * u32::MAX as u64];
        assert!(verify_balance(&compounds, &coefficients, 1).unwrap());
    }
}
