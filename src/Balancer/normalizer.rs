/// Scaling of an exact rational null-space vector to the smallest positive integers.
use crate::Balancer::error::BalanceError;
use log::debug;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Multiplies the vector by the lcm of its denominators, fixes the overall sign and
/// divides by the gcd of the entries.
///
/// The vector must come from the null space of the signed matrix (product columns negated),
/// so a chemically meaningful solution has every entry of the same sign. A uniformly negative
/// vector is negated as a whole; mixed signs or zero entries are rejected rather than
/// silently patched with entrywise absolute values.
pub fn normalize(vector: &[BigRational]) -> Result<Vec<u64>, BalanceError> {
    if vector.is_empty() {
        return Err(BalanceError::Unbalanceable(
            "null space vector is empty".to_string(),
        ));
    }
    let lcm = vector
        .iter()
        .fold(BigInt::one(), |acc, r| acc.lcm(r.denom()));
    let scale = BigRational::from_integer(lcm.clone());
    let mut integers: Vec<BigInt> = vector
        .iter()
        .map(|r| (r * &scale).to_integer())
        .collect();
    debug!("lcm of denominators {}, scaled vector {:?}", lcm, integers);

    if let Some(i) = integers.iter().position(|c| c.is_zero()) {
        return Err(BalanceError::Unbalanceable(format!(
            "compound {} does not take part in the reaction (zero coefficient)",
            i + 1
        )));
    }
    let negatives = integers.iter().filter(|c| c.is_negative()).count();
    if negatives == integers.len() {
        integers.iter_mut().for_each(|c| *c = -c.clone());
    } else if negatives != 0 {
        return Err(BalanceError::Unbalanceable(
            "coefficients of mixed sign".to_string(),
        ));
    }

    let gcd = integers
        .iter()
        .fold(BigInt::zero(), |acc, c| acc.gcd(c));
    integers
        .iter()
        .map(|c| {
            let reduced = c / &gcd;
            reduced.to_u64().ok_or_else(|| {
                BalanceError::CoefficientOverflow(format!(
                    "coefficient {} exceeds the u64 range",
                    reduced
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratios(v: &[(i64, i64)]) -> Vec<BigRational> {
        v.iter()
            .map(|&(n, d)| BigRational::new(BigInt::from(n), BigInt::from(d)))
            .collect()
    }

    #[test]
    fn test_lcm_scaling() {
        assert_eq!(normalize(&ratios(&[(1, 1), (1, 2), (1, 1)])).unwrap(), vec![2, 1, 2]);
        assert_eq!(
            normalize(&ratios(&[(2, 1), (3, 2), (1, 1)])).unwrap(),
            vec![4, 3, 2]
        );
        assert_eq!(
            normalize(&ratios(&[(1, 3), (1, 2), (1, 6)])).unwrap(),
            vec![2, 3, 1]
        );
    }

    #[test]
    fn test_uniformly_negative_vector_is_negated() {
        assert_eq!(
            normalize(&ratios(&[(-1, 1), (-1, 2), (-1, 1)])).unwrap(),
            vec![2, 1, 2]
        );
    }

    #[test]
    fn test_common_factor_is_removed() {
        assert_eq!(normalize(&ratios(&[(2, 1), (4, 1), (6, 1)])).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_mixed_signs_are_rejected() {
        let result = normalize(&ratios(&[(-1, 1), (1, 2), (1, 1)]));
        assert_eq!(
            result,
            Err(BalanceError::Unbalanceable("coefficients of mixed sign".to_string()))
        );
    }

    #[test]
    fn test_zero_entry_is_rejected() {
        let result = normalize(&ratios(&[(1, 1), (0, 1), (1, 1)]));
        assert!(matches!(result, Err(BalanceError::Unbalanceable(_))));
        assert!(matches!(normalize(&[]), Err(BalanceError::Unbalanceable(_))));
    }

    #[test]
    fn test_coefficient_beyond_u64_range() {
        let big = BigInt::from(u64::MAX) + BigInt::one();
        let vector = vec![BigRational::one(), BigRational::from_integer(big)];
        assert_eq!(
            normalize(&vector),
            Err(BalanceError::CoefficientOverflow(
                "coefficient 18446744073709551616 exceeds the u64 range".to_string()
            ))
        );
        let largest = BigRational::from_integer(BigInt::from(u64::MAX));
        assert_eq!(
            normalize(&[BigRational::one(), largest]).unwrap(),
            vec![1, u64::MAX]
        );
    }

    #[test]
    fn test_gcd_of_result_is_one() {
        let result = normalize(&ratios(&[(5, 7), (10, 21), (15, 14)])).unwrap();
        let gcd = result.iter().fold(0u64, |acc, &c| acc.gcd(&c));
        assert_eq!(gcd, 1);
        assert_eq!(result, vec![6, 4, 9]);
    }
}
