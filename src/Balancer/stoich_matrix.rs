/// Element composition (stoichiometric) matrix of an equation.
///
/// Rows are the distinct element symbols sorted lexicographically, columns are the
/// compounds in the order reactants-then-products. Entry (i, j) is the number of atoms
/// of element i in compound j.
use crate::Balancer::error::BalanceError;
use crate::Balancer::molmass::parse_formula;
use log::debug;
use nalgebra::DMatrix;
use prettytable::{Cell, Row, Table};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct StoichMatrix {
    /// sorted, deduplicated element symbols (row labels)
    pub elements: Vec<String>,
    /// compounds, reactants first (column labels)
    pub compounds: Vec<String>,
    /// number of leading columns that are reactants
    pub reactant_count: usize,
    /// atomic composition of every compound, same order as `compounds`
    pub compositions: Vec<HashMap<String, usize>>,
    pub matrix: DMatrix<i64>,
}

impl StoichMatrix {
    pub fn build(compounds: &[String], reactant_count: usize) -> Result<Self, BalanceError> {
        if reactant_count > compounds.len() {
            return Err(BalanceError::Format(format!(
                "{} reactants declared but only {} compounds given",
                reactant_count,
                compounds.len()
            )));
        }
        let mut unique_elements: BTreeSet<String> = BTreeSet::new();
        let mut compositions = Vec::with_capacity(compounds.len());
        for compound in compounds {
            let counts = parse_formula(compound)?;
            unique_elements.extend(counts.keys().cloned());
            compositions.push(counts);
        }
        let elements: Vec<String> = unique_elements.into_iter().collect();
        let mut matrix = DMatrix::<i64>::zeros(elements.len(), compounds.len());
        for (j, counts) in compositions.iter().enumerate() {
            for (i, element) in elements.iter().enumerate() {
                if let Some(count) = counts.get(element) {
                    let count = i64::try_from(*count).map_err(|_| {
                        BalanceError::parse(compounds[j].as_str(), "atom count is too large")
                    })?;
                    matrix[(i, j)] = count;
                }
            }
        }
        debug!("stoichiometric matrix {}x{}: {}", matrix.nrows(), matrix.ncols(), matrix);
        Ok(Self {
            elements,
            compounds: compounds.to_vec(),
            reactant_count,
            compositions,
            matrix,
        })
    }
    pub fn nrows(&self) -> usize {
        self.matrix.nrows()
    }
    pub fn ncols(&self) -> usize {
        self.matrix.ncols()
    }
    /// matrix with product columns negated: a vector in its null space is a set of
    /// coefficients under which reactant atoms minus product atoms vanish for every element,
    /// and a physically meaningful solution has all entries of one sign
    pub fn signed_matrix(&self) -> DMatrix<i64> {
        let mut signed = self.matrix.clone();
        for j in self.reactant_count..signed.ncols() {
            for i in 0..signed.nrows() {
                signed[(i, j)] = -signed[(i, j)];
            }
        }
        signed
    }
    /// row of the matrix for the given element
    pub fn element_counts(&self, element: &str) -> Option<Vec<i64>> {
        let i = self.elements.iter().position(|e| e == element)?;
        Some(self.matrix.row(i).iter().copied().collect())
    }
    /// elements that occur on one side of the equation only; any such element
    /// makes the equation unbalanceable with positive coefficients
    pub fn one_sided_elements(&self) -> Vec<String> {
        let mut found = Vec::new();
        for (i, element) in self.elements.iter().enumerate() {
            let row = self.matrix.row(i);
            let in_reactants = row.iter().take(self.reactant_count).any(|&c| c != 0);
            let in_products = row.iter().skip(self.reactant_count).any(|&c| c != 0);
            if in_reactants != in_products {
                found.push(element.clone());
            }
        }
        found
    }
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        let mut header = vec![Cell::new("")];
        header.extend(self.compounds.iter().map(|c| Cell::new(c)));
        table.add_row(Row::new(header));
        for (i, element) in self.elements.iter().enumerate() {
            let mut row = vec![Cell::new(element)];
            row.extend(
                self.matrix
                    .row(i)
                    .iter()
                    .map(|count| Cell::new(&count.to_string())),
            );
            table.add_row(Row::new(row));
        }
        table
    }
}

impl fmt::Display for StoichMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_element_matrix() {
        let compounds = strings(&["CH4", "O2", "CO2", "H2O"]);
        let stoich = StoichMatrix::build(&compounds, 2).unwrap();
        assert_eq!(stoich.elements, strings(&["C", "H", "O"]));
        assert_eq!(stoich.nrows(), 3);
        assert_eq!(stoich.ncols(), 4);
        let expected = DMatrix::from_row_slice(3, 4, &[
            1, 0, 1, 0, //
            4, 0, 0, 2, //
            0, 2, 2, 1, //
        ]);
        assert_eq!(stoich.matrix, expected);
        assert_eq!(stoich.element_counts("O"), Some(vec![0, 2, 2, 1]));
        assert_eq!(stoich.element_counts("N"), None);
    }

    #[test]
    fn test_signed_matrix_negates_products() {
        let stoich = StoichMatrix::build(&strings(&["H2", "O2", "H2O"]), 2).unwrap();
        let expected = DMatrix::from_row_slice(2, 3, &[2, 0, -2, 0, 2, -1]);
        assert_eq!(stoich.signed_matrix(), expected);
        // the unsigned matrix is left untouched
        assert_eq!(stoich.element_counts("H"), Some(vec![2, 0, 2]));
    }

    #[test]
    fn test_column_order_follows_compounds() {
        let compounds = strings(&["H2O", "NaCl", "C3H8", "CH4"]);
        let stoich = StoichMatrix::build(&compounds, 2).unwrap();
        assert_eq!(stoich.elements, strings(&["C", "Cl", "H", "Na", "O"]));
        assert_eq!(stoich.element_counts("C"), Some(vec![0, 0, 3, 1]));
        assert_eq!(stoich.element_counts("H"), Some(vec![2, 0, 8, 4]));
        assert_eq!(stoich.compounds, compounds);
    }

    #[test]
    fn test_one_sided_elements() {
        let stoich = StoichMatrix::build(&strings(&["Na", "Cl"]), 1).unwrap();
        assert_eq!(stoich.one_sided_elements(), strings(&["Cl", "Na"]));
        let stoich = StoichMatrix::build(&strings(&["H2", "O2", "H2O"]), 2).unwrap();
        assert!(stoich.one_sided_elements().is_empty());
    }

    #[test]
    fn test_build_propagates_parse_errors() {
        let result = StoichMatrix::build(&strings(&["H2", "(OH)2"]), 1);
        assert!(matches!(result, Err(BalanceError::Parse { .. })));
        let result = StoichMatrix::build(&strings(&["H2"]), 2);
        assert!(matches!(result, Err(BalanceError::Format(_))));
    }

    #[test]
    fn test_table_rendering() {
        let stoich = StoichMatrix::build(&strings(&["H2", "O2", "H2O"]), 2).unwrap();
        let rendered = stoich.to_string();
        assert!(rendered.contains("H2O"));
        assert!(rendered.contains("O2"));
    }
}
