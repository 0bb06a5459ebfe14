/// THE STRUCT ReactionBalancer DRIVES THE WHOLE BALANCING PIPELINE
/// AND KEEPS ITS INTERMEDIATE RESULTS
///
/// equation string -> reactants/products -> stoichiometric matrix -> exact null space ->
/// smallest positive integers -> exact verification -> formatted equation.
/// Every step can be run separately (and inspected through the public fields) or all at once
/// with `balance`.
use crate::Balancer::equation_parser::{Equation, parse_equation};
use crate::Balancer::error::BalanceError;
use crate::Balancer::formatter::{OutputStyle, format_equation};
use crate::Balancer::molmass::calculate_molar_mass;
use crate::Balancer::normalizer::normalize;
use crate::Balancer::null_space::null_space;
use crate::Balancer::stoich_matrix::StoichMatrix;
use crate::Balancer::verifier::verify_balance;
use log::{info, warn};
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

/// result of a successful balance request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancedEquation {
    pub reactants: Vec<String>,
    pub products: Vec<String>,
    /// positive, gcd 1, order reactants-then-products
    pub coefficients: Vec<u64>,
    /// rendered equation, e.g. "2H2 + 1O2 = 2H2O"
    pub equation: String,
}

impl BalancedEquation {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone)]
pub struct ReactionBalancer {
    pub equation: String,
    pub style: OutputStyle,
    pub parsed: Option<Equation>,
    pub stoich_matrix: Option<StoichMatrix>,
    /// dimension of the null space of the signed stoichiometric matrix
    pub null_space_dimension: usize,
    pub coefficients: Option<Vec<u64>>,
}

impl ReactionBalancer {
    pub fn new(equation: &str) -> Self {
        Self {
            equation: equation.to_string(),
            style: OutputStyle::default(),
            parsed: None,
            stoich_matrix: None,
            null_space_dimension: 0,
            coefficients: None,
        }
    }
    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }
    /////////////////////////////////PIPELINE STEPS///////////////////////////////////////////
    pub fn parse_equation(&mut self) -> Result<&Equation, BalanceError> {
        let parsed = parse_equation(&self.equation)?;
        Ok(&*self.parsed.insert(parsed))
    }

    pub fn build_matrix(&mut self) -> Result<&StoichMatrix, BalanceError> {
        if self.parsed.is_none() {
            self.parsed = Some(parse_equation(&self.equation)?);
        }
        let stoich = match &self.parsed {
            Some(parsed) => StoichMatrix::build(&parsed.compounds(), parsed.reactant_count())?,
            None => return Err(BalanceError::Format("equation is not parsed".to_string())),
        };
        Ok(&*self.stoich_matrix.insert(stoich))
    }

    /// finds the coefficients from the first basis vector of the null space
    pub fn solve(&mut self) -> Result<&[u64], BalanceError> {
        if self.stoich_matrix.is_none() {
            self.build_matrix()?;
        }
        let Some(stoich) = self.stoich_matrix.as_ref() else {
            return Err(BalanceError::Format("stoichiometric matrix is not built".to_string()));
        };
        let basis = null_space(&stoich.signed_matrix());
        self.null_space_dimension = basis.len();
        let Some(first) = basis.first() else {
            let one_sided = stoich.one_sided_elements();
            let reason = if one_sided.is_empty() {
                "no combination of compounds conserves all elements".to_string()
            } else {
                format!("element(s) {} appear on one side only", one_sided.join(", "))
            };
            return Err(BalanceError::Unbalanceable(reason));
        };
        if basis.len() > 1 {
            warn!(
                "equation {} has {} independent solutions, only the first one is used",
                self.equation,
                basis.len()
            );
        }
        let coefficients = normalize(first)?;
        Ok(self.coefficients.insert(coefficients).as_slice())
    }

    pub fn verify(&self) -> Result<(), BalanceError> {
        let (Some(stoich), Some(coefficients)) = (&self.stoich_matrix, &self.coefficients) else {
            return Err(BalanceError::Verification(
                "nothing to verify, equation is not solved".to_string(),
            ));
        };
        if verify_balance(&stoich.compounds, coefficients, stoich.reactant_count)? {
            Ok(())
        } else {
            Err(BalanceError::Verification(format!(
                "coefficients {:?} do not conserve all elements",
                coefficients
            )))
        }
    }

    /// runs every step of the pipeline
    pub fn balance(&mut self) -> Result<BalancedEquation, BalanceError> {
        self.parse_equation()?;
        self.build_matrix()?;
        self.solve()?;
        self.verify()?;
        let balanced = self.balanced_equation().ok_or_else(|| {
            BalanceError::Verification("balanced equation is missing".to_string())
        })?;
        info!("{} balanced as {}", self.equation, balanced.equation);
        Ok(balanced)
    }
    /////////////////////////////////OUTPUT///////////////////////////////////////////
    pub fn balanced_equation(&self) -> Option<BalancedEquation> {
        let parsed = self.parsed.as_ref()?;
        let coefficients = self.coefficients.as_ref()?;
        Some(BalancedEquation {
            reactants: parsed.reactants.clone(),
            products: parsed.products.clone(),
            coefficients: coefficients.clone(),
            equation: format_equation(
                &parsed.reactants,
                &parsed.products,
                coefficients,
                &self.style,
            ),
        })
    }

    pub fn balanced_equation_string(&self) -> Option<String> {
        self.balanced_equation().map(|balanced| balanced.equation)
    }

    /// table of compounds with their coefficients and masses; molar masses of formulae with
    /// elements missing from the atomic mass table are shown as "-"
    pub fn report_table(&self) -> Option<Table> {
        let stoich = self.stoich_matrix.as_ref()?;
        let coefficients = self.coefficients.as_ref()?;
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Compound"),
            Cell::new("Side"),
            Cell::new("Coefficient"),
            Cell::new("Molar mass, g/mol"),
            Cell::new("Mass, g"),
        ]));
        // total masses of both sides, None once any molar mass is unknown
        let mut totals = [Some(0.0_f64), Some(0.0_f64)];
        for (i, compound) in stoich.compounds.iter().enumerate() {
            let side = usize::from(i >= stoich.reactant_count);
            let molar_mass = calculate_molar_mass(compound).ok().map(|(m, _)| m);
            let mass = molar_mass.map(|m| m * coefficients[i] as f64);
            totals[side] = match (totals[side], mass) {
                (Some(total), Some(mass)) => Some(total + mass),
                _ => None,
            };
            table.add_row(Row::new(vec![
                Cell::new(compound),
                Cell::new(if side == 0 { "reactant" } else { "product" }),
                Cell::new(&coefficients[i].to_string()),
                Cell::new(&format_mass(molar_mass)),
                Cell::new(&format_mass(mass)),
            ]));
        }
        for (label, total) in ["reactants total", "products total"].iter().zip(totals) {
            table.add_row(Row::new(vec![
                Cell::new(label),
                Cell::new(""),
                Cell::new(""),
                Cell::new(""),
                Cell::new(&format_mass(total)),
            ]));
        }
        Some(table)
    }

    pub fn pretty_print_report(&self) {
        match self.report_table() {
            Some(table) => {
                if let Some(stoich) = &self.stoich_matrix {
                    stoich.to_table().printstd();
                }
                table.printstd();
            }
            None => println!("ReactionBalancer::pretty_print_report: equation is not balanced yet"),
        }
    }
}

fn format_mass(mass: Option<f64>) -> String {
    match mass {
        Some(mass) => format!("{:.3}", mass),
        None => "-".to_string(),
    }
}

/// balances an equation and renders it in the default style
pub fn balance_equation(equation: &str) -> Result<String, BalanceError> {
    balance_equation_with_style(equation, &OutputStyle::default())
}

pub fn balance_equation_with_style(
    equation: &str,
    style: &OutputStyle,
) -> Result<String, BalanceError> {
    let mut balancer = ReactionBalancer::new(equation).with_style(*style);
    balancer.balance().map(|balanced| balanced.equation)
}
