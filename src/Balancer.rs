/// eng
/// Balancing of chemical equations.
/// The module takes an unbalanced equation like "H2 + O2 = H2O" and produces the smallest
/// positive integer stoichiometric coefficients conserving every element: "2H2 + 1O2 = 2H2O".
/// 1) the equation is split into reactants and products
/// 2) every formula is parsed into its atomic composition
/// 3) the element composition matrix is assembled (elements x compounds, reactants first)
/// 4) exact null space of that matrix (product columns negated) is found over rationals
/// 5) the first null space vector is scaled to the smallest positive integers
/// 6) the result is checked once more for exact conservation of every element
///
/// Note: only the first basis vector of the null space is used, so for reactions with several
/// independent solutions one of them is chosen arbitrarily.
/// # Examples
/// ```
/// use ChemBalancer::Balancer::balancer::{ReactionBalancer, balance_equation};
/// assert_eq!(balance_equation("Fe + O2 = Fe2O3").unwrap(), "4Fe + 3O2 = 2Fe2O3");
/// let mut balancer = ReactionBalancer::new("CH4 + O2 = CO2 + H2O");
/// let balanced = balancer.balance().unwrap();
/// assert_eq!(balanced.coefficients, vec![1, 2, 1, 2]);
/// balancer.pretty_print_report();
/// ```
pub mod balancer;
/// splitting of the equation string into reactants and products
/// ```
/// use ChemBalancer::Balancer::equation_parser::parse_equation;
/// let equation = parse_equation("H2 + O2 = H2O").unwrap();
/// assert_eq!(equation.reactants, vec!["H2", "O2"]);
/// ```
pub mod equation_parser;
pub mod error;
/// rendering of the balanced equation
pub mod formatter;
/// Module to calculate the atomic composition and molar mass of a chemical formula
///
///  # Examples
/// ```
/// use ChemBalancer::Balancer::molmass::{calculate_molar_mass, parse_formula};
/// let formula = "C6H8O6";
/// let (molar_mass, element_composition) = calculate_molar_mass(formula).unwrap();
/// println!("Element counts: {:?}", element_composition);
/// println!("Molar mass: {:?} g/mol", molar_mass);
/// let atomic_composition = parse_formula("KMnO4").unwrap();
/// assert_eq!(atomic_composition["O"], 4);
/// ```
pub mod molmass;
pub mod normalizer;
/// exact rational null space of the stoichiometric matrix
pub mod null_space;
pub mod stoich_matrix;
pub mod verifier;
