/// Module to parse chemical formulae into atomic composition and to calculate molar masses
///
/// The grammar is deliberately minimal: a formula is a run of element symbols (one capital letter
/// followed by lowercase letters), each optionally followed by an atom count. Anything else
/// (brackets, charges, phase marks, hydrate dots) is rejected.
use crate::Balancer::error::BalanceError;
use log::debug;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

// Define a struct to hold element data
pub struct Element {
    name: &'static str,
    atomic_mass: f64,
}

// standard atomic masses, g/mol
const ELEMENTS: &[Element] = &[
    Element {
        name: "H",
        atomic_mass: 1.008,
    },
    Element {
        name: "He",
        atomic_mass: 4.0026,
    },
    Element {
        name: "Li",
        atomic_mass: 6.94,
    },
    Element {
        name: "Be",
        atomic_mass: 9.0122,
    },
    Element {
        name: "B",
        atomic_mass: 10.81,
    },
    Element {
        name: "C",
        atomic_mass: 12.011,
    },
    Element {
        name: "N",
        atomic_mass: 14.007,
    },
    Element {
        name: "O",
        atomic_mass: 15.999,
    },
    Element {
        name: "F",
        atomic_mass: 18.998,
    },
    Element {
        name: "Ne",
        atomic_mass: 20.18,
    },
    Element {
        name: "Na",
        atomic_mass: 22.99,
    },
    Element {
        name: "Mg",
        atomic_mass: 24.305,
    },
    Element {
        name: "Al",
        atomic_mass: 26.982,
    },
    Element {
        name: "Si",
        atomic_mass: 28.085,
    },
    Element {
        name: "P",
        atomic_mass: 30.974,
    },
    Element {
        name: "S",
        atomic_mass: 32.06,
    },
    Element {
        name: "Cl",
        atomic_mass: 35.45,
    },
    Element {
        name: "Ar",
        atomic_mass: 39.948,
    },
    Element {
        name: "K",
        atomic_mass: 39.098,
    },
    Element {
        name: "Ca",
        atomic_mass: 40.078,
    },
    Element {
        name: "Sc",
        atomic_mass: 44.956,
    },
    Element {
        name: "Ti",
        atomic_mass: 47.867,
    },
    Element {
        name: "V",
        atomic_mass: 50.942,
    },
    Element {
        name: "Cr",
        atomic_mass: 51.996,
    },
    Element {
        name: "Mn",
        atomic_mass: 54.938,
    },
    Element {
        name: "Fe",
        atomic_mass: 55.845,
    },
    Element {
        name: "Co",
        atomic_mass: 58.933,
    },
    Element {
        name: "Ni",
        atomic_mass: 58.693,
    },
    Element {
        name: "Cu",
        atomic_mass: 63.546,
    },
    Element {
        name: "Zn",
        atomic_mass: 65.38,
    },
    Element {
        name: "Ga",
        atomic_mass: 69.723,
    },
    Element {
        name: "Ge",
        atomic_mass: 72.63,
    },
    Element {
        name: "As",
        atomic_mass: 74.922,
    },
    Element {
        name: "Se",
        atomic_mass: 78.971,
    },
    Element {
        name: "Br",
        atomic_mass: 79.904,
    },
    Element {
        name: "Kr",
        atomic_mass: 83.798,
    },
    Element {
        name: "Rb",
        atomic_mass: 85.468,
    },
    Element {
        name: "Sr",
        atomic_mass: 87.62,
    },
    Element {
        name: "Y",
        atomic_mass: 88.906,
    },
    Element {
        name: "Zr",
        atomic_mass: 91.224,
    },
    Element {
        name: "Nb",
        atomic_mass: 92.906,
    },
    Element {
        name: "Mo",
        atomic_mass: 95.95,
    },
    Element {
        name: "Tc",
        atomic_mass: 98.0,
    },
    Element {
        name: "Ru",
        atomic_mass: 101.07,
    },
    Element {
        name: "Rh",
        atomic_mass: 102.91,
    },
    Element {
        name: "Pd",
        atomic_mass: 106.42,
    },
    Element {
        name: "Ag",
        atomic_mass: 107.87,
    },
    Element {
        name: "Cd",
        atomic_mass: 112.41,
    },
    Element {
        name: "In",
        atomic_mass: 114.82,
    },
    Element {
        name: "Sn",
        atomic_mass: 118.71,
    },
    Element {
        name: "Sb",
        atomic_mass: 121.76,
    },
    Element {
        name: "Te",
        atomic_mass: 127.6,
    },
    Element {
        name: "I",
        atomic_mass: 126.9,
    },
    Element {
        name: "Xe",
        atomic_mass: 131.29,
    },
    Element {
        name: "Cs",
        atomic_mass: 132.91,
    },
    Element {
        name: "Ba",
        atomic_mass: 137.33,
    },
    Element {
        name: "La",
        atomic_mass: 138.91,
    },
    Element {
        name: "Ce",
        atomic_mass: 140.12,
    },
    Element {
        name: "Pr",
        atomic_mass: 140.91,
    },
    Element {
        name: "Nd",
        atomic_mass: 144.24,
    },
    Element {
        name: "Pm",
        atomic_mass: 145.0,
    },
    Element {
        name: "Sm",
        atomic_mass: 150.36,
    },
    Element {
        name: "Eu",
        atomic_mass: 151.96,
    },
    Element {
        name: "Gd",
        atomic_mass: 157.25,
    },
    Element {
        name: "Tb",
        atomic_mass: 158.93,
    },
    Element {
        name: "Dy",
        atomic_mass: 162.5,
    },
    Element {
        name: "Ho",
        atomic_mass: 164.93,
    },
    Element {
        name: "Er",
        atomic_mass: 167.26,
    },
    Element {
        name: "Tm",
        atomic_mass: 168.93,
    },
    Element {
        name: "Yb",
        atomic_mass: 173.05,
    },
    Element {
        name: "Lu",
        atomic_mass: 174.97,
    },
    Element {
        name: "Hf",
        atomic_mass: 178.49,
    },
    Element {
        name: "Ta",
        atomic_mass: 180.95,
    },
    Element {
        name: "W",
        atomic_mass: 183.84,
    },
    Element {
        name: "Re",
        atomic_mass: 186.21,
    },
    Element {
        name: "Os",
        atomic_mass: 190.23,
    },
    Element {
        name: "Ir",
        atomic_mass: 192.22,
    },
    Element {
        name: "Pt",
        atomic_mass: 195.08,
    },
    Element {
        name: "Au",
        atomic_mass: 196.97,
    },
    Element {
        name: "Hg",
        atomic_mass: 200.59,
    },
    Element {
        name: "Tl",
        atomic_mass: 204.38,
    },
    Element {
        name: "Pb",
        atomic_mass: 207.2,
    },
    Element {
        name: "Bi",
        atomic_mass: 208.98,
    },
    Element {
        name: "Po",
        atomic_mass: 209.0,
    },
    Element {
        name: "At",
        atomic_mass: 210.0,
    },
    Element {
        name: "Rn",
        atomic_mass: 222.0,
    },
    Element {
        name: "Fr",
        atomic_mass: 223.0,
    },
    Element {
        name: "Ra",
        atomic_mass: 226.0,
    },
    Element {
        name: "Ac",
        atomic_mass: 227.0,
    },
    Element {
        name: "Th",
        atomic_mass: 232.04,
    },
    Element {
        name: "Pa",
        atomic_mass: 231.04,
    },
    Element {
        name: "U",
        atomic_mass: 238.03,
    },
];

/// element symbol and its optional atom count
fn element_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only, `\d` would also take other Unicode digits
    PATTERN.get_or_init(|| {
        Regex::new(r"([A-Z][a-z]*)([0-9]*)").expect("element pattern is valid")
    })
}

/// atomic mass of an element, None if the symbol is not in the table
pub fn atomic_mass(symbol: &str) -> Option<f64> {
    ELEMENTS
        .iter()
        .find(|element| element.name == symbol)
        .map(|element| element.atomic_mass)
}

// Function to parse a chemical formula and return a HashMap of elements and their counts.
// Repeated symbols are accumulated: C5H6OOH -> {"C":5, "H":7, "O":2}
pub fn parse_formula(formula: &str) -> Result<HashMap<String, usize>, BalanceError> {
    if formula.is_empty() {
        return Err(BalanceError::parse(formula, "empty formula"));
    }
    let mut counts: HashMap<String, usize> = HashMap::new();
    // end of the previous match; every character must be consumed by the pattern
    let mut position = 0;
    for cap in element_pattern().captures_iter(formula) {
        let whole = cap.get(0).expect("group 0 is always present");
        if whole.start() != position {
            return Err(unexpected_character(formula, position));
        }
        let element = &cap[1];
        let digits = &cap[2];
        let count: usize = if digits.is_empty() {
            1
        } else {
            digits.parse().map_err(|_| {
                BalanceError::parse(formula, format!("atom count '{}' is too large", digits))
            })?
        };
        *counts.entry(element.to_string()).or_insert(0) += count;
        position = whole.end();
    }
    if position != formula.len() {
        return Err(unexpected_character(formula, position));
    }
    debug!("parsed formula {}: {:?}", formula, counts);
    Ok(counts)
}

fn unexpected_character(formula: &str, position: usize) -> BalanceError {
    let c = formula[position..].chars().next().unwrap_or(' ');
    BalanceError::parse(
        formula,
        format!("unexpected character '{}' at position {}", c, position),
    )
}

// Function to calculate the molar mass of a substance given its chemical formula
pub fn calculate_molar_mass(
    formula: &str,
) -> Result<(f64, HashMap<String, usize>), BalanceError> {
    let counts = parse_formula(formula)?;
    let mut molar_mass = 0.0;
    for (element, count) in counts.iter() {
        let mass = atomic_mass(element)
            .ok_or_else(|| BalanceError::UnknownElement(element.clone()))?;
        molar_mass += mass * *count as f64;
    }
    Ok((molar_mass, counts))
}

// Function to calculate the molar mass of a vector of chemical formulas
pub fn calculate_molar_mass_of_vector_of_subs(
    vec_of_formulae: &[&str],
) -> Result<Vec<f64>, BalanceError> {
    vec_of_formulae
        .iter()
        .map(|formula| calculate_molar_mass(formula).map(|(mass, _)| mass))
        .collect()
}

/// renders atomic composition back into a formula in Hill order:
/// C first, H second, the rest alphabetically (all alphabetically if there is no carbon).
/// Counts equal to 1 are omitted.
pub fn format_composition(counts: &HashMap<String, usize>) -> String {
    let sorted: BTreeMap<&str, usize> =
        counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    let mut order: Vec<&str> = Vec::with_capacity(sorted.len());
    if sorted.contains_key("C") {
        order.push("C");
        if sorted.contains_key("H") {
            order.push("H");
        }
    }
    for element in sorted.keys() {
        if !order.contains(element) {
            order.push(*element);
        }
    }
    let mut formula = String::new();
    for element in order {
        let count = sorted[element];
        formula.push_str(element);
        if count != 1 {
            formula.push_str(&count.to_string());
        }
    }
    formula
}
