/// reading equations from text files and balancing them in batch
/// ```no_run
/// use ChemBalancer::Utils::load_from_file::balance_equations_from_file;
/// use ChemBalancer::Balancer::formatter::OutputStyle;
/// let results = balance_equations_from_file("equations.txt", &OutputStyle::default()).unwrap();
/// for (equation, result) in results {
///     println!("{} -> {:?}", equation, result);
/// }
/// ```
pub mod load_from_file;
