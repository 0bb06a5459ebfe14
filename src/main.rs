use ChemBalancer::cli::cli_main::run_interactive_prompt;
use ChemBalancer::settings::{DEFAULT_CONFIG_FILE, Settings};
use log::{LevelFilter, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

pub fn main() {
    // the config decides the log level, so its load error is reported once the logger is up
    let loaded = Settings::load(DEFAULT_CONFIG_FILE);
    let level = loaded
        .as_ref()
        .map(Settings::log_level)
        .unwrap_or(LevelFilter::Warn);
    // log to stderr so that stdout carries only the prompt and the result
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to initialise logger: {}", e);
    }
    let settings = loaded.unwrap_or_else(|e| {
        warn!(
            "failed to read config file '{}': {}, using defaults",
            DEFAULT_CONFIG_FILE, e
        );
        Settings::defaults_for(DEFAULT_CONFIG_FILE)
    });
    let code = run_interactive_prompt(&settings);
    std::process::exit(code);
}
