use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only touches configuration and never
/// reaches the network.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Football fixture oracle
///
/// Fetches fixtures from API-Football and prints them as an ABI-encoded
/// `(uint32[] fixtureIds, uint32[] timestamps)` payload in hex.
///
/// The API key is read from the `soccerApiKey` (or `SOCCER_API_KEY`)
/// environment variable. The timezone listing uses `RAPIDAPI_KEY`.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Fetch the list of supported timezones and log it instead of fetching fixtures.
    #[arg(long = "timezones", short = 't', conflicts_with = "decode")]
    pub timezones: bool,

    /// Fixture date in YYYY-MM-DD format. Defaults to the configured date.
    #[arg(long = "date", short = 'd', help_heading = "Fixture Query")]
    pub date: Option<String>,

    /// League id, e.g. 39 for the Premier League.
    #[arg(long = "league", help_heading = "Fixture Query")]
    pub league: Option<u32>,

    /// Season start year, e.g. 2023 for 2023/24.
    #[arg(long = "season", help_heading = "Fixture Query")]
    pub season: Option<i32>,

    /// Decode a hex payload produced by this tool and print both lists. No request is made.
    #[arg(long = "decode", value_name = "HEX")]
    pub decode: Option<String>,

    /// Update API domain in config.
    #[arg(long = "config", help_heading = "Configuration", value_name = "API_DOMAIN")]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr. The payload on stdout is unaffected.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
