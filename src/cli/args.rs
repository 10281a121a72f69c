use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "staffdex",
    version,
    about = "terminal employee-directory browser",
    long_about = "Staffdex fetches random personnel records from the randomuser.me API and renders them as searchable cards with an interactive detail pager.\n\nExamples:\n  staffdex\n  staffdex -n 24 --nat ie,gb --search walsh\n  staffdex --seed demo --pages 3 -o directory.html\n\nTip: Use --config to persist directory settings and keep CLI invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'c',
        long = "clr",
        visible_alias = "color",
        help_heading = "Output",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.staffdex/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        short = 'a',
        long = "api",
        value_name = "URL",
        help_heading = "Input",
        help = "Directory API endpoint (defaults to https://randomuser.me/api/)."
    )]
    pub api: Option<String>,

    #[arg(
        short = 'n',
        long = "rs",
        visible_alias = "results",
        value_name = "N",
        help_heading = "Directory",
        help = "Records to fetch per page (1-5000)."
    )]
    pub results: Option<u32>,

    #[arg(
        short = 'N',
        long = "nat",
        visible_alias = "nationalities",
        value_name = "CODES",
        help_heading = "Directory",
        help = "Nationality filter, comma-separated 2-letter codes (e.g. au,ca,gb,ie,nz,us)."
    )]
    pub nat: Option<String>,

    #[arg(
        short = 'S',
        long = "sd",
        visible_alias = "seed",
        value_name = "SEED",
        help_heading = "Directory",
        help = "API seed; the same seed reproduces the same people."
    )]
    pub seed: Option<String>,

    #[arg(
        short = 'P',
        long = "pg",
        visible_alias = "pages",
        value_name = "N",
        help_heading = "Directory",
        help = "Number of pages to fetch (a seed is pinned automatically for more than one)."
    )]
    pub pages: Option<u32>,

    #[arg(
        short = 'q',
        long = "se",
        visible_alias = "search",
        value_name = "QUERY",
        help_heading = "Search",
        help = "Filter cards by name before rendering (case-insensitive substring)."
    )]
    pub search: Option<String>,

    #[arg(
        short = 'E',
        long = "rx",
        visible_alias = "regex",
        help_heading = "Search",
        help = "Treat the search query as a regular expression."
    )]
    pub regex: bool,

    #[arg(
        short = 'o',
        long = "out",
        visible_alias = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Export the directory to a file."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'A',
        long = "of",
        visible_alias = "output-format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Export format (text, json, csv, html)."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 'T',
        long = "to",
        visible_alias = "timeout",
        value_name = "SECONDS",
        help_heading = "HTTP",
        help = "Per-request timeout in seconds."
    )]
    pub timeout: Option<usize>,

    #[arg(
        short = 'p',
        long = "px",
        visible_alias = "proxy",
        value_name = "URL",
        help_heading = "HTTP",
        help = "HTTP proxy URL (e.g. http://127.0.0.1:8080)."
    )]
    pub proxy: Option<String>,

    #[arg(
        short = 'H',
        long = "hdr",
        visible_alias = "header",
        value_name = "HEADER",
        help_heading = "HTTP",
        help = "Add a header to all requests (format: 'Key: Value')."
    )]
    pub header: Option<String>,

    #[arg(
        short = 'r',
        long = "rt",
        visible_alias = "rate",
        value_name = "RPS",
        help_heading = "Performance",
        help = "Request rate limit for page fetches (requests per second)."
    )]
    pub rate: Option<u32>,

    #[arg(
        short = 't',
        long = "cnc",
        visible_alias = "concurrency",
        value_name = "N",
        help_heading = "Performance",
        help = "Max in-flight page requests."
    )]
    pub concurrency: Option<u32>,

    #[arg(
        short = 'w',
        long = "wrk",
        visible_alias = "workers",
        value_name = "N",
        help_heading = "Performance",
        help = "Number of runtime worker threads."
    )]
    pub workers: Option<usize>,

    #[arg(
        short = 'B',
        long = "nb",
        visible_alias = "no-browse",
        help_heading = "Browse",
        help = "Print the cards and exit instead of starting the interactive browser."
    )]
    pub no_browse: bool,

    #[arg(
        short = 'O',
        long = "op",
        visible_alias = "open",
        value_name = "INDEX",
        help_heading = "Browse",
        help = "Open the profile at this card index straight away."
    )]
    pub open: Option<usize>,

    #[arg(
        long = "init-config",
        help_heading = "Input",
        help = "Write a commented default config to ~/.staffdex/config.yml and exit."
    )]
    pub init_config: bool,

    #[arg(
        short = 'x',
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,
}
