use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "staffdir",
    version,
    about = "static employee directory with sort, filter, and name search",
    long_about = "staffdir renders an employee directory as a table. Rows can be sorted by column, filtered by department or role, and narrowed by exact first- or last-name search.\n\nExamples:\n  staffdir --sort last_name\n  staffdir --department Sales -o sales.html\n  staffdir --data ./employees.json --first-name Amy --output-format json\n  staffdir --interactive\n\nTip: Use --config to persist settings and keep CLI invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase log verbosity (-v, -vv)."
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
        short = 'n',
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'o',
        long = "out",
        visible_alias = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write the rendered directory to a file instead of stdout."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'A',
        long = "of",
        visible_alias = "output-format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Output format (text, json, html)."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 't',
        long = "ttl",
        visible_alias = "title",
        value_name = "TEXT",
        help_heading = "Output",
        help = "Page heading for HTML output."
    )]
    pub title: Option<String>,

    #[arg(
        short = 'd',
        long = "dt",
        visible_alias = "data",
        value_name = "FILE",
        help_heading = "Input",
        help = "Employee dataset (JSON array). Defaults to the bundled directory."
    )]
    pub data: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.staffdir/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "ic",
        visible_alias = "init-config",
        help_heading = "Input",
        help = "Write a commented default config file if none exists, then exit."
    )]
    pub init_config: bool,

    #[arg(
        short = 's',
        long = "srt",
        visible_alias = "sort",
        value_name = "FIELD",
        help_heading = "View",
        help = "Sort by column (first_name, last_name, department, role, email; anything else sorts by id)."
    )]
    pub sort: Option<String>,

    #[arg(
        short = 'D',
        long = "dep",
        visible_alias = "department",
        value_name = "NAME",
        help_heading = "View",
        help = "Show only employees in this department (exact match)."
    )]
    pub department: Option<String>,

    #[arg(
        short = 'R',
        long = "rl",
        visible_alias = "role",
        value_name = "NAME",
        help_heading = "View",
        help = "Show only employees with this role (exact match)."
    )]
    pub role: Option<String>,

    #[arg(
        short = 'f',
        long = "fn",
        visible_alias = "first-name",
        value_name = "NAME",
        help_heading = "Search",
        help = "Show employees whose first name matches exactly. An empty value searches by --last-name."
    )]
    pub first_name: Option<String>,

    #[arg(
        short = 'l',
        long = "ln",
        visible_alias = "last-name",
        value_name = "NAME",
        help_heading = "Search",
        help = "Show employees whose last name matches exactly."
    )]
    pub last_name: Option<String>,

    #[arg(
        short = 'i',
        long = "it",
        visible_alias = "interactive",
        help_heading = "Session",
        help = "Read directory commands from stdin and redraw the table after each one."
    )]
    pub interactive: bool,
}
