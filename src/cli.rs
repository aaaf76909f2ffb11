/// Structure representing command-line arguments.
#[derive(Debug)]
pub struct Args {
    pub input: std::path::PathBuf,
    pub output: std::path::PathBuf,
    pub start_year: i32,
    pub end_year: i32,
    pub extension: String,
    pub skip_missing: bool,
    pub check: bool,
}

/// Command-line arguments parser using Clap.
impl Args {
    /// Parses command-line arguments using `clap`.
    ///
    /// # Returns
    /// * `Args` - Struct containing parsed arguments.
    ///
    /// # Errors
    /// * Exits with a usage message if required arguments are missing or invalid.
    pub fn parse() -> Self {
        Self::from_matches(&command().get_matches())
    }

    fn from_matches(matches: &clap::ArgMatches) -> Self {
        Args {
            input: matches
                .get_one::<std::path::PathBuf>("input")
                .cloned()
                .unwrap_or_default(),
            output: matches
                .get_one::<std::path::PathBuf>("output")
                .cloned()
                .unwrap_or_default(),
            start_year: matches.get_one::<i32>("start_year").copied().unwrap_or(2001),
            end_year: matches.get_one::<i32>("end_year").copied().unwrap_or(2004),
            extension: matches
                .get_one::<String>("extension")
                .cloned()
                .unwrap_or_else(|| "html".to_string()),
            skip_missing: matches.get_flag("skip_missing"),
            check: matches.get_flag("check"),
        }
    }
}

fn command() -> clap::Command {
    clap::Command::new("babyname_ranks")
        .version("0.1.0")
        .about("Extract yearly baby-name rankings from HTML and compute rank changes to CSV")
        .arg(
            clap::Arg::new("input")
                .short('i')
                .long("input")
                .help("Directory with one {year}.html document per year")
                .required(true)
                .num_args(1)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Path of the CSV file to write")
                .required(true)
                .num_args(1)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::Arg::new("start_year")
                .short('s')
                .long("start-year")
                .help("First year to process")
                .num_args(1)
                .default_value("2001")
                .value_parser(clap::builder::ValueParser::new(parse_year)),
        )
        .arg(
            clap::Arg::new("end_year")
                .short('e')
                .long("end-year")
                .help("Last year to process (inclusive)")
                .num_args(1)
                .default_value("2004")
                .value_parser(clap::builder::ValueParser::new(parse_year)),
        )
        .arg(
            clap::Arg::new("extension")
                .short('x')
                .long("extension")
                .help("File extension of the year documents")
                .num_args(1)
                .default_value("html"),
        )
        .arg(
            clap::Arg::new("skip_missing")
                .long("skip-missing")
                .help("Skip years without a document instead of failing")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("check")
                .short('c')
                .long("check")
                .help("After writing, read the CSV back and print the first 5 records")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Validates that a year is a positive integer.
///
/// # Arguments
/// * `s` - String representation of the year.
///
/// # Returns
/// * `Result<i32>` - Validated year.
fn parse_year(s: &str) -> Result<i32, String> {
    match s.parse::<i32>() {
        Ok(n) if n <= 0 => Err("Must be a positive integer".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("Not a valid year: {}", e)),
    }
}
