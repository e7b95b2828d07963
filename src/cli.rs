//! Command line options of the `part` program.
//!
//! ```text
//! -n{1,2,...}       size n of the integer/set (mandatory)
//! -m{1,2,...,n}     number of parts/subsets
//! -l{-1,0,1,2,...}  number of partitions to list; -1 for all
//! -a{0,1}           integer partitions (0, default), set partitions (1)
//! -h                display this help
//! ```

use clap::{App, AppSettings, Arg, ArgMatches, ErrorKind};
use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;

use crate::listing::{Kind, Request};

/// What the command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print this help text and exit successfully
    Help(String),
    /// List partitions
    List(Request),
}

/// Rejected command lines. All of them exit with status 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// A mandatory option is absent
    MissingRequiredOption(char),
    /// An option value is malformed or outside its range
    OutOfRange {
        /// The option
        option: char,
        /// Description of the accepted values
        expected: &'static str,
    },
    /// An option that does not exist
    UnrecognizedOption(String),
    /// An option given without its value
    MissingOperand(String),
    /// Any other rejection, with the parser's message
    Invalid(String),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UsageError::MissingRequiredOption(option) => write!(f, "option -{} is mandatory", option),
            UsageError::OutOfRange { option, expected } => {
                write!(f, "option -{} must be followed by {}", option, expected)
            }
            UsageError::UnrecognizedOption(option) => write!(f, "unrecognized option {}", option),
            UsageError::MissingOperand(option) => write!(f, "option -{} requires an operand", option),
            UsageError::Invalid(why) => write!(f, "{}", why),
        }
    }
}

impl std::error::Error for UsageError {}

impl From<clap::Error> for UsageError {
    fn from(err: clap::Error) -> UsageError {
        let arg = err.info.as_ref().and_then(|info| info.first()).cloned();
        match (err.kind, arg) {
            (ErrorKind::UnknownArgument, Some(arg)) => UsageError::UnrecognizedOption(arg),
            (ErrorKind::EmptyValue, Some(arg)) => UsageError::MissingOperand(arg),
            _ => UsageError::Invalid(err.message),
        }
    }
}

const EXPECTED_N: &str = "an integer from {1,2,...}";
const EXPECTED_M: &str = "an integer from {1,2,...,n}";
const EXPECTED_L: &str = "an integer from {-1,0,1,2,...}";
const EXPECTED_A: &str = "0 or 1";

/// Builds the argument parser
pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("part")
        .about("generate integer/set partitions")
        .setting(AppSettings::DisableVersion)
        .setting(AppSettings::UnifiedHelpMessage)
        .arg(Arg::with_name("n")
            .short("n")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1)
            .allow_hyphen_values(true)
            .value_name("1,2,...")
            .help("size n of the integer/set"))
        .arg(Arg::with_name("m")
            .short("m")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1)
            .allow_hyphen_values(true)
            .value_name("1,2,...,n")
            .help("number of parts/subsets"))
        .arg(Arg::with_name("l")
            .short("l")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1)
            .allow_hyphen_values(true)
            .value_name("-1,0,1,2,...")
            .help("number of partitions to list; -1 for all"))
        .arg(Arg::with_name("a")
            .short("a")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1)
            .allow_hyphen_values(true)
            .value_name("0,1")
            .help("integer partitions (0, default), set partitions (1)"))
        .after_help("EXAMPLES:\n    part -n8 -a0\n    part -n8 -m3 -a0\n    part -n5 -a1")
}

/// Returns the help text
pub fn help() -> String {
    let mut buf = Vec::new();
    match app().write_help(&mut buf) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(why) => why.message,
    }
}

fn value<T: FromStr>(matches: &ArgMatches, option: char, expected: &'static str) -> Result<Option<T>, UsageError> {
    let name = option.to_string();
    // getopt style: the last occurrence wins
    match matches.values_of(&name).and_then(|v| v.last()) {
        None => Ok(None),
        Some(v) => v.trim().parse::<T>()
            .map(Some)
            .map_err(|_| UsageError::OutOfRange {option, expected}),
    }
}

/// Parses a full command line, program name first.
pub fn parse<I, S>(args: I) -> Result<Command, UsageError>
    where I: IntoIterator<Item = S>, S: Into<OsString> + Clone
{
    let matches = match app().get_matches_from_safe(args) {
        Ok(matches) => matches,
        Err(err) => {
            if err.kind == ErrorKind::HelpDisplayed {
                return Ok(Command::Help(err.message));
            }
            return Err(err.into());
        }
    };

    let out_of_range = |option, expected| UsageError::OutOfRange {option, expected};

    let n = match value::<i64>(&matches, 'n', EXPECTED_N)? {
        None => return Err(UsageError::MissingRequiredOption('n')),
        Some(n) if n < 1 => return Err(out_of_range('n', EXPECTED_N)),
        Some(n) => usize::try_from(n).map_err(|_| out_of_range('n', EXPECTED_N))?,
    };

    let limit = match value::<i64>(&matches, 'l', EXPECTED_L)? {
        None | Some(-1) => None,
        Some(l) if l < -1 => return Err(out_of_range('l', EXPECTED_L)),
        Some(l) => Some(u64::try_from(l).map_err(|_| out_of_range('l', EXPECTED_L))?),
    };

    let kind = match value::<i64>(&matches, 'a', EXPECTED_A)? {
        None | Some(0) => Kind::Integer,
        Some(1) => Kind::Set,
        Some(_) => return Err(out_of_range('a', EXPECTED_A)),
    };

    let parts = match value::<i64>(&matches, 'm', EXPECTED_M)? {
        None => None,
        Some(m) if m < 1 || m as u64 > n as u64 => return Err(out_of_range('m', EXPECTED_M)),
        Some(m) => Some(m as usize),
    };

    Ok(Command::List(Request {n, parts, limit, kind}))
}
