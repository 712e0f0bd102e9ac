use botlog::LogLevel;
use clap::{AppSettings, Parser};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const OPTIONS_PATH_VAR: &str = "BOTLOG_OPTIONS_PATH";

#[allow(clippy::doc_markdown)]
#[derive(Parser, Debug)]
#[clap(
    name = "botlog",
    version,
    long_version = long_version_output(),
    verbatim_doc_comment,
    setting(AppSettings::DeriveDisplayOrder),
    setting(AppSettings::AllArgsOverrideSelf)
)]
/**
Emit a message through a bot logger built from the given settings.

## Usage examples

    botlog info "bot started"
      Nothing is printed, logging is disabled by default.

    botlog --enable info "bot started"
      Print the message through the default logger.

    botlog --enable --level warn info "bot started"
      Nothing is printed, the message is below the warn floor.

    botlog --enable --passthrough --prefix "[CUSTOM] " debug "raw"
      Hand the message to an unleveled writer with its own prefix.

    botlog --enable fatal "cannot continue"
      Print the message and exit with status 1.

## Options file

    Set `BOTLOG_OPTIONS_PATH` to a file with default options, one or more
    per line. Lines starting with the number symbol (#) are ignored.
    Options given on the command line take precedence.

         # Always log with a prefix
         --enable
         --prefix [bot]
*/
pub struct Options {
    /// Enable logging. Without it every message is discarded
    #[clap(long, help_heading = "LOGGING")]
    pub enable: bool,

    /// Minimum severity written by the default logger
    #[clap(long, default_value = "debug", help_heading = "LOGGING")]
    pub level: LogLevel,

    /// Prefix for every line
    #[clap(long, default_value = "", help_heading = "LOGGING")]
    pub prefix: String,

    /// Write through an unleveled external writer instead of the default logger
    #[clap(long, help_heading = "LOGGING")]
    pub passthrough: bool,

    /// Disable the timestamp on every line
    #[clap(long = "no-timestamps", help_heading = "OUTPUT", parse(from_flag = std::ops::Not::not))]
    pub timestamps: bool,

    /// Enable color output
    #[clap(long = "color", help_heading = "OUTPUT")]
    pub color: bool,

    /// Disable color output
    #[clap(long = "no-color", help_heading = "OUTPUT")]
    pub no_color: bool,

    /// Prints debug information about the selected logger
    #[clap(long, help_heading = "OUTPUT")]
    pub debug: bool,

    /// Number of times to emit the message
    #[clap(long, default_value = "1", help_heading = "OUTPUT")]
    pub repeat: usize,

    /// Severity of the message
    #[clap(name = "severity")]
    pub severity: LogLevel,

    /// Message to emit
    #[clap(name = "message")]
    pub message: String,
}

impl Options {
    /// Return color config option value
    pub fn color(&self) -> bool {
        if self.no_color {
            return false;
        }
        self.color
    }
}

pub fn fetch_options() -> Options {
    let cli_opts = cli_options();
    match file_options(env::var(OPTIONS_PATH_VAR)) {
        Some((path, file_opts)) => parse_merged_options(&path, &file_opts, &cli_opts),
        None => Options::parse_from(cli_opts),
    }
}

// Return unparsed CLI options and flags
fn cli_options() -> Vec<String> {
    env::args_os()
        .filter_map(|a| match a.into_string() {
            Ok(s) => Some(s),
            Err(e) => {
                eprintln!("Unable to parse CLI argument: '{:?}'", e);
                None
            }
        })
        .collect::<Vec<String>>()
}

// Return unparsed options file options and flags
fn file_options(env_path: Result<String, env::VarError>) -> Option<(PathBuf, Vec<String>)> {
    match env_path {
        Ok(value) => {
            let path = Path::new(&value);
            if path.is_file() {
                match fs::read_to_string(path) {
                    Ok(contents) => Some((path.to_path_buf(), parse_options_file(&contents))),
                    Err(e) => {
                        eprintln!("ERROR: botlog options file could not be read: {}", e);
                        None
                    }
                }
            } else {
                eprintln!(
                    "ERROR: Configured {} does not exist or is not a file. Path: '{}'",
                    OPTIONS_PATH_VAR,
                    path.display()
                );
                None
            }
        }
        Err(_) => None,
    }
}

fn parse_options_file(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(str::to_string))
        .collect::<Vec<String>>()
}

// File options go first so the same flags given on the command line override them.
fn merge_options(file_opts: &[String], cli_opts: &[String]) -> Vec<String> {
    let mut opts = vec!["botlog".to_string()];
    opts.extend(file_opts.iter().cloned());
    opts.extend(cli_opts.iter().skip(1).cloned());
    opts
}

fn parse_merged_options(path: &Path, file_opts: &[String], cli_opts: &[String]) -> Options {
    match Options::try_parse_from(merge_options(file_opts, cli_opts)) {
        Ok(opts) => opts,
        Err(e) => {
            if e.kind() != clap::error::ErrorKind::DisplayHelp
                && e.kind() != clap::error::ErrorKind::DisplayVersion
            {
                eprintln!("ERROR: Error parsing options with options file: {:?}", path);
            }
            e.exit()
        }
    }
}

// Print the long version label including the target for which it was built
fn long_version_output() -> &'static str {
    concat!(
        clap::crate_version!(),
        "\n",
        env!("BOTLOG_BUILD_TARGET_TRIPLE")
    )
}

#[cfg(test)]
mod tests {
    use super::{file_options, merge_options, parse_options_file, Options};
    use botlog::LogLevel;
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};

    const TEST_DIR: &str = "tmp/tests/options";

    fn test_dir(name: &str) -> PathBuf {
        let dir = Path::new(TEST_DIR).join(name);
        if dir.exists() {
            fs::remove_dir_all(&dir).expect("Could not remove test dir");
        }
        fs::create_dir_all(&dir).expect("Could not create test dir");
        dir
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let opts = Options::parse_from(["botlog", "info", "hello"]);
        assert!(!opts.enable);
        assert_eq!(opts.level, LogLevel::Debug);
        assert_eq!(opts.prefix, "");
        assert!(!opts.passthrough);
        assert!(opts.timestamps);
        assert!(!opts.color());
        assert_eq!(opts.repeat, 1);
        assert_eq!(opts.severity, LogLevel::Info);
        assert_eq!(opts.message, "hello");
    }

    #[test]
    fn logging_flags() {
        let opts = Options::parse_from([
            "botlog",
            "--enable",
            "--level",
            "warn",
            "--prefix",
            "[bot] ",
            "--no-timestamps",
            "--repeat",
            "3",
            "fatal",
            "bye",
        ]);
        assert!(opts.enable);
        assert_eq!(opts.level, LogLevel::Warn);
        assert_eq!(opts.prefix, "[bot] ");
        assert!(!opts.timestamps);
        assert_eq!(opts.repeat, 3);
        assert_eq!(opts.severity, LogLevel::Fatal);
    }

    #[test]
    fn color_flags() {
        // Both color flags set, but --no-color is leading
        assert!(!Options::parse_from(["botlog", "--color", "--no-color", "info", "m"]).color());

        // Only --color is set
        assert!(Options::parse_from(["botlog", "--color", "info", "m"]).color());

        // No flags are set
        assert!(!Options::parse_from(["botlog", "info", "m"]).color());
    }

    #[test]
    fn levels_parse_case_insensitively() {
        let opts = Options::parse_from(["botlog", "--level", "WARN", "Error", "m"]);
        assert_eq!(opts.level, LogLevel::Warn);
        assert_eq!(opts.severity, LogLevel::Error);
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(Options::try_parse_from(["botlog", "--level", "verbose", "info", "m"]).is_err());
        assert!(Options::try_parse_from(["botlog", "loud", "m"]).is_err());
    }

    #[test]
    fn merge_lets_cli_override_file() {
        let merged = merge_options(
            &strings(&["--enable", "--level", "error"]),
            &strings(&["botlog", "--level", "info", "warn", "hello"]),
        );
        assert_eq!(
            merged,
            strings(&["botlog", "--enable", "--level", "error", "--level", "info", "warn", "hello"])
        );

        let opts = Options::parse_from(merged);
        assert!(opts.enable);
        assert_eq!(opts.level, LogLevel::Info);
        assert_eq!(opts.severity, LogLevel::Warn);
    }

    #[test]
    fn options_file_valid() {
        let dir = test_dir("options_file_valid");
        let env_path = dir.join("options.txt");
        fs::write(&env_path, b"--enable\n--level warn --no-timestamps").unwrap();

        let (path, options) =
            file_options(Ok(env_path.as_path().display().to_string())).expect("No options");
        assert_eq!(path, env_path);
        assert_eq!(options, vec!["--enable", "--level", "warn", "--no-timestamps"]);
    }

    #[test]
    fn options_file_invalid() {
        let env_path = PathBuf::from("does_not_exist_options.txt");

        assert_eq!(file_options(Ok(env_path.as_path().display().to_string())), None);
    }

    #[test]
    fn options_file_none() {
        assert_eq!(file_options(Err(std::env::VarError::NotPresent)), None);
    }

    #[test]
    fn parse_options_file_multi_line() {
        let options = parse_options_file("--enable\n--no-color\n--passthrough");
        assert_eq!(options, vec!["--enable", "--no-color", "--passthrough"]);
    }

    #[test]
    fn parse_options_file_single_line() {
        let options = parse_options_file("--enable --no-color  --passthrough");
        assert_eq!(options, vec!["--enable", "--no-color", "--passthrough"]);
    }

    #[test]
    fn parse_options_file_ignore_comments() {
        let options = parse_options_file("# Turn it on\n--enable\n  # Floor\n--level error\n");
        assert_eq!(options, vec!["--enable", "--level", "error"]);
    }
}
