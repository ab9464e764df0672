use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

const SORT_HELP: &str =
    "Sort order: ask|desk@ID|Beg.Time|End.Time|Crossed|Priority|Text (default: file order)";

#[derive(Parser, Debug)]
#[command(name = "crossnote", bin_name = "crossnote", version)]
#[command(
    about = "Keep a task list in a flat file: create, cross out, delete and list records",
    long_about = None,
    after_help = "A JSON config file may also be given as the first argument:\n  crossnote my-config.json list desk@Priority"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON configuration file (separators, file name, colors)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create a new record
    Create {
        /// Priority (non-negative integer)
        priority: u64,

        /// Record text (words are joined with spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Cross out a record, or restore a crossed-out one
    Cross {
        /// ID of the record
        id: u64,
    },

    /// Delete a record
    Delete {
        /// ID of the record
        id: u64,
    },

    /// List all records
    List {
        #[arg(help = SORT_HELP)]
        sort: Option<String>,
    },

    /// List records that are not crossed out
    #[command(name = "list_nocross")]
    ListNoCross {
        #[arg(help = SORT_HELP)]
        sort: Option<String>,
    },

    /// List crossed-out records
    #[command(name = "list_cross")]
    ListCross {
        #[arg(help = SORT_HELP)]
        sort: Option<String>,
    },
}

/// Pulls a leading `*.json` argument out of `args` (program name first) so
/// `crossnote conf.json list` works alongside `--config conf.json`.
pub fn split_config_arg(mut args: Vec<OsString>) -> (Option<PathBuf>, Vec<OsString>) {
    let is_config = args
        .get(1)
        .and_then(|a| a.to_str())
        .map(|a| a.ends_with(".json"))
        .unwrap_or(false);

    if is_config {
        let path = PathBuf::from(args.remove(1));
        (Some(path), args)
    } else {
        (None, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn create_joins_text_words() {
        let cli = parse(&["crossnote", "create", "3", "buy", "oat", "milk"]);
        match cli.command {
            Commands::Create { priority, text } => {
                assert_eq!(priority, 3);
                assert_eq!(text.join(" "), "buy oat milk");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn create_accepts_dash_leading_text() {
        let cli = parse(&["crossnote", "create", "1", "-", "dash", "note"]);
        assert!(matches!(cli.command, Commands::Create { .. }));
    }

    #[test]
    fn create_requires_text() {
        assert!(Cli::try_parse_from(["crossnote", "create", "3"]).is_err());
        assert!(Cli::try_parse_from(["crossnote", "create", "high", "x"]).is_err());
    }

    #[test]
    fn id_commands_require_numeric_id() {
        assert_eq!(
            parse(&["crossnote", "cross", "7"]).command,
            Commands::Cross { id: 7 }
        );
        assert_eq!(
            parse(&["crossnote", "delete", "2"]).command,
            Commands::Delete { id: 2 }
        );
        assert!(Cli::try_parse_from(["crossnote", "cross"]).is_err());
        assert!(Cli::try_parse_from(["crossnote", "delete", "two"]).is_err());
    }

    #[test]
    fn list_variants_take_optional_sort() {
        assert_eq!(
            parse(&["crossnote", "list"]).command,
            Commands::List { sort: None }
        );
        assert_eq!(
            parse(&["crossnote", "list_nocross", "ask@ID"]).command,
            Commands::ListNoCross {
                sort: Some("ask@ID".into())
            }
        );
        assert_eq!(
            parse(&["crossnote", "list_cross", "desk@End.Time"]).command,
            Commands::ListCross {
                sort: Some("desk@End.Time".into())
            }
        );
    }

    #[test]
    fn unknown_or_missing_command_is_an_error() {
        assert!(Cli::try_parse_from(["crossnote"]).is_err());
        assert!(Cli::try_parse_from(["crossnote", "archive", "1"]).is_err());
    }

    #[test]
    fn global_flags_parse_after_the_command() {
        let cli = parse(&["crossnote", "list", "--config", "c.json", "-v"]);
        assert_eq!(cli.config, Some(PathBuf::from("c.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn leading_json_argument_is_the_config() {
        let (config, rest) = split_config_arg(os(&["crossnote", "my.json", "list"]));
        assert_eq!(config, Some(PathBuf::from("my.json")));
        assert_eq!(rest, os(&["crossnote", "list"]));
    }

    #[test]
    fn other_arguments_are_left_alone() {
        let args = os(&["crossnote", "create", "1", "notes.json"]);
        let (config, rest) = split_config_arg(args.clone());
        assert_eq!(config, None);
        assert_eq!(rest, args);

        let (config, rest) = split_config_arg(os(&["crossnote"]));
        assert_eq!(config, None);
        assert_eq!(rest.len(), 1);
    }
}
