//! # Crossnote CLI
//!
//! The binary is thin: argument parsing, context wiring and terminal output
//! live in `cli/`, while this file only calls `cli::run()` and turns a fatal
//! error into `Error: <message>` on stderr with exit code 1.
//!
//! ```text
//! crossnote [config.json] <command> [args]
//!
//!   create <priority> <text...>     add a record
//!   cross <id>                      cross a record out, or restore it
//!   delete <id>                     remove a record
//!   list [sort]                     every record
//!   list_nocross [sort]             records not crossed out
//!   list_cross [sort]               crossed-out records
//!
//!   sort: ask|desk@ID|Beg.Time|End.Time|Crossed|Priority|Text
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
