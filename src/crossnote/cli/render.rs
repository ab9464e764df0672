use colored::Colorize;
use crossnote::api::{CmdMessage, CmdResult, MessageLevel};
use crossnote::layout::Layout;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_listing(layout: &Layout, result: &CmdResult) {
    print!(
        "{}",
        layout.render(result.total_records, &result.listed_records)
    );
}
