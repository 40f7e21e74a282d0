//! Terminal rendering for pipeline outcomes

use colored::Colorize;
use voicecmd::{CommandOutcome, Language};

/// Print the welcome banner
pub fn print_banner(language: Language) {
    println!();
    println!(
        "{}",
        "╔═══════════════════════════════════════════════╗".bright_cyan()
    );
    println!(
        "{}",
        "║        Echolist Voice Todo Assistant          ║".bright_cyan()
    );
    println!(
        "{}",
        "╚═══════════════════════════════════════════════╝".bright_cyan()
    );
    println!(
        "  Language: {}   Type {} for commands, {} to quit",
        language.tag().bright_white(),
        "/help".bright_yellow(),
        "/exit".bright_yellow()
    );
    println!();
}

/// Print a pipeline outcome, green for success and red for failure.
pub fn print_outcome(outcome: &CommandOutcome) {
    if outcome.success {
        println!("{}", outcome.message.green());
    } else {
        println!("{}", outcome.message.red());
    }
}

/// Print the /help text
pub fn print_help() {
    println!("{}", "Slash commands:".bright_white());
    println!("  {}          Show the current todo list", "/list".bright_yellow());
    println!("  {}  Switch recognition language", "/lang en|ur".bright_yellow());
    println!("  {}          Show this help", "/help".bright_yellow());
    println!("  {}          Quit", "/exit".bright_yellow());
    println!();
    println!("{}", "Anything else is treated as a voice transcript:".bright_white());
    println!("  add todo: Buy milk");
    println!("  complete todo: Buy milk");
    println!("  delete todo: Buy milk");
    println!("  show pending todos");
    println!("  نیا کام: دودھ خریدیں");
}
