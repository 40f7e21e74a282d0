//! Interactive REPL for Echolist
//!
//! Each non-slash line is fed to the pipeline as a finalized transcript,
//! one at a time, mirroring the one-utterance-in-flight discipline a
//! microphone-driven host enforces.

use anyhow::Result;
use colored::Colorize;
use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};
use voicecmd::{Language, VoicePipeline};

use crate::output;

/// Interactive REPL over a voice pipeline
pub struct EcholistRepl {
    pipeline: VoicePipeline,
    editor: Editor<(), DefaultHistory>,
}

impl EcholistRepl {
    pub fn new(pipeline: VoicePipeline) -> Result<Self> {
        let editor = Editor::new()?;
        Ok(Self { pipeline, editor })
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> Result<()> {
        output::print_banner(self.pipeline.language());

        loop {
            let prompt = format!("{} ", "❯".bright_cyan());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(&line);

                    if let Some(command) = line.strip_prefix('/') {
                        if !self.handle_slash_command(command).await {
                            break;
                        }
                        continue;
                    }

                    let outcome = self.pipeline.handle_transcript(&line).await;
                    output::print_outcome(&outcome);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "(interrupted, /exit to quit)".bright_black());
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("{} {}", "Input error:".red(), err);
                    break;
                }
            }
        }

        println!("{}", "Goodbye!".bright_cyan());
        Ok(())
    }

    /// Handle a slash command; returns false when the REPL should exit.
    async fn handle_slash_command(&mut self, command: &str) -> bool {
        let mut parts = command.split_whitespace();
        match parts.next() {
            Some("exit") | Some("quit") => return false,
            Some("help") => output::print_help(),
            Some("list") => {
                // Reuse the pipeline so /list and "show my todos" agree
                let outcome = self.pipeline.handle_transcript(match self.pipeline.language() {
                    Language::En => "show my todos",
                    Language::Ur => "کام دکھائیں",
                })
                .await;
                output::print_outcome(&outcome);
            }
            Some("lang") => match parts.next().map(str::parse::<Language>) {
                Some(Ok(language)) => {
                    self.pipeline.set_language(language);
                    println!("Language set to {}", language.tag().bright_white());
                }
                _ => println!("{}", "Usage: /lang en|ur".red()),
            },
            _ => println!("{}", "Unknown command, try /help".red()),
        }
        true
    }
}
