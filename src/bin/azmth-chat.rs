//! Interactive concierge for the AZMTH studio terminal.
//!
//! This binary provides a REPL interface for talking to AZMTH OS, the
//! studio's assistant, and for browsing the landing sections.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with default settings
//! azmth-chat
//!
//! # Specify a model
//! azmth-chat --model gemini-2.5-pro
//!
//! # Disable colors (useful for piping output)
//! azmth-chat --no-color
//! ```
//!
//! Without an AZMTH_API_KEY in the environment the concierge still runs;
//! every message is answered with the offline sentinel.
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/solutions`, `/process`, `/team`, `/careers` - Browse the studio
//! - `/apply <n>` - Apply for a career listing
//! - `/save [file]` - Save the visit transcript
//! - `/clear` - Clear conversation history
//! - `/stats` - Show session statistics
//! - `/quit` - Exit the concierge

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use azmth::chat::{
    Assistant, ChatArgs, ChatCommand, ChatConfig, Transcript, help_text, parse_command,
};
use azmth::shell::{self, ApplyPhase, CareersBoard};
use azmth::{PlainTextRenderer, Renderer, content};

/// Main entry point for the azmth-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("azmth-chat [OPTIONS]");
    let config = ChatConfig::from(args);
    let use_color = config.use_color;
    let model = config.model.clone();
    let default_transcript_path = config.transcript_path.clone();

    let assistant = Assistant::from_env(config);
    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;
    let mut board = CareersBoard::new(content::CAREERS.len());
    let mut transcript = Transcript::new();

    println!("AZMTH OS (model: {model})");
    if !assistant.is_online() {
        renderer.print_info("SYSTEM OFFLINE. Set AZMTH_API_KEY to go online.");
    }
    println!("Type /help for commands, /quit to exit\n");

    loop {
        let readline = rl.readline("you: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Session closed.");
                            break;
                        }
                        ChatCommand::Clear => {
                            assistant.clear().await;
                            transcript = Transcript::new();
                            renderer.print_info("Conversation cleared.");
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Solutions => {
                            renderer.print_section(&shell::solutions());
                        }
                        ChatCommand::Process => {
                            renderer.print_section(&shell::process());
                        }
                        ChatCommand::Team => {
                            renderer.print_section(&shell::team());
                        }
                        ChatCommand::Careers => {
                            renderer.print_section(&shell::careers_with_status(&board));
                        }
                        ChatCommand::Apply(number) => {
                            handle_apply(&mut board, number, &mut renderer).await;
                        }
                        ChatCommand::Save(path) => {
                            let path = path
                                .map(std::path::PathBuf::from)
                                .or_else(|| default_transcript_path.clone());
                            match path {
                                Some(path) => match transcript.save_to(&path) {
                                    Ok(_) => renderer.print_info(&format!(
                                        "Transcript saved to {}",
                                        path.display()
                                    )),
                                    Err(err) => renderer.print_error(&format!(
                                        "Failed to save transcript: {}",
                                        err
                                    )),
                                },
                                None => renderer.print_error(
                                    "/save requires a file path (or start with --transcript)",
                                ),
                            }
                        }
                        ChatCommand::Stats => {
                            print_stats(&assistant, &transcript, &board).await;
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Regular message - send to the assistant
                transcript.push_visitor(line);
                let reply = assistant.send_message(line).await;
                println!("azmth-os:");
                renderer.print_assistant(&reply);
                transcript.push_assistant(&reply);
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nSession closed.");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

async fn handle_apply(board: &mut CareersBoard, number: usize, renderer: &mut PlainTextRenderer) {
    let Some(index) = number.checked_sub(1) else {
        renderer.print_error("listing numbers start at 1");
        return;
    };
    let Some(listing) = content::CAREERS.get(index) else {
        renderer.print_error(&format!("no listing #{number}"));
        return;
    };

    if board.phase(index) == Some(ApplyPhase::Idle) {
        renderer.print_info(&format!("TRANSMITTING APPLICATION // {}", listing.role));
    }
    match board.submit(index).await {
        Ok(()) => {
            renderer.print_info(&format!("APPLICATION RECEIVED // {} [LOCKED]", listing.role));
        }
        Err(err) => {
            renderer.print_error(&err.to_string());
        }
    }
}

async fn print_stats(
    assistant: &Assistant,
    transcript: &Transcript,
    board: &CareersBoard,
) {
    println!("    Session Statistics:");
    println!(
        "      Status: {}",
        if assistant.is_online() {
            "ONLINE"
        } else {
            "OFFLINE"
        }
    );
    println!("      Conversation turns: {}", assistant.turn_count().await);
    println!("      Transcript entries: {}", transcript.len());
    println!("      Applications submitted: {}", board.submitted_count());
}
