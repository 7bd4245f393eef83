//! Renders the AZMTH landing sections to the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Print the whole landing page
//! azmth-studio
//!
//! # Print a single section
//! azmth-studio --section careers
//! ```

use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use azmth::shell::{SECTION_NAMES, section};

/// Command-line arguments for the azmth-studio tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
struct StudioArgs {
    /// Render a single section instead of the whole page.
    #[arrrg(
        optional,
        "Render one section (hero, mission, solutions, process, team, careers, footer)",
        "SECTION"
    )]
    section: Option<String>,
}

fn main() {
    let (args, _) = StudioArgs::from_command_line_relaxed("azmth-studio [OPTIONS]");

    match args.section {
        Some(name) => match section(&name) {
            Some(rendered) => print!("{rendered}"),
            None => {
                eprintln!(
                    "unknown section {name:?}; expected one of: {}",
                    SECTION_NAMES.join(", ")
                );
                std::process::exit(1);
            }
        },
        None => {
            for (position, name) in SECTION_NAMES.iter().enumerate() {
                if position > 0 {
                    println!();
                }
                if let Some(rendered) = section(name) {
                    print!("{rendered}");
                }
            }
        }
    }
}
