//! Terminal presentation shell.
//!
//! The shell is everything visible around the assistant: the rendered
//! landing sections and the careers application flow. It consumes the
//! assistant strictly through [`crate::chat::Assistant::send_message`].

mod apply;
mod sections;

pub use apply::{APPLICATION_DELAY, ApplyError, ApplyPhase, CareersBoard};
pub use sections::{
    SECTION_NAMES, careers, careers_with_status, footer, hero, mission, process, section,
    solutions, team,
};
