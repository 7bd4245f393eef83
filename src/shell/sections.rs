//! Landing sections rendered as monochrome text.
//!
//! Every section is assembled from the catalog in [`crate::content`]; the
//! first line of each rendered section is its heading.

use crate::content;
use crate::shell::{ApplyPhase, CareersBoard};

const RULE: &str = "────────────────────────────────────────";

/// Section names accepted by [`section`].
pub const SECTION_NAMES: &[&str] = &[
    "hero", "mission", "solutions", "process", "team", "careers", "footer",
];

/// Renders the named section, or `None` for an unknown name.
pub fn section(name: &str) -> Option<String> {
    match name {
        "hero" => Some(hero()),
        "mission" => Some(mission()),
        "solutions" => Some(solutions()),
        "process" => Some(process()),
        "team" => Some(team()),
        "careers" => Some(careers()),
        "footer" => Some(footer()),
        _ => None,
    }
}

/// The hero block.
pub fn hero() -> String {
    format!(
        "AZMTH\n{RULE}\n{}\nREMOTE · GLOBAL\n",
        content::STRAPLINE
    )
}

/// Vision and mission copy.
pub fn mission() -> String {
    format!(
        "VISION / MISSION\n{RULE}\nVISION: {}\n\n{}\n",
        content::VISION,
        content::MISSION
    )
}

/// The shipped product lines.
pub fn solutions() -> String {
    let mut out = format!("SOLUTIONS\n{RULE}\n");
    for service in content::SERVICES {
        out.push_str(&format!(
            "{}  {}\n  {}\n  {}\n\n",
            service.phase, service.title, service.domain, service.description
        ));
    }
    out
}

/// The delivery process.
pub fn process() -> String {
    let mut out = format!("PROCESS\n{RULE}\n");
    for (title, description) in content::PROCESS {
        out.push_str(&format!("{title}\n  {description}\n\n"));
    }
    out
}

/// The unit.
pub fn team() -> String {
    let mut out = format!("TEAM\n{RULE}\n");
    for member in content::TEAM {
        out.push_str(&format!("{:<12} {}\n", member.name, member.role));
    }
    out
}

/// Open positions, numbered for `/apply`.
pub fn careers() -> String {
    let mut out = format!("CAREERS\n{RULE}\n");
    for (index, listing) in content::CAREERS.iter().enumerate() {
        let marker = if listing.highlight { "*" } else { " " };
        out.push_str(&format!(
            "[{}]{marker}{} ({})\n   {}\n   {}\n\n",
            index + 1,
            listing.role,
            listing.location,
            listing.stack,
            listing.description
        ));
    }
    out.push_str("Apply with /apply <n>.\n");
    out
}

/// Open positions with the session's application status.
pub fn careers_with_status(board: &CareersBoard) -> String {
    let mut out = format!("CAREERS\n{RULE}\n");
    for (index, listing) in content::CAREERS.iter().enumerate() {
        let status = match board.phase(index) {
            Some(ApplyPhase::Submitting) => "TRANSMITTING",
            Some(ApplyPhase::Submitted) => "APPLIED",
            _ => "OPEN",
        };
        out.push_str(&format!(
            "[{}] {} ({}) :: {status}\n",
            index + 1,
            listing.role,
            listing.location
        ));
    }
    out
}

/// The footer marquee.
pub fn footer() -> String {
    format!(
        "AZMTH STUDIO\n{RULE}\n{}\n",
        content::TAGLINES.join(" · ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_named_section_renders() {
        for name in SECTION_NAMES {
            let rendered = section(name).unwrap_or_else(|| panic!("section {name} missing"));
            assert!(!rendered.is_empty());
        }
        assert_eq!(section("pricing"), None);
    }

    #[test]
    fn solutions_lists_all_phases() {
        let rendered = solutions();
        for service in content::SERVICES {
            assert!(rendered.contains(service.phase));
            assert!(rendered.contains(service.title));
        }
    }

    #[test]
    fn careers_numbers_listings_from_one() {
        let rendered = careers();
        assert!(rendered.contains("[1]"));
        assert!(rendered.contains(&format!("[{}]", content::CAREERS.len())));
        assert!(rendered.contains("/apply"));
    }

    #[test]
    fn careers_status_reflects_board() {
        let mut board = CareersBoard::new(content::CAREERS.len());
        board.begin(1).unwrap();
        let rendered = careers_with_status(&board);
        assert!(rendered.contains("TRANSMITTING"));
        assert!(rendered.contains("OPEN"));
    }

    #[test]
    fn team_names_everyone() {
        let rendered = team();
        for member in content::TEAM {
            assert!(rendered.contains(member.name));
        }
    }
}
