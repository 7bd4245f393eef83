//! Studio catalog: the presentation data the front-of-house renders and the
//! assistant references.
//!
//! One source of truth: the landing sections and the assistant's system
//! instruction are both assembled from the constants in this module.

/// A shipped product line in the studio portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceItem {
    /// Phase tag, e.g. `PHASE 01`.
    pub phase: &'static str,
    /// Product title.
    pub title: &'static str,
    /// Short subtitle.
    pub subtitle: &'static str,
    /// Technology domain line.
    pub domain: &'static str,
    /// One-paragraph description.
    pub description: &'static str,
}

/// A member of the studio unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    /// Display name.
    pub name: &'static str,
    /// Role within the unit.
    pub role: &'static str,
}

/// An open position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerListing {
    /// Role title.
    pub role: &'static str,
    /// Where the role is based.
    pub location: &'static str,
    /// Expected stack.
    pub stack: &'static str,
    /// One-paragraph pitch.
    pub description: &'static str,
    /// Whether the listing is featured.
    pub highlight: bool,
}

/// The shipped product lines, in phase order.
pub const SERVICES: &[ServiceItem] = &[
    ServiceItem {
        phase: "PHASE 01",
        title: "AI Calling System",
        subtitle: "Automated voice infrastructure",
        domain: "Twilio + Voice AI + Backend",
        description: "A robust AI calling infrastructure integrating Twilio telephony and \
                      advanced AI backends for seamless automated voice interactions.",
    },
    ServiceItem {
        phase: "PHASE 02",
        title: "StudyLab",
        subtitle: "College social app",
        domain: "Next.js + Clerk + MongoDB + PostHog",
        description: "A comprehensive social platform designed for student collaboration, \
                      featuring secure auth and real-time analytics.",
    },
    ServiceItem {
        phase: "PHASE 03",
        title: "Realtime Call Agent",
        subtitle: "Low-latency voice agent",
        domain: "Flask + Twilio + Groq",
        description: "Ultra-low latency voice agent architecture built on Flask and \
                      WebSockets, utilizing Groq for immediate inference.",
    },
    ServiceItem {
        phase: "PHASE 04",
        title: "Meal Tracker App",
        subtitle: "Mobile nutrition",
        domain: "Expo + MMKV + Notifications",
        description: "High-performance mobile application with instant local storage and \
                      smart notification loops.",
    },
    ServiceItem {
        phase: "PHASE 05",
        title: "Remind Me App",
        subtitle: "Schedule + voice + widget",
        domain: "React Native + Express + MongoDB",
        description: "A complete productivity ecosystem featuring voice input processing \
                      and interactive home screen widgets.",
    },
    ServiceItem {
        phase: "PHASE 06",
        title: "Compliance Agent",
        subtitle: "Industry automation",
        domain: "AI Retrieval + LLM + Knowledge Graph",
        description: "Autonomous agent architecture for verifying complex industrial \
                      compliance standards.",
    },
];

/// The studio unit.
pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "J. VOSS",
        role: "PRINCIPAL ARCHITECT",
    },
    TeamMember {
        name: "A. CHEN",
        role: "SYSTEMS LEAD",
    },
    TeamMember {
        name: "M. REYES",
        role: "AI ENGINEER",
    },
    TeamMember {
        name: "S. PATEL",
        role: "DEVOPS SPECIALIST",
    },
];

/// Open positions, in listing order.
pub const CAREERS: &[CareerListing] = &[
    CareerListing {
        role: "Systems Architect",
        location: "REMOTE",
        stack: "Rust / Go / K8s / Distributed Systems",
        description: "Design the invisible engines. We need low-level expertise to build \
                      high-availability infrastructure that scales without thought.",
        highlight: false,
    },
    CareerListing {
        role: "Senior AI Engineer",
        location: "REMOTE",
        stack: "Python / PyTorch / RAG / LLM Ops",
        description: "Move beyond prompts. Build autonomous agentic workflows, custom \
                      retrieval pipelines, and fine-tuned models for industry compliance.",
        highlight: true,
    },
    CareerListing {
        role: "Frontend Craftsperson",
        location: "REMOTE",
        stack: "React / WebGL / Motion / TypeScript",
        description: "Engineering-grade UI. You understand that performance is a feature \
                      and that smooth, 60fps interaction is non-negotiable.",
        highlight: false,
    },
];

/// Marquee taglines.
pub const TAGLINES: &[&str] = &[
    "SYSTEMS OVER HYPE",
    "RELIABLE INFRASTRUCTURE",
    "AI AUTOMATION",
    "CLEAR ARCHITECTURE",
    "OPERATIONAL EXECUTION",
    "SHIP OBSERVE IMPROVE",
];

/// The studio's delivery process, in order.
pub const PROCESS: &[(&str, &str)] = &[
    (
        "01 / SIGNAL",
        "Strip the brief to its operational core. What must the system do, \
         under what load, at what cost of failure.",
    ),
    (
        "02 / ARCHITECTURE",
        "Design the smallest structure that satisfies the signal. Boundaries \
         first, dependencies second, code last.",
    ),
    (
        "03 / DEPLOYMENT",
        "Ship behind instrumentation. Every release is observable from the \
         first request it serves.",
    ),
    (
        "04 / OBSERVATION",
        "Measure, tighten, repeat. Throughput and latency budgets are held, \
         not hoped for.",
    ),
];

/// Hero strapline.
pub const STRAPLINE: &str = "A monochrome systems engineering studio";

/// Mission copy.
pub const MISSION: &str = "We exist to strip away the noise. To build infrastructure that \
                           doesn't just function, but performs. In an era of digital clutter, \
                           AZMTH provides the signal.";

/// Vision copy.
pub const VISION: &str = "Total system autonomy.";

/// Assembles the assistant's system instruction from the catalog.
///
/// The tone constraints at the end are best-effort guidance to the remote
/// model; nothing here is enforced locally.
pub fn system_prompt() -> String {
    let mut prompt = String::new();
    prompt.push_str(
        "You are 'AZMTH OS', the automated assistant for AZMTH Studio.\n\
         AZMTH is a monochrome systems engineering studio focused on backend \
         infrastructure, AI automation, and reliable software.\n\n",
    );

    prompt.push_str("Built Products (Reference these when asked):\n");
    for service in SERVICES {
        prompt.push_str(&format!(
            "- {}: {} ({})\n",
            service.phase, service.title, service.domain
        ));
    }

    prompt.push_str("\nOpen Careers (We are hiring):\n");
    for listing in CAREERS {
        prompt.push_str(&format!(
            "- {} ({}, {})\n",
            listing.role, listing.location, listing.stack
        ));
    }

    prompt.push_str(
        "\nTone: Technical, precise, minimal, robotic but helpful. Avoid fluff. \
         Use terms like \"Latency\", \"Throughput\", \"Signal\", \"Deployment\".\n\
         Responses must be short (under 40 words).\n",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes() {
        assert_eq!(SERVICES.len(), 6);
        assert_eq!(TEAM.len(), 4);
        assert_eq!(CAREERS.len(), 3);
        assert_eq!(PROCESS.len(), 4);
    }

    #[test]
    fn prompt_references_every_product_and_career() {
        let prompt = system_prompt();
        for service in SERVICES {
            assert!(prompt.contains(service.title), "missing {}", service.title);
        }
        for listing in CAREERS {
            assert!(prompt.contains(listing.role), "missing {}", listing.role);
        }
    }

    #[test]
    fn prompt_carries_tone_constraints() {
        let prompt = system_prompt();
        assert!(prompt.contains("under 40 words"));
        assert!(prompt.contains("AZMTH OS"));
    }

    #[test]
    fn exactly_one_highlighted_career() {
        assert_eq!(CAREERS.iter().filter(|c| c.highlight).count(), 1);
    }
}
