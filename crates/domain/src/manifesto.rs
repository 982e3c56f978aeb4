//! Static copy of the manifesto page.

/// Document title shown in the browser tab.
pub const TITLE: &str = "Open Ship Manifesto";

/// Meta description.
pub const DESCRIPTION: &str = "Open Ship is a movement to publish not only source code, but the complete delivery loop.";

pub const EYEBROW: &str = "The Open Ship Future";

pub const HEADLINE: &str = "Open source shared code, open ship shares the loops";

pub const INTRO: &str = "Open source won by sharing code. Open ship wins by publishing the whole delivery \
loop: prompts and behaviors, architecture decisions, evaluation harnesses, baseline \
metrics, deployment recipes, observability, and the operational playbooks that turn a \
project from a pile of files into a living system.";

/// The cycle line closing the page.
pub const LOOP: &str = "Ship \u{2192} Measure \u{2192} Learn \u{2192} Iterate";

/// One principle of the manifesto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principle {
    pub title: &'static str,
    pub text: &'static str,
}

pub const PRINCIPLES: [Principle; 6] = [
    Principle {
        title: "Reproducibility over rhetoric",
        text: "If someone cannot run it and measure it, it is not truly shareable.",
    },
    Principle {
        title: "Operational transparency",
        text: "Replace 'it works on my machine' with clear behavior in the wild.",
    },
    Principle {
        title: "Metrics as a public interface",
        text: "Performance is a contract: baselines and regressions are part of the product.",
    },
    Principle {
        title: "Design decisions are open",
        text: "Share not only what was built, but why, what was rejected, and what could change.",
    },
    Principle {
        title: "Shipping is a team sport",
        text: "The community contributes to reliability, safety, and iteration speed, not only code.",
    },
    Principle {
        title: "Responsible openness",
        text: "Share with discipline: redaction, privacy, security boundaries, and threat modeling.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_unique_principle_titles() {
        let mut titles: Vec<_> = PRINCIPLES.iter().map(|p| p.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), PRINCIPLES.len());
    }

    #[test]
    fn should_close_with_the_delivery_loop() {
        assert_eq!(LOOP, "Ship → Measure → Learn → Iterate");
    }
}
