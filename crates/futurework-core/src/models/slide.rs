use std::fmt;

use crate::constants::anchors;

/// A provocation slide. Static data, never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: u32,
    pub question: &'static str,
    pub context: &'static str,
    pub category: SlideCategory,
    pub cta_label: Option<&'static str>,
    /// Section anchor the CTA jumps to
    pub cta_target: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideCategory {
    AiSignal,
    ExpertInsights,
    AboutProject,
}

impl SlideCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AiSignal => "AI Signal",
            Self::ExpertInsights => "Expert Insights",
            Self::AboutProject => "About the Project",
        }
    }
}

impl fmt::Display for SlideCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const WHAT_IF_SLIDES: [Slide; 3] = [
    Slide {
        id: 1,
        question: "What if AI becomes your most influential teammate\u{2014}not your fastest tool?",
        context: "Shifting the perspective from automation to collaboration.",
        category: SlideCategory::ExpertInsights,
        cta_label: Some("Explore Expert Insights \u{2193}"),
        cta_target: anchors::EXPERT_INSIGHTS,
    },
    Slide {
        id: 2,
        question: "What if the biggest disruptions are visible in signals long before strategy reacts?",
        context: "Detecting weak signals in a noisy technological landscape.",
        category: SlideCategory::AiSignal,
        cta_label: Some("Browse AI Signal \u{2193}"),
        cta_target: anchors::AI_SIGNAL,
    },
    Slide {
        id: 3,
        question: "What if productivity rises while meaning at work quietly erodes?",
        context: "Balancing efficiency with human purpose and well-being.",
        category: SlideCategory::AboutProject,
        cta_label: Some("Read project rationale \u{2193}"),
        cta_target: anchors::ABOUT_PROJECT,
    },
];
