//! Bundled fallback content, shown when a category cannot be loaded.

use crate::models::{Insight, InsightBody, Signal, SignalCategory, Status};

fn signal(
    id: &str,
    title: &str,
    summary: &str,
    detected_at: &str,
    date: &str,
    category: SignalCategory,
) -> Signal {
    Signal {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        source: "Auto-Detected".to_string(),
        source_url: None,
        detected_at: detected_at.to_string(),
        date: date.to_string(),
        status: Status::Published,
        tags: Vec::new(),
        category: Some(category),
        why_it_matters: Vec::new(),
        recommended_actions: Vec::new(),
        risks_and_caveats: Vec::new(),
        decision_horizon: None,
    }
}

fn insight(
    id: &str,
    title: &str,
    author: &str,
    author_role: &str,
    excerpt: &str,
    paragraph: &str,
    date: &str,
) -> Insight {
    Insight {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        author_role: author_role.to_string(),
        excerpt: excerpt.to_string(),
        date: date.to_string(),
        status: Status::Published,
        tags: Vec::new(),
        url: None,
        body: InsightBody::Paragraphs(vec![paragraph.to_string()]),
        markdown_file: None,
    }
}

pub fn default_signals() -> Vec<Signal> {
    vec![
        signal(
            "default-1",
            "Generative AI models surpass junior developer benchmarks in 2025",
            "Recent studies indicate a massive shift in entry-level coding tasks being automated. \
             Efficiency gains are offset by integration challenges...",
            "2026-02-06T00:42:15Z",
            "2026-02-06",
            SignalCategory::DeveloperTools,
        ),
        signal(
            "default-2",
            "Enterprise adoption of AI pair programming reaches 60% in Nordic tech firms",
            "A comprehensive survey of Nordic software companies reveals rapid adoption of \
             AI-assisted development tools, with significant implications for team structures.",
            "2026-02-06T08:15:30Z",
            "2026-02-06",
            SignalCategory::IndustryAdoption,
        ),
        signal(
            "default-3",
            "Open-source LLMs close performance gap with proprietary models",
            "Latest benchmarks show open-source large language models achieving 95% parity with \
             leading commercial alternatives.",
            "2026-02-05T14:22:00Z",
            "2026-02-05",
            SignalCategory::Research,
        ),
    ]
}

pub fn default_insights() -> Vec<Insight> {
    vec![
        insight(
            "default-empathy",
            "The Socio-Technical Shift: Why Empathy Matters More Than Code",
            "Dr. Sarah Jenkins",
            "Research Lead",
            "As algorithms take over the syntax of software, the semantics become the exclusive \
             domain of human engineers.",
            "As algorithms take over the syntax of software, the semantics\u{2014}the meaning and \
             purpose\u{2014}become the exclusive domain of human engineers. We must pivot our \
             education systems similarly to how architecture evolved...",
            "2026-02-04",
        ),
        insight(
            "default-code-review",
            "Code Review in the Age of AI: From Gatekeeping to Mentorship",
            "Prof. Mikko Lahtinen",
            "University of Helsinki",
            "When AI generates most of the code, the role of code review transforms from error \
             detection to knowledge transfer.",
            "When AI generates most of the code, the role of code review transforms from error \
             detection to knowledge transfer and architectural stewardship.",
            "2026-01-28",
        ),
    ]
}
