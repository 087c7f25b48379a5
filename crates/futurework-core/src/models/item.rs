use super::{ContentKind, Insight, Signal};

/// Either kind of content record, as shown in the detail drawer
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    Signal(Signal),
    Insight(Insight),
}

impl ContentItem {
    pub fn id(&self) -> &str {
        match self {
            Self::Signal(signal) => &signal.id,
            Self::Insight(insight) => &insight.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Signal(signal) => &signal.title,
            Self::Insight(insight) => &insight.title,
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Signal(_) => ContentKind::Signals,
            Self::Insight(_) => ContentKind::Insights,
        }
    }
}

impl From<Signal> for ContentItem {
    fn from(signal: Signal) -> Self {
        Self::Signal(signal)
    }
}

impl From<Insight> for ContentItem {
    fn from(insight: Insight) -> Self {
        Self::Insight(insight)
    }
}
