//! Line classifier for statement text.
//!
//! Expected transaction rows after PDF-to-text:
//!   12 Jan   DEP   Salary payment        1,000.00    5,000.00
//!   14 Jan         Interest credit           2.00    4,956.50
//!
//! Header, total and page-marker lines are dropped before any pattern runs.

use std::sync::OnceLock;

use ledgerlift_core::RawTransaction;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

// Numbers are ASCII digits with at most 24 integer digits, so every match
// parses as a `Decimal`.
fn typed_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(?P<date>[0-9]{1,2}\s+[A-Za-z]{3})\s+",
            r"(?P<kind>[A-Z]{2,4})\s+",
            r"(?P<desc>.+?)\s+",
            r"(?P<amount>[0-9]{1,3}(?:,[0-9]{3}){0,7}\.[0-9]{2})\s+",
            r"(?P<balance>[0-9]{1,3}(?:,[0-9]{3}){0,7}\.[0-9]{2})$"
        ))
        .expect("typed line regex")
    })
}

fn untyped_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(?P<date>[0-9]{1,2}\s+[A-Za-z]{3})\s+",
            r"(?P<desc>.+?)\s+",
            r"(?P<amount>[0-9]{1,3}(?:,[0-9]{3}){0,7}\.[0-9]{2})\s+",
            r"(?P<balance>[0-9]{1,3}(?:,[0-9]{3}){0,7}\.[0-9]{2})$"
        ))
        .expect("untyped line regex")
    })
}

/// The two transaction line shapes, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinePattern {
    /// date, type code, description, amount, balance
    #[serde(rename = "typed")]
    Typed,
    /// date, description, amount, balance
    #[serde(rename = "untyped")]
    Untyped,
}

impl LinePattern {
    pub const ORDER: [LinePattern; 2] = [LinePattern::Typed, LinePattern::Untyped];

    pub fn as_str(&self) -> &'static str {
        match self {
            LinePattern::Typed => "typed",
            LinePattern::Untyped => "untyped",
        }
    }

    fn regex(&self) -> &'static Regex {
        match self {
            LinePattern::Typed => typed_re(),
            LinePattern::Untyped => untyped_re(),
        }
    }

    /// Match the whole line against this shape. No partial extraction.
    pub fn extract(&self, line: &str) -> Option<RawTransaction> {
        let caps = self.regex().captures(line)?;
        let kind = match self {
            LinePattern::Typed => caps["kind"].to_string(),
            LinePattern::Untyped => String::new(),
        };
        Some(raw_from_captures(&caps, kind))
    }
}

fn raw_from_captures(caps: &Captures<'_>, kind: String) -> RawTransaction {
    RawTransaction {
        date: caps["date"].split_whitespace().collect::<Vec<_>>().join(" "),
        kind,
        description: caps["desc"].trim().to_string(),
        amount_text: caps["amount"].to_string(),
        balance_text: caps["balance"].to_string(),
    }
}

/// Why a line produced no transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    #[serde(rename = "empty")]
    Empty,
    /// Starts with a header keyword such as "Date" or "Totals"
    #[serde(rename = "header")]
    HeaderKeyword,
    /// Contains a page/opening-balance marker
    #[serde(rename = "marker")]
    Marker,
    /// Neither line shape matched the full line
    #[serde(rename = "no-pattern")]
    NoPattern,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Empty => "empty",
            SkipReason::HeaderKeyword => "header",
            SkipReason::Marker => "marker",
            SkipReason::NoPattern => "no-pattern",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Matched {
        pattern: LinePattern,
        fields: RawTransaction,
    },
    Skipped(SkipReason),
}

impl Classification {
    pub fn is_match(&self) -> bool {
        matches!(self, Classification::Matched { .. })
    }
}

/// Keyword rules checked before pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierRules {
    /// A line starting with any of these is a header or summary row.
    pub header_prefixes: Vec<String>,
    /// A line containing any of these anywhere is skipped.
    pub skip_markers: Vec<String>,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            header_prefixes: ["Date", "Balance", "Totals", "Statement"]
                .map(String::from)
                .to_vec(),
            skip_markers: ["Opening balance", "Orig date", "Page"]
                .map(String::from)
                .to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LineClassifier {
    rules: ClassifierRules,
}

impl LineClassifier {
    pub fn new(rules: ClassifierRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ClassifierRules {
        &self.rules
    }

    pub fn classify(&self, line: &str) -> Classification {
        let line = line.trim();

        if line.is_empty() {
            return Classification::Skipped(SkipReason::Empty);
        }
        if self
            .rules
            .header_prefixes
            .iter()
            .any(|p| line.starts_with(p.as_str()))
        {
            return Classification::Skipped(SkipReason::HeaderKeyword);
        }
        if self
            .rules
            .skip_markers
            .iter()
            .any(|m| line.contains(m.as_str()))
        {
            return Classification::Skipped(SkipReason::Marker);
        }

        LinePattern::ORDER
            .iter()
            .find_map(|pattern| {
                pattern.extract(line).map(|fields| Classification::Matched {
                    pattern: *pattern,
                    fields,
                })
            })
            .unwrap_or(Classification::Skipped(SkipReason::NoPattern))
    }
}
