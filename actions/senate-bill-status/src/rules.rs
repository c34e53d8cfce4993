//! Recognizers for the individual senate bill status kinds.
//!
//! Every rule looks at one [`StatusLine`] and either declines or returns a
//! complete [`StatusRecord`] together with a [`Continuation`] telling the
//! chain whether later rules should still see the same line.

use crate::config::Config;
use crate::error::Result;
use crate::types::{BillStatus, SenateCommittee, Senator, StatusLine, StatusRecord};
use regex::Regex;
use std::collections::HashSet;

/// Whether the chain keeps trying rules after this one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    Stop,
}

/// Outcome of running one rule against one line
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    pub record: Option<StatusRecord>,
    pub next: Continuation,
}

impl Recognition {
    /// The rule did not recognize the line
    pub fn no_match() -> Self {
        Self {
            record: None,
            next: Continuation::Continue,
        }
    }

    /// Recognized, and no further rule should look at the line
    pub fn stop(record: StatusRecord) -> Self {
        Self {
            record: Some(record),
            next: Continuation::Stop,
        }
    }

    /// Recognized, but other rules may also match the line
    pub fn proceed(record: StatusRecord) -> Self {
        Self {
            record: Some(record),
            next: Continuation::Continue,
        }
    }
}

/// A recognizer for one status kind
pub trait StatusRule: Send + Sync {
    fn recognize(&self, line: &StatusLine) -> Recognition;
}

impl<F> StatusRule for F
where
    F: Fn(&StatusLine) -> Recognition + Send + Sync,
{
    fn recognize(&self, line: &StatusLine) -> Recognition {
        self(line)
    }
}

const INTRODUCED_PREFIX: &str = "Introduced by Senator ";
const FIRST_READING_PREFIX: &str = "Read on First Reading and Referred to the Committee on ";
const FIRST_READING_PLURAL_PREFIX: &str =
    "Read on First Reading and Referred to the Committee(s) on ";

fn exact(line: &StatusLine, literal: &str, status: BillStatus) -> Recognition {
    if line.item == literal {
        Recognition::stop(StatusRecord::new(line, status))
    } else {
        Recognition::no_match()
    }
}

pub fn pending_in_committee(line: &StatusLine) -> Recognition {
    exact(line, "Pending in the Committee", BillStatus::PendingInCommittee)
}

pub fn joint_proceedings(line: &StatusLine) -> Recognition {
    exact(
        line,
        "Conducted JOINT COMMITTEE MEETINGS/HEARINGS;",
        BillStatus::JointProceedings,
    )
}

/// Does not stop the chain: the prefix says nothing about other kinds.
pub fn introduced(line: &StatusLine) -> Recognition {
    match line.item.strip_prefix(INTRODUCED_PREFIX) {
        Some(rest) => {
            let senator = Senator::new(rest.replace(';', ""));
            Recognition::proceed(StatusRecord::new(line, BillStatus::Introduced { senator }))
        }
        None => Recognition::no_match(),
    }
}

pub fn committee_report_calendared(line: &StatusLine) -> Recognition {
    exact(
        line,
        "Committee Report Calendared for Ordinary Business;",
        BillStatus::CommitteeReportCalendaredForOrdinaryBusiness,
    )
}

// The source data has no trailing ';' on this one.
pub fn consolidated_or_substituted(line: &StatusLine) -> Recognition {
    exact(
        line,
        "Consolidated/Substituted in the Committee Report",
        BillStatus::ConsolidatedOrSubstitutedInCommitteeReport,
    )
}

pub fn technical_working_group(line: &StatusLine) -> Recognition {
    exact(
        line,
        "Conducted TECHNICAL WORKING GROUP;",
        BillStatus::TechnicalWorkingGroup,
    )
}

pub fn committee_proceedings(line: &StatusLine) -> Recognition {
    exact(
        line,
        "Conducted COMMITTEE MEETINGS/HEARINGS;",
        BillStatus::CommitteeProceedings,
    )
}

pub fn approved_on_second_reading(line: &StatusLine) -> Recognition {
    let with_amendments = match line.item.as_str() {
        "Approved on Second Reading with Amendments;" => true,
        "Approved on Second Reading without Amendment;" => false,
        _ => return Recognition::no_match(),
    };
    Recognition::stop(StatusRecord::new(
        line,
        BillStatus::ApprovedOnSecondReading { with_amendments },
    ))
}

/// Referral on first reading to one or more committees
#[derive(Debug, Clone)]
pub struct FirstReading {
    separator: Regex,
    compound_committees: HashSet<String>,
}

impl FirstReading {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            separator: Regex::new(&config.committee_separator)?,
            compound_committees: config.compound_committees.iter().cloned().collect(),
        })
    }

    /// Split a plural referral into committees, keeping compound names whole.
    ///
    /// Only tokens separated by "and" are rejoined; a `;` always ends a name.
    pub fn split_committees(&self, text: &str) -> Vec<SenateCommittee> {
        let tokens = self.tokens(text);

        let mut committees = Vec::with_capacity(tokens.len());
        let mut start = 0;
        while start < tokens.len() {
            let len = self.longest_compound(&tokens[start..]).unwrap_or(1);
            committees.push(SenateCommittee::new(join_names(&tokens[start..start + len])));
            start += len;
        }
        committees
    }

    /// Non-empty names, each paired with whether "and" links it to the next
    fn tokens<'t>(&self, text: &'t str) -> Vec<(&'t str, bool)> {
        let mut tokens: Vec<(&str, bool)> = Vec::new();
        let mut last = 0;
        let mut pieces = Vec::new();
        for found in self.separator.find_iter(text) {
            pieces.push((&text[last..found.start()], found.as_str().trim() == "and"));
            last = found.end();
        }
        pieces.push((&text[last..], false));

        for (piece, and_follows) in pieces {
            let name = piece.trim();
            if name.is_empty() {
                if let Some(previous) = tokens.last_mut() {
                    previous.1 = false;
                }
                continue;
            }
            tokens.push((name, and_follows));
        }
        tokens
    }

    /// Number of leading tokens that join into a known compound name
    fn longest_compound(&self, tokens: &[(&str, bool)]) -> Option<usize> {
        let linked = tokens.iter().take_while(|(_, and_follows)| *and_follows).count() + 1;
        (2..=linked.min(tokens.len()))
            .rev()
            .find(|&n| self.compound_committees.contains(&join_names(&tokens[..n])))
    }
}

fn join_names(tokens: &[(&str, bool)]) -> String {
    tokens
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(" and ")
}

impl StatusRule for FirstReading {
    fn recognize(&self, line: &StatusLine) -> Recognition {
        let committees = if let Some(rest) = line.item.strip_prefix(FIRST_READING_PREFIX) {
            vec![SenateCommittee::new(rest.replace(';', ""))]
        } else if let Some(rest) = line.item.strip_prefix(FIRST_READING_PLURAL_PREFIX) {
            self.split_committees(rest)
        } else {
            return Recognition::no_match();
        };
        Recognition::stop(StatusRecord::new(
            line,
            BillStatus::FirstReading { committees },
        ))
    }
}
