use crate::config::Config;
use crate::error::Result;
use crate::rules::{self, Continuation, FirstReading, StatusRule};
use crate::types::{StatusLine, StatusRecord};
use std::borrow::Cow;

/// Run `rules` in order against one line and collect what they recognize.
///
/// A rule that stops the chain ends the scan even if later rules would match.
pub fn classify<'a, I>(line: &StatusLine, rules: I) -> Vec<StatusRecord>
where
    I: IntoIterator<Item = &'a dyn StatusRule>,
{
    let mut records = Vec::new();
    for rule in rules {
        let recognition = rule.recognize(line);
        if let Some(record) = recognition.record {
            records.push(record);
        }
        if recognition.next == Continuation::Stop {
            break;
        }
    }
    records
}

/// Records for a whole bill history, plus the lines nothing recognized
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub records: Vec<StatusRecord>,
    pub unrecognized: Vec<StatusLine>,
}

struct NamedRule {
    name: Cow<'static, str>,
    rule: Box<dyn StatusRule>,
}

/// An ordered list of status rules
#[derive(Default)]
pub struct RuleChain {
    rules: Vec<NamedRule>,
}

impl RuleChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The senate rule set with the default configuration
    pub fn senate() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    /// The senate rule set, in dispatch order
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new()
            .with_rule("pending_in_committee", rules::pending_in_committee)
            .with_rule("joint_proceedings", rules::joint_proceedings)
            .with_rule("introduced", rules::introduced)
            .with_rule(
                "committee_report_calendared_for_ordinary_business",
                rules::committee_report_calendared,
            )
            .with_rule(
                "consolidated_or_substituted_in_committee_report",
                rules::consolidated_or_substituted,
            )
            .with_rule("technical_working_group", rules::technical_working_group)
            .with_rule("first_reading", FirstReading::from_config(config)?)
            .with_rule("committee_proceedings", rules::committee_proceedings)
            .with_rule("approved_on_second_reading", rules::approved_on_second_reading))
    }

    /// Append a rule to the end of the chain
    pub fn with_rule(
        mut self,
        name: impl Into<Cow<'static, str>>,
        rule: impl StatusRule + 'static,
    ) -> Self {
        self.rules.push(NamedRule {
            name: name.into(),
            rule: Box::new(rule),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in dispatch order
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|named| named.name.as_ref())
    }

    /// Classify one line against this chain
    pub fn classify(&self, line: &StatusLine) -> Vec<StatusRecord> {
        classify(
            line,
            self.rules.iter().map(|named| &*named.rule as &dyn StatusRule),
        )
    }

    /// Classify every line of a bill history, keeping input order
    pub fn classify_history<'a, I>(&self, lines: I) -> Classification
    where
        I: IntoIterator<Item = &'a StatusLine>,
    {
        let mut classification = Classification::default();
        for line in lines {
            let records = self.classify(line);
            if records.is_empty() {
                tracing::debug!(item = %line.item, sequence = ?line.sequence, "no rule recognized line");
                classification.unrecognized.push(line.clone());
            }
            classification.records.extend(records);
        }
        classification
    }
}

impl std::fmt::Debug for RuleChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rule_names()).finish()
    }
}
