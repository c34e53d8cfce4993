use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Keys a serialized record writes itself; `extra` may not supply them
pub const RESERVED_FIELDS: &[&str] = &[
    "name",
    "item",
    "date",
    "sequence",
    "kind",
    "senator",
    "committees",
    "with_amendments",
];

/// A raw entry from a senate bill's history log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusLine {
    /// The free-text status, e.g. "Pending in the Committee"
    pub item: String,
    /// Date the action was logged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Position of the entry within the bill's history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,
    /// Any other fields from the source, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl StatusLine {
    /// Create a line with only the status text set
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            date: None,
            sequence: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_sequence(mut self, sequence: u32) -> Self {
        self.sequence = Some(sequence);
        self
    }

    /// First extra field whose key collides with a record field
    pub fn reserved_extra_key(&self) -> Option<&str> {
        self.extra
            .keys()
            .map(String::as_str)
            .find(|key| RESERVED_FIELDS.contains(key))
    }
}

/// Senator named in a status line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Senator {
    pub name: String,
}

impl Senator {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Senate committee named in a status line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SenateCommittee {
    pub name: String,
}

impl SenateCommittee {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The recognized kind of a status line, with whatever was extracted from it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BillStatus {
    PendingInCommittee,
    JointProceedings,
    Introduced { senator: Senator },
    CommitteeReportCalendaredForOrdinaryBusiness,
    ConsolidatedOrSubstitutedInCommitteeReport,
    TechnicalWorkingGroup,
    FirstReading { committees: Vec<SenateCommittee> },
    CommitteeProceedings,
    ApprovedOnSecondReading { with_amendments: bool },
}

impl BillStatus {
    /// Human-readable label for the kind.
    ///
    /// Labels match the published data set verbatim, spelling included.
    pub fn name(&self) -> &'static str {
        match self {
            BillStatus::PendingInCommittee => "Pending in Committee",
            BillStatus::JointProceedings => "Conducted Joint Proceedings",
            BillStatus::Introduced { .. } => "Introduced by a Senator",
            BillStatus::CommitteeReportCalendaredForOrdinaryBusiness => {
                "Committe Report Calendared for Ordinary Business"
            }
            BillStatus::ConsolidatedOrSubstitutedInCommitteeReport => {
                "Consolidated or Substituted in Committee Report"
            }
            BillStatus::TechnicalWorkingGroup => "Conducted a Technical Working Group",
            BillStatus::FirstReading { .. } => "Read on First Reading and Referred to Committee",
            BillStatus::CommitteeProceedings => "Conducted Committee Proceedings",
            BillStatus::ApprovedOnSecondReading { .. } => "Approved On Second Reading",
        }
    }
}

/// A status line paired with the kind a rule recognized in it
#[derive(Debug, Clone, PartialEq)]
pub struct StatusRecord {
    pub line: StatusLine,
    pub status: BillStatus,
}

impl StatusRecord {
    pub fn new(line: &StatusLine, status: BillStatus) -> Self {
        Self {
            line: line.clone(),
            status,
        }
    }

    pub fn name(&self) -> &'static str {
        self.status.name()
    }
}

/// Extra line fields minus any key the record writes itself
struct PassThrough<'a>(&'a serde_json::Map<String, serde_json::Value>);

impl Serialize for PassThrough<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.0 {
            if !RESERVED_FIELDS.contains(&key.as_str()) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

/// Records serialize flat: `name`, the raw line fields, then `kind` and its payload
impl Serialize for StatusRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Flat<'a> {
            name: &'static str,
            item: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            date: Option<NaiveDate>,
            #[serde(skip_serializing_if = "Option::is_none")]
            sequence: Option<u32>,
            #[serde(flatten)]
            extra: PassThrough<'a>,
            #[serde(flatten)]
            status: &'a BillStatus,
        }

        Flat {
            name: self.name(),
            item: &self.line.item,
            date: self.line.date,
            sequence: self.line.sequence,
            extra: PassThrough(&self.line.extra),
            status: &self.status,
        }
        .serialize(serializer)
    }
}
