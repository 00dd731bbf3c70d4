use serde::{Deserialize, Serialize};

/// Placeholder rendered for a scalar field the rule block did not define.
pub const MISSING_FIELD_PLACEHOLDER: &str = "N/A";

/// Default number of rules grouped under one section heading.
pub const DEFAULT_RULES_PER_SECTION: usize = 25;

// ===== FIELD TABLE TYPES =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// `key = "value"`
    Scalar,
    /// `key = [ "a", "b" ]`
    List,
}

/// Fields written as `key = "value"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    Name,
    Action,
}

impl ScalarField {
    pub fn key(&self) -> &'static str {
        match self {
            ScalarField::Name => "name",
            ScalarField::Action => "action",
        }
    }
}

/// Fields written as `key = [ ... ]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    Protocols,
    SourceAddresses,
    DestinationAddresses,
}

impl ListField {
    pub fn key(&self) -> &'static str {
        match self {
            ListField::Protocols => "protocols",
            ListField::SourceAddresses => "source_addresses",
            ListField::DestinationAddresses => "destination_addresses",
        }
    }
}

/// The five attributes recognised inside a `rule { ... }` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleField {
    Scalar(ScalarField),
    List(ListField),
}

impl RuleField {
    pub const ALL: [RuleField; 5] = [
        RuleField::Scalar(ScalarField::Name),
        RuleField::List(ListField::SourceAddresses),
        RuleField::List(ListField::DestinationAddresses),
        RuleField::List(ListField::Protocols),
        RuleField::Scalar(ScalarField::Action),
    ];

    /// Key as written in the rule-definition text.
    pub fn key(&self) -> &'static str {
        match self {
            RuleField::Scalar(field) => field.key(),
            RuleField::List(field) => field.key(),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            RuleField::Scalar(_) => FieldKind::Scalar,
            RuleField::List(_) => FieldKind::List,
        }
    }
}

// ===== RULE RECORD =====

/// One firewall rule pulled out of the input text.
///
/// Fields are private so a record cannot change after the extractor builds it.
/// `None` means the block did not contain that field at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    name: Option<String>,
    action: Option<String>,
    protocols: Option<Vec<String>>,
    source_addresses: Option<Vec<String>>,
    destination_addresses: Option<Vec<String>>,
}

impl RuleRecord {
    pub fn builder() -> RuleRecordBuilder {
        RuleRecordBuilder::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn protocols(&self) -> Option<&[String]> {
        self.protocols.as_deref()
    }

    pub fn source_addresses(&self) -> Option<&[String]> {
        self.source_addresses.as_deref()
    }

    pub fn destination_addresses(&self) -> Option<&[String]> {
        self.destination_addresses.as_deref()
    }

    /// True when the block matched none of the five fields.
    pub fn is_empty(&self) -> bool {
        *self == RuleRecord::default()
    }
}

/// Accumulates matched fields for a single block, then freezes them into a [`RuleRecord`].
#[derive(Debug, Default)]
pub struct RuleRecordBuilder {
    record: RuleRecord,
}

impl RuleRecordBuilder {
    pub fn scalar(mut self, field: ScalarField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            ScalarField::Name => self.record.name = value,
            ScalarField::Action => self.record.action = value,
        }
        self
    }

    pub fn list<I, S>(mut self, field: ListField, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = Some(values.into_iter().map(Into::into).collect());
        match field {
            ListField::Protocols => self.record.protocols = values,
            ListField::SourceAddresses => self.record.source_addresses = values,
            ListField::DestinationAddresses => self.record.destination_addresses = values,
        }
        self
    }

    pub fn build(self) -> RuleRecord {
        self.record
    }
}
