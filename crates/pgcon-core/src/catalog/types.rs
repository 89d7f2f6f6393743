//! Semantic enumerations for constraint metadata.
//!
//! Each enumeration carries a canonical label. The labels are what the
//! surrounding API emits verbatim, so serde uses them as variant names.

use std::fmt;
use std::str::FromStr;

use rkyv::{Archive, Deserialize, Serialize};
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use crate::error::Error;

/// Kind of a table constraint.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Archive,
    Serialize,
    Deserialize,
    SerdeSerialize,
    SerdeDeserialize,
)]
pub enum ConstraintKind {
    /// Foreign key reference to another table.
    #[serde(rename = "foreignkey")]
    ForeignKey,
    /// Primary key.
    #[serde(rename = "primary")]
    PrimaryKey,
    /// Uniqueness constraint.
    #[serde(rename = "unique")]
    Unique,
    /// Check expression.
    #[serde(rename = "check")]
    Check,
    /// Exclusion constraint.
    #[serde(rename = "exclude")]
    Exclude,
}

impl ConstraintKind {
    /// Every constraint kind.
    pub const ALL: [ConstraintKind; 5] = [
        ConstraintKind::ForeignKey,
        ConstraintKind::PrimaryKey,
        ConstraintKind::Unique,
        ConstraintKind::Check,
        ConstraintKind::Exclude,
    ];

    /// Canonical lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            ConstraintKind::ForeignKey => "foreignkey",
            ConstraintKind::PrimaryKey => "primary",
            ConstraintKind::Unique => "unique",
            ConstraintKind::Check => "check",
            ConstraintKind::Exclude => "exclude",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ConstraintKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConstraintKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| Error::UnknownLabel {
                kind: "constraint kind",
                label: s.to_string(),
            })
    }
}

/// Action applied to referencing rows when a referenced row changes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Archive,
    Serialize,
    Deserialize,
    SerdeSerialize,
    SerdeDeserialize,
)]
pub enum ReferentialAction {
    /// Reject the change while references exist.
    #[serde(rename = "RESTRICT")]
    Restrict,
    /// Propagate the change to referencing rows.
    #[serde(rename = "CASCADE")]
    Cascade,
    /// Set referencing columns to null.
    #[serde(rename = "SET NULL")]
    SetNull,
    /// Like restrict, but checked at the end of the statement.
    #[serde(rename = "NO ACTION")]
    NoAction,
    /// Set referencing columns to their defaults.
    #[serde(rename = "SET DEFAULT")]
    SetDefault,
}

impl ReferentialAction {
    /// Every referential action.
    pub const ALL: [ReferentialAction; 5] = [
        ReferentialAction::Restrict,
        ReferentialAction::Cascade,
        ReferentialAction::SetNull,
        ReferentialAction::NoAction,
        ReferentialAction::SetDefault,
    ];

    /// Canonical SQL keyword.
    pub fn label(&self) -> &'static str {
        match self {
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::NoAction => "NO ACTION",
            ReferentialAction::SetDefault => "SET DEFAULT",
        }
    }
}

impl fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReferentialAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReferentialAction::ALL
            .into_iter()
            .find(|action| action.label() == s)
            .ok_or_else(|| Error::UnknownLabel {
                kind: "referential action",
                label: s.to_string(),
            })
    }
}

/// How a multi-column foreign key treats rows containing nulls.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Archive,
    Serialize,
    Deserialize,
    SerdeSerialize,
    SerdeDeserialize,
)]
pub enum MatchPolicy {
    /// All columns null, or none.
    #[serde(rename = "FULL")]
    Full,
    /// Reserved by the SQL standard; not implemented by PostgreSQL.
    #[serde(rename = "PARTIAL")]
    Partial,
    /// Any null column exempts the row.
    #[serde(rename = "SIMPLE")]
    Simple,
}

impl MatchPolicy {
    /// Every match policy.
    pub const ALL: [MatchPolicy; 3] = [
        MatchPolicy::Full,
        MatchPolicy::Partial,
        MatchPolicy::Simple,
    ];

    /// Canonical uppercase label.
    pub fn label(&self) -> &'static str {
        match self {
            MatchPolicy::Full => "FULL",
            MatchPolicy::Partial => "PARTIAL",
            MatchPolicy::Simple => "SIMPLE",
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MatchPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchPolicy::ALL
            .into_iter()
            .find(|policy| policy.label() == s)
            .ok_or_else(|| Error::UnknownLabel {
                kind: "match policy",
                label: s.to_string(),
            })
    }
}
