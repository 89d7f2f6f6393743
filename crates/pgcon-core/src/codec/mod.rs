//! Catalog code translation.
//!
//! The system catalog stores constraint types, referential actions and match
//! policies as single characters. Each domain has one canonical code table;
//! decoding and encoding both read from the codec built from it. Codes
//! outside a domain decode to `None`.
//!
//! The alphabets overlap (`'c'` is a check constraint and also the cascade
//! action), so the caller picks the codec.

mod table;

use std::sync::LazyLock;

pub use table::CharCodec;

use crate::catalog::{ConstraintDescriptor, ConstraintKind, MatchPolicy, ReferentialAction};

const KIND_CODES: &[(char, ConstraintKind)] = &[
    ('c', ConstraintKind::Check),
    ('f', ConstraintKind::ForeignKey),
    ('p', ConstraintKind::PrimaryKey),
    ('u', ConstraintKind::Unique),
    ('x', ConstraintKind::Exclude),
];

const ACTION_CODES: &[(char, ReferentialAction)] = &[
    ('a', ReferentialAction::NoAction),
    ('r', ReferentialAction::Restrict),
    ('c', ReferentialAction::Cascade),
    ('n', ReferentialAction::SetNull),
    ('d', ReferentialAction::SetDefault),
];

const MATCH_CODES: &[(char, MatchPolicy)] = &[
    ('f', MatchPolicy::Full),
    ('p', MatchPolicy::Partial),
    ('s', MatchPolicy::Simple),
];

static KIND_CODEC: LazyLock<CharCodec<ConstraintKind>> =
    LazyLock::new(|| CharCodec::from_pairs(KIND_CODES));

static ACTION_CODEC: LazyLock<CharCodec<ReferentialAction>> =
    LazyLock::new(|| CharCodec::from_pairs(ACTION_CODES));

static MATCH_CODEC: LazyLock<CharCodec<MatchPolicy>> =
    LazyLock::new(|| CharCodec::from_pairs(MATCH_CODES));

/// The process-wide constraint type codec.
pub fn kind_codec() -> &'static CharCodec<ConstraintKind> {
    &KIND_CODEC
}

/// The process-wide referential action codec.
pub fn action_codec() -> &'static CharCodec<ReferentialAction> {
    &ACTION_CODEC
}

/// The process-wide match policy codec.
pub fn match_codec() -> &'static CharCodec<MatchPolicy> {
    &MATCH_CODEC
}

/// Classify a constraint by its structural form.
pub fn classify_by_descriptor(descriptor: &ConstraintDescriptor) -> Option<ConstraintKind> {
    match descriptor {
        ConstraintDescriptor::Check { .. } => Some(ConstraintKind::Check),
        ConstraintDescriptor::ForeignKey { .. } => Some(ConstraintKind::ForeignKey),
        ConstraintDescriptor::PrimaryKey { .. } => Some(ConstraintKind::PrimaryKey),
        ConstraintDescriptor::Unique { .. } => Some(ConstraintKind::Unique),
        ConstraintDescriptor::Exclude { .. } => Some(ConstraintKind::Exclude),
        ConstraintDescriptor::Unrecognized { .. } => None,
    }
}

/// Classify a constraint by its catalog type code.
pub fn classify_by_catalog_char(code: char) -> Option<ConstraintKind> {
    KIND_CODEC.decode(code)
}

/// Catalog type code of a constraint kind.
pub fn encode_kind(kind: ConstraintKind) -> Option<char> {
    KIND_CODEC.encode(kind)
}

/// Decode an on-update/on-delete action code.
pub fn decode_action(code: char) -> Option<ReferentialAction> {
    ACTION_CODEC.decode(code)
}

/// Catalog code of a referential action.
pub fn encode_action(action: ReferentialAction) -> Option<char> {
    ACTION_CODEC.encode(action)
}

/// Decode a foreign key match code.
pub fn decode_match(code: char) -> Option<MatchPolicy> {
    MATCH_CODEC.decode(code)
}

/// Catalog code of a match policy.
pub fn encode_match(policy: MatchPolicy) -> Option<char> {
    MATCH_CODEC.encode(policy)
}
