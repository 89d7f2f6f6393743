//! Naming convention table.
//!
//! Templates follow the PostgreSQL defaults, e.g. `orders_id_pkey`. A
//! template is parsed once into segments and rendered by concatenation.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::catalog::ConstraintKind;
use crate::error::{Error, Result};

const TABLE_NAME: &str = "table_name";
const COLUMN_0_NAME: &str = "column_0_name";

static POSTGRES: LazyLock<NamingConvention> = LazyLock::new(NamingConvention::postgres);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    TableName,
    Column0Name,
}

/// A name pattern with `{table_name}` and `{column_0_name}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingTemplate {
    segments: Vec<Segment>,
}

impl NamingTemplate {
    /// Parse a template.
    ///
    /// Placeholders are written `{table_name}` and `{column_0_name}`. Any
    /// other name, or a brace without its partner, is rejected.
    pub fn new(pattern: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = pattern;

        while let Some(open) = rest.find(['{', '}']) {
            if rest[open..].starts_with('}') {
                return Err(Error::InvalidTemplate(format!(
                    "unmatched '}}' in {pattern:?}"
                )));
            }
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }

            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| {
                Error::InvalidTemplate(format!("unclosed '{{' in {pattern:?}"))
            })?;

            segments.push(match &after[..close] {
                TABLE_NAME => Segment::TableName,
                COLUMN_0_NAME => Segment::Column0Name,
                other => {
                    return Err(Error::InvalidTemplate(format!(
                        "unknown placeholder {other:?} in {pattern:?}"
                    )))
                }
            });
            rest = &after[close + 1..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// `{table_name}_{column_0_name}_<suffix>`.
    pub fn suffixed(suffix: &str) -> Self {
        Self {
            segments: vec![
                Segment::TableName,
                Segment::Literal("_".to_string()),
                Segment::Column0Name,
                Segment::Literal(format!("_{suffix}")),
            ],
        }
    }

    /// Substitute the placeholders.
    ///
    /// Inputs are used verbatim: no quoting, case folding or truncation.
    pub fn render(&self, table_name: &str, column_0_name: &str) -> String {
        let mut out = String::with_capacity(table_name.len() + column_0_name.len() + 8);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::TableName => out.push_str(table_name),
                Segment::Column0Name => out.push_str(column_0_name),
            }
        }
        out
    }
}

impl fmt::Display for NamingTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::TableName => write!(f, "{{{TABLE_NAME}}}")?,
                Segment::Column0Name => write!(f, "{{{COLUMN_0_NAME}}}")?,
            }
        }
        Ok(())
    }
}

/// Templates per constraint kind, plus one for indexes.
///
/// Kinds without a template cannot be named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConvention {
    templates: HashMap<ConstraintKind, NamingTemplate>,
    index: Option<NamingTemplate>,
}

impl NamingConvention {
    /// The PostgreSQL default convention.
    ///
    /// Exclusion constraints have no template.
    pub fn postgres() -> Self {
        let templates = HashMap::from([
            (ConstraintKind::Unique, NamingTemplate::suffixed("key")),
            (ConstraintKind::ForeignKey, NamingTemplate::suffixed("fkey")),
            (ConstraintKind::PrimaryKey, NamingTemplate::suffixed("pkey")),
            (ConstraintKind::Check, NamingTemplate::suffixed("check")),
        ]);

        Self {
            templates,
            index: Some(NamingTemplate::suffixed("idx")),
        }
    }

    /// The process-wide convention used by the free naming functions.
    pub fn global() -> &'static NamingConvention {
        &POSTGRES
    }

    /// A convention with no templates at all.
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
            index: None,
        }
    }

    /// Set the template for a constraint kind.
    pub fn with_template(mut self, kind: ConstraintKind, template: NamingTemplate) -> Self {
        self.templates.insert(kind, template);
        self
    }

    /// Remove the template for a constraint kind.
    pub fn without_template(mut self, kind: ConstraintKind) -> Self {
        self.templates.remove(&kind);
        self
    }

    /// Set the index template.
    pub fn with_index_template(mut self, template: NamingTemplate) -> Self {
        self.index = Some(template);
        self
    }

    /// Template for a constraint kind.
    pub fn template(&self, kind: ConstraintKind) -> Option<&NamingTemplate> {
        self.templates.get(&kind)
    }

    /// Template for indexes.
    pub fn index_template(&self) -> Option<&NamingTemplate> {
        self.index.as_ref()
    }

    /// Name a constraint from already-resolved names.
    pub fn constraint_name(
        &self,
        kind: ConstraintKind,
        table_name: &str,
        column_0_name: &str,
    ) -> Option<String> {
        self.template(kind)
            .map(|template| template.render(table_name, column_0_name))
    }

    /// Name an index from already-resolved names.
    pub fn index_name(&self, table_name: &str, column_0_name: &str) -> Option<String> {
        self.index
            .as_ref()
            .map(|template| template.render(table_name, column_0_name))
    }
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::postgres()
    }
}
