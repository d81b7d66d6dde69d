use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use super::coercion::FieldReader;
use super::domain::{ScoreError, ScoreId};
use super::rules::{self, Assessment};

/// Enumerated field value with a fixed code and point weight.
///
/// Implemented by one Rust enum per categorical field so the weight table is
/// an exhaustive `match` instead of a string-keyed lookup.
pub trait CodedOption: Copy + Eq + 'static {
    /// Every variant in display order.
    const ALL: &'static [Self];
    /// Value used when the field is missing or blank.
    const DEFAULT: Self;

    fn code(self) -> &'static str;
    fn label(self) -> &'static str;
    fn points(self) -> u8;

    /// Alternative spellings accepted besides the code.
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    fn from_code(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.iter().copied().find(|option| {
            option.code().eq_ignore_ascii_case(raw)
                || option
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(raw))
        })
    }
}

/// One allowed code of an enumeration field, as exposed to form renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumOption {
    pub code: &'static str,
    pub label: &'static str,
    pub points: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Boolean,
    Integer {
        unit: &'static str,
    },
    Enumeration {
        options: Vec<EnumOption>,
        default: &'static str,
    },
}

impl FieldKind {
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Boolean => "boolean",
            FieldKind::Integer { .. } => "integer",
            FieldKind::Enumeration { .. } => "enumeration",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
    /// Largest contribution this field can make to the total.
    pub max_points: u8,
}

impl FieldSpec {
    pub(crate) fn boolean(name: &'static str, label: &'static str, points: u8) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Boolean,
            max_points: points,
        }
    }

    pub(crate) fn integer(
        name: &'static str,
        label: &'static str,
        unit: &'static str,
        max_points: u8,
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Integer { unit },
            max_points,
        }
    }

    pub(crate) fn enumeration<T: CodedOption>(name: &'static str, label: &'static str) -> Self {
        let options: Vec<EnumOption> = T::ALL
            .iter()
            .map(|option| EnumOption {
                code: option.code(),
                label: option.label(),
                points: option.points(),
            })
            .collect();
        let max_points = options.iter().map(|option| option.points).max().unwrap_or(0);

        Self {
            name,
            label,
            kind: FieldKind::Enumeration {
                options,
                default: T::DEFAULT.code(),
            },
            max_points,
        }
    }
}

pub(crate) type ScoreFn = fn(&FieldReader<'_>) -> Result<Assessment, ScoreError>;

/// Static description of a score: its fields and the rule that scores them.
#[derive(Clone, Serialize)]
pub struct ScoreDefinition {
    pub id: ScoreId,
    pub name: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldSpec>,
    #[serde(skip)]
    pub(crate) assess: ScoreFn,
}

impl fmt::Debug for ScoreDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreDefinition")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

impl ScoreDefinition {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Sum of every field's maximum contribution.
    pub fn max_points(&self) -> u8 {
        self.fields.iter().map(|field| field.max_points).sum()
    }

    /// Definition for a known id; catalog order matches [`ScoreId::ALL`].
    pub fn for_id(id: ScoreId) -> &'static ScoreDefinition {
        &catalog()[id.index()]
    }
}

/// Definitions in display order, built once per process.
pub fn catalog() -> &'static [ScoreDefinition] {
    static CATALOG: OnceLock<[ScoreDefinition; 4]> = OnceLock::new();
    CATALOG.get_or_init(|| {
        [
            rules::cha2ds2_vasc::definition(),
            rules::has_bled::definition(),
            rules::timi::definition(),
            rules::heart::definition(),
        ]
    })
}

/// Serializable summary handed to form renderers.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSummary<'a> {
    #[serde(flatten)]
    pub definition: &'a ScoreDefinition,
    pub max_points: u8,
}

impl<'a> From<&'a ScoreDefinition> for ScoreSummary<'a> {
    fn from(definition: &'a ScoreDefinition) -> Self {
        Self {
            definition,
            max_points: definition.max_points(),
        }
    }
}
