use serde::Serialize;

///
/// Field
///
/// Read-only field metadata consumed by where-input generation.
/// Owned by the catalog; generation never mutates it.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub unique: bool,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            unique: false,
        }
    }

    /// Mark the field as a unique identifier.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Schema type spelling of this field's kind.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.kind.type_name()
    }

    #[must_use]
    pub const fn is_filterable(&self) -> bool {
        self.kind.is_filterable()
    }
}

///
/// FieldKind
///
/// Closed type surface for catalog fields. Only scalar and enum kinds are
/// filter-eligible; `Object` and `Relation` never appear in where-inputs.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum FieldKind {
    Boolean,
    Enum { name: String },
    Float,
    Id,
    Int,
    Object { name: String },
    Relation { to: String },
    String,
}

impl FieldKind {
    /// Schema type spelling for this kind.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Boolean => "Boolean",
            Self::Enum { name } | Self::Object { name } => name,
            Self::Float => "Float",
            Self::Id => "ID",
            Self::Int => "Int",
            Self::Relation { to } => to,
            Self::String => "String",
        }
    }

    #[must_use]
    pub const fn is_filterable(&self) -> bool {
        !matches!(self, Self::Object { .. } | Self::Relation { .. })
    }
}
