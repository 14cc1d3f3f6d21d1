use serde::Serialize;
use std::fmt::Write;

///
/// InputField
///
/// One `name: Type` clause of a generated input definition. Every clause is
/// optional in the emitted schema; a where-input never requires a field.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct InputField {
    pub name: String,
    pub type_name: String,
}

///
/// InputDef
///
/// A generated input definition, structured-first: callers and tests assert
/// on the field list, and `render` serializes to schema text last.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct InputDef {
    pub name: String,
    pub fields: Vec<InputField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl InputDef {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            comment: None,
        }
    }

    /// Append one clause in declaration order.
    pub fn push(&mut self, name: impl Into<String>, type_name: impl Into<String>) {
        self.fields.push(InputField {
            name: name.into(),
            type_name: type_name.into(),
        });
    }

    /// Render as a schema input block.
    ///
    /// Exact whitespace is not a contract; the declared field set and their
    /// types are.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        if let Some(comment) = &self.comment {
            let _ = writeln!(out, "# {comment}");
        }
        let _ = writeln!(out, "input {} {{", self.name);
        for field in &self.fields {
            let _ = writeln!(out, "  {}: {}", field.name, field.type_name);
        }
        out.push('}');

        out
    }
}
