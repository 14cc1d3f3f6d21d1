use crate::node::Field;
use convert_case::{Case, Casing};
use serde::Serialize;

///
/// Model
///
/// A named data entity with an ordered field list. Where-input generation
/// consumes models read-only and in catalog order.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Model {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Model {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field in catalog order.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields marked unique, in catalog order.
    pub fn unique_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.unique)
    }

    /// Naming conventions derived from the model name.
    #[must_use]
    pub fn namings(&self) -> Namings {
        Namings::of(&self.name)
    }
}

///
/// Namings
///
/// Identifier casings derived from the declared model name. Model names are
/// declared singular; no inflection is applied, only recasing.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Namings {
    pub capital_singular: String,
    pub camel_singular: String,
}

impl Namings {
    #[must_use]
    pub fn of(name: &str) -> Self {
        Self {
            capital_singular: name.to_case(Case::Pascal),
            camel_singular: name.to_case(Case::Camel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Model, Namings};
    use crate::node::{Field, FieldKind};

    #[test]
    fn namings_recase_the_declared_name() {
        let namings = Namings::of("user_profile");

        assert_eq!(namings.capital_singular, "UserProfile");
        assert_eq!(namings.camel_singular, "userProfile");
    }

    #[test]
    fn fields_keep_catalog_order() {
        let model = Model::new("book")
            .field(Field::new("id", FieldKind::Id).unique())
            .field(Field::new("title", FieldKind::String));

        let names: Vec<&str> = model.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["id", "title"]);
        assert!(model.get_field("title").is_some());
        assert_eq!(model.unique_fields().count(), 1);
    }
}
