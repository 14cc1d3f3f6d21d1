use std::collections::BTreeMap;

///
/// SchemaCollector
///
/// Seam to the surrounding schema assembly. Generated definitions are
/// registered by name; duplicate-name handling and serialization across
/// concurrent model passes are the collector's responsibility.
///

pub trait SchemaCollector {
    fn add_input(&mut self, name: &str, definition: &str);
    fn add_type(&mut self, name: &str, definition: &str);
}

///
/// MemoryCollector
///
/// In-memory collector for tests and single-process schema builds.
/// Last registration wins on duplicate names.
///

#[derive(Clone, Debug, Default)]
pub struct MemoryCollector {
    pub inputs: BTreeMap<String, String>,
    pub types: BTreeMap<String, String>,
}

impl MemoryCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SchemaCollector for MemoryCollector {
    fn add_input(&mut self, name: &str, definition: &str) {
        self.inputs.insert(name.to_string(), definition.to_string());
    }

    fn add_type(&mut self, name: &str, definition: &str) {
        self.types.insert(name.to_string(), definition.to_string());
    }
}
