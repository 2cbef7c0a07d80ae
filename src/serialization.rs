use super::{Branch, Language, Rule, SortName};
use serde::ser::{Serialize, SerializeStruct, Serializer};

impl Serialize for SortName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SortName", 3)?;
        state.serialize_field("sort_name", self.as_str())?;
        state.serialize_field("language", self.language().code())?;
        state.serialize_field("branch", &self.branch())?;
        state.end()
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Language", 3)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("rule", &self.rule())?;
        state.end()
    }
}
