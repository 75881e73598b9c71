//! Kotlin object declaration builder.

use konfig_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::Constant;

/// A member of a Kotlin object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Constant(Constant),
    Object(Object),
}

/// Builder for Kotlin `object` declarations.
///
/// Nested objects are separated from neighbouring members by a blank line;
/// consecutive constants are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    name: String,
    members: Vec<Member>,
}

impl Object {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn constant(mut self, constant: Constant) -> Self {
        self.members.push(Member::Constant(constant));
        self
    }

    pub fn object(mut self, object: Object) -> Self {
        self.members.push(Member::Object(object));
        self
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Build the object declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::kotlin();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Object {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.members.is_empty() {
            return vec![CodeFragment::line(format!("object {}", self.name))];
        }

        let mut body = Vec::new();
        for (i, member) in self.members.iter().enumerate() {
            let is_object = matches!(member, Member::Object(_));
            let follows_object = i > 0 && matches!(self.members[i - 1], Member::Object(_));
            if i > 0 && (is_object || follows_object) {
                body.push(CodeFragment::Blank);
            }
            match member {
                Member::Constant(constant) => body.extend(constant.to_fragments()),
                Member::Object(object) => body.extend(object.to_fragments()),
            }
        }

        vec![CodeFragment::block(format!("object {} {{", self.name), body)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object() {
        assert_eq!(Object::new("Empty").build(), "object Empty\n");
    }

    #[test]
    fn test_object_with_constants() {
        let code = Object::new("AppConfig")
            .constant(Constant::new("a", "Int", "1"))
            .constant(Constant::new("b", "Boolean", "true"))
            .build();

        assert_eq!(
            code,
            "object AppConfig {\n    const val a: Int = 1\n    const val b: Boolean = true\n}\n"
        );
    }

    #[test]
    fn test_nested_object_spacing() {
        let code = Object::new("AppConfig")
            .constant(Constant::new("a", "Int", "1"))
            .object(Object::new("server").constant(Constant::new("port", "Int", "80")))
            .constant(Constant::new("b", "Int", "2"))
            .build();

        assert_eq!(
            code,
            "object AppConfig {\n    const val a: Int = 1\n\n    object server {\n        const val port: Int = 80\n    }\n\n    const val b: Int = 2\n}\n"
        );
    }
}
