use crate::ast::Argument;
use crate::ast::Document;
use crate::encode;
use crate::encode::Literal;
use crate::path::navigator;
use crate::path::PathElement;

impl Document {
    /// Append an argument to the field at `path`, creating the field when
    /// it does not exist yet.
    pub fn add_argument(
        mut self,
        name: &str,
        path: &[PathElement],
        value: impl Into<Literal>,
    ) -> Document {
        let value = encode::encode(&value.into()).value;
        navigator::update_arguments(&mut self, path, |arguments| {
            arguments.push(Argument::new(name, value.clone()));
        });
        self
    }

    /// Remove every argument named `name` from the field at `path`.
    pub fn remove_argument(mut self, name: &str, path: &[PathElement]) -> Document {
        navigator::update_arguments(&mut self, path, |arguments| {
            arguments.retain(|argument| argument.name != name);
        });
        self
    }

    /// Remove-then-add: the replacement value lands at the tail of the
    /// argument list.
    pub fn replace_argument(
        self,
        name: &str,
        path: &[PathElement],
        value: impl Into<Literal>,
    ) -> Document {
        self.remove_argument(name, path).add_argument(name, path, value)
    }
}
