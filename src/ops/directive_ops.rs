use crate::ast::Directive;
use crate::ast::Document;
use crate::encode;
use crate::encode::Literal;
use crate::path::navigator;
use crate::path::PathElement;

impl Document {
    /// Append a directive to the field at `path`. With an empty path the
    /// directive lands on every operation definition instead.
    pub fn add_directive(
        mut self,
        name: &str,
        path: &[PathElement],
        arguments: Vec<(String, Literal)>,
    ) -> Document {
        let directive = Directive {
            name: name.to_string(),
            arguments: encode::encode_arguments(&arguments),
        };

        if path.is_empty() {
            for op in self.operations_mut() {
                op.directives.push(directive.clone());
            }
        } else {
            navigator::update_directives(&mut self, path, |directives| {
                directives.push(directive.clone());
            });
        }
        self
    }
}
