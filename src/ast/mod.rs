mod argument;
mod directive;
mod document;
mod field;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod operation_definition;
mod operation_kind;
mod selection;
mod selection_set;
mod type_annotation;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use directive::Directive;
pub use document::Definition;
pub use document::Document;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use type_annotation::TypeAnnotation;
pub use value::ObjectField;
pub use value::Value;
pub use variable_definition::VariableDefinition;

#[cfg(test)]
mod tests;
