// Template module for collection route path templates
//
// This module provides parsing of `{field__path}` tokens out of page file
// paths and the substitution of route parameters back into them.

mod ast;
mod parser;
mod resolver;

pub use ast::{FieldPath, PathTemplate, TemplatePart, Token, FIELD_SEPARATOR};
pub use parser::{extract_tokens, TemplateParser};
pub use resolver::{derive_path, PathResolver};
