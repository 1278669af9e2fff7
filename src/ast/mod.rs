/// AST (Abstract Syntax Tree) module
/// Contains the syntax node definitions, the list merge/flatten helpers
/// and the tree renderer.
pub mod ast;
