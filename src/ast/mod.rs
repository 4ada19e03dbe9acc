/// AST (Abstract Syntax Tree) module
/// Contains the expression tree produced by the parser
///
/// Submodules:
/// - ast: The `Expression` enum and its type tags
/// - expressions: Identifier and the textual rendering of trees
pub mod ast;
pub mod expressions;
