//! Python syntax extraction using tree-sitter
//!
//! Turns one Python file into the structural facts behind the
//! repairability metrics: import-statement count, function spans, and
//! class count.

use crate::parsers::{FunctionSpan, ParseError, StructuralFacts};
use std::path::Path;
use tree_sitter::{Node, Parser, Query, QueryCursor, StreamingIterator};

/// Parse a Python file and extract its structural facts.
///
/// File contents are decoded lossily: stray non-UTF-8 bytes are replaced
/// rather than rejecting the file.
pub fn parse(path: &Path) -> Result<StructuralFacts, ParseError> {
    let bytes = std::fs::read(path)?;
    let source = String::from_utf8_lossy(&bytes);

    parse_source(&source, path)
}

/// Parse Python source code directly (useful for testing).
pub fn parse_source(source: &str, path: &Path) -> Result<StructuralFacts, ParseError> {
    let mut parser = Parser::new();
    let language = tree_sitter_python::LANGUAGE;
    parser
        .set_language(&language.into())
        .map_err(|e| ParseError::Grammar(e.to_string()))?;

    let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;
    let root = tree.root_node();

    // tree-sitter recovers from almost any input; reject trees containing
    // error nodes so malformed files are skipped instead of half-counted.
    if root.has_error() {
        return Err(ParseError::InvalidSyntax(path.to_path_buf()));
    }

    let mut facts = StructuralFacts::default();
    collect_facts(&root, source.as_bytes(), &mut facts)?;

    Ok(facts)
}

/// Count imports and classes and record function spans, at any nesting
/// depth. An `import a, b` statement counts once however many names it
/// binds. Only plain `def` definitions count as functions; an
/// `async def` does not, though a plain def nested inside one still does.
fn collect_facts(
    root: &Node,
    source: &[u8],
    facts: &mut StructuralFacts,
) -> Result<(), ParseError> {
    let query_str = r#"
        (import_statement) @import
        (import_from_statement) @import
        (future_import_statement) @import
        (function_definition) @function
        (class_definition) @class
    "#;

    let language = tree_sitter_python::LANGUAGE;
    let query =
        Query::new(&language.into(), query_str).map_err(|e| ParseError::Grammar(e.to_string()))?;

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, *root, source);

    while let Some(m) = matches.next() {
        for capture in m.captures.iter() {
            let capture_name = query.capture_names()[capture.index as usize];
            match capture_name {
                "import" => facts.imports += 1,
                "function" => {
                    // The grammar folds `async def` into `function_definition`
                    // with an `async` token up front; those are not counted.
                    let node = capture.node;
                    if node.child(0).map(|c| c.kind()) == Some("async") {
                        continue;
                    }
                    // A decorated def's span starts at the `def` line, not
                    // at its decorators.
                    facts.functions.push(FunctionSpan {
                        line_start: node.start_position().row as u32 + 1,
                        line_end: node.end_position().row as u32 + 1,
                    });
                }
                "class" => facts.classes += 1,
                _ => {}
            }
        }
    }

    Ok(())
}
