use memchr::memchr_iter;
use rustpython_parser::ast::{self, Ranged};
use rustpython_parser::Parse;
use thiserror::Error;

/// The file failed to parse. `line` and `column` are 1-based and present
/// whenever the parser reported a failure offset.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub message: String,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

/// Positions of the newline characters in the source, used to convert the
/// byte offsets carried by AST nodes into (row, column) locations.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    newlines: Vec<usize>,
}

impl LineIndex {
    pub fn from_source(source: &str) -> Self {
        Self {
            newlines: memchr_iter(b'\n', source.as_bytes()).collect(),
        }
    }

    /// Converts a byte offset into a 1-based (line, column) pair.
    ///
    /// The line is 1 + the number of newline characters before the offset;
    /// the column counts bytes since the last newline.
    pub fn line_col(&self, offset: usize) -> (u32, u32) {
        let line = self.newlines.partition_point(|&nl| nl < offset);
        let line_start = if line == 0 {
            0
        } else {
            self.newlines[line - 1] + 1
        };
        (line as u32 + 1, (offset - line_start) as u32 + 1)
    }
}

/// A successfully parsed module: the statement list plus the newline table
/// needed to locate nodes. Owned by a single `analyze` call and consumed
/// read-only by rules.
#[derive(Debug)]
pub struct ParsedModule {
    body: ast::Suite,
    lines: LineIndex,
}

impl ParsedModule {
    pub fn body(&self) -> &[ast::Stmt] {
        &self.body
    }

    /// 1-based (line, column) of the start of a node.
    pub fn start<N: Ranged>(&self, node: &N) -> (u32, u32) {
        self.lines.line_col(usize::from(node.range().start()))
    }

    /// 1-based line of the start of a node.
    pub fn start_line<N: Ranged>(&self, node: &N) -> u32 {
        self.start(node).0
    }

    /// 1-based line of the last byte of a node. Ranges are end-exclusive, so
    /// this looks at `end - 1`, which lands on the final token.
    pub fn end_line<N: Ranged>(&self, node: &N) -> u32 {
        let end = usize::from(node.range().end());
        self.lines.line_col(end.saturating_sub(1)).0
    }
}

/// Parses a source snippet into a traversable module.
///
/// The engine never inspects partial trees: any parse failure short-circuits
/// the whole analysis, so only the error location is extracted here.
pub fn parse_module(source: &str) -> Result<ParsedModule, SyntaxError> {
    let lines = LineIndex::from_source(source);
    match ast::Suite::parse(source, "<source>") {
        Ok(body) => Ok(ParsedModule { body, lines }),
        Err(err) => {
            let (line, column) = lines.line_col(usize::from(err.offset));
            Err(SyntaxError {
                message: err.error.to_string(),
                line: Some(line),
                column: Some(column),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col() {
        let index = LineIndex::from_source("a = 1\nbb = 2\n");
        assert_eq!(index.line_col(0), (1, 1));
        assert_eq!(index.line_col(4), (1, 5));
        assert_eq!(index.line_col(6), (2, 1));
        assert_eq!(index.line_col(7), (2, 2));
    }

    #[test]
    fn test_parse_valid_source() {
        let module = parse_module("x = 1\ny = x + 1\n").unwrap();
        assert_eq!(module.body().len(), 2);
    }

    #[test]
    fn test_parse_invalid_source() {
        let err = parse_module("def broken(:\n    pass").unwrap_err();
        assert!(!err.message.is_empty());
        assert_eq!(err.line, Some(1));
        assert!(err.column.is_some());
    }

    #[test]
    fn test_node_locations() {
        let module = parse_module("x = 1\ndef foo():\n    return 1\n").unwrap();
        let def = &module.body()[1];
        assert_eq!(module.start(def), (2, 1));
        assert_eq!(module.end_line(def), 3);
    }
}
