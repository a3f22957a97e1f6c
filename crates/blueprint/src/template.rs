//! Textual layer templates
//!
//! A template describes the cell symbols of a pattern as plain text: rows of
//! symbol characters, `#` comments running to end of line, one or more blank
//! lines separating consecutive layers. Row `r`, column `c` of layer `l`
//! becomes cell `[y=l][x=r][z=c]`.
//!
//! ```text
//! # 2x1x3 slab, bottom layer only
//! ccc
//! ccc
//! ```

use glam::IVec3;
use thiserror::Error;

/// Errors from parsing a template text
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The text contains no layers at all
    #[error("template contains no layers")]
    Empty,

    /// A symbol row contains embedded whitespace
    #[error("whitespace inside a symbol row at line {line}")]
    SplitRow {
        /// 1-based source line
        line: usize,
    },

    /// A row's width differs from the first row of the template
    #[error("row {row} of layer {layer} has {actual} cells, expected {expected}")]
    RaggedRow {
        /// 0-based layer index
        layer: usize,
        /// 0-based row index within the layer
        row: usize,
        /// Width of the template's first row
        expected: usize,
        /// Width actually found
        actual: usize,
    },

    /// A layer's row count differs from the first layer of the template
    #[error("layer {layer} has {actual} rows, expected {expected}")]
    RowCountMismatch {
        /// 0-based layer index
        layer: usize,
        /// Row count of the template's first layer
        expected: usize,
        /// Row count actually found
        actual: usize,
    },
}

/// Parsed, rectangular cell layers of a pattern template
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// Cell symbols indexed [y][x][z]
    layers: Vec<Vec<Vec<char>>>,
}

impl Template {
    /// The parsed layers, indexed [y][x][z]
    pub fn layers(&self) -> &[Vec<Vec<char>>] {
        &self.layers
    }

    /// Consume the template, yielding its layers
    pub fn into_layers(self) -> Vec<Vec<Vec<char>>> {
        self.layers
    }

    /// Extents as (x, y, z): rows per layer, layer count, row width
    pub fn size(&self) -> IVec3 {
        IVec3::new(
            self.layers[0].len() as i32,
            self.layers.len() as i32,
            self.layers[0][0].len() as i32,
        )
    }
}

/// Parse a template text into rectangular layers.
///
/// Comment and blank lines never contribute cells; `#` therefore cannot be
/// used as a cell symbol. Every row must match the first row's width and
/// every layer the first layer's row count.
pub fn parse_template(input: &str) -> Result<Template, TemplateError> {
    let mut layers: Vec<Vec<Vec<char>>> = Vec::new();
    let mut current: Vec<Vec<char>> = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            // Blank line closes the layer in progress
            if !current.is_empty() {
                layers.push(std::mem::take(&mut current));
            }
            continue;
        }
        let content = trimmed.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            // Comment-only line, contributes nothing
            continue;
        }
        if content.chars().any(char::is_whitespace) {
            return Err(TemplateError::SplitRow { line: index + 1 });
        }
        current.push(content.chars().collect());
    }
    if !current.is_empty() {
        layers.push(current);
    }
    if layers.is_empty() {
        return Err(TemplateError::Empty);
    }

    let rows = layers[0].len();
    let width = layers[0][0].len();
    for (l, layer) in layers.iter().enumerate() {
        if layer.len() != rows {
            return Err(TemplateError::RowCountMismatch {
                layer: l,
                expected: rows,
                actual: layer.len(),
            });
        }
        for (r, row) in layer.iter().enumerate() {
            if row.len() != width {
                return Err(TemplateError::RaggedRow {
                    layer: l,
                    row: r,
                    expected: width,
                    actual: row.len(),
                });
            }
        }
    }

    Ok(Template { layers })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_layer() {
        let template = parse_template("ab\ncd\n").unwrap();
        assert_eq!(template.size(), IVec3::new(2, 1, 2));
        assert_eq!(
            template.layers(),
            &[vec![vec!['a', 'b'], vec!['c', 'd']]]
        );
    }

    #[test]
    fn test_layers_split_on_blank_lines() {
        let template = parse_template("aa\naa\n\n\nbb\nbb\n").unwrap();
        assert_eq!(template.size(), IVec3::new(2, 2, 2));
        assert_eq!(template.layers()[1], vec![vec!['b', 'b'], vec!['b', 'b']]);
    }

    #[test]
    fn test_comments_and_indentation() {
        let text = "# a slab\n  cc  # top row\n  cc\n# trailing note\n";
        let template = parse_template(text).unwrap();
        assert_eq!(template.size(), IVec3::new(2, 1, 2));
    }

    #[test]
    fn test_comment_only_line_does_not_split_a_layer() {
        let template = parse_template("aa\n# still the same layer\naa\n\nbb\nbb\n").unwrap();
        assert_eq!(template.size(), IVec3::new(2, 2, 2));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_template(""), Err(TemplateError::Empty)));
        assert!(matches!(
            parse_template("# only comments\n\n"),
            Err(TemplateError::Empty)
        ));
    }

    #[test]
    fn test_ragged_row() {
        let err = parse_template("abc\nab\n").unwrap_err();
        assert!(matches!(
            err,
            TemplateError::RaggedRow {
                layer: 0,
                row: 1,
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_row_count_mismatch() {
        let err = parse_template("aa\naa\n\nbb\n").unwrap_err();
        assert!(matches!(
            err,
            TemplateError::RowCountMismatch {
                layer: 1,
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_split_row() {
        let err = parse_template("a b\n").unwrap_err();
        assert!(matches!(err, TemplateError::SplitRow { line: 1 }));
    }
}
