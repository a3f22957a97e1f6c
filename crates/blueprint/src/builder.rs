//! Builder-style pattern construction

use crate::template::{parse_template, Template, TemplateError};
use glam::IVec3;
use multiblock::{Definition, Pattern};
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Errors from building a pattern out of templates and definitions
#[derive(Debug, Error)]
pub enum BuildError {
    /// Template text failed to parse
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Core pattern validation rejected the assembled input
    #[error(transparent)]
    Pattern(#[from] multiblock::Error),

    /// No layers were supplied before `build`
    #[error("builder has no layers")]
    NoLayers,
}

/// Incremental construction of a [`Pattern`]
///
/// Layers stack bottom to top. The declared extents are derived from the
/// first collected layer and the assembled input goes through
/// [`Pattern::new`], so every core construction guarantee (rectangularity on
/// all axes, total symbol coverage) applies to built patterns too.
#[derive(Debug, Default)]
pub struct PatternBuilder {
    layers: Vec<Vec<Vec<char>>>,
    definitions: HashMap<char, Definition>,
    anchor: IVec3,
}

impl PatternBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        PatternBuilder::default()
    }

    /// Append one layer given as rows of symbols (builder pattern)
    pub fn layer(mut self, rows: &[&str]) -> Self {
        self.layers
            .push(rows.iter().map(|r| r.chars().collect()).collect());
        self
    }

    /// Append every layer of a parsed template (builder pattern)
    pub fn template(mut self, template: Template) -> Self {
        self.layers.extend(template.into_layers());
        self
    }

    /// Parse template text and append its layers
    pub fn template_text(self, text: &str) -> Result<Self, BuildError> {
        Ok(self.template(parse_template(text)?))
    }

    /// Bind a symbol to a cell definition (builder pattern)
    pub fn define(mut self, symbol: char, definition: Definition) -> Self {
        self.definitions.insert(symbol, definition);
        self
    }

    /// Set the master cell offset (builder pattern)
    pub fn anchor(mut self, x: i32, y: i32, z: i32) -> Self {
        self.anchor = IVec3::new(x, y, z);
        self
    }

    /// Validate and build the pattern
    pub fn build(self) -> Result<Pattern, BuildError> {
        if self.layers.is_empty() {
            return Err(BuildError::NoLayers);
        }
        let size = IVec3::new(
            self.layers[0].len() as i32,
            self.layers.len() as i32,
            self.layers[0].first().map_or(0, Vec::len) as i32,
        );
        Ok(Pattern::new(
            self.layers,
            Rc::new(self.definitions),
            size,
            self.anchor,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiblock::Error;

    #[test]
    fn test_build_simple_pattern() {
        let pattern = PatternBuilder::new()
            .layer(&["sss", "s.s", "sss"])
            .define('s', Definition::Solid)
            .define('.', Definition::Empty)
            .anchor(1, 0, 1)
            .build()
            .unwrap();

        assert_eq!(pattern.size(), IVec3::new(3, 1, 3));
        assert_eq!(pattern.anchor(), IVec3::new(1, 0, 1));
    }

    #[test]
    fn test_build_requires_layers() {
        let err = PatternBuilder::new()
            .define('s', Definition::Solid)
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::NoLayers));
    }

    #[test]
    fn test_unmapped_symbol_surfaces_core_error() {
        let err = PatternBuilder::new()
            .layer(&["s?"])
            .define('s', Definition::Solid)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::Pattern(Error::MissingDefinition { symbol: '?' })
        ));
    }

    #[test]
    fn test_mismatched_layer_surfaces_core_error() {
        let err = PatternBuilder::new()
            .layer(&["ss", "ss"])
            .layer(&["ss"])
            .define('s', Definition::Solid)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::Pattern(Error::SizeMismatch { axis: 'x', .. })
        ));
    }

    #[test]
    fn test_template_text_layers() {
        let pattern = PatternBuilder::new()
            .template_text("mm\nmm\n\nmm\nmm\n")
            .unwrap()
            .define('m', Definition::material(4))
            .build()
            .unwrap();

        assert_eq!(pattern.size(), IVec3::new(2, 2, 2));
    }
}
