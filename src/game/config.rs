//! Game configuration.
//!
//! A `GameConfig` names the board a game starts from. Games are built from a
//! config once; resetting a game restores that same starting board.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::ShapeError;
use crate::shapes::{BoardShape, ShapeRegistry, ShapeTemplate};

/// Where the starting board comes from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartingShape {
    /// One of the built-in shapes.
    Builtin(BoardShape),
    /// A shape looked up by name in a `ShapeRegistry` at build time.
    Named(String),
    /// An inline template.
    Template(ShapeTemplate),
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Starting board.
    pub shape: StartingShape,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            shape: StartingShape::Builtin(BoardShape::English),
        }
    }
}

impl GameConfig {
    /// Create a config for the default (English) board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a built-in shape.
    #[must_use]
    pub fn with_shape(mut self, shape: BoardShape) -> Self {
        self.shape = StartingShape::Builtin(shape);
        self
    }

    /// Start from a shape registered under `name`.
    #[must_use]
    pub fn with_named_shape(mut self, name: impl Into<String>) -> Self {
        self.shape = StartingShape::Named(name.into());
        self
    }

    /// Start from an inline template.
    #[must_use]
    pub fn with_template(mut self, template: ShapeTemplate) -> Self {
        self.shape = StartingShape::Template(template);
        self
    }

    /// Build the starting board, resolving named shapes against `registry`.
    pub fn build_board(&self, registry: &ShapeRegistry) -> Result<Board, ShapeError> {
        match &self.shape {
            StartingShape::Builtin(shape) => shape.build(),
            StartingShape::Named(name) => registry.build(name),
            StartingShape::Template(template) => template.build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        let config = GameConfig::default();
        assert_eq!(config.shape, StartingShape::Builtin(BoardShape::English));

        let board = config.build_board(&ShapeRegistry::new()).unwrap();
        assert_eq!(board.peg_count(), 32);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new().with_shape(BoardShape::Test);
        assert_eq!(config.shape, StartingShape::Builtin(BoardShape::Test));

        let config = config.with_template(ShapeTemplate::new("line", "o o x"));
        let board = config.build_board(&ShapeRegistry::new()).unwrap();
        assert_eq!(board.to_raw_rows(), vec![vec![1, 2, 0]]);
    }

    #[test]
    fn test_named_shape_resolves_through_registry() {
        let registry = ShapeRegistry::with_builtins();

        let config = GameConfig::new().with_named_shape("european");
        assert_eq!(config.build_board(&registry).unwrap().peg_count(), 36);

        let config = GameConfig::new().with_named_shape("Diamond");
        assert_eq!(
            config.build_board(&registry),
            Err(ShapeError::UnknownShape("Diamond".to_string()))
        );
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new().with_template(ShapeTemplate::new("line", "o o x"));
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
