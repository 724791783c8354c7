//! Built-in board shapes and a name → template registry.
//!
//! The `ShapeRegistry` stores every template a game may start from. It comes
//! pre-loaded with the built-in shapes and accepts custom templates.

use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::template::ShapeTemplate;
use crate::board::Board;
use crate::core::ShapeError;

const ENGLISH_TEMPLATE: &str = "
    - - a b c - -
    - - d e f - -
    g h i j k l m
    n o p x P O N
    M L K J I H G
    - - F E D - -
    - - C B A - -
";

const EUROPEAN_TEMPLATE: &str = "
    - - a b c - -
    - y d e f z -
    g h i j k l m
    n o p x P O N
    M L K J I H G
    - Z F E D Y -
    - - C B A - -
";

const TEST_TEMPLATE: &str = "
    x x x
    d e x
    g h x
";

/// The board shapes shipped with the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardShape {
    /// 7x7 cross, 33 holes, 32 pegs, centre empty.
    English,
    /// 7x7 octagon, 37 holes, 36 pegs, centre empty.
    European,
    /// 3x3 board used for quick checks.
    Test,
}

impl BoardShape {
    /// All built-in shapes.
    pub const ALL: [BoardShape; 3] = [BoardShape::English, BoardShape::European, BoardShape::Test];

    /// Registry name of this shape.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BoardShape::English => "English",
            BoardShape::European => "European",
            BoardShape::Test => "Test",
        }
    }

    /// Template text of this shape.
    #[must_use]
    pub const fn template_text(self) -> &'static str {
        match self {
            BoardShape::English => ENGLISH_TEMPLATE,
            BoardShape::European => EUROPEAN_TEMPLATE,
            BoardShape::Test => TEST_TEMPLATE,
        }
    }

    /// This shape as a registrable template.
    #[must_use]
    pub fn template(self) -> ShapeTemplate {
        ShapeTemplate::new(self.name(), self.template_text())
    }

    /// Build a freshly numbered board of this shape.
    pub fn build(self) -> Result<Board, ShapeError> {
        self.template().build()
    }
}

impl std::fmt::Display for BoardShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoardShape {
    type Err = ShapeError;

    /// Case-insensitive lookup of a built-in shape.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardShape::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ShapeError::UnknownShape(s.to_string()))
    }
}

/// Registry of board templates, keyed by case-insensitive name.
#[derive(Clone, Debug, Default)]
pub struct ShapeRegistry {
    templates: FxHashMap<String, ShapeTemplate>,
}

impl ShapeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in shape.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for shape in BoardShape::ALL {
            registry.register(shape.template());
        }
        registry
    }

    /// Register a template.
    ///
    /// Panics if a template with the same name already exists.
    pub fn register(&mut self, template: ShapeTemplate) {
        let key = Self::key(&template.name);
        if self.templates.contains_key(&key) {
            panic!("Shape {:?} already registered", template.name);
        }
        self.templates.insert(key, template);
    }

    /// Look up a template by name.
    pub fn get(&self, name: &str) -> Result<&ShapeTemplate, ShapeError> {
        self.templates
            .get(&Self::key(name))
            .ok_or_else(|| ShapeError::UnknownShape(name.to_string()))
    }

    /// Build a freshly numbered board from the named template.
    pub fn build(&self, name: &str) -> Result<Board, ShapeError> {
        self.get(name)?.build()
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(&Self::key(name))
    }

    /// Number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate over the registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.values().map(|t| t.name.as_str())
    }

    fn key(name: &str) -> String {
        name.trim().to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_board() {
        let board = BoardShape::English.build().unwrap();
        assert_eq!(
            board.to_raw_rows(),
            vec![
                vec![-1, -1, 1, 2, 3, -1, -1],
                vec![-1, -1, 4, 5, 6, -1, -1],
                vec![7, 8, 9, 10, 11, 12, 13],
                vec![14, 15, 16, 0, 17, 18, 19],
                vec![20, 21, 22, 23, 24, 25, 26],
                vec![-1, -1, 27, 28, 29, -1, -1],
                vec![-1, -1, 30, 31, 32, -1, -1],
            ]
        );
        assert_eq!(board.peg_count(), 32);
        assert_eq!(board.size(), 7);
    }

    #[test]
    fn test_european_board() {
        let board = BoardShape::European.build().unwrap();
        assert_eq!(
            board.to_raw_rows(),
            vec![
                vec![-1, -1, 1, 2, 3, -1, -1],
                vec![-1, 4, 5, 6, 7, 8, -1],
                vec![9, 10, 11, 12, 13, 14, 15],
                vec![16, 17, 18, 0, 19, 20, 21],
                vec![22, 23, 24, 25, 26, 27, 28],
                vec![-1, 29, 30, 31, 32, 33, -1],
                vec![-1, -1, 34, 35, 36, -1, -1],
            ]
        );
        assert_eq!(board.peg_count(), 36);
    }

    #[test]
    fn test_test_board() {
        let board = BoardShape::Test.build().unwrap();
        assert_eq!(
            board.to_raw_rows(),
            vec![vec![0, 0, 0], vec![1, 2, 0], vec![3, 4, 0]]
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("English".parse::<BoardShape>(), Ok(BoardShape::English));
        assert_eq!("european".parse::<BoardShape>(), Ok(BoardShape::European));
        assert_eq!(" TEST ".parse::<BoardShape>(), Ok(BoardShape::Test));
        assert_eq!(
            "Triangle".parse::<BoardShape>(),
            Err(ShapeError::UnknownShape("Triangle".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for shape in BoardShape::ALL {
            assert_eq!(shape.to_string().parse::<BoardShape>(), Ok(shape));
        }
    }

    #[test]
    fn test_registry_builtins() {
        let registry = ShapeRegistry::with_builtins();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("english"));
        assert!(registry.contains("EUROPEAN"));
        assert!(!registry.is_empty());

        let board = registry.build("Test").unwrap();
        assert_eq!(board, BoardShape::Test.build().unwrap());

        let mut names: Vec<_> = registry.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["English", "European", "Test"]);
    }

    #[test]
    fn test_registry_unknown_shape() {
        let registry = ShapeRegistry::with_builtins();
        assert_eq!(
            registry.build("Hexagon"),
            Err(ShapeError::UnknownShape("Hexagon".to_string()))
        );
    }

    #[test]
    fn test_registry_custom_template() {
        let mut registry = ShapeRegistry::new();
        assert!(registry.is_empty());

        registry.register(ShapeTemplate::new("Line", "o o x"));
        assert_eq!(registry.build("line").unwrap().to_raw_rows(), vec![vec![1, 2, 0]]);
    }

    #[test]
    fn test_registry_propagates_parse_errors() {
        let mut registry = ShapeRegistry::new();
        registry.register(ShapeTemplate::new("Broken", "o o\no"));
        assert!(matches!(registry.build("Broken"), Err(ShapeError::RaggedRow { .. })));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_name_panics() {
        let mut registry = ShapeRegistry::with_builtins();
        registry.register(ShapeTemplate::new("english", "o o x"));
    }
}
