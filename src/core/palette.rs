use indexmap::IndexMap;

use crate::core::types::Color;
use crate::error::{ChartError, ChartResult};

/// Resolves a ring label into its color.
///
/// Implementations must return the same color for the same label for the
/// lifetime of the resolver.
pub trait ColorResolver {
    fn resolve(&mut self, label: &str) -> Color;
}

const DEFAULT_CATEGORY_COLORS: [&str; 12] = [
    "#01b8aa", "#374649", "#fd625e", "#f2c80f", "#5f6b6d", "#8ad4eb", "#fe9666", "#a66999",
    "#3599b8", "#dfbfbf", "#4ac5bb", "#fbb1ad",
];

/// Category palette handing out colors in first-request order.
///
/// Labels keep their color once assigned; the palette wraps around when
/// more labels than colors are requested.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPalette {
    colors: Vec<Color>,
    assigned: IndexMap<String, Color>,
}

impl Default for CategoryPalette {
    fn default() -> Self {
        let colors = DEFAULT_CATEGORY_COLORS
            .iter()
            .filter_map(|hex| Color::from_hex(hex).ok())
            .collect();
        Self {
            colors,
            assigned: IndexMap::new(),
        }
    }
}

impl CategoryPalette {
    pub fn with_colors(colors: Vec<Color>) -> ChartResult<Self> {
        if colors.is_empty() {
            return Err(ChartError::InvalidSettings(
                "category palette needs at least one color".to_owned(),
            ));
        }
        for color in &colors {
            color.validate()?;
        }
        Ok(Self {
            colors,
            assigned: IndexMap::new(),
        })
    }

    /// Label assignments in the order they were first requested.
    #[must_use]
    pub fn assignments(&self) -> &IndexMap<String, Color> {
        &self.assigned
    }
}

impl ColorResolver for CategoryPalette {
    fn resolve(&mut self, label: &str) -> Color {
        if let Some(color) = self.assigned.get(label) {
            return *color;
        }
        let color = self.colors[self.assigned.len() % self.colors.len()];
        self.assigned.insert(label.to_owned(), color);
        color
    }
}
