use serde::Serialize;
use std::fmt;

/// Upper bound (inclusive) of the Low category.
pub const LOW_MAX: f64 = 500.0;
/// Upper bound (inclusive) of the Normal category.
pub const NORMAL_MAX: f64 = 1000.0;

/// Agricultural reading of a radiation prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Low,
    Normal,
    High,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Low => "Low",
            Category::Normal => "Normal",
            Category::High => "High",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Category::Low => {
                "Low radiation: reduced photosynthetic activity, crops may grow more slowly."
            }
            Category::Normal => "Normal radiation: favourable conditions for most crops.",
            Category::High => {
                "High radiation: risk of heat stress; consider irrigation and shading."
            }
        }
    }

    /// Colour used by the result panel.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Low => "#2196F3",
            Category::Normal => "#4CAF50",
            Category::High => "#FF5722",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a prediction. Total over all `f64`; NaN falls into Low.
pub fn classify(value: f64) -> Category {
    if value > NORMAL_MAX {
        Category::High
    } else if value > LOW_MAX {
        Category::Normal
    } else {
        Category::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(500.0), Category::Low);
        assert_eq!(classify(500.01), Category::Normal);
        assert_eq!(classify(1000.0), Category::Normal);
        assert_eq!(classify(1000.01), Category::High);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(-20.0), Category::Low);
        assert_eq!(classify(f64::NEG_INFINITY), Category::Low);
        assert_eq!(classify(f64::INFINITY), Category::High);
        assert_eq!(classify(f64::NAN), Category::Low);
    }

    #[test]
    fn test_every_category_has_text() {
        for category in [Category::Low, Category::Normal, Category::High] {
            assert!(category.explanation().starts_with(category.label()));
        }
    }
}
