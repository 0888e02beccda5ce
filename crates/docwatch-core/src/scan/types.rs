use serde::{Deserialize, Serialize};

/// Heuristic summary of one documentation page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageAnalysis {
    /// Non-overlapping date mentions (`YYYY年MM月DD日` or `YYYY-MM-DD`)
    pub date_count: usize,
    /// Case-insensitive model-name prefix mentions
    pub model_density: usize,
    /// Body length in characters
    pub content_length: usize,
}

impl PageAnalysis {
    /// True when the page mentions more model names than `threshold`.
    pub fn is_depth_confirmed(&self, threshold: usize) -> bool {
        self.model_density > threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_confirmed_is_strictly_greater() {
        let analysis = PageAnalysis {
            date_count: 0,
            model_density: 10,
            content_length: 0,
        };
        assert!(!analysis.is_depth_confirmed(10));
        assert!(analysis.is_depth_confirmed(9));
    }
}
