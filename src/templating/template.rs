//! Template trait for rendering weighted prompts

use crate::language::{RenderingError, Segment, WeightHighlightConfig};

/// Trait for templates that transform parsed prompts into HTML
pub trait Template {
    /// Render parsed prompt segments into markup
    fn render(
        &self,
        segments: &[Segment],
        config: &WeightHighlightConfig,
    ) -> Result<String, RenderingError>;
}
