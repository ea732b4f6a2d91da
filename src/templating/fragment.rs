//! Fragment template - bare markup for embedding in an existing document

use crate::language::{RenderingError, Segment, WeightHighlightConfig};
use crate::rendering::{render_segments, Html};

use super::Template;

/// Template producing just the highlighted markup, no surrounding document
pub struct Fragment;

impl Template for Fragment {
    fn render(
        &self,
        segments: &[Segment],
        config: &WeightHighlightConfig,
    ) -> Result<String, RenderingError> {
        Ok(render_segments(&Html::new(config), segments))
    }
}
