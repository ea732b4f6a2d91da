//! Templates for rendering weighted prompts into finished output

mod fragment;
mod page;
mod template;

pub use fragment::Fragment;
pub use page::Page;
pub use template::Template;

use crate::language::{RenderingError, Segment, WeightHighlightConfig};

/// Render parsed prompt segments using the specified template
pub fn fill(
    template: &impl Template,
    segments: &[Segment],
    config: &WeightHighlightConfig,
) -> Result<String, RenderingError> {
    template.render(segments, config)
}
