use crate::traits::renderer::MarkRenderer;

/// Brackets the divergent span with `>>` and `<<`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainRenderer;

impl MarkRenderer for PlainRenderer {
    fn emphasize(&self, span: &str) -> String {
        format!(">>{span}<<")
    }
}
