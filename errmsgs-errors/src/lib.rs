pub use miette;
pub use termcolor;
pub use miette::SourceSpan;
pub mod color;
pub mod error;
pub use error::*;

/// Zero-width span at `offset`, used for "expected something here" diagnostics
pub fn point_span(offset: usize) -> SourceSpan {
    (offset, 0).into()
}
pub fn merge_spans(a: SourceSpan, b: SourceSpan) -> SourceSpan {
    use std::cmp::{max, min};
    let start = min(a.offset(), b.offset());
    let end = max(a.offset() + a.len(), b.offset() + b.len());
    (start, end - start).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_spans() {
        let a = SourceSpan::from((4, 3));
        let b = SourceSpan::from((10, 2));
        assert_eq!(merge_spans(a, b), SourceSpan::from((4, 8)));
        assert_eq!(merge_spans(b, a), SourceSpan::from((4, 8)));
    }

    #[test]
    fn test_point_span() {
        let span = point_span(17);
        assert_eq!(span.offset(), 17);
        assert_eq!(span.len(), 0);
    }
}
