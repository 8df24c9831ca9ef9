//! Debug annotation regions (`ID3DUserDefinedAnnotation`-style).
//!
//! The sink is optional everywhere: replay without an annotation interface simply drops markers.

use tracing::trace;

/// Receiver of debug markers. Names arrive as NUL-terminated UTF-16.
pub trait AnnotationSink {
    fn set_marker(&self, name: &[u16]);
    fn begin_event(&self, name: &[u16]);
    fn end_event(&self);
}

fn to_wide(marker: &str) -> Vec<u16> {
    marker.encode_utf16().chain(std::iter::once(0)).collect()
}

pub fn set_marker(sink: Option<&dyn AnnotationSink>, marker: &str) {
    match sink {
        Some(sink) => sink.set_marker(&to_wide(marker)),
        None => trace!(marker, "no annotation sink; dropping marker"),
    }
}

pub fn begin_region(sink: Option<&dyn AnnotationSink>, marker: &str) {
    match sink {
        Some(sink) => sink.begin_event(&to_wide(marker)),
        None => trace!(marker, "no annotation sink; dropping region"),
    }
}

pub fn end_region(sink: Option<&dyn AnnotationSink>) {
    if let Some(sink) = sink {
        sink.end_event();
    }
}

/// Scoped region: begun on construction, ended on drop.
#[must_use = "the region ends as soon as the guard is dropped"]
pub struct MarkerRegion<'a> {
    sink: Option<&'a dyn AnnotationSink>,
}

impl<'a> MarkerRegion<'a> {
    pub fn new(sink: Option<&'a dyn AnnotationSink>, marker: &str) -> Self {
        begin_region(sink, marker);
        Self { sink }
    }
}

impl Drop for MarkerRegion<'_> {
    fn drop(&mut self) {
        end_region(self.sink);
    }
}

impl std::fmt::Debug for MarkerRegion<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkerRegion")
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}
