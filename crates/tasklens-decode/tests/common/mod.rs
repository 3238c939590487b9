//! Shared helpers for decoding tests.
#![allow(dead_code, unused_imports)]

pub use tasklens_decode::{
    Engine, RecordKind, Registration, Registry, RenderConfig, RenderedRecord,
};

pub fn plain_engine() -> Engine {
    Engine::new(RenderConfig::plain()).expect("static registry validates")
}

/// Decode a single record without observing it first.
pub fn decode(xml: &str, kind: RecordKind) -> RenderedRecord {
    decode_with(&plain_engine(), xml, kind)
}

pub fn decode_with(engine: &Engine, xml: &str, kind: RecordKind) -> RenderedRecord {
    let doc = roxmltree::Document::parse(xml).expect("parse record");
    engine.decoder().decode(doc.root_element(), kind)
}

/// Primary line of a task action.
pub fn action_line(xml: &str) -> String {
    decode(xml, RecordKind::Task).primary().to_string()
}

/// Observe and render a `<Task>` element, returning every emitted line.
pub fn render_task(engine: &mut Engine, xml: &str) -> Vec<String> {
    let doc = roxmltree::Document::parse(xml).expect("parse task");
    let mut lines = Vec::new();
    engine.render_task(doc.root_element(), &mut lines);
    lines
}
