//! Benchmarks for hot editor-core operations
//!
//! Run with: cargo bench editor_ops

use std::collections::HashMap;

use fillin::measure::MonospaceMeasure;
use fillin::render::render;
use fillin::template::parse;
use fillin::value::extract_value;
use fillin::{EditSurface, Key, Selection, TreeSurface};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn template_with_fields(field_count: usize) -> String {
    let mut template = String::new();
    for i in 0..field_count {
        template.push_str("literal run ");
        template.push_str(&format!("[field{i}]"));
    }
    template
}

// ============================================================================
// Parsing
// ============================================================================

#[divan::bench(args = [4, 32, 256])]
fn parse_template(field_count: usize) {
    let template = template_with_fields(field_count);
    divan::black_box(parse(&template));
}

// ============================================================================
// Rendering and value extraction
// ============================================================================

#[divan::bench(args = [4, 32, 256])]
fn render_and_extract(field_count: usize) {
    let template = template_with_fields(field_count);
    let segments = parse(&template);
    let mut surface = TreeSurface::new();
    render(
        &mut surface,
        &segments,
        &template,
        None,
        &HashMap::new(),
        &MonospaceMeasure::default(),
    );
    divan::black_box(extract_value(&surface));
}

// ============================================================================
// Caret navigation sweep
// ============================================================================

#[divan::bench(args = [4, 32, 256])]
fn arrow_sweep(field_count: usize) {
    let template = template_with_fields(field_count);
    let segments = parse(&template);
    let mut surface = TreeSurface::new();
    render(
        &mut surface,
        &segments,
        &template,
        None,
        &HashMap::new(),
        &MonospaceMeasure::default(),
    );

    // Press Right at the end of every literal run, crossing into each field.
    for i in 0..surface.node_count() {
        let end = match surface.node(i) {
            Some(node) if !node.is_field() => node.char_len(),
            _ => continue,
        };
        surface.set_selection(Selection::collapsed(fillin::Caret::in_child(i, end)));
        fillin::navigate::handle_arrow(&mut surface, Key::ArrowRight);
    }
    divan::black_box(surface.selection());
}
