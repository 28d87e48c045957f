//! Output formats for a [`ParseResult`].

use std::fmt::Write as _;

use clap::ValueEnum;
use da::{Chunk, ParseResult};

/// How the analysis is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One line per chunk: `id<TAB>head<TAB>text`.
    Text,
    /// Dependents indented beneath their head, roots first.
    Tree,
    /// The raw result as pretty-printed JSON.
    Json,
}

/// Renders `result` in `format`. `with_tokens` adds one line per morpheme
/// under each chunk in the text format.
pub fn render(result: &ParseResult, format: Format, with_tokens: bool) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(render_text(result, with_tokens)),
        Format::Tree => Ok(render_tree(result)),
        Format::Json => Ok(serde_json::to_string_pretty(result)? + "\n"),
    }
}

fn render_text(result: &ParseResult, with_tokens: bool) -> String {
    let mut out = String::new();
    for chunk in &result.chunks {
        let _ = writeln!(out, "{}\t{}\t{}", chunk.id, chunk.head, chunk);
        if with_tokens {
            for token in &chunk.tokens {
                let _ = writeln!(
                    out,
                    "\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    token.surface(),
                    token.reading(),
                    token.base_form(),
                    token.part_of_speech(),
                    token.pos_detail(),
                    token.conjugation_type(),
                    token.conjugation_form(),
                );
            }
        }
    }
    out
}

fn render_tree(result: &ParseResult) -> String {
    let mut out = String::new();
    for root in result.roots() {
        write_subtree(result, root, 0, &mut out);
    }
    out
}

fn write_subtree(result: &ParseResult, chunk: &Chunk, depth: usize, out: &mut String) {
    // Chunk ids are not validated; a duplicate id can make a chunk its own dependent.
    if depth > result.chunks.len() {
        return;
    }
    let _ = writeln!(out, "{}{}", "  ".repeat(depth), chunk);
    for dependent in result.dependents(chunk.id) {
        write_subtree(result, dependent, depth + 1, out);
    }
}
