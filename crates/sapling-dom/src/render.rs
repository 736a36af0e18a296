//! Indented text rendering.
//!
//! Each tag is written as `<name attr="value" ...>` on its own line, its
//! children two spaces deeper, then a matching `</name>` line. Text is a
//! quoted line; a comment is a three-line `<!--` / body / `-->` block.
//! The output format is relied on by golden-output tests, so it must not drift.
//!
//! The walk keeps its own stack, so nesting depth is bounded by memory rather
//! than by the thread's call stack.

use std::fmt::{self, Write};
use std::io;

use crate::{DomTree, NodeId, NodeType};

/// Indentation added per nesting level.
pub const INDENT: &str = "  ";

/// One pending step of the walk.
enum Step {
    /// Write the node's opening line(s) and schedule its children.
    Enter(NodeId, usize),
    /// Write the closing line of an element whose children are done.
    Leave(NodeId, usize),
}

/// Grow or shrink `indent` to `base` bytes of prefix plus `depth` levels.
fn set_depth(indent: &mut String, base: usize, depth: usize) {
    let target = base + depth * INDENT.len();
    indent.truncate(target);
    while indent.len() < target {
        indent.push_str(INDENT);
    }
}

/// Render the subtree at `id` into `out`, each line starting with `prefix`.
///
/// # Errors
///
/// Returns an error only if `out` does.
pub fn write_node<W: Write>(tree: &DomTree, id: NodeId, prefix: &str, out: &mut W) -> fmt::Result {
    let mut indent = String::from(prefix);
    let mut stack = vec![Step::Enter(id, 0)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(id, depth) => {
                let Some(node) = tree.get(id) else {
                    continue;
                };
                set_depth(&mut indent, prefix.len(), depth);
                match &node.node_type {
                    NodeType::Element(data) => {
                        write!(out, "{indent}<{}", data.tag_name)?;
                        for attr in &data.attrs {
                            write!(out, " {}", attr.name)?;
                            if !attr.value.is_empty() {
                                write!(out, "=\"{}\"", attr.value)?;
                            }
                        }
                        writeln!(out, ">")?;

                        stack.push(Step::Leave(id, depth));
                        stack.extend(
                            node.children
                                .iter()
                                .rev()
                                .map(|&child| Step::Enter(child, depth + 1)),
                        );
                    }
                    NodeType::Text(value) => writeln!(out, "{indent}\"{value}\"")?,
                    NodeType::Comment(value) => {
                        writeln!(out, "{indent}<!--")?;
                        writeln!(out, "{indent}{INDENT}{value}")?;
                        writeln!(out, "{indent}-->")?;
                    }
                }
            }
            Step::Leave(id, depth) => {
                if let Some(name) = tree.tag_name(id) {
                    set_depth(&mut indent, prefix.len(), depth);
                    writeln!(out, "{indent}</{name}>")?;
                }
            }
        }
    }
    Ok(())
}

/// Adapts an `io::Write` sink so the renderer can stream into it.
struct IoSink<W: io::Write>(W);

impl<W: io::Write> Write for IoSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl DomTree {
    /// Render every top-level node under the document root.
    ///
    /// The root itself is not written.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out);
        out
    }

    /// Write every top-level node under the document root into `out`.
    ///
    /// # Errors
    ///
    /// Returns an error only if `out` does.
    pub fn write_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        for &child in self.children(self.root()) {
            write_node(self, child, "", out)?;
        }
        Ok(())
    }

    /// Render the subtree at `id`, the node itself included.
    #[must_use]
    pub fn render_node(&self, id: NodeId) -> String {
        let mut out = String::new();
        let _ = write_node(self, id, "", &mut out);
        out
    }
}

/// Print the tree to stdout in the rendering format.
///
/// Output is streamed rather than collected first. A closed stdout ends the
/// printing silently.
pub fn print_tree(tree: &DomTree) {
    let mut sink = IoSink(io::BufWriter::new(io::stdout().lock()));
    if tree.write_to(&mut sink).is_ok() {
        let _ = io::Write::flush(&mut sink.0);
    }
}
