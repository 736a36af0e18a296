//! Golden-output tests for the tree renderer and the JSON view.

use std::fmt;

use sapling_dom::json::MAX_JSON_DEPTH;
use sapling_dom::render::write_node;
use sapling_dom::{DomTree, ElementData, NodeId, NodeType};

fn sample_tree() -> DomTree {
    let mut tree = DomTree::new();

    let mut doctype = ElementData::new("!doctype");
    doctype.add_attribute("html", "");
    doctype.closed = true;
    let doctype = tree.alloc(NodeType::Element(doctype));
    tree.append_child(NodeId::ROOT, doctype);

    let mut div = ElementData::new("div");
    div.add_attribute("id", "main");
    div.add_attribute("hidden", "");
    div.closed = true;
    let div = tree.alloc(NodeType::Element(div));
    tree.append_child(NodeId::ROOT, div);

    let text = tree.alloc(NodeType::Text("hello world".to_string()));
    tree.append_child(div, text);
    let comment = tree.alloc(NodeType::Comment(" note ".to_string()));
    tree.append_child(div, comment);
    let br = tree.alloc(NodeType::Element(ElementData::new("br")));
    tree.append_child(div, br);

    tree
}

#[test]
fn test_render_golden_output() {
    let tree = sample_tree();
    let expected = "\
<!doctype html>
</!doctype>
<div id=\"main\" hidden>
  \"hello world\"
  <!--
     note 
  -->
  <br>
  </br>
</div>
";
    assert_eq!(tree.render(), expected);
}

#[test]
fn test_render_is_idempotent() {
    let tree = sample_tree();
    let first = tree.render();
    let second = tree.render();
    assert_eq!(first, second);
}

#[test]
fn test_write_node_with_prefix() {
    let tree = sample_tree();
    let div = tree.children(NodeId::ROOT)[1];
    let text = tree.children(div)[0];

    let mut out = String::new();
    write_node(&tree, text, "    ", &mut out).unwrap();
    assert_eq!(out, "    \"hello world\"\n");
}

#[test]
fn test_render_node_includes_root() {
    let tree = DomTree::new();
    assert_eq!(tree.render(), "");
    assert_eq!(tree.render_node(NodeId::ROOT), "<document>\n</document>\n");
}

#[test]
fn test_json_view_shape() {
    let tree = sample_tree();
    let json = tree.to_json().unwrap();

    assert_eq!(json["type"], "tag");
    assert_eq!(json["name"], "document");
    let div = &json["children"][1];
    assert_eq!(div["name"], "div");
    assert_eq!(div["closed"], true);
    assert_eq!(div["attributes"][0]["name"], "id");
    assert_eq!(div["attributes"][0]["value"], "main");
    assert_eq!(div["children"][0]["type"], "text");
    assert_eq!(div["children"][0]["value"], "hello world");
    assert_eq!(div["children"][1]["type"], "comment");
    assert_eq!(div["children"][2]["closed"], false);

    let pretty = tree.to_json_pretty().unwrap();
    assert!(pretty.contains("\"name\": \"!doctype\""));
}

/// A chain of `depth` unclosed `<a>` tags under the root.
fn nested_tree(depth: usize) -> DomTree {
    let mut tree = DomTree::new();
    let mut parent = NodeId::ROOT;
    for _ in 0..depth {
        let id = tree.alloc(NodeType::Element(ElementData::new("a")));
        tree.append_child(parent, id);
        parent = id;
    }
    tree
}

/// Counts lines and the widest line without storing the output.
#[derive(Default)]
struct LineCounter {
    lines: usize,
    current: usize,
    widest: usize,
}

impl fmt::Write for LineCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for segment in s.split_inclusive('\n') {
            if let Some(line) = segment.strip_suffix('\n') {
                self.current += line.len();
                self.widest = self.widest.max(self.current);
                self.current = 0;
                self.lines += 1;
            } else {
                self.current += segment.len();
            }
        }
        Ok(())
    }
}

#[test]
fn test_render_deeply_nested_tree() {
    let depth = 100_000;
    let tree = nested_tree(depth);

    let mut counter = LineCounter::default();
    tree.write_to(&mut counter).unwrap();
    assert_eq!(counter.lines, 2 * depth);
    assert_eq!(counter.current, 0);
    assert_eq!(counter.widest, (depth - 1) * 2 + "</a>".len());
}

#[test]
fn test_render_nested_closing_lines_follow_children() {
    let tree = nested_tree(3);
    assert_eq!(
        tree.render(),
        "<a>\n  <a>\n    <a>\n    </a>\n  </a>\n</a>\n"
    );
}

#[test]
fn test_json_refuses_trees_past_depth_cap() {
    let tree = nested_tree(100_000);
    assert!(tree.to_json_pretty().is_err());
    assert!(tree.to_json().is_err());

    // Root at depth 0, so this many tags sit exactly at the cap.
    let tree = nested_tree(MAX_JSON_DEPTH);
    let json = tree.to_json().unwrap();
    let mut node = &json;
    for _ in 0..MAX_JSON_DEPTH {
        node = &node["children"][0];
    }
    assert_eq!(node["name"], "a");
    assert_eq!(node["children"], serde_json::json!([]));
}
