//! Tests for arena construction and traversal.

use sapling_dom::{DOCUMENT_TAG, DomTree, ElementData, NodeId, NodeType};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData::new(tag)))
}

#[test]
fn test_new_tree_has_document_root() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root(), NodeId::ROOT);
    assert_eq!(tree.tag_name(NodeId::ROOT), Some(DOCUMENT_TAG));
    assert_eq!(tree.parent(NodeId::ROOT), None);
    assert!(!tree.as_element(NodeId::ROOT).unwrap().closed);
}

#[test]
fn test_append_child_links_parent_and_siblings() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = tree.alloc(NodeType::Text("b".to_string()));
    let c = tree.alloc(NodeType::Comment(" c ".to_string()));
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    assert_eq!(tree.children(parent), &[a, b, c]);
    assert_eq!(tree.parent(a), Some(parent));
    assert_eq!(tree.first_child(parent), Some(a));
    assert_eq!(tree.last_child(parent), Some(c));
    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(c), Some(b));
    assert_eq!(tree.next_sibling(c), None);
    assert_eq!(tree.as_text(b), Some("b"));
    assert_eq!(tree.as_comment(c), Some(" c "));
}

#[test]
fn test_ancestors_and_depth() {
    let mut tree = DomTree::new();
    let html = alloc_element(&mut tree, "html");
    let body = alloc_element(&mut tree, "body");
    let p = alloc_element(&mut tree, "p");
    tree.append_child(NodeId::ROOT, html);
    tree.append_child(html, body);
    tree.append_child(body, p);

    let chain: Vec<NodeId> = tree.ancestors(p).collect();
    assert_eq!(chain, vec![body, html, NodeId::ROOT]);
    assert_eq!(tree.depth(p), 3);
    assert_eq!(tree.depth(NodeId::ROOT), 0);
    assert!(tree.is_descendant_of(p, html));
    assert!(!tree.is_descendant_of(html, p));
}

#[test]
fn test_descendants_in_document_order() {
    let mut tree = DomTree::new();
    let ul = alloc_element(&mut tree, "ul");
    let li1 = alloc_element(&mut tree, "li");
    let li2 = alloc_element(&mut tree, "li");
    let text = tree.alloc(NodeType::Text("one".to_string()));
    tree.append_child(NodeId::ROOT, ul);
    tree.append_child(ul, li1);
    tree.append_child(li1, text);
    tree.append_child(ul, li2);

    let order: Vec<NodeId> = tree.descendants(NodeId::ROOT).collect();
    assert_eq!(order, vec![NodeId::ROOT, ul, li1, text, li2]);
}

#[test]
fn test_attributes_keep_order_and_duplicates() {
    let mut data = ElementData::new("input");
    data.add_attribute("disabled", "");
    data.add_attribute("type", "text");
    data.add_attribute("type", "radio");

    let names: Vec<&str> = data.attrs.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["disabled", "type", "type"]);
    assert_eq!(data.attribute("type"), Some("text"));
    assert_eq!(data.attribute("disabled"), Some(""));
    assert_eq!(data.attribute("missing"), None);
}

#[test]
fn test_as_element_mut_sets_closed() {
    let mut tree = DomTree::new();
    let br = alloc_element(&mut tree, "br");
    tree.append_child(NodeId::ROOT, br);
    tree.as_element_mut(br).unwrap().closed = true;
    assert!(tree.as_element(br).unwrap().closed);
    assert!(tree.as_element_mut(NodeId(99)).is_none());
}
