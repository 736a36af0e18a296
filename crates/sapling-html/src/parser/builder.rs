use sapling_common::diagnostics;
use sapling_dom::{DomTree, ElementData, NodeId, NodeType};

use crate::tokenizer::{Token, TokenKind};

/// Component name used when reporting diagnostics.
const COMPONENT: &str = "Tree Builder";

/// Name of the pseudo-tag created for a document type declaration.
pub const DOCTYPE_TAG: &str = "!doctype";

/// A recoverable problem found while building the tree.
///
/// Issues are advisory: the tree is complete whether or not any were raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Human-readable description.
    pub message: String,
    /// Index into the token stream where this issue was encountered.
    pub token_index: usize,
    /// The node the issue is about, if any.
    pub node: Option<NodeId>,
}

/// Builds a [`DomTree`] from a token stream.
///
/// The only state carried between tokens is the current insertion point: the
/// innermost tag still receiving children. It starts at the document root.
/// Tags left open when the tokens run out stay open; there is no implicit
/// closing pass.
pub struct MarkupParser {
    /// Tree under construction. `NodeId::ROOT` is the `document` element.
    tree: DomTree,

    /// Input tokens from the tokenizer.
    tokens: Vec<Token>,

    /// Current position in token stream.
    token_index: usize,

    /// Current insertion point.
    current: NodeId,

    /// Issues encountered during parsing.
    issues: Vec<ParseIssue>,
}

impl MarkupParser {
    /// Create a new parser from a token stream.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tree: DomTree::new(),
            tokens,
            token_index: 0,
            current: NodeId::ROOT,
            issues: Vec::new(),
        }
    }

    /// Get all issues encountered so far.
    #[must_use]
    pub fn get_issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// The tree as built so far.
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// The tag new nodes are currently appended to.
    #[must_use]
    pub const fn current_node(&self) -> NodeId {
        self.current
    }

    /// Process every remaining token, keeping the parser for inspection.
    pub fn run_to_end(&mut self) {
        while self.token_index < self.tokens.len() {
            self.process_token();
            self.token_index += 1;
        }
    }

    /// Run the parser and return the tree.
    #[must_use]
    pub fn run(self) -> DomTree {
        self.run_with_issues().0
    }

    /// Run the parser and return both the tree and any issues.
    #[must_use]
    pub fn run_with_issues(mut self) -> (DomTree, Vec<ParseIssue>) {
        self.run_to_end();
        (self.tree, self.issues)
    }

    /// Offer the token at `token_index` to every rule, in a fixed order.
    ///
    /// Each rule only acts on its own token kind, so at most one of them
    /// builds anything. A rule may look ahead past its own token but never
    /// moves the main cursor; the caller always advances by exactly one.
    /// Tokens a rule looked ahead at (names, attributes, markers) match no
    /// rule when reached.
    fn process_token(&mut self) {
        let at = self.token_index;
        self.parse_doctype(at);
        self.parse_tag_open(at);
        self.parse_tag_close(at);
        self.parse_text(at);
        self.parse_comment(at);
    }

    fn kind_at(&self, index: usize) -> Option<TokenKind> {
        self.tokens.get(index).map(|token| token.kind)
    }

    fn value_at(&self, index: usize) -> String {
        self.tokens
            .get(index)
            .map(|token| token.value.clone())
            .unwrap_or_default()
    }

    fn insert(&mut self, node_type: NodeType) -> NodeId {
        let id = self.tree.alloc(node_type);
        self.tree.append_child(self.current, id);
        id
    }

    fn parent_or_root(&self, id: NodeId) -> NodeId {
        self.tree.parent(id).unwrap_or(NodeId::ROOT)
    }

    /// A document type keyword becomes a `!doctype` pseudo-tag whose single
    /// valueless attribute is the keyword. It never becomes the insertion point.
    fn parse_doctype(&mut self, at: usize) {
        if self.kind_at(at) != Some(TokenKind::DocumentTypeKeyword) {
            return;
        }
        let mut data = ElementData::new(DOCTYPE_TAG);
        data.add_attribute(self.value_at(at), "");
        let _ = self.insert(NodeType::Element(data));
    }

    /// `<` name attributes (`>` | `/>`).
    ///
    /// Without a tag name right after the marker (as for the `<!doctype`
    /// opener) nothing is built and the other rules get their turn.
    fn parse_tag_open(&mut self, at: usize) {
        if self.kind_at(at) != Some(TokenKind::TagOpenMarker) {
            return;
        }
        let mut cursor = at + 1;

        if self.kind_at(cursor) != Some(TokenKind::TagName) {
            return;
        }
        let tag_name = self.value_at(cursor);
        cursor += 1;

        let mut data = ElementData::new(tag_name.clone());
        while self.kind_at(cursor) == Some(TokenKind::AttributeName) {
            let name = self.value_at(cursor);
            cursor += 1;

            let value = if self.kind_at(cursor) == Some(TokenKind::AttributeValue) {
                cursor += 1;
                self.value_at(cursor - 1)
            } else {
                String::new()
            };
            data.add_attribute(name, value);
        }

        let element = self.insert(NodeType::Element(data));
        self.current = element;

        match self.kind_at(cursor) {
            Some(TokenKind::TagCloseMarker) => {
                diagnostics::info(COMPONENT, &format!("tag: {tag_name} not closed yet"));
            }
            Some(TokenKind::SelfCloseMarker) => {
                if let Some(data) = self.tree.as_element_mut(element) {
                    data.closed = true;
                }
                self.current = self.parent_or_root(element);
                diagnostics::info(COMPONENT, &format!("tag: {tag_name} self-closing"));
            }
            _ => {}
        }
    }

    /// `</` name: resolve against the chain of open tags.
    ///
    /// Walk up from the insertion point. A tag with the same name is closed
    /// and its parent becomes the insertion point. A differently named tag
    /// that is already closed is skipped. A differently named tag that is
    /// still open stops the walk: the closing tag is dropped and an issue is
    /// recorded.
    fn parse_tag_close(&mut self, at: usize) {
        if self.kind_at(at) != Some(TokenKind::TagEndMarker) {
            return;
        }
        if self.kind_at(at + 1) != Some(TokenKind::TagName) {
            return;
        }
        let tag_name = self.value_at(at + 1);
        diagnostics::info(COMPONENT, &format!("tag: {tag_name} is now resolving parent"));

        let mut node = Some(self.current);
        while let Some(id) = node {
            let Some(data) = self.tree.as_element_mut(id) else {
                break;
            };
            diagnostics::info(COMPONENT, &format!("  node tag: {}", data.tag_name));

            if data.tag_name == tag_name {
                data.closed = true;
                self.current = self.parent_or_root(id);
                diagnostics::info(
                    COMPONENT,
                    &format!("  node tag: {tag_name} is closed successfully"),
                );
                break;
            }

            if !data.closed {
                let message = format!("tag: {} not closed", data.tag_name);
                diagnostics::warn(COMPONENT, &message);
                self.issues.push(ParseIssue {
                    message,
                    token_index: at,
                    node: Some(id),
                });
                return;
            }

            node = self.tree.parent(id);
        }
    }

    fn parse_text(&mut self, at: usize) {
        if self.kind_at(at) != Some(TokenKind::Text) {
            return;
        }
        let _ = self.insert(NodeType::Text(self.value_at(at)));
    }

    fn parse_comment(&mut self, at: usize) {
        if self.kind_at(at) != Some(TokenKind::Comment) {
            return;
        }
        let _ = self.insert(NodeType::Comment(self.value_at(at)));
    }
}
