//! Order Codec
//!
//! Flattens the live menu into `depth:identifier;` tokens and parses them back.
//!
//! Only `%`, `:`, `;` and ASCII control characters inside an identifier are
//! percent-escaped; everything else, non-ASCII labels included, is written
//! verbatim (`0:Файл;`). Strings written before escaping existed contain no
//! `%` sequences and decode unchanged.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use crate::domain::MenuTree;
use crate::tree::flatten_tree;

/// Characters escaped inside an order identifier
const ORDER_ESCAPES: &AsciiSet = &CONTROLS.add(b'%').add(b':').add(b';');

/// One `(depth, identifier)` entry of a persisted order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderToken {
    /// Nesting level; top-level menus are 0
    pub depth: usize,
    pub identifier: String,
}

impl OrderToken {
    pub fn new(depth: usize, identifier: impl Into<String>) -> Self {
        Self {
            depth,
            identifier: identifier.into(),
        }
    }

    /// Parse one `depth:identifier` fragment; None when it is malformed
    fn parse(fragment: &str) -> Option<Self> {
        let (depth, identifier) = fragment.split_once(':')?;
        let depth = depth.trim().parse::<usize>().ok()?;
        let identifier = percent_decode_str(identifier).decode_utf8_lossy().into_owned();
        Some(Self { depth, identifier })
    }
}

impl std::fmt::Display for OrderToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{};",
            self.depth,
            escape_delimiters(&self.identifier, ORDER_ESCAPES)
        )
    }
}

/// Percent-escape the ASCII characters of `text` that are in `set`.
///
/// Non-ASCII characters pass through untouched.
pub(crate) fn escape_delimiters(text: &str, set: &'static AsciiSet) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        if ch.is_ascii() {
            escaped.extend(utf8_percent_encode(ch.encode_utf8(&mut buf), set));
        } else {
            escaped.push(ch);
        }
    }
    escaped
}

/// Saved shape and order of a menu
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOrder {
    tokens: Vec<OrderToken>,
}

impl MenuOrder {
    pub fn new(tokens: Vec<OrderToken>) -> Self {
        Self { tokens }
    }

    /// Snapshot the current order of `menu`. Read-only.
    pub fn from_menu(menu: &MenuTree) -> Self {
        let tokens = flatten_tree(menu)
            .into_iter()
            .filter_map(|(id, depth)| {
                menu.get(id)
                    .map(|item| OrderToken::new(depth, item.order_identifier()))
            })
            .collect();
        Self { tokens }
    }

    /// Parse a persisted order.
    ///
    /// Never fails: empty fragments, fragments without `:` and fragments with a
    /// non-numeric depth are dropped and the rest is kept.
    pub fn parse(text: &str) -> Self {
        let mut tokens = Vec::new();
        for fragment in text.split(';').filter(|f| !f.is_empty()) {
            match OrderToken::parse(fragment) {
                Some(token) => tokens.push(token),
                None => log::debug!("Skipping malformed order entry {:?}", fragment),
            }
        }
        Self { tokens }
    }

    pub fn tokens(&self) -> &[OrderToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Display for MenuOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Encode the current menu order as a persisted string
pub fn encode(menu: &MenuTree) -> String {
    MenuOrder::from_menu(menu).to_string()
}

/// Decode a persisted string into tokens
pub fn decode(text: &str) -> Vec<OrderToken> {
    MenuOrder::parse(text).tokens
}
