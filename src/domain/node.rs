//! Metadata trees: nested mappings and sequences with scalar leaves.
//!
//! A [`Node`] owns its children, so every tree is finite and acyclic and the
//! traversals below always terminate.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use termtree::Tree;

/// A non-container value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Integer(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    Float(f64),
    String(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Integer(i) => write!(f, "{i}"),
            Scalar::Unsigned(u) => write!(f, "{u}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

/// A metadata tree node.
///
/// `Mapping` keeps entries in insertion order; `Sequence` in index order.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Mapping(Vec<(String, Node)>),
    Sequence(Vec<Node>),
    Leaf(Scalar),
}

/// Leaf function that does nothing; `visit(&node, identity)` is a no-op walk.
pub fn identity(_: &Scalar) {}

/// Apply `f` to every leaf of `node`, in natural order.
pub fn visit<F: FnMut(&Scalar)>(node: &Node, f: F) {
    node.visit(f)
}

/// Walk every leaf of `node` without a leaf function.
pub fn visit_leaves(node: &Node) {
    visit(node, identity)
}

impl Node {
    pub fn leaf(value: impl Into<Scalar>) -> Self {
        Node::Leaf(value.into())
    }

    pub fn null() -> Self {
        Node::Leaf(Scalar::Null)
    }

    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn sequence<I: IntoIterator<Item = Node>>(items: I) -> Self {
        Node::Sequence(items.into_iter().collect())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn is_container(&self) -> bool {
        !self.is_leaf()
    }

    /// Look up a direct child of a mapping by key.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Apply `f` to every leaf, mapping entries first-to-last, sequence items by index.
    pub fn visit<F: FnMut(&Scalar)>(&self, mut f: F) {
        self.visit_inner(&mut f);
    }

    fn visit_inner<F: FnMut(&Scalar)>(&self, f: &mut F) {
        match self {
            Node::Mapping(entries) => {
                for (_, child) in entries {
                    child.visit_inner(f);
                }
            }
            Node::Sequence(items) => {
                for item in items {
                    item.visit_inner(f);
                }
            }
            Node::Leaf(scalar) => f(scalar),
        }
    }

    /// Like [`Node::visit`], but stops at the first error returned by `f`
    /// and hands it back untouched.
    pub fn try_visit<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&Scalar) -> Result<(), E>,
    {
        self.try_visit_inner(&mut f)
    }

    fn try_visit_inner<E, F>(&self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&Scalar) -> Result<(), E>,
    {
        match self {
            Node::Mapping(entries) => {
                for (_, child) in entries {
                    child.try_visit_inner(f)?;
                }
                Ok(())
            }
            Node::Sequence(items) => {
                for item in items {
                    item.try_visit_inner(f)?;
                }
                Ok(())
            }
            Node::Leaf(scalar) => f(scalar),
        }
    }

    /// Visit leaves together with their field path.
    ///
    /// Paths join mapping keys and sequence indices with `sep`, e.g.
    /// `publications.0.title`. A leaf at the root has the empty path.
    pub fn visit_with_path<F: FnMut(&str, &Scalar)>(&self, sep: &str, mut f: F) {
        let mut path = String::new();
        self.visit_path_inner(sep, &mut path, &mut f);
    }

    fn visit_path_inner<F: FnMut(&str, &Scalar)>(&self, sep: &str, path: &mut String, f: &mut F) {
        match self {
            Node::Mapping(entries) => {
                for (key, child) in entries {
                    let len = path.len();
                    push_segment(path, sep, key);
                    child.visit_path_inner(sep, path, f);
                    path.truncate(len);
                }
            }
            Node::Sequence(items) => {
                for (index, item) in items.iter().enumerate() {
                    let len = path.len();
                    push_segment(path, sep, &index.to_string());
                    item.visit_path_inner(sep, path, f);
                    path.truncate(len);
                }
            }
            Node::Leaf(scalar) => f(path, scalar),
        }
    }

    pub fn leaves(&self) -> Vec<&Scalar> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Scalar>) {
        match self {
            Node::Mapping(entries) => entries.iter().for_each(|(_, c)| c.collect_leaves(out)),
            Node::Sequence(items) => items.iter().for_each(|c| c.collect_leaves(out)),
            Node::Leaf(scalar) => out.push(scalar),
        }
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        self.visit(|_| count += 1);
        count
    }

    /// Container nesting depth. A leaf has depth 0, an empty container 1.
    pub fn depth(&self) -> usize {
        match self {
            Node::Mapping(entries) => {
                1 + entries.iter().map(|(_, c)| c.depth()).max().unwrap_or(0)
            }
            Node::Sequence(items) => 1 + items.iter().map(Node::depth).max().unwrap_or(0),
            Node::Leaf(_) => 0,
        }
    }

    /// Render the tree for display, labelling the root with `root`.
    pub fn to_tree(&self, root: &str) -> Tree<String> {
        match self {
            Node::Leaf(scalar) => Tree::new(format!("{root}: {scalar}")),
            Node::Mapping(entries) => Tree::new(root.to_string())
                .with_leaves(entries.iter().map(|(key, child)| child.to_tree(key))),
            Node::Sequence(items) => Tree::new(root.to_string()).with_leaves(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, child)| child.to_tree(&format!("[{index}]"))),
            ),
        }
    }
}

fn push_segment(path: &mut String, sep: &str, segment: &str) {
    if !path.is_empty() {
        path.push_str(sep);
    }
    path.push_str(segment);
}

// ============================================================
// serde
// ============================================================

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Integer(i) => serializer.serialize_i64(*i),
            Scalar::Unsigned(u) => serializer.serialize_u64(*u),
            Scalar::Float(x) => serializer.serialize_f64(*x),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Node::Sequence(items) => serializer.collect_seq(items),
            Node::Leaf(scalar) => scalar.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}

const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping, a sequence or a scalar value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Node, E> {
        Ok(Node::leaf(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Node, E> {
        Ok(Node::leaf(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Node, E> {
        Ok(match i64::try_from(v) {
            Ok(i) => Node::leaf(i),
            Err(_) => Node::Leaf(Scalar::Unsigned(v)),
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Node, E> {
        Ok(Node::leaf(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Node, E> {
        Ok(Node::leaf(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Node, E> {
        Ok(Node::leaf(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::null())
    }

    fn visit_none<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::null())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Node, D::Error> {
        Node::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Node, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Node::Sequence(items))
    }

    // Repeated keys keep their first position and take the last value.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Node, A::Error> {
        let mut entries: Vec<(String, Node)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<String>()? {
            // toml hands datetimes over as a single-entry map.
            if entries.is_empty() && key == TOML_DATETIME_KEY {
                let value: String = map.next_value()?;
                return Ok(Node::leaf(value));
            }
            let value: Node = map.next_value()?;
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => entries.push((key, value)),
            }
        }
        Ok(Node::Mapping(entries))
    }
}
