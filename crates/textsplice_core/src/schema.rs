//! Rule normalization.
//!
//! Callers describe their rules as a single pattern, an ordered list of
//! `(find, replace)` tuples, a mapping from literal text to replacers, or a
//! JSON value holding one of those shapes. [`Schema::into_pairs`] turns any
//! of them into the ordered pairs the engine runs, one pass per pair.

use std::fmt;

use serde_json::Value;
use textsplice_ast::Node;

use crate::{Find, Pattern, RegExpMatch, ReplaceError, Replacement};

/// Replacer callback.
pub type ReplaceFn<'a> = dyn FnMut(&RegExpMatch<'_>) -> Replacement + 'a;

/// How a match is replaced: a constant value or a callback.
pub enum Replace<'a> {
    /// The same replacement for every match.
    Value(Replacement),
    /// A callback invoked once per match.
    Function(Box<ReplaceFn<'a>>),
}

impl<'a> Replace<'a> {
    /// Wraps a replacer callback.
    ///
    /// # Example
    ///
    /// ```rust
    /// use textsplice_ast::Node;
    /// use textsplice_core::Replace;
    ///
    /// let replace = Replace::with(|found| Node::element("strong", vec![Node::text(found.value())]));
    /// # let _ = replace;
    /// ```
    pub fn with<F, R>(mut replacer: F) -> Self
    where
        F: FnMut(&RegExpMatch<'_>) -> R + 'a,
        R: Into<Replacement>,
    {
        Replace::Function(Box::new(move |found| replacer(found).into()))
    }

    pub(crate) fn call(&mut self, found: &RegExpMatch<'_>) -> Replacement {
        match self {
            Replace::Value(replacement) => replacement.clone(),
            Replace::Function(replacer) => replacer(found),
        }
    }
}

impl Default for Replace<'_> {
    fn default() -> Self {
        Replace::Value(Replacement::Delete)
    }
}

impl fmt::Debug for Replace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replace::Value(replacement) => f.debug_tuple("Value").field(replacement).finish(),
            Replace::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl From<Replacement> for Replace<'_> {
    fn from(replacement: Replacement) -> Self {
        Replace::Value(replacement)
    }
}

impl From<&str> for Replace<'_> {
    fn from(value: &str) -> Self {
        Replace::Value(Replacement::text(value))
    }
}

impl From<String> for Replace<'_> {
    fn from(value: String) -> Self {
        Replace::Value(Replacement::text(value))
    }
}

impl From<Node> for Replace<'_> {
    fn from(node: Node) -> Self {
        Replace::Value(Replacement::from(node))
    }
}

impl From<Vec<Node>> for Replace<'_> {
    fn from(nodes: Vec<Node>) -> Self {
        Replace::Value(Replacement::Nodes(nodes))
    }
}

/// The rules of one find-and-replace call.
#[derive(Debug)]
pub enum Schema<'a> {
    /// Ordered `(find, replace)` tuples.
    List(Vec<(Find, Replace<'a>)>),
    /// Literal text mapped to replacers, in enumeration order.
    Map(Vec<(String, Replace<'a>)>),
}

impl<'a> Schema<'a> {
    /// A single pattern; without a replacer every match is deleted.
    pub fn single(find: impl Into<Find>, replace: Option<Replace<'a>>) -> Self {
        Schema::List(vec![(find.into(), replace.unwrap_or_default())])
    }

    /// Builds a list schema from `(find, replace)` tuples.
    pub fn list<F, R, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, R)>,
        F: Into<Find>,
        R: Into<Replace<'a>>,
    {
        Schema::List(
            pairs
                .into_iter()
                .map(|(find, replace)| (find.into(), replace.into()))
                .collect(),
        )
    }

    /// Builds a mapping schema; entries keep the iterator's order.
    pub fn map<K, R, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, R)>,
        K: Into<String>,
        R: Into<Replace<'a>>,
    {
        Schema::Map(
            entries
                .into_iter()
                .map(|(key, replace)| (key.into(), replace.into()))
                .collect(),
        )
    }

    /// Compiles the rules into ordered pairs.
    pub fn into_pairs(self) -> Result<Vec<Pair<'a>>, ReplaceError> {
        let mut pairs = Vec::new();
        match self {
            Schema::List(entries) => {
                for (find, replace) in entries {
                    pairs.push(Pair::new(find.into_pattern()?, replace));
                }
            }
            Schema::Map(entries) => {
                for (key, replace) in entries {
                    pairs.push(Pair::new(Pattern::literal(&key)?, replace));
                }
            }
        }
        Ok(pairs)
    }
}

impl Schema<'static> {
    /// Reads rules from a JSON value.
    ///
    /// - a string is a single literal pattern whose matches are deleted
    /// - an array holds `[find, replace]` tuples (`replace` may be omitted)
    /// - an object maps literal text to replacements, in key order
    ///
    /// A `find` is a string or `{"regex": "...", "global": true,
    /// "ignoreCase": false}`. A replacement is a string, `null` (delete),
    /// `false` (reject), a node object or an array of node objects.
    pub fn from_value(value: &Value) -> Result<Self, ReplaceError> {
        match value {
            Value::String(text) => Ok(Schema::single(text.as_str(), None)),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| tuple_from_value(index, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Schema::List),
            Value::Object(entries) => {
                let mut mapping = Vec::with_capacity(entries.len());
                for (key, value) in entries {
                    let replacement = replacement_from_value(Some(value))?;
                    mapping.push((key.clone(), Replace::Value(replacement)));
                }
                Ok(Schema::Map(mapping))
            }
            _ => Err(ReplaceError::invalid_argument(
                "Expected array or object as schema",
            )),
        }
    }
}

impl From<&str> for Schema<'_> {
    fn from(text: &str) -> Self {
        Schema::single(text, None)
    }
}

impl From<String> for Schema<'_> {
    fn from(text: String) -> Self {
        Schema::single(text, None)
    }
}

impl From<Find> for Schema<'_> {
    fn from(find: Find) -> Self {
        Schema::single(find, None)
    }
}

impl From<regex::Regex> for Schema<'_> {
    fn from(regex: regex::Regex) -> Self {
        Schema::single(regex, None)
    }
}

impl<'a, F, R> From<(F, R)> for Schema<'a>
where
    F: Into<Find>,
    R: Into<Replace<'a>>,
{
    fn from((find, replace): (F, R)) -> Self {
        Schema::single(find, Some(replace.into()))
    }
}

impl<'a, F, R> From<Vec<(F, R)>> for Schema<'a>
where
    F: Into<Find>,
    R: Into<Replace<'a>>,
{
    fn from(pairs: Vec<(F, R)>) -> Self {
        Schema::list(pairs)
    }
}

/// One compiled rule: the unit of a traversal pass.
#[derive(Debug)]
pub struct Pair<'a> {
    pub pattern: Pattern,
    pub replace: Replace<'a>,
}

impl<'a> Pair<'a> {
    fn new(pattern: Pattern, replace: Replace<'a>) -> Self {
        Self { pattern, replace }
    }
}

fn tuple_from_value(index: usize, item: &Value) -> Result<(Find, Replace<'static>), ReplaceError> {
    let tuple = match item {
        Value::Array(tuple) if (1..=2).contains(&tuple.len()) => tuple,
        _ => {
            return Err(ReplaceError::invalid_argument(format!(
                "Expected `[find, replace]` tuple at index {}",
                index
            )));
        }
    };

    let find = find_from_value(&tuple[0])?;
    let replacement = replacement_from_value(tuple.get(1))?;
    Ok((find, Replace::Value(replacement)))
}

fn find_from_value(value: &Value) -> Result<Find, ReplaceError> {
    match value {
        Value::String(text) => Ok(Find::Literal(text.clone())),
        Value::Object(fields) => {
            let Some(source) = fields.get("regex").and_then(Value::as_str) else {
                return Err(ReplaceError::invalid_argument(
                    "Expected `regex` string in pattern object",
                ));
            };
            let global = fields.get("global").and_then(Value::as_bool).unwrap_or(true);
            let ignore_case = fields
                .get("ignoreCase")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            Ok(Find::Pattern(Pattern::with_flags(source, global, ignore_case)?))
        }
        other => Err(ReplaceError::invalid_argument(format!(
            "Expected string or pattern object as find, got {}",
            other
        ))),
    }
}

fn replacement_from_value(value: Option<&Value>) -> Result<Replacement, ReplaceError> {
    match value {
        None | Some(Value::Null) => Ok(Replacement::Delete),
        Some(Value::Bool(false)) => Ok(Replacement::Reject),
        Some(Value::String(text)) => Ok(Replacement::text(text.as_str())),
        Some(node @ Value::Object(_)) => Ok(Replacement::Nodes(vec![node_from_value(node)?])),
        Some(Value::Array(nodes)) => nodes
            .iter()
            .map(node_from_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Replacement::Nodes),
        Some(other) => Err(ReplaceError::invalid_argument(format!(
            "Expected string, null, false or nodes as replacement, got {}",
            other
        ))),
    }
}

fn node_from_value(value: &Value) -> Result<Node, ReplaceError> {
    serde_json::from_value(value.clone())
        .map_err(|e| ReplaceError::invalid_argument(format!("Invalid replacement node: {}", e)))
}
