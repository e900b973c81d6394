//! Collection operations dispatched at runtime over [`serde_json::Value`].
//!
//! The statically typed operations in [`collection`](crate::collection) pick
//! an implementation from the input's type. Dynamic data has a single type, so
//! the functions here inspect the variant instead and report unsupported
//! shapes as [`CollectionError::InvalidCollectionType`].
//!
//! | Variant              | `map`    | `bind`   | `sort`   | `insert`          |
//! |----------------------|----------|----------|----------|-------------------|
//! | `Array`              | `Array`  | `Array`  | `Array`  | push              |
//! | `Object`             | `Object` | error    | error    | `[key, value]`    |
//! | `String` (non-empty) | `Array`  | `Array`  | `Array`  | error             |
//! | `String` (empty)     | error    | error    | `[]`     | error             |
//! | `Null`, `Bool`, `Number` | error | error | error | error       |
//!
//! Strings are treated as sequences of one-character strings.
//!
//! # Examples
//!
//! ```rust
//! use polycomb::value;
//! use serde_json::{Value, json};
//!
//! let increment = value::map(|x: Value| json!(x.as_i64().unwrap_or_default() + 1));
//! assert_eq!(increment(json!([1, 2, 3])).unwrap(), json!([2, 3, 4]));
//! assert_eq!(increment(json!({"a": 1})).unwrap(), json!({"a": 2}));
//! assert!(increment(Value::Null).is_err());
//! ```

use std::cmp::Ordering;

use serde_json::{Map, Value};

use crate::collection::sort_in_place;
use crate::error::CollectionError;

/// Returns `true` if `value` can be traversed element by element.
///
/// Arrays and strings (including the empty string) are iterable. Objects
/// are not: they are mapped by value but never traversed.
///
/// # Examples
///
/// ```rust
/// use polycomb::value::is_iterable;
/// use serde_json::json;
///
/// assert!(is_iterable(&json!([])));
/// assert!(is_iterable(&json!("")));
/// assert!(!is_iterable(&json!({})));
/// assert!(!is_iterable(&json!(1)));
/// ```
#[must_use]
pub const fn is_iterable(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::String(_))
}

/// Builds a reusable, shape-preserving map over a dynamic value.
///
/// Arrays keep their length and order; objects keep their keys; a non-empty
/// string becomes an array holding `function` applied to each character.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidCollectionType`] for `null`, booleans,
/// numbers and the empty string.
pub fn map<F>(function: F) -> impl Fn(Value) -> Result<Value, CollectionError>
where
    F: Fn(Value) -> Value,
{
    move |collection: Value| {
        tracing::trace!(shape = describe(&collection), "value::map");
        match collection {
            Value::Array(elements) => Ok(Value::Array(
                elements.into_iter().map(&function).collect(),
            )),
            Value::Object(fields) => Ok(Value::Object(
                fields
                    .into_iter()
                    .map(|(key, field)| (key, function(field)))
                    .collect(),
            )),
            Value::String(text) if !text.is_empty() => {
                Ok(Value::Array(characters(&text).map(&function).collect()))
            }
            other => Err(CollectionError::invalid_collection_type(
                "map",
                describe(&other),
            )),
        }
    }
}

/// Builds a reusable bind over a dynamic value.
///
/// For an array, each result that is an array is spliced into the output and
/// any other result is kept as a single element. For a non-empty string, each
/// character's result must itself be iterable: arrays are spliced, strings are
/// spliced character by character.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidCollectionType`] for `null`, booleans,
/// numbers, objects and the empty string, and when a character's result is
/// not iterable.
///
/// # Examples
///
/// ```rust
/// use polycomb::value;
/// use serde_json::{Value, json};
///
/// let twice = value::bind(|x: Value| json!([x.clone(), x]));
/// assert_eq!(twice(json!([1, 2])).unwrap(), json!([1, 1, 2, 2]));
/// assert_eq!(twice(json!("ab")).unwrap(), json!(["a", "a", "b", "b"]));
/// ```
pub fn bind<F>(function: F) -> impl Fn(Value) -> Result<Value, CollectionError>
where
    F: Fn(Value) -> Value,
{
    move |collection: Value| {
        tracing::trace!(shape = describe(&collection), "value::bind");
        match collection {
            Value::Array(elements) => {
                let mut output = Vec::with_capacity(elements.len());
                for element in elements {
                    match function(element) {
                        Value::Array(produced) => output.extend(produced),
                        single => output.push(single),
                    }
                }
                Ok(Value::Array(output))
            }
            Value::String(text) if !text.is_empty() => {
                let mut output = Vec::with_capacity(text.len());
                for character in characters(&text) {
                    let produced = function(character);
                    if !is_iterable(&produced) {
                        return Err(CollectionError::invalid_collection_type(
                            "bind",
                            describe(&produced),
                        ));
                    }
                    output.extend(into_elements(produced)?);
                }
                Ok(Value::Array(output))
            }
            other => Err(CollectionError::invalid_collection_type(
                "bind",
                describe(&other),
            )),
        }
    }
}

/// Builds a reusable sort over a dynamic value.
///
/// Arrays are sorted; strings (the empty string included) become a sorted
/// array of their characters. The comparator follows the "strictly before"
/// model of [`collection::sort`](crate::collection::sort), so
/// [`by`](crate::collection::by) comparators are safe here.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidCollectionType`] for anything other than
/// an array or a string.
///
/// # Examples
///
/// ```rust
/// use polycomb::collection::by;
/// use polycomb::value;
/// use serde_json::{Value, json};
///
/// let by_age = value::sort(by(|person: &Value| person["age"].as_u64()));
/// let people = json!([{"name": "Bob", "age": 40}, {"name": "Eve", "age": 25}]);
/// assert_eq!(
///     by_age(people).unwrap(),
///     json!([{"name": "Eve", "age": 25}, {"name": "Bob", "age": 40}])
/// );
/// ```
pub fn sort<Cmp>(comparator: Cmp) -> impl Fn(Value) -> Result<Value, CollectionError>
where
    Cmp: Fn(&Value, &Value) -> Ordering,
{
    move |collection: Value| {
        tracing::trace!(shape = describe(&collection), "value::sort");
        if !is_iterable(&collection) {
            return Err(CollectionError::invalid_collection_type(
                "sort",
                describe(&collection),
            ));
        }
        let mut elements = into_elements(collection)?;
        sort_in_place(&mut elements, &comparator);
        Ok(Value::Array(elements))
    }
}

/// Inserts `element` into `container` in place and returns the container.
///
/// An array target gets `element` appended. An object target needs a
/// two-element `[key, value]` array whose key is a string; an existing key is
/// overwritten.
///
/// # Errors
///
/// - [`CollectionError::InvalidEntry`] when an object target receives
///   anything other than a `[string, value]` pair.
/// - [`CollectionError::InvalidCollectionType`] for any other target.
///
/// # Examples
///
/// ```rust
/// use polycomb::value;
/// use serde_json::json;
///
/// let mut record = json!({"Bob": 1});
/// value::insert(&mut record, json!(["Alice", 2])).unwrap();
/// assert_eq!(record, json!({"Bob": 1, "Alice": 2}));
/// ```
pub fn insert(container: &mut Value, element: Value) -> Result<&mut Value, CollectionError> {
    tracing::trace!(shape = describe(container), "value::insert");
    match &mut *container {
        Value::Array(elements) => elements.push(element),
        Value::Object(fields) => {
            let (key, field) = into_entry(element)?;
            fields.insert(key, field);
        }
        other => {
            return Err(CollectionError::invalid_collection_type(
                "insert",
                describe(other),
            ));
        }
    }
    Ok(container)
}

/// Materializes an iterable value into its elements.
///
/// Arrays yield their elements; strings yield one-character strings. The
/// result can be fed to the static operations such as
/// [`fold_left`](crate::collection::fold_left) or
/// [`partition`](crate::collection::partition).
///
/// # Errors
///
/// Returns [`CollectionError::InvalidCollectionType`] for non-iterable values.
///
/// # Examples
///
/// ```rust
/// use polycomb::collection::fold_left;
/// use polycomb::value::into_elements;
/// use serde_json::{Value, json};
///
/// let digits = into_elements(json!("123")).unwrap();
/// let sum = fold_left(
///     |total: u32| move |digit: Value| total + digit.as_str().and_then(|d| d.parse::<u32>().ok()).unwrap_or(0),
///     0,
/// )(digits);
/// assert_eq!(sum, 6);
/// ```
pub fn into_elements(value: Value) -> Result<Vec<Value>, CollectionError> {
    match value {
        Value::Array(elements) => Ok(elements),
        Value::String(text) => Ok(characters(&text).collect()),
        other => Err(CollectionError::invalid_collection_type(
            "into_elements",
            describe(&other),
        )),
    }
}

fn characters(text: &str) -> impl Iterator<Item = Value> + '_ {
    text.chars().map(|character| Value::String(character.to_string()))
}

fn into_entry(element: Value) -> Result<(String, Value), CollectionError> {
    let found = describe(&element);
    let Value::Array(pair) = element else {
        return Err(CollectionError::InvalidEntry { found });
    };
    match <[Value; 2]>::try_from(pair) {
        Ok([Value::String(key), field]) => Ok((key, field)),
        _ => Err(CollectionError::InvalidEntry { found }),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(text) if text.is_empty() => "empty string",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<crate::collection::Record<Value>> for Value {
    fn from(record: crate::collection::Record<Value>) -> Self {
        Self::Object(record.into_entries().collect::<Map<String, Self>>())
    }
}
