//! The decoded value tree.
use alloc::{collections::BTreeMap, string::String, vec::Vec};

/// The default object mapping: last-key-wins, no stable iteration order
/// guaranteed beyond what `BTreeMap`'s key ordering happens to provide.
pub type Map = BTreeMap<String, Value>;

/// A JSON value as defined by [RFC 8259].
///
/// Numbers are split into [`Value::Integer`] and [`Value::Float`]: a
/// digit run with no `.`/`e`/`E` decodes to `Integer`, everything else to
/// `Float`.
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonslice::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Bool(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Bool`].
    ///
    /// [`Bool`]: Value::Bool
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonslice::Value;
    ///
    /// assert!(Value::Bool(true).is_bool());
    /// assert!(!Value::Null.is_bool());
    /// ```
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
    }

    /// Returns `true` if the value is [`Integer`] or [`Float`].
    ///
    /// [`Integer`]: Value::Integer
    /// [`Float`]: Value::Float
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonslice::Value;
    ///
    /// assert!(Value::Integer(42).is_number());
    /// assert!(Value::Float(4.5).is_number());
    /// assert!(!Value::Null.is_number());
    /// ```
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Float(..))
    }

    /// Returns `true` if the value is [`String`](Value::String).
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonslice::Value;
    ///
    /// assert!(Value::String("foo".into()).is_string());
    /// assert!(!Value::Null.is_string());
    /// ```
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonslice::Value;
    ///
    /// assert!(Value::Array(vec![Value::Null]).is_array());
    /// assert!(!Value::Null.is_array());
    /// ```
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonslice::{Map, Value};
    ///
    /// let v = Value::Object(Map::new());
    /// assert!(v.is_object());
    /// assert!(!Value::Null.is_object());
    /// ```
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Borrows the inner string, if this is a [`String`](Value::String).
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonslice::Value;
    ///
    /// assert_eq!(Value::String("foo".into()).as_str(), Some("foo"));
    /// assert_eq!(Value::Null.as_str(), None);
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Borrows the inner array, if this is an [`Array`].
    ///
    /// [`Array`]: Value::Array
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonslice::Value;
    ///
    /// let v = Value::Array(vec![Value::Integer(1)]);
    /// assert_eq!(v.as_array(), Some(&[Value::Integer(1)][..]));
    /// assert_eq!(Value::Null.as_array(), None);
    /// ```
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(a) => Some(a.as_slice()),
            _ => None,
        }
    }

    /// Borrows the inner object, if this is an [`Object`].
    ///
    /// [`Object`]: Value::Object
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonslice::{Map, Value};
    ///
    /// let v = Value::Object(Map::new());
    /// assert_eq!(v.as_object(), Some(&Map::new()));
    /// assert_eq!(Value::Null.as_object(), None);
    /// ```
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }
}
