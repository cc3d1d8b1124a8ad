// src/core/lenient.rs
//! Default-on-absence policy for loosely typed JSON.
//!
//! The empire payload mixes ints, floats and numeric strings for the same kind
//! of field depending on revision. These deserializers accept every scalar
//! spelling and fail on anything structural (object, array, bool), so a shape
//! change still surfaces as an error instead of a silent zero.
//!
//! | target | accepts                                   | null / absent |
//! |--------|-------------------------------------------|---------------|
//! | `int`  | int, float (truncated), numeric string    | 0             |
//! | `text` | string, int, float                        | ""            |
//!
//! Absent fields get the same default through `#[serde(default)]`.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};

use super::parse::parse_int;

pub fn int<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    d.deserialize_any(IntVisitor)
}

pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    d.deserialize_any(TextVisitor)
}

struct IntVisitor;

impl<'de> Visitor<'de> for IntVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer, a float or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::custom(format!("{v} does not fit in i64")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        Ok(v.trunc() as i64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        Ok(parse_int(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<i64, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<i64, E> {
        Ok(0)
    }
}

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(s!())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(s!())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn as_int(v: Value) -> Result<i64, serde_json::Error> {
        int(&v)
    }

    #[test]
    fn ints_from_any_scalar() {
        assert_eq!(as_int(json!(7)).unwrap(), 7);
        assert_eq!(as_int(json!(7.9)).unwrap(), 7);
        assert_eq!(as_int(json!(-3.5)).unwrap(), -3);
        assert_eq!(as_int(json!("1.250")).unwrap(), 1250);
        assert_eq!(as_int(json!(null)).unwrap(), 0);
    }

    #[test]
    fn structure_is_rejected() {
        assert!(as_int(json!([1])).is_err());
        assert!(as_int(json!({"a": 1})).is_err());
        assert!(as_int(json!(true)).is_err());
        assert!(text(&json!({"a": 1})).is_err());
    }

    #[test]
    fn text_from_scalars() {
        assert_eq!(text(&json!("Homeworld")).unwrap(), "Homeworld");
        assert_eq!(text(&json!(12)).unwrap(), "12");
        assert_eq!(text(&json!(null)).unwrap(), "");
    }
}
