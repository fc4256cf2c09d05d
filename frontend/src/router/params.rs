use std::{collections::BTreeMap, str::FromStr};

use leptos_router::ParamsMap;

use crate::errors::*;

pub trait ParamValue: Sized {
    fn convert_to_type(s: &str) -> Option<Self>;
    fn convert_to_string(&self) -> String;
}

impl<T> ParamValue for T
where
    T: FromStr + ToString,
{
    fn convert_to_type(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    fn convert_to_string(&self) -> String {
        self.to_string()
    }
}

pub trait ParamsMapExt {
    fn get_param<T: ParamValue>(&self, key: &str) -> Option<T>;

    /// Like [`ParamsMapExt::get_param`], but a missing or unparsable value
    /// is a [`ErrorKind::MalformedUrl`].
    fn require_param<T: ParamValue>(&self, key: &str) -> Result<T>;

    /// `None` removes the key
    fn set_param<T: ParamValue>(&mut self, key: &str, value: Option<T>);
}

impl ParamsMapExt for ParamsMap {
    fn get_param<T: ParamValue>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| T::convert_to_type(v))
    }

    fn require_param<T: ParamValue>(&self, key: &str) -> Result<T> {
        let raw = self.get(key).ok_or_else(|| {
            Error::new(ErrorKind::MalformedUrl, format!("missing `{key}`"))
        })?;
        T::convert_to_type(raw).ok_or_else(|| {
            Error::new(
                ErrorKind::MalformedUrl,
                format!("`{key}` has unexpected value `{raw}`"),
            )
        })
    }

    fn set_param<T: ParamValue>(&mut self, key: &str, value: Option<T>) {
        match value {
            Some(value) => {
                self.insert(key.to_owned(), value.convert_to_string());
            }
            None => {
                self.remove(key);
            }
        }
    }
}

/// Parse the part after `?`, values stay strings.
pub fn parse_query(query: &str) -> Result<ParamsMap> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: BTreeMap<String, String> =
        serde_qs::from_str(query).context("parse query string")?;
    let mut map = ParamsMap::new();
    for (key, value) in pairs {
        map.insert(key, value);
    }
    Ok(map)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn typed_access() {
        let mut map = ParamsMap::new();
        map.insert("id".to_owned(), "42".to_owned());
        map.insert("name".to_owned(), "abc".to_owned());

        assert_eq!(map.get_param::<i64>("id"), Some(42));
        assert_eq!(map.get_param::<i64>("name"), None);
        assert_eq!(map.require_param::<i64>("id").unwrap(), 42);
        assert_eq!(
            map.require_param::<i64>("missing").unwrap_err().kind,
            ErrorKind::MalformedUrl
        );
        assert_eq!(
            map.require_param::<i64>("name").unwrap_err().kind,
            ErrorKind::MalformedUrl
        );

        map.set_param("id", Some(7i64));
        assert_eq!(map.get("id").map(String::as_str), Some("7"));
        map.set_param::<i64>("id", None);
        assert_eq!(map.get("id"), None);
    }

    #[test]
    fn query_string() {
        let map = parse_query("?user_id=3&state=Finished").unwrap();
        assert_eq!(map.get_param::<i64>("user_id"), Some(3));
        assert_eq!(map.get("state").map(String::as_str), Some("Finished"));
        assert_eq!(parse_query("").unwrap(), ParamsMap::new());
    }
}
