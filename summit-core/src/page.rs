//! Paginated collection envelope.
//!
//! The backend usually wraps collections as
//! `{data, current_page, per_page, total, last_page}` but a few older
//! endpoints return a bare array. Both shapes are resolved here, once, at
//! the decode boundary; downstream code only ever sees `Paginated<T>`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub last_page: u32,
}

impl<T> Paginated<T> {
    /// Wrap an unpaginated array as its own single page.
    pub fn single_page(data: Vec<T>) -> Self {
        let len = data.len();
        Self {
            data,
            current_page: 1,
            per_page: len.max(1) as u32,
            total: len as u64,
            last_page: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            last_page: self.last_page,
        }
    }

    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Paginated<U>, E> {
        let data = self.data.into_iter().map(f).collect::<Result<_, E>>()?;
        Ok(Paginated {
            data,
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            last_page: self.last_page,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Wire<T> {
    Envelope {
        data: Vec<T>,
        current_page: u32,
        per_page: u32,
        total: u64,
        last_page: u32,
    },
    Bare(Vec<T>),
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Paginated<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Wire::deserialize(deserializer)? {
            Wire::Envelope {
                data,
                current_page,
                per_page,
                total,
                last_page,
            } => Ok(Paginated {
                data,
                current_page,
                per_page,
                total,
                last_page,
            }),
            Wire::Bare(data) => Ok(Paginated::single_page(data)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_envelope() {
        let body = json!({
            "data": [{"id": 1}, {"id": 2}],
            "current_page": 3,
            "per_page": 2,
            "total": 41,
            "last_page": 21,
        });

        let page: Paginated<serde_json::Value> = serde_json::from_value(body).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.total, 41);
        assert_eq!(page.last_page, 21);
    }

    #[test]
    fn test_decode_bare_array_as_single_page() {
        let body = json!([{"id": 1}, {"id": 2}, {"id": 3}]);

        let page: Paginated<serde_json::Value> = serde_json::from_value(body).unwrap();
        assert_eq!(page.len(), 3);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total, 3);
        assert_eq!(page.last_page, 1);
    }

    #[test]
    fn test_empty_bare_array() {
        let page: Paginated<serde_json::Value> = serde_json::from_value(json!([])).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_try_map_propagates_errors() {
        let page = Paginated::single_page(vec![json!({"id": 1}), json!("not a record")]);
        let result: Result<Paginated<u64>, &str> =
            page.try_map(|v| v.get("id").and_then(|id| id.as_u64()).ok_or("missing id"));
        assert!(result.is_err());
    }
}
