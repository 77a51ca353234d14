//! Kurban record and the request-side shapes it is built from.

use serde::{Deserialize, Serialize};

/// One row of the `kurban` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Kurban {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub weight: i32,
    pub price: i32,
}

/// Fields as submitted by a client, before any presence check.
/// Accepts the legacy `kurbanName`-style keys as well.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct KurbanForm {
    #[serde(default, alias = "kurbanName")]
    pub name: Option<String>,
    #[serde(default, rename = "type", alias = "kurbanType")]
    pub kind: Option<String>,
    #[serde(default, alias = "kurbanWeight", deserialize_with = "text_or_number")]
    pub weight: Option<String>,
    #[serde(default, alias = "kurbanPrice", deserialize_with = "text_or_number")]
    pub price: Option<String>,
}

impl KurbanForm {
    /// Keep every field already set here; take the rest from `fallback`.
    pub fn or(self, fallback: KurbanForm) -> KurbanForm {
        KurbanForm {
            name: self.name.or(fallback.name),
            kind: self.kind.or(fallback.kind),
            weight: self.weight.or(fallback.weight),
            price: self.price.or(fallback.price),
        }
    }

    /// Set one field by its wire name. Unknown names are ignored. Returns whether it matched.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        let slot = match key {
            "name" | "kurbanName" => &mut self.name,
            "type" | "kurbanType" => &mut self.kind,
            "weight" | "kurbanWeight" => &mut self.weight,
            "price" | "kurbanPrice" => &mut self.price,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}

/// JSON clients send numbers, forms send text; both end up as text here.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    }))
}

/// Validated fields for insert and full-overwrite update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewKurban {
    pub name: String,
    pub kind: String,
    pub weight: i32,
    pub price: i32,
}

impl NewKurban {
    pub fn into_record(self, id: i32) -> Kurban {
        Kurban {
            id,
            name: self.name,
            kind: self.kind,
            weight: self.weight,
            price: self.price,
        }
    }
}
