use crate::error::DataError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;

/// A single row of the recipes table, matching the on-disk JSON format.
///
/// Every field is optional on disk. Quantities may be numbers, numeric
/// strings, `null` or missing; anything that does not parse as an integer
/// becomes `0`, and negative values clamp to `0`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub result: String,
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub alchemiracle: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub item1: String,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub qty1: u32,
    #[serde(default, deserialize_with = "lenient_string")]
    pub item2: String,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub qty2: u32,
    #[serde(default, deserialize_with = "lenient_string")]
    pub item3: String,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub qty3: u32,
}

impl RecipeRecord {
    /// The three `(item, qty)` slots in declaration order, including empty ones.
    pub fn slots(&self) -> [(&str, u32); 3] {
        [
            (self.item1.as_str(), self.qty1),
            (self.item2.as_str(), self.qty2),
            (self.item3.as_str(), self.qty3),
        ]
    }
}

/// A single row of the locations table.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub result: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub location: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct RecipeTable {
    #[serde(default)]
    recipes: Vec<RecipeRecord>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct LocationTable {
    #[serde(default)]
    locations: Vec<LocationRecord>,
}

/// Both raw tables, in dataset input order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub recipes: Vec<RecipeRecord>,
    pub locations: Vec<LocationRecord>,
}

impl Dataset {
    /// Loads the recipes file (`{"recipes": [...]}`) and the locations file
    /// (`{"locations": [...]}`).
    pub fn from_files(recipes_path: &str, locations_path: &str) -> Result<Self, DataError> {
        let recipes_json =
            fs::read_to_string(recipes_path).map_err(|e| DataError::io(recipes_path, e))?;
        let locations_json =
            fs::read_to_string(locations_path).map_err(|e| DataError::io(locations_path, e))?;
        Self::from_json(&recipes_json, &locations_json)
    }

    /// Parses both tables from JSON strings.
    pub fn from_json(recipes_json: &str, locations_json: &str) -> Result<Self, DataError> {
        let recipes: RecipeTable =
            serde_json::from_str(recipes_json).map_err(|e| DataError::json("recipes", e))?;
        let locations: LocationTable =
            serde_json::from_str(locations_json).map_err(|e| DataError::json("locations", e))?;
        Ok(Self {
            recipes: recipes.recipes,
            locations: locations.locations,
        })
    }

    /// Serializes the recipes table back into its on-disk shape.
    pub fn recipes_to_json(&self) -> Result<String, DataError> {
        let table = RecipeTable {
            recipes: self.recipes.clone(),
        };
        serde_json::to_string_pretty(&table).map_err(|e| DataError::json("recipes", e))
    }

    /// Serializes the locations table back into its on-disk shape.
    pub fn locations_to_json(&self) -> Result<String, DataError> {
        let table = LocationTable {
            locations: self.locations.clone(),
        };
        serde_json::to_string_pretty(&table).map_err(|e| DataError::json("locations", e))
    }
}

/// Coerces a loosely typed JSON value into an ingredient quantity.
pub fn coerce_quantity(value: &Value) -> u32 {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    };
    parsed
        .map(|q| q.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_quantity(&value))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        _ => false,
    })
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Value::String(s) if !s.is_empty() => vec![s],
        _ => Vec::new(),
    })
}
