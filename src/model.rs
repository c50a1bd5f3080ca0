use serde::{Deserialize, Deserializer, Serialize};

/// A single recipe as supplied by the static data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Cooking time in minutes
    #[serde(default)]
    pub time: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Image file name, relative to the configured image directory
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub appliance: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, rename = "ustensils")]
    pub utensils: Vec<String>,
}

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub ingredient: String,
    #[serde(
        default,
        deserialize_with = "quantity_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<String>,
    #[serde(
        default,
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit: Option<String>,
}

impl Recipe {
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.ingredient.as_str())
    }

    pub fn has_ingredient(&self, name: &str) -> bool {
        self.ingredient_names().any(|n| n == name)
    }

    pub fn has_utensil(&self, name: &str) -> bool {
        self.utensils.iter().any(|u| u == name)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}

// Data files mix numeric (`2`, `0.5`) and textual (`"1/2"`) quantities.
// A numeric zero carries no information and is dropped like a missing one.
fn quantity_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawQuantity {
        Number(serde_json::Number),
        Text(String),
    }

    let raw = Option::<RawQuantity>::deserialize(deserializer)?;
    Ok(raw
        .map(|q| match q {
            RawQuantity::Number(n) if n.as_f64() == Some(0.0) => String::new(),
            RawQuantity::Number(n) => n.to_string(),
            RawQuantity::Text(s) => s,
        })
        .filter(|s| !s.trim().is_empty()))
}
