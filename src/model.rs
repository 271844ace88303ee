use crate::ImportError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ingredient {
    /// Quantity of the ingredient
    pub amount: f64,
    /// Unit of measurement (e.g., cups, grams)
    pub unit: String,
    /// Name of the ingredient
    pub name: String,
}

/// A structured recipe as returned by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    pub title: String,
    /// Ingredients in preparation order
    pub ingredients: Vec<Ingredient>,
    /// Steps in preparation order
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Check the invariants the remote schema cannot express.
    ///
    /// Amounts must be finite and non-negative, and every ingredient needs a
    /// name. Units may be empty for countable ingredients ("2 eggs").
    pub fn validate(&self) -> Result<(), ImportError> {
        for (index, ingredient) in self.ingredients.iter().enumerate() {
            if !ingredient.amount.is_finite() || ingredient.amount < 0.0 {
                return Err(ImportError::SchemaValidationError(format!(
                    "ingredient {} ({}) has invalid amount {}",
                    index + 1,
                    ingredient.name,
                    ingredient.amount
                )));
            }
            if ingredient.name.trim().is_empty() {
                return Err(ImportError::SchemaValidationError(format!(
                    "ingredient {} has an empty name",
                    index + 1
                )));
            }
        }
        Ok(())
    }
}

/// JSON Schema describing [`Recipe`], in the strict structured-output dialect.
pub fn recipe_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": {
                "type": "string",
                "description": "Name of the recipe"
            },
            "ingredients": {
                "type": "array",
                "description": "List of ingredients needed for the recipe",
                "items": {
                    "type": "object",
                    "properties": {
                        "amount": {
                            "type": "number",
                            "description": "Quantity of the ingredient"
                        },
                        "unit": {
                            "type": "string",
                            "description": "Unit of measurement (e.g., cups, grams)"
                        },
                        "name": {
                            "type": "string",
                            "description": "Name of the ingredient"
                        }
                    },
                    "required": ["amount", "unit", "name"],
                    "additionalProperties": false
                }
            },
            "instructions": {
                "type": "array",
                "description": "Step-by-step instructions to prepare the recipe",
                "items": { "type": "string" }
            }
        },
        "required": ["title", "ingredients", "instructions"],
        "additionalProperties": false
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(amount: f64, unit: &str, name: &str) -> Ingredient {
        Ingredient {
            amount,
            unit: unit.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_deserialize_preserves_order() {
        let value = json!({
            "title": "Pancakes",
            "ingredients": [
                {"amount": 1, "unit": "cup", "name": "flour"},
                {"amount": 2, "unit": "tbsp", "name": "sugar"},
                {"amount": 1, "unit": "", "name": "egg"}
            ],
            "instructions": ["Whisk", "Fry", "Serve"]
        });

        let recipe: Recipe = serde_json::from_value(value).unwrap();
        let names: Vec<&str> = recipe.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["flour", "sugar", "egg"]);
        assert_eq!(recipe.instructions, vec!["Whisk", "Fry", "Serve"]);
        assert_eq!(recipe.ingredients[0].amount, 1.0);
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let value = json!({
            "title": "Broken",
            "ingredients": [{"amount": 1, "name": "flour"}],
            "instructions": []
        });
        assert!(serde_json::from_value::<Recipe>(value).is_err());
    }

    #[test]
    fn test_deserialize_rejects_extra_fields() {
        let extra_on_recipe = json!({
            "title": "Toast",
            "ingredients": [],
            "instructions": [],
            "servings": 2
        });
        assert!(serde_json::from_value::<Recipe>(extra_on_recipe).is_err());

        let extra_on_ingredient = json!({
            "title": "Toast",
            "ingredients": [{"amount": 1, "unit": "slice", "name": "bread", "notes": "stale"}],
            "instructions": []
        });
        assert!(serde_json::from_value::<Recipe>(extra_on_ingredient).is_err());
    }

    #[test]
    fn test_validate_accepts_empty_unit() {
        let recipe = Recipe {
            title: "Eggs".to_string(),
            ingredients: vec![ingredient(2.0, "", "eggs")],
            instructions: vec!["Boil".to_string()],
        };
        assert!(recipe.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let recipe = Recipe {
            title: "Bad".to_string(),
            ingredients: vec![ingredient(-1.0, "g", "salt")],
            instructions: vec![],
        };
        let err = recipe.validate().unwrap_err();
        assert!(matches!(err, ImportError::SchemaValidationError(_)));
        assert!(err.to_string().contains("salt"));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let recipe = Recipe {
            title: "Bad".to_string(),
            ingredients: vec![ingredient(1.0, "g", "flour"), ingredient(1.0, "g", "  ")],
            instructions: vec![],
        };
        let err = recipe.validate().unwrap_err();
        assert!(err.to_string().contains("ingredient 2"));
    }

    #[test]
    fn test_schema_is_strict() {
        let schema = recipe_schema();
        assert_eq!(schema["additionalProperties"], json!(false));
        assert_eq!(
            schema["properties"]["ingredients"]["items"]["required"],
            json!(["amount", "unit", "name"])
        );
        assert_eq!(schema["properties"]["instructions"]["items"]["type"], "string");
    }
}
