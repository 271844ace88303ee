use crate::model::Recipe;
use comfy_table::{presets::ASCII_FULL, Cell, Table};

/// Render the ingredients as a grid table with `Amount | Unit | Ingredient` columns
pub fn ingredients_table(recipe: &Recipe) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(vec![
        Cell::new("Amount"),
        Cell::new("Unit"),
        Cell::new("Ingredient"),
    ]);

    for ingredient in &recipe.ingredients {
        table.add_row(vec![
            // f64 Display drops a zero fraction: 2.0 prints as "2"
            Cell::new(ingredient.amount),
            Cell::new(&ingredient.unit),
            Cell::new(&ingredient.name),
        ]);
    }

    table.to_string()
}

/// Render the full recipe: title, ingredients table and numbered steps
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut output = String::new();
    output.push_str(&recipe.title);
    output.push_str("\n\n");
    output.push_str(&ingredients_table(recipe));

    if !recipe.instructions.is_empty() {
        output.push_str("\n\n");
        let steps: Vec<String> = recipe
            .instructions
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step))
            .collect();
        output.push_str(&steps.join("\n"));
    }

    output
}
