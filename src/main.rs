use recipe_extract::{convert_file, render_recipe, RecipeConfig};
use std::env;
use std::path::{Path, PathBuf};

/// Sample recipe shipped with the crate, relative to the crate root
const DEFAULT_RECIPE_PATH: &str = "recipe_ingredients/mac_and_cheese_recipe.txt";

/// The sample recipe, anchored at the crate directory so the binary works from any cwd
fn default_recipe_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_RECIPE_PATH)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the key may already be in the environment
    dotenvy::dotenv().ok();
    env_logger::init();

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_recipe_path);

    let config = RecipeConfig::load()?;
    let recipe = convert_file(&path, &config).await?;

    println!("{}", render_recipe(&recipe));

    Ok(())
}
