/// Instruction placed in front of the raw recipe text.
pub const RECIPE_CONVERTER_PROMPT: &str = "Convert this recipe into the specified format:";

/// Build the user prompt for a recipe, optionally annotating the recipe language.
pub fn build_conversion_prompt(recipe_text: &str, language: Option<&str>) -> String {
    match language.map(str::trim).filter(|lang| !lang.is_empty()) {
        Some(lang) => format!(
            "{}\n\n{}\n\nThe recipe text is written in {lang}. Keep the title, ingredient names, units and instructions in {lang}.",
            RECIPE_CONVERTER_PROMPT, recipe_text
        ),
        None => format!("{}\n\n{}", RECIPE_CONVERTER_PROMPT, recipe_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_wraps_recipe_text() {
        let prompt = build_conversion_prompt("2 cups flour\nMix.", None);
        assert_eq!(
            prompt,
            "Convert this recipe into the specified format:\n\n2 cups flour\nMix."
        );
    }

    #[test]
    fn test_build_conversion_prompt_handles_language() {
        let with_language = build_conversion_prompt("2 Eier", Some("german"));
        assert!(with_language.starts_with(RECIPE_CONVERTER_PROMPT));
        assert!(with_language.contains("2 Eier"));
        assert!(with_language.contains("written in german"));

        let blank = build_conversion_prompt("2 eggs", Some("   "));
        assert_eq!(blank, build_conversion_prompt("2 eggs", None));
    }
}
