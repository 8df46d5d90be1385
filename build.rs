use std::path::Path;

const CORPUS_PATH: &str = "data/recipes.json";

fn main() {
    validate_corpus_file(Path::new(CORPUS_PATH));
    set_build_dependencies();
}

fn validate_corpus_file(corpus_path: &Path) {
    assert!(
        corpus_path.exists(),
        "\n\nCORPUS BUILD ERROR: File not found\n\
         Path: {}\n\
         The default recipe corpus is embedded in the binary and must exist.\n",
        corpus_path.display()
    );

    let contents = std::fs::read_to_string(corpus_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCORPUS BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            corpus_path.display()
        );
    });

    let corpus: serde_json::Value = serde_json::from_str(&contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCORPUS BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            corpus_path.display()
        );
    });

    validate_corpus_structure(&corpus);
}

fn validate_corpus_structure(corpus: &serde_json::Value) {
    assert!(
        corpus.is_object(),
        "\n\nCORPUS BUILD ERROR: Root must be a JSON object\n"
    );

    let recipes = corpus
        .get("recipes")
        .and_then(serde_json::Value::as_array)
        .unwrap_or_else(|| {
            panic!(
                "\n\nCORPUS BUILD ERROR: Missing 'recipes' array\n\
                 The corpus must have a top-level 'recipes' array.\n"
            );
        });

    let total_ingredients = validate_recipes(recipes);

    println!(
        "cargo:warning=Validated recipe corpus: {} recipes, {total_ingredients} ingredients",
        recipes.len()
    );
}

fn validate_recipes(recipes: &[serde_json::Value]) -> usize {
    let mut seen_ids = std::collections::HashSet::new();
    let mut total_ingredients = 0;

    for (i, recipe) in recipes.iter().enumerate() {
        let id = recipe
            .get("id")
            .and_then(serde_json::Value::as_i64)
            .unwrap_or_else(|| {
                panic!("\n\nCORPUS BUILD ERROR: Recipe at index {i} missing integer 'id' field\n")
            });

        assert!(
            seen_ids.insert(id),
            "\n\nCORPUS BUILD ERROR: Duplicate recipe id {id} (index {i})\n"
        );

        assert!(
            recipe.get("title").and_then(serde_json::Value::as_str).is_some(),
            "\n\nCORPUS BUILD ERROR: Recipe {id} (index {i}) missing 'title' field\n"
        );

        total_ingredients += validate_ingredients(recipe, id);
    }

    total_ingredients
}

fn validate_ingredients(recipe: &serde_json::Value, id: i64) -> usize {
    let ingredients = recipe
        .get("ingredients")
        .and_then(serde_json::Value::as_array)
        .unwrap_or_else(|| {
            panic!("\n\nCORPUS BUILD ERROR: Recipe {id} missing 'ingredients' array\n")
        });

    assert!(
        !ingredients.is_empty(),
        "\n\nCORPUS BUILD ERROR: Recipe {id} has no ingredients\n"
    );

    for (j, ingredient) in ingredients.iter().enumerate() {
        let name = ingredient
            .get("name")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("");
        assert!(
            !name.trim().is_empty(),
            "\n\nCORPUS BUILD ERROR: Recipe {id} ingredient {j} missing 'name'\n"
        );
    }

    ingredients.len()
}

fn set_build_dependencies() {
    println!("cargo:rerun-if-changed={CORPUS_PATH}");
    println!("cargo:rerun-if-changed=build.rs");
}
