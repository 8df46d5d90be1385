//! Ranking behaviour over the public library API

use frigo_match::{DietProfile, IngredientMatcher, LexicalResolver, RankingEngine, Recipe, RecipeCorpus};

const NONE: &[&str] = &[];

fn recipe(title: &str, ingredients: &[&str]) -> Recipe {
    Recipe::new(title).with_ingredients(ingredients)
}

#[test]
fn test_scenario_partial_match() {
    let resolver = LexicalResolver::french();
    let engine = RankingEngine::new(&resolver);
    let recipes = vec![recipe("Salade", &["tomate", "oeuf", "basilic"])];

    let results = engine.rank(&recipes, &["tomates", "oeufs", "fromage"], NONE, 0.3, 10);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].matched_ingredients, vec!["tomate", "oeuf"]);
    assert_eq!(results[0].missing_ingredients, vec!["basilic"]);
    assert!((results[0].match_score - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_scenario_excluded_pair_drops_recipe() {
    let resolver = LexicalResolver::french();
    let engine = RankingEngine::new(&resolver);
    let recipes = vec![recipe("Quiche", &["pâte brisée"])];

    assert!(engine.rank(&recipes, &["pâtes"], NONE, 0.0, 10).is_empty());
}

#[test]
fn test_scenario_vegetarian_filter() {
    let recipes = vec![
        recipe("Poulet basquaise", &["poulet", "poivrons"]),
        recipe("Pot-au-feu", &["boeuf", "carottes", "poireaux"]),
        recipe("Omelette", &["oeufs", "ciboulette"]),
    ];
    let profile = DietProfile::from_keys(&["vegetarien"], &[] as &[&str], &[] as &[&str]);

    let allowed: Vec<&str> = profile
        .filter(&recipes)
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(allowed, vec!["Omelette"]);
}

#[test]
fn test_partition_and_bounds_over_corpus() {
    let corpus = RecipeCorpus::load_embedded().unwrap();
    let resolver = LexicalResolver::french();
    let engine = RankingEngine::new(&resolver);
    let fridge = ["oeufs", "lait", "tomates", "oignons", "ail", "beurre", "riz", "carotte"];

    let results = engine.rank(&corpus.recipes, &fridge, &["lait", "tomates"], 0.0, 100);
    assert!(!results.is_empty());

    for s in &results {
        assert_eq!(
            s.matched_ingredients.len() + s.missing_ingredients.len(),
            s.ingredients.len(),
            "partition of {}",
            s.title
        );
        let mut names: Vec<&str> = s.ingredients.iter().map(|i| i.name.as_str()).collect();
        let mut parts: Vec<&str> = s
            .matched_ingredients
            .iter()
            .chain(&s.missing_ingredients)
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        parts.sort_unstable();
        assert_eq!(names, parts);

        assert!(!s.matched_ingredients.is_empty());
        assert!((0.0..=1.0).contains(&s.match_score));
        assert!((0.0..=0.2 + 1e-12).contains(&s.expiry_bonus));
    }

    for pair in results.windows(2) {
        assert!(pair[0].match_score + 1e-9 >= pair[1].match_score);
    }
}

#[test]
fn test_ranking_is_deterministic() {
    let corpus = RecipeCorpus::load_embedded().unwrap();
    let resolver = LexicalResolver::french();
    let engine = RankingEngine::new(&resolver);
    let fridge = ["oeufs", "farine", "courgette", "crème fraîche"];

    let first = engine.rank(&corpus.recipes, &fridge, NONE, 0.0, 100);
    for _ in 0..5 {
        assert_eq!(engine.rank(&corpus.recipes, &fridge, NONE, 0.0, 100), first);
    }
}

#[test]
fn test_equal_scores_keep_corpus_order() {
    let resolver = LexicalResolver::french();
    let engine = RankingEngine::new(&resolver);
    let recipes: Vec<Recipe> = (0..50)
        .map(|i| recipe(&format!("Recette {i}"), &["riz", "safran"]))
        .collect();

    let results = engine.rank(&recipes, &["riz"], NONE, 0.0, 50);
    let titles: Vec<String> = results.into_iter().map(|s| s.title).collect();
    let expected: Vec<String> = (0..50).map(|i| format!("Recette {i}")).collect();
    assert_eq!(titles, expected);
}

#[test]
fn test_matcher_properties() {
    let resolver = LexicalResolver::french();
    let matcher = IngredientMatcher::new(&resolver);

    assert!(!matcher.matches("pâtes", "pâte brisée"));
    assert!(!matcher.matches("pomme", "pomme de terre"));
    assert!(matcher.matches("tomates", "tomate"));
    assert!(matcher.matches("spaghetti", "pâtes"));
    assert!(!matcher.matches("spaghetti", "riz"));
}

#[test]
fn test_diet_and_allergen_compose_with_and() {
    let recipes = vec![
        recipe("Crêpes", &["farine", "oeufs", "lait"]),
        recipe("Riz au lait", &["riz", "lait", "sucre"]),
        recipe("Salade de riz", &["riz", "tomates", "jambon"]),
    ];
    let profile = DietProfile::from_keys(&["vegetarien"], &["gluten"], &[] as &[&str]);

    let allowed: Vec<&str> = profile
        .filter(&recipes)
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(allowed, vec!["Riz au lait"]);
}
