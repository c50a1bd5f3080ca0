use petits_plats::render::{render_count, render_page};
use petits_plats::{load_recipes, Command, FilterCategory, Recipe, Session, Settings};
use scraper::{Html, Selector};
use std::path::Path;

fn fixture() -> Vec<Recipe> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/recipes.json");
    load_recipes(&path).unwrap()
}

fn select_texts(document: &Html, selector: &str) -> Vec<String> {
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

fn page_for(commands: Vec<Command>) -> Html {
    let mut session = Session::new(fixture(), Settings::default());
    session.dispatch_all(commands);
    let view = session.view();
    Html::parse_document(&render_page(&view, session.settings()))
}

#[test]
fn test_full_page_lists_every_recipe() {
    let document = page_for(Vec::new());

    let titles = select_texts(&document, ".recipe-card h2");
    assert_eq!(titles.len(), 7);
    assert_eq!(titles[0], "Limonade de Coco");
    assert_eq!(select_texts(&document, "#recipeCount"), vec!["7 recettes"]);
    assert_eq!(select_texts(&document, ".dropdown").len(), 3);
}

#[test]
fn test_zero_matches_renders_placeholder() {
    let document = page_for(vec![Command::search("choucroute")]);

    assert!(select_texts(&document, ".recipe-card").is_empty());
    assert_eq!(select_texts(&document, "#recipeCount"), vec!["0 recettes"]);

    let placeholder = select_texts(&document, "#recipes-container .no-result");
    assert_eq!(placeholder.len(), 1);
    assert!(placeholder[0].starts_with("Aucune recette trouvée"));
    assert!(placeholder[0].contains("choucroute"));
}

#[test]
fn test_conflicting_appliances_render_empty_state() {
    let document = page_for(vec![
        Command::select(FilterCategory::Appliances, "Four"),
        Command::select(FilterCategory::Appliances, "Blender"),
    ]);

    assert_eq!(select_texts(&document, "#recipeCount"), vec!["0 recettes"]);
    assert_eq!(
        select_texts(&document, ".no-result"),
        vec!["Aucune recette trouvée"]
    );
    // Both selections stay visible as removable tags
    assert_eq!(select_texts(&document, ".tag").len(), 2);
}

#[test]
fn test_short_search_with_conflicting_appliances_blames_no_term() {
    let document = page_for(vec![
        Command::search("ab"),
        Command::select(FilterCategory::Appliances, "Four"),
        Command::select(FilterCategory::Appliances, "Blender"),
    ]);

    assert_eq!(select_texts(&document, "#recipeCount"), vec!["0 recettes"]);
    let placeholder = select_texts(&document, ".no-result");
    assert_eq!(placeholder, vec!["Aucune recette trouvée"]);
    assert!(!placeholder[0].contains("ab"));
}

#[test]
fn test_tags_and_dropdowns_reflect_selection() {
    let document = page_for(vec![
        Command::select(FilterCategory::Ingredients, "Sucre"),
        Command::select(FilterCategory::Utensils, "saladier"),
    ]);

    let tag_selector = Selector::parse(".tags .tag").unwrap();
    let tags: Vec<(String, String)> = document
        .select(&tag_selector)
        .map(|el| {
            (
                el.value().attr("data-category").unwrap().to_string(),
                el.value().attr("data-value").unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        tags,
        vec![
            ("ingredients".to_string(), "Sucre".to_string()),
            ("ustensils".to_string(), "saladier".to_string()),
        ]
    );

    let selected = select_texts(
        &document,
        ".dropdown[data-category=\"ingredients\"] .dropdown-selected .option",
    );
    assert_eq!(selected.len(), 1);
    assert!(selected[0].starts_with("Sucre"));

    let available = select_texts(
        &document,
        ".dropdown[data-category=\"ingredients\"] .dropdown-options .option",
    );
    assert!(!available.contains(&"Sucre".to_string()));
    assert!(available.contains(&"Farine".to_string()));
}

#[test]
fn test_open_dropdown_and_local_query() {
    let document = page_for(vec![
        Command::ToggleDropdown(FilterCategory::Ingredients),
        Command::SetDropdownQuery {
            category: FilterCategory::Ingredients,
            query: "crème".to_string(),
        },
    ]);

    let open = select_texts(&document, ".dropdown.open .dropdown-toggle");
    assert_eq!(open, vec!["Ingrédients"]);

    let options = select_texts(
        &document,
        ".dropdown[data-category=\"ingredients\"] .dropdown-options .option",
    );
    assert_eq!(options, vec!["Crème de coco", "Crème fraîche"]);
}

#[test]
fn test_long_description_has_toggle() {
    let document = page_for(vec![Command::search("thon")]);

    assert_eq!(select_texts(&document, ".recipe-card").len(), 1);
    assert_eq!(select_texts(&document, ".desc-text.clamp").len(), 1);
    assert_eq!(select_texts(&document, ".toggle-desc"), vec!["Voir plus"]);
}

#[test]
fn test_ingredient_lines() {
    let document = page_for(vec![Command::search("limonade")]);

    let lines = select_texts(&document, ".recipe-card .ingredients li");
    assert_eq!(
        lines,
        vec![
            "Lait de coco 400 ml",
            "Jus de citron 2",
            "Crème de coco 2 cuillères à soupe",
            "Sucre 30 grammes",
            "Glaçons",
        ]
    );

    let img = Selector::parse(".recipe-card img").unwrap();
    let src = document.select(&img).next().unwrap().value().attr("src").unwrap();
    assert_eq!(src, "JSON recipes/Recette01.jpg");
}

#[test]
fn test_count_wording() {
    assert_eq!(render_count(0), "0 recettes");
    assert_eq!(render_count(1), "1 recettes");
}
