//! HTML renderers.
//!
//! Each function is a pure mapping from derived view data to markup; callers
//! replace the whole target subtree with the returned string.

use std::borrow::Cow;

use crate::config::Settings;
use crate::engine::effective_search_term;
use crate::filter::Tag;
use crate::model::{Ingredient, Recipe};
use crate::session::{DropdownView, View};

const EMPTY_RESULT: &str = "Aucune recette trouvée";

fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// "N recettes", whatever N is
pub fn render_count(count: usize) -> String {
    format!("{} recettes", count)
}

/// Contents of the recipe container
pub fn render_grid(visible: &[&Recipe], search_term: &str, settings: &Settings) -> String {
    if visible.is_empty() {
        return render_empty(search_term, settings.min_search_len);
    }

    visible
        .iter()
        .map(|recipe| render_card(recipe, settings))
        .collect::<Vec<_>>()
        .join("\n")
}

// Only echo the term when it actually took part in filtering.
fn render_empty(search_term: &str, min_search_len: usize) -> String {
    if effective_search_term(search_term, min_search_len).is_none() {
        return format!("<p class=\"no-result\">{}</p>", EMPTY_RESULT);
    }
    let term = search_term.trim();

    format!(
        "<p class=\"no-result\">{} pour « {} ». Vous pouvez chercher « tarte aux pommes », « poisson », etc.</p>",
        EMPTY_RESULT,
        escape(term)
    )
}

pub fn render_card(recipe: &Recipe, settings: &Settings) -> String {
    let is_long = recipe.description.chars().count() > settings.description_limit;
    let image_src = if settings.image_dir.is_empty() {
        recipe.image.clone()
    } else {
        format!("{}/{}", settings.image_dir.trim_end_matches('/'), recipe.image)
    };

    let mut html = String::new();
    html.push_str("<div class=\"recipe-card\">\n");
    html.push_str("  <div class=\"image-wrapper\">\n");
    html.push_str(&format!(
        "    <img src=\"{}\" alt=\"{}\">\n",
        escape(&image_src),
        escape(&recipe.name)
    ));
    html.push_str(&format!("    <span class=\"time\">{}min</span>\n", recipe.time));
    html.push_str("  </div>\n");
    html.push_str("  <div class=\"recipe-info\">\n");
    html.push_str(&format!(
        "    <div class=\"recipe-header\"><h2>{}</h2></div>\n",
        escape(&recipe.name)
    ));

    html.push_str("    <div class=\"recipe-description\">\n");
    html.push_str("      <h3>RECETTE</h3>\n");
    html.push_str(&format!(
        "      <p class=\"desc-text{}\">{}</p>\n",
        if is_long { " clamp" } else { "" },
        escape(&recipe.description)
    ));
    if is_long {
        html.push_str(
            "      <button class=\"toggle-desc\" aria-expanded=\"false\">Voir plus</button>\n",
        );
    }
    html.push_str("    </div>\n");

    html.push_str("    <div class=\"recipe-details\">\n");
    html.push_str("      <h3>INGRÉDIENTS</h3>\n");
    html.push_str("      <ul class=\"ingredients\">\n");
    for ingredient in &recipe.ingredients {
        html.push_str(&format!("        <li>{}</li>\n", render_ingredient(ingredient)));
    }
    html.push_str("      </ul>\n");
    html.push_str("    </div>\n");
    html.push_str("  </div>\n");
    html.push_str("</div>");
    html
}

fn render_ingredient(ingredient: &Ingredient) -> String {
    let mut line = format!("<strong>{}</strong>", escape(&ingredient.ingredient));
    for part in [&ingredient.quantity, &ingredient.unit].into_iter().flatten() {
        line.push(' ');
        line.push_str(&escape(part));
    }
    line
}

/// One filter dropdown: selected values first, then the remaining options
pub fn render_dropdown(dropdown: &DropdownView) -> String {
    let category = dropdown.category.as_str();

    let mut html = String::new();
    html.push_str(&format!(
        "<div class=\"dropdown{}\" data-category=\"{}\">\n",
        if dropdown.open { " open" } else { "" },
        category
    ));
    html.push_str(&format!(
        "  <button class=\"dropdown-toggle\" aria-expanded=\"{}\">{}</button>\n",
        dropdown.open,
        dropdown.category.label()
    ));
    html.push_str("  <div class=\"dropdown-menu\">\n");
    html.push_str(&format!(
        "    <input class=\"dropdown-search\" type=\"text\" value=\"{}\">\n",
        escape(&dropdown.query)
    ));

    html.push_str("    <ul class=\"dropdown-selected\">\n");
    for value in &dropdown.selected {
        html.push_str(&format!(
            "      <li class=\"option selected\" data-value=\"{0}\">{0}<button class=\"remove\" data-category=\"{1}\" data-value=\"{0}\">×</button></li>\n",
            escape(value),
            category
        ));
    }
    html.push_str("    </ul>\n");

    html.push_str("    <ul class=\"dropdown-options\">\n");
    for value in &dropdown.available {
        html.push_str(&format!(
            "      <li class=\"option\" data-category=\"{1}\" data-value=\"{0}\">{0}</li>\n",
            escape(value),
            category
        ));
    }
    html.push_str("    </ul>\n");
    html.push_str("  </div>\n");
    html.push_str("</div>");
    html
}

/// Active-filter tags, one per selected value
pub fn render_tags(tags: &[Tag]) -> String {
    let mut html = String::from("<ul class=\"tags\">\n");
    for tag in tags {
        html.push_str(&format!(
            "  <li class=\"tag\" data-category=\"{1}\" data-value=\"{0}\">{0}<button class=\"tag-remove\" data-category=\"{1}\" data-value=\"{0}\">×</button></li>\n",
            escape(&tag.value),
            tag.category.as_str()
        ));
    }
    html.push_str("</ul>");
    html
}

/// Complete document for the current view
pub fn render_page(view: &View<'_>, settings: &Settings) -> String {
    let dropdowns = view
        .dropdowns
        .iter()
        .map(render_dropdown)
        .collect::<Vec<_>>()
        .join("\n");

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"fr\">\n");
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <title>Les Petits Plats</title>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str("<header>\n");
    html.push_str(&format!(
        "  <input id=\"search\" type=\"search\" placeholder=\"Rechercher une recette, un ingrédient, ...\" value=\"{}\">\n",
        escape(&view.search_term)
    ));
    html.push_str("</header>\n");
    html.push_str("<main>\n");
    html.push_str("<section class=\"filters\">\n");
    html.push_str(&dropdowns);
    html.push('\n');
    html.push_str(&format!(
        "<span id=\"recipeCount\">{}</span>\n",
        render_count(view.count())
    ));
    html.push_str("</section>\n");
    html.push_str(&render_tags(&view.tags));
    html.push('\n');
    html.push_str("<section id=\"recipes-container\">\n");
    html.push_str(&render_grid(&view.visible, &view.search_term, settings));
    html.push_str("\n</section>\n");
    html.push_str("</main>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}
