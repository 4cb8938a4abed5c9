use carte_common::config::Config;
use carte_common::menu::{Course, MenuItem, Price};
use colored::*;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

/// `R 120.00`
pub fn money(price: Price, cfg: &Config) -> String {
    if cfg.currency.is_empty() {
        return price.to_string();
    }
    format!("{} {}", cfg.currency, price)
}

pub fn course_color(course: Course) -> Color {
    match course {
        Course::Starter => colors::STARTER,
        Course::Main => colors::MAIN,
        Course::Dessert => colors::DESSERT,
    }
}

pub fn checkbox(checked: bool) -> ColoredString {
    if checked {
        "[x]".color(colors::PRIMARY).bold()
    } else {
        "[ ]".color(colors::PRICE)
    }
}

/// The key/value lines printed under a dish.
pub fn item_to_details(item: &MenuItem, cfg: &Config) -> Vec<Detail> {
    let mut details: Vec<Detail> = Vec::new();

    if cfg.quiet < 2 && !item.description.is_empty() {
        details.push((
            "About".to_string(),
            item.description.color(colors::TEXT_DEFAULT),
        ));
    }
    details.push((
        "Price".to_string(),
        money(item.price, cfg).color(colors::PRICE).bold(),
    ));

    details
}

/// `2 items | Total: R 430.00`
pub fn cart_line(count_label: &str, total: Price, cfg: &Config) -> String {
    format!(
        "{} | Total: {}",
        count_label.color(colors::PRIMARY),
        money(total, cfg).color(colors::PRIMARY).bold()
    )
}

/// One dot per course, the focused one filled.
pub fn carousel_dots(focused: Course) -> String {
    Course::ALL
        .iter()
        .map(|course| {
            let dot = if *course == focused { "●" } else { "○" };
            format!("{}", dot.color(course_color(*course)))
        })
        .collect::<Vec<String>>()
        .join(" ")
}
