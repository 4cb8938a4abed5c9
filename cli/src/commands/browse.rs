use carte_common::config::Config;
use carte_common::menu::Course;
use carte_core::session::{Action, Session};
use carte_core::views::{CourseCard, HomeView};
use colored::*;

use crate::commands::SelectionArgs;
use crate::mprint;
use crate::terminal::format::{self, Detail};
use crate::terminal::{colors, print};

pub fn browse(selection: SelectionArgs, focus: Course, cfg: &Config) -> anyhow::Result<()> {
    let mut session: Session = selection.into_session();
    session.dispatch(Action::FocusCourse(focus));

    render(&session.home(), cfg);
    print::end_of_program();
    Ok(())
}

/// Draws the home screen: chef's menu toggle, course cards and cart bar.
pub fn render(view: &HomeView<'_>, cfg: &Config) {
    print::header("menu", cfg.quiet);
    print_chefs_menu(view);
    mprint!();

    for card in &view.cards {
        print_card(card, card.course == view.focused, cfg);
        mprint!();
    }

    print::centerln(&format::carousel_dots(view.focused));
    print::fat_separator();
    print::centerln(&format::cart_line(&view.cart.label(), view.cart.total, cfg));
}

fn print_chefs_menu(view: &HomeView<'_>) {
    print::print(&format!(
        "{} {}",
        format::checkbox(view.preset_active),
        view.preset_label.color(colors::PRIMARY).bold()
    ));
    print::print(&format!(
        "    {}",
        "Select all chef's specials in one tap!".color(colors::PRICE).italic()
    ));
}

fn print_card(card: &CourseCard<'_>, focused: bool, cfg: &Config) {
    let color = format::course_color(card.course);
    let marker = if focused { "▶" } else { " " };
    let title = format!("{} · Total: {}", card.course, format::money(card.total, cfg));
    print::tree_head(marker, &title, color);

    if let Some(text) = card.empty_text() {
        print::print(&format!("    {}", text.color(colors::PRICE)));
        return;
    }

    for entry in &card.entries {
        let item = entry.item;
        print::print(&format!(
            "  {} {} {}",
            format::checkbox(entry.checked),
            format!("{:>2}", item.id).color(colors::ACCENT),
            item.name.color(colors::TEXT_DEFAULT).bold()
        ));
        let details: Vec<Detail> = format::item_to_details(item, cfg)
            .into_iter()
            .map(|(key, value)| (format!("     {key}"), value))
            .collect();
        print::as_tree_one_level(details);
    }
}
