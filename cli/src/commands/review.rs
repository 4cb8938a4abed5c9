use carte_common::config::Config;
use carte_core::session::Session;
use carte_core::views::ReviewView;
use colored::*;

use crate::commands::SelectionArgs;
use crate::mprint;
use crate::terminal::{format, print};

pub fn review(selection: SelectionArgs, cfg: &Config) -> anyhow::Result<()> {
    let session: Session = selection.into_session();

    render(&session.review(), cfg);
    print::end_of_program();
    Ok(())
}

/// Draws the patron menu: the chosen dishes per course and the total.
pub fn render(view: &ReviewView<'_>, cfg: &Config) {
    print::header("patron menu", cfg.quiet);

    if let Some(text) = view.empty_text() {
        print::nothing_chosen(text);
        return;
    }

    for (idx, section) in view.sections.iter().enumerate() {
        let color = format::course_color(section.course);
        print::print(&format!("{}", section.course.label().to_uppercase().color(color).bold()));

        for item in &section.items {
            print::tree_head(item.id.as_str(), &item.name, color);
            print::as_tree_one_level(format::item_to_details(item, cfg));
        }

        if idx + 1 != view.sections.len() {
            mprint!();
        }
    }

    print::fat_separator();
    print::centerln(&format::cart_line(&view.cart.label(), view.cart.total, cfg));
}
