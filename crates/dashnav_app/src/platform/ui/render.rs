use std::fmt::Write as _;

use dashnav_core::{AppViewModel, ContentView, FilterView, RowView, SelectorView};
use dashnav_engine::html_text;

/// Renders the view model as plain text for the terminal.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    let nav = view
        .nav
        .iter()
        .map(|link| {
            if link.active {
                format!("[{}]*", link.label)
            } else {
                format!("[{}]", link.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "{nav}   #{}", view.fragment);

    match &view.content {
        ContentView::Empty => {
            let _ = writeln!(out, "(loading)");
        }
        ContentView::Message { html } => {
            let _ = writeln!(out, "{}", html_text(html));
        }
        ContentView::Partial {
            section,
            rows,
            filter,
            selector,
            sortable,
            ..
        } => {
            let sortable = if *sortable { " (sortable)" } else { "" };
            let _ = writeln!(out, "-- {section}{sortable} --");
            if let Some(filter) = filter {
                render_filter(&mut out, filter);
            }
            render_rows(&mut out, rows);
            if let Some(selector) = selector {
                render_selector(&mut out, selector);
            }
        }
    }

    out
}

fn render_filter(out: &mut String, filter: &FilterView) {
    let clear = match filter.clear_visible {
        Some(true) => " [x]",
        _ => "",
    };
    let focus = if filter.focused { " (focused)" } else { "" };
    let _ = writeln!(
        out,
        "filter {}: {:?}{clear}{focus}",
        filter.input_id, filter.value
    );
}

fn render_rows(out: &mut String, rows: &[RowView]) {
    let mut hidden = 0;
    for (index, row) in rows.iter().enumerate() {
        if row.hidden {
            hidden += 1;
            continue;
        }
        let link = if row.timestamp_link.is_some() {
            format!("   -> open {}", index + 1)
        } else {
            String::new()
        };
        let _ = writeln!(out, "{:>3} {}{link}", index + 1, row.cells.join(" | "));
    }
    if hidden > 0 {
        let _ = writeln!(out, "({hidden} of {} rows hidden)", rows.len());
    }
}

fn render_selector(out: &mut String, selector: &SelectorView) {
    let _ = writeln!(out, "run: {}", selector.value);
    for option in &selector.options {
        let marker = if *option == selector.value { '*' } else { ' ' };
        let _ = writeln!(out, "  {marker} {option}");
    }
}
