use dashnav_core::{
    ClearButton, Control, ControlKind, PartialOutline, PartialRow, RowSet, OVERVIEW_ROWS,
    OVERVIEW_TABLE,
};
use scraper::{CaseSensitivity, ElementRef, Html, Selector};

/// Builds the element model of a partial: overview rows, id-carrying
/// inputs and selects, and the tables the shell may hand to a sorter.
///
/// Selectors that fail to parse or match nothing simply contribute nothing.
pub fn outline_partial(html: &str) -> PartialOutline {
    let doc = Html::parse_fragment(html);

    let row_sets = [OVERVIEW_ROWS]
        .into_iter()
        .filter_map(|selector| {
            let sel = Selector::parse(selector).ok()?;
            let rows: Vec<PartialRow> = doc.select(&sel).map(outline_row).collect();
            (!rows.is_empty()).then(|| RowSet::new(selector, rows))
        })
        .collect();

    let controls = Selector::parse("input[id], select[id]")
        .map(|sel| doc.select(&sel).filter_map(outline_control).collect())
        .unwrap_or_default();

    let tables = [OVERVIEW_TABLE]
        .into_iter()
        .filter(|selector| {
            Selector::parse(selector)
                .map(|sel| doc.select(&sel).next().is_some())
                .unwrap_or(false)
        })
        .map(ToOwned::to_owned)
        .collect();

    PartialOutline {
        row_sets,
        controls,
        tables,
    }
}

/// Text content of an HTML fragment, with entities decoded and tags dropped.
pub fn html_text(html: &str) -> String {
    Html::parse_fragment(html).root_element().text().collect()
}

fn outline_row(row: ElementRef<'_>) -> PartialRow {
    let cells = row
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| cell.value().name() == "td")
        .map(|cell| cell.text().collect::<String>())
        .collect();

    let timestamp = Selector::parse("td[data-timestamp]").ok().and_then(|sel| {
        row.select(&sel)
            .next()
            .and_then(|cell| cell.value().attr("data-timestamp"))
            .map(ToOwned::to_owned)
    });

    PartialRow {
        cells,
        timestamp,
        hidden: false,
    }
}

fn outline_control(element: ElementRef<'_>) -> Option<Control> {
    let id = element.value().id()?.to_string();
    let control = match element.value().name() {
        "select" => {
            let option_sel = Selector::parse("option").ok()?;
            let options: Vec<(String, bool)> = element
                .select(&option_sel)
                .map(|option| {
                    let value = option
                        .value()
                        .attr("value")
                        .map(ToOwned::to_owned)
                        .unwrap_or_else(|| option.text().collect::<String>().trim().to_string());
                    (value, option.value().attr("selected").is_some())
                })
                .collect();
            let value = options
                .iter()
                .find(|(_, selected)| *selected)
                .or_else(|| options.first())
                .map(|(value, _)| value.clone())
                .unwrap_or_default();
            Control {
                id,
                kind: ControlKind::Select {
                    options: options.into_iter().map(|(value, _)| value).collect(),
                },
                value,
                clear_button: None,
            }
        }
        _ => Control {
            id,
            kind: ControlKind::Input,
            value: element.value().attr("value").unwrap_or_default().to_string(),
            clear_button: None,
        },
    };

    Some(Control {
        clear_button: clear_button_for(element),
        ..control
    })
}

fn clear_button_for(element: ElementRef<'_>) -> Option<ClearButton> {
    let wrapper = element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| {
            let value = ancestor.value();
            value.has_class("input-group", CaseSensitivity::CaseSensitive)
                && value.has_class("filter", CaseSensitivity::CaseSensitive)
        })?;
    let button_sel = Selector::parse(".clear-filter-btn").ok()?;
    wrapper
        .select(&button_sel)
        .next()
        .map(|_| ClearButton::default())
}
