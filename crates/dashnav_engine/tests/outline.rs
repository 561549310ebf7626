use dashnav_core::{
    Control, ControlKind, PartialOutline, OVERVIEW_ROWS, OVERVIEW_SEARCH, OVERVIEW_TABLE,
    RUN_SELECTOR,
};
use dashnav_engine::outline_partial;
use pretty_assertions::assert_eq;

const OVERVIEW: &str = r#"
<div id="overview">
  <div class="input-group filter">
    <input id="searchOverview" type="text" placeholder="Filter">
    <button class="clear-filter-btn" type="button">x</button>
  </div>
  <table class="table">
    <thead><tr><th>Date</th><th>Total</th></tr></thead>
    <tbody>
      <tr><td data-timestamp="2024-01-02T03:00:00Z">2024-01-02 03:00</td><td>12</td></tr>
      <tr><td data-timestamp="2024-02-02T03:00:00Z">2024-02-02 03:00</td><td>0</td></tr>
    </tbody>
  </table>
</div>
"#;

const DETAILS: &str = r#"
<div id="run">
  <select id="runSelector" class="form-select">
    <option value="2024-02-02T03:00:00Z">latest</option>
    <option value="2024-01-02T03:00:00Z" selected>older</option>
  </select>
  <ul><li>added: a.txt</li></ul>
</div>
"#;

#[test]
fn overview_outline_has_rows_filter_and_table() {
    let outline = outline_partial(OVERVIEW);

    let rows = &outline.rows(OVERVIEW_ROWS).expect("overview rows").rows;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells, vec!["2024-01-02 03:00", "12"]);
    assert_eq!(rows[1].timestamp.as_deref(), Some("2024-02-02T03:00:00Z"));
    assert!(rows.iter().all(|row| !row.hidden));

    let search = outline.control(OVERVIEW_SEARCH).expect("search input");
    assert_eq!(search.kind, ControlKind::Input);
    assert_eq!(search.value, "");
    assert!(search.clear_button.is_some());

    assert!(outline.has_table(OVERVIEW_TABLE));
}

#[test]
fn details_outline_reads_selected_option() {
    let outline = outline_partial(DETAILS);

    let selector = outline.control(RUN_SELECTOR).expect("run selector");
    assert_eq!(selector.value, "2024-01-02T03:00:00Z");
    assert_eq!(
        selector.kind,
        ControlKind::Select {
            options: vec![
                "2024-02-02T03:00:00Z".to_string(),
                "2024-01-02T03:00:00Z".to_string(),
            ]
        }
    );
    assert!(outline.row_sets.is_empty());
    assert!(outline.tables.is_empty());
}

#[test]
fn input_outside_filter_group_has_no_clear_button() {
    let outline = outline_partial(
        r#"<div class="input-group"><input id="searchOverview" value="abc"><button class="clear-filter-btn"></button></div>"#,
    );
    assert_eq!(
        outline.controls,
        vec![Control::input(OVERVIEW_SEARCH, "abc")]
    );
}

#[test]
fn empty_partial_has_empty_outline() {
    assert_eq!(outline_partial(""), PartialOutline::default());
    assert_eq!(outline_partial("<p>nothing here</p>"), PartialOutline::default());
}
