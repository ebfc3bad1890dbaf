use super::MeasureRow;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

pub fn render_table(rows: &[MeasureRow<'_>]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Component", "Type", "Metric", "Value"]);

    for row in rows {
        let value = match row.rating {
            Some(rating) => rating.to_string(),
            None => row.value.to_string(),
        };
        table.add_row(vec![
            Cell::new(row.component_key),
            Cell::new(&row.component_type),
            Cell::new(row.metric),
            Cell::new(value),
        ]);
    }
    table.to_string()
}
