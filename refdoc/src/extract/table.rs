//! Summary-table transduction into list-table rows

use scraper::ElementRef;

use super::dom::tag_children;
use super::error::ExtractError;
use super::text::flatten_children;

/// Group a summary table's cells into list-table rows.
///
/// Cells are the table element's tag children in document order. Cell
/// content is flattened from each cell's children, not the cell itself.
/// A cell count that does not divide evenly into `columns` means the page
/// no longer matches the template; the run fails rather than emit
/// mis-grouped rows.
///
/// # Parameters
/// * `table` - The resolved summary table element
/// * `columns` - Configured column count for this template family
///
/// # Returns
/// * `Ok(rows)` - Cells grouped into rows of `columns` strings each
/// * `Err(ExtractError)` - The cell count does not fit the column count
pub fn list_table_rows(
    table: ElementRef<'_>,
    columns: usize,
) -> Result<Vec<Vec<String>>, ExtractError> {
    if columns == 0 {
        return Err(ExtractError::StructureMismatch {
            section: "method-summary".to_string(),
            detail: "summary column count must be at least 1".to_string(),
        });
    }

    let cells: Vec<String> = tag_children(table)
        .into_iter()
        .map(flatten_children)
        .collect();

    if cells.len() % columns != 0 {
        return Err(ExtractError::StructureMismatch {
            section: "method-summary".to_string(),
            detail: format!(
                "{} summary cells cannot be grouped into rows of {}",
                cells.len(),
                columns
            ),
        });
    }

    Ok(cells.chunks(columns).map(<[String]>::to_vec).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn table_fixture(cells: &[&str]) -> Html {
        let body: String = cells
            .iter()
            .map(|cell| format!("<div class=\"col\">{}</div>", cell))
            .collect();
        Html::parse_fragment(&format!("<div class=\"summary-table\">{}</div>", body))
    }

    fn first_table(html: &Html) -> ElementRef<'_> {
        let selector = Selector::parse(".summary-table").unwrap();
        html.select(&selector).next().unwrap()
    }

    #[test]
    fn test_cells_group_into_rows() {
        let html = table_fixture(&["Kind", "Name", "Since", "void", "close()", "5.2"]);
        let rows = list_table_rows(first_table(&html), 3).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["Kind", "Name", "Since"]);
        assert_eq!(rows[1], vec!["void", "close()", "5.2"]);
    }

    #[test]
    fn test_cell_content_is_flattened() {
        let html = table_fixture(&["<code><a href=\"#x\">close()</a></code>", "b", "c"]);
        let rows = list_table_rows(first_table(&html), 3).unwrap();

        assert_eq!(rows[0][0], "close()");
    }

    #[test]
    fn test_non_divisible_cell_count_fails() {
        let html = table_fixture(&["a", "b", "c", "d", "e", "f", "g"]);
        let result = list_table_rows(first_table(&html), 3);

        assert!(matches!(
            result,
            Err(ExtractError::StructureMismatch { .. })
        ));
    }

    #[test]
    fn test_zero_columns_fails() {
        let html = table_fixture(&["a"]);
        let result = list_table_rows(first_table(&html), 0);

        assert!(matches!(
            result,
            Err(ExtractError::StructureMismatch { .. })
        ));
    }
}
