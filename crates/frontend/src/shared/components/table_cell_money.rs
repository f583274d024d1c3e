//! Table cell for amounts in cents
//!
//! ```ignore
//! <TableCellMoney value=sale.total />
//! <TableCellMoney value=balance color_by_sign=true />
//! ```

use crate::shared::money::format_brl;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellMoney(
    value: i64,
    /// Negative values red, positive green
    #[prop(optional)]
    color_by_sign: bool,
    #[prop(optional)]
    bold: bool,
) -> impl IntoView {
    let mut class = String::from("table__cell--money");
    if color_by_sign {
        if value < 0 {
            class.push_str(" table__cell--negative");
        } else if value > 0 {
            class.push_str(" table__cell--positive");
        }
    }
    if bold {
        class.push_str(" table__cell--bold");
    }

    view! {
        <TableCell>
            <TableCellLayout>
                <span class=class>{format_brl(value)}</span>
            </TableCellLayout>
        </TableCell>
    }
}
