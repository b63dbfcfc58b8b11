//! Translation of validated list queries into `SeaORM` selects.

use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Select};
use transco_core::query::{ListQuery, QueryField, SortDirection};
use transco_shared::types::PageRequest;

/// Applies filters, ordering and the page window of `query` to `select`.
///
/// Every filter is a case-insensitive substring match and all filters must
/// match. `tiebreak` is appended after the requested ordering so that pages
/// are stable.
pub(crate) fn apply_list_query<E, F>(
    mut select: Select<E>,
    query: &ListQuery<F>,
    column: impl Fn(F) -> E::Column,
    tiebreak: E::Column,
    page: PageRequest,
) -> Select<E>
where
    E: EntityTrait,
    F: QueryField,
{
    for filter in &query.filters {
        let col = column(filter.field);
        select = select.filter(
            Expr::expr(Func::upper(Expr::col(col.as_column_ref())))
                .like(LikeExpr::new(contains_pattern(&filter.needle)).escape('\\')),
        );
    }

    for key in &query.sort {
        select = select.order_by(column(key.field), order(key.direction));
    }

    select
        .order_by_asc(tiebreak)
        .offset(page.offset())
        .limit(page.limit())
}

const fn order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

/// Builds an upper-cased `LIKE` pattern matching `needle` anywhere.
///
/// `%`, `_` and `\` in the needle match literally.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.to_uppercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
