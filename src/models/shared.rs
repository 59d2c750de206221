use sea_orm::ExprTrait;
use sea_orm::prelude::Expr;
use sea_orm::sea_query::{Func, IntoColumnRef, LikeExpr, SimpleExpr};

/// Escape LIKE wildcard characters in a search string.
pub fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Build a `%term%` LIKE pattern for a case-insensitive substring match,
/// with wildcard characters in the term escaped.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term).to_lowercase())
}

/// `lower(col) LIKE pattern ESCAPE '\'` — pattern must come from [`contains_pattern`].
pub fn lower_like<C: IntoColumnRef>(col: C, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col))).like(LikeExpr::new(pattern).escape('\\'))
}
