//! Case conversion.
//!
//! Word boundaries are spaces, `-`, `_` and (for the converters that read
//! camel case) ASCII uppercase letters.

/// Converts to lowercase.
#[must_use]
pub fn lower(value: &str) -> String {
    value.to_lowercase()
}

/// Converts to uppercase.
#[must_use]
pub fn upper(value: &str) -> String {
    value.to_uppercase()
}

/// Uppercases the first character.
#[must_use]
pub fn uc_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the first character.
#[must_use]
pub fn lc_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts `golang_orm_pkg` to `GolangOrmPkg`.
#[must_use]
pub fn studly(value: &str) -> String {
    separated_words(value).map(uc_first).collect()
}

/// Converts `golang_orm_pkg` to `golangOrmPkg`.
#[must_use]
pub fn camel(value: &str) -> String {
    lc_first(&studly(value))
}

/// Converts `EmailNotificationSent` or `email_notification_sent` to
/// `Email Notification Sent`.
///
/// A run of capitals such as `HTML` stays a single word.
#[must_use]
pub fn headline(value: &str) -> String {
    let mut split = String::with_capacity(value.len() + 8);
    let mut previous_upper = false;
    for c in value.chars() {
        let upper = c.is_ascii_uppercase();
        if upper && !previous_upper {
            split.push(' ');
        }
        split.push(c);
        previous_upper = upper;
    }
    separated_words(&split)
        .map(uc_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Converts `golangOrmPkg` to `golang_orm_pkg`.
#[must_use]
pub fn snake(value: &str) -> String {
    snake_with(value, "_")
}

/// Converts `golangOrmPkg` to `golang-orm-pkg`.
#[must_use]
pub fn kebab(value: &str) -> String {
    snake_with(value, "-")
}

/// Lowercases every word and joins them with `delimiter`.
///
/// Every ASCII uppercase letter starts a new word.
#[must_use]
pub fn snake_with(value: &str, delimiter: &str) -> String {
    let mut split = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        if c.is_ascii_uppercase() {
            split.push(' ');
        }
        split.push(c);
    }
    separated_words(&split)
        .map(lc_first)
        .collect::<Vec<_>>()
        .join(delimiter)
}

fn separated_words(value: &str) -> impl Iterator<Item = &str> {
    value
        .split([' ', '-', '_'])
        .filter(|word| !word.is_empty())
}
