//! Integration tests for replacement, padding and masking

use sundry::strings;

// =============================================================================
// Replacement
// =============================================================================

#[test]
fn templated_placeholders() {
    let template = "Hello :name, your code is :code";
    let filled = strings::regex_replace_sequential(":[a-z]+", &["Ann", "X-1"], template).unwrap();
    assert_eq!(filled, "Hello Ann, your code is X-1");
}

#[test]
fn invalid_pattern_is_an_error() {
    let err = strings::regex_replace_sequential("a{2", &[], "aa").unwrap_err();
    assert_eq!(err.error_type(), "invalid_param");
}

#[test]
fn swap_order_is_respected() {
    let pairs = [("cat", "dog"), ("dog", "bird")];
    assert_eq!(strings::swap(&pairs, "cat"), "bird");
}

#[test]
fn replace_first_and_last_occurrence() {
    let s = "a-b-c";
    assert_eq!(strings::replace_first("-", "+", s), "a+b-c");
    assert_eq!(strings::replace_last("-", "+", s), "a-b+c");
    assert_eq!(strings::replace("-", "", s), "abc");
}

#[test]
fn remove_ignoring_case() {
    assert_eq!(strings::remove("the ", "The cat and THE dog", false), "cat and dog");
}

#[test]
fn substr_replace_inserts() {
    assert_eq!(strings::substr_replace("1300", ":", 2, 0), "13:00");
    assert_eq!(strings::substr_replace("héllo", "E", 1, 1), "hEllo");
}

// =============================================================================
// Padding & Masking
// =============================================================================

#[test]
fn padding_counts_characters() {
    assert_eq!(strings::pad_left("é", 3, "·"), "··é");
    assert_eq!(strings::pad_right("7", 3, "0"), "700");
    assert_eq!(strings::pad_both("x", 5, "ab"), "abxab");
}

#[test]
fn mask_email_local_part() {
    assert_eq!(strings::mask("taylor@example.com", '*', 3, 3), "tay***@example.com");
    assert_eq!(strings::mask("taylor@example.com", '*', -4, 0), "taylor@example.com");
}

#[test]
fn caps_and_limits() {
    assert_eq!(strings::finish("/var/log", "/"), "/var/log/");
    assert_eq!(strings::start("var/log", "/"), "/var/log");
    assert_eq!(strings::limit("The quick brown fox", 9, "..."), "The quick...");
}

#[test]
fn misc_text() {
    assert_eq!(strings::escape_html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
    assert_eq!(strings::reverse("stressed"), "desserts");
    assert_eq!(strings::length("日本語"), 3);
    assert_eq!(strings::substr("日本語", 1, 1), "本");
    assert_eq!(strings::join(&["a", "b"], "+"), "a+b");
    assert_eq!(strings::trim("..x..", Some(".")), "x");
}

#[test]
fn random_strings_are_reproducible_with_a_seed() {
    use rand::SeedableRng;
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(11);
    let a = strings::random(12, &mut rng);
    assert_eq!(a.chars().count(), 12);
    assert_eq!(strings::random_seeded(12, 11), a);
}
