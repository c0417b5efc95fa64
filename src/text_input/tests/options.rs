use crate::text_input::AutoCapitalize;

#[test]
fn none_leaves_characters_alone() {
    assert_eq!(AutoCapitalize::None.apply("", 'a'), "a");
}

#[test]
fn characters_uppercases_everything() {
    assert_eq!(AutoCapitalize::Characters.apply("ABC", 'd'), "D");
    assert_eq!(AutoCapitalize::Characters.apply("", 'ß'), "SS");
}

#[test]
fn words_uppercases_after_whitespace() {
    assert_eq!(AutoCapitalize::Words.apply("", 'a'), "A");
    assert_eq!(AutoCapitalize::Words.apply("ada ", 'l'), "L");
    assert_eq!(AutoCapitalize::Words.apply("ada l", 'o'), "o");
}

#[test]
fn sentences_uppercase_after_terminal_punctuation() {
    assert_eq!(AutoCapitalize::Sentences.apply("", 'h'), "H");
    assert_eq!(AutoCapitalize::Sentences.apply("Done. ", 'n'), "N");
    assert_eq!(AutoCapitalize::Sentences.apply("Done.", 'n'), "n");
    assert_eq!(AutoCapitalize::Sentences.apply("one two ", 't'), "t");
}
