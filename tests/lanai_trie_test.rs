//! Integration tests for the Lanai Trie against a shared word list.

use lanai_lib::data_structures::lanai_trie::{LanaiTrie, TrieError, TrieObject};
use lanai_lib::input;

const PREFIXES: &str = include_str!("../testdata/prefixes.json");

fn load_prefixes() -> Vec<String> {
    input::parse_json(PREFIXES).expect("testdata is a JSON array of strings")
}

#[test]
fn test_search_every_inserted_prefix() {
    let prefixes = load_prefixes();
    let trie: LanaiTrie = prefixes.iter().collect();

    for prefix in &prefixes {
        let found = trie.search(prefix);
        assert!(found.is_ok(), "prefix {prefix:?} should be found");
    }
}

#[test]
fn test_search_missing_prefix() {
    let trie: LanaiTrie = load_prefixes().iter().collect();

    assert_eq!(
        trie.search("notexists"),
        Err(TrieError::PrefixNotFound("notexists".to_string()))
    );
}

#[test]
fn test_completions_for_word_list() {
    let trie: LanaiTrie = load_prefixes().iter().collect();

    assert_eq!(
        trie.completions("pres").unwrap(),
        vec!["present", "president", "pressure"]
    );
    assert_eq!(
        trie.completions("john").unwrap(),
        vec!["johnny", "johnson"]
    );
}

#[test]
fn test_projection_is_reproducible() {
    let prefixes = load_prefixes();
    let first: LanaiTrie = prefixes.iter().collect();

    let json = serde_json::to_string(&first.to_object()).unwrap();
    let parsed: TrieObject = serde_json::from_str(&json).unwrap();

    let mut second = LanaiTrie::new();
    second.extend(prefixes.iter());
    assert_eq!(second.to_object(), parsed);
}

#[test]
fn test_print_does_not_panic() {
    let trie: LanaiTrie = ["prefix", "preload"].into_iter().collect();
    trie.print();
}
