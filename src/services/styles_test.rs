use super::*;
use std::collections::HashSet;

#[test]
fn catalog_has_seven_unique_styles() {
    let ids: HashSet<&str> = STYLES.iter().map(|s| s.id).collect();
    assert_eq!(STYLES.len(), 7);
    assert_eq!(ids.len(), 7);
}

#[test]
fn every_prompt_carries_structure_constraint() {
    for style in &STYLES {
        let prompt = style.prompt();
        assert!(prompt.contains(style.brief), "{} prompt should start with its brief", style.id);
        assert!(prompt.contains(STRUCTURE_SUFFIX), "{} prompt should carry the constraint", style.id);
    }
}

#[test]
fn catalog_ids_match_the_gallery_contract() {
    let ids: Vec<&str> = STYLES.iter().map(|s| s.id).collect();
    assert_eq!(
        ids,
        ["minimalista", "industrial", "rustico", "clasico", "mediterraneo", "eclectico", "bohemio"]
    );
}
