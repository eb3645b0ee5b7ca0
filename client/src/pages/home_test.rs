use super::*;

#[test]
fn feature_grid_is_the_same_size_in_both_languages() {
    assert_eq!(features(Language::En).len(), features(Language::Fr).len());
}

#[test]
fn features_are_translated_not_copied() {
    let en = features(Language::En);
    let fr = features(Language::Fr);
    for (a, b) in en.iter().zip(fr.iter()) {
        assert_ne!(a.title, b.title);
    }
}

#[test]
fn stats_keep_the_same_numbers_across_languages() {
    let en = stats(Language::En);
    let fr = stats(Language::Fr);
    for (a, b) in en.iter().zip(fr.iter()) {
        assert_eq!(a.0, b.0);
    }
}
