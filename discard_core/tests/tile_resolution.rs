//! Resolution properties over the whole tile domain, plus proptest checks
//! that classification and rendering never fail on arbitrary input.

use std::collections::HashSet;

use discard_core::{
    render, resolve, AssetCatalog, AssetKey, Honor, Suit, TileId, TileProps, TileState,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn prefix(suit: Suit) -> &'static str {
    match suit {
        Suit::Man => "Man",
        Suit::Pin => "Pin",
        Suit::Sou => "Sou",
    }
}

#[test]
fn every_numbered_tile_names_suit_and_rank() {
    for suit in Suit::ALL {
        for rank in 1..=9u8 {
            let id = TileId::classify(&format!("{}{}", rank, suit.letter()));
            let res = resolve(id);
            assert_eq!(res.primary.name(), format!("{}{}", prefix(suit), rank));
            assert_eq!(res.fallback, Some(AssetKey::Blank));
        }
    }
}

#[test]
fn red_fives_are_distinct_but_share_the_plain_fallback() {
    for suit in Suit::ALL {
        let red = resolve(TileId::RedFive(suit));
        let plain = resolve(TileId::number(5, suit));
        assert_ne!(red.primary, plain.primary);
        assert_eq!(red.fallback, Some(plain.primary));
        assert_eq!(red.primary.name(), format!("{}5-Dora", prefix(suit)));
    }
}

#[test]
fn honor_assets_are_injective() {
    let primaries: HashSet<AssetKey> = Honor::ALL
        .iter()
        .map(|&h| {
            let res = resolve(TileId::Honor(h));
            assert_eq!(res.fallback, Some(AssetKey::Blank));
            res.primary
        })
        .collect();
    assert_eq!(primaries.len(), 7);
}

#[test]
fn every_catalog_entry_is_a_known_file() {
    let catalog = AssetCatalog::standard();
    for key in AssetKey::iter() {
        let path = catalog.path(key).unwrap();
        assert!(path.ends_with(&format!("/{}.svg", key.name())));
    }
}

#[test]
fn every_state_renders_on_a_partial_catalog() {
    let catalog = AssetCatalog::from_entries([(AssetKey::Blank, "b.svg")]).unwrap();
    for state in TileState::iter() {
        let view = render(&TileProps::new(TileId::classify("7z")).state(state), &catalog);
        assert_eq!(view.src, "b.svg");
        assert_eq!(view.disabled, state == TileState::Disabled);
    }
}

fn any_tile() -> impl Strategy<Value = TileId> {
    let suit = prop_oneof![Just(Suit::Man), Just(Suit::Pin), Just(Suit::Sou)];
    prop_oneof![
        (1..=9u8, suit.clone()).prop_map(|(r, s)| TileId::number(r, s)),
        suit.prop_map(TileId::RedFive),
        (0..7usize).prop_map(|i| TileId::Honor(Honor::ALL[i])),
        Just(TileId::Back),
        Just(TileId::Blank),
    ]
}

proptest! {
    #[test]
    fn classify_is_total(token in "\\PC{0,4}") {
        let id = TileId::classify(&token);
        let url = AssetCatalog::standard().url_for(id);
        prop_assert!(url.ends_with(".svg"));
    }

    #[test]
    fn canonical_token_classifies_back(id in any_tile()) {
        prop_assert_eq!(TileId::classify(&id.to_string()), id);
    }

    #[test]
    fn unknown_suit_letters_are_blank(rank in 0..=9u8, letter in "[a-lnoqrt-y]") {
        let token = format!("{}{}", rank, letter);
        prop_assert_eq!(TileId::classify(&token), TileId::Blank);
    }

    #[test]
    fn default_alt_is_the_token(id in any_tile()) {
        let view = render(&TileProps::new(id), AssetCatalog::standard());
        prop_assert_eq!(view.alt, id.to_string());
    }
}
