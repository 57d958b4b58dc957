//! The built-in card decks.
//!
//! Pure data: every card face in the game, declared in print order. Most
//! action cards come in faction-coloured triples (alliance/daffodil,
//! raider/scarlet, chapel/cornflower); the ivory cards are the neutral
//! utility actions.

use crate::render::cards::{action_card, alliance_card, card_back, raider_card, CardFace};
use crate::render::icons::{
    alliance, chapel, coin, expand, raider, raider_removal, renown, settlement, territory_badge,
    tribute, vp_badge, Icon,
};
use crate::types::Colour;

/// Colour and emblem for each faction, in deck order.
const FACTIONS: [(Colour, fn() -> Icon); 3] = [
    (Colour::DAFFODIL, alliance),
    (Colour::SCARLET, raider),
    (Colour::CORNFLOWER_BLUE, chapel),
];

/// The 25 action cards.
pub fn action_deck() -> Vec<CardFace> {
    let mut deck = Vec::with_capacity(25);

    // a colour-matched triple of cards, one per faction, starting at `base`
    let triple = |deck: &mut Vec<CardFace>,
                      base: u32,
                      rows: fn(&dyn Fn() -> Icon) -> Vec<Vec<Icon>>| {
        for (i, (colour, emblem)) in FACTIONS.iter().enumerate() {
            deck.push(action_card(base + i as u32, *colour, rows(emblem)));
        }
    };

    triple(&mut deck, 1, |emblem| {
        vec![
            vec![settlement(), emblem(), emblem(), coin()],
            vec![coin(), coin(), coin(), expand()],
            vec![emblem(), emblem()],
        ]
    });

    deck.push(action_card(
        4,
        Colour::DAFFODIL,
        vec![
            vec![settlement(), alliance(), alliance()],
            vec![coin(), coin(), coin(), expand()],
            vec![alliance(), alliance()],
        ],
    ));
    deck.push(action_card(
        5,
        Colour::SCARLET,
        vec![
            vec![settlement(), raider(), raider()],
            vec![coin(), coin(), expand()],
            vec![raider(), raider()],
        ],
    ));
    deck.push(action_card(
        6,
        Colour::CORNFLOWER_BLUE,
        vec![
            vec![settlement(), chapel(), chapel()],
            vec![coin(), coin(), coin(), expand()],
            vec![chapel(), chapel()],
        ],
    ));

    triple(&mut deck, 7, |emblem| {
        vec![
            vec![settlement(), emblem(), coin()],
            vec![coin(), coin(), expand()],
            vec![emblem(), emblem()],
        ]
    });

    triple(&mut deck, 10, |emblem| {
        vec![
            vec![settlement(), coin(), coin()],
            vec![coin(), coin(), expand()],
            vec![emblem(), emblem()],
        ]
    });

    deck.push(action_card(
        13,
        Colour::IVORY,
        vec![
            vec![settlement(), coin()],
            vec![coin(), coin(), expand()],
            vec![raider_removal(), tribute()],
        ],
    ));

    triple(&mut deck, 14, |emblem| {
        vec![
            vec![settlement()],
            vec![coin(), expand()],
            vec![emblem(), emblem(), emblem()],
        ]
    });

    triple(&mut deck, 17, |emblem| {
        vec![
            vec![settlement(), tribute()],
            vec![coin(), expand()],
            vec![emblem(), emblem(), emblem()],
        ]
    });

    deck.push(action_card(
        20,
        Colour::IVORY,
        vec![vec![settlement()], vec![coin(), coin(), expand()]],
    ));
    deck.push(action_card(
        21,
        Colour::IVORY,
        vec![vec![settlement(), tribute()], vec![coin(), coin(), expand()]],
    ));
    deck.push(action_card(
        22,
        Colour::IVORY,
        vec![
            vec![settlement(), tribute(), tribute()],
            vec![coin(), coin(), expand()],
        ],
    ));

    triple(&mut deck, 23, |emblem| {
        vec![
            vec![settlement(), tribute(), tribute()],
            vec![coin(), expand()],
            vec![emblem(), emblem(), emblem()],
        ]
    });

    deck
}

/// The named alliance cards: a victory-point badge on top, then the reward
/// row (a settlement in a territory, or flat renown).
pub fn alliance_deck() -> Vec<CardFace> {
    vec![
        alliance_card(
            "Aodhan",
            vec![vec![vp_badge(2)], vec![settlement(), territory_badge('L')]],
        ),
        alliance_card("Aoife", vec![vec![vp_badge(2)], vec![renown()]]),
        alliance_card("Brigid", vec![vec![vp_badge(4)], vec![]]),
        alliance_card(
            "Conall",
            vec![vec![vp_badge(2)], vec![settlement(), territory_badge('S')]],
        ),
        alliance_card(
            "Cormac",
            vec![vec![vp_badge(2)], vec![settlement(), territory_badge('C')]],
        ),
        alliance_card(
            "Niall",
            vec![vec![vp_badge(2)], vec![settlement(), territory_badge('N')]],
        ),
        alliance_card(
            "Orlaith",
            vec![vec![vp_badge(2)], vec![settlement(), territory_badge('M')]],
        ),
    ]
}

/// Raider strength cards, 9 through 14.
pub fn raider_deck() -> Vec<CardFace> {
    (9..=14).map(raider_card).collect()
}

pub fn card_backs() -> Vec<CardFace> {
    vec![
        card_back("action", Colour::CORNFLOWER_BLUE),
        card_back("alliance", Colour::DAFFODIL),
        card_back("raider", Colour::SCARLET),
    ]
}

/// Every card face, in the order the decks are printed: backs first, then
/// action, alliance and raider decks.
pub fn all_cards() -> Vec<CardFace> {
    let mut cards = card_backs();
    cards.extend(action_deck());
    cards.extend(alliance_deck());
    cards.extend(raider_deck());
    cards
}
