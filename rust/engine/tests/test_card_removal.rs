use hilo_engine::cards::{full_deck, Card, Rank as R, Suit as S};
use hilo_engine::deck::{initialize_deck, remove_card};

#[test]
fn removing_each_card_drops_exactly_one() {
    let deck = initialize_deck();
    for card in full_deck() {
        let rest = remove_card(&deck, &card);
        assert_eq!(rest.len(), 51);
        assert!(!rest.contains(&card));
    }
}

#[test]
fn removing_an_absent_card_is_a_no_op() {
    let c = Card::new(S::Hearts, R::Nine);
    let once = remove_card(&initialize_deck(), &c);
    let twice = remove_card(&once, &c);
    assert_eq!(once, twice);
    assert_eq!(twice.len(), 51);
}

#[test]
fn draining_every_card_leaves_an_empty_deck() {
    let mut deck = initialize_deck();
    for card in full_deck() {
        deck = remove_card(&deck, &card);
    }
    assert!(deck.is_empty());
}
