//! Game integration tests.

use itemjack::{
    Card, Deck, DeckCatalog, DeckTemplate, Game, GameOptions, InputRequest, Item, ItemError,
    MatchOutcome, RoundStatus, SessionEnd, Suit,
};

const fn card(value: &'static str, weight: i32) -> Card {
    Card::new(value, Suit::Hearts, weight)
}

/// Stacks `draws` on the current shoe and deals a new round from them.
fn deal_from_draws(game: &mut Game, draws: &[Card]) {
    game.current_match_mut()
        .shoe_mut()
        .replace_deck(Deck::from_draws(draws));
    game.next_round();
}

/// Input source replying with `replies` in order, then cancelling.
fn scripted(replies: &[Option<&str>]) -> impl FnMut(&InputRequest) -> Option<String> {
    let mut replies: Vec<Option<String>> = replies
        .iter()
        .rev()
        .map(|reply| reply.map(ToString::to_string))
        .collect();
    move |_| replies.pop().flatten()
}

/// Plays a round the player wins by standing on 20; the dealer busts
/// drawing up from 19.
fn player_wins_round(game: &mut Game) -> itemjack::TurnReport {
    deal_from_draws(
        game,
        &[
            card("K", 10),
            card("Q", 10),
            card("J", 10),
            card("9", 9),
            card("5", 5),
        ],
    );
    game.player_stand()
}

/// Plays a round the player loses by busting on a hit.
fn player_busts_round(game: &mut Game) -> itemjack::TurnReport {
    deal_from_draws(
        game,
        &[
            card("K", 10),
            card("Q", 10),
            card("J", 10),
            card("9", 9),
            card("5", 5),
        ],
    );
    game.player_hit()
}

fn give_items(game: &mut Game, count: usize) {
    for _ in 0..count {
        game.add_item();
    }
}

#[test]
fn new_session_state() {
    let game = Game::new(GameOptions::default(), 42);
    assert_eq!(game.health(), 10);
    assert_eq!(game.score(), 0);
    assert!(game.items().is_empty());
    assert_eq!(game.match_status(), None);

    let round = game.current_match().round();
    assert_eq!(round.player().len(), 2);
    assert_eq!(round.dealer().len(), 2);
    assert!(round.is_dealer_hidden());
    assert!(!round.is_over());
    assert_ne!(game.current_match().deck_index(), 0);
}

#[test]
fn hit_into_bust_settles_without_stand() {
    let mut game = Game::new(GameOptions::default(), 1);
    let report = player_busts_round(&mut game);

    assert_eq!(report.round, Some(RoundStatus::PlayerBust));
    assert_eq!(report.match_outcome, None);
    let current = game.current_match();
    assert!(current.round().is_over());
    assert!(!current.round().has_player_stood());
    assert_eq!(current.dealer_rounds_won(), 1);
    assert_eq!(current.history(), &[false]);
}

#[test]
fn hit_below_21_keeps_playing() {
    let mut game = Game::new(GameOptions::default(), 1);
    deal_from_draws(
        &mut game,
        &[card("2", 2), card("3", 3), card("J", 10), card("9", 9), card("4", 4)],
    );
    let report = game.player_hit();
    assert_eq!(report, itemjack::TurnReport::default());
    assert_eq!(game.current_match().round().player().value(), 9);
}

#[test]
fn actions_after_settlement_are_ignored() {
    let mut game = Game::new(GameOptions::default(), 3);
    player_wins_round(&mut game);
    let player_cards = game.current_match().round().player().len();

    assert_eq!(game.player_hit(), itemjack::TurnReport::default());
    assert_eq!(game.player_stand(), itemjack::TurnReport::default());
    assert_eq!(game.current_match().round().player().len(), player_cards);
    assert_eq!(game.current_match().rounds_played_in_match(), 1);
}

#[test]
fn soft_seventeen_stand_scenario() {
    let mut game = Game::new(GameOptions::default(), 5);
    deal_from_draws(
        &mut game,
        &[
            card("A", 11),
            card("6", 6),
            card("9", 9),
            card("7", 7),
            card("3", 3),
        ],
    );
    assert_eq!(game.current_match().round().player().value(), 17);

    let report = game.player_stand();
    let dealer = game.current_match().round().dealer().value();
    assert_eq!(dealer, 19);
    assert_eq!(report.round, Some(RoundStatus::DealerWin));
    assert!(!game.current_match().round().is_dealer_hidden());
}

#[test]
fn winning_three_rounds_scores_a_point() {
    let mut game = Game::new(GameOptions::default(), 9);

    for _ in 0..2 {
        let report = player_wins_round(&mut game);
        assert_eq!(report.round, Some(RoundStatus::DealerBust));
        assert_eq!(report.match_outcome, None);
    }
    let report = player_wins_round(&mut game);
    assert_eq!(report.match_outcome, Some(MatchOutcome::PlayerWonMatch));
    assert!(report.item_granted.is_some());
    assert_eq!(report.session_end, None);

    assert_eq!(game.score(), 1);
    assert_eq!(game.health(), 10);
    assert_eq!(game.items().len(), 1);
    assert_eq!(game.match_status(), Some(MatchOutcome::PlayerWonMatch));
    assert!(game.current_match().is_over());
    assert_eq!(game.current_match().history(), &[true, true, true]);
}

#[test]
fn losing_a_match_costs_health() {
    let mut game = Game::new(GameOptions::default(), 9);
    for _ in 0..3 {
        player_busts_round(&mut game);
    }
    assert_eq!(game.health(), 9);
    assert_eq!(game.match_status(), Some(MatchOutcome::DealerWonMatch));
}

#[test]
fn next_round_after_match_starts_a_new_match() {
    let mut game = Game::new(GameOptions::default(), 12);
    for _ in 0..3 {
        player_wins_round(&mut game);
    }
    let previous = game.current_match().deck_index();

    assert!(game.next_round());
    let current = game.current_match();
    assert_ne!(current.deck_index(), previous);
    assert!(!current.is_over());
    assert!(current.history().is_empty());
    assert_eq!(current.rounds_played_in_match(), 0);
    assert_eq!(game.match_status(), None);
    assert_eq!(game.score(), 1);
}

#[test]
fn next_round_mid_match_keeps_the_match() {
    let mut game = Game::new(GameOptions::default(), 12);
    player_wins_round(&mut game);
    let index = game.current_match().deck_index();
    assert!(!game.next_round());
    assert_eq!(game.current_match().deck_index(), index);
    assert_eq!(game.current_match().history(), &[true]);
    assert!(!game.current_match().round().is_over());
}

#[test]
fn tie_settles_without_a_winner() {
    let mut game = Game::new(GameOptions::default(), 2);
    deal_from_draws(
        &mut game,
        &[card("K", 10), card("8", 8), card("Q", 10), card("8", 8)],
    );
    let report = game.player_stand();
    assert_eq!(report.round, Some(RoundStatus::Tie));
    assert_eq!(report.match_outcome, None);
    assert!(game.current_match().round().is_over());
    assert!(game.current_match().history().is_empty());
}

#[test]
fn health_running_out_resets_the_session() {
    let options = GameOptions::default().with_starting_health(1);
    let mut game = Game::new(options, 4);
    give_items(&mut game, 2);

    player_busts_round(&mut game);
    player_busts_round(&mut game);
    let report = player_busts_round(&mut game);

    assert_eq!(report.match_outcome, Some(MatchOutcome::DealerWonMatch));
    assert_eq!(report.session_end, Some(SessionEnd::GameOver));
    assert_eq!(game.health(), 1);
    assert_eq!(game.score(), 0);
    assert!(game.items().is_empty());
    // The caller starts the next match.
    assert!(game.current_match().is_over());
}

#[test]
fn reaching_victory_score_resets_the_session() {
    let options = GameOptions::default()
        .with_victory_score(1)
        .with_item_grant_interval(0);
    let mut game = Game::new(options, 4);
    give_items(&mut game, 1);

    player_wins_round(&mut game);
    player_wins_round(&mut game);
    let report = player_wins_round(&mut game);

    assert_eq!(report.session_end, Some(SessionEnd::Victory));
    assert_eq!(report.item_granted, None);
    assert_eq!(game.score(), 0);
    assert_eq!(game.health(), 10);
    assert!(game.items().is_empty());
}

#[test]
fn items_granted_every_third_round() {
    let mut game = Game::new(GameOptions::default(), 6);
    assert_eq!(player_wins_round(&mut game).item_granted, None);
    assert_eq!(player_busts_round(&mut game).item_granted, None);
    let third = player_busts_round(&mut game);
    assert!(third.item_granted.is_some());
    assert_eq!(game.items(), &[third.item_granted.unwrap()]);
}

#[test]
fn inventory_is_capped() {
    let mut game = Game::new(GameOptions::default(), 6);
    give_items(&mut game, 4);
    assert_eq!(game.items().len(), 4);
    assert_eq!(game.add_item(), None);
    assert_eq!(game.items().len(), 4);
}

#[test]
fn use_item_rejections_change_nothing() {
    let mut game = Game::new(GameOptions::default(), 7);
    assert_eq!(game.use_item(0, 0), Err(ItemError::NoItems));

    give_items(&mut game, 1);
    assert_eq!(
        game.use_item(1, 0),
        Err(ItemError::InvalidSlot {
            slot: 1,
            available: 1
        })
    );
    assert_eq!(
        game.use_item(0, 2),
        Err(ItemError::CardOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(game.items().len(), 1);

    player_wins_round(&mut game);
    assert_eq!(game.use_item(0, 0), Err(ItemError::RoundOver));
    assert_eq!(game.items().len(), 1);
}

#[test]
fn every_item_effect() {
    let mut game = Game::new(GameOptions::default(), 8);
    for item in Item::ALL {
        assert!(game.give_item(item));
    }
    assert_eq!(game.items(), &Item::ALL);

    for item in Item::ALL {
        deal_from_draws(
            &mut game,
            &[card("5", 5), card("6", 6), card("J", 10), card("7", 7), card("2", 2)],
        );
        let report = game.use_item(0, 1).unwrap();
        assert_eq!(report.round, None);

        let round = game.current_match().round();
        match item {
            Item::RemoveOwnCard => assert_eq!(round.player().cards(), &[card("5", 5)]),
            Item::StealDealerCard => {
                assert_eq!(round.player().len(), 3);
                assert_eq!(round.player().cards()[2], card("7", 7));
                assert_eq!(round.dealer().cards(), &[card("J", 10), card("2", 2)]);
            }
            Item::IncrementOwnCard => assert_eq!(round.player().cards()[1].weight, 7),
            Item::DecrementOwnCard => assert_eq!(round.player().cards()[1].weight, 5),
        }
    }
    assert!(game.items().is_empty());
}

#[test]
fn give_item_respects_the_cap() {
    let mut game = Game::new(GameOptions::default().with_max_items(1), 8);
    assert!(game.give_item(Item::RemoveOwnCard));
    assert!(!game.give_item(Item::StealDealerCard));
    assert_eq!(game.items(), &[Item::RemoveOwnCard]);
}

#[test]
fn items_lower_player_value() {
    for item in [Item::RemoveOwnCard, Item::DecrementOwnCard] {
        let mut game = Game::new(GameOptions::default(), 10);
        game.give_item(item);
        deal_from_draws(
            &mut game,
            &[card("K", 10), card("2", 2), card("J", 10), card("7", 7)],
        );

        let report = game.use_item(0, 0).unwrap();
        assert_eq!(report.round, None);
        assert!(game.current_match().round().player().value() < 12);
    }
}

#[test]
fn catalog_without_face_cards_still_finishes_a_stand() {
    let aces = DeckTemplate::new("Aces", vec![card("A", 11); 4]);
    let catalog = DeckCatalog::new(vec![aces]).unwrap();
    let mut game = Game::with_catalog(GameOptions::default(), catalog, 3);
    assert_eq!(game.current_match().round().player().value(), 12);

    let report = game.player_stand();
    assert_eq!(report.round, Some(RoundStatus::DealerWin));
    assert_eq!(game.current_match().round().dealer().value(), 17);
}

#[test]
fn tie_does_not_decide_a_single_round_match() {
    let options = GameOptions::default().with_rounds_to_win(0);
    let mut game = Game::new(options, 2);
    deal_from_draws(
        &mut game,
        &[card("K", 10), card("8", 8), card("Q", 10), card("8", 8)],
    );
    let report = game.player_stand();
    assert_eq!(report.round, Some(RoundStatus::Tie));
    assert_eq!(report.match_outcome, None);
    assert_eq!(game.score(), 0);
    assert!(!game.current_match().is_over());
}

#[test]
fn item_use_through_input_protocol() {
    let mut game = Game::new(GameOptions::default(), 11);
    give_items(&mut game, 1);
    let item = game.items()[0];
    deal_from_draws(
        &mut game,
        &[card("5", 5), card("6", 6), card("J", 10), card("7", 7), card("2", 2)],
    );

    let mut input = scripted(&[Some("two"), Some("1"), Some("5"), Some("2")]);
    let report = game.use_item_with(&mut input).unwrap();
    assert_eq!(report.round, None);
    assert!(game.items().is_empty());

    let round = game.current_match().round();
    match item {
        Item::RemoveOwnCard => assert_eq!(round.player().len(), 1),
        Item::StealDealerCard => assert_eq!(round.player().cards()[2], card("7", 7)),
        Item::IncrementOwnCard => assert_eq!(round.player().value(), 12),
        Item::DecrementOwnCard => assert_eq!(round.player().value(), 10),
    }
}

#[test]
fn cancelled_input_leaves_state_untouched() {
    let mut game = Game::new(GameOptions::default(), 13);
    give_items(&mut game, 2);
    let items = game.items().to_vec();
    let round = game.current_match().round().clone();

    let mut cancel_first = scripted(&[None]);
    assert_eq!(
        game.use_item_with(&mut cancel_first),
        Err(ItemError::Cancelled)
    );

    let mut cancel_second = scripted(&[Some("1"), Some("nope"), None]);
    assert_eq!(
        game.use_item_with(&mut cancel_second),
        Err(ItemError::Cancelled)
    );

    assert_eq!(game.items(), items.as_slice());
    assert_eq!(game.current_match().round(), &round);
}

#[test]
fn view_hides_dealer_until_settled() {
    let mut game = Game::new(GameOptions::default(), 14);
    deal_from_draws(
        &mut game,
        &[
            card("K", 10),
            card("Q", 10),
            card("J", 10),
            card("9", 9),
            card("5", 5),
        ],
    );

    let view = game.view();
    assert_eq!(view.health, 10);
    assert_eq!(view.player_value, 20);
    assert_eq!(view.player_cards, vec![card("K", 10), card("Q", 10)]);
    assert!(view.dealer_hidden);
    assert_eq!(view.dealer_cards, vec![card("J", 10)]);
    assert_eq!(view.dealer_value, None);
    assert_eq!(view.deck_name, game.current_match().deck_name());

    game.player_stand();
    let view = game.view();
    assert!(!view.dealer_hidden);
    assert_eq!(view.dealer_cards.len(), 3);
    assert_eq!(view.dealer_value, Some(24));
    assert_eq!(view.history, vec![true]);
    assert_eq!(view.rounds_played, 1);
    assert!(view.round_over);
}

#[test]
fn same_seed_same_session() {
    let mut a = Game::new(GameOptions::default(), 77);
    let mut b = Game::new(GameOptions::default(), 77);
    for _ in 0..5 {
        assert_eq!(a.player_hit(), b.player_hit());
        assert_eq!(a.player_stand(), b.player_stand());
        a.next_round();
        b.next_round();
    }
    assert_eq!(a.view(), b.view());
}
