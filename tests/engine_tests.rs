//! Engine behavior through the public API: setup, placement, battles,
//! scoring, and listeners.

use three_trios::cards::{Card, Value};
use three_trios::core::{MoveError, Player, PlayerColor};
use three_trios::grid::Grid;
use three_trios::rules::{
    ChannelListener, GameBuilder, GameEngine, GameResult, GameView, StatusEvent,
};

fn uniform(name: &str, v: i32) -> Card {
    let v = Value::from_int(v).unwrap();
    Card::new(name, v, v, v, v)
}

fn attacker() -> Card {
    Card::new("Attacker", Value::Five, Value::Three, Value::Seven, Value::Six)
}

fn assert_conserved(game: &GameEngine) {
    let in_hands = game.hand(PlayerColor::Red).len() + game.hand(PlayerColor::Blue).len();
    let on_grid = game.grid().unwrap().cards_on_grid();
    assert_eq!(in_hands + on_grid, game.cards_dealt());
}

/// Red opens on an empty row: nothing to battle, turn passes.
#[test]
fn test_opening_move_on_single_row() {
    let cards = vec![attacker(), uniform("r2", 1), uniform("b1", 1), uniform("b2", 1)];
    let mut game = GameBuilder::new()
        .build(Grid::with_holes(1, 3, &[]).unwrap(), cards)
        .unwrap();

    assert_eq!(game.hand(PlayerColor::Red).len(), 2);
    assert_eq!(game.hand(PlayerColor::Blue).len(), 2);

    let report = game.place_card(PlayerColor::Red, &attacker(), 0, 0).unwrap();

    assert!(report.flips.is_empty());
    assert!(!report.game_over);
    assert_eq!(game.current_player(), PlayerColor::Blue);
    assert_eq!(game.cell(0, 0).unwrap().owner(), Some(PlayerColor::Red));
    assert_conserved(&game);
}

/// West 6 beats East 3: the Blue card flips and Red's score goes up by one.
#[test]
fn test_single_flip_changes_scores() {
    // Red: attacker, filler x3. Blue: defender, filler x3.
    let mut cards = vec![attacker()];
    cards.extend((0..3).map(|i| uniform(&format!("r{i}"), 1)));
    cards.push(uniform("Defender", 3));
    cards.extend((0..4).map(|i| uniform(&format!("b{i}"), 1)));
    let mut game = GameBuilder::new()
        .build(Grid::with_holes(3, 3, &[(2, 2)]).unwrap(), cards)
        .unwrap();

    game.place_card(PlayerColor::Red, &uniform("r0", 1), 2, 1).unwrap();
    game.place_card(PlayerColor::Blue, &uniform("Defender", 3), 1, 0).unwrap();
    let red_before = game.player_score(PlayerColor::Red);
    let blue_before = game.player_score(PlayerColor::Blue);

    let report = game.place_card(PlayerColor::Red, &attacker(), 1, 1).unwrap();

    assert_eq!(report.flips.as_slice(), &[(1, 0)]);
    assert_eq!(game.cell(1, 0).unwrap().owner(), Some(PlayerColor::Red));
    assert_eq!(game.cell(1, 0).unwrap().card().unwrap().name(), "Defender");
    assert_eq!(game.player_score(PlayerColor::Red), red_before + 1);
    assert_eq!(game.player_score(PlayerColor::Blue), blue_before - 1);
    assert_conserved(&game);
}

/// Identical cards never flip each other, so the scores end level.
#[test]
fn test_identical_cards_end_in_tie() {
    let cards = (0..4).map(|i| uniform(&format!("c{i}"), 5)).collect();
    let mut game = GameBuilder::new()
        .build(Grid::with_holes(1, 3, &[]).unwrap(), cards)
        .unwrap();

    for (col, player) in [(0, PlayerColor::Red), (1, PlayerColor::Blue), (2, PlayerColor::Red)] {
        assert!(!game.is_game_over());
        assert_eq!(game.winner(), GameResult::NotOver);
        let card = game.hand(player)[0].clone();
        let report = game.place_card(player, &card, 0, col).unwrap();
        assert!(report.flips.is_empty());
    }

    assert!(game.is_game_over());
    assert_eq!(game.winner(), GameResult::Tie);
    assert_eq!(game.winner(), game.winner());
    assert_eq!(game.winner().to_string(), "It's a tie!");
    assert_eq!(game.player_score(PlayerColor::Red), 2);
    assert_eq!(game.player_score(PlayerColor::Blue), 2);
}

#[test]
fn test_winner_by_hand_and_grid() {
    // Red's 9 beats Blue's 1 on the middle cell.
    let cards = vec![uniform("r1", 9), uniform("r2", 9), uniform("b1", 1), uniform("b2", 1)];
    let mut game = GameBuilder::new()
        .build(Grid::with_holes(1, 3, &[]).unwrap(), cards)
        .unwrap();

    game.place_card(PlayerColor::Red, &uniform("r1", 9), 0, 0).unwrap();
    game.place_card(PlayerColor::Blue, &uniform("b1", 1), 0, 1).unwrap();
    let report = game.place_card(PlayerColor::Red, &uniform("r2", 9), 0, 2).unwrap();

    assert_eq!(report.flips.as_slice(), &[(0, 1)]);
    assert!(report.game_over);
    assert_eq!(game.winner(), GameResult::Winner(PlayerColor::Red));
    assert_eq!(game.player_score(PlayerColor::Red), 3);
    assert_eq!(game.player_score(PlayerColor::Blue), 1);
}

#[test]
fn test_rejected_moves() {
    let cards = (0..4).map(|i| uniform(&format!("c{i}"), 5)).collect();
    let mut game = GameBuilder::new()
        .build(Grid::with_holes(1, 3, &[(0, 1)]).unwrap(), cards)
        .unwrap();
    let red_card = game.hand(PlayerColor::Red)[0].clone();
    let blue_card = game.hand(PlayerColor::Blue)[0].clone();

    assert_eq!(
        game.place_card(PlayerColor::Red, &red_card, 0, 1),
        Err(MoveError::IllegalCell { row: 0, col: 1 })
    );
    assert_eq!(
        game.place_card(PlayerColor::Red, &red_card, 5, 0),
        Err(MoveError::IllegalCell { row: 5, col: 0 })
    );
    assert_eq!(
        game.place_card(PlayerColor::Red, &blue_card, 0, 0),
        Err(MoveError::CardNotInHand("c1".into()))
    );
    assert_eq!(
        game.place_card(PlayerColor::Blue, &blue_card, 0, 0),
        Err(MoveError::NotYourTurn)
    );

    game.place_card(PlayerColor::Red, &red_card, 0, 0).unwrap();
    assert_eq!(
        game.place_card(PlayerColor::Blue, &blue_card, 0, 0),
        Err(MoveError::IllegalCell { row: 0, col: 0 })
    );
    assert_conserved(&game);
}

#[test]
fn test_placed_card_identity_is_stable() {
    let cards = vec![uniform("r1", 9), uniform("r2", 9), uniform("b1", 1), uniform("b2", 1)];
    let mut game = GameBuilder::new()
        .build(Grid::with_holes(1, 3, &[]).unwrap(), cards)
        .unwrap();

    game.place_card(PlayerColor::Red, &uniform("r1", 9), 0, 0).unwrap();
    game.place_card(PlayerColor::Blue, &uniform("b1", 1), 0, 1).unwrap();
    let before = game.cell(0, 1).unwrap().card().cloned();
    game.place_card(PlayerColor::Red, &uniform("r2", 9), 0, 2).unwrap();

    assert_eq!(game.cell(0, 1).unwrap().card().cloned(), before);
    assert_eq!(game.cell(0, 1).unwrap().owner(), Some(PlayerColor::Red));
}

#[test]
fn test_listeners_see_turns_and_game_over() {
    let (listener, events) = ChannelListener::new();
    let cards = vec![uniform("r1", 9), uniform("b1", 1)];
    let mut game = GameBuilder::new()
        .listener(Box::new(listener))
        .build(Grid::with_holes(1, 3, &[(0, 1), (0, 2)]).unwrap(), cards)
        .unwrap();

    // A rejected move notifies nobody.
    let _ = game.place_card(PlayerColor::Blue, &uniform("b1", 1), 0, 0);
    assert!(events.try_recv().is_err());

    game.place_card(PlayerColor::Red, &uniform("r1", 9), 0, 0).unwrap();

    let received: Vec<_> = events.try_iter().collect();
    assert_eq!(
        received,
        vec![
            StatusEvent::TurnChanged(PlayerColor::Blue),
            StatusEvent::GameOver(GameResult::Tie),
        ]
    );
}

#[test]
fn test_manual_setup_matches_builder() {
    let cards: Vec<Card> = (0..4).map(|i| uniform(&format!("c{i}"), 5)).collect();

    let mut manual = GameEngine::new();
    manual.assign_player(Player::human(PlayerColor::Blue)).unwrap();
    manual.assign_player(Player::human(PlayerColor::Red)).unwrap();
    manual
        .initialize_game(Grid::with_holes(1, 3, &[]).unwrap(), cards.clone())
        .unwrap();
    let built = GameBuilder::new()
        .build(Grid::with_holes(1, 3, &[]).unwrap(), cards)
        .unwrap();

    for color in PlayerColor::ALL {
        assert_eq!(manual.hand(color), built.hand(color));
    }
}

#[test]
fn test_history_records_cascade_order() {
    let cards = vec![
        uniform("spare1", 1),
        uniform("spare2", 1),
        uniform("attacker", 5),
        uniform("far", 2),
        uniform("mid", 4),
        uniform("unused", 1),
    ];
    let mut game = GameBuilder::new()
        .build(Grid::with_holes(1, 5, &[]).unwrap(), cards)
        .unwrap();

    game.place_card(PlayerColor::Red, &uniform("spare1", 1), 0, 4).unwrap();
    game.place_card(PlayerColor::Blue, &uniform("far", 2), 0, 0).unwrap();
    game.place_card(PlayerColor::Red, &uniform("spare2", 1), 0, 3).unwrap();
    game.place_card(PlayerColor::Blue, &uniform("mid", 4), 0, 1).unwrap();
    // 5 beats mid's 4, then mid (now Red) beats far's 2 with its own value.
    let report = game.place_card(PlayerColor::Red, &uniform("attacker", 5), 0, 2).unwrap();

    assert_eq!(report.flips.as_slice(), &[(0, 1), (0, 0)]);
    assert!(report.game_over);

    let history = game.history();
    assert_eq!(history.len(), 5);
    assert_eq!(history[0].player, PlayerColor::Red);
    assert_eq!(history[1].mv.position(), (0, 0));
    assert_eq!(history[4].turn, 5);
    assert_eq!(history[4].flips.as_slice(), &[(0, 1), (0, 0)]);
    assert_eq!(game.winner(), GameResult::Winner(PlayerColor::Red));
    assert_conserved(&game);
}
