//! Strategy decisions against scripted views.
//!
//! `ScriptedView` answers legality and flip queries from tables and records
//! every `is_legal_move` probe, so tests can check both the chosen move and
//! which cells were inspected.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use im::Vector;
use three_trios::cards::{Card, Value};
use three_trios::core::{Player, PlayerColor, TurnDecision};
use three_trios::grid::{Cell, Grid};
use three_trios::rules::{GameBuilder, GameResult, GameView};
use three_trios::strategy::{CornerStrategy, FlipMaxStrategy, MoveStrategy, Strategy};

struct ScriptedView {
    rows: usize,
    cols: usize,
    hand: Vector<Card>,
    legal: HashSet<(usize, usize)>,
    flips: HashMap<(String, usize, usize), usize>,
    probes: RefCell<Vec<(usize, usize)>>,
}

impl ScriptedView {
    fn new(rows: usize, cols: usize, hand: &[&str]) -> Self {
        Self {
            rows,
            cols,
            hand: hand.iter().map(|name| card(name)).collect(),
            legal: HashSet::new(),
            flips: HashMap::new(),
            probes: RefCell::new(Vec::new()),
        }
    }

    fn legal(mut self, cells: &[(usize, usize)]) -> Self {
        self.legal.extend(cells.iter().copied());
        self
    }

    fn flips(mut self, name: &str, row: usize, col: usize, count: usize) -> Self {
        self.flips.insert((name.to_string(), row, col), count);
        self
    }

    fn probes(&self) -> Vec<(usize, usize)> {
        self.probes.borrow().clone()
    }
}

impl GameView for ScriptedView {
    fn current_player(&self) -> PlayerColor {
        PlayerColor::Red
    }

    fn grid_rows(&self) -> usize {
        self.rows
    }

    fn grid_cols(&self) -> usize {
        self.cols
    }

    fn cell(&self, _row: usize, _col: usize) -> Option<&Cell> {
        None
    }

    fn hand(&self, player: PlayerColor) -> Vector<Card> {
        match player {
            PlayerColor::Red => self.hand.clone(),
            PlayerColor::Blue => Vector::new(),
        }
    }

    fn is_legal_move(&self, _player: PlayerColor, row: usize, col: usize) -> bool {
        self.probes.borrow_mut().push((row, col));
        self.legal.contains(&(row, col))
    }

    fn potential_flips(&self, _player: PlayerColor, card: &Card, row: usize, col: usize) -> usize {
        self.flips
            .get(&(card.name.clone(), row, col))
            .copied()
            .unwrap_or(0)
    }

    fn player_score(&self, _player: PlayerColor) -> usize {
        0
    }

    fn is_game_over(&self) -> bool {
        false
    }

    fn winner(&self) -> GameResult {
        GameResult::NotOver
    }
}

fn card(name: &str) -> Card {
    Card::new(name, Value::Three, Value::Three, Value::Three, Value::Three)
}

#[test]
fn test_flip_max_equal_cells_pick_row_major_minimum() {
    let view = ScriptedView::new(2, 2, &["a", "b"])
        .legal(&[(0, 0), (1, 0), (1, 1)])
        .flips("a", 0, 0, 1)
        .flips("a", 1, 0, 1);

    let mv = FlipMaxStrategy.choose_move(&view, PlayerColor::Red).unwrap();

    assert_eq!(mv.position(), (0, 0));
    assert_eq!(mv.card.name, "a");
}

#[test]
fn test_flip_max_ignores_discovery_order() {
    // Card "a" is seen first and scores at (1, 0); card "b" scores equally at
    // (0, 0). Position wins over hand index.
    let view = ScriptedView::new(2, 1, &["a", "b"])
        .legal(&[(0, 0), (1, 0)])
        .flips("a", 1, 0, 2)
        .flips("b", 0, 0, 2);

    let mv = FlipMaxStrategy.choose_move(&view, PlayerColor::Red).unwrap();

    assert_eq!(mv.position(), (0, 0));
    assert_eq!(mv.card.name, "b");
}

#[test]
fn test_flip_max_same_cell_prefers_lower_hand_index() {
    let view = ScriptedView::new(1, 3, &["a", "b", "c"])
        .legal(&[(0, 2)])
        .flips("b", 0, 2, 1)
        .flips("c", 0, 2, 1);

    let mv = FlipMaxStrategy.choose_move(&view, PlayerColor::Red).unwrap();

    assert_eq!(mv.card.name, "b");
}

#[test]
fn test_flip_max_zero_flips_still_moves() {
    let view = ScriptedView::new(2, 2, &["a"]).legal(&[(1, 1)]);

    let mv = FlipMaxStrategy.choose_move(&view, PlayerColor::Red).unwrap();

    assert_eq!(mv.position(), (1, 1));
}

#[test]
fn test_flip_max_probes_every_cell_for_every_card() {
    let view = ScriptedView::new(2, 2, &["a", "b"]).legal(&[(0, 0)]);

    FlipMaxStrategy.choose_move(&view, PlayerColor::Red);

    let cells = vec![(0, 0), (0, 1), (1, 0), (1, 1)];
    let expected: Vec<_> = cells.iter().chain(cells.iter()).copied().collect();
    assert_eq!(view.probes(), expected);
}

#[test]
fn test_flip_max_none_without_hand_or_cells() {
    let empty_hand = ScriptedView::new(2, 2, &[]).legal(&[(0, 0)]);
    assert!(FlipMaxStrategy.choose_move(&empty_hand, PlayerColor::Red).is_none());

    let full = ScriptedView::new(2, 2, &["a"]);
    assert!(FlipMaxStrategy.choose_move(&full, PlayerColor::Red).is_none());
}

#[test]
fn test_corner_skips_taken_corners() {
    let view = ScriptedView::new(3, 3, &["first", "second"]).legal(&[(2, 0), (2, 2), (1, 1)]);

    let mv = CornerStrategy.choose_move(&view, PlayerColor::Red).unwrap();

    assert_eq!(mv.position(), (2, 0));
    assert_eq!(mv.card.name, "first");
}

#[test]
fn test_corner_probes_all_corners_in_order() {
    let view = ScriptedView::new(3, 3, &["a"]).legal(&[(0, 0), (0, 2), (2, 0), (2, 2)]);

    let mv = CornerStrategy.choose_move(&view, PlayerColor::Red).unwrap();

    assert_eq!(mv.position(), (0, 0));
    assert_eq!(view.probes(), vec![(0, 0), (0, 2), (2, 0), (2, 2)]);
}

#[test]
fn test_corner_is_flip_agnostic() {
    let view = ScriptedView::new(3, 3, &["a"])
        .legal(&[(0, 2), (2, 2), (1, 1)])
        .flips("a", 2, 2, 4)
        .flips("a", 1, 1, 4);

    let mv = CornerStrategy.choose_move(&view, PlayerColor::Red).unwrap();

    assert_eq!(mv.position(), (0, 2));
}

#[test]
fn test_corner_none_when_no_corner_free() {
    let view = ScriptedView::new(3, 3, &["a"]).legal(&[(0, 1), (1, 1)]);

    assert!(CornerStrategy.choose_move(&view, PlayerColor::Red).is_none());
    assert_eq!(view.probes().len(), 4);
}

#[test]
fn test_legal_move_probe_has_no_side_effects() {
    let view = ScriptedView::new(2, 2, &["a"]).legal(&[(0, 1)]);

    let first = CornerStrategy.choose_move(&view, PlayerColor::Red);
    let second = CornerStrategy.choose_move(&view, PlayerColor::Red);

    assert_eq!(first, second);
    assert_eq!(view.probes().len(), 8);
}

#[test]
fn test_ai_player_turn_decision() {
    let view = ScriptedView::new(1, 3, &["a"]).legal(&[(0, 1)]);

    let ai = Player::ai(PlayerColor::Red, Strategy::FlipMax);
    let human = Player::human(PlayerColor::Red);
    let stuck = Player::ai(PlayerColor::Red, Strategy::Corner);

    match ai.take_turn(&view) {
        TurnDecision::Play(mv) => assert_eq!(mv.position(), (0, 1)),
        other => panic!("expected a move, got {other:?}"),
    }
    assert_eq!(human.take_turn(&view), TurnDecision::AwaitInput);
    assert_eq!(stuck.take_turn(&view), TurnDecision::NoMove);
}

#[test]
fn test_corner_against_real_engine() {
    // Blue holds the top corners; Red should go bottom-left.
    let cards = (0..10).map(|i| card(&format!("c{i}"))).collect();
    let mut game = GameBuilder::new()
        .build(Grid::with_holes(3, 3, &[]).unwrap(), cards)
        .unwrap();

    game.place_card(PlayerColor::Red, &card("c0"), 1, 1).unwrap();
    game.place_card(PlayerColor::Blue, &card("c5"), 0, 0).unwrap();
    game.place_card(PlayerColor::Red, &card("c1"), 1, 0).unwrap();
    game.place_card(PlayerColor::Blue, &card("c6"), 0, 2).unwrap();

    let mv = CornerStrategy.choose_move(&game, PlayerColor::Red).unwrap();

    assert_eq!(mv.position(), (2, 0));
    assert_eq!(mv.card, game.hand(PlayerColor::Red)[0]);
}
