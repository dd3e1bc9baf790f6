//! Tests for the game controller state machine.

use oxo::{Board, Difficulty, Game, Mark, Minimax, Outcome, Phase, Square, Strategy};

fn board(cells: &[(usize, Mark)]) -> Board {
    let mut board = Board::new();
    for &(index, mark) in cells {
        board.place(index, mark);
    }
    board
}

#[test]
fn new_game_awaits_the_human_on_an_empty_board() {
    let game = Game::new(Difficulty::Medium);
    assert_eq!(game.phase(), Phase::AwaitingHuman);
    assert_eq!(game.difficulty(), Difficulty::Medium);
    assert_eq!(game.board().empties().count(), 9);
    assert_eq!(game.to_move(), Some(Mark::X));
}

#[test]
fn computer_answers_within_the_same_call() {
    let mut game = Game::new(Difficulty::Hard);
    assert!(game.submit_human_move(4));

    // The human's mark landed and the computer replied elsewhere.
    assert_eq!(game.board().get(4), Square::Occupied(Mark::X));
    assert_eq!(game.board().count(Mark::X), 1);
    assert_eq!(game.board().count(Mark::O), 1);
    assert_eq!(game.outcome(), Outcome::Ongoing);
    assert_eq!(game.phase(), Phase::AwaitingHuman);
}

#[test]
fn occupied_cells_are_rejected_without_side_effects() {
    let mut game = Game::seeded(Difficulty::Easy, 9);
    assert!(game.submit_human_move(4));

    let before = game.board().clone();
    assert!(!game.submit_human_move(4));
    assert_eq!(game.board(), &before);
    assert_eq!(game.phase(), Phase::AwaitingHuman);
}

#[test]
fn out_of_range_indices_are_rejected() {
    let mut game = Game::new(Difficulty::Easy);
    assert!(!game.submit_human_move(9));
    assert!(!game.submit_human_move(100));
    assert_eq!(game.board().empties().count(), 9);
}

#[test]
fn human_win_ends_the_game_before_any_computer_reply() {
    let position = board(&[(0, Mark::X), (1, Mark::X), (3, Mark::O), (4, Mark::O)]);
    let mut game = Game::from_board(position, Difficulty::Easy);
    assert_eq!(game.phase(), Phase::AwaitingHuman);

    assert!(game.submit_human_move(2));
    assert_eq!(game.phase(), Phase::Over(Outcome::Win(Mark::X)));
    // No O move was attempted after the terminal transition.
    assert_eq!(game.board().count(Mark::O), 2);
}

#[test]
fn finished_games_ignore_further_moves() {
    let position = board(&[(0, Mark::X), (1, Mark::X), (3, Mark::O), (4, Mark::O)]);
    let mut game = Game::from_board(position, Difficulty::Easy);
    assert!(game.submit_human_move(2));

    let before = game.board().clone();
    assert!(!game.submit_human_move(5));
    assert!(!game.submit_human_move(8));
    assert_eq!(game.board(), &before);
    assert_eq!(game.phase(), Phase::Over(Outcome::Win(Mark::X)));
}

#[test]
fn from_board_recognizes_a_terminal_position() {
    let position = board(&[
        (0, Mark::X),
        (1, Mark::X),
        (2, Mark::X),
        (3, Mark::O),
        (4, Mark::O),
    ]);
    let game = Game::from_board(position, Difficulty::Hard);
    assert_eq!(game.phase(), Phase::Over(Outcome::Win(Mark::X)));
    assert_eq!(game.to_move(), None);
}

#[test]
fn from_board_plays_the_owed_computer_reply() {
    // X has moved once more than O, so the computer answers immediately.
    // Against a corner opening the search holds the draw with the center.
    let position = board(&[(0, Mark::X)]);
    let game = Game::from_board(position, Difficulty::Hard);
    assert_eq!(game.board().get(4), Square::Occupied(Mark::O));
    assert_eq!(game.phase(), Phase::AwaitingHuman);
}

#[test]
fn reset_clears_the_board_and_keeps_the_difficulty() {
    let mut game = Game::seeded(Difficulty::Hard, 5);
    assert!(game.submit_human_move(4));
    assert!(game.board().empties().count() < 9);

    game.reset();
    assert_eq!(game.phase(), Phase::AwaitingHuman);
    assert_eq!(game.difficulty(), Difficulty::Hard);
    assert_eq!(game.board().empties().count(), 9);

    // The cleared board accepts the same opening again.
    assert!(game.submit_human_move(4));
}

#[test]
fn difficulty_switches_mid_game_and_takes_effect_next_move() {
    let mut game = Game::seeded(Difficulty::Easy, 13);
    assert!(game.submit_human_move(0));
    assert_eq!(game.difficulty(), Difficulty::Easy);

    game.set_difficulty(Difficulty::Hard);
    assert_eq!(game.difficulty(), Difficulty::Hard);
    // Switching triggers no move on its own.
    assert_eq!(game.board().count(Mark::O), 1);

    let target = game
        .board()
        .empties()
        .next()
        .expect("open cells remain after two plies");
    assert!(game.submit_human_move(target));
    assert_eq!(game.board().count(Mark::O), 2);
}

#[test]
fn optimal_human_against_hard_computer_draws() {
    let mut game = Game::new(Difficulty::Hard);
    let mut advisor = Minimax;

    while game.phase() == Phase::AwaitingHuman {
        let choice = advisor
            .select_move(game.board(), Mark::X)
            .expect("open game offers a move");
        assert!(game.submit_human_move(choice));
    }

    assert_eq!(game.phase(), Phase::Over(Outcome::Draw));
}

#[test]
fn random_human_against_hard_computer_never_wins() {
    for seed in 0..5 {
        let mut game = Game::new(Difficulty::Hard);
        let mut human = oxo::Random::with_seed(seed);

        while game.phase() == Phase::AwaitingHuman {
            let choice = human
                .select_move(game.board(), Mark::X)
                .expect("open game offers a move");
            assert!(game.submit_human_move(choice));
        }

        assert_ne!(game.phase(), Phase::Over(Outcome::Win(Mark::X)), "seed {seed}");
    }
}

#[test]
fn snapshot_reflects_the_running_game() {
    let mut game = Game::seeded(Difficulty::Medium, 21);
    assert!(game.submit_human_move(4));

    let snapshot = game.snapshot();
    assert_eq!(snapshot.difficulty, Difficulty::Medium);
    assert_eq!(snapshot.phase, Phase::AwaitingHuman);
    assert_eq!(snapshot.to_move, Some(Mark::X));
    assert_eq!(snapshot.board.get(4), Square::Occupied(Mark::X));
}
