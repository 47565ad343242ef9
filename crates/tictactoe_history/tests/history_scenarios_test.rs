//! Scenario tests run against both game variants through `GameModel`.

use tictactoe_history::{
    GameModel, HistoryOrder, LocalGame, Player, Position, Status, Store, StoreState,
};

fn variants() -> Vec<(&'static str, Box<dyn GameModel>)> {
    vec![
        (
            "local",
            Box::new(LocalGame::new(HistoryOrder::Ascending)) as Box<dyn GameModel>,
        ),
        (
            "store",
            Box::new(Store::new(StoreState::new(HistoryOrder::Ascending))) as Box<dyn GameModel>,
        ),
    ]
}

fn play_indices(game: &mut dyn GameModel, indices: &[usize]) {
    for index in indices {
        game.play(Position::from_index(*index).expect("valid cell"));
    }
}

#[test]
fn test_top_row_win() {
    for (name, mut game) in variants() {
        play_indices(game.as_mut(), &[0, 3, 1, 4, 2]);

        let info = game.winner_info();
        assert_eq!(game.step(), 5, "{name}");
        assert_eq!(info.winner, Some(Player::X), "{name}");
        assert_eq!(
            info.line,
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight]),
            "{name}"
        );
        assert_eq!(game.status().to_string(), "Winner: X", "{name}");
    }
}

#[test]
fn test_sequence_without_line_has_no_winner() {
    // X: 0, 1, 7 and O: 4, 2 share no line.
    for (name, mut game) in variants() {
        play_indices(game.as_mut(), &[0, 4, 1, 2, 7]);
        assert_eq!(game.winner_info().winner, None, "{name}");
        assert_eq!(game.status(), Status::NextPlayer(Player::O), "{name}");
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    for (name, mut game) in variants() {
        play_indices(game.as_mut(), &[0, 1, 2, 3, 5, 4, 6, 8, 7]);
        assert_eq!(game.step(), 9, "{name}");
        assert_eq!(game.status().to_string(), "Draw", "{name}");
    }
}

#[test]
fn test_step_and_length_track_accepted_plays() {
    for (name, mut game) in variants() {
        let indices = [4, 0, 8, 2];
        for (n, index) in indices.iter().enumerate() {
            assert!(game.play(Position::from_index(*index).unwrap()), "{name}");
            assert_eq!(game.step(), n + 1, "{name}");
            assert_eq!(game.history_len(), n + 2, "{name}");
        }
    }
}

#[test]
fn test_occupied_square_is_no_op() {
    for (name, mut game) in variants() {
        play_indices(game.as_mut(), &[4]);
        let before = game.view();
        assert!(!game.play(Position::Center), "{name}");
        assert_eq!(game.view(), before, "{name}");
    }
}

#[test]
fn test_play_after_win_is_no_op() {
    for (name, mut game) in variants() {
        play_indices(game.as_mut(), &[0, 3, 1, 4, 2]);
        let before = game.view();
        assert!(!game.play(Position::BottomRight), "{name}");
        assert_eq!(game.view(), before, "{name}");
    }
}

#[test]
fn test_jump_then_play_prunes_later_moves() {
    for (name, mut game) in variants() {
        play_indices(game.as_mut(), &[4, 0, 8, 2]);
        assert!(game.jump_to(2), "{name}");
        assert_eq!(game.next_player(), Player::X, "{name}");
        assert_eq!(game.history_len(), 5, "{name}");

        assert!(game.play(Position::BottomLeft), "{name}");
        assert_eq!(game.step(), 3, "{name}");
        assert_eq!(game.history_len(), 4, "{name}");
        assert_eq!(game.played_at(3), Some(Position::BottomLeft), "{name}");
        assert!(game.board().is_empty(Position::BottomRight), "{name}");
    }
}

#[test]
fn test_jump_back_to_winning_step_and_forward() {
    for (name, mut game) in variants() {
        play_indices(game.as_mut(), &[0, 3, 1, 4, 2]);
        assert!(game.jump_to(4), "{name}");
        assert_eq!(game.status().to_string(), "Next player: X", "{name}");
        assert!(game.jump_to(5), "{name}");
        assert_eq!(game.status().to_string(), "Winner: X", "{name}");
    }
}

#[test]
fn test_out_of_range_jump_is_rejected() {
    for (name, mut game) in variants() {
        play_indices(game.as_mut(), &[4, 0]);
        let before = game.view();
        assert!(!game.jump_to(3), "{name}");
        assert!(!game.jump_to(usize::MAX), "{name}");
        assert_eq!(game.view(), before, "{name}");
    }
}

#[test]
fn test_toggle_twice_restores_order() {
    for (name, mut game) in variants() {
        play_indices(game.as_mut(), &[4, 0]);
        let before = game.view();
        assert!(game.toggle_order(), "{name}");
        assert_eq!(game.order(), HistoryOrder::Descending, "{name}");
        assert_eq!(game.board(), before.board, "{name}");
        assert!(game.toggle_order(), "{name}");
        assert_eq!(game.view(), before, "{name}");
    }
}

#[test]
fn test_move_list_follows_order_and_marks_current() {
    for (name, mut game) in variants() {
        play_indices(game.as_mut(), &[4, 0, 8]);
        game.jump_to(1);

        let labels: Vec<_> = game.moves().iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec!["Go to game start", "Go to move #1", "Go to move #2", "Go to move #3"],
            "{name}"
        );

        game.toggle_order();
        let moves = game.moves();
        let steps: Vec<_> = moves.iter().map(|m| m.step).collect();
        assert_eq!(steps, vec![3, 2, 1, 0], "{name}");
        let current: Vec<_> = moves.iter().filter(|m| m.is_current).map(|m| m.step).collect();
        assert_eq!(current, vec![1], "{name}");
        assert_eq!(moves[0].location(), "col: 3 row: 3", "{name}");
    }
}
