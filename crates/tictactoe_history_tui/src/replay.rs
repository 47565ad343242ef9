//! Headless replay of a move list, for scripting and inspection.

use crate::variant::Variant;
use tictactoe_history::{GameView, HistoryOrder, Position};
use tracing::{info, instrument, warn};

/// A scripted game: plays `moves` in order, then optionally jumps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayRequest {
    /// Architecture to replay on.
    pub variant: Variant,
    /// Display order of the resulting move list.
    pub order: HistoryOrder,
    /// Positions played in order, starting with X.
    pub moves: Vec<Position>,
    /// Step to jump to after all moves were played.
    pub jump: Option<usize>,
}

/// Replays the request and returns the final view.
///
/// Moves the game refuses are skipped with a warning, exactly as the
/// interactive UI ignores them.
#[instrument(skip(request), fields(variant = %request.variant, moves = request.moves.len()))]
pub fn run(request: &ReplayRequest) -> GameView {
    let mut game = request.variant.new_game(request.order);

    for (index, &pos) in request.moves.iter().enumerate() {
        if !game.play(pos) {
            warn!(index, position = %pos, "Move ignored");
        }
    }

    if let Some(step) = request.jump
        && !game.jump_to(step)
    {
        warn!(step, history_len = game.history_len(), "Jump ignored");
    }

    let view = game.view();
    info!(step = view.step, status = %view.status, "Replay finished");
    view
}

/// Plain-text rendering: board, status, then the move list.
pub fn render_text(view: &GameView) -> String {
    let mut out = view.board.display();
    out.push('\n');
    out.push_str(&view.status.to_string());
    out.push('\n');
    for entry in &view.moves {
        let marker = if entry.is_current { "*" } else { " " };
        out.push_str(&format!("{} {}\n", marker, entry));
    }
    out
}

/// Pretty JSON rendering of the whole view.
pub fn render_json(view: &GameView) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}
