use crate::config::RenderConfig;
use crate::game::{Board, Cell, Player};

/// Render the board top row first, one line per row, each cell followed by
/// the separator.
pub fn render_board(board: &Board, symbols: &RenderConfig) -> String {
    let mut out = String::new();

    for row in 0..board.height() {
        for col in 0..board.width() {
            let symbol = match board.get(row, col) {
                Cell::Empty => &symbols.empty,
                Cell::Taken { owner: Player::One, .. } => &symbols.player_one,
                Cell::Taken { owner: Player::Two, .. } => &symbols.player_two,
            };
            out.push_str(symbol);
            out.push_str(&symbols.separator);
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Game, GameSpec};

    #[test]
    fn test_render_empty_board() {
        let board = Board::new(2, 2);
        assert_eq!(render_board(&board, &RenderConfig::default()), "  |   | \n  |   | \n");
    }

    #[test]
    fn test_render_after_moves() {
        let mut game = Game::new(GameSpec::new(3, 2, 2).unwrap()).unwrap();
        game.drop(0).unwrap();
        game.drop(2).unwrap();
        game.drop(2).unwrap();

        let rendered = render_board(game.board(), &RenderConfig::default());
        assert_eq!(rendered, "  |   | x| \nx|   | o| \n");
    }

    #[test]
    fn test_render_custom_symbols() {
        let mut game = Game::new(GameSpec::new(2, 1, 2).unwrap()).unwrap();
        game.drop(1).unwrap();
        let symbols = RenderConfig {
            player_one: "R".into(),
            player_two: "Y".into(),
            empty: ".".into(),
            separator: String::new(),
        };
        assert_eq!(render_board(game.board(), &symbols), ".R\n");
    }
}
