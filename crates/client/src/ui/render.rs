//! Board and status rendering for the terminal.

use goplaygo_shared::{
    Coord, GameView, LocalGameInfo, RemoteGameInfo, RemoteGameState, StoneColor,
};

use crate::infrastructure::messaging::{ConnectionState, ConnectionStatus};

/// Animated trailing dots: one to three, advancing with the tick counter.
pub fn connecting_dots(counter: u64) -> String {
    ".".repeat((counter % 3 + 1) as usize)
}

/// One-line connection status for the header.
pub fn render_status(status: ConnectionStatus, counter: u64) -> String {
    match status.state {
        ConnectionState::Connected => "Connected".to_string(),
        ConnectionState::Connecting => format!("Connecting{}", connecting_dots(counter)),
        ConnectionState::Disconnected => format!(
            "Disconnected, retrying in {}s{}",
            status.backoff_secs,
            connecting_dots(counter)
        ),
    }
}

/// Render the full game view: status line, board, game id footer.
pub fn render_view(view: &GameView, game_id: &str) -> String {
    let headline = match view {
        GameView::Local(info) => local_headline(info),
        GameView::Remote(info) => remote_headline(info),
    };
    format!("{}\n\n{}\nGame ID: {}", headline, render_board(view), game_id)
}

fn local_headline(info: &LocalGameInfo) -> String {
    if info.state.is_game_over() {
        let winner = match info.score_data.winner {
            StoneColor::Black => "Black won",
            StoneColor::White => "White won",
        };
        format!(
            "Game over!\n{} by {} points!",
            winner, info.score_data.point_difference
        )
    } else {
        match info.current_turn_color {
            StoneColor::Black => "Black's turn to play".to_string(),
            StoneColor::White => "White's turn to play".to_string(),
        }
    }
}

fn remote_headline(info: &RemoteGameInfo) -> String {
    if info.awaiting_opponent() && info.state == RemoteGameState::WaitingForOpponent {
        return "Waiting for an opponent to join. Share the game ID below.".to_string();
    }
    if info.state.is_game_over() {
        let mut lines = vec!["Game over!".to_string()];
        if info.state == RemoteGameState::GameOverForfeit {
            lines.push("Opponent left the game.".to_string());
        }
        let winner = if info.score_data.winner == info.player_color {
            "You won"
        } else {
            "Opponent won"
        };
        lines.push(format!(
            "{} by {} points!",
            winner, info.score_data.point_difference
        ));
        lines.join("\n")
    } else if info.player_turn {
        "Your turn!".to_string()
    } else {
        "Waiting for opponent to play...".to_string()
    }
}

/// Star-point positions per board size.
fn hoshi_positions(size: u32) -> &'static [u32] {
    match size {
        9 => &[2, 4, 6],
        13 => &[3, 6, 9],
        19 => &[3, 9, 15],
        _ => &[],
    }
}

/// ASCII board. Black stones are `B`, white `W`, star points `,`, empty
/// intersections `.`; the last-placed stone is lowercased.
fn render_board(view: &GameView) -> String {
    let size = view.size() as usize;
    let spaces = view.spaces();
    let last = view.last_coord();

    let mut grid = vec![vec!['.'; size]; size];
    for &h in hoshi_positions(view.size()) {
        for &v in hoshi_positions(view.size()) {
            grid[v as usize][h as usize] = ',';
        }
    }
    for coord in &spaces.black {
        place(&mut grid, *coord, 'B', last);
    }
    for coord in &spaces.white {
        place(&mut grid, *coord, 'W', last);
    }

    let mut out = String::new();
    out.push_str("   ");
    for x in 0..size {
        out.push_str(&format!("{:>2}", x));
    }
    out.push('\n');
    for (y, row) in grid.iter().enumerate() {
        out.push_str(&format!("{:>2} ", y));
        for cell in row {
            out.push_str(&format!(" {}", cell));
        }
        out.push('\n');
    }
    out
}

fn place(grid: &mut [Vec<char>], coord: Coord, mark: char, last: Coord) {
    let (x, y) = (coord.x as usize, coord.y as usize);
    if y < grid.len() && x < grid[y].len() {
        grid[y][x] = if coord == last {
            mark.to_ascii_lowercase()
        } else {
            mark
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goplaygo_shared::{LocalGameState, ScoreData, Spaces};

    fn remote_info() -> RemoteGameInfo {
        RemoteGameInfo {
            size: 9,
            turn: 4,
            player_turn: false,
            opponent_id: "opp99".to_string(),
            player_color: StoneColor::Black,
            state: RemoteGameState::Playing,
            score_data: ScoreData {
                winner: StoneColor::Black,
                point_difference: 0,
            },
            available_spaces: vec![],
            spaces: Spaces {
                black: vec![Coord::new(2, 2)],
                white: vec![Coord::new(6, 6)],
            },
            last_coord: Coord::new(6, 6),
        }
    }

    #[test]
    fn dots_cycle_one_to_three() {
        assert_eq!(connecting_dots(0), ".");
        assert_eq!(connecting_dots(1), "..");
        assert_eq!(connecting_dots(2), "...");
        assert_eq!(connecting_dots(3), ".");
    }

    #[test]
    fn status_line_shows_backoff() {
        let line = render_status(
            ConnectionStatus {
                state: ConnectionState::Disconnected,
                backoff_secs: 3,
            },
            0,
        );
        assert_eq!(line, "Disconnected, retrying in 3s.");
    }

    #[test]
    fn board_marks_stones_and_lowercases_the_last_move() {
        let view = GameView::Remote(remote_info());
        let board = render_view(&view, "g9");
        assert!(board.contains('B'));
        assert!(board.contains('w'), "last move should be lowercase: {board}");
        assert!(board.contains("Game ID: g9"));
        assert!(board.contains("Waiting for opponent to play..."));
    }

    #[test]
    fn remote_forfeit_shows_the_opponent_left_line() {
        let mut info = remote_info();
        info.state = RemoteGameState::GameOverForfeit;
        info.score_data = ScoreData {
            winner: StoneColor::Black,
            point_difference: 12,
        };
        let text = render_view(&GameView::Remote(info), "g9");
        assert!(text.contains("Game over!"));
        assert!(text.contains("Opponent left the game."));
        assert!(text.contains("You won by 12 points!"));
    }

    #[test]
    fn waiting_room_shows_the_share_prompt() {
        let mut info = remote_info();
        info.state = RemoteGameState::WaitingForOpponent;
        info.opponent_id = goplaygo_shared::NO_OPPONENT.to_string();
        let text = render_view(&GameView::Remote(info), "g9");
        assert!(text.contains("Share the game ID"));
    }

    #[test]
    fn local_game_over_names_the_color() {
        let info = LocalGameInfo {
            size: 9,
            turn: 30,
            current_turn_color: StoneColor::White,
            state: LocalGameState::GameOver,
            score_data: ScoreData {
                winner: StoneColor::White,
                point_difference: 7,
            },
            available_spaces: vec![],
            spaces: Spaces::default(),
            last_coord: Coord::new(0, 0),
        };
        let text = render_view(&GameView::Local(info), "g1");
        assert!(text.contains("White won by 7 points!"));
    }
}
