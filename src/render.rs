use std::io::Write;

use crossterm::{
    queue,
    style::{Print, PrintStyledContent, Stylize},
};

use crate::puzzle::{Board, Move};

/// Writes `board` as an N×N grid with the blank highlighted.
pub fn draw_board<W: Write>(out: &mut W, board: &Board) -> std::io::Result<()> {
    let width = (board.cells().len() - 1).to_string().len().max(2);
    for row in board.cells().chunks(board.size()) {
        for &val in row {
            if val == 0 {
                let blank = format!("{:>width$}", "·", width = width);
                queue!(
                    out,
                    PrintStyledContent(blank.reverse().bold()),
                    Print(" ")
                )?;
            } else {
                queue!(out, Print(format!("{:>width$} ", val, width = width)))?;
            }
        }
        queue!(out, Print("\n"))?;
    }
    Ok(())
}

/// Prints the start board and the board after every move.
pub fn replay<W: Write>(out: &mut W, start: &Board, moves: &[Move]) -> std::io::Result<()> {
    queue!(out, Print("Initial board:\n"))?;
    draw_board(out, start)?;

    let mut board = start.clone();
    for (step, &dir) in moves.iter().enumerate() {
        board = match board.apply(dir) {
            Some(next) => next,
            None => break,
        };
        queue!(out, Print(format!("\n{}. {}\n", step + 1, dir)))?;
        draw_board(out, &board)?;
    }
    out.flush()
}
