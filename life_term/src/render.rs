use std::io::{self, Write};

use crossterm::cursor::{MoveTo, Show};
use crossterm::queue;
use crossterm::style::{PrintStyledContent, StyledContent};
use life_core::{Painter, Point, StatusReport, Theme};

use crate::configuration::ColorScheme;
use crate::layout::{BoardLayout, StatusLine, STATUS_PANEL_WIDTH};

const CELL_GLYPH: &str = "  ";

/// Draws the board and status panel by queueing crossterm commands on `out`.
/// Nothing reaches the terminal until [Painter::flush].
#[derive(Debug)]
pub struct TermPainter<W: Write> {
    out: W,
    layout: BoardLayout,
    scheme: Option<(Theme, ColorScheme)>,
}

impl<W: Write> TermPainter<W> {
    pub fn new(out: W, layout: BoardLayout) -> Self {
        TermPainter {
            out,
            layout,
            scheme: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn scheme(&mut self, theme: Theme) -> ColorScheme {
        match self.scheme {
            Some((cached, scheme)) if cached == theme => scheme,
            _ => {
                let scheme = ColorScheme::for_theme(theme);
                self.scheme = Some((theme, scheme));
                scheme
            },
        }
    }

    fn draw_panel_border(&mut self, scheme: ColorScheme) -> io::Result<()> {
        let x = self.layout.panel_x();
        let rows = self.layout.rows();
        let inner = "─".repeat(usize::from(STATUS_PANEL_WIDTH - 2));
        let style = scheme.panel_border();
        for y in 0..rows {
            let line = if y == 0 {
                format!("┌{inner}┐")
            } else if y + 1 == rows {
                format!("└{inner}┘")
            } else {
                format!("│{:width$}│", "", width = inner.chars().count())
            };
            queue!(
                self.out,
                MoveTo(x, y),
                PrintStyledContent(StyledContent::new(style, line))
            )?;
        }
        Ok(())
    }
}

fn status_text(line: StatusLine, report: &StatusReport) -> String {
    match line {
        StatusLine::BoardSize => format!(
            "Board Size: [{}, {}]",
            report.board_height, report.board_width
        ),
        StatusLine::CellsAlive => format!("Cells Alive: {}", report.live_cells),
        StatusLine::TicksRemaining => format!("Ticks Remaining: {}", report.ticks_remaining),
        StatusLine::TotalTicks => format!("Total ticks: {}", report.total_ticks),
    }
}

impl<W: Write> Painter for TermPainter<W> {
    fn paint_cell(&mut self, pt: Point, alive: bool, theme: Theme) -> io::Result<()> {
        let scheme = self.scheme(theme);
        let style = if alive {
            scheme.live_cell()
        } else {
            scheme.dead_cell()
        };
        let (col, row) = self.layout.cell_origin(pt);
        queue!(
            self.out,
            MoveTo(col, row),
            PrintStyledContent(StyledContent::new(style, CELL_GLYPH))
        )
    }

    fn refresh_status_panel(&mut self, report: &StatusReport, theme: Theme) -> io::Result<()> {
        let scheme = self.scheme(theme);
        self.draw_panel_border(scheme)?;
        // Leaves the border and one column of padding on each side
        let text_width = usize::from(STATUS_PANEL_WIDTH - 4);
        let col = self.layout.panel_x() + 2;
        let rows = self.layout.rows();
        for line in StatusLine::ALL {
            let row = self.layout.status_row(line);
            if row >= rows {
                continue;
            }
            let text: String = status_text(line, report).chars().take(text_width).collect();
            queue!(
                self.out,
                MoveTo(col, row),
                PrintStyledContent(StyledContent::new(
                    scheme.panel_text(),
                    format!("{text:text_width$}")
                ))
            )?;
        }
        Ok(())
    }

    fn place_cursor(&mut self, pt: Point) -> io::Result<()> {
        let (col, row) = self.layout.cell_origin(pt);
        queue!(self.out, MoveTo(col, row), Show)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::*;

    fn painter() -> TermPainter<Vec<u8>> {
        TermPainter::new(Vec::new(), BoardLayout::fit(80, 24).unwrap())
    }

    fn output(painter: TermPainter<Vec<u8>>) -> String {
        String::from_utf8(painter.into_inner()).unwrap()
    }

    fn theme() -> Theme {
        Theme::new(5).unwrap()
    }

    #[test]
    fn cells_are_two_columns_wide() {
        let mut painter = painter();
        painter.paint_cell((23, 5), true, theme()).unwrap();
        let out = output(painter);
        assert!(out.starts_with("\x1b[6;47H"), "{out:?}");
        assert!(out.contains(CELL_GLYPH));
    }

    #[test]
    fn live_and_dead_cells_differ() {
        let mut live = painter();
        live.paint_cell((0, 0), true, theme()).unwrap();
        let mut dead = painter();
        dead.paint_cell((0, 0), false, theme()).unwrap();
        assert_ne!(output(live), output(dead));
    }

    #[test]
    fn status_panel_shows_counters() {
        let mut painter = painter();
        let report = StatusReport {
            board_width: 24,
            board_height: 22,
            live_cells: 7,
            ticks_remaining: 10,
            total_ticks: 31,
        };
        painter.refresh_status_panel(&report, theme()).unwrap();
        let out = output(painter);
        assert!(out.contains("Board Size: [22, 24]"));
        assert!(out.contains("Cells Alive: 7"));
        assert!(out.contains("Ticks Remaining: 10"));
        assert!(out.contains("Total ticks: 31"));
        assert!(out.contains('┌'));
        assert!(out.contains('┘'));
        // Cells Alive sits on row 11, two columns into the panel
        assert!(out.contains("\x1b[12;52H"), "{out:?}");
    }

    #[test]
    fn short_terminal_skips_lines_that_do_not_fit() {
        let mut painter = TermPainter::new(Vec::new(), BoardLayout::fit(80, 2).unwrap());
        let report = StatusReport {
            board_width: 24,
            board_height: 2,
            live_cells: 0,
            ticks_remaining: 10,
            total_ticks: 0,
        };
        painter.refresh_status_panel(&report, theme()).unwrap();
        let out = output(painter);
        assert!(out.contains("Ticks Remaining: 10"));
        assert!(!out.contains("Total ticks"));
    }

    #[test]
    fn cursor_is_shown_on_its_cell() {
        let mut painter = painter();
        painter.place_cursor((3, 4)).unwrap();
        assert_eq!(output(painter), "\x1b[5;7H\x1b[?25h");
    }
}
