//! The input loop. A [Session] owns all simulation state in a [SessionState]
//! and drives it with commands from an [InputSource], reporting every change
//! through a [Painter].

use std::io;

use getset::{CopyGetters, Getters};

use crate::configuration::SessionConfiguration;
use crate::cursor::Cursor;
use crate::prelude::*;
use crate::rule;
use crate::ticks::{Pacer, TickAdjustment, TickScheduler};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Quit,
    Move(Compass),
    /// Flip the cell under the cursor
    Toggle,
    /// Advance the board by the configured number of ticks
    Run,
    /// Kill every cell and reset the total tick counter
    Clear,
    AdjustTicks(TickAdjustment),
    /// Unrecognized input. Still causes a repaint.
    Noop,
}

/// Everything the status panel shows
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StatusReport {
    pub board_width: usize,
    pub board_height: usize,
    pub live_cells: usize,
    pub ticks_remaining: u32,
    pub total_ticks: u64,
}

/// Draws the board. Implementations may buffer output until [Painter::flush].
pub trait Painter {
    /// Draws a live cell or erases a dead one.
    fn paint_cell(&mut self, pt: Point, alive: bool, theme: Theme) -> io::Result<()>;

    fn refresh_status_panel(&mut self, report: &StatusReport, theme: Theme) -> io::Result<()>;

    /// Shows where the cursor is.
    fn place_cursor(&mut self, _pt: Point) -> io::Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Blocking source of user commands
pub trait InputSource {
    fn next_command(&mut self) -> io::Result<Command>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Clone, CopyGetters, Debug, Getters)]
pub struct SessionState {
    #[getset(get = "pub")]
    grid: Grid,
    #[getset(get_copy = "pub")]
    cursor: Cursor,
    #[getset(get = "pub")]
    scheduler: TickScheduler,
    #[getset(get_copy = "pub")]
    theme: Theme,
    #[getset(get_copy = "pub")]
    edge_rule: EdgeRule,
}

impl SessionState {
    pub fn new(
        config: &SessionConfiguration,
        width: usize,
        height: usize,
        theme: Theme,
    ) -> Result<Self> {
        let grid = Grid::new(width, height)?;
        let scheduler = TickScheduler::new(config.default_ticks, config.tick_interval());
        Ok(Self::from_parts(grid, scheduler, theme, config.edge_rule))
    }

    /// Starts a session on an existing board with the cursor in its center.
    pub fn from_parts(
        grid: Grid,
        scheduler: TickScheduler,
        theme: Theme,
        edge_rule: EdgeRule,
    ) -> Self {
        SessionState {
            cursor: Cursor::centered(&grid),
            grid,
            scheduler,
            theme,
            edge_rule,
        }
    }

    pub fn status(&self) -> StatusReport {
        status_report(&self.grid, self.scheduler.remaining(), self.scheduler.total())
    }

    /// Repaints every cell, the status panel and the cursor.
    pub fn repaint<P: Painter + ?Sized>(&self, painter: &mut P) -> Result<()> {
        paint_grid(&self.grid, self.theme, painter)?;
        painter
            .refresh_status_panel(&self.status(), self.theme)
            .map_err(LifeError::Render)?;
        painter
            .place_cursor(self.cursor.position())
            .map_err(LifeError::Render)?;
        painter.flush().map_err(LifeError::Render)
    }

    /// Carries out a single command. Returns [Flow::Quit] only for
    /// [Command::Quit].
    pub fn apply<P, C>(&mut self, command: Command, painter: &mut P, pacer: &mut C) -> Result<Flow>
    where
        P: Painter + ?Sized,
        C: Pacer + ?Sized,
    {
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Move(direction) => {
                if !self.cursor.step(direction, &self.grid) {
                    log::trace!("Cursor can't move {direction:?} from {:?}", self.cursor);
                }
            },
            Command::Toggle => self.toggle_under_cursor(painter)?,
            Command::Run => self.run_ticks(painter, pacer)?,
            Command::Clear => {
                self.grid.clear_all();
                self.scheduler.reset_total();
                log::debug!("Board cleared");
            },
            Command::AdjustTicks(adjustment) => {
                if self.scheduler.adjust(adjustment) {
                    log::debug!("Tick budget is now {}", self.scheduler.configured());
                }
            },
            Command::Noop => {},
        }
        Ok(Flow::Continue)
    }

    fn toggle_under_cursor<P: Painter + ?Sized>(&mut self, painter: &mut P) -> Result<()> {
        let pt = self.cursor.position();
        let alive = self.cursor.toggle(&mut self.grid);
        painter
            .paint_cell(pt, alive, self.theme)
            .map_err(LifeError::Render)?;
        painter
            .refresh_status_panel(&self.status(), self.theme)
            .map_err(LifeError::Render)?;
        painter.flush().map_err(LifeError::Render)
    }

    fn run_ticks<P, C>(&mut self, painter: &mut P, pacer: &mut C) -> Result<()>
    where
        P: Painter + ?Sized,
        C: Pacer + ?Sized,
    {
        let SessionState {
            grid,
            scheduler,
            theme,
            edge_rule,
            ..
        } = self;
        let (theme, edge_rule) = (*theme, *edge_rule);
        let advanced = scheduler.run(pacer, |status| {
            paint_grid(grid, theme, painter)?;
            let changed = rule::step(grid, edge_rule);
            log::trace!("Tick changed {changed} cells");
            paint_grid(grid, theme, painter)?;
            painter
                .refresh_status_panel(
                    &status_report(grid, status.remaining, status.total),
                    theme,
                )
                .map_err(LifeError::Render)?;
            painter.flush().map_err(LifeError::Render)
        })?;
        log::debug!(
            "Advanced {advanced} ticks, {} in total",
            self.scheduler.total()
        );
        Ok(())
    }
}

fn status_report(grid: &Grid, ticks_remaining: u32, total_ticks: u64) -> StatusReport {
    StatusReport {
        board_width: grid.width(),
        board_height: grid.height(),
        live_cells: grid.count_live(),
        ticks_remaining,
        total_ticks,
    }
}

fn paint_grid<P: Painter + ?Sized>(grid: &Grid, theme: Theme, painter: &mut P) -> Result<()> {
    for (pt, alive) in grid.cells() {
        painter
            .paint_cell(pt, alive, theme)
            .map_err(LifeError::Render)?;
    }
    Ok(())
}

/// A running session. Reads one command at a time until it is told to quit.
#[derive(Debug)]
pub struct Session<I, P, C> {
    state: SessionState,
    input: I,
    painter: P,
    pacer: C,
}

impl<I: InputSource, P: Painter, C: Pacer> Session<I, P, C> {
    pub fn new(state: SessionState, input: I, painter: P, pacer: C) -> Self {
        Session {
            state,
            input,
            painter,
            pacer,
        }
    }

    /// Runs until [Command::Quit], repainting everything after each command.
    pub fn run(&mut self) -> Result<()> {
        self.state.repaint(&mut self.painter)?;
        loop {
            let command = self.input.next_command().map_err(LifeError::Input)?;
            log::trace!("Command {command:?}");
            match self
                .state
                .apply(command, &mut self.painter, &mut self.pacer)?
            {
                Flow::Quit => break,
                Flow::Continue => self.state.repaint(&mut self.painter)?,
            }
        }
        log::info!("Session over after {} ticks", self.state.scheduler.total());
        Ok(())
    }
}
