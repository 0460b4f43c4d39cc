//! BoardView: draws a `GameSnapshot` into a [`Canvas`].
//!
//! Pure layout code with no terminal I/O, so it can be unit-tested.

use crate::canvas::{Canvas, Rgb, Style};
use crate::core::{GameSnapshot, Piece};
use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(24, 28, 38);
const GRID_FG: Rgb = Rgb::new(52, 73, 94);
const FRAME_FG: Rgb = Rgb::new(200, 200, 200);
const TEXT_FG: Rgb = Rgb::new(220, 220, 220);
const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Controls listed under the side panel.
const HELP: [&str; 5] = [
    "<- -> move  ^ rotate",
    "v soft  space drop",
    "p pause  r restart",
    "1/2/3 difficulty",
    "q quit",
];

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Lays out the well, the side panel and overlays.
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    /// Terminal columns per board cell; 2 keeps cells roughly square.
    cell_w: u16,
    show_help: bool,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            show_help: true,
        }
    }
}

impl BoardView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Total width of the well including its frame.
    pub fn frame_width(&self) -> u16 {
        BOARD_WIDTH as u16 * self.cell_w + 2
    }

    pub fn frame_height(&self) -> u16 {
        BOARD_HEIGHT as u16 + 2
    }

    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, canvas: &mut Canvas) {
        canvas.reset(viewport.width, viewport.height);

        let frame_w = self.frame_width();
        let frame_h = self.frame_height();
        let panel_w = 22;
        let origin_x = viewport.width.saturating_sub(frame_w + panel_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_frame(canvas, origin_x, origin_y);
        self.draw_board(canvas, snap, origin_x, origin_y);

        // The falling piece is hidden while paused, as is its ghost.
        if !snap.paused {
            let ghost = Piece {
                y: snap.ghost_y,
                ..snap.current
            };
            self.draw_piece(canvas, &ghost, origin_x, origin_y, true);
            self.draw_piece(canvas, &snap.current, origin_x, origin_y, false);
        }

        self.draw_panel(canvas, snap, origin_x + frame_w + 2, origin_y);

        if snap.game_over {
            self.draw_overlay(canvas, origin_x, origin_y, &["GAME OVER", "space: restart"]);
        } else if snap.paused {
            self.draw_overlay(canvas, origin_x, origin_y, &["PAUSED", "p: resume"]);
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> Canvas {
        let mut canvas = Canvas::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut canvas);
        canvas
    }

    fn draw_frame(&self, canvas: &mut Canvas, x: u16, y: u16) {
        let style = Style::new(FRAME_FG, BLACK);
        let (w, h) = (self.frame_width(), self.frame_height());
        for dx in 1..w - 1 {
            canvas.put(x + dx, y, '─', style);
            canvas.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            canvas.put(x, y + dy, '│', style);
            canvas.put(x + w - 1, y + dy, '│', style);
        }
        canvas.put(x, y, '┌', style);
        canvas.put(x + w - 1, y, '┐', style);
        canvas.put(x, y + h - 1, '└', style);
        canvas.put(x + w - 1, y + h - 1, '┘', style);
    }

    fn draw_board(&self, canvas: &mut Canvas, snap: &GameSnapshot, ox: u16, oy: u16) {
        let empty = Style::new(GRID_FG, WELL_BG);
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                let (ch, style) = match Color::from_code(code) {
                    Some(color) => ('█', block_style(color)),
                    None => ('·', empty),
                };
                self.fill_cell(canvas, ox, oy, x as i8, y as i8, ch, style);
            }
        }
    }

    fn draw_piece(&self, canvas: &mut Canvas, piece: &Piece, ox: u16, oy: u16, ghost: bool) {
        let style = if ghost {
            let fg = rgb(piece.color).mix(WELL_BG, 150);
            Style::new(fg, WELL_BG)
        } else {
            block_style(piece.color)
        };
        let ch = if ghost { '░' } else { '█' };
        for (x, y) in piece.cells() {
            self.fill_cell(canvas, ox, oy, x, y, ch, style);
        }
    }

    /// Paint one board cell; cells outside the well (above the top) are skipped.
    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        canvas: &mut Canvas,
        ox: u16,
        oy: u16,
        x: i8,
        y: i8,
        ch: char,
        style: Style,
    ) {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = ox + 1 + x as u16 * self.cell_w;
        let py = oy + 1 + y as u16;
        canvas.fill(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_panel(&self, canvas: &mut Canvas, snap: &GameSnapshot, x: u16, y: u16) {
        let label = Style::new(TEXT_FG, BLACK).bold();
        let value = Style::new(TEXT_FG, BLACK);

        let rows: [(&str, String); 5] = [
            ("SCORE", snap.score.to_string()),
            ("LINES", snap.lines.to_string()),
            ("TIME", format_clock(snap.elapsed_secs())),
            ("SPEED", format!("x{}", format_speed(snap.speed_multiplier))),
            ("DIFFICULTY", snap.difficulty.as_str().to_string()),
        ];

        let mut cy = y;
        for (name, text) in rows.iter() {
            canvas.put_str(x, cy, name, label);
            canvas.put_str(x, cy + 1, text, value);
            cy += 3;
        }

        canvas.put_str(x, cy, "NEXT", label);
        cy += 1;
        let next = snap.next.shape;
        let style = block_style(snap.next.color);
        for my in 0..next.height() as u16 {
            for mx in 0..next.width() as u16 {
                if next.is_filled(mx as usize, my as usize) {
                    canvas.fill(x + mx * self.cell_w, cy + my, self.cell_w, 1, '█', style);
                }
            }
        }
        cy += 3;

        if self.show_help {
            let hint = Style::new(GRID_FG.mix(TEXT_FG, 120), BLACK);
            for line in HELP {
                canvas.put_str(x, cy, line, hint);
                cy += 1;
            }
        }
    }

    fn draw_overlay(&self, canvas: &mut Canvas, ox: u16, oy: u16, lines: &[&str]) {
        let style = Style::new(Rgb::new(255, 255, 255), BLACK).bold();
        let mid = oy + self.frame_height() / 2;
        for (i, line) in lines.iter().enumerate() {
            let w = line.chars().count() as u16;
            let x = ox + self.frame_width().saturating_sub(w) / 2;
            canvas.put_str(x, mid + i as u16, line, style);
        }
    }
}

fn rgb(color: Color) -> Rgb {
    let (r, g, b) = color.rgb();
    Rgb::new(r, g, b)
}

fn block_style(color: Color) -> Style {
    Style::new(rgb(color), WELL_BG)
}

/// Play time as `mm:ss`.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Speed multiplier with one decimal.
pub fn format_speed(multiplier: f64) -> String {
    format!("{:.1}", multiplier)
}
