//! Software scene drawing
//!
//! Turns a `GameState` into a `Canvas` of pixels. Filled quads are painted
//! directly; every outline goes through the midpoint routines in `raster`.
//! The same drawing code feeds both the Bevy texture (RGBA, full size) and the
//! headless terminal map (glyphs, 1/10 scale).

use crate::raster::{self, Point};
use crate::simulation::{
    GameState, CAR_DRAW_HALF_WIDTH, LANE_WIDTH, NUM_LANES, PLAYER_SIZE, REPLAY_BUTTON,
    ROAD_LEFT, ROAD_RIGHT, SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// RGBA8 pixel
pub type Rgba = [u8; 4];

/// Top of the left verge; the strip above it holds the status line
const LEFT_VERGE_TOP: i32 = 470;

/// A fixed-size pixel grid with the origin at the bottom-left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas<P> {
    width: usize,
    height: usize,
    pixels: Vec<P>,
}

impl<P: Copy> Canvas<P> {
    pub fn new(width: usize, height: usize, fill: P) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<P> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set one pixel; points off the canvas are dropped
    pub fn plot(&mut self, x: i32, y: i32, pixel: P) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = pixel;
        }
    }

    pub fn plot_points(&mut self, points: impl IntoIterator<Item = Point>, pixel: P) {
        for (x, y) in points {
            self.plot(x, y, pixel);
        }
    }

    /// Fill the half-open box `[x0, x1) x [y0, y1)`, clipped to the canvas
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, pixel: P) {
        let clip = |lo: i32, hi: i32, len: usize| {
            let len = i32::try_from(len).unwrap_or(i32::MAX);
            (lo.clamp(0, len), hi.clamp(0, len))
        };
        let (x0, x1) = clip(x0, x1, self.width);
        let (y0, y1) = clip(y0, y1, self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                self.plot(x, y, pixel);
            }
        }
    }

    /// Rows from the top of the picture down, as displays expect them
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[P]> {
        self.pixels.chunks(self.width.max(1)).rev()
    }
}

impl Canvas<char> {
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows_top_down() {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

impl Canvas<Rgba> {
    /// Packed RGBA8 bytes, top row first
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.rows_top_down().flatten().flatten().copied().collect()
    }
}

/// Pixel values and resolution for one rendering target
pub trait Palette {
    type Pixel: Copy;

    /// Game pixels per canvas pixel along each axis
    const SCALE: i32;

    fn background(&self) -> Self::Pixel;
    fn left_verge(&self) -> Self::Pixel;
    fn right_verge(&self) -> Self::Pixel;
    fn lane_line(&self) -> Self::Pixel;
    fn player(&self) -> Self::Pixel;
    fn car(&self) -> Self::Pixel;
    fn replay_button(&self) -> Self::Pixel;
}

/// Full-resolution colours for the game window
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorPalette;

impl Palette for ColorPalette {
    type Pixel = Rgba;
    const SCALE: i32 = 1;

    fn background(&self) -> Rgba {
        [0, 0, 0, 255]
    }
    fn left_verge(&self) -> Rgba {
        [0, 255, 255, 255]
    }
    fn right_verge(&self) -> Rgba {
        [255, 0, 255, 255]
    }
    fn lane_line(&self) -> Rgba {
        [255, 255, 255, 255]
    }
    fn player(&self) -> Rgba {
        [255, 0, 0, 255]
    }
    fn car(&self) -> Rgba {
        [230, 230, 204, 255]
    }
    fn replay_button(&self) -> Rgba {
        [0, 255, 0, 255]
    }
}

/// Terminal glyphs, one character per 10x10 block
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphPalette;

impl Palette for GlyphPalette {
    type Pixel = char;
    const SCALE: i32 = 10;

    fn background(&self) -> char {
        ' '
    }
    fn left_verge(&self) -> char {
        '#'
    }
    fn right_verge(&self) -> char {
        '#'
    }
    fn lane_line(&self) -> char {
        '|'
    }
    fn player(&self) -> char {
        'P'
    }
    fn car(&self) -> char {
        'C'
    }
    fn replay_button(&self) -> char {
        '@'
    }
}

fn to_canvas<P: Palette>(v: i32) -> i32 {
    v.div_euclid(P::SCALE)
}

/// Fill a quad given in game pixels
fn fill_quad<P: Palette>(
    canvas: &mut Canvas<P::Pixel>,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    px: P::Pixel,
) {
    // Round the far edge up so small quads never vanish when scaled down.
    let far = |v: i32| (v + P::SCALE - 1).div_euclid(P::SCALE);
    canvas.fill_rect(to_canvas::<P>(x0), to_canvas::<P>(y0), far(x1), far(y1), px);
}

fn stroke_line<P: Palette>(canvas: &mut Canvas<P::Pixel>, from: Point, to: Point, px: P::Pixel) {
    let s = to_canvas::<P>;
    canvas.plot_points(raster::line(s(from.0), s(from.1), s(to.0), s(to.1)), px);
}

/// Draw the whole playfield for `state`
pub fn draw_scene<P: Palette>(palette: &P, state: &GameState) -> Canvas<P::Pixel> {
    let width = (SCREEN_WIDTH / P::SCALE) as usize;
    let height = (SCREEN_HEIGHT / P::SCALE) as usize;
    let mut canvas = Canvas::new(width, height, palette.background());

    fill_quad::<P>(&mut canvas, 0, 0, ROAD_LEFT, LEFT_VERGE_TOP, palette.left_verge());
    fill_quad::<P>(&mut canvas, ROAD_RIGHT, 0, SCREEN_WIDTH, SCREEN_HEIGHT, palette.right_verge());

    for lane in 0..=NUM_LANES {
        let x = ROAD_LEFT + lane as i32 * LANE_WIDTH;
        stroke_line::<P>(&mut canvas, (x, 0), (x, SCREEN_HEIGHT - 1), palette.lane_line());
    }

    let p = state.player.position;
    fill_quad::<P>(&mut canvas, p.x, p.y, p.x + PLAYER_SIZE, p.y + PLAYER_SIZE, palette.player());

    for car in &state.cars {
        let c = car.position;
        fill_quad::<P>(
            &mut canvas,
            c.x - CAR_DRAW_HALF_WIDTH,
            c.y,
            c.x + CAR_DRAW_HALF_WIDTH,
            c.y + car.length,
            palette.car(),
        );
    }

    draw_replay_button(palette, &mut canvas);
    canvas
}

/// Left-pointing arrow inside a ring, filling the replay button region
fn draw_replay_button<P: Palette>(palette: &P, canvas: &mut Canvas<P::Pixel>) {
    let b = REPLAY_BUTTON;
    let px = palette.replay_button();
    let tip = (b.min_x, (b.min_y + b.max_y) / 2);
    let top = (b.max_x, b.max_y);
    let bottom = (b.max_x, b.min_y);

    stroke_line::<P>(canvas, top, bottom, px);
    stroke_line::<P>(canvas, bottom, tip, px);
    stroke_line::<P>(canvas, tip, top, px);

    let s = to_canvas::<P>;
    let radius = (b.max_x - b.min_x) / 2;
    let (cx, cy) = (s((b.min_x + b.max_x) / 2), s((b.min_y + b.max_y) / 2));
    canvas.plot_points(raster::circle(cx, cy, s(radius)), px);
}
