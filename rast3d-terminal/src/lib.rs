//! Terminal frontend: a crossterm surface plus the animation driver.
//!
//! The core pipeline makes no scheduling assumptions; this crate owns the
//! cadence and calls one full render pass per frame.

use std::io::{stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, terminal,
};
use rast3d_core::{Color, DepthFade, Mesh, RenderContext, Surface, Transform, Wireframe};
use tracing::info;

pub mod surface;

pub use surface::TermSurface;

const FRAME_TIME: Duration = Duration::from_millis(16);
const ANGLE_STEP: f32 = 0.01;

/// Which pipeline variant a frame uses. The two are never mixed within one
/// frame: the wireframe path has no depth buffer to reconcile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Filled,
    Wireframe,
}

/// Animation driver: advances an angle at a fixed cadence and runs one full
/// pipeline pass per frame.
///
/// Controls: space pauses, `m` switches filled/wireframe, `q`/Esc quits.
pub struct App {
    context: RenderContext,
    surface: TermSurface,
    tetrahedron: Mesh,
    cube: Mesh,
    wire_tetrahedron: Wireframe,
    wire_cube: Wireframe,
    angle: f32,
    animating: bool,
    mode: Mode,
    running: bool,
}

impl App {
    pub fn new() -> Result<Self> {
        let (columns, rows) = terminal::size()?;
        let surface = TermSurface::new(columns, rows);
        let context = RenderContext::new(surface.width(), surface.height());
        Ok(Self {
            context,
            surface,
            tetrahedron: Mesh::tetrahedron(),
            cube: Mesh::cube(2.0),
            wire_tetrahedron: Wireframe::tetrahedron(),
            wire_cube: Wireframe::cube(2.0),
            angle: 0.0,
            animating: true,
            mode: Mode::Filled,
            running: true,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> Result<()> {
        info!("starting animation loop");
        while self.running {
            let frame_start = Instant::now();

            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            if self.animating {
                self.angle += ANGLE_STEP;
            }

            self.render_frame()?;

            let elapsed = frame_start.elapsed();
            if elapsed < FRAME_TIME {
                std::thread::sleep(FRAME_TIME - elapsed);
            }
        }
        Ok(())
    }

    fn handle_input(&mut self) -> Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                KeyCode::Char(' ') => self.animating = !self.animating,
                KeyCode::Char('m') => {
                    self.mode = match self.mode {
                        Mode::Filled => Mode::Wireframe,
                        Mode::Wireframe => Mode::Filled,
                    };
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn render_frame(&mut self) -> Result<()> {
        self.surface.clear(Color::BLACK);
        self.context.begin_frame();

        // One tetrahedron spinning in front of the camera, its mirror image
        // through the origin, and a cube tumbling further out.
        let tetra = Transform::identity()
            .translate(0.0, 0.0, 5.0)
            .rotate(self.angle, 1.0, 0.0, 0.0)
            .rotate(self.angle, 0.0, 1.0, 0.0);
        let mirrored = tetra.scale(-1.0, -1.0, -1.0);
        let cube = Transform::identity()
            .translate(10.0, -10.0, 30.0)
            .rotate(self.angle * 4.0, 0.0, 0.0, 1.0)
            .rotate(self.angle * 4.0, 0.0, 1.0, 0.0);

        match self.mode {
            Mode::Filled => {
                self.context
                    .draw_mesh(&mut self.surface, &self.tetrahedron, &tetra)?;
                self.context
                    .draw_mesh(&mut self.surface, &self.tetrahedron, &mirrored)?;
                self.context.draw_mesh(&mut self.surface, &self.cube, &cube)?;
            }
            Mode::Wireframe => {
                // nearer edges brighter, fading out past the tetrahedra
                let fade = Some(DepthFade {
                    threshold: 1.5,
                    scale: -6.0,
                });
                self.context.draw_wireframe(
                    &mut self.surface,
                    &self.wire_tetrahedron,
                    &tetra,
                    fade,
                )?;
                self.context
                    .draw_wireframe(&mut self.surface, &self.wire_cube, &cube, fade)?;
            }
        }

        let mut out = stdout();
        self.surface.present(&mut out)?;
        out.flush()?;
        Ok(())
    }
}
