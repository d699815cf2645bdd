//! Spinning polyhedra demo.
//!
//! Controls: space pauses the animation, `m` switches between filled and
//! wireframe rendering, `q` or Esc quits.

use anyhow::Result;
use rast3d_terminal::App;

fn main() -> Result<()> {
    // the alternate screen owns stdout, so diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    App::new()?.run()
}
