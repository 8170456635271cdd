/*
 * Plexus
 *
 * An animated network background: a field of slowly drifting nodes, each
 * sweeping a small orbit, joined by faint edges whenever two of them come
 * within reach of each other. The whole field shifts gently with the pointer.
 *
 * Set RUST_LOG=debug to follow resizes and frame skips.
 */

use plexus::app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    nannou::app(app::model)
        .update(app::update)
        .exit(app::exit)
        .run();
}
