//! Export the GraphQL schema as SDL.
//!
//! Usage: cargo run --bin export-schema [output_path]

use api::gql::build_schema;
use api::AppState;

fn main() -> anyhow::Result<()> {
    let sdl = build_schema(AppState::in_memory()).sdl();

    if let Some(target) = std::env::args().nth(1) {
        std::fs::write(&target, &sdl)?;
        eprintln!("Schema exported to {target} ({} bytes)", sdl.len());
    } else {
        println!("{sdl}");
    }

    Ok(())
}
