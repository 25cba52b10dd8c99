//! Writes the demo scene (a cube and a cylinder) to `test.stl`.

use std::process::ExitCode;

use log::error;
use stl_solids::{CubeParams, CylinderParams, Document, StlResult, WriterConfig};

const OUTPUT_PATH: &str = "test.stl";

fn run() -> StlResult<()> {
    let mut doc = Document::new();
    doc.add_shape(&CubeParams::new(0.0, 0.0, 0.0, 5.0).into())?;
    doc.add_shape(&CylinderParams::new(100.0, 0.0, 0.0, 3.0, 10.0, 10).into())?;
    doc.save(OUTPUT_PATH, &WriterConfig::default())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("failed to write {OUTPUT_PATH}: {err}");
            ExitCode::FAILURE
        }
    }
}
