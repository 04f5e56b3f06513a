use std::sync::Arc;

use parking_lot::Mutex;
use rand::Rng;

use voxel_display::{GridConfig, VoxelGrid, WriterDevice};

fn config_from_args<I: IntoIterator<Item = String>>(args: I) -> GridConfig {
    let dims: Vec<usize> = args
        .into_iter()
        .filter_map(|arg| match arg.parse::<usize>() {
            Ok(dim) => Some(dim),
            Err(err) => {
                log::warn!("ignoring dimension {arg:?}: {err}");
                None
            }
        })
        .collect();

    match dims[..] {
        [width, depth, height] => GridConfig {
            width,
            depth,
            height,
        },
        [] => GridConfig::default(),
        _ => {
            let config = GridConfig::default();
            log::warn!(
                "expected width depth height, got {} dimensions; using {}x{}x{}",
                dims.len(),
                config.width,
                config.depth,
                config.height
            );
            config
        }
    }
}

fn main() {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = config_from_args(std::env::args().skip(1));
    let device = Arc::new(Mutex::new(WriterDevice::new(std::io::stdout())));

    let mut grid = VoxelGrid::from_config(&config);
    grid.set_device(&device);

    // light a random scattering of voxels, then the main diagonal
    let mut rng = rand::thread_rng();
    let count = (config.width * config.depth * config.height) / 8;
    for _ in 0..count {
        let x = rng.gen_range(0..config.width.max(1)) as i64;
        let y = rng.gen_range(0..config.depth.max(1)) as i64;
        let z = rng.gen_range(0..config.height.max(1)) as i64;
        grid.toggle_voxel(x, y, z);
    }
    grid.flush(None);

    grid.zero();
    let side = config.width.min(config.depth).min(config.height) as i64;
    for i in 0..side {
        if let Err(err) = grid.set_voxel(i, i, i, true) {
            log::warn!("{err}");
        }
    }
    grid.flush(None);

    log::info!("{} voxels lit", grid.lit_count());
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_config_from_args() {
        let config = config_from_args(args(&["4", "3", "2"]));
        assert_eq!((config.width, config.depth, config.height), (4, 3, 2));

        let config = config_from_args(args(&[]));
        assert_eq!((config.width, config.depth, config.height), (8, 8, 8));

        // too few dimensions falls back to the default
        let config = config_from_args(args(&["4", "3"]));
        assert_eq!((config.width, config.depth, config.height), (8, 8, 8));

        // unparsable arguments are dropped, not treated as dimensions
        let config = config_from_args(args(&["4", "x", "3", "2"]));
        assert_eq!((config.width, config.depth, config.height), (4, 3, 2));

        let config = config_from_args(args(&["4", "-3", "2"]));
        assert_eq!((config.width, config.depth, config.height), (8, 8, 8));
    }
}
