pub mod image_io;
pub mod report;

pub use image_io::{check_rgb_dims, load_index_raster, load_rgb, save_mask_png, save_overlay_png};
pub use report::{result_path, write_report, DetectionReport};
