pub mod palette;
pub mod sim_vis2d;
