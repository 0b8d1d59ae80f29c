pub mod limited_spawner;
pub mod natsort;
