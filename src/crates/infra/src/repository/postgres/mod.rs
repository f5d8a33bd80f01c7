pub mod db_data;

mod singer;
pub use singer::SingerRepositoryImpl;
