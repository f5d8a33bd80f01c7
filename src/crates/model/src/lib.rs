pub mod singer;
