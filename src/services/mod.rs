pub mod tops;
