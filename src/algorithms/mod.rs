pub mod exploration;
